//! Handler für Selektions-Operationen.

use super::warn_on_error;
use crate::app::history::Snapshot;
use crate::app::state::InteractionMode;
use crate::app::use_cases;
use crate::app::{AppState, SelectionState};
use crate::core::{EntityKind, EntityRef};
use std::sync::Arc;

/// Zeichnet einen Undo-Snapshot auf, wenn sich die Selektion geändert hat.
fn record_if_selection_changed(state: &mut AppState, old_selection: SelectionState) {
    if old_selection != state.selection {
        let snap = Snapshot {
            scene: Arc::clone(&state.scene),
            selection: old_selection,
        };
        state.history.record_snapshot(snap);
    }
}

/// Klick (oder Shift-Klick) auf ein Objekt.
pub fn select_entity(state: &mut AppState, target: EntityRef, additive: bool) {
    let old = state.selection.clone();
    warn_on_error(
        "Selektion",
        use_cases::selection::toggle_select(state, target, additive),
    );
    record_if_selection_changed(state, old);
}

/// Hebt die Selektion einer Art (oder aller Arten) auf.
pub fn clear(state: &mut AppState, kind: Option<EntityKind>) {
    let old = state.selection.clone();
    use_cases::selection::clear_selection(state, kind);
    record_if_selection_changed(state, old);
}

/// Selektiert das nächste Objekt einer Art (Tastatur-Zyklus).
pub fn select_next(state: &mut AppState, kind: EntityKind, additive: bool) {
    let old = state.selection.clone();
    warn_on_error(
        "Nächstes Objekt",
        use_cases::selection::select_next(state, kind, additive),
    );
    record_if_selection_changed(state, old);
}

/// Wechselt den Interaktionsmodus.
pub fn set_interaction_mode(state: &mut AppState, mode: InteractionMode) {
    let old = state.selection.clone();
    use_cases::selection::set_interaction_mode(state, mode);
    record_if_selection_changed(state, old);
}
