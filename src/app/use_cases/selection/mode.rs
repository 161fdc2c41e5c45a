//! Use-Case: Interaktionsmodus wechseln.

use super::toggle::{clear_selection, toggle_select};
use crate::app::state::InteractionMode;
use crate::app::AppState;
use crate::core::{EntityKind, EntityRef};

/// Setzt den Interaktionsmodus.
///
/// Beim Eintritt in den Forcefield-Modus wird das erste Forcefield selektiert,
/// beim Verlassen wird die Forcefield-Selektion aufgehoben.
pub fn set_interaction_mode(state: &mut AppState, mode: InteractionMode) {
    if state.editor.mode == mode {
        return;
    }
    state.editor.mode = mode;

    match mode {
        InteractionMode::ForcefieldEdit => {
            let first = state.scene.forcefields().next().map(|f| f.id);
            if let Some(id) = first {
                if let Err(e) = toggle_select(state, EntityRef::forcefield(id), false) {
                    log::warn!("Forcefield-Modus: {}", e);
                }
            }
            state.editor.forcefield_cursor = first.map(|_| 0);
        }
        InteractionMode::Standard => clear_selection(state, Some(EntityKind::Forcefield)),
    }
    log::info!("Interaktionsmodus: {:?}", mode);
}
