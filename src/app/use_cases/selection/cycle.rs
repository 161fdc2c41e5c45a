//! Use-Case: Tastatur-Zyklus durch alle Objekte einer Art.

use super::toggle::toggle_select;
use crate::app::AppState;
use crate::core::{EditError, EntityKind, EntityRef};

/// Selektiert das nächste Objekt einer Art in Erstellungsreihenfolge.
///
/// Der Cursor startet vor dem ersten Objekt und springt am Ende an den Anfang.
/// Gibt die neu angesprochene ID zurück, `None` bei leerer Sammlung.
pub fn select_next(
    state: &mut AppState,
    kind: EntityKind,
    additive: bool,
) -> Result<Option<u64>, EditError> {
    let ids = state.scene.ids(kind);
    if ids.is_empty() {
        log::debug!("Keine {} zum Durchschalten vorhanden", kind);
        return Ok(None);
    }

    let cursor = state.editor.cursor_mut(kind);
    let next = cursor.map_or(0, |c| (c + 1) % ids.len());
    *cursor = Some(next);

    let id = ids[next];
    toggle_select(state, EntityRef { kind, id }, additive)?;
    Ok(Some(id))
}
