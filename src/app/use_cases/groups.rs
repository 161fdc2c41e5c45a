//! Use-Cases für Connection-Gruppen.

use super::editing::require_selected;
use crate::app::AppState;
use crate::core::{EditError, EntityKind};

/// Legt aus den selektierten Connections eine neue Gruppe an.
///
/// Bereits gruppierte Connections wechseln in die neue Gruppe.
/// Die Connection-Selektion ist danach leer.
pub fn create_connection_group(state: &mut AppState) -> Result<u64, EditError> {
    let members = require_selected(state, EntityKind::Connection, 1)?;

    state.record_undo_snapshot();

    let name = format!("Gruppe {}", state.scene.next_group_number());
    let group_id = state.scene_mut().create_group(name.clone(), members.iter().copied())?;

    state.selection.connections.clear();
    state.editor.connection_cursor = None;
    log::info!("{} mit {} Connection(s) angelegt", name, members.len());
    Ok(group_id)
}

/// Entfernt alle Gruppen; die Connections bleiben erhalten.
pub fn clear_connection_groups(state: &mut AppState) -> usize {
    if state.scene.group_count() == 0 {
        return 0;
    }
    state.record_undo_snapshot();
    let removed = state.scene_mut().clear_groups();
    log::info!("{} Gruppe(n) aufgelöst", removed);
    removed
}

/// Setzt die Steifigkeit einer Gruppe.
///
/// Der Wert wird nur gespeichert; die Kurvengeometrie bleibt unverändert.
pub fn set_group_rigidity(state: &mut AppState, group_id: u64, rigidity: f32) {
    match state.scene_mut().group_mut(group_id) {
        Some(group) => {
            group.set_rigidity(rigidity);
            log::info!("Rigidity von '{}' auf {:.2} gesetzt", group.name, group.rigidity());
        }
        None => log::warn!("Gruppe {} existiert nicht", group_id),
    }
}
