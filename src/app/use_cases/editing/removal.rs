//! Use-Case: Selektierte Objekte einer Art entfernen (inkl. Kaskade).

use crate::app::use_cases::selection::forget_removed;
use crate::app::AppState;
use crate::core::{EditError, EntityKind, RemovalReport};

/// Liefert die selektierten IDs einer Art, sofern mindestens `required` selektiert sind.
pub fn require_selected(
    state: &AppState,
    kind: EntityKind,
    required: usize,
) -> Result<Vec<u64>, EditError> {
    let ids: Vec<u64> = state.selection.set(kind).iter().copied().collect();
    if ids.len() < required {
        return Err(EditError::EmptySelection {
            kind,
            required,
            actual: ids.len(),
        });
    }
    Ok(ids)
}

/// Entfernt alle selektierten Objekte einer Art.
///
/// Punkte nehmen ihre Connections mit, Forcefields die von ihnen gesteuerten
/// Kurven. Entfernte Objekte verschwinden auch aus allen Selektionen.
pub fn remove_selected(state: &mut AppState, kind: EntityKind) -> Result<RemovalReport, EditError> {
    let ids = require_selected(state, kind, 1)?;

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let scene = state.scene_mut();
    let mut report = RemovalReport::default();
    for id in ids {
        match scene.remove(kind, id) {
            Ok(single) => report.merge(single),
            // bereits durch eine Kaskade entfernt
            Err(EditError::NotFound { .. }) if kind == EntityKind::Connection => {}
            Err(e) => log::warn!("{}", e),
        }
    }

    forget_removed(state, kind, &report);
    log::info!(
        "{} {} entfernt, {} abhängige Connection(s) mit entfernt",
        report.removed.len(),
        kind,
        report.cascaded_connections.len()
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EntityRef;
    use crate::app::use_cases::selection::toggle_select;
    use glam::Vec3;

    #[test]
    fn removing_points_cascades_and_cleans_selection() {
        let mut state = AppState::new();
        let a = state.scene_mut().add_point(Vec3::ZERO);
        let b = state.scene_mut().add_point(Vec3::X * 100.0);
        let conn = state.scene_mut().add_connection(a, b).expect("Punkte existieren");
        toggle_select(&mut state, EntityRef::connection(conn), false).expect("vorhanden");
        toggle_select(&mut state, EntityRef::point(a), false).expect("vorhanden");

        let report = remove_selected(&mut state, EntityKind::Point).expect("selektiert");

        assert_eq!(report.cascaded_connections, vec![conn]);
        assert!(state.selection.is_empty());
        assert_eq!(state.editor.manipulator.attached(), None);
        assert_eq!(state.editor.position_panel, None);
        assert!(state.can_undo());
    }

    #[test]
    fn empty_selection_is_rejected_without_snapshot() {
        let mut state = AppState::new();
        assert_eq!(
            remove_selected(&mut state, EntityKind::Forcefield),
            Err(EditError::EmptySelection {
                kind: EntityKind::Forcefield,
                required: 1,
                actual: 0
            })
        );
        assert!(!state.can_undo());
    }
}
