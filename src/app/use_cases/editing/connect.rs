//! Use-Case: Selektierte Punkte zu einer Kette verbinden.

use super::removal::require_selected;
use crate::app::AppState;
use crate::core::{EditError, EntityKind};

/// Verbindet aufeinanderfolgende selektierte Punkte (Selektionsreihenfolge)
/// mit geraden Connections.
///
/// Benötigt mindestens zwei selektierte Punkte. Exakte Duplikate (gleicher
/// Start und gleiches Ende) werden übersprungen. Gibt die neuen IDs zurück.
pub fn connect_selected_points(state: &mut AppState) -> Result<Vec<u64>, EditError> {
    let ids = require_selected(state, EntityKind::Point, 2)?;

    let pairs: Vec<(u64, u64)> = ids
        .windows(2)
        .map(|w| (w[0], w[1]))
        .filter(|&(start, end)| {
            let duplicate = state.scene.has_connection_between(start, end);
            if duplicate {
                log::warn!("Connection {}→{} existiert bereits", start, end);
            }
            !duplicate
        })
        .collect();

    if pairs.is_empty() {
        return Ok(Vec::new());
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let scene = state.scene_mut();
    let mut created = Vec::with_capacity(pairs.len());
    for (start, end) in pairs {
        created.push(scene.add_connection(start, end)?);
    }
    log::info!("{} Connection(s) erstellt", created.len());
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn chains_points_in_selection_order() {
        let mut state = AppState::new();
        let a = state.scene_mut().add_point(Vec3::ZERO);
        let b = state.scene_mut().add_point(Vec3::X);
        let c = state.scene_mut().add_point(Vec3::Y);
        state.selection.points.extend([c, a, b]);

        let created = connect_selected_points(&mut state).expect("genug selektiert");
        assert_eq!(created.len(), 2);

        let pairs: Vec<(u64, u64)> = state
            .scene
            .connections()
            .map(|conn| (conn.start_id, conn.end_id))
            .collect();
        assert_eq!(pairs, vec![(c, a), (a, b)]);
    }

    #[test]
    fn duplicates_are_skipped() {
        let mut state = AppState::new();
        let a = state.scene_mut().add_point(Vec3::ZERO);
        let b = state.scene_mut().add_point(Vec3::X);
        state.selection.points.extend([a, b]);

        connect_selected_points(&mut state).expect("genug selektiert");
        let second = connect_selected_points(&mut state).expect("genug selektiert");

        assert!(second.is_empty());
        assert_eq!(state.count(EntityKind::Connection), 1);
    }

    #[test]
    fn requires_two_points() {
        let mut state = AppState::new();
        assert_eq!(
            connect_selected_points(&mut state),
            Err(EditError::EmptySelection {
                kind: EntityKind::Point,
                required: 2,
                actual: 0
            })
        );
    }
}
