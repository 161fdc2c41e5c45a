//! Use-Case: Punkte anlegen und angleichen.

use super::removal::require_selected;
use crate::app::AppState;
use crate::core::{Axis, EditError, EntityKind};
use glam::Vec3;
use rand::Rng;

/// Zufällige Position in einem Quadrat der Bodenebene (y = 0).
pub(super) fn random_ground_position(state: &mut AppState) -> Vec3 {
    let half = state.options.placement_half_extent.abs().max(f32::EPSILON);
    let rng = &mut state.editor.placement_rng;
    Vec3::new(rng.gen_range(-half..half), 0.0, rng.gen_range(-half..half))
}

/// Legt einen neuen Punkt an.
///
/// Bei genau zwei selektierten Punkten liegt der neue Punkt in deren Mitte,
/// sonst zufällig auf der Bodenebene. Die Selektion bleibt unverändert.
pub fn add_point(state: &mut AppState) -> u64 {
    let selected = &state.selection.points;
    let midpoint = if selected.len() == 2 {
        let pa = state.scene.position(EntityKind::Point, selected[0]);
        let pb = state.scene.position(EntityKind::Point, selected[1]);
        pa.zip(pb).map(|(pa, pb)| (pa + pb) * 0.5)
    } else {
        None
    };
    let position = match midpoint {
        Some(mid) => mid,
        None => random_ground_position(state),
    };

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let id = state.scene_mut().add_point(position);
    log::info!(
        "Punkt {} angelegt bei ({:.1}, {:.1}, {:.1})",
        id,
        position.x,
        position.y,
        position.z
    );
    id
}

/// Setzt alle selektierten Punkte auf der Achse auf die Koordinate des ersten selektierten.
pub fn level_selected_points(state: &mut AppState, axis: Axis) -> Result<(), EditError> {
    let ids = require_selected(state, EntityKind::Point, 2)?;
    let reference = state
        .scene
        .position(EntityKind::Point, ids[0])
        .ok_or(EditError::NotFound {
            kind: EntityKind::Point,
            id: ids[0],
        })?;
    let value = axis.get(reference);

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let scene = state.scene_mut();
    for &id in &ids[1..] {
        if let Some(position) = scene.position(EntityKind::Point, id) {
            scene.set_position(EntityKind::Point, id, axis.with(position, value))?;
        }
    }
    log::info!(
        "{} Punkte auf {} = {:.2} angeglichen",
        ids.len(),
        axis.label(),
        value
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::EditorState;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded_state() -> AppState {
        let mut state = AppState::new();
        state.editor = EditorState::with_rng(StdRng::seed_from_u64(7));
        state
    }

    #[test]
    fn random_placement_stays_on_ground_square() {
        let mut state = seeded_state();
        for _ in 0..20 {
            let id = add_point(&mut state);
            let p = state
                .scene
                .position(EntityKind::Point, id)
                .expect("angelegt");
            assert_eq!(p.y, 0.0);
            assert!(p.x.abs() <= 500.0 && p.z.abs() <= 500.0);
        }
    }

    #[test]
    fn two_selected_points_yield_midpoint() {
        let mut state = seeded_state();
        let a = state.scene_mut().add_point(Vec3::new(-100.0, 20.0, 0.0));
        let b = state.scene_mut().add_point(Vec3::new(100.0, 40.0, 10.0));
        state.selection.points.extend([a, b]);

        let id = add_point(&mut state);
        assert_eq!(
            state.scene.position(EntityKind::Point, id),
            Some(Vec3::new(0.0, 30.0, 5.0))
        );
        assert_eq!(state.selection.points.len(), 2);
    }

    #[test]
    fn level_uses_first_selected_coordinate() {
        let mut state = seeded_state();
        let a = state.scene_mut().add_point(Vec3::new(0.0, 5.0, 0.0));
        let b = state.scene_mut().add_point(Vec3::new(1.0, 9.0, 2.0));
        let c = state.scene_mut().add_point(Vec3::new(3.0, -4.0, 1.0));
        state.selection.points.extend([b, a, c]);

        level_selected_points(&mut state, Axis::Y).expect("genug selektiert");

        for id in [a, b, c] {
            let p = state.scene.position(EntityKind::Point, id).expect("vorhanden");
            assert_eq!(p.y, 9.0);
        }
        assert_eq!(
            state.scene.position(EntityKind::Point, c),
            Some(Vec3::new(3.0, 9.0, 1.0))
        );
    }

    #[test]
    fn level_requires_two_points() {
        let mut state = seeded_state();
        let a = state.scene_mut().add_point(Vec3::ZERO);
        state.selection.points.insert(a);
        assert!(matches!(
            level_selected_points(&mut state, Axis::X),
            Err(EditError::EmptySelection { required: 2, actual: 1, .. })
        ));
    }
}
