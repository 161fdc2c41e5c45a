//! Use-Case: Positionen über Panel-Felder und Manipulator-Drag setzen.
//!
//! Das Positions-Panel liest Werte live aus der Szene; Feld-Edits und
//! Manipulator-Drags schreiben beide über `set_entity_position`.

use crate::app::state::ManipulatorDrag;
use crate::app::AppState;
use crate::core::{EditError, EntityRef};
use glam::{Vec2, Vec3};

/// Setzt die Position eines Punkts oder Forcefields.
pub fn set_entity_position(
    state: &mut AppState,
    target: EntityRef,
    position: Vec3,
) -> Result<(), EditError> {
    if !position.is_finite() {
        log::warn!("Ungültige Position für {} {} ignoriert", target.kind, target.id);
        return Ok(());
    }
    state
        .scene_mut()
        .set_position(target.kind, target.id, position)
}

/// Startet einen Drag am aktiven Manipulator-Griff.
///
/// Gezogen wird in der Ebene durch das Objekt senkrecht zur Blickrichtung.
pub fn begin_manipulator_drag(state: &mut AppState, screen_pos: Vec2) {
    let Some(target) = state.editor.manipulator.attached() else {
        log::debug!("Manipulator-Drag ohne angehängtes Objekt ignoriert");
        return;
    };
    let Some(position) = state.scene.position(target.kind, target.id) else {
        return;
    };
    let camera = &state.view.camera;
    let plane_normal = camera.forward();
    let Some(hit) = camera
        .ray_from_screen(screen_pos, state.view.viewport())
        .and_then(|ray| ray.intersect_plane(position, plane_normal))
    else {
        return;
    };

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    state.editor.drag = Some(ManipulatorDrag {
        target,
        plane_normal,
        grab_offset: position - hit,
    });
    log::debug!("Manipulator-Drag gestartet: {} {}", target.kind, target.id);
}

/// Bewegt das gezogene Objekt an die neue Pointer-Position.
pub fn update_manipulator_drag(state: &mut AppState, screen_pos: Vec2) -> Result<(), EditError> {
    let Some(drag) = state.editor.drag else {
        return Ok(());
    };
    let Some(position) = state.scene.position(drag.target.kind, drag.target.id) else {
        state.editor.drag = None;
        return Ok(());
    };
    let Some(hit) = state
        .view
        .camera
        .ray_from_screen(screen_pos, state.view.viewport())
        .and_then(|ray| ray.intersect_plane(position, drag.plane_normal))
    else {
        return Ok(());
    };
    set_entity_position(state, drag.target, hit + drag.grab_offset)
}

/// Beendet den Drag.
pub fn end_manipulator_drag(state: &mut AppState) {
    if state.editor.drag.take().is_some() {
        log::debug!("Manipulator-Drag beendet");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::use_cases::selection::toggle_select;
    use crate::core::EntityKind;
    use approx::assert_relative_eq;

    #[test]
    fn drag_moves_attached_point_with_pointer() {
        let mut state = AppState::new();
        state.view.viewport_size = [800.0, 600.0];
        let id = state.scene_mut().add_point(Vec3::ZERO);
        toggle_select(&mut state, EntityRef::point(id), false).expect("vorhanden");

        let viewport = state.view.viewport();
        let start = state
            .view
            .camera
            .world_to_screen(Vec3::ZERO, viewport)
            .expect("sichtbar");
        begin_manipulator_drag(&mut state, start);
        assert!(state.editor.drag.is_some());

        update_manipulator_drag(&mut state, start).expect("gültig");
        let unchanged = state.scene.position(EntityKind::Point, id).expect("vorhanden");
        assert_relative_eq!(unchanged.length(), 0.0, epsilon = 1e-2);

        update_manipulator_drag(&mut state, start + Vec2::new(40.0, 0.0)).expect("gültig");
        let moved = state.scene.position(EntityKind::Point, id).expect("vorhanden");
        assert!(moved.length() > 1.0);

        end_manipulator_drag(&mut state);
        assert!(state.editor.drag.is_none());
    }

    #[test]
    fn drag_without_attachment_is_ignored() {
        let mut state = AppState::new();
        state.view.viewport_size = [800.0, 600.0];
        begin_manipulator_drag(&mut state, Vec2::new(400.0, 300.0));
        assert!(state.editor.drag.is_none());
        assert!(!state.can_undo());
    }

    #[test]
    fn field_edit_writes_position() {
        let mut state = AppState::new();
        let id = state.scene_mut().add_point(Vec3::ZERO);
        set_entity_position(&mut state, EntityRef::point(id), Vec3::new(1.0, 2.0, 3.0))
            .expect("vorhanden");
        assert_eq!(
            state.scene.position(EntityKind::Point, id),
            Some(Vec3::new(1.0, 2.0, 3.0))
        );
    }
}
