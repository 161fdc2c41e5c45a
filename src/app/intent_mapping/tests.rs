use crate::app::state::{InteractionMode, Layer};
use crate::app::use_cases::selection::toggle_select;
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::{Axis, EntityKind, EntityRef};
use glam::{Vec2, Vec3};

use super::map_intent_to_commands;

fn state_with_point_at_origin() -> (AppState, u64) {
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 600.0];
    let id = state.scene_mut().add_point(Vec3::ZERO);
    (state, id)
}

#[test]
fn pointer_down_on_point_maps_to_select_entity() {
    let (state, id) = state_with_point_at_origin();
    let center = state
        .view
        .camera
        .world_to_screen(Vec3::ZERO, state.view.viewport())
        .expect("Punkt vor der Kamera");

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerDown {
            screen_pos: center,
            shift: true,
        },
    );

    assert_eq!(commands.len(), 1);
    assert!(matches!(
        commands[0],
        AppCommand::SelectEntity { target, additive: true } if target == EntityRef::point(id)
    ));
}

#[test]
fn pointer_miss_maps_to_nothing() {
    let (state, _) = state_with_point_at_origin();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerDown {
            screen_pos: Vec2::new(2.0, 2.0),
            shift: false,
        },
    );

    assert!(commands.is_empty());
}

#[test]
fn delete_selected_prefers_forcefields_over_connections_and_points() {
    let mut state = AppState::new();
    let a = state.scene_mut().add_point(Vec3::ZERO);
    let b = state.scene_mut().add_point(Vec3::X);
    let conn = state.scene_mut().add_connection(a, b).expect("Punkte existieren");
    let ff = state
        .scene_mut()
        .add_forcefield(Vec3::Y, 20.0)
        .expect("gültig");
    toggle_select(&mut state, EntityRef::point(a), false).expect("vorhanden");
    toggle_select(&mut state, EntityRef::connection(conn), false).expect("vorhanden");

    let commands = map_intent_to_commands(&state, AppIntent::DeleteSelectedRequested);
    assert!(matches!(commands[..], [AppCommand::RemoveSelectedConnections]));

    toggle_select(&mut state, EntityRef::forcefield(ff), false).expect("vorhanden");
    let commands = map_intent_to_commands(&state, AppIntent::DeleteSelectedRequested);
    assert!(matches!(commands[..], [AppCommand::RemoveSelectedForcefields]));
}

#[test]
fn delete_selected_without_selection_maps_to_nothing() {
    let state = AppState::new();
    assert!(map_intent_to_commands(&state, AppIntent::DeleteSelectedRequested).is_empty());
}

#[test]
fn toggle_forcefield_edit_switches_mode() {
    let mut state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::ToggleForcefieldEditRequested);
    assert!(matches!(
        commands[..],
        [AppCommand::SetInteractionMode {
            mode: InteractionMode::ForcefieldEdit
        }]
    ));

    state.editor.mode = InteractionMode::ForcefieldEdit;
    let commands = map_intent_to_commands(&state, AppIntent::ToggleForcefieldEditRequested);
    assert!(matches!(
        commands[..],
        [AppCommand::SetInteractionMode {
            mode: InteractionMode::Standard
        }]
    ));
}

#[test]
fn position_field_edit_keeps_other_axes() {
    let mut state = AppState::new();
    let id = state.scene_mut().add_point(Vec3::new(1.0, 2.0, 3.0));
    toggle_select(&mut state, EntityRef::point(id), false).expect("vorhanden");

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PositionFieldEdited {
            axis: Axis::Y,
            value: 42.0,
        },
    );

    assert_eq!(commands.len(), 1);
    match &commands[0] {
        AppCommand::SetEntityPosition { target, position } => {
            assert_eq!(*target, EntityRef::point(id));
            assert_eq!(*position, Vec3::new(1.0, 42.0, 3.0));
        }
        other => panic!("unerwarteter Command: {:?}", other),
    }
}

#[test]
fn position_field_edit_without_panel_maps_to_nothing() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::PositionFieldEdited {
            axis: Axis::X,
            value: 1.0,
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn layer_toggle_inverts_current_visibility() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::LayerVisibilityToggled {
            layer: Layer::Points,
        },
    );

    assert!(matches!(
        commands[..],
        [AppCommand::SetLayerVisibility {
            layer: Layer::Points,
            visible: false
        }]
    ));
}

#[test]
fn deselect_all_maps_to_clear_without_kind() {
    let state = AppState::new();
    let commands = map_intent_to_commands(&state, AppIntent::DeselectAllRequested);
    assert!(matches!(commands[..], [AppCommand::ClearSelection { kind: None }]));

    let commands = map_intent_to_commands(
        &state,
        AppIntent::DeselectKindRequested {
            kind: EntityKind::Forcefield,
        },
    );
    assert!(matches!(
        commands[..],
        [AppCommand::ClearSelection {
            kind: Some(EntityKind::Forcefield)
        }]
    ));
}
