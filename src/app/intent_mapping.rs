//! Mapping von UI-Intents auf mutierende App-Commands.

use super::state::InteractionMode;
use super::use_cases::selection::resolve_pointer_hit;
use super::{AppCommand, AppIntent, AppState};
use crate::core::EntityKind;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],

        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraOrbit { delta_px } => vec![AppCommand::OrbitCamera { delta_px }],
        AppIntent::CameraZoom { factor } => vec![AppCommand::ZoomCamera { factor }],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],

        // Fehlschuss ist ein No-op: die Selektion bleibt erhalten
        AppIntent::PointerDown { screen_pos, shift } => resolve_pointer_hit(state, screen_pos)
            .map(|target| AppCommand::SelectEntity {
                target,
                additive: shift,
            })
            .into_iter()
            .collect(),
        AppIntent::ManipulatorDragStarted { screen_pos } => {
            vec![AppCommand::BeginManipulatorDrag { screen_pos }]
        }
        AppIntent::ManipulatorDragged { screen_pos } => {
            vec![AppCommand::UpdateManipulatorDrag { screen_pos }]
        }
        AppIntent::ManipulatorDragEnded => vec![AppCommand::EndManipulatorDrag],

        AppIntent::DeselectKindRequested { kind } => {
            vec![AppCommand::ClearSelection { kind: Some(kind) }]
        }
        AppIntent::DeselectAllRequested => vec![AppCommand::ClearSelection { kind: None }],
        AppIntent::SelectNextRequested { kind, additive } => {
            vec![AppCommand::SelectNext { kind, additive }]
        }
        AppIntent::ToggleForcefieldEditRequested => {
            let mode = match state.editor.mode {
                InteractionMode::Standard => InteractionMode::ForcefieldEdit,
                InteractionMode::ForcefieldEdit => InteractionMode::Standard,
            };
            vec![AppCommand::SetInteractionMode { mode }]
        }

        AppIntent::PropertyEditStarted => vec![AppCommand::BeginPropertyEdit],
        AppIntent::AddPointRequested => vec![AppCommand::AddPoint],
        AppIntent::RemovePointsRequested => vec![AppCommand::RemoveSelectedPoints],
        AppIntent::ConnectPointsRequested => vec![AppCommand::ConnectSelectedPoints],
        AppIntent::RemoveConnectionsRequested => vec![AppCommand::RemoveSelectedConnections],
        AppIntent::AddForcefieldRequested => vec![AppCommand::AddForcefield],
        AppIntent::RemoveForcefieldsRequested => vec![AppCommand::RemoveSelectedForcefields],
        AppIntent::DeleteSelectedRequested => match delete_target(state) {
            Some(EntityKind::Forcefield) => vec![AppCommand::RemoveSelectedForcefields],
            Some(EntityKind::Connection) => vec![AppCommand::RemoveSelectedConnections],
            Some(EntityKind::Point) => vec![AppCommand::RemoveSelectedPoints],
            None => vec![],
        },
        AppIntent::ApplyForceRequested => vec![AppCommand::ApplyForce],
        AppIntent::LevelPointsRequested { axis } => {
            vec![AppCommand::LevelSelectedPoints { axis }]
        }
        AppIntent::PositionFieldEdited { axis, value } => {
            let Some(target) = state.editor.position_panel else {
                return vec![];
            };
            let Some(current) = state.scene.position(target.kind, target.id) else {
                return vec![];
            };
            vec![AppCommand::SetEntityPosition {
                target,
                position: axis.with(current, value),
            }]
        }
        AppIntent::ForcefieldDiameterEdited { id, diameter } => {
            vec![AppCommand::SetForcefieldDiameter { id, diameter }]
        }

        AppIntent::CreateGroupRequested => vec![AppCommand::CreateConnectionGroup],
        AppIntent::ClearGroupsRequested => vec![AppCommand::ClearConnectionGroups],
        AppIntent::GroupRigidityEdited { group_id, rigidity } => {
            vec![AppCommand::SetGroupRigidity { group_id, rigidity }]
        }

        AppIntent::CreateMeshRequested => vec![AppCommand::CreateMesh],
        AppIntent::MeshThicknessEdited { thickness } => {
            vec![AppCommand::SetMeshThickness { thickness }]
        }
        AppIntent::LayerVisibilityToggled { layer } => vec![AppCommand::SetLayerVisibility {
            layer,
            visible: !state.view.is_visible(layer),
        }],

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

/// Art, die "Selektion löschen" trifft: Forcefields vor Connections vor Punkten.
fn delete_target(state: &AppState) -> Option<EntityKind> {
    [
        EntityKind::Forcefield,
        EntityKind::Connection,
        EntityKind::Point,
    ]
    .into_iter()
    .find(|&kind| !state.selection.set(kind).is_empty())
}

#[cfg(test)]
mod tests;
