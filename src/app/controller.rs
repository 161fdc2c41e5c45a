//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::use_cases::frame_update::{self, FrameStats};
use super::{AppCommand, AppIntent, AppState};
use crate::core::EntityKind;
use crate::shared::options::CURVE_SEGMENTS;
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Selektion ===
            AppCommand::SelectEntity { target, additive } => {
                handlers::selection::select_entity(state, target, additive)
            }
            AppCommand::ClearSelection { kind } => handlers::selection::clear(state, kind),
            AppCommand::SelectNext { kind, additive } => {
                handlers::selection::select_next(state, kind, additive)
            }
            AppCommand::SetInteractionMode { mode } => {
                handlers::selection::set_interaction_mode(state, mode)
            }

            // === Editing ===
            AppCommand::BeginPropertyEdit => handlers::editing::begin_property_edit(state),
            AppCommand::AddPoint => handlers::editing::add_point(state),
            AppCommand::RemoveSelectedPoints => {
                handlers::editing::remove_selected(state, EntityKind::Point)
            }
            AppCommand::ConnectSelectedPoints => handlers::editing::connect_selected_points(state),
            AppCommand::RemoveSelectedConnections => {
                handlers::editing::remove_selected(state, EntityKind::Connection)
            }
            AppCommand::AddForcefield => handlers::editing::add_forcefield(state),
            AppCommand::RemoveSelectedForcefields => {
                handlers::editing::remove_selected(state, EntityKind::Forcefield)
            }
            AppCommand::ApplyForce => handlers::curve::apply_force(state),
            AppCommand::LevelSelectedPoints { axis } => {
                handlers::editing::level_selected_points(state, axis)
            }
            AppCommand::SetEntityPosition { target, position } => {
                handlers::editing::set_entity_position(state, target, position)
            }
            AppCommand::SetForcefieldDiameter { id, diameter } => {
                handlers::editing::set_forcefield_diameter(state, id, diameter)
            }

            // === Manipulator ===
            AppCommand::BeginManipulatorDrag { screen_pos } => {
                handlers::editing::begin_manipulator_drag(state, screen_pos)
            }
            AppCommand::UpdateManipulatorDrag { screen_pos } => {
                handlers::editing::update_manipulator_drag(state, screen_pos)
            }
            AppCommand::EndManipulatorDrag => handlers::editing::end_manipulator_drag(state),

            // === Gruppen ===
            AppCommand::CreateConnectionGroup => handlers::groups::create_group(state),
            AppCommand::ClearConnectionGroups => handlers::groups::clear_groups(state),
            AppCommand::SetGroupRigidity { group_id, rigidity } => {
                handlers::groups::set_rigidity(state, group_id, rigidity)
            }

            // === Mesh & Sichtbarkeit ===
            AppCommand::CreateMesh => handlers::view::create_mesh(state),
            AppCommand::SetMeshThickness { thickness } => {
                handlers::view::set_mesh_thickness(state, thickness)
            }
            AppCommand::SetLayerVisibility { layer, visible } => {
                handlers::view::set_layer_visibility(state, layer, visible)
            }

            // === Kamera & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::OrbitCamera { delta_px } => handlers::view::orbit(state, delta_px),
            AppCommand::ZoomCamera { factor } => handlers::view::zoom(state, factor),
            AppCommand::ResetCamera => handlers::view::reset_camera(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        Ok(())
    }

    /// Frame-Tick: leitet die Geometrie aller Connections neu ab.
    ///
    /// Muss nach allen Intents des Frames laufen, damit Selektion und
    /// Geometrie im selben Frame konsistent sind.
    pub fn tick(&mut self, state: &mut AppState) -> FrameStats {
        if state.scene.count(EntityKind::Connection) == 0 {
            return FrameStats::default();
        }
        frame_update::refresh_connection_geometry(state.scene_mut(), CURVE_SEGMENTS)
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
