//! Builder für Render-Szenen aus dem AppState.
//!
//! Löst die Visual-Policy auf: Punkte rot/grün, Forcefields grün/blau
//! (halbtransparent), Connections blau-dünn/orange-dick, Gruppen im
//! gemeinsamen Gruppenmaterial.

use crate::app::state::Layer;
use crate::app::AppState;
use crate::core::EntityRef;
use crate::shared::{RenderGrid, RenderLine, RenderScene, RenderSphere};

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    let options = &state.options;
    let scene = &state.scene;

    let points = if state.view.is_visible(Layer::Points) {
        scene
            .points()
            .map(|p| RenderSphere {
                id: p.id,
                center: p.position,
                radius: options.point_radius,
                color: if state.selection.is_selected(EntityRef::point(p.id)) {
                    options.point_color_selected
                } else {
                    options.point_color_default
                },
            })
            .collect()
    } else {
        Vec::new()
    };

    let forcefields = if state.view.is_visible(Layer::Forcefields) {
        scene
            .forcefields()
            .map(|f| RenderSphere {
                id: f.id,
                center: f.position,
                radius: f.radius(),
                color: if state.selection.is_selected(EntityRef::forcefield(f.id)) {
                    options.forcefield_color_selected
                } else {
                    options.forcefield_color_default
                },
            })
            .collect()
    } else {
        Vec::new()
    };

    let connections = scene
        .connections()
        .map(|c| {
            let (color, width) = if state.selection.is_selected(EntityRef::connection(c.id)) {
                (options.connection_color_selected, options.connection_width_selected)
            } else if scene.group_of(c.id).is_some() {
                (options.group_color, options.connection_width_selected)
            } else {
                (options.connection_color_default, options.connection_width_default)
            };
            RenderLine {
                id: c.id,
                points: c.geometry().to_vec(),
                color,
                width,
            }
        })
        .collect();

    let mesh_preview = (state.view.is_visible(Layer::Mesh) && !state.view.mesh.vertices.is_empty())
        .then(|| RenderLine {
            id: 0,
            points: state.view.mesh.vertices.clone(),
            color: options.mesh_color,
            width: state.view.mesh.thickness,
        });

    let manipulator = state
        .editor
        .manipulator
        .attached()
        .and_then(|target| scene.position(target.kind, target.id));

    RenderScene {
        camera: state.view.camera.clone(),
        viewport_size,
        points,
        forcefields,
        connections,
        mesh_preview,
        manipulator,
        manipulator_color: options.manipulator_color,
        grid: RenderGrid {
            size: options.grid_size,
            divisions: options.grid_divisions,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::state::Layer;
    use crate::app::use_cases::selection::toggle_select;
    use crate::app::AppState;
    use crate::core::EntityRef;
    use glam::Vec3;

    #[test]
    fn selected_entities_use_selected_colors() {
        let mut state = AppState::new();
        let a = state.scene_mut().add_point(Vec3::ZERO);
        let b = state.scene_mut().add_point(Vec3::X);
        let ff = state
            .scene_mut()
            .add_forcefield(Vec3::Y, 20.0)
            .expect("gültig");
        toggle_select(&mut state, EntityRef::point(a), false).expect("vorhanden");
        toggle_select(&mut state, EntityRef::forcefield(ff), false).expect("vorhanden");

        let scene = build(&state, [1280.0, 720.0]);

        let color_of = |id: u64| {
            scene
                .points
                .iter()
                .find(|p| p.id == id)
                .map(|p| p.color)
                .expect("Punkt gerendert")
        };
        assert_eq!(color_of(a), state.options.point_color_selected);
        assert_eq!(color_of(b), state.options.point_color_default);
        assert_eq!(scene.forcefields[0].color, state.options.forcefield_color_selected);
        assert_eq!(scene.forcefields[0].radius, 10.0);
    }

    #[test]
    fn selected_and_grouped_connections_are_thick() {
        let mut state = AppState::new();
        let a = state.scene_mut().add_point(Vec3::ZERO);
        let b = state.scene_mut().add_point(Vec3::X);
        let c = state.scene_mut().add_point(Vec3::Z);
        let ab = state.scene_mut().add_connection(a, b).expect("Punkte existieren");
        let ac = state.scene_mut().add_connection(a, c).expect("Punkte existieren");
        state.scene_mut().create_group("G", [ac]).expect("gültig");
        toggle_select(&mut state, EntityRef::connection(ab), false).expect("vorhanden");

        let scene = build(&state, [1280.0, 720.0]);

        let options = &state.options;
        assert_eq!(scene.connections[0].color, options.connection_color_selected);
        assert_eq!(scene.connections[0].width, options.connection_width_selected);
        assert_eq!(scene.connections[1].color, options.group_color);
        assert_eq!(scene.connections[1].width, options.connection_width_selected);
    }

    #[test]
    fn hidden_layers_are_omitted() {
        let mut state = AppState::new();
        state.scene_mut().add_point(Vec3::ZERO);
        state
            .scene_mut()
            .add_forcefield(Vec3::Y, 20.0)
            .expect("gültig");
        state.view.set_visible(Layer::Points, false);
        state.view.set_visible(Layer::Forcefields, false);

        let scene = build(&state, [1280.0, 720.0]);

        assert!(scene.points.is_empty());
        assert!(scene.forcefields.is_empty());
        assert!(scene.mesh_preview.is_none());
    }

    #[test]
    fn manipulator_follows_single_selection() {
        let mut state = AppState::new();
        let a = state.scene_mut().add_point(Vec3::new(3.0, 4.0, 5.0));
        let b = state.scene_mut().add_point(Vec3::ZERO);

        toggle_select(&mut state, EntityRef::point(a), false).expect("vorhanden");
        assert_eq!(build(&state, [800.0, 600.0]).manipulator, Some(Vec3::new(3.0, 4.0, 5.0)));

        toggle_select(&mut state, EntityRef::point(b), true).expect("vorhanden");
        assert_eq!(build(&state, [800.0, 600.0]).manipulator, None);
    }
}
