//! Export-Vorbereitung: geordnete Vertex-Liste aller Connection-Geometrien.
//!
//! Die eigentliche Serialisierung (STL) ist nicht Teil des Editors; hier wird
//! nur die Vertex-Liste für die Mesh-Vorschau und die Röhrendicke verwaltet.

use crate::app::AppState;
use crate::core::{EditError, EntityKind, Scene};
use crate::shared::EditorOptions;
use glam::Vec3;

/// Sammelt die Vertices aller Connections: erst gerade, dann gekrümmte,
/// jeweils in Registry-Reihenfolge.
pub fn collect_export_vertices(scene: &Scene) -> Vec<Vec3> {
    scene
        .straight_connections()
        .chain(scene.curved_connections())
        .flat_map(|conn| conn.geometry().iter().copied())
        .collect()
}

/// Erzeugt die Mesh-Vorschau aus allen Connections und blendet sie ein.
pub fn create_mesh(state: &mut AppState) -> Result<usize, EditError> {
    let vertices = collect_export_vertices(&state.scene);
    if vertices.is_empty() {
        return Err(EditError::EmptySelection {
            kind: EntityKind::Connection,
            required: 1,
            actual: 0,
        });
    }

    let count = vertices.len();
    state.view.mesh.vertices = vertices;
    state.view.show_mesh = true;
    log::info!(
        "Mesh-Vorschau erzeugt: {} Vertices, Dicke {:.2}",
        count,
        state.view.mesh.thickness
    );
    Ok(count)
}

/// Setzt die Röhrendicke (geklemmt).
pub fn set_mesh_thickness(state: &mut AppState, thickness: f32) {
    state.view.mesh.thickness = EditorOptions::clamp_mesh_thickness(thickness);
}
