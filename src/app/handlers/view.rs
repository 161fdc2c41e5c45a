//! Handler für Kamera, Viewport, Ebenen und Mesh-Vorschau.

use super::warn_on_error;
use crate::app::state::Layer;
use crate::app::use_cases;
use crate::app::AppState;

/// Setzt die Kamera auf den Startzustand zurück.
pub fn reset_camera(state: &mut AppState) {
    use_cases::camera::reset_camera(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::camera::set_viewport_size(state, size);
}

/// Dreht die Kamera um ihren Zielpunkt.
pub fn orbit(state: &mut AppState, delta_px: glam::Vec2) {
    use_cases::camera::orbit(state, delta_px);
}

/// Zoomt die Kamera.
pub fn zoom(state: &mut AppState, factor: f32) {
    use_cases::camera::zoom(state, factor);
}

/// Blendet eine Ebene ein oder aus.
pub fn set_layer_visibility(state: &mut AppState, layer: Layer, visible: bool) {
    state.view.set_visible(layer, visible);
    log::info!("Ebene {:?}: {}", layer, if visible { "sichtbar" } else { "ausgeblendet" });
}

/// Erzeugt die Mesh-Vorschau.
pub fn create_mesh(state: &mut AppState) {
    warn_on_error("Mesh erzeugen", use_cases::export::create_mesh(state));
}

/// Setzt die Röhrendicke des Export-Mesh.
pub fn set_mesh_thickness(state: &mut AppState, thickness: f32) {
    use_cases::export::set_mesh_thickness(state, thickness);
}
