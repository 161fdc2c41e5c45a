//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::state::camera_from_options;
use crate::app::AppState;
use glam::Vec2;

/// Setzt die Kamera auf die Startposition aus den Optionen zurück.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = camera_from_options(&state.options);
}

/// Dreht die Kamera um ihren Zielpunkt (Maus-Delta in Pixel).
pub fn orbit(state: &mut AppState, delta_px: Vec2) {
    let speed = state.options.camera_orbit_speed;
    state
        .view
        .camera
        .orbit(-delta_px.x * speed, delta_px.y * speed);
}

/// Zoomt multiplikativ (Faktor > 1 entfernt die Kamera).
pub fn zoom(state: &mut AppState, factor: f32) {
    if !factor.is_finite() || factor <= 0.0 {
        log::warn!("Ungültiger Zoom-Faktor {} ignoriert", factor);
        return;
    }
    state.view.camera.zoom_by(factor);
}

/// Übernimmt die aktuelle Viewport-Größe.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn reset_camera_restores_start_position() {
        let mut state = AppState::new();
        orbit(&mut state, Vec2::new(120.0, -40.0));
        zoom(&mut state, 0.5);

        reset_camera(&mut state);

        let pos = state.view.camera.position();
        assert_relative_eq!(pos.x, 500.0, epsilon = 1e-2);
        assert_relative_eq!(pos.y, 500.0, epsilon = 1e-2);
        assert_relative_eq!(pos.z, 1000.0, epsilon = 1e-2);
    }

    #[test]
    fn zoom_in_then_out_returns_to_original() {
        let mut state = AppState::new();
        let original = state.view.camera.distance;

        let step = state.options.camera_scroll_zoom_step;
        zoom(&mut state, 1.0 / step);
        zoom(&mut state, step);

        assert_relative_eq!(state.view.camera.distance, original, epsilon = 1e-2);
    }

    #[test]
    fn zoom_is_clamped_to_distance_range() {
        let mut state = AppState::new();
        zoom(&mut state, 100.0);
        assert_eq!(state.view.camera.distance, state.options.camera_max_distance);
    }

    #[test]
    fn invalid_zoom_factor_is_ignored() {
        let mut state = AppState::new();
        let before = state.view.camera.distance;
        zoom(&mut state, 0.0);
        zoom(&mut state, f32::NAN);
        assert_eq!(state.view.camera.distance, before);
    }

    #[test]
    fn horizontal_orbit_keeps_distance() {
        let mut state = AppState::new();
        let before = state.view.camera.distance;
        let yaw_before = state.view.camera.yaw;

        orbit(&mut state, Vec2::new(100.0, 0.0));

        assert!(state.view.camera.yaw < yaw_before);
        assert_relative_eq!(
            (state.view.camera.position() - state.view.camera.target).length(),
            before,
            epsilon = 1e-2
        );
    }
}
