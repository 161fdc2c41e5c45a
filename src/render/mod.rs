//! Zeichnen der `RenderScene` mit dem egui-Painter.
//!
//! Projiziert Weltkoordinaten über die Kamera in den Viewport. Kugeln werden
//! als Kreise mit tiefenabhängigem Radius gezeichnet (hinten zuerst),
//! Connections als Polylinien.

mod grid_renderer;
mod line_renderer;
mod sphere_renderer;
mod types;

pub use crate::shared::RenderScene;
use types::RenderContext;

/// Zeichnet eine komplette Szene in den gegebenen Viewport.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let ctx = RenderContext::new(painter, rect, scene);

    grid_renderer::paint_grid(&ctx, scene.grid);

    if let Some(mesh) = &scene.mesh_preview {
        line_renderer::paint_line(&ctx, mesh);
    }
    for line in &scene.connections {
        line_renderer::paint_line(&ctx, line);
    }

    sphere_renderer::paint_spheres(&ctx, scene.points.iter().chain(&scene.forcefields));

    if let Some(handle) = scene.manipulator {
        sphere_renderer::paint_manipulator(&ctx, handle, scene.manipulator_color);
    }

    log::trace!(
        "Frame gezeichnet: {} Punkte, {} Forcefields, {} Connections",
        scene.points.len(),
        scene.forcefields.len(),
        scene.connections.len()
    );
}
