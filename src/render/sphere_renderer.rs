//! Kugeln (Punkte, Forcefields) und Manipulator-Griff.

use super::types::{color32, RenderContext};
use crate::shared::RenderSphere;
use glam::Vec3;

/// Radius des Manipulator-Griffs in Pixeln.
const MANIPULATOR_RADIUS_PX: f32 = 8.0;

/// Zeichnet Kugeln von hinten nach vorne.
pub(super) fn paint_spheres<'s>(
    ctx: &RenderContext,
    spheres: impl Iterator<Item = &'s RenderSphere>,
) {
    let mut visible: Vec<(f32, &RenderSphere)> = spheres
        .map(|s| (ctx.depth(s.center), s))
        .filter(|(depth, _)| *depth >= ctx.camera.near)
        .collect();
    visible.sort_by(|a, b| b.0.total_cmp(&a.0));

    for (_, sphere) in visible {
        let Some(center) = ctx.project(sphere.center) else {
            continue;
        };
        let radius = ctx.screen_radius(sphere.center, sphere.radius).max(1.0);
        let fill = color32(sphere.color);
        ctx.painter.circle_filled(center, radius, fill);
        ctx.painter.circle_stroke(
            center,
            radius,
            egui::Stroke::new(1.0, fill.gamma_multiply(0.6).to_opaque()),
        );
    }
}

/// Zeichnet den Manipulator-Griff als Ring mit Achsenkreuz.
pub(super) fn paint_manipulator(ctx: &RenderContext, position: Vec3, color: [f32; 4]) {
    let Some(center) = ctx.project(position) else {
        return;
    };
    let stroke = egui::Stroke::new(2.0, color32(color));
    ctx.painter
        .circle_stroke(center, MANIPULATOR_RADIUS_PX, stroke);

    let axis_len = ctx.camera.world_per_pixel_at(ctx.depth(position), ctx.viewport.y) * 40.0;
    for (axis, axis_color) in [
        (Vec3::X, egui::Color32::RED),
        (Vec3::Y, egui::Color32::GREEN),
        (Vec3::Z, egui::Color32::BLUE),
    ] {
        if let Some(tip) = ctx.project(position + axis * axis_len) {
            ctx.painter
                .line_segment([center, tip], egui::Stroke::new(2.0, axis_color));
        }
    }
}
