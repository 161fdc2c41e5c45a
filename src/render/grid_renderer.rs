//! Bodengitter auf der Ebene y = 0.

use super::types::RenderContext;
use crate::shared::RenderGrid;
use glam::Vec3;

const GRID_COLOR: egui::Color32 = egui::Color32::from_gray(70);

pub(super) fn paint_grid(ctx: &RenderContext, grid: RenderGrid) {
    if grid.divisions == 0 || grid.size <= 0.0 {
        return;
    }
    let half = grid.size * 0.5;
    let step = grid.size / grid.divisions as f32;
    let stroke = egui::Stroke::new(1.0, GRID_COLOR);

    for i in 0..=grid.divisions {
        let offset = -half + step * i as f32;
        for (a, b) in [
            (Vec3::new(offset, 0.0, -half), Vec3::new(offset, 0.0, half)),
            (Vec3::new(-half, 0.0, offset), Vec3::new(half, 0.0, offset)),
        ] {
            if let (Some(pa), Some(pb)) = (ctx.project(a), ctx.project(b)) {
                ctx.painter.line_segment([pa, pb], stroke);
            }
        }
    }
}
