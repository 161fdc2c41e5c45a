//! Polylinien für Connections und die Mesh-Vorschau.

use super::types::{color32, RenderContext};
use crate::shared::RenderLine;

/// Zeichnet eine Polylinie; Abschnitte hinter der Kamera werden unterbrochen.
pub(super) fn paint_line(ctx: &RenderContext, line: &RenderLine) {
    let stroke = egui::Stroke::new(line.width, color32(line.color));
    let mut run: Vec<egui::Pos2> = Vec::with_capacity(line.points.len());

    for &world in &line.points {
        match ctx.project(world) {
            Some(pos) => run.push(pos),
            None => flush(ctx, &mut run, stroke),
        }
    }
    flush(ctx, &mut run, stroke);
}

fn flush(ctx: &RenderContext, run: &mut Vec<egui::Pos2>, stroke: egui::Stroke) {
    if run.len() >= 2 {
        ctx.painter
            .add(egui::Shape::line(std::mem::take(run), stroke));
    } else {
        run.clear();
    }
}
