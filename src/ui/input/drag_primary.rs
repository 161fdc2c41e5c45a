//! Drag-Start/-Ende: Manipulator-Drag oder Kamera-Orbit.

use super::{InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Entscheidet beim Drag-Start, ob der Manipulator oder die Kamera bewegt wird.
    pub(crate) fn handle_drag_start(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.drag_started_by(egui::PointerButton::Primary) {
            return;
        }
        let press_origin = ctx.ui.input(|i| i.pointer.press_origin());

        match press_origin {
            Some(origin) if ctx.hits_manipulator(origin) => {
                self.primary_drag_mode = PrimaryDragMode::Manipulator;
                events.push(AppIntent::ManipulatorDragStarted {
                    screen_pos: ctx.local_pos(origin),
                });
            }
            _ => self.primary_drag_mode = PrimaryDragMode::CameraOrbit,
        }
    }

    /// Beendet einen laufenden Primär-Drag.
    pub(crate) fn handle_drag_end(&mut self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.drag_stopped_by(egui::PointerButton::Primary) {
            return;
        }
        if self.primary_drag_mode == PrimaryDragMode::Manipulator {
            events.push(AppIntent::ManipulatorDragEnded);
        }
        self.primary_drag_mode = PrimaryDragMode::None;
    }
}
