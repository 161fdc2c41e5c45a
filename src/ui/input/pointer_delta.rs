//! Pointer-Delta-Verarbeitung: Manipulator-Drag und Kamera-Orbit.

use super::{InputState, PrimaryDragMode, ViewportContext};
use crate::app::AppIntent;
use glam::Vec2;

impl InputState {
    /// Verarbeitet Maus-Bewegungen während aktiver Drags.
    pub(crate) fn handle_pointer_delta(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        if ctx.response.dragged_by(egui::PointerButton::Primary) {
            match self.primary_drag_mode {
                PrimaryDragMode::Manipulator => {
                    if let Some(pointer_pos) = ctx.response.interact_pointer_pos() {
                        events.push(AppIntent::ManipulatorDragged {
                            screen_pos: ctx.local_pos(pointer_pos),
                        });
                    }
                }
                PrimaryDragMode::CameraOrbit => events.push(AppIntent::CameraOrbit {
                    delta_px: Vec2::new(pointer_delta.x, pointer_delta.y),
                }),
                PrimaryDragMode::None => {}
            }
        } else if ctx.response.dragged_by(egui::PointerButton::Secondary)
            || ctx.response.dragged_by(egui::PointerButton::Middle)
        {
            events.push(AppIntent::CameraOrbit {
                delta_px: Vec2::new(pointer_delta.x, pointer_delta.y),
            });
        }
    }
}
