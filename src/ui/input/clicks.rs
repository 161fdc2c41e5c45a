//! Pointer-Down im Viewport.

use super::{InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Meldet einen primären Pointer-Down als `PointerDown`.
    ///
    /// Ein Druck auf den Manipulator-Griff startet stattdessen einen Drag
    /// und wird nicht als Picking gewertet.
    pub(crate) fn handle_pointer_down(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        let (pressed, shift) = ctx
            .ui
            .input(|i| (i.pointer.primary_pressed(), i.modifiers.shift));
        if !pressed || !ctx.response.hovered() {
            return;
        }
        let Some(pointer_pos) = ctx.ui.input(|i| i.pointer.interact_pos()) else {
            return;
        };
        if ctx.hits_manipulator(pointer_pos) {
            return;
        }
        events.push(AppIntent::PointerDown {
            screen_pos: ctx.local_pos(pointer_pos),
            shift,
        });
    }
}
