//! Scroll-Zoom.

use super::{InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Scroll-Zoom (Scroll nach oben nähert die Kamera an).
    pub(crate) fn handle_scroll_zoom(&self, ctx: &ViewportContext, events: &mut Vec<AppIntent>) {
        if !ctx.response.hovered() {
            return;
        }
        let scroll = ctx.ui.input(|i| i.smooth_scroll_delta.y);
        if scroll == 0.0 {
            return;
        }

        let step = ctx.options.camera_scroll_zoom_step;
        let factor = if scroll > 0.0 { 1.0 / step } else { step };
        events.push(AppIntent::CameraZoom { factor });
    }
}
