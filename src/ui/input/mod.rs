//! Viewport-Input-Handling: Maus-Events, Manipulator-Drag, Orbit, Scroll → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `clicks` — Pointer-Down (Picking über die App)
//! - `drag_primary` — Drag-Start/-Ende (Manipulator oder Kamera-Orbit)
//! - `pointer_delta` — Deltas während aktiver Drags
//! - `zoom` — Scroll-Zoom

mod clicks;
mod drag_primary;
mod pointer_delta;
mod zoom;

use super::keyboard;
use crate::app::AppIntent;
use crate::core::Camera3D;
use crate::shared::EditorOptions;
use glam::{Vec2, Vec3};

/// Modus des primären (Links-)Drags im Viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PrimaryDragMode {
    #[default]
    None,
    /// Drag am Manipulator-Griff
    Manipulator,
    CameraOrbit,
}

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
    pub camera: &'a Camera3D,
    /// Weltposition des Manipulator-Griffs (falls angehängt)
    pub manipulator: Option<Vec3>,
    pub options: &'a EditorOptions,
}

impl ViewportContext<'_> {
    /// Pointer-Position relativ zur linken oberen Viewport-Ecke.
    fn local_pos(&self, pointer_pos: egui::Pos2) -> Vec2 {
        let local = pointer_pos - self.response.rect.min;
        Vec2::new(local.x, local.y)
    }

    /// Prüft, ob eine Pointer-Position den Manipulator-Griff trifft.
    fn hits_manipulator(&self, pointer_pos: egui::Pos2) -> bool {
        let Some(handle) = self.manipulator else {
            return false;
        };
        let viewport = Vec2::from(self.viewport_size);
        self.camera
            .world_to_screen(handle, viewport)
            .is_some_and(|screen| {
                screen.distance(self.local_pos(pointer_pos)) <= self.options.manipulator_pick_radius_px
            })
    }
}

/// Verwaltet den Input-Zustand für das Viewport (Drag-Modus)
#[derive(Default)]
pub struct InputState {
    pub(crate) primary_drag_mode: PrimaryDragMode,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Zentraler UI→Intent-Einstieg für Tastatur, Maus, Drag und Scroll.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera3D,
        manipulator: Option<Vec3>,
        options: &EditorOptions,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            camera,
            manipulator,
            options,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        events.extend(keyboard::collect_keyboard_intents(ui));

        self.handle_pointer_down(&ctx, &mut events);
        self.handle_drag_start(&ctx, &mut events);
        self.handle_pointer_delta(&ctx, &mut events);
        self.handle_drag_end(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }
}
