//! Gemeinsamer Zeichenkontext und Projektion.

use crate::core::Camera3D;
use crate::shared::RenderScene;
use glam::{Vec2, Vec3};

/// Gemeinsamer Kontext für alle Sub-Renderer eines Frames.
pub(crate) struct RenderContext<'a> {
    pub painter: &'a egui::Painter,
    /// Viewport-Rechteck in egui-Koordinaten
    pub rect: egui::Rect,
    pub camera: &'a Camera3D,
    pub viewport: Vec2,
    camera_position: Vec3,
    camera_forward: Vec3,
}

impl<'a> RenderContext<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect, scene: &'a RenderScene) -> Self {
        Self {
            painter,
            rect,
            camera: &scene.camera,
            viewport: Vec2::from(scene.viewport_size),
            camera_position: scene.camera.position(),
            camera_forward: scene.camera.forward(),
        }
    }

    /// Projiziert einen Weltpunkt auf den Bildschirm. `None` hinter der Near-Plane.
    pub fn project(&self, world: Vec3) -> Option<egui::Pos2> {
        if self.depth(world) < self.camera.near {
            return None;
        }
        self.camera
            .world_to_screen(world, self.viewport)
            .map(|p| self.rect.min + egui::vec2(p.x, p.y))
    }

    /// Abstand eines Weltpunkts entlang der Blickrichtung
    pub fn depth(&self, world: Vec3) -> f32 {
        (world - self.camera_position).dot(self.camera_forward)
    }

    /// Bildschirmradius einer Kugel in Pixeln
    pub fn screen_radius(&self, world: Vec3, radius: f32) -> f32 {
        radius / self.camera.world_per_pixel_at(self.depth(world), self.viewport.y)
    }
}

/// RGBA [0..1] in egui-Farbe
pub(crate) fn color32(color: [f32; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0] * 255.0) as u8,
        (color[1] * 255.0) as u8,
        (color[2] * 255.0) as u8,
        (color[3] * 255.0) as u8,
    )
}
