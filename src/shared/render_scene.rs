//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.
//! Alle Farben und Breiten sind bereits nach der Visual-Policy aufgelöst.

use crate::core::Camera3D;
use glam::Vec3;

/// Kugel-Objekt (Punkt oder Forcefield) mit aufgelöster Farbe
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSphere {
    /// ID des Szenenobjekts
    pub id: u64,
    pub center: Vec3,
    pub radius: f32,
    /// RGBA-Farbe
    pub color: [f32; 4],
}

/// Polylinie (Connection oder Mesh-Vorschau)
#[derive(Debug, Clone, PartialEq)]
pub struct RenderLine {
    /// ID der Connection
    pub id: u64,
    pub points: Vec<Vec3>,
    /// RGBA-Farbe
    pub color: [f32; 4],
    /// Linienstärke in Pixeln
    pub width: f32,
}

/// Bodengitter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderGrid {
    pub size: f32,
    pub divisions: u32,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera3D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Sichtbare Punkte
    pub points: Vec<RenderSphere>,
    /// Sichtbare Forcefields (halbtransparent)
    pub forcefields: Vec<RenderSphere>,
    /// Alle Connections
    pub connections: Vec<RenderLine>,
    /// Vorschau des Export-Meshs (falls eingeblendet)
    pub mesh_preview: Option<RenderLine>,
    /// Weltposition des Manipulator-Griffs (falls angehängt)
    pub manipulator: Option<Vec3>,
    /// Farbe des Manipulator-Griffs
    pub manipulator_color: [f32; 4],
    pub grid: RenderGrid,
}

impl RenderScene {
    /// Gibt zurück, ob die Szene Objekte zum Zeichnen enthält.
    pub fn has_content(&self) -> bool {
        !self.points.is_empty() || !self.forcefields.is_empty() || !self.connections.is_empty()
    }
}
