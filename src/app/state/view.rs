use crate::core::Camera3D;
use crate::shared::EditorOptions;
use glam::{Vec2, Vec3};

/// Ein-/ausblendbare Darstellungsebene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Points,
    Forcefields,
    Mesh,
}

/// Zustand der Export-Mesh-Vorschau
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshState {
    /// Geordnete Vertex-Liste (gerade Connections, dann Kurven)
    pub vertices: Vec<Vec3>,
    /// Röhrendicke für den späteren Export
    pub thickness: f32,
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// 3D-Orbit-Kamera
    pub camera: Camera3D,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    pub show_points: bool,
    pub show_forcefields: bool,
    /// Mesh-Vorschau sichtbar
    pub show_mesh: bool,
    /// Export-Mesh
    pub mesh: MeshState,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand aus den Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            camera: camera_from_options(options),
            viewport_size: [0.0, 0.0],
            show_points: true,
            show_forcefields: true,
            show_mesh: false,
            mesh: MeshState {
                vertices: Vec::new(),
                thickness: options.mesh_thickness,
            },
        }
    }

    /// Viewport-Größe als Vektor
    pub fn viewport(&self) -> Vec2 {
        Vec2::from(self.viewport_size)
    }

    /// Sichtbarkeit einer Ebene
    pub fn is_visible(&self, layer: Layer) -> bool {
        match layer {
            Layer::Points => self.show_points,
            Layer::Forcefields => self.show_forcefields,
            Layer::Mesh => self.show_mesh,
        }
    }

    pub fn set_visible(&mut self, layer: Layer, visible: bool) {
        match layer {
            Layer::Points => self.show_points = visible,
            Layer::Forcefields => self.show_forcefields = visible,
            Layer::Mesh => self.show_mesh = visible,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}

/// Baut die Startkamera aus den Optionen.
pub fn camera_from_options(options: &EditorOptions) -> Camera3D {
    Camera3D::from_position(
        Vec3::from(options.camera_start_position),
        Vec3::ZERO,
        options.camera_fov_degrees,
        options.camera_near,
        options.camera_far,
        options.camera_min_distance,
        options.camera_max_distance,
    )
}
