//! 3D-Orbit-Kamera mit Perspektive, Orbit und Zoom.

use super::Ray;
use glam::{Mat4, Vec2, Vec3};

/// Orbit-Kamera um einen Zielpunkt
#[derive(Debug, Clone, PartialEq)]
pub struct Camera3D {
    /// Zielpunkt, um den die Kamera kreist
    pub target: Vec3,
    /// Azimut um die Y-Achse (Radiant, 0 = Blick entlang -Z)
    pub yaw: f32,
    /// Elevation über der Bodenebene (Radiant)
    pub pitch: f32,
    /// Abstand zum Zielpunkt
    pub distance: f32,
    /// Vertikales Sichtfeld (Radiant)
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Camera3D {
    /// Minimale Elevation: die Kamera bleibt über der Bodenebene.
    pub const PITCH_MIN: f32 = 0.0;
    /// Maximale Elevation knapp unter dem Zenit (look_at braucht eine gültige Up-Achse).
    pub const PITCH_MAX: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

    /// Erstellt eine Kamera an `position`, die auf `target` blickt.
    pub fn from_position(
        position: Vec3,
        target: Vec3,
        fov_y_degrees: f32,
        near: f32,
        far: f32,
        min_distance: f32,
        max_distance: f32,
    ) -> Self {
        let offset = position - target;
        let distance = offset.length().max(f32::EPSILON);
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / distance).clamp(-1.0, 1.0).asin();
        Self {
            target,
            yaw,
            pitch: pitch.clamp(Self::PITCH_MIN, Self::PITCH_MAX),
            distance: distance.clamp(min_distance, max_distance),
            fov_y: fov_y_degrees.to_radians(),
            near,
            far,
            min_distance,
            max_distance,
        }
    }

    /// Aktuelle Kameraposition in Weltkoordinaten
    pub fn position(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * self.distance
    }

    /// Normierte Blickrichtung
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position()).normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect.max(f32::EPSILON), self.near, self.far)
    }

    /// Kombinierte View-Projection-Matrix für den Viewport
    pub fn view_projection(&self, viewport: Vec2) -> Mat4 {
        let aspect = viewport.x / viewport.y.max(1.0);
        self.projection_matrix(aspect) * self.view_matrix()
    }

    /// Dreht die Kamera um den Zielpunkt
    pub fn orbit(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(Self::PITCH_MIN, Self::PITCH_MAX);
    }

    /// Ändert den Abstand multiplikativ (Faktor > 1 zoomt heraus)
    pub fn zoom_by(&mut self, factor: f32) {
        self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
    }

    /// Baut einen Strahl von der Kamera durch eine Viewport-Position.
    ///
    /// `screen` ist relativ zur linken oberen Ecke des Viewports.
    pub fn ray_from_screen(&self, screen: Vec2, viewport: Vec2) -> Option<Ray> {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return None;
        }
        let inv = self.view_projection(viewport).inverse();
        let ndc_x = (screen.x / viewport.x) * 2.0 - 1.0;
        let ndc_y = 1.0 - (screen.y / viewport.y) * 2.0;
        let near = inv.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
        Ray::new(near, far - near)
    }

    /// Projiziert einen Weltpunkt in Viewport-Pixel. `None` hinter der Kamera.
    pub fn world_to_screen(&self, world: Vec3, viewport: Vec2) -> Option<Vec2> {
        let clip = self.view_projection(viewport) * world.extend(1.0);
        if clip.w <= f32::EPSILON {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * viewport.x,
            (1.0 - ndc.y) * 0.5 * viewport.y,
        ))
    }

    /// Welteinheiten pro Pixel in der Tiefe `depth` vor der Kamera.
    pub fn world_per_pixel_at(&self, depth: f32, viewport_height: f32) -> f32 {
        2.0 * depth.max(self.near) * (self.fov_y * 0.5).tan() / viewport_height.max(1.0)
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::from_position(
            Vec3::new(500.0, 500.0, 1000.0),
            Vec3::ZERO,
            70.0,
            1.0,
            10_000.0,
            100.0,
            2000.0,
        )
    }
}
