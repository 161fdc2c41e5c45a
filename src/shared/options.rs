//! Zentrale Konfiguration für den StringingTool-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Startposition der Kamera (Blick auf den Ursprung).
pub const CAMERA_START_POSITION: [f32; 3] = [500.0, 500.0, 1000.0];
/// Vertikales Sichtfeld in Grad.
pub const CAMERA_FOV_DEGREES: f32 = 70.0;
/// Near-Plane.
pub const CAMERA_NEAR: f32 = 1.0;
/// Far-Plane.
pub const CAMERA_FAR: f32 = 10_000.0;
/// Minimaler Orbit-Abstand.
pub const CAMERA_MIN_DISTANCE: f32 = 100.0;
/// Maximaler Orbit-Abstand.
pub const CAMERA_MAX_DISTANCE: f32 = 2000.0;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;
/// Orbit-Geschwindigkeit (Radiant pro Pixel Mausbewegung).
pub const CAMERA_ORBIT_SPEED: f32 = 0.005;

// ── Szene ───────────────────────────────────────────────────────────

/// Radius der Punkt-Kugeln in Welteinheiten.
pub const POINT_RADIUS: f32 = 10.0;
/// Durchmesser neuer Forcefields.
pub const FORCEFIELD_DEFAULT_DIAMETER: f32 = 20.0;
/// Slider-Bereich für Forcefield-Durchmesser.
pub const FORCEFIELD_DIAMETER_MIN: f32 = 1.0;
pub const FORCEFIELD_DIAMETER_MAX: f32 = 2000.0;
/// Halbe Kantenlänge des Quadrats für Zufallsplatzierung auf der Bodenebene.
pub const PLACEMENT_HALF_EXTENT: f32 = 500.0;
/// Kantenlänge des Bodengitters.
pub const GRID_SIZE: f32 = 1000.0;
/// Unterteilungen des Bodengitters.
pub const GRID_DIVISIONS: u32 = 20;

// ── Selektion ───────────────────────────────────────────────────────

/// Pick-Toleranz für Connections in Screen-Pixeln.
pub const LINE_PICK_RADIUS_PX: f32 = 6.0;
/// Pick-Radius des Manipulator-Griffs in Screen-Pixeln.
pub const MANIPULATOR_PICK_RADIUS_PX: f32 = 14.0;

// ── Farben (RGBA) ───────────────────────────────────────────────────

pub const POINT_COLOR_DEFAULT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
pub const POINT_COLOR_SELECTED: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
pub const FORCEFIELD_COLOR_DEFAULT: [f32; 4] = [0.0, 1.0, 0.0, 0.3];
pub const FORCEFIELD_COLOR_SELECTED: [f32; 4] = [0.0, 0.0, 1.0, 0.3];
pub const CONNECTION_COLOR_DEFAULT: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
pub const CONNECTION_COLOR_SELECTED: [f32; 4] = [1.0, 0.4, 0.0, 1.0];
/// Gemeinsames Gruppenmaterial (Orange).
pub const GROUP_COLOR: [f32; 4] = [1.0, 0.4, 0.0, 1.0];
/// Farbe der Mesh-Vorschau.
pub const MESH_COLOR: [f32; 4] = [0.6, 0.2, 0.8, 1.0];
/// Farbe des Manipulator-Griffs.
pub const MANIPULATOR_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];

// ── Connection-Rendering ───────────────────────────────────────────

/// Linienstärke nicht selektierter Connections (Pixel).
pub const CONNECTION_WIDTH_DEFAULT: f32 = 2.0;
/// Linienstärke selektierter/gruppierter Connections (Pixel).
pub const CONNECTION_WIDTH_SELECTED: f32 = 3.0;

// ── Kurven & Mesh ──────────────────────────────────────────────────

/// Segmente pro Bezier-Kurve (Samples = Segmente + 1). Fest, nicht konfigurierbar.
pub const CURVE_SEGMENTS: usize = 50;
/// Standard-Dicke des Röhren-Meshs.
pub const MESH_THICKNESS: f32 = 1.0;
pub const MESH_THICKNESS_MIN: f32 = 0.1;
pub const MESH_THICKNESS_MAX: f32 = 10.0;

// ── Historie ───────────────────────────────────────────────────────

/// Maximale Undo-Tiefe.
pub const UNDO_DEPTH: usize = 200;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `stringing_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Szene ───────────────────────────────────────────────────
    /// Radius der Punkt-Kugeln
    pub point_radius: f32,
    /// Durchmesser neuer Forcefields
    pub forcefield_default_diameter: f32,
    /// Untergrenze des Durchmesser-Sliders
    pub forcefield_diameter_min: f32,
    /// Obergrenze des Durchmesser-Sliders
    pub forcefield_diameter_max: f32,
    /// Halbe Kantenlänge für Zufallsplatzierung
    pub placement_half_extent: f32,
    pub grid_size: f32,
    pub grid_divisions: u32,

    // ── Selektion ───────────────────────────────────────────────
    /// Pick-Toleranz für Connections in Screen-Pixeln
    pub line_pick_radius_px: f32,
    /// Pick-Radius des Manipulator-Griffs in Screen-Pixeln
    pub manipulator_pick_radius_px: f32,

    // ── Farben ──────────────────────────────────────────────────
    pub point_color_default: [f32; 4],
    pub point_color_selected: [f32; 4],
    pub forcefield_color_default: [f32; 4],
    pub forcefield_color_selected: [f32; 4],
    pub connection_color_default: [f32; 4],
    pub connection_color_selected: [f32; 4],
    pub group_color: [f32; 4],
    pub mesh_color: [f32; 4],
    pub manipulator_color: [f32; 4],

    // ── Connections ─────────────────────────────────────────────
    /// Linienstärke nicht selektierter Connections
    pub connection_width_default: f32,
    /// Linienstärke selektierter und gruppierter Connections
    pub connection_width_selected: f32,

    // ── Kurven & Mesh ───────────────────────────────────────────
    /// Dicke des Röhren-Meshs
    pub mesh_thickness: f32,

    // ── Kamera ──────────────────────────────────────────────────
    pub camera_start_position: [f32; 3],
    pub camera_fov_degrees: f32,
    pub camera_near: f32,
    pub camera_far: f32,
    pub camera_min_distance: f32,
    pub camera_max_distance: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,
    /// Orbit-Geschwindigkeit (Radiant pro Pixel)
    pub camera_orbit_speed: f32,

    // ── Historie ────────────────────────────────────────────────
    /// Maximale Anzahl Undo-Schritte
    pub undo_depth: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            point_radius: POINT_RADIUS,
            forcefield_default_diameter: FORCEFIELD_DEFAULT_DIAMETER,
            forcefield_diameter_min: FORCEFIELD_DIAMETER_MIN,
            forcefield_diameter_max: FORCEFIELD_DIAMETER_MAX,
            placement_half_extent: PLACEMENT_HALF_EXTENT,
            grid_size: GRID_SIZE,
            grid_divisions: GRID_DIVISIONS,

            line_pick_radius_px: LINE_PICK_RADIUS_PX,
            manipulator_pick_radius_px: MANIPULATOR_PICK_RADIUS_PX,

            point_color_default: POINT_COLOR_DEFAULT,
            point_color_selected: POINT_COLOR_SELECTED,
            forcefield_color_default: FORCEFIELD_COLOR_DEFAULT,
            forcefield_color_selected: FORCEFIELD_COLOR_SELECTED,
            connection_color_default: CONNECTION_COLOR_DEFAULT,
            connection_color_selected: CONNECTION_COLOR_SELECTED,
            group_color: GROUP_COLOR,
            mesh_color: MESH_COLOR,
            manipulator_color: MANIPULATOR_COLOR,

            connection_width_default: CONNECTION_WIDTH_DEFAULT,
            connection_width_selected: CONNECTION_WIDTH_SELECTED,

            mesh_thickness: MESH_THICKNESS,

            camera_start_position: CAMERA_START_POSITION,
            camera_fov_degrees: CAMERA_FOV_DEGREES,
            camera_near: CAMERA_NEAR,
            camera_far: CAMERA_FAR,
            camera_min_distance: CAMERA_MIN_DISTANCE,
            camera_max_distance: CAMERA_MAX_DISTANCE,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
            camera_orbit_speed: CAMERA_ORBIT_SPEED,

            undo_depth: UNDO_DEPTH,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    Self::sanitized(opts)
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("stringing_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("stringing_editor.toml")
    }

    /// Korrigiert Wertebereiche, an denen `f32::clamp` oder die Projektion scheitern würden.
    ///
    /// Vertauschte Grenzen werden getauscht, nicht-positive oder nicht-endliche
    /// Grenzen fallen auf die Standardwerte zurück.
    pub fn sanitize(&mut self) {
        sanitize_range(
            "Kamera-Abstand",
            &mut self.camera_min_distance,
            &mut self.camera_max_distance,
            (CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE),
        );
        sanitize_range(
            "Kamera Near/Far",
            &mut self.camera_near,
            &mut self.camera_far,
            (CAMERA_NEAR, CAMERA_FAR),
        );
        sanitize_range(
            "Forcefield-Durchmesser",
            &mut self.forcefield_diameter_min,
            &mut self.forcefield_diameter_max,
            (FORCEFIELD_DIAMETER_MIN, FORCEFIELD_DIAMETER_MAX),
        );
        if !self.forcefield_default_diameter.is_finite() {
            self.forcefield_default_diameter = FORCEFIELD_DEFAULT_DIAMETER;
        }
        self.forcefield_default_diameter = self.clamp_diameter(self.forcefield_default_diameter);
        if !self.mesh_thickness.is_finite() {
            self.mesh_thickness = MESH_THICKNESS;
        }
        self.mesh_thickness = Self::clamp_mesh_thickness(self.mesh_thickness);
    }

    /// Wie [`Self::sanitize`], für Builder-Ketten.
    pub fn sanitized(mut self) -> Self {
        self.sanitize();
        self
    }

    /// Klemmt einen Durchmesser auf den Slider-Bereich.
    pub fn clamp_diameter(&self, diameter: f32) -> f32 {
        diameter.clamp(self.forcefield_diameter_min, self.forcefield_diameter_max)
    }

    /// Klemmt die Mesh-Dicke auf den gültigen Bereich.
    pub fn clamp_mesh_thickness(thickness: f32) -> f32 {
        thickness.clamp(MESH_THICKNESS_MIN, MESH_THICKNESS_MAX)
    }
}

/// Stellt `0 < min <= max` sicher.
fn sanitize_range(label: &str, min: &mut f32, max: &mut f32, defaults: (f32, f32)) {
    if !(min.is_finite() && max.is_finite() && *min > 0.0 && *max > 0.0) {
        log::warn!(
            "{}: ungültiger Bereich {}..{}, verwende Standardwerte",
            label,
            min,
            max
        );
        (*min, *max) = defaults;
    } else if *min > *max {
        log::warn!("{}: Grenzen vertauscht ({}..{}), korrigiert", label, min, max);
        std::mem::swap(min, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let opts: EditorOptions =
            toml::from_str("point_radius = 4.0\n").expect("gültiges TOML");
        assert_eq!(opts.point_radius, 4.0);
        assert_eq!(opts.undo_depth, UNDO_DEPTH);
        assert_eq!(opts.forcefield_default_diameter, FORCEFIELD_DEFAULT_DIAMETER);
    }

    #[test]
    fn test_toml_roundtrip_preserves_values() {
        let mut opts = EditorOptions::default();
        opts.undo_depth = 17;
        opts.connection_color_selected = [0.1, 0.2, 0.3, 1.0];
        let text = toml::to_string_pretty(&opts).expect("serialisierbar");
        let back: EditorOptions = toml::from_str(&text).expect("deserialisierbar");
        assert_eq!(back, opts);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let opts = EditorOptions::load_from_file(std::path::Path::new(
            "/nonexistent/stringing_editor.toml",
        ));
        assert_eq!(opts, EditorOptions::default());
    }

    #[test]
    fn test_inverted_ranges_are_swapped() {
        let mut opts: EditorOptions = toml::from_str(
            "camera_min_distance = 3000.0\n\
             camera_max_distance = 100.0\n\
             forcefield_diameter_min = 500.0\n\
             forcefield_diameter_max = 50.0\n",
        )
        .expect("gültiges TOML");
        opts.sanitize();

        assert_eq!(opts.camera_min_distance, 100.0);
        assert_eq!(opts.camera_max_distance, 3000.0);
        assert_eq!(opts.forcefield_diameter_min, 50.0);
        assert_eq!(opts.forcefield_diameter_max, 500.0);
        assert_eq!(opts.forcefield_default_diameter, 50.0);
        assert_eq!(opts.clamp_diameter(1000.0), 500.0);
    }

    #[test]
    fn test_non_positive_diameter_minimum_falls_back_to_defaults() {
        let opts = EditorOptions {
            forcefield_diameter_min: 0.0,
            forcefield_diameter_max: -5.0,
            camera_near: f32::NAN,
            ..EditorOptions::default()
        }
        .sanitized();

        assert_eq!(opts.forcefield_diameter_min, FORCEFIELD_DIAMETER_MIN);
        assert_eq!(opts.forcefield_diameter_max, FORCEFIELD_DIAMETER_MAX);
        assert_eq!(opts.camera_near, CAMERA_NEAR);
        assert_eq!(opts.camera_far, CAMERA_FAR);
    }

    #[test]
    fn test_inverted_file_is_corrected_on_load() {
        let path = std::env::temp_dir().join(format!(
            "stringing_editor_inverted_{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "camera_min_distance = 3000.0\ncamera_max_distance = 100.0\n",
        )
        .expect("Temp-Datei schreibbar");

        let opts = EditorOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert!(opts.camera_min_distance <= opts.camera_max_distance);
        assert_eq!(opts.camera_min_distance, 100.0);
    }

    #[test]
    fn test_unknown_curve_segments_key_is_ignored() {
        let opts: EditorOptions =
            toml::from_str("curve_segments = 4\n").expect("unbekannte Schlüssel erlaubt");
        assert_eq!(opts, EditorOptions::default());
    }
}
