//! Forcefield: positionierte Kugel, deren Oberfläche Bezier-Kontrollpunkte liefert.

use super::EditError;
use glam::Vec3;

/// Kugelförmiges Forcefield mit Position und Durchmesser
#[derive(Debug, Clone, PartialEq)]
pub struct Forcefield {
    /// Eindeutige ID
    pub id: u64,
    /// Mittelpunkt in Weltkoordinaten
    pub position: Vec3,
    /// Durchmesser (immer > 0)
    diameter: f32,
}

impl Forcefield {
    /// Standard-Durchmesser neuer Forcefields.
    pub const DEFAULT_DIAMETER: f32 = 20.0;

    /// Erstellt ein Forcefield. Lehnt nicht-positive Durchmesser ab.
    pub fn new(id: u64, position: Vec3, diameter: f32) -> Result<Self, EditError> {
        validate_diameter(diameter)?;
        Ok(Self {
            id,
            position,
            diameter,
        })
    }

    /// Aktueller Durchmesser
    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    /// Halber Durchmesser
    pub fn radius(&self) -> f32 {
        self.diameter * 0.5
    }

    /// Setzt den Durchmesser; ungültige Werte lassen das Forcefield unverändert.
    pub fn set_diameter(&mut self, diameter: f32) -> Result<(), EditError> {
        validate_diameter(diameter)?;
        self.diameter = diameter;
        Ok(())
    }
}

fn validate_diameter(diameter: f32) -> Result<(), EditError> {
    if diameter.is_finite() && diameter > 0.0 {
        Ok(())
    } else {
        Err(EditError::InvalidDiameter(diameter))
    }
}
