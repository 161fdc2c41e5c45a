//! Repräsentiert einen frei platzierbaren Punkt.

use glam::Vec3;

/// Ein Punkt im 3D-Raum (Endpunkt von Connections)
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Eindeutige ID
    pub id: u64,
    /// Aktuelle Weltposition
    pub position: Vec3,
}

impl Point {
    /// Erstellt einen neuen Punkt
    pub fn new(id: u64, position: Vec3) -> Self {
        Self { id, position }
    }
}
