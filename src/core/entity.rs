//! Entity-Arten und typisierte Referenzen auf Szenenobjekte.

use glam::Vec3;
use std::fmt;

/// Art eines Szenenobjekts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Frei platzierter Punkt (Endpunkt von Connections)
    Point,
    /// Verbindung zwischen zwei Punkten (Linie oder Kurve)
    Connection,
    /// Kugel mit Durchmesser, liefert Bezier-Kontrollpunkte
    Forcefield,
}

impl EntityKind {
    /// Alle Arten in fester Reihenfolge.
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Point,
        EntityKind::Connection,
        EntityKind::Forcefield,
    ];

    /// Gibt zurück, ob Objekte dieser Art eine eigene Position besitzen.
    pub fn has_position(self) -> bool {
        !matches!(self, EntityKind::Connection)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Point => "Punkt",
            EntityKind::Connection => "Connection",
            EntityKind::Forcefield => "Forcefield",
        };
        f.write_str(name)
    }
}

/// Typisierte Referenz auf ein Szenenobjekt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityRef {
    /// Art des Objekts
    pub kind: EntityKind,
    /// Eindeutige ID innerhalb der Szene
    pub id: u64,
}

impl EntityRef {
    /// Referenz auf einen Punkt.
    pub fn point(id: u64) -> Self {
        Self {
            kind: EntityKind::Point,
            id,
        }
    }

    /// Referenz auf eine Connection.
    pub fn connection(id: u64) -> Self {
        Self {
            kind: EntityKind::Connection,
            id,
        }
    }

    /// Referenz auf ein Forcefield.
    pub fn forcefield(id: u64) -> Self {
        Self {
            kind: EntityKind::Forcefield,
            id,
        }
    }
}

/// Koordinatenachse für Positionsfelder und Ausrichten
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Alle Achsen in X/Y/Z-Reihenfolge.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Liest die Komponente dieser Achse.
    pub fn get(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// Gibt `v` mit ersetzter Komponente zurück.
    pub fn with(self, mut v: Vec3, value: f32) -> Vec3 {
        match self {
            Axis::X => v.x = value,
            Axis::Y => v.y = value,
            Axis::Z => v.z = value,
        }
        v
    }

    /// Anzeigename für das Positions-Panel.
    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }
}
