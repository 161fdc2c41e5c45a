//! Repräsentiert eine Verbindung zwischen zwei Punkten (gerade Linie oder Bezier-Kurve).

use glam::Vec3;

/// Forcefields, aus denen die Kontrollpunkte einer Kurve abgeleitet werden
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveControl {
    /// Ein Forcefield: beide Kontrollpunkte fallen zusammen
    Single(u64),
    /// Zwei Forcefields, Reihenfolge wird pro Frame nach Nähe zum Start bestimmt
    Pair(u64, u64),
}

impl CurveControl {
    /// Gebundene Forcefield-IDs in Bindungsreihenfolge.
    pub fn forcefield_ids(&self) -> Vec<u64> {
        match *self {
            CurveControl::Single(id) => vec![id],
            CurveControl::Pair(a, b) => vec![a, b],
        }
    }

    /// Prüft, ob das Forcefield an dieser Kurve beteiligt ist.
    pub fn uses(&self, forcefield_id: u64) -> bool {
        match *self {
            CurveControl::Single(id) => id == forcefield_id,
            CurveControl::Pair(a, b) => a == forcefield_id || b == forcefield_id,
        }
    }
}

/// Daten einer gekrümmten Connection
#[derive(Debug, Clone, PartialEq)]
pub struct CurveShape {
    /// Gebundene Forcefields (zum Zeitpunkt der Promotion)
    pub control: CurveControl,
    /// Aktuelle kubische Kontrollpunkte (CP1 liegt näher am Start)
    pub control_points: [Vec3; 2],
}

/// Form einer Connection: genau eine Variante gleichzeitig
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionShape {
    /// Gerade Linie zwischen den Endpunkten
    Straight,
    /// Kubische Bezier-Kurve mit Forcefield-Kontrollpunkten
    Curved(CurveShape),
}

/// Eine Verbindung zwischen zwei Punkten
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    /// Eindeutige ID
    pub id: u64,
    /// Start-Punkt-ID
    pub start_id: u64,
    /// End-Punkt-ID
    pub end_id: u64,
    shape: ConnectionShape,
    /// Gerenderte Geometrie: zwei Endpunkte (gerade) oder abgetastete Kurve
    geometry: Vec<Vec3>,
}

impl Connection {
    /// Erstellt eine gerade Verbindung
    pub fn straight(id: u64, start_id: u64, end_id: u64, start_pos: Vec3, end_pos: Vec3) -> Self {
        Self {
            id,
            start_id,
            end_id,
            shape: ConnectionShape::Straight,
            geometry: vec![start_pos, end_pos],
        }
    }

    /// Aktuelle Form
    pub fn shape(&self) -> &ConnectionShape {
        &self.shape
    }

    /// Gibt zurück, ob die Connection als Kurve registriert ist
    pub fn is_curved(&self) -> bool {
        matches!(self.shape, ConnectionShape::Curved(_))
    }

    /// Kurvendaten, falls gekrümmt
    pub fn curve(&self) -> Option<&CurveShape> {
        match &self.shape {
            ConnectionShape::Curved(curve) => Some(curve),
            ConnectionShape::Straight => None,
        }
    }

    /// Aktuelle Polylinie
    pub fn geometry(&self) -> &[Vec3] {
        &self.geometry
    }

    /// Prüft, ob der Punkt Start oder Ende dieser Connection ist
    pub fn references_point(&self, point_id: u64) -> bool {
        self.start_id == point_id || self.end_id == point_id
    }

    /// Prüft, ob die Kurve von diesem Forcefield gesteuert wird
    pub fn is_controlled_by(&self, forcefield_id: u64) -> bool {
        self.curve()
            .is_some_and(|curve| curve.control.uses(forcefield_id))
    }

    /// Setzt die Geometrie einer geraden Connection auf die aktuellen Endpunkte.
    /// Bei Kurven ohne Wirkung.
    pub fn update_straight_geometry(&mut self, start_pos: Vec3, end_pos: Vec3) {
        if self.is_curved() {
            return;
        }
        self.geometry.clear();
        self.geometry.extend([start_pos, end_pos]);
    }

    /// Ersetzt Form und Geometrie in einem Schritt (Promotion oder Refresh).
    pub fn set_curve(&mut self, curve: CurveShape, samples: Vec<Vec3>) {
        self.shape = ConnectionShape::Curved(curve);
        self.geometry = samples;
    }

    /// Aktualisiert Kontrollpunkte und Samples einer bestehenden Kurve.
    pub fn refresh_curve(&mut self, control_points: [Vec3; 2], samples: Vec<Vec3>) {
        if let ConnectionShape::Curved(curve) = &mut self.shape {
            curve.control_points = control_points;
            self.geometry = samples;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_connection_has_endpoint_geometry() {
        let mut conn = Connection::straight(3, 1, 2, Vec3::ZERO, Vec3::X);
        assert_eq!(conn.geometry(), &[Vec3::ZERO, Vec3::X]);
        assert!(!conn.is_curved());

        conn.update_straight_geometry(Vec3::Y, Vec3::Z);
        assert_eq!(conn.geometry(), &[Vec3::Y, Vec3::Z]);
    }

    #[test]
    fn curve_replaces_shape_and_geometry() {
        let mut conn = Connection::straight(3, 1, 2, Vec3::ZERO, Vec3::X);
        conn.set_curve(
            CurveShape {
                control: CurveControl::Pair(7, 8),
                control_points: [Vec3::Y, Vec3::Y],
            },
            vec![Vec3::ZERO, Vec3::Y, Vec3::X],
        );

        assert!(conn.is_curved());
        assert!(conn.is_controlled_by(8));
        assert!(!conn.is_controlled_by(9));
        assert_eq!(conn.geometry().len(), 3);

        // gerade Aktualisierung darf Kurven nicht überschreiben
        conn.update_straight_geometry(Vec3::ZERO, Vec3::X);
        assert_eq!(conn.geometry().len(), 3);
    }
}
