//! Reine Geometrie-Funktionen für Forcefield-gesteuerte Bezier-Kurven.
//!
//! Layer-neutral: wird von `use_cases` (Promotion, Frame-Update) und Benchmarks
//! importiert, ohne Zirkel-Abhängigkeiten zu erzeugen.

use glam::Vec3;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let inv = 1.0 - t;
    inv * inv * inv * p0 + 3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t * p3
}

/// Tastet eine kubische Bezier-Kurve gleichmäßig im Parameter ab.
///
/// Liefert `segments + 1` Punkte; erster und letzter Punkt sind exakt `p0` und `p3`.
pub fn sample_cubic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, segments: usize) -> Vec<Vec3> {
    let segments = segments.max(1);
    let mut samples = Vec::with_capacity(segments + 1);
    samples.push(p0);
    for i in 1..segments {
        let t = i as f32 / segments as f32;
        samples.push(cubic_bezier(p0, p1, p2, p3, t));
    }
    samples.push(p3);
    samples
}

/// Orthogonale Projektion von `point` auf die unendliche Gerade durch `start` und `end`.
///
/// Bei zusammenfallenden Endpunkten ist die Projektion `start`.
pub fn orthogonal_projection_on_line(start: Vec3, end: Vec3, point: Vec3) -> Vec3 {
    let dir = (end - start).normalize_or_zero();
    start + (point - start).dot(dir) * dir
}

/// Kontrollpunkt eines Forcefields für die Linie `start..end`.
///
/// Vom Mittelpunkt um den halben Durchmesser in Richtung des Lotfußpunkts
/// verschoben. Liegt der Mittelpunkt auf der Linie, ist er selbst der Kontrollpunkt.
pub fn forcefield_control_point(start: Vec3, end: Vec3, center: Vec3, diameter: f32) -> Vec3 {
    let foot = orthogonal_projection_on_line(start, end, center);
    center + (foot - center).normalize_or_zero() * (diameter * 0.5)
}

/// Leitet die zwei kubischen Kontrollpunkte aus Forcefields `(mittelpunkt, durchmesser)` ab.
///
/// - keine Quelle: `None`
/// - eine Quelle: beide Kontrollpunkte identisch
/// - zwei oder mehr: die ersten beiden, CP1 ist der näher an `start` liegende
///   (bei Gleichstand bleibt die Reihenfolge erhalten)
pub fn derive_control_points(start: Vec3, end: Vec3, sources: &[(Vec3, f32)]) -> Option<[Vec3; 2]> {
    match sources {
        [] => None,
        [(center, diameter)] => {
            let cp = forcefield_control_point(start, end, *center, *diameter);
            Some([cp, cp])
        }
        [(c1, d1), (c2, d2), ..] => {
            let a = forcefield_control_point(start, end, *c1, *d1);
            let b = forcefield_control_point(start, end, *c2, *d2);
            if start.distance(a) > start.distance(b) {
                Some([b, a])
            } else {
                Some([a, b])
            }
        }
    }
}
