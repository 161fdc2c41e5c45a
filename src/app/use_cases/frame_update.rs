//! Frame-Update: leitet jede Connection-Geometrie aus den aktuellen Positionen ab.
//!
//! Läuft einmal pro gerendertem Frame, nach allen Eingaben dieses Frames.
//! Kein Dirty-Tracking: Aufwand O(Connections × Samples) pro Frame.

use super::curve::evaluate_curve;
use crate::core::{ConnectionShape, Scene};

/// Statistik eines Frame-Updates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Aktualisierte gerade Connections
    pub straight: usize,
    /// Neu abgetastete Kurven
    pub curved: usize,
    /// Kurven, deren Quellen fehlten (Geometrie unverändert)
    pub stale: usize,
}

/// Schreibt die Geometrie aller Connections neu.
///
/// Gerade Connections übernehmen die Endpunkt-Positionen; Kurven berechnen ihre
/// Kontrollpunkte aus den gebundenen Forcefields und tasten neu ab.
pub fn refresh_connection_geometry(scene: &mut Scene, segments: usize) -> FrameStats {
    let mut stats = FrameStats::default();
    let (lookup, connections) = scene.split_for_update();

    for conn in connections {
        match conn.shape() {
            ConnectionShape::Straight => {
                let (Some(start), Some(end)) = (lookup.point(conn.start_id), lookup.point(conn.end_id))
                else {
                    stats.stale += 1;
                    continue;
                };
                conn.update_straight_geometry(start, end);
                stats.straight += 1;
            }
            ConnectionShape::Curved(curve) => {
                match evaluate_curve(lookup, conn.start_id, conn.end_id, curve.control, segments) {
                    Some((control_points, samples)) => {
                        conn.refresh_curve(control_points, samples);
                        stats.curved += 1;
                    }
                    None => stats.stale += 1,
                }
            }
        }
    }

    if stats.stale > 0 {
        log::debug!("Frame-Update: {} Connection(s) ohne Quellen", stats.stale);
    }
    stats
}
