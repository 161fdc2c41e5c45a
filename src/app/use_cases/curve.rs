//! Connection-Curve-Engine: gerade Connections mit Forcefields zu Bezier-Kurven machen.
//!
//! Die Kontrollpunkte werden aus den bei der Promotion gebundenen Forcefields
//! abgeleitet und im Frame-Update laufend neu berechnet.

use super::editing::require_selected;
use crate::app::AppState;
use crate::core::scene::PositionLookup;
use crate::core::{Connection, CurveControl, CurveShape, EditError, EntityKind, Scene};
use crate::shared::curve_geometry::{derive_control_points, sample_cubic_bezier};
use crate::shared::options::CURVE_SEGMENTS;
use glam::Vec3;

/// Berechnet Kontrollpunkte und Samples einer Kurve aus den aktuellen Positionen.
///
/// `None`, wenn ein Endpunkt oder ein gebundenes Forcefield fehlt.
pub fn evaluate_curve(
    lookup: PositionLookup<'_>,
    start_id: u64,
    end_id: u64,
    control: CurveControl,
    segments: usize,
) -> Option<([Vec3; 2], Vec<Vec3>)> {
    let start = lookup.point(start_id)?;
    let end = lookup.point(end_id)?;
    let sources = control
        .forcefield_ids()
        .into_iter()
        .map(|id| lookup.forcefield(id).map(|f| (f.position, f.diameter())))
        .collect::<Option<Vec<_>>>()?;
    let [cp1, cp2] = derive_control_points(start, end, &sources)?;
    Some(([cp1, cp2], sample_cubic_bezier(start, cp1, cp2, end, segments)))
}

/// Macht eine Connection zur Kurve, gesteuert von `control`.
///
/// Die Connection bleibt unter ihrer ID genau einmal registriert; eine bereits
/// gekrümmte Connection wird an die neuen Forcefields gebunden.
pub fn promote_to_curve(
    scene: &mut Scene,
    connection_id: u64,
    control: CurveControl,
    segments: usize,
) -> Result<(), EditError> {
    let conn: &Connection = scene.connection(connection_id).ok_or(EditError::NotFound {
        kind: EntityKind::Connection,
        id: connection_id,
    })?;
    let (control_points, samples) =
        evaluate_curve(scene.lookup(), conn.start_id, conn.end_id, control, segments)
            .ok_or(EditError::NoControlSource)?;
    scene.promote_connection(
        connection_id,
        CurveShape {
            control,
            control_points,
        },
        samples,
    )
}

/// Wendet die selektierten Forcefields auf alle selektierten Connections an.
///
/// - keine Connection selektiert: `EmptySelection`
/// - kein Forcefield selektiert: `NoControlSource`
/// - mehr als zwei Forcefields: die ersten beiden werden verwendet, Rest mit Warnung
///
/// Nach der Promotion ist die Connection-Selektion leer. Gibt die IDs der
/// gekrümmten Connections zurück.
pub fn apply_force(state: &mut AppState) -> Result<Vec<u64>, EditError> {
    let connections = require_selected(state, EntityKind::Connection, 1)?;
    let forcefields: Vec<u64> = state.selection.forcefields.iter().copied().collect();

    let control = match forcefields.as_slice() {
        [] => return Err(EditError::NoControlSource),
        [single] => CurveControl::Single(*single),
        [first, second, rest @ ..] => {
            if !rest.is_empty() {
                log::warn!(
                    "Mehr als zwei Forcefields selektiert, ignoriert: {:?}",
                    rest
                );
            }
            CurveControl::Pair(*first, *second)
        }
    };

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let scene = state.scene_mut();
    let mut promoted = Vec::with_capacity(connections.len());
    for id in connections {
        match promote_to_curve(scene, id, control, CURVE_SEGMENTS) {
            Ok(()) => promoted.push(id),
            Err(e) => log::warn!("Connection {} nicht gekrümmt: {}", id, e),
        }
    }

    state.selection.connections.clear();
    state.editor.connection_cursor = None;
    log::info!(
        "{} Connection(s) mit {:?} gekrümmt",
        promoted.len(),
        control
    );
    Ok(promoted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConnectionShape;

    fn line_with_forcefields(forcefields: &[(Vec3, f32)]) -> (AppState, u64, Vec<u64>) {
        let mut state = AppState::new();
        let scene = state.scene_mut();
        let a = scene.add_point(Vec3::ZERO);
        let b = scene.add_point(Vec3::new(100.0, 0.0, 0.0));
        let conn = scene.add_connection(a, b).expect("Punkte existieren");
        let ffs = forcefields
            .iter()
            .map(|&(pos, d)| scene.add_forcefield(pos, d).expect("gültig"))
            .collect();
        (state, conn, ffs)
    }

    #[test]
    fn single_forcefield_gives_equal_control_points() {
        let (mut state, conn, ffs) = line_with_forcefields(&[(Vec3::new(50.0, 50.0, 0.0), 20.0)]);
        state.selection.connections.insert(conn);
        state.selection.forcefields.insert(ffs[0]);

        assert_eq!(apply_force(&mut state), Ok(vec![conn]));

        let curve = state
            .scene
            .connection(conn)
            .and_then(|c| c.curve())
            .expect("gekrümmt");
        assert_eq!(curve.control, CurveControl::Single(ffs[0]));
        assert!((curve.control_points[0] - Vec3::new(50.0, 40.0, 0.0)).length() < 1e-4);
        assert_eq!(curve.control_points[0], curve.control_points[1]);
        assert!(state.selection.connections.is_empty());
    }

    #[test]
    fn two_forcefields_are_ordered_from_start() {
        let (mut state, conn, ffs) = line_with_forcefields(&[
            (Vec3::new(70.0, 20.0, 0.0), 10.0),
            (Vec3::new(30.0, 20.0, 0.0), 10.0),
        ]);
        state.selection.connections.insert(conn);
        state.selection.forcefields.extend([ffs[0], ffs[1]]);

        apply_force(&mut state).expect("gültig");

        let curve = state
            .scene
            .connection(conn)
            .and_then(|c| c.curve())
            .expect("gekrümmt");
        assert!((curve.control_points[0] - Vec3::new(30.0, 15.0, 0.0)).length() < 1e-4);
        assert!((curve.control_points[1] - Vec3::new(70.0, 15.0, 0.0)).length() < 1e-4);
    }

    #[test]
    fn missing_forcefield_reports_no_control_source() {
        let (mut state, conn, _) = line_with_forcefields(&[]);
        state.selection.connections.insert(conn);

        assert_eq!(apply_force(&mut state), Err(EditError::NoControlSource));
        assert!(matches!(
            state.scene.connection(conn).map(|c| c.shape()),
            Some(ConnectionShape::Straight)
        ));
        assert!(!state.can_undo());
    }

    #[test]
    fn missing_connection_reports_empty_selection() {
        let (mut state, _, ffs) = line_with_forcefields(&[(Vec3::Y, 10.0)]);
        state.selection.forcefields.insert(ffs[0]);
        assert!(matches!(
            apply_force(&mut state),
            Err(EditError::EmptySelection {
                kind: EntityKind::Connection,
                ..
            })
        ));
    }

    #[test]
    fn extra_forcefields_are_ignored() {
        let (mut state, conn, ffs) = line_with_forcefields(&[
            (Vec3::new(30.0, 20.0, 0.0), 10.0),
            (Vec3::new(70.0, 20.0, 0.0), 10.0),
            (Vec3::new(50.0, -90.0, 0.0), 10.0),
        ]);
        state.selection.connections.insert(conn);
        state.selection.forcefields.extend(ffs.iter().copied());

        apply_force(&mut state).expect("gültig");
        let curve = state
            .scene
            .connection(conn)
            .and_then(|c| c.curve())
            .expect("gekrümmt");
        assert_eq!(curve.control, CurveControl::Pair(ffs[0], ffs[1]));
    }

    #[test]
    fn curved_connection_can_be_rebound() {
        let (mut state, conn, ffs) = line_with_forcefields(&[
            (Vec3::new(50.0, 50.0, 0.0), 20.0),
            (Vec3::new(50.0, -50.0, 0.0), 20.0),
        ]);
        state.selection.connections.insert(conn);
        state.selection.forcefields.insert(ffs[0]);
        apply_force(&mut state).expect("gültig");

        state.selection.connections.insert(conn);
        state.selection.forcefields.clear();
        state.selection.forcefields.insert(ffs[1]);
        apply_force(&mut state).expect("gültig");

        assert_eq!(state.scene.curved_connections().count(), 1);
        assert_eq!(state.count(EntityKind::Connection), 1);
        let curve = state
            .scene
            .connection(conn)
            .and_then(|c| c.curve())
            .expect("gekrümmt");
        assert_eq!(curve.control, CurveControl::Single(ffs[1]));
    }
}
