//! Handler für Punkte, Connections, Forcefields und Positionsänderungen.

use super::warn_on_error;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Axis, EntityKind, EntityRef};
use glam::{Vec2, Vec3};

/// Legt einen neuen Punkt an.
pub fn add_point(state: &mut AppState) {
    use_cases::editing::add_point(state);
}

/// Legt ein neues Forcefield an.
pub fn add_forcefield(state: &mut AppState) {
    warn_on_error("Forcefield anlegen", use_cases::editing::add_forcefield(state));
}

/// Verkettet die selektierten Punkte mit Connections.
pub fn connect_selected_points(state: &mut AppState) {
    warn_on_error(
        "Punkte verbinden",
        use_cases::editing::connect_selected_points(state),
    );
}

/// Entfernt alle selektierten Objekte einer Art.
pub fn remove_selected(state: &mut AppState, kind: EntityKind) {
    warn_on_error(
        "Entfernen",
        use_cases::editing::remove_selected(state, kind),
    );
}

/// Gleicht die selektierten Punkte auf einer Achse an.
pub fn level_selected_points(state: &mut AppState, axis: Axis) {
    warn_on_error(
        "Punkte angleichen",
        use_cases::editing::level_selected_points(state, axis),
    );
}

/// Setzt die Position eines Objekts (Positionsfeld).
pub fn set_entity_position(state: &mut AppState, target: EntityRef, position: Vec3) {
    warn_on_error(
        "Position setzen",
        use_cases::editing::set_entity_position(state, target, position),
    );
}

/// Setzt den Durchmesser eines Forcefields.
pub fn set_forcefield_diameter(state: &mut AppState, id: u64, diameter: f32) {
    let diameter = state.options.clamp_diameter(diameter);
    warn_on_error(
        "Durchmesser setzen",
        use_cases::editing::set_forcefield_diameter(state, id, diameter),
    );
}

/// Startet eine fortlaufende Eigenschafts-Bearbeitung (nimmt Undo-Snapshot auf).
pub fn begin_property_edit(state: &mut AppState) {
    state.record_undo_snapshot();
}

/// Startet einen Manipulator-Drag.
pub fn begin_manipulator_drag(state: &mut AppState, screen_pos: Vec2) {
    use_cases::editing::begin_manipulator_drag(state, screen_pos);
}

/// Aktualisiert einen laufenden Manipulator-Drag.
pub fn update_manipulator_drag(state: &mut AppState, screen_pos: Vec2) {
    warn_on_error(
        "Manipulator",
        use_cases::editing::update_manipulator_drag(state, screen_pos),
    );
}

/// Beendet einen Manipulator-Drag.
pub fn end_manipulator_drag(state: &mut AppState) {
    use_cases::editing::end_manipulator_drag(state);
}
