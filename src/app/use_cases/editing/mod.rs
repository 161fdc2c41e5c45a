//! Use-Case-Funktionen für das Editieren von Punkten, Connections und Forcefields.
//!
//! Aufgeteilt nach Operation:
//! - `points` — Punkte anlegen und auf einer Achse angleichen
//! - `connect` — Selektierte Punkte verketten
//! - `forcefields` — Forcefields anlegen, Durchmesser ändern
//! - `removal` — Selektierte Objekte mit Kaskade entfernen
//! - `position` — Positionsfelder und Manipulator-Drag

mod connect;
mod forcefields;
mod points;
mod position;
mod removal;

pub use connect::connect_selected_points;
pub use forcefields::{add_forcefield, set_forcefield_diameter};
pub use points::{add_point, level_selected_points};
pub use position::{
    begin_manipulator_drag, end_manipulator_drag, set_entity_position, update_manipulator_drag,
};
pub use removal::{remove_selected, require_selected};
