//! Core-Domänentypen: Punkte, Forcefields, Connections, Szene, Kamera, Picking.

pub mod camera;
pub mod connection;
pub mod entity;
pub mod error;
pub mod forcefield;
pub mod group;
pub mod picking;
pub mod point;
/// Entity-Registry mit allen lebenden Punkten, Forcefields, Connections und Gruppen
pub mod scene;

pub use camera::Camera3D;
pub use connection::{Connection, ConnectionShape, CurveControl, CurveShape};
pub use entity::{Axis, EntityKind, EntityRef};
pub use error::EditError;
pub use forcefield::Forcefield;
pub use group::ConnectionGroup;
pub use picking::{PickHit, Ray};
pub use point::Point;
pub use scene::{PositionLookup, RemovalReport, Scene};
