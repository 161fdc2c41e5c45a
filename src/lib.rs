//! StringingTool-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, SelectionState, ViewState};
pub use core::{
    Camera3D, Connection, ConnectionGroup, ConnectionShape, CurveControl, EditError, EntityKind,
    EntityRef, Forcefield, Point, Scene,
};
pub use shared::{EditorOptions, RenderScene};
