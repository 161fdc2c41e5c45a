//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod curve;
pub mod editing;
pub mod export;
pub mod frame_update;
pub mod groups;
pub mod selection;
