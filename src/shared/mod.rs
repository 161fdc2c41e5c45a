//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod curve_geometry;
pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use render_scene::{RenderGrid, RenderLine, RenderScene, RenderSphere};
