//! Application State — zentrale Datenhaltung.

mod app_state;
mod editor;
mod selection;
mod view;

pub use app_state::AppState;
pub use editor::{EditorState, InteractionMode, ManipulatorDrag, ManipulatorState};
pub use selection::SelectionState;
pub use view::{camera_from_options, Layer, MeshState, ViewState};
