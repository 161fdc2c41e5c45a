//! UI-Layer mit egui: Menü, Properties-Panel, Statusleiste, Optionen-Dialog.
//!
//! Keyboard-Shortcuts und Viewport-Input sind in eigene Dateien extrahiert.
//! Alle Komponenten lesen den AppState nur und liefern `AppIntent`s.

pub mod input;
mod keyboard;
pub mod menu;
pub mod options_dialog;
pub mod properties;
pub mod status;

pub use input::InputState;
pub use menu::render_menu;
pub use options_dialog::show_options_dialog;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
