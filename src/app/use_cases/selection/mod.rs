//! Use-Case-Funktionen für die Selektion von Punkten, Connections und Forcefields.
//!
//! Aufgeteilt nach Einstieg:
//! - `toggle` — Klick-/Shift-Klick-Toggle, Aufheben, Manipulator- und Panel-Abgleich
//! - `dispatch` — Pointer-Down → Strahl → Treffer nach Modus-Priorität
//! - `cycle` — Tastatur-Zyklus durch alle Objekte einer Art
//! - `mode` — Wechsel des Interaktionsmodus

mod cycle;
mod dispatch;
mod mode;
mod toggle;

pub use cycle::select_next;
pub use dispatch::resolve_pointer_hit;
pub use mode::set_interaction_mode;
pub use toggle::{
    clear_selection, forget_removed, sync_after_restore, sync_manipulator, toggle_select,
};
