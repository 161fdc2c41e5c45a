//! Handler für die Kurven-Promotion.

use super::warn_on_error;
use crate::app::use_cases;
use crate::app::AppState;

/// Wendet die selektierten Forcefields auf die selektierten Connections an.
pub fn apply_force(state: &mut AppState) {
    warn_on_error("Kraft anwenden", use_cases::curve::apply_force(state));
}
