//! Handler für Connection-Gruppen.

use super::warn_on_error;
use crate::app::use_cases;
use crate::app::AppState;

/// Gruppiert die selektierten Connections.
pub fn create_group(state: &mut AppState) {
    warn_on_error(
        "Gruppe anlegen",
        use_cases::groups::create_connection_group(state),
    );
}

/// Löst alle Gruppen auf.
pub fn clear_groups(state: &mut AppState) {
    use_cases::groups::clear_connection_groups(state);
}

/// Setzt die Steifigkeit einer Gruppe.
pub fn set_rigidity(state: &mut AppState, group_id: u64, rigidity: f32) {
    use_cases::groups::set_group_rigidity(state, group_id, rigidity);
}
