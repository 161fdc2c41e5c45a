//! Use-Case: Forcefields anlegen und Durchmesser ändern.

use super::points::random_ground_position;
use crate::app::AppState;
use crate::core::EditError;

/// Legt ein Forcefield mit Standard-Durchmesser an zufälliger Bodenposition an.
pub fn add_forcefield(state: &mut AppState) -> Result<u64, EditError> {
    let position = random_ground_position(state);
    let diameter = state.options.forcefield_default_diameter;

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let id = state.scene_mut().add_forcefield(position, diameter)?;
    log::info!("Forcefield {} angelegt (Durchmesser {:.1})", id, diameter);
    Ok(id)
}

/// Setzt den Durchmesser eines Forcefields. Nicht-positive Werte werden abgelehnt.
///
/// Kein Snapshot: fortlaufende Slider-Bearbeitungen nehmen ihn über
/// `BeginPropertyEdit` einmal zu Beginn auf.
pub fn set_forcefield_diameter(
    state: &mut AppState,
    id: u64,
    diameter: f32,
) -> Result<(), EditError> {
    if diameter <= 0.0 || !diameter.is_finite() {
        return Err(EditError::InvalidDiameter(diameter));
    }
    state.scene_mut().set_forcefield_diameter(id, diameter)?;
    log::debug!("Forcefield {}: Durchmesser {:.1}", id, diameter);
    Ok(())
}
