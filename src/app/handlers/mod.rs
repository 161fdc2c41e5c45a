//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod curve;
pub mod dialog;
pub mod editing;
pub mod groups;
pub mod history;
pub mod selection;
pub mod view;

use crate::core::EditError;

/// Meldet eine nicht erfüllte Vorbedingung als Warnung.
///
/// Vorbedingungsfehler brechen nur die Operation ab, nie die Sitzung.
fn warn_on_error<T>(operation: &str, result: Result<T, EditError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{}: {}", operation, e);
            None
        }
    }
}
