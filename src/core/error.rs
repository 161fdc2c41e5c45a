//! Fehlertypen für Editier-Operationen.
//!
//! Alle Varianten sind Vorbedingungsfehler: lokal, nicht fatal und ohne
//! Zustandsänderung. Handler melden sie als Warnung.

use super::EntityKind;

/// Vorbedingungsfehler einer Editier-Operation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditError {
    /// Zu wenige Objekte der benötigten Art selektiert
    #[error("{kind}: mindestens {required} Selektion(en) benötigt, vorhanden: {actual}")]
    EmptySelection {
        kind: EntityKind,
        required: usize,
        actual: usize,
    },
    /// Kurvenbildung ohne selektiertes Forcefield
    #[error("Keine Kontrollquelle: kein Forcefield selektiert")]
    NoControlSource,
    /// Referenziertes Objekt existiert nicht (mehr)
    #[error("{kind} {id} existiert nicht")]
    NotFound { kind: EntityKind, id: u64 },
    /// Forcefield-Durchmesser muss positiv sein
    #[error("Ungültiger Durchmesser {0}: muss > 0 sein")]
    InvalidDiameter(f32),
    /// Operation benötigt eine Position, die diese Art nicht hat
    #[error("{0} hat keine eigene Position")]
    PositionlessKind(EntityKind),
}
