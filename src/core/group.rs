//! Benannte Gruppe von Connections mit gemeinsamer Steifigkeit.

use indexmap::IndexSet;

/// Gruppe von Connections mit gemeinsamem Material und Rigidity-Wert
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionGroup {
    /// Eindeutige ID
    pub id: u64,
    /// Anzeigename
    pub name: String,
    /// Mitglieder in Einfügereihenfolge
    pub connection_ids: IndexSet<u64>,
    rigidity: f32,
}

impl ConnectionGroup {
    /// Standard-Steifigkeit neuer Gruppen.
    pub const DEFAULT_RIGIDITY: f32 = 1.0;
    /// Minimale Steifigkeit.
    pub const RIGIDITY_MIN: f32 = 0.0;
    /// Maximale Steifigkeit.
    pub const RIGIDITY_MAX: f32 = 2.0;

    /// Erstellt eine neue Gruppe mit Standard-Steifigkeit
    pub fn new(id: u64, name: impl Into<String>, connection_ids: IndexSet<u64>) -> Self {
        Self {
            id,
            name: name.into(),
            connection_ids,
            rigidity: Self::DEFAULT_RIGIDITY,
        }
    }

    pub fn rigidity(&self) -> f32 {
        self.rigidity
    }

    /// Setzt die Steifigkeit (geklemmt auf den gültigen Bereich).
    /// Hat keinen Einfluss auf die Kurvengeometrie.
    pub fn set_rigidity(&mut self, rigidity: f32) {
        self.rigidity = rigidity.clamp(Self::RIGIDITY_MIN, Self::RIGIDITY_MAX);
    }
}
