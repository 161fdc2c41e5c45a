use crate::core::{EntityKind, EntityRef};
use indexmap::IndexSet;

/// Selektionsmengen je Entity-Art (in Selektionsreihenfolge)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Selektierte Punkt-IDs
    pub points: IndexSet<u64>,
    /// Selektierte Connection-IDs
    pub connections: IndexSet<u64>,
    /// Selektierte Forcefield-IDs
    pub forcefields: IndexSet<u64>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selektionsmenge einer Art
    pub fn set(&self, kind: EntityKind) -> &IndexSet<u64> {
        match kind {
            EntityKind::Point => &self.points,
            EntityKind::Connection => &self.connections,
            EntityKind::Forcefield => &self.forcefields,
        }
    }

    /// Mutable Selektionsmenge einer Art
    pub fn set_mut(&mut self, kind: EntityKind) -> &mut IndexSet<u64> {
        match kind {
            EntityKind::Point => &mut self.points,
            EntityKind::Connection => &mut self.connections,
            EntityKind::Forcefield => &mut self.forcefields,
        }
    }

    pub fn is_selected(&self, entity: EntityRef) -> bool {
        self.set(entity.kind).contains(&entity.id)
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.set(kind).len()
    }

    /// Einziges selektiertes Objekt einer Art (nur bei genau einem Mitglied)
    pub fn single(&self, kind: EntityKind) -> Option<u64> {
        let set = self.set(kind);
        if set.len() == 1 {
            set.first().copied()
        } else {
            None
        }
    }

    /// Gibt `true` zurück, wenn in keiner Art etwas selektiert ist.
    pub fn is_empty(&self) -> bool {
        EntityKind::ALL.iter().all(|&kind| self.set(kind).is_empty())
    }

    /// Entfernt die IDs aus der Selektion einer Art.
    pub fn remove_ids(&mut self, kind: EntityKind, ids: impl IntoIterator<Item = u64>) {
        let set = self.set_mut(kind);
        for id in ids {
            set.shift_remove(&id);
        }
    }
}
