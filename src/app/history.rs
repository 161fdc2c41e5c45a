//! Snapshot-basiertes Undo/Redo für Szene und Selektion.

use super::SelectionState;
use crate::core::Scene;
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der Szenen-Klon findet erst beim nächsten `Arc::make_mut()` statt.
#[derive(Clone)]
pub struct Snapshot {
    /// Szene (Arc-Klon für O(1)-Snapshot)
    pub scene: Arc<Scene>,
    /// Selektionszustand zum Zeitpunkt des Snapshots
    pub selection: SelectionState,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            scene: Arc::clone(&state.scene),
            selection: state.selection.clone(),
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    ///
    /// Manipulator und Positions-Panel müssen danach vom Aufrufer
    /// an die wiederhergestellte Selektion angeglichen werden.
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.scene = self.scene;
        state.selection = self.selection;
        state.editor.drag = None;
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Legt einen fertigen Snapshot ab und verwirft den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Holt den letzten Undo-Snapshot und legt `current` auf den Redo-Stack.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        if let Some(prev) = self.undo_stack.pop() {
            if self.redo_stack.len() >= self.max_depth {
                self.redo_stack.remove(0);
            }
            self.redo_stack.push(current);
            Some(prev)
        } else {
            None
        }
    }

    /// Holt den letzten Redo-Snapshot und legt `current` auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        if let Some(next) = self.redo_stack.pop() {
            if self.undo_stack.len() >= self.max_depth {
                self.undo_stack.remove(0);
            }
            self.undo_stack.push(current);
            Some(next)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use glam::Vec3;

    fn make_snapshot_with_point_count(count: usize) -> Snapshot {
        let mut scene = Scene::new();
        for i in 1..=count {
            let f = i as f32;
            scene.add_point(Vec3::new(f * 10.0, 0.0, f * 7.0));
        }
        let mut state = AppState::new();
        state.scene = Arc::new(scene);
        Snapshot::from_state(&state)
    }

    fn point_count(snap: &Snapshot) -> usize {
        snap.scene.count(crate::core::EntityKind::Point)
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_restores_previous_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_point_count(2));

        let current = make_snapshot_with_point_count(5);
        let restored = history
            .pop_undo_with_current(current)
            .expect("undo vorhanden");

        assert_eq!(point_count(&restored), 2);
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn redo_restores_undone_snapshot() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_point_count(2));

        let _restored = history.pop_undo_with_current(make_snapshot_with_point_count(5));
        let redone = history
            .pop_redo_with_current(make_snapshot_with_point_count(2))
            .expect("redo vorhanden");

        assert_eq!(point_count(&redone), 5);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn new_record_clears_redo_stack() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record_snapshot(make_snapshot_with_point_count(1));
        let _restored = history.pop_undo_with_current(make_snapshot_with_point_count(3));
        assert!(history.can_redo());

        history.record_snapshot(make_snapshot_with_point_count(7));
        assert!(!history.can_redo());
    }

    #[test]
    fn respects_max_depth() {
        let mut history = EditHistory::new_with_capacity(3);
        for i in 1..=5 {
            history.record_snapshot(make_snapshot_with_point_count(i));
        }

        let mut undo_count = 0;
        while history.can_undo() {
            history.pop_undo_with_current(make_snapshot_with_point_count(99));
            undo_count += 1;
        }
        assert_eq!(undo_count, 3);
    }

    #[test]
    fn snapshot_apply_to_restores_state() {
        let mut original_state = AppState::new();
        let id = original_state.scene_mut().add_point(Vec3::new(1.0, 2.0, 3.0));
        original_state.selection.points.insert(id);

        let snap = Snapshot::from_state(&original_state);

        let mut target_state = AppState::new();
        snap.apply_to(&mut target_state);

        assert_eq!(target_state.count(crate::core::EntityKind::Point), 1);
        assert!(target_state.selection.points.contains(&id));
    }

    #[test]
    fn snapshot_is_not_affected_by_later_mutation() {
        let mut state = AppState::new();
        state.scene_mut().add_point(Vec3::ZERO);
        let snap = Snapshot::from_state(&state);

        state.scene_mut().add_point(Vec3::ONE);

        assert_eq!(point_count(&snap), 1);
        assert_eq!(state.count(crate::core::EntityKind::Point), 2);
    }
}
