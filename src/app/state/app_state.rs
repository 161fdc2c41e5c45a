use crate::app::history::{EditHistory, Snapshot};
use crate::app::CommandLog;
use crate::core::{EntityKind, Scene};
use crate::shared::EditorOptions;
use std::sync::Arc;

use super::{EditorState, SelectionState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Entity-Registry (Arc für O(1)-Snapshots, Copy-on-Write bei Mutation)
    pub scene: Arc<Scene>,
    /// View-State
    pub view: ViewState,
    /// Selection-State
    pub selection: SelectionState,
    /// Editor-State (Modus, Manipulator, Positions-Panel)
    pub editor: EditorState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen (Farben, Größen, Kamera)
    pub options: EditorOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den gegebenen Optionen (Bereiche werden korrigiert)
    pub fn with_options(options: EditorOptions) -> Self {
        let options = options.sanitized();
        Self {
            scene: Arc::new(Scene::new()),
            view: ViewState::from_options(&options),
            selection: SelectionState::new(),
            editor: EditorState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.undo_depth),
            options,
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Mutable Szene (klont nur, wenn ein Snapshot sie noch teilt)
    pub fn scene_mut(&mut self) -> &mut Scene {
        Arc::make_mut(&mut self.scene)
    }

    /// Anzahl lebender Objekte einer Art (für UI-Anzeige)
    pub fn count(&self, kind: EntityKind) -> usize {
        self.scene.count(kind)
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Use-Cases.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
