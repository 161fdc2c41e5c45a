use crate::app::state::Layer;
use crate::core::{Axis, EntityKind};
use crate::shared::EditorOptions;
use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Anwendung beenden
    ExitRequested,

    // ── Viewport & Kamera ───────────────────────────────────────
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um den Zielpunkt drehen (Delta in Pixeln)
    CameraOrbit { delta_px: Vec2 },
    /// Kamera-Abstand ändern (Faktor > 1 = heraus)
    CameraZoom { factor: f32 },
    /// Kamera auf Startzustand zurücksetzen
    ResetCameraRequested,

    // ── Pointer ─────────────────────────────────────────────────
    /// Pointer-Down im Viewport (Position relativ zur linken oberen Ecke)
    PointerDown { screen_pos: Vec2, shift: bool },
    /// Drag am Manipulator-Griff gestartet
    ManipulatorDragStarted { screen_pos: Vec2 },
    /// Manipulator wird gezogen
    ManipulatorDragged { screen_pos: Vec2 },
    /// Manipulator losgelassen
    ManipulatorDragEnded,

    // ── Selektion ───────────────────────────────────────────────
    /// Selektion einer Art aufheben
    DeselectKindRequested { kind: EntityKind },
    /// Gesamte Selektion aufheben (Taste `d`)
    DeselectAllRequested,
    /// Nächstes Objekt einer Art selektieren (Tasten `p`/`c`/`f`)
    SelectNextRequested { kind: EntityKind, additive: bool },
    /// Forcefield-Bearbeitungsmodus umschalten
    ToggleForcefieldEditRequested,

    // ── Editing ─────────────────────────────────────────────────
    /// Beginn einer fortlaufenden Feldbearbeitung (Slider/Drag-Feld)
    PropertyEditStarted,
    /// Neuen Punkt anlegen
    AddPointRequested,
    /// Selektierte Punkte löschen
    RemovePointsRequested,
    /// Selektierte Punkte verketten
    ConnectPointsRequested,
    /// Selektierte Connections löschen
    RemoveConnectionsRequested,
    /// Neues Forcefield anlegen
    AddForcefieldRequested,
    /// Selektierte Forcefields löschen
    RemoveForcefieldsRequested,
    /// Selektion nach Priorität löschen (Taste `x`)
    DeleteSelectedRequested,
    /// Kraft anwenden: selektierte Connections zu Kurven machen (Taste `s`)
    ApplyForceRequested,
    /// Selektierte Punkte auf einer Achse angleichen
    LevelPointsRequested { axis: Axis },
    /// Positionsfeld im Panel geändert
    PositionFieldEdited { axis: Axis, value: f32 },
    /// Durchmesser eines Forcefields geändert
    ForcefieldDiameterEdited { id: u64, diameter: f32 },

    // ── Gruppen ─────────────────────────────────────────────────
    /// Gruppe aus selektierten Connections bilden
    CreateGroupRequested,
    /// Alle Gruppen auflösen
    ClearGroupsRequested,
    /// Steifigkeit einer Gruppe geändert
    GroupRigidityEdited { group_id: u64, rigidity: f32 },

    // ── Mesh & Sichtbarkeit ─────────────────────────────────────
    /// Export-Mesh aus allen Connections erzeugen
    CreateMeshRequested,
    /// Röhrendicke geändert
    MeshThicknessEdited { thickness: f32 },
    /// Ebene ein-/ausblenden
    LayerVisibilityToggled { layer: Layer },

    // ── History ─────────────────────────────────────────────────
    UndoRequested,
    RedoRequested,

    // ── Optionen ────────────────────────────────────────────────
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Geänderte Optionen übernehmen und speichern
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standard zurücksetzen
    ResetOptionsRequested,
}
