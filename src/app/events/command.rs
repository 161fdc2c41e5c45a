use crate::app::state::{InteractionMode, Layer};
use crate::core::{Axis, EntityKind, EntityRef};
use crate::shared::EditorOptions;
use glam::{Vec2, Vec3};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Selektion ───────────────────────────────────────────────
    /// Objekt selektieren (additiv = Shift-Toggle)
    SelectEntity { target: EntityRef, additive: bool },
    /// Selektion einer Art (oder aller Arten bei `None`) aufheben
    ClearSelection { kind: Option<EntityKind> },
    /// Nächstes Objekt einer Art selektieren
    SelectNext { kind: EntityKind, additive: bool },
    /// Interaktionsmodus setzen
    SetInteractionMode { mode: InteractionMode },

    // ── Editing ─────────────────────────────────────────────────
    /// Undo-Snapshot vor einer fortlaufenden Feldbearbeitung
    BeginPropertyEdit,
    /// Punkt anlegen (Mittelpunkt bei zwei selektierten, sonst zufällig)
    AddPoint,
    RemoveSelectedPoints,
    /// Selektierte Punkte in Selektionsreihenfolge verketten
    ConnectSelectedPoints,
    RemoveSelectedConnections,
    /// Forcefield an zufälliger Position anlegen
    AddForcefield,
    RemoveSelectedForcefields,
    /// Selektierte Connections mit selektierten Forcefields krümmen
    ApplyForce,
    /// Selektierte Punkte auf die Koordinate des ersten angleichen
    LevelSelectedPoints { axis: Axis },
    /// Position eines Punkts oder Forcefields setzen
    SetEntityPosition { target: EntityRef, position: Vec3 },
    /// Durchmesser eines Forcefields setzen
    SetForcefieldDiameter { id: u64, diameter: f32 },

    // ── Manipulator ─────────────────────────────────────────────
    BeginManipulatorDrag { screen_pos: Vec2 },
    UpdateManipulatorDrag { screen_pos: Vec2 },
    EndManipulatorDrag,

    // ── Gruppen ─────────────────────────────────────────────────
    CreateConnectionGroup,
    ClearConnectionGroups,
    SetGroupRigidity { group_id: u64, rigidity: f32 },

    // ── Mesh & Sichtbarkeit ─────────────────────────────────────
    /// Export-Vertex-Liste aus allen Connections aufbauen
    CreateMesh,
    SetMeshThickness { thickness: f32 },
    SetLayerVisibility { layer: Layer, visible: bool },

    // ── Kamera & Viewport ───────────────────────────────────────
    SetViewportSize { size: [f32; 2] },
    OrbitCamera { delta_px: Vec2 },
    ZoomCamera { factor: f32 },
    ResetCamera,

    // ── History ─────────────────────────────────────────────────
    Undo,
    Redo,

    // ── Optionen & Anwendung ────────────────────────────────────
    OpenOptionsDialog,
    CloseOptionsDialog,
    ApplyOptions { options: EditorOptions },
    ResetOptions,
    RequestExit,
}
