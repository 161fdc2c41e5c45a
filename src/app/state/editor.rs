use crate::core::{EntityKind, EntityRef};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Interaktionsmodus: bestimmt die Pick-Priorität des Pointer-Dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Punkte vor Connections, Forcefields nicht pickbar
    #[default]
    Standard,
    /// Forcefields vor Punkten vor Connections
    ForcefieldEdit,
}

impl InteractionMode {
    /// Pick-Reihenfolge der Entity-Arten in diesem Modus.
    pub fn pick_priority(self) -> &'static [EntityKind] {
        match self {
            InteractionMode::Standard => &[EntityKind::Point, EntityKind::Connection],
            InteractionMode::ForcefieldEdit => &[
                EntityKind::Forcefield,
                EntityKind::Point,
                EntityKind::Connection,
            ],
        }
    }
}

/// Anhängung des Drag-Manipulators je positionierbarer Art
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ManipulatorState {
    /// Punkt mit angehängtem Manipulator
    pub point: Option<u64>,
    /// Forcefield mit angehängtem Manipulator
    pub forcefield: Option<u64>,
    /// Zuletzt angehängte Art (aktiver Griff im Viewport)
    pub active: Option<EntityKind>,
}

impl ManipulatorState {
    /// Ziel des aktiven Griffs
    pub fn attached(&self) -> Option<EntityRef> {
        match self.active? {
            EntityKind::Point => self.point.map(EntityRef::point),
            EntityKind::Forcefield => self.forcefield.map(EntityRef::forcefield),
            EntityKind::Connection => None,
        }
    }
}

/// Laufender Manipulator-Drag
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManipulatorDrag {
    /// Gezogenes Objekt
    pub target: EntityRef,
    /// Normale der Drag-Ebene (Blickrichtung bei Drag-Start)
    pub plane_normal: Vec3,
    /// Abstand zwischen Griff-Treffer und Objektposition
    pub grab_offset: Vec3,
}

/// Editor-Zustand: Modus, Manipulator, Positions-Panel, Zyklus-Cursor
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Aktueller Interaktionsmodus
    pub mode: InteractionMode,
    /// Manipulator-Anhängung
    pub manipulator: ManipulatorState,
    /// Ziel des X/Y/Z-Positions-Panels (Werte werden live gelesen)
    pub position_panel: Option<EntityRef>,
    /// Laufender Drag (None = kein Drag)
    pub drag: Option<ManipulatorDrag>,
    /// Zyklus-Cursor für Punkte (Tastatur `p`)
    pub point_cursor: Option<usize>,
    /// Zyklus-Cursor für Connections (Tastatur `c`)
    pub connection_cursor: Option<usize>,
    /// Zyklus-Cursor für Forcefields (Tastatur `f`)
    pub forcefield_cursor: Option<usize>,
    /// Zufallsquelle für die Platzierung neuer Objekte
    pub placement_rng: StdRng,
}

impl EditorState {
    /// Erstellt den Standard-Editorzustand mit zufällig geseedeter Platzierung.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Erstellt den Editorzustand mit vorgegebener Zufallsquelle (deterministisch in Tests).
    pub fn with_rng(placement_rng: StdRng) -> Self {
        Self {
            mode: InteractionMode::Standard,
            manipulator: ManipulatorState::default(),
            position_panel: None,
            drag: None,
            point_cursor: None,
            connection_cursor: None,
            forcefield_cursor: None,
            placement_rng,
        }
    }

    /// Mutable Zyklus-Cursor einer Art
    pub fn cursor_mut(&mut self, kind: EntityKind) -> &mut Option<usize> {
        match kind {
            EntityKind::Point => &mut self.point_cursor,
            EntityKind::Connection => &mut self.connection_cursor,
            EntityKind::Forcefield => &mut self.forcefield_cursor,
        }
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
