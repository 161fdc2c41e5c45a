//! Entity-Registry: besitzt alle Punkte, Forcefields, Connections und Gruppen.
//!
//! Connections referenzieren Punkte und Forcefields nur per ID. Beim Entfernen
//! eines referenzierten Objekts werden abhängige Connections kaskadiert mit
//! entfernt, sodass nie eine Connection auf ein gelöschtes Objekt zeigt.

use super::{
    Connection, ConnectionGroup, CurveShape, EditError, EntityKind, Forcefield, Point,
};
use glam::Vec3;
use indexmap::{IndexMap, IndexSet};

/// Ergebnis einer Entfernung inklusive kaskadierter Connections
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalReport {
    /// IDs der direkt entfernten Objekte
    pub removed: Vec<u64>,
    /// IDs der Connections, die als Folge mit entfernt wurden
    pub cascaded_connections: Vec<u64>,
}

impl RemovalReport {
    /// Führt zwei Reports zusammen (für Mehrfach-Entfernung).
    pub fn merge(&mut self, other: RemovalReport) {
        self.removed.extend(other.removed);
        self.cascaded_connections.extend(other.cascaded_connections);
    }

    /// Alle entfernten Connection-IDs, direkt oder kaskadiert.
    pub fn all_connections<'a>(&'a self, kind: EntityKind) -> impl Iterator<Item = u64> + 'a {
        let direct: &[u64] = if kind == EntityKind::Connection {
            &self.removed
        } else {
            &[]
        };
        direct
            .iter()
            .chain(self.cascaded_connections.iter())
            .copied()
    }
}

/// Lesender Zugriff auf Punkt- und Forcefield-Daten während Connections
/// mutabel iteriert werden.
#[derive(Clone, Copy)]
pub struct PositionLookup<'a> {
    points: &'a IndexMap<u64, Point>,
    forcefields: &'a IndexMap<u64, Forcefield>,
}

impl<'a> PositionLookup<'a> {
    pub fn point(&self, id: u64) -> Option<Vec3> {
        self.points.get(&id).map(|p| p.position)
    }

    pub fn forcefield(&self, id: u64) -> Option<&'a Forcefield> {
        self.forcefields.get(&id)
    }
}

/// Alle lebenden Szenenobjekte
#[derive(Debug, Clone)]
pub struct Scene {
    points: IndexMap<u64, Point>,
    forcefields: IndexMap<u64, Forcefield>,
    connections: IndexMap<u64, Connection>,
    groups: IndexMap<u64, ConnectionGroup>,
    /// Nächste freie ID (gemeinsam für alle Arten, IDs werden nie wiederverwendet)
    next_id: u64,
    /// Anzahl jemals angelegter Gruppen (für fortlaufende Gruppennamen)
    groups_created: u64,
}

impl Scene {
    /// Erstellt eine leere Szene
    pub fn new() -> Self {
        Self {
            points: IndexMap::new(),
            forcefields: IndexMap::new(),
            connections: IndexMap::new(),
            groups: IndexMap::new(),
            next_id: 1,
            groups_created: 0,
        }
    }

    fn allocate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // ── Erzeugen ───────────────────────────────────────────────────

    /// Legt ein Objekt mit Startposition an (Forcefields mit Standard-Durchmesser).
    pub fn create(&mut self, kind: EntityKind, position: Vec3) -> Result<u64, EditError> {
        match kind {
            EntityKind::Point => Ok(self.add_point(position)),
            EntityKind::Forcefield => self.add_forcefield(position, Forcefield::DEFAULT_DIAMETER),
            EntityKind::Connection => Err(EditError::PositionlessKind(kind)),
        }
    }

    /// Fügt einen Punkt hinzu und gibt seine neue ID zurück
    pub fn add_point(&mut self, position: Vec3) -> u64 {
        let id = self.allocate_id();
        self.points.insert(id, Point::new(id, position));
        id
    }

    /// Fügt ein Forcefield hinzu. Der Durchmesser muss positiv sein.
    pub fn add_forcefield(&mut self, position: Vec3, diameter: f32) -> Result<u64, EditError> {
        let forcefield = Forcefield::new(self.next_id, position, diameter)?;
        let id = self.allocate_id();
        self.forcefields.insert(id, forcefield);
        Ok(id)
    }

    /// Verbindet zwei bestehende Punkte mit einer geraden Connection.
    pub fn add_connection(&mut self, start_id: u64, end_id: u64) -> Result<u64, EditError> {
        let start_pos = self.require_point(start_id)?;
        let end_pos = self.require_point(end_id)?;
        let id = self.allocate_id();
        self.connections
            .insert(id, Connection::straight(id, start_id, end_id, start_pos, end_pos));
        Ok(id)
    }

    fn require_point(&self, id: u64) -> Result<Vec3, EditError> {
        self.points
            .get(&id)
            .map(|p| p.position)
            .ok_or(EditError::NotFound {
                kind: EntityKind::Point,
                id,
            })
    }

    // ── Entfernen ──────────────────────────────────────────────────

    /// Entfernt ein Objekt inklusive aller davon abhängigen Connections.
    pub fn remove(&mut self, kind: EntityKind, id: u64) -> Result<RemovalReport, EditError> {
        let found = match kind {
            EntityKind::Point => self.points.shift_remove(&id).is_some(),
            EntityKind::Forcefield => self.forcefields.shift_remove(&id).is_some(),
            EntityKind::Connection => self.connections.shift_remove(&id).is_some(),
        };
        if !found {
            return Err(EditError::NotFound { kind, id });
        }

        let cascaded: Vec<u64> = match kind {
            EntityKind::Point => self
                .connections
                .values()
                .filter(|c| c.references_point(id))
                .map(|c| c.id)
                .collect(),
            EntityKind::Forcefield => self
                .connections
                .values()
                .filter(|c| c.is_controlled_by(id))
                .map(|c| c.id)
                .collect(),
            EntityKind::Connection => Vec::new(),
        };
        for conn_id in &cascaded {
            self.connections.shift_remove(conn_id);
        }

        let report = RemovalReport {
            removed: vec![id],
            cascaded_connections: cascaded,
        };
        self.drop_from_groups(report.all_connections(kind).collect::<Vec<_>>());
        Ok(report)
    }

    fn drop_from_groups(&mut self, connection_ids: Vec<u64>) {
        if connection_ids.is_empty() {
            return;
        }
        for group in self.groups.values_mut() {
            for id in &connection_ids {
                group.connection_ids.shift_remove(id);
            }
        }
        self.groups.retain(|_, g| !g.connection_ids.is_empty());
    }

    // ── Positionen ─────────────────────────────────────────────────

    /// Aktuelle Position eines Punkts oder Forcefields
    pub fn position(&self, kind: EntityKind, id: u64) -> Option<Vec3> {
        match kind {
            EntityKind::Point => self.points.get(&id).map(|p| p.position),
            EntityKind::Forcefield => self.forcefields.get(&id).map(|f| f.position),
            EntityKind::Connection => None,
        }
    }

    /// Setzt die Position eines Punkts oder Forcefields.
    /// Connection-Geometrie folgt beim nächsten Frame-Update.
    pub fn set_position(
        &mut self,
        kind: EntityKind,
        id: u64,
        position: Vec3,
    ) -> Result<(), EditError> {
        let slot = match kind {
            EntityKind::Point => self.points.get_mut(&id).map(|p| &mut p.position),
            EntityKind::Forcefield => self.forcefields.get_mut(&id).map(|f| &mut f.position),
            EntityKind::Connection => return Err(EditError::PositionlessKind(kind)),
        };
        let slot = slot.ok_or(EditError::NotFound { kind, id })?;
        *slot = position;
        Ok(())
    }

    /// Setzt den Durchmesser eines Forcefields
    pub fn set_forcefield_diameter(&mut self, id: u64, diameter: f32) -> Result<(), EditError> {
        self.forcefields
            .get_mut(&id)
            .ok_or(EditError::NotFound {
                kind: EntityKind::Forcefield,
                id,
            })?
            .set_diameter(diameter)
    }

    // ── Abfragen ───────────────────────────────────────────────────

    pub fn contains(&self, kind: EntityKind, id: u64) -> bool {
        match kind {
            EntityKind::Point => self.points.contains_key(&id),
            EntityKind::Forcefield => self.forcefields.contains_key(&id),
            EntityKind::Connection => self.connections.contains_key(&id),
        }
    }

    /// IDs aller lebenden Objekte einer Art in Erstellungsreihenfolge
    pub fn ids(&self, kind: EntityKind) -> Vec<u64> {
        match kind {
            EntityKind::Point => self.points.keys().copied().collect(),
            EntityKind::Forcefield => self.forcefields.keys().copied().collect(),
            EntityKind::Connection => self.connections.keys().copied().collect(),
        }
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Point => self.points.len(),
            EntityKind::Forcefield => self.forcefields.len(),
            EntityKind::Connection => self.connections.len(),
        }
    }

    pub fn point(&self, id: u64) -> Option<&Point> {
        self.points.get(&id)
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> + '_ {
        self.points.values()
    }

    pub fn forcefield(&self, id: u64) -> Option<&Forcefield> {
        self.forcefields.get(&id)
    }

    pub fn forcefields(&self) -> impl Iterator<Item = &Forcefield> + '_ {
        self.forcefields.values()
    }

    pub fn connection(&self, id: u64) -> Option<&Connection> {
        self.connections.get(&id)
    }

    pub fn connections(&self) -> impl Iterator<Item = &Connection> + '_ {
        self.connections.values()
    }

    /// Abgeleitete Sicht: alle geraden Connections
    pub fn straight_connections(&self) -> impl Iterator<Item = &Connection> + '_ {
        self.connections.values().filter(|c| !c.is_curved())
    }

    /// Abgeleitete Sicht: alle gekrümmten Connections
    pub fn curved_connections(&self) -> impl Iterator<Item = &Connection> + '_ {
        self.connections.values().filter(|c| c.is_curved())
    }

    /// Prüft, ob bereits eine Connection mit exakt diesem Start/Ende existiert
    pub fn has_connection_between(&self, start_id: u64, end_id: u64) -> bool {
        self.connections
            .values()
            .any(|c| c.start_id == start_id && c.end_id == end_id)
    }

    /// Punkt- und Forcefield-Lookup plus mutable Connections (für das Frame-Update)
    pub fn split_for_update(
        &mut self,
    ) -> (
        PositionLookup<'_>,
        indexmap::map::ValuesMut<'_, u64, Connection>,
    ) {
        (
            PositionLookup {
                points: &self.points,
                forcefields: &self.forcefields,
            },
            self.connections.values_mut(),
        )
    }

    /// Lesender Lookup ohne mutable Connections
    pub fn lookup(&self) -> PositionLookup<'_> {
        PositionLookup {
            points: &self.points,
            forcefields: &self.forcefields,
        }
    }

    /// Ersetzt die Form einer Connection durch eine Kurve. Die Connection bleibt
    /// unter derselben ID genau einmal registriert.
    pub fn promote_connection(
        &mut self,
        id: u64,
        curve: CurveShape,
        samples: Vec<Vec3>,
    ) -> Result<(), EditError> {
        let conn = self
            .connections
            .get_mut(&id)
            .ok_or(EditError::NotFound {
                kind: EntityKind::Connection,
                id,
            })?;
        conn.set_curve(curve, samples);
        Ok(())
    }

    // ── Gruppen ────────────────────────────────────────────────────

    /// Legt eine Gruppe an. Bereits gruppierte Connections wechseln in die neue Gruppe.
    pub fn create_group(
        &mut self,
        name: impl Into<String>,
        connection_ids: impl IntoIterator<Item = u64>,
    ) -> Result<u64, EditError> {
        let members: IndexSet<u64> = connection_ids.into_iter().collect();
        if let Some(&missing) = members.iter().find(|id| !self.connections.contains_key(*id)) {
            return Err(EditError::NotFound {
                kind: EntityKind::Connection,
                id: missing,
            });
        }
        if members.is_empty() {
            return Err(EditError::EmptySelection {
                kind: EntityKind::Connection,
                required: 1,
                actual: 0,
            });
        }
        self.drop_from_groups(members.iter().copied().collect());
        let id = self.allocate_id();
        self.groups_created += 1;
        self.groups.insert(id, ConnectionGroup::new(id, name, members));
        Ok(id)
    }

    /// Entfernt alle Gruppen. Die Connections selbst bleiben erhalten.
    pub fn clear_groups(&mut self) -> usize {
        let count = self.groups.len();
        self.groups.clear();
        count
    }

    pub fn groups(&self) -> impl Iterator<Item = &ConnectionGroup> + '_ {
        self.groups.values()
    }

    pub fn group_mut(&mut self, id: u64) -> Option<&mut ConnectionGroup> {
        self.groups.get_mut(&id)
    }

    /// Gruppe, der die Connection angehört
    pub fn group_of(&self, connection_id: u64) -> Option<&ConnectionGroup> {
        self.groups
            .values()
            .find(|g| g.connection_ids.contains(&connection_id))
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Fortlaufende Nummer der nächsten Gruppe; sinkt nie durch Auflösen.
    pub fn next_group_number(&self) -> u64 {
        self.groups_created + 1
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
