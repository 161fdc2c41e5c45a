//! Use-Case: Selektion umschalten und abhängigen Zustand abgleichen.

use crate::app::state::ManipulatorState;
use crate::app::AppState;
use crate::core::{EditError, EntityKind, EntityRef, RemovalReport};

/// Schaltet die Selektion eines Objekts um.
///
/// - `multi_select = false`: Selektion der Art leeren, dann nur das Objekt selektieren
/// - `multi_select = true`: Objekt hinzufügen oder, falls bereits selektiert, entfernen
///
/// Danach werden Manipulator und Positions-Panel an die neue Selektion angeglichen.
pub fn toggle_select(
    state: &mut AppState,
    target: EntityRef,
    multi_select: bool,
) -> Result<(), EditError> {
    if !state.scene.contains(target.kind, target.id) {
        return Err(EditError::NotFound {
            kind: target.kind,
            id: target.id,
        });
    }

    let set = state.selection.set_mut(target.kind);
    let now_selected = if multi_select {
        if set.shift_remove(&target.id) {
            false
        } else {
            set.insert(target.id);
            true
        }
    } else {
        set.clear();
        set.insert(target.id);
        true
    };

    log::debug!(
        "{} {} {} ({} selektiert)",
        target.kind,
        target.id,
        if now_selected { "selektiert" } else { "abgewählt" },
        state.selection.count(target.kind)
    );

    if target.kind.has_position() && now_selected {
        state.editor.position_panel = Some(target);
    }
    sync_manipulator(state, Some(target.kind));
    Ok(())
}

/// Hebt die Selektion einer Art auf (`None` = alle Arten).
pub fn clear_selection(state: &mut AppState, kind: Option<EntityKind>) {
    match kind {
        Some(kind) => state.selection.set_mut(kind).clear(),
        None => {
            for kind in EntityKind::ALL {
                state.selection.set_mut(kind).clear();
            }
        }
    }
    sync_manipulator(state, kind);
}

/// Entfernt direkt und kaskadiert gelöschte Objekte aus allen Selektionen.
pub fn forget_removed(state: &mut AppState, kind: EntityKind, report: &RemovalReport) {
    state
        .selection
        .remove_ids(kind, report.removed.iter().copied());
    state.selection.remove_ids(
        EntityKind::Connection,
        report.cascaded_connections.iter().copied(),
    );
    for cursor in [kind, EntityKind::Connection] {
        *state.editor.cursor_mut(cursor) = None;
    }
    sync_manipulator(state, Some(kind));
}

/// Gleicht den Zustand nach Undo/Redo an die wiederhergestellte Selektion an.
pub fn sync_after_restore(state: &mut AppState) {
    let scene = std::sync::Arc::clone(&state.scene);
    for kind in EntityKind::ALL {
        state
            .selection
            .set_mut(kind)
            .retain(|id| scene.contains(kind, *id));
    }
    sync_manipulator(state, None);
}

/// Hängt den Manipulator je Art genau dann an, wenn genau ein Objekt selektiert ist,
/// und hält das Positions-Panel auf einem selektierten Objekt.
///
/// `touched` ist die zuletzt geänderte Art; sie wird bei Anhängung zum aktiven Griff.
pub fn sync_manipulator(state: &mut AppState, touched: Option<EntityKind>) {
    let point = state.selection.single(EntityKind::Point);
    let forcefield = state.selection.single(EntityKind::Forcefield);
    let attached = |kind: &EntityKind| match kind {
        EntityKind::Point => point.is_some(),
        EntityKind::Forcefield => forcefield.is_some(),
        EntityKind::Connection => false,
    };
    let active = touched
        .filter(attached)
        .or(state.editor.manipulator.active.filter(attached))
        .or_else(|| {
            [EntityKind::Point, EntityKind::Forcefield]
                .into_iter()
                .find(attached)
        });
    state.editor.manipulator = ManipulatorState {
        point,
        forcefield,
        active,
    };

    if let Some(drag) = state.editor.drag {
        if state.editor.manipulator.attached() != Some(drag.target) {
            state.editor.drag = None;
        }
    }

    refresh_position_panel(state);
}

/// Panel-Ziel bleibt, solange es selektiert ist; sonst zuletzt selektiertes Objekt
/// derselben Art, sonst das einer anderen positionierbaren Art.
fn refresh_position_panel(state: &mut AppState) {
    if let Some(target) = state.editor.position_panel {
        if state.selection.is_selected(target) {
            return;
        }
    }
    let preferred = state
        .editor
        .position_panel
        .map(|t| t.kind)
        .unwrap_or(EntityKind::Point);
    let fallback_order = [preferred, EntityKind::Point, EntityKind::Forcefield];
    state.editor.position_panel = fallback_order.iter().find_map(|&kind| {
        state
            .selection
            .set(kind)
            .last()
            .map(|&id| EntityRef { kind, id })
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppState;
    use glam::Vec3;

    fn state_with(points: usize, forcefields: usize) -> (AppState, Vec<u64>, Vec<u64>) {
        let mut state = AppState::new();
        let scene = state.scene_mut();
        let p: Vec<u64> = (0..points)
            .map(|i| scene.add_point(Vec3::new(i as f32 * 10.0, 0.0, 0.0)))
            .collect();
        let f: Vec<u64> = (0..forcefields)
            .map(|i| {
                scene
                    .add_forcefield(Vec3::new(i as f32 * 10.0, 50.0, 0.0), 20.0)
                    .expect("gültiger Durchmesser")
            })
            .collect();
        (state, p, f)
    }

    #[test]
    fn plain_click_twice_selects_exactly_once() {
        let (mut state, p, _) = state_with(2, 0);
        toggle_select(&mut state, EntityRef::point(p[0]), false).expect("vorhanden");
        toggle_select(&mut state, EntityRef::point(p[0]), false).expect("vorhanden");
        assert_eq!(state.selection.points.len(), 1);
        assert!(state.selection.points.contains(&p[0]));
    }

    #[test]
    fn plain_click_replaces_selection_of_same_kind_only() {
        let (mut state, p, f) = state_with(2, 1);
        toggle_select(&mut state, EntityRef::forcefield(f[0]), false).expect("vorhanden");
        toggle_select(&mut state, EntityRef::point(p[0]), false).expect("vorhanden");
        toggle_select(&mut state, EntityRef::point(p[1]), false).expect("vorhanden");

        assert_eq!(state.selection.points.iter().copied().collect::<Vec<_>>(), vec![p[1]]);
        assert!(state.selection.forcefields.contains(&f[0]));
    }

    #[test]
    fn shift_toggle_is_its_own_inverse() {
        let (mut state, p, _) = state_with(3, 0);
        toggle_select(&mut state, EntityRef::point(p[0]), true).expect("vorhanden");
        let before = state.selection.clone();

        toggle_select(&mut state, EntityRef::point(p[2]), true).expect("vorhanden");
        toggle_select(&mut state, EntityRef::point(p[2]), true).expect("vorhanden");
        assert_eq!(state.selection, before);

        toggle_select(&mut state, EntityRef::point(p[0]), true).expect("vorhanden");
        assert!(state.selection.points.is_empty());
    }

    #[test]
    fn manipulator_attaches_only_for_single_selection() {
        let (mut state, p, f) = state_with(2, 2);

        toggle_select(&mut state, EntityRef::point(p[0]), true).expect("vorhanden");
        assert_eq!(state.editor.manipulator.point, Some(p[0]));

        toggle_select(&mut state, EntityRef::point(p[1]), true).expect("vorhanden");
        assert_eq!(state.editor.manipulator.point, None);

        toggle_select(&mut state, EntityRef::forcefield(f[1]), true).expect("vorhanden");
        assert_eq!(state.editor.manipulator.forcefield, Some(f[1]));
        assert_eq!(
            state.editor.manipulator.attached(),
            Some(EntityRef::forcefield(f[1]))
        );

        toggle_select(&mut state, EntityRef::point(p[1]), true).expect("vorhanden");
        assert_eq!(state.editor.manipulator.point, Some(p[0]));
        assert_eq!(state.editor.manipulator.attached(), Some(EntityRef::point(p[0])));
    }

    #[test]
    fn unknown_entity_is_rejected_without_change() {
        let (mut state, _, _) = state_with(1, 0);
        let before = state.selection.clone();
        assert!(toggle_select(&mut state, EntityRef::point(999), false).is_err());
        assert_eq!(state.selection, before);
    }

    #[test]
    fn position_panel_follows_selection() {
        let (mut state, p, _) = state_with(2, 0);
        toggle_select(&mut state, EntityRef::point(p[0]), true).expect("vorhanden");
        toggle_select(&mut state, EntityRef::point(p[1]), true).expect("vorhanden");
        assert_eq!(state.editor.position_panel, Some(EntityRef::point(p[1])));

        toggle_select(&mut state, EntityRef::point(p[1]), true).expect("vorhanden");
        assert_eq!(state.editor.position_panel, Some(EntityRef::point(p[0])));

        clear_selection(&mut state, None);
        assert_eq!(state.editor.position_panel, None);
        assert_eq!(state.editor.manipulator.attached(), None);
    }

    #[test]
    fn clearing_one_kind_keeps_others() {
        let (mut state, p, f) = state_with(1, 1);
        toggle_select(&mut state, EntityRef::point(p[0]), false).expect("vorhanden");
        toggle_select(&mut state, EntityRef::forcefield(f[0]), false).expect("vorhanden");

        clear_selection(&mut state, Some(EntityKind::Forcefield));
        assert!(state.selection.forcefields.is_empty());
        assert_eq!(state.editor.manipulator.attached(), Some(EntityRef::point(p[0])));
    }
}
