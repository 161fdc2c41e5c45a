//! Use-Case: Pointer-Down in einen Treffer übersetzen.

use crate::app::state::Layer;
use crate::app::AppState;
use crate::core::picking::{pick_nearest_polyline, pick_nearest_sphere};
use crate::core::{EntityKind, EntityRef};
use glam::Vec2;

/// Löst einen Pointer-Down an `screen_pos` (Viewport-Pixel) in ein Objekt auf.
///
/// Die Arten werden in der Priorität des Interaktionsmodus geprüft; die erste Art
/// mit einem Treffer gewinnt (nächster Treffer entlang des Strahls), niedrigere
/// Arten werden nicht mehr geprüft. Ausgeblendete Ebenen sind nicht pickbar.
pub fn resolve_pointer_hit(state: &AppState, screen_pos: Vec2) -> Option<EntityRef> {
    let camera = &state.view.camera;
    let viewport = state.view.viewport();
    let ray = camera.ray_from_screen(screen_pos, viewport)?;
    let scene = &state.scene;

    for &kind in state.editor.mode.pick_priority() {
        let hit = match kind {
            EntityKind::Point => {
                if !state.view.is_visible(Layer::Points) {
                    continue;
                }
                let radius = state.options.point_radius;
                pick_nearest_sphere(&ray, scene.points().map(|p| (p.id, p.position, radius)))
            }
            EntityKind::Forcefield => {
                if !state.view.is_visible(Layer::Forcefields) {
                    continue;
                }
                pick_nearest_sphere(
                    &ray,
                    scene.forcefields().map(|f| (f.id, f.position, f.radius())),
                )
            }
            EntityKind::Connection => {
                let pick_px = state.options.line_pick_radius_px;
                pick_nearest_polyline(
                    &ray,
                    scene.connections().map(|c| (c.id, c.geometry())),
                    |t| camera.world_per_pixel_at(t, viewport.y) * pick_px,
                )
            }
        };

        if let Some(hit) = hit {
            log::debug!("Pointer-Treffer: {} {} (t={:.1})", kind, hit.id, hit.distance);
            return Some(EntityRef { kind, id: hit.id });
        }
    }
    None
}
