//! Strahl-Schnitttests für Pointer-Picking (Kugeln und Polylinien).

use glam::Vec3;

/// Halbgerade im Weltraum mit normierter Richtung
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Normierte Richtung
    pub direction: Vec3,
}

impl Ray {
    /// Erstellt einen Strahl. Gibt `None` zurück, wenn die Richtung degeneriert ist.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    /// Punkt auf dem Strahl bei Parameter `t`
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Schnitt mit einer Ebene (Punkt + Normale). `None` bei paralleler Ebene
    /// oder Schnitt hinter dem Ursprung.
    pub fn intersect_plane(&self, plane_point: Vec3, plane_normal: Vec3) -> Option<Vec3> {
        let denom = plane_normal.dot(self.direction);
        if denom.abs() < 1e-6 {
            return None;
        }
        let t = (plane_point - self.origin).dot(plane_normal) / denom;
        (t >= 0.0).then(|| self.at(t))
    }
}

/// Treffer eines Pick-Tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// ID des getroffenen Objekts
    pub id: u64,
    /// Strahlparameter (Abstand vom Ursprung) des Treffers
    pub distance: f32,
}

/// Kleinster nicht-negativer Strahlparameter eines Kugelschnitts.
pub fn intersect_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let sqrt_d = discriminant.sqrt();
    let t_near = -b - sqrt_d;
    if t_near >= 0.0 {
        return Some(t_near);
    }
    // Ursprung innerhalb der Kugel
    let t_far = -b + sqrt_d;
    (t_far >= 0.0).then_some(t_far)
}

/// Minimaler Abstand zwischen Strahl und Segment `a..b`.
/// Gibt `(abstand, strahlparameter)` zurück.
pub fn ray_segment_distance(ray: &Ray, a: Vec3, b: Vec3) -> (f32, f32) {
    let d1 = ray.direction;
    let d2 = b - a;
    let r = ray.origin - a;
    let e = d2.length_squared();
    let f = d2.dot(r);

    let (s, u) = if e <= f32::EPSILON {
        // Segment degeneriert zu einem Punkt
        ((-d1.dot(r)).max(0.0), 0.0)
    } else {
        let c = d1.dot(r);
        let bb = d1.dot(d2);
        let denom = e - bb * bb;
        let mut s = if denom.abs() > f32::EPSILON {
            ((bb * f - c * e) / denom).max(0.0)
        } else {
            0.0
        };
        let mut u = (bb * s + f) / e;
        if u < 0.0 {
            u = 0.0;
            s = (-c).max(0.0);
        } else if u > 1.0 {
            u = 1.0;
            s = (bb - c).max(0.0);
        }
        (s, u)
    };

    let on_ray = ray.at(s);
    let on_segment = a + d2 * u;
    (on_ray.distance(on_segment), s)
}

/// Nächster Kugeltreffer entlang des Strahls.
pub fn pick_nearest_sphere(
    ray: &Ray,
    spheres: impl IntoIterator<Item = (u64, Vec3, f32)>,
) -> Option<PickHit> {
    spheres
        .into_iter()
        .filter_map(|(id, center, radius)| {
            intersect_sphere(ray, center, radius).map(|distance| PickHit { id, distance })
        })
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

/// Nächste Polylinie, deren Abstand zum Strahl unter der Schwelle liegt.
///
/// `threshold_at` liefert die erlaubte Weltdistanz für einen Strahlparameter,
/// damit die Pick-Toleranz in Pixeln konstant bleibt.
pub fn pick_nearest_polyline<'a>(
    ray: &Ray,
    polylines: impl IntoIterator<Item = (u64, &'a [Vec3])>,
    threshold_at: impl Fn(f32) -> f32,
) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;
    for (id, points) in polylines {
        for pair in points.windows(2) {
            let (dist, t) = ray_segment_distance(ray, pair[0], pair[1]);
            if dist > threshold_at(t) {
                continue;
            }
            if best.is_none_or(|hit| t < hit.distance) {
                best = Some(PickHit { id, distance: t });
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ray_down_z() -> Ray {
        Ray::new(Vec3::new(0.0, 0.0, 100.0), Vec3::NEG_Z).expect("gültige Richtung")
    }

    #[test]
    fn sphere_hit_returns_front_surface() {
        let t = intersect_sphere(&ray_down_z(), Vec3::ZERO, 10.0).expect("Treffer erwartet");
        assert_relative_eq!(t, 90.0, epsilon = 1e-4);
    }

    #[test]
    fn sphere_behind_origin_is_missed() {
        assert!(intersect_sphere(&ray_down_z(), Vec3::new(0.0, 0.0, 200.0), 10.0).is_none());
        assert!(intersect_sphere(&ray_down_z(), Vec3::new(50.0, 0.0, 0.0), 10.0).is_none());
    }

    #[test]
    fn nearest_sphere_wins() {
        let hit = pick_nearest_sphere(
            &ray_down_z(),
            [
                (1, Vec3::ZERO, 10.0),
                (2, Vec3::new(0.0, 0.0, 50.0), 10.0),
            ],
        )
        .expect("Treffer erwartet");
        assert_eq!(hit.id, 2);
    }

    #[test]
    fn segment_distance_for_crossing_line() {
        let ray = ray_down_z();
        let (dist, t) =
            ray_segment_distance(&ray, Vec3::new(-50.0, 3.0, 0.0), Vec3::new(50.0, 3.0, 0.0));
        assert_relative_eq!(dist, 3.0, epsilon = 1e-4);
        assert_relative_eq!(t, 100.0, epsilon = 1e-3);
    }

    #[test]
    fn segment_distance_clamps_to_endpoint() {
        let ray = ray_down_z();
        let (dist, _) =
            ray_segment_distance(&ray, Vec3::new(10.0, 0.0, 0.0), Vec3::new(50.0, 0.0, 0.0));
        assert_relative_eq!(dist, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn polyline_pick_respects_threshold() {
        let ray = ray_down_z();
        let line = [Vec3::new(-50.0, 3.0, 0.0), Vec3::new(50.0, 3.0, 0.0)];
        assert!(pick_nearest_polyline(&ray, [(7, &line[..])], |_| 2.0).is_none());
        let hit = pick_nearest_polyline(&ray, [(7, &line[..])], |_| 4.0).expect("Treffer");
        assert_eq!(hit.id, 7);
    }

    #[test]
    fn plane_intersection() {
        let ray = ray_down_z();
        let p = ray
            .intersect_plane(Vec3::new(0.0, 0.0, 10.0), Vec3::Z)
            .expect("Schnitt erwartet");
        assert_relative_eq!(p.z, 10.0, epsilon = 1e-5);
        assert!(ray.intersect_plane(Vec3::ZERO, Vec3::X).is_none());
    }
}
