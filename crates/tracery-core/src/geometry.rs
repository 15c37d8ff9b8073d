//! Geometric primitives shared by the bounds predicates and snapping filters.
//!
//! Everything here is pure. Rectangles are treated as closed on all four
//! sides, unlike [`kurbo::Rect::contains`] which excludes the far edges, so a
//! target lying exactly on a tolerance boundary still counts as a hit.

use kurbo::{Point, Rect};

/// Extension methods giving [`Rect`] the closed-interval semantics used by
/// hit-testing.
pub trait RectExt {
    /// Normalized rectangle spanning two arbitrary corners.
    fn from_corners(a: Point, b: Point) -> Rect;

    /// Closed containment: points on any edge are inside.
    fn contains_point(&self, point: Point) -> bool;

    /// Closed intersection: rectangles sharing only an edge or a corner
    /// still intersect.
    fn intersects_with(&self, other: &Rect) -> bool;
}

impl RectExt for Rect {
    fn from_corners(a: Point, b: Point) -> Rect {
        Rect::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
    }

    fn contains_point(&self, point: Point) -> bool {
        let r = self.abs();
        point.x >= r.x0 && point.x <= r.x1 && point.y >= r.y0 && point.y <= r.y1
    }

    fn intersects_with(&self, other: &Rect) -> bool {
        let a = self.abs();
        let b = other.abs();
        a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
    }
}

/// Square of side `2 * radius` centred on `point`.
pub fn expand_to_rect(point: Point, radius: f64) -> Rect {
    Rect::new(
        point.x - radius,
        point.y - radius,
        point.x + radius,
        point.y + radius,
    )
}

/// Euclidean distance between two points.
pub fn distance_to(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Project `point` onto the segment a→b, clamped to the segment.
///
/// A zero-length segment projects everything onto `a`.
pub fn nearest_on_line(point: Point, a: Point, b: Point) -> Point {
    let seg = b - a;
    let len_sq = seg.hypot2();
    if len_sq < f64::EPSILON {
        return a;
    }
    let t = ((point - a).dot(seg) / len_sq).clamp(0.0, 1.0);
    a + seg * t
}

/// Distance from a point to the segment a→b.
pub fn distance_to_segment(point: Point, a: Point, b: Point) -> f64 {
    point.distance(nearest_on_line(point, a, b))
}

/// Midpoint of the segment a→b.
pub fn midpoint(a: Point, b: Point) -> Point {
    a.midpoint(b)
}

/// Intersection of the infinite lines through a0→b0 and a1→b1.
///
/// Returns `None` when the lines are parallel or either segment is
/// degenerate.
pub fn line_intersect_with_line(a0: Point, b0: Point, a1: Point, b1: Point) -> Option<Point> {
    let r = b0 - a0;
    let s = b1 - a1;
    let denom = r.cross(s);
    if denom.abs() < f64::EPSILON {
        return None;
    }
    let t = (a1 - a0).cross(s) / denom;
    Some(a0 + r * t)
}

/// Intersection of the segments a0→b0 and a1→b1, if they actually cross.
pub fn segment_intersect_with_segment(
    a0: Point,
    b0: Point,
    a1: Point,
    b1: Point,
) -> Option<Point> {
    let r = b0 - a0;
    let s = b1 - a1;
    let denom = r.cross(s);
    if denom.abs() < f64::EPSILON {
        return None;
    }
    let t = (a1 - a0).cross(s) / denom;
    let u = (a1 - a0).cross(r) / denom;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(a0 + r * t)
    } else {
        None
    }
}

/// Clip the segment a→b against `rect` (Liang–Barsky).
///
/// Returns the clipped sub-segment, or `None` if the segment misses the
/// rectangle entirely. Touching an edge counts as a hit.
pub fn line_intersects_with_rect(a: Point, b: Point, rect: Rect) -> Option<(Point, Point)> {
    let rect = rect.abs();
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let p = [-dx, dx, -dy, dy];
    let q = [a.x - rect.x0, rect.x1 - a.x, a.y - rect.y0, rect.y1 - a.y];

    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;
    for (&pi, &qi) in p.iter().zip(q.iter()) {
        if pi.abs() < f64::EPSILON {
            // Parallel to this edge: reject if outside it.
            if qi < 0.0 {
                return None;
            }
            continue;
        }
        let t = qi / pi;
        if pi < 0.0 {
            if t > t1 {
                return None;
            }
            t0 = t0.max(t);
        } else {
            if t < t0 {
                return None;
            }
            t1 = t1.min(t);
        }
    }
    Some((a.lerp(b, t0), a.lerp(b, t1)))
}

/// Even–odd point-in-polygon test over `points` taken in order.
///
/// This is the approximation used for shapes without fixed corners (curves,
/// scribbles, paths): the polygon is whatever the point order implies, not
/// the filled outline of the curve. Fewer than three points never contain
/// anything.
pub fn polygon_contains(points: &[Point], target: Point) -> bool {
    if points.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (pi, pj) = (points[i], points[j]);
        if (pi.y > target.y) != (pj.y > target.y) {
            let x = (pj.x - pi.x) * (target.y - pi.y) / (pj.y - pi.y) + pi.x;
            if target.x < x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Whether the polygon implied by `points` touches `rect`.
///
/// True if any vertex lies in the rect, any rect corner lies in the
/// polygon, or any polygon edge crosses the rect.
pub fn polygon_overlaps(points: &[Point], rect: Rect) -> bool {
    if points.iter().any(|p| rect.contains_point(*p)) {
        return true;
    }
    if points.len() < 2 {
        return false;
    }
    let r = rect.abs();
    let corners = [
        Point::new(r.x0, r.y0),
        Point::new(r.x1, r.y0),
        Point::new(r.x1, r.y1),
        Point::new(r.x0, r.y1),
    ];
    if corners.iter().any(|c| polygon_contains(points, *c)) {
        return true;
    }
    let closing = if points.len() > 2 {
        Some((points[points.len() - 1], points[0]))
    } else {
        None
    };
    points
        .windows(2)
        .map(|w| (w[0], w[1]))
        .chain(closing)
        .any(|(a, b)| line_intersects_with_rect(a, b, r).is_some())
}
