//! Snapping: grid and line snap math, plus the point filters tools run
//! candidate points through.

mod filter;
mod grid;
mod line;

pub use filter::{apply_filters, clear_filters, FilterContext, PointFilter};
pub use grid::GridSnapPointFilter;
pub use line::LineSnapPointFilter;

use crate::geometry::{distance_to, midpoint, nearest_on_line, segment_intersect_with_segment};
use kurbo::Point;
use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Axes grid snapping applies to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct GridSnapMode: u8 {
        const HORIZONTAL = 0b01;
        const VERTICAL   = 0b10;
    }
}

bitflags::bitflags! {
    /// Line snap modes. When several are enabled they are tried in
    /// declaration order and the first that hits wins; `HORIZONTAL` and
    /// `VERTICAL` are evaluated together.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct LineSnapMode: u8 {
        /// Line endpoints.
        const POINT        = 0b00_0001;
        /// Line midpoints.
        const MIDDLE       = 0b00_0010;
        /// Crossings of two distinct lines.
        const INTERSECTION = 0b00_0100;
        /// Align Y with a line endpoint.
        const HORIZONTAL   = 0b00_1000;
        /// Align X with a line endpoint.
        const VERTICAL     = 0b01_0000;
        /// Closest point on a line.
        const NEAREST      = 0b10_0000;
    }
}

bitflags::bitflags! {
    /// Which lines line snapping considers.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct LineSnapTarget: u8 {
        /// The container's page guides.
        const GUIDES = 0b01;
        /// Top-level line shapes.
        const SHAPES = 0b10;
    }
}

/// Result of a snap operation.
#[derive(Debug, Clone, Copy)]
pub struct SnapResult {
    /// The snapped point.
    pub point: Point,
    /// Whether the X coordinate was snapped.
    pub snapped_x: bool,
    /// Whether the Y coordinate was snapped.
    pub snapped_y: bool,
}

impl SnapResult {
    /// Create a result with no snapping.
    pub fn none(point: Point) -> Self {
        Self {
            point,
            snapped_x: false,
            snapped_y: false,
        }
    }

    /// Check if any snapping occurred.
    pub fn is_snapped(&self) -> bool {
        self.snapped_x || self.snapped_y
    }
}

/// Round `value` to the nearest multiple of `size`; a remainder of exactly
/// half a cell rounds up.
///
/// A non-positive or non-finite `size` leaves `value` untouched.
pub fn snap_grid(value: f64, size: f64) -> f64 {
    if !(size.is_finite() && size > 0.0) || !value.is_finite() {
        return value;
    }
    let remainder = value.rem_euclid(size);
    let snapped = value - remainder;
    if remainder >= size / 2.0 {
        snapped + size
    } else {
        snapped
    }
}

/// Snap the axes enabled in `mode` to a grid of `size_x` by `size_y` cells.
pub fn snap_to_grid(point: Point, size_x: f64, size_y: f64, mode: GridSnapMode) -> SnapResult {
    let mut result = SnapResult::none(point);
    if mode.contains(GridSnapMode::HORIZONTAL) {
        result.point.x = snap_grid(point.x, size_x);
        result.snapped_x = true;
    }
    if mode.contains(GridSnapMode::VERTICAL) {
        result.point.y = snap_grid(point.y, size_y);
        result.snapped_y = true;
    }
    result
}

/// A successful line snap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSnapResult {
    /// The snapped point.
    pub point: Point,
    /// The mode that produced it. Axis alignment may report both
    /// `HORIZONTAL` and `VERTICAL`.
    pub mode: LineSnapMode,
}

/// Snap `point` to the segments in `lines`.
///
/// Modes are tried in fixed priority: endpoints, midpoints, intersections,
/// axis alignment, nearest point. Within a mode the first candidate within
/// `threshold` (in line order) wins.
pub fn try_line_snap(
    lines: &[(Point, Point)],
    point: Point,
    mode: LineSnapMode,
    threshold: f64,
) -> Option<LineSnapResult> {
    let within = |candidate: Point| distance_to(point, candidate) < threshold;
    let hit = |point: Point, mode: LineSnapMode| Some(LineSnapResult { point, mode });

    if mode.contains(LineSnapMode::POINT) {
        if let Some(&p) = lines
            .iter()
            .flat_map(|(a, b)| [a, b])
            .find(|&&p| within(p))
        {
            return hit(p, LineSnapMode::POINT);
        }
    }

    if mode.contains(LineSnapMode::MIDDLE) {
        if let Some(p) = lines.iter().map(|&(a, b)| midpoint(a, b)).find(|&p| within(p)) {
            return hit(p, LineSnapMode::MIDDLE);
        }
    }

    if mode.contains(LineSnapMode::INTERSECTION) {
        for (i, &(a0, b0)) in lines.iter().enumerate() {
            for &(a1, b1) in &lines[i + 1..] {
                if let Some(p) = segment_intersect_with_segment(a0, b0, a1, b1) {
                    if within(p) {
                        return hit(p, LineSnapMode::INTERSECTION);
                    }
                }
            }
        }
    }

    let mut aligned = point;
    let mut axes = LineSnapMode::empty();
    if mode.contains(LineSnapMode::HORIZONTAL) {
        if let Some(p) = endpoints(lines).find(|p| (point.y - p.y).abs() < threshold) {
            aligned.y = p.y;
            axes |= LineSnapMode::HORIZONTAL;
        }
    }
    if mode.contains(LineSnapMode::VERTICAL) {
        if let Some(p) = endpoints(lines).find(|p| (point.x - p.x).abs() < threshold) {
            aligned.x = p.x;
            axes |= LineSnapMode::VERTICAL;
        }
    }
    if !axes.is_empty() {
        return hit(aligned, axes);
    }

    if mode.contains(LineSnapMode::NEAREST) {
        if let Some(p) = lines
            .iter()
            .map(|&(a, b)| nearest_on_line(point, a, b))
            .find(|&p| within(p))
        {
            return hit(p, LineSnapMode::NEAREST);
        }
    }

    None
}

fn endpoints(lines: &[(Point, Point)]) -> impl Iterator<Item = Point> + '_ {
    lines.iter().flat_map(|&(a, b)| [a, b])
}
