//! Line shape.

use super::{SharedPoint, ShapeId, ShapeKind, ShapeStyle, ShapeTrait};
use kurbo::Point;
use std::rc::Rc;
use uuid::Uuid;

/// A straight segment between two shared points.
#[derive(Debug, Clone)]
pub struct LineShape {
    pub(crate) id: ShapeId,
    /// Start point.
    pub start: SharedPoint,
    /// End point.
    pub end: SharedPoint,
    /// Shared style.
    pub style: Option<Rc<ShapeStyle>>,
}

impl LineShape {
    /// Create a new line.
    pub fn new(start: SharedPoint, end: SharedPoint) -> Self {
        Self {
            id: Uuid::new_v4(),
            start,
            end,
            style: None,
        }
    }

    /// Create a line between two fresh, unshared points.
    pub fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(SharedPoint::new(x0, y0), SharedPoint::new(x1, y1))
    }

    /// Current endpoint positions.
    pub fn endpoints(&self) -> (Point, Point) {
        (self.start.position(), self.end.position())
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        let (a, b) = self.endpoints();
        a.distance(b)
    }

    /// Get the midpoint of the line.
    pub fn midpoint(&self) -> Point {
        let (a, b) = self.endpoints();
        a.midpoint(b)
    }
}

impl ShapeTrait for LineShape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn points(&self) -> Vec<SharedPoint> {
        vec![self.start.clone(), self.end.clone()]
    }

    fn point_slots_mut(&mut self) -> Vec<&mut SharedPoint> {
        vec![&mut self.start, &mut self.end]
    }

    fn style(&self) -> Option<&Rc<ShapeStyle>> {
        self.style.as_ref()
    }

    fn set_style(&mut self, style: Option<Rc<ShapeStyle>>) {
        self.style = style;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_creation() {
        let line = LineShape::from_coords(0.0, 0.0, 100.0, 0.0);
        assert!((line.length() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_midpoint() {
        let line = LineShape::from_coords(0.0, 0.0, 100.0, 100.0);
        let mid = line.midpoint();
        assert!((mid.x - 50.0).abs() < f64::EPSILON);
        assert!((mid.y - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_connected_lines_follow_shared_point() {
        let joint = SharedPoint::new(50.0, 50.0);
        let a = LineShape::new(SharedPoint::new(0.0, 0.0), joint.clone());
        let b = LineShape::new(joint.clone(), SharedPoint::new(100.0, 0.0));
        joint.set_position(60.0, 40.0);
        assert_eq!(a.end.position(), Point::new(60.0, 40.0));
        assert_eq!(b.start.position(), Point::new(60.0, 40.0));
    }
}
