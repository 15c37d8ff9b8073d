//! Shared document points and the point shape.

use super::{Shape, ShapeId, ShapeKind, ShapeStyle, ShapeTrait};
use kurbo::Point;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

#[derive(Debug)]
struct PointData {
    x: f64,
    y: f64,
    template: Option<Rc<Shape>>,
}

/// A document point that may be referenced by several shapes at once.
///
/// Cloning the handle shares the point: moving it through any owner moves it
/// for every owner. The coordinates stored here are the only copy; shapes
/// never cache them. The point is freed when its last owner drops it.
#[derive(Clone)]
pub struct SharedPoint(Rc<RefCell<PointData>>);

impl SharedPoint {
    /// Create a new, unshared point.
    pub fn new(x: f64, y: f64) -> Self {
        Self(Rc::new(RefCell::new(PointData {
            x,
            y,
            template: None,
        })))
    }

    pub fn x(&self) -> f64 {
        self.0.borrow().x
    }

    pub fn y(&self) -> f64 {
        self.0.borrow().y
    }

    /// Current position as a kurbo point.
    pub fn position(&self) -> Point {
        let data = self.0.borrow();
        Point::new(data.x, data.y)
    }

    /// Move the point (visible through every owner).
    pub fn set_position(&self, x: f64, y: f64) {
        let mut data = self.0.borrow_mut();
        data.x = x;
        data.y = y;
    }

    /// Whether both handles refer to the same point.
    pub fn ptr_eq(&self, other: &SharedPoint) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Number of live handles to this point.
    pub fn owner_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// Shape drawn at this point by the renderer. Not used by hit-testing.
    pub fn template(&self) -> Option<Rc<Shape>> {
        self.0.borrow().template.clone()
    }

    pub fn set_template(&self, template: Option<Rc<Shape>>) {
        self.0.borrow_mut().template = template;
    }
}

impl From<Point> for SharedPoint {
    fn from(point: Point) -> Self {
        Self::new(point.x, point.y)
    }
}

impl fmt::Debug for SharedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.0.borrow();
        f.debug_struct("SharedPoint")
            .field("x", &data.x)
            .field("y", &data.y)
            .field("owners", &Rc::strong_count(&self.0))
            .finish()
    }
}

/// A standalone point shape.
#[derive(Debug, Clone)]
pub struct PointShape {
    pub(crate) id: ShapeId,
    pub point: SharedPoint,
    pub style: Option<Rc<ShapeStyle>>,
}

impl PointShape {
    pub fn new(point: SharedPoint) -> Self {
        Self {
            id: Uuid::new_v4(),
            point,
            style: None,
        }
    }
}

impl ShapeTrait for PointShape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Point
    }

    fn points(&self) -> Vec<SharedPoint> {
        vec![self.point.clone()]
    }

    fn point_slots_mut(&mut self) -> Vec<&mut SharedPoint> {
        vec![&mut self.point]
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
    fn test_moves_are_visible_through_every_owner() {
        let a = SharedPoint::new(1.0, 2.0);
        let b = a.clone();
        b.set_position(5.0, 6.0);
        assert_eq!(a.position(), Point::new(5.0, 6.0));
        assert!(a.ptr_eq(&b));
        assert_eq!(a.owner_count(), 2);
    }

    #[test]
    fn test_coincident_points_are_distinct() {
        let a = SharedPoint::new(1.0, 2.0);
        let b = SharedPoint::new(1.0, 2.0);
        assert!(!a.ptr_eq(&b));
    }

    #[test]
    fn test_last_owner_releases_point() {
        let a = SharedPoint::new(0.0, 0.0);
        let shape = PointShape::new(a.clone());
        assert_eq!(a.owner_count(), 2);
        drop(shape);
        assert_eq!(a.owner_count(), 1);
    }

    #[test]
    fn test_template_is_render_only() {
        let template = Rc::new(Shape::Point(PointShape::new(SharedPoint::new(0.0, 0.0))));
        let p = SharedPoint::new(3.0, 3.0);
        p.set_template(Some(template.clone()));
        assert!(Rc::ptr_eq(&p.template().unwrap(), &template));
    }
}
