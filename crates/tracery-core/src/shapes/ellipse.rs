//! Ellipse, circle and arc shapes.

use super::{SharedPoint, ShapeId, ShapeKind, ShapeStyle, ShapeTrait};
use std::rc::Rc;
use uuid::Uuid;

/// An ellipse (oval) inscribed in the box spanned by two corners.
#[derive(Debug, Clone)]
pub struct EllipseShape {
    pub(crate) id: ShapeId,
    pub top_left: SharedPoint,
    pub bottom_right: SharedPoint,
    pub is_filled: bool,
    pub style: Option<Rc<ShapeStyle>>,
}

impl EllipseShape {
    pub fn new(top_left: SharedPoint, bottom_right: SharedPoint) -> Self {
        Self {
            id: Uuid::new_v4(),
            top_left,
            bottom_right,
            is_filled: false,
            style: None,
        }
    }
}

impl ShapeTrait for EllipseShape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
    }

    fn points(&self) -> Vec<SharedPoint> {
        vec![self.top_left.clone(), self.bottom_right.clone()]
    }

    fn point_slots_mut(&mut self) -> Vec<&mut SharedPoint> {
        vec![&mut self.top_left, &mut self.bottom_right]
    }

    fn style(&self) -> Option<&Rc<ShapeStyle>> {
        self.style.as_ref()
    }

    fn set_style(&mut self, style: Option<Rc<ShapeStyle>>) {
        self.style = style;
    }
}

/// A circle given by its center and a point on its edge.
#[derive(Debug, Clone)]
pub struct CircleShape {
    pub(crate) id: ShapeId,
    pub center: SharedPoint,
    pub edge: SharedPoint,
    pub style: Option<Rc<ShapeStyle>>,
}

impl CircleShape {
    pub fn new(center: SharedPoint, edge: SharedPoint) -> Self {
        Self {
            id: Uuid::new_v4(),
            center,
            edge,
            style: None,
        }
    }

    /// Distance from center to the edge point.
    pub fn radius(&self) -> f64 {
        self.center.position().distance(self.edge.position())
    }
}

impl ShapeTrait for CircleShape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn points(&self) -> Vec<SharedPoint> {
        vec![self.center.clone(), self.edge.clone()]
    }

    fn point_slots_mut(&mut self) -> Vec<&mut SharedPoint> {
        vec![&mut self.center, &mut self.edge]
    }

    fn style(&self) -> Option<&Rc<ShapeStyle>> {
        self.style.as_ref()
    }

    fn set_style(&mut self, style: Option<Rc<ShapeStyle>>) {
        self.style = style;
    }
}

/// An elliptical arc. `point1`/`point2` span the ellipse box, `point3` and
/// `point4` mark the start and end angles.
#[derive(Debug, Clone)]
pub struct ArcShape {
    pub(crate) id: ShapeId,
    pub point1: SharedPoint,
    pub point2: SharedPoint,
    pub point3: SharedPoint,
    pub point4: SharedPoint,
    pub style: Option<Rc<ShapeStyle>>,
}

impl ArcShape {
    pub fn new(
        point1: SharedPoint,
        point2: SharedPoint,
        point3: SharedPoint,
        point4: SharedPoint,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            point1,
            point2,
            point3,
            point4,
            style: None,
        }
    }
}

impl ShapeTrait for ArcShape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Arc
    }

    fn points(&self) -> Vec<SharedPoint> {
        vec![
            self.point1.clone(),
            self.point2.clone(),
            self.point3.clone(),
            self.point4.clone(),
        ]
    }

    fn point_slots_mut(&mut self) -> Vec<&mut SharedPoint> {
        vec![
            &mut self.point1,
            &mut self.point2,
            &mut self.point3,
            &mut self.point4,
        ]
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
    fn test_circle_radius() {
        let circle = CircleShape::new(SharedPoint::new(0.0, 0.0), SharedPoint::new(3.0, 4.0));
        assert!((circle.radius() - 5.0).abs() < f64::EPSILON);
    }
}
