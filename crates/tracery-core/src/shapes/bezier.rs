//! Cubic and quadratic bezier shapes.

use super::{SharedPoint, ShapeId, ShapeKind, ShapeStyle, ShapeTrait};
use std::rc::Rc;
use uuid::Uuid;

/// A cubic bezier: start, two control points, end.
#[derive(Debug, Clone)]
pub struct CubicBezierShape {
    pub(crate) id: ShapeId,
    pub point1: SharedPoint,
    pub point2: SharedPoint,
    pub point3: SharedPoint,
    pub point4: SharedPoint,
    pub style: Option<Rc<ShapeStyle>>,
}

impl CubicBezierShape {
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

    /// Get as a kurbo cubic at the points' current positions.
    pub fn as_kurbo(&self) -> kurbo::CubicBez {
        kurbo::CubicBez::new(
            self.point1.position(),
            self.point2.position(),
            self.point3.position(),
            self.point4.position(),
        )
    }
}

impl ShapeTrait for CubicBezierShape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::CubicBezier
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

/// A quadratic bezier: start, control point, end.
#[derive(Debug, Clone)]
pub struct QuadraticBezierShape {
    pub(crate) id: ShapeId,
    pub point1: SharedPoint,
    pub point2: SharedPoint,
    pub point3: SharedPoint,
    pub style: Option<Rc<ShapeStyle>>,
}

impl QuadraticBezierShape {
    pub fn new(point1: SharedPoint, point2: SharedPoint, point3: SharedPoint) -> Self {
        Self {
            id: Uuid::new_v4(),
            point1,
            point2,
            point3,
            style: None,
        }
    }

    pub fn as_kurbo(&self) -> kurbo::QuadBez {
        kurbo::QuadBez::new(
            self.point1.position(),
            self.point2.position(),
            self.point3.position(),
        )
    }
}

impl ShapeTrait for QuadraticBezierShape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::QuadraticBezier
    }

    fn points(&self) -> Vec<SharedPoint> {
        vec![self.point1.clone(), self.point2.clone(), self.point3.clone()]
    }

    fn point_slots_mut(&mut self) -> Vec<&mut SharedPoint> {
        vec![&mut self.point1, &mut self.point2, &mut self.point3]
    }

    fn style(&self) -> Option<&Rc<ShapeStyle>> {
        self.style.as_ref()
    }

    fn set_style(&mut self, style: Option<Rc<ShapeStyle>>) {
        self.style = style;
    }
}
