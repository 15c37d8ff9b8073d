//! Rectangle shape.

use super::{SharedPoint, ShapeId, ShapeKind, ShapeStyle, ShapeTrait};
use crate::geometry::RectExt;
use kurbo::Rect;
use std::rc::Rc;
use uuid::Uuid;

/// An axis-aligned rectangle spanned by two corner points.
#[derive(Debug, Clone)]
pub struct RectangleShape {
    pub(crate) id: ShapeId,
    /// First corner.
    pub top_left: SharedPoint,
    /// Opposite corner.
    pub bottom_right: SharedPoint,
    pub is_filled: bool,
    pub style: Option<Rc<ShapeStyle>>,
}

impl RectangleShape {
    /// Create a new rectangle.
    pub fn new(top_left: SharedPoint, bottom_right: SharedPoint) -> Self {
        Self {
            id: Uuid::new_v4(),
            top_left,
            bottom_right,
            is_filled: false,
            style: None,
        }
    }

    /// Create a rectangle from fresh corner points.
    pub fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(SharedPoint::new(x0, y0), SharedPoint::new(x1, y1))
    }

    /// Normalized rectangle at the corners' current positions.
    pub fn as_rect(&self) -> Rect {
        Rect::from_corners(self.top_left.position(), self.bottom_right.position())
    }
}

impl ShapeTrait for RectangleShape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
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
