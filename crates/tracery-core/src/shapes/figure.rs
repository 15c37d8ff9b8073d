//! Figure: one connected run of segments inside a path.

use super::{unique_points, Shape, SharedPoint, ShapeId, ShapeKind, ShapeStyle, ShapeTrait};
use std::rc::Rc;
use uuid::Uuid;

/// An ordered list of segment shapes forming one sub-path.
#[derive(Debug, Clone)]
pub struct FigureShape {
    pub(crate) id: ShapeId,
    /// Segments in drawing order.
    pub shapes: Vec<Shape>,
    pub is_filled: bool,
    pub is_closed: bool,
    pub style: Option<Rc<ShapeStyle>>,
}

impl FigureShape {
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self {
            id: Uuid::new_v4(),
            shapes,
            is_filled: false,
            is_closed: false,
            style: None,
        }
    }

    pub fn closed(mut self, is_closed: bool) -> Self {
        self.is_closed = is_closed;
        self
    }

    pub fn filled(mut self, is_filled: bool) -> Self {
        self.is_filled = is_filled;
        self
    }
}

impl ShapeTrait for FigureShape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Figure
    }

    /// The figure's vertex list: segment points in order, each shared
    /// joint listed once.
    fn points(&self) -> Vec<SharedPoint> {
        unique_points(&self.shapes)
    }

    fn point_slots_mut(&mut self) -> Vec<&mut SharedPoint> {
        Vec::new()
    }

    fn style(&self) -> Option<&Rc<ShapeStyle>> {
        self.style.as_ref()
    }

    fn set_style(&mut self, style: Option<Rc<ShapeStyle>>) {
        self.style = style;
    }
}
