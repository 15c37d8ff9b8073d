//! Scribble (freehand) shape.

use super::{SharedPoint, ShapeId, ShapeKind, ShapeStyle, ShapeTrait};
use std::rc::Rc;
use uuid::Uuid;

/// A freehand stroke: an ordered run of points.
#[derive(Debug, Clone)]
pub struct ScribbleShape {
    pub(crate) id: ShapeId,
    pub points: Vec<SharedPoint>,
    pub style: Option<Rc<ShapeStyle>>,
}

impl ScribbleShape {
    /// Create a new empty scribble.
    pub fn new() -> Self {
        Self::from_points(Vec::new())
    }

    /// Create from existing points.
    pub fn from_points(points: Vec<SharedPoint>) -> Self {
        Self {
            id: Uuid::new_v4(),
            points,
            style: None,
        }
    }

    /// Add a point to the stroke.
    pub fn add_point(&mut self, point: SharedPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for ScribbleShape {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeTrait for ScribbleShape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Scribble
    }

    fn points(&self) -> Vec<SharedPoint> {
        self.points.clone()
    }

    fn point_slots_mut(&mut self) -> Vec<&mut SharedPoint> {
        self.points.iter_mut().collect()
    }

    fn style(&self) -> Option<&Rc<ShapeStyle>> {
        self.style.as_ref()
    }

    fn set_style(&mut self, style: Option<Rc<ShapeStyle>>) {
        self.style = style;
    }
}
