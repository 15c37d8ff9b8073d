//! Container (layer) shape.

use super::{LineShape, Shape, SharedPoint, ShapeId, ShapeKind, ShapeStyle, ShapeTrait};
use std::rc::Rc;
use uuid::Uuid;

/// A layer: the ordered top-level shape list tools draw into, plus the
/// page guides line snapping can target.
#[derive(Debug, Clone)]
pub struct ContainerShape {
    pub(crate) id: ShapeId,
    /// Name shown in the layer list.
    pub name: String,
    /// Shapes in insertion order (earlier shapes win hit-test ties).
    pub shapes: Vec<Shape>,
    /// Page guides. Not hit-tested.
    pub guides: Vec<LineShape>,
    pub style: Option<Rc<ShapeStyle>>,
}

impl ContainerShape {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            shapes: Vec::new(),
            guides: Vec::new(),
            style: None,
        }
    }

    /// Add a shape at the end of the list.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Remove a top-level shape by ID.
    pub fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id() == id)?;
        Some(self.shapes.remove(index))
    }

    /// Get a top-level shape by ID.
    pub fn get_shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Get a mutable top-level shape by ID.
    pub fn get_shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Top-level line shapes, in order.
    pub fn lines(&self) -> impl Iterator<Item = &LineShape> {
        self.shapes.iter().filter_map(Shape::as_line)
    }
}

impl Default for ContainerShape {
    fn default() -> Self {
        Self::new("Layer")
    }
}

impl ShapeTrait for ContainerShape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Container
    }

    fn points(&self) -> Vec<SharedPoint> {
        self.shapes.iter().flat_map(Shape::points).collect()
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
