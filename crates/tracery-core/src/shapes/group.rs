//! Group shape for combining multiple shapes.

use super::{Shape, SharedPoint, ShapeId, ShapeKind, ShapeStyle, ShapeTrait};
use std::rc::Rc;
use uuid::Uuid;

/// A group of shapes that is selected and hit as a single unit.
/// Groups can contain other groups, enabling nested hierarchies.
///
/// Children are owned by value, so a group can never contain itself.
#[derive(Debug, Clone)]
pub struct GroupShape {
    pub(crate) id: ShapeId,
    /// Child shapes in this group.
    pub shapes: Vec<Shape>,
    /// Connection points owned by the group itself.
    pub connectors: Vec<SharedPoint>,
    pub style: Option<Rc<ShapeStyle>>,
}

impl GroupShape {
    /// Create a new group from a list of shapes.
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self {
            id: Uuid::new_v4(),
            shapes,
            connectors: Vec::new(),
            style: None,
        }
    }

    /// Add a connection point to the group.
    pub fn add_connector(&mut self, point: SharedPoint) {
        self.connectors.push(point);
    }

    /// Dissolve this group and return its children.
    pub fn ungroup(self) -> Vec<Shape> {
        self.shapes
    }

    /// Get all shape IDs in this group (including nested groups).
    pub fn all_shape_ids(&self) -> Vec<ShapeId> {
        let mut ids = vec![self.id];
        for child in &self.shapes {
            if let Shape::Group(group) = child {
                ids.extend(group.all_shape_ids());
            } else {
                ids.push(child.id());
            }
        }
        ids
    }
}

impl ShapeTrait for GroupShape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Group
    }

    fn points(&self) -> Vec<SharedPoint> {
        let mut points = self.connectors.clone();
        points.extend(self.shapes.iter().flat_map(Shape::points));
        points
    }

    fn point_slots_mut(&mut self) -> Vec<&mut SharedPoint> {
        self.connectors.iter_mut().collect()
    }

    fn style(&self) -> Option<&Rc<ShapeStyle>> {
        self.style.as_ref()
    }

    fn set_style(&mut self, style: Option<Rc<ShapeStyle>>) {
        self.style = style;
    }
}
