//! Image shape.

use super::{SharedPoint, ShapeId, ShapeKind, ShapeStyle, ShapeTrait};
use std::rc::Rc;
use uuid::Uuid;

/// A raster image placed in the box spanned by two corners.
#[derive(Debug, Clone)]
pub struct ImageShape {
    pub(crate) id: ShapeId,
    pub top_left: SharedPoint,
    pub bottom_right: SharedPoint,
    /// Key of the image data in the document's image store.
    pub key: String,
    pub style: Option<Rc<ShapeStyle>>,
}

impl ImageShape {
    pub fn new(top_left: SharedPoint, bottom_right: SharedPoint, key: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            top_left,
            bottom_right,
            key: key.into(),
            style: None,
        }
    }
}

impl ShapeTrait for ImageShape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Image
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
