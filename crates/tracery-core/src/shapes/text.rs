//! Text shape.

use super::{SharedPoint, ShapeId, ShapeKind, ShapeStyle, ShapeTrait};
use std::rc::Rc;
use uuid::Uuid;

/// A text block laid out inside the box spanned by two corners.
#[derive(Debug, Clone)]
pub struct TextShape {
    pub(crate) id: ShapeId,
    pub top_left: SharedPoint,
    pub bottom_right: SharedPoint,
    /// The text content.
    pub text: String,
    pub style: Option<Rc<ShapeStyle>>,
}

impl TextShape {
    pub fn new(top_left: SharedPoint, bottom_right: SharedPoint, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            top_left,
            bottom_right,
            text: text.into(),
            style: None,
        }
    }
}

impl ShapeTrait for TextShape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Text
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
