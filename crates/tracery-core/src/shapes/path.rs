//! Path shape: an ordered list of figures.

use super::{FigureShape, Shape, SharedPoint, ShapeId, ShapeKind, ShapeStyle, ShapeTrait};
use std::rc::Rc;
use uuid::Uuid;

/// A path made of one or more figures.
///
/// Figures are stored as [`Shape::Figure`] so the hit-test engine can hand
/// them out as matched shapes; only figures can be added.
#[derive(Debug, Clone)]
pub struct PathShape {
    pub(crate) id: ShapeId,
    figures: Vec<Shape>,
    pub style: Option<Rc<ShapeStyle>>,
}

impl PathShape {
    pub fn new(figures: Vec<FigureShape>) -> Self {
        Self {
            id: Uuid::new_v4(),
            figures: figures.into_iter().map(Shape::Figure).collect(),
            style: None,
        }
    }

    /// Append a figure.
    pub fn add_figure(&mut self, figure: FigureShape) {
        self.figures.push(Shape::Figure(figure));
    }

    /// Figures in order, each a [`Shape::Figure`].
    pub fn figures(&self) -> &[Shape] {
        &self.figures
    }

    pub(crate) fn figures_mut(&mut self) -> &mut [Shape] {
        &mut self.figures
    }
}

impl ShapeTrait for PathShape {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Path
    }

    fn points(&self) -> Vec<SharedPoint> {
        self.figures.iter().flat_map(Shape::points).collect()
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
