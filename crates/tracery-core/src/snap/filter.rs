use crate::shapes::{ContainerShape, LineShape, Shape, ShapeId, ShapeStyle, ShapeTrait, SharedPoint};
use kurbo::Point;
use std::fmt;
use std::rc::Rc;

/// What a point filter may read and write while adjusting a point.
///
/// `current` is the layer being edited. `working` holds transient shapes
/// such as guides; it is never persisted.
pub struct FilterContext<'a> {
    pub current: &'a ContainerShape,
    pub working: &'a mut ContainerShape,
    /// Canvas width; guides span the whole canvas.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
}

impl<'a> FilterContext<'a> {
    pub fn new(
        current: &'a ContainerShape,
        working: &'a mut ContainerShape,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            current,
            working,
            width,
            height,
        }
    }

    /// Add a horizontal guide through `y` across the canvas.
    pub fn add_horizontal_guide(&mut self, y: f64, style: &Rc<ShapeStyle>) -> ShapeId {
        self.add_guide(Point::new(0.0, y), Point::new(self.width, y), style)
    }

    /// Add a vertical guide through `x` across the canvas.
    pub fn add_vertical_guide(&mut self, x: f64, style: &Rc<ShapeStyle>) -> ShapeId {
        self.add_guide(Point::new(x, 0.0), Point::new(x, self.height), style)
    }

    fn add_guide(&mut self, start: Point, end: Point, style: &Rc<ShapeStyle>) -> ShapeId {
        let mut guide = LineShape::new(SharedPoint::from(start), SharedPoint::from(end));
        guide.style = Some(Rc::clone(style));
        let id = guide.id();
        self.working.add_shape(Shape::Line(guide));
        id
    }

    /// Remove the given guides from the working layer, emptying `guides`.
    pub fn remove_guides(&mut self, guides: &mut Vec<ShapeId>) {
        for id in guides.drain(..) {
            self.working.remove_shape(id);
        }
    }
}

/// Adjusts a candidate point before a tool uses it.
pub trait PointFilter: fmt::Debug {
    /// Name shown in settings UIs.
    fn title(&self) -> &str;

    /// Snap `x`/`y` in place. Returns whether the point was adjusted.
    fn process(&mut self, ctx: &mut FilterContext<'_>, x: &mut f64, y: &mut f64) -> bool;

    /// Remove any guides this filter added.
    fn clear(&mut self, ctx: &mut FilterContext<'_>);
}

/// Run the filters in order until one adjusts the point.
///
/// Filters after the first one that snaps are not consulted, so only that
/// filter's adjustment and guides apply. Returns whether any filter snapped.
pub fn apply_filters(
    filters: &mut [Box<dyn PointFilter>],
    ctx: &mut FilterContext<'_>,
    x: &mut f64,
    y: &mut f64,
) -> bool {
    for filter in filters.iter_mut() {
        if filter.process(ctx, x, y) {
            log::trace!("{} snapped point to ({x}, {y})", filter.title());
            return true;
        }
    }
    false
}

/// Clear the guides of every filter.
pub fn clear_filters(filters: &mut [Box<dyn PointFilter>], ctx: &mut FilterContext<'_>) {
    for filter in filters.iter_mut() {
        filter.clear(ctx);
    }
}
