use super::filter::{FilterContext, PointFilter};
use super::{try_line_snap, LineSnapMode, LineSnapResult, LineSnapTarget};
use crate::settings::LineSnapSettings;
use crate::shapes::{ShapeId, ShapeStyle};
use kurbo::Point;
use std::rc::Rc;

/// Snaps points to the endpoints, midpoints, crossings, axes or nearest
/// points of guides and line shapes in the current layer.
#[derive(Debug)]
pub struct LineSnapPointFilter {
    settings: LineSnapSettings,
    guide_style: Rc<ShapeStyle>,
    guides: Vec<ShapeId>,
    last: Option<LineSnapResult>,
}

impl LineSnapPointFilter {
    pub fn new(settings: LineSnapSettings) -> Self {
        let guide_style = Rc::new(settings.guide_style.clone());
        Self {
            settings,
            guide_style,
            guides: Vec::new(),
            last: None,
        }
    }

    pub fn settings(&self) -> &LineSnapSettings {
        &self.settings
    }

    /// Guides currently shown in the working layer.
    pub fn guides(&self) -> &[ShapeId] {
        &self.guides
    }

    /// The snap produced by the last call to `process`, if any.
    pub fn last_hit(&self) -> Option<LineSnapResult> {
        self.last
    }

    fn collect_lines(&self, ctx: &FilterContext<'_>) -> Vec<(Point, Point)> {
        let mut lines = Vec::new();
        if self.settings.target.contains(LineSnapTarget::GUIDES) {
            lines.extend(ctx.current.guides.iter().map(|guide| guide.endpoints()));
        }
        if self.settings.target.contains(LineSnapTarget::SHAPES) {
            lines.extend(ctx.current.lines().map(|line| line.endpoints()));
        }
        lines
    }
}

impl PointFilter for LineSnapPointFilter {
    fn title(&self) -> &str {
        "Line-Snap"
    }

    fn process(&mut self, ctx: &mut FilterContext<'_>, x: &mut f64, y: &mut f64) -> bool {
        self.last = None;
        if !self.settings.enabled
            || self.settings.mode.is_empty()
            || self.settings.target.is_empty()
        {
            return false;
        }

        let lines = self.collect_lines(ctx);
        let Some(result) = try_line_snap(
            &lines,
            Point::new(*x, *y),
            self.settings.mode,
            self.settings.threshold,
        ) else {
            return false;
        };

        log::debug!("Line snap {:?} at {:?}", result.mode, result.point);
        *x = result.point.x;
        *y = result.point.y;

        if self.settings.enable_guides {
            let axes = LineSnapMode::HORIZONTAL | LineSnapMode::VERTICAL;
            let axis_only = result.mode.intersects(axes);
            if !axis_only || result.mode.contains(LineSnapMode::HORIZONTAL) {
                let id = ctx.add_horizontal_guide(result.point.y, &self.guide_style);
                self.guides.push(id);
            }
            if !axis_only || result.mode.contains(LineSnapMode::VERTICAL) {
                let id = ctx.add_vertical_guide(result.point.x, &self.guide_style);
                self.guides.push(id);
            }
        }

        self.last = Some(result);
        true
    }

    fn clear(&mut self, ctx: &mut FilterContext<'_>) {
        ctx.remove_guides(&mut self.guides);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{ContainerShape, LineShape, Shape};

    fn layer() -> ContainerShape {
        let mut layer = ContainerShape::default();
        layer.add_shape(Shape::Line(LineShape::from_coords(0.0, 0.0, 100.0, 0.0)));
        layer
    }

    #[test]
    fn test_snaps_to_endpoint() {
        let current = layer();
        let mut working = ContainerShape::default();
        let mut ctx = FilterContext::new(&current, &mut working, 800.0, 600.0);
        let mut filter = LineSnapPointFilter::new(LineSnapSettings::default());

        let (mut x, mut y) = (97.0, 2.0);
        assert!(filter.process(&mut ctx, &mut x, &mut y));
        assert!((x - 100.0).abs() < f64::EPSILON);
        assert!(y.abs() < f64::EPSILON);
        assert_eq!(filter.last_hit().map(|hit| hit.mode), Some(LineSnapMode::POINT));
        assert_eq!(filter.guides().len(), 2);

        filter.clear(&mut ctx);
        assert!(ctx.working.is_empty());
    }

    #[test]
    fn test_axis_snap_draws_one_guide() {
        let current = layer();
        let mut working = ContainerShape::default();
        let mut ctx = FilterContext::new(&current, &mut working, 800.0, 600.0);
        let mut filter = LineSnapPointFilter::new(LineSnapSettings {
            mode: LineSnapMode::HORIZONTAL,
            ..LineSnapSettings::default()
        });

        let (mut x, mut y) = (300.0, 4.0);
        assert!(filter.process(&mut ctx, &mut x, &mut y));
        assert!((x - 300.0).abs() < f64::EPSILON);
        assert!(y.abs() < f64::EPSILON);
        assert_eq!(filter.guides().len(), 1);
    }

    #[test]
    fn test_guides_only_target() {
        let mut current = ContainerShape::default();
        current.guides.push(LineShape::from_coords(0.0, 50.0, 100.0, 50.0));
        current.add_shape(Shape::Line(LineShape::from_coords(0.0, 0.0, 100.0, 0.0)));
        let mut working = ContainerShape::default();
        let mut ctx = FilterContext::new(&current, &mut working, 800.0, 600.0);
        let mut filter = LineSnapPointFilter::new(LineSnapSettings {
            target: LineSnapTarget::GUIDES,
            enable_guides: false,
            ..LineSnapSettings::default()
        });

        // Would hit the midpoint of the line shape, which is not a target.
        let (mut x, mut y) = (50.0, 3.0);
        assert!(!filter.process(&mut ctx, &mut x, &mut y));
        assert!(filter.last_hit().is_none());

        let (mut x, mut y) = (1.0, 48.0);
        assert!(filter.process(&mut ctx, &mut x, &mut y));
        assert!(x.abs() < f64::EPSILON);
        assert!((y - 50.0).abs() < f64::EPSILON);
    }
}
