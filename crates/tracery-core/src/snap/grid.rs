use super::filter::{FilterContext, PointFilter};
use super::snap_to_grid;
use crate::settings::GridSnapSettings;
use crate::shapes::{ShapeId, ShapeStyle};
use std::rc::Rc;

/// Snaps points to the grid, drawing guides through the snapped point.
#[derive(Debug)]
pub struct GridSnapPointFilter {
    settings: GridSnapSettings,
    guide_style: Rc<ShapeStyle>,
    guides: Vec<ShapeId>,
}

impl GridSnapPointFilter {
    pub fn new(settings: GridSnapSettings) -> Self {
        let guide_style = Rc::new(settings.guide_style.clone());
        Self {
            settings,
            guide_style,
            guides: Vec::new(),
        }
    }

    pub fn settings(&self) -> &GridSnapSettings {
        &self.settings
    }

    /// Guides currently shown in the working layer.
    pub fn guides(&self) -> &[ShapeId] {
        &self.guides
    }
}

impl PointFilter for GridSnapPointFilter {
    fn title(&self) -> &str {
        "Grid-Snap"
    }

    fn process(&mut self, ctx: &mut FilterContext<'_>, x: &mut f64, y: &mut f64) -> bool {
        if !self.settings.enabled || self.settings.mode.is_empty() {
            return false;
        }

        let result = snap_to_grid(
            kurbo::Point::new(*x, *y),
            self.settings.size_x,
            self.settings.size_y,
            self.settings.mode,
        );
        *x = result.point.x;
        *y = result.point.y;

        if self.settings.enable_guides {
            if result.snapped_y {
                let id = ctx.add_horizontal_guide(result.point.y, &self.guide_style);
                self.guides.push(id);
            }
            if result.snapped_x {
                let id = ctx.add_vertical_guide(result.point.x, &self.guide_style);
                self.guides.push(id);
            }
        }
        result.is_snapped()
    }

    fn clear(&mut self, ctx: &mut FilterContext<'_>) {
        ctx.remove_guides(&mut self.guides);
    }
}
