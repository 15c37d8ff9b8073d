use super::{downcast, first_point_hit, ShapeBounds};
use crate::error::HitResult;
use crate::geometry::{distance_to_segment, line_intersects_with_rect};
use crate::hit_test::HitTest;
use crate::input::ModifierFlags;
use crate::shapes::{Shape, SharedPoint, ShapeKind, ShapeTrait};
use kurbo::{Point, Rect};

/// Bounds for straight lines. A line has no area, so containment means
/// "closer to the segment than the tolerance radius".
#[derive(Debug, Clone, Copy, Default)]
pub struct LineBounds;

impl ShapeBounds for LineBounds {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Line
    }

    fn try_get_point(
        &self,
        shape: &Shape,
        target: Point,
        radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<SharedPoint>> {
        let line = downcast!(shape, Line);
        Ok(first_point_hit(line.points(), target, radius))
    }

    fn contains<'a>(
        &self,
        shape: &'a Shape,
        target: Point,
        radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        let line = downcast!(shape, Line);
        let (a, b) = line.endpoints();
        Ok((distance_to_segment(target, a, b) < radius).then_some(shape))
    }

    fn overlaps<'a>(
        &self,
        shape: &'a Shape,
        target: Rect,
        _radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        let line = downcast!(shape, Line);
        let (a, b) = line.endpoints();
        Ok(line_intersects_with_rect(a, b, target)
            .is_some()
            .then_some(shape))
    }
}
