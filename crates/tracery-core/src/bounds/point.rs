use super::{downcast, point_hit, ShapeBounds};
use crate::error::HitResult;
use crate::geometry::{expand_to_rect, RectExt};
use crate::hit_test::HitTest;
use crate::input::ModifierFlags;
use crate::shapes::{Shape, SharedPoint, ShapeKind};
use kurbo::{Point, Rect};

/// Bounds for standalone points: a square of side `2 * radius`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointBounds;

impl ShapeBounds for PointBounds {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Point
    }

    fn try_get_point(
        &self,
        shape: &Shape,
        target: Point,
        radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<SharedPoint>> {
        let point = downcast!(shape, Point);
        Ok(point_hit(&point.point, target, radius).then(|| point.point.clone()))
    }

    fn contains<'a>(
        &self,
        shape: &'a Shape,
        target: Point,
        radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        let point = downcast!(shape, Point);
        Ok(point_hit(&point.point, target, radius).then_some(shape))
    }

    fn overlaps<'a>(
        &self,
        shape: &'a Shape,
        target: Rect,
        radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        let point = downcast!(shape, Point);
        let extent = expand_to_rect(point.point.position(), radius);
        Ok(extent.intersects_with(&target).then_some(shape))
    }
}
