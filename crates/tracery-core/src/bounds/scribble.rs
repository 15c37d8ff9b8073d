use super::{downcast, first_point_hit, positions, ShapeBounds};
use crate::error::HitResult;
use crate::geometry::{polygon_contains, polygon_overlaps};
use crate::hit_test::HitTest;
use crate::input::ModifierFlags;
use crate::shapes::{Shape, SharedPoint, ShapeKind};
use kurbo::{Point, Rect};

/// Bounds for freehand scribbles, treating the stroke as a polygon.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScribbleBounds;

impl ShapeBounds for ScribbleBounds {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Scribble
    }

    fn try_get_point(
        &self,
        shape: &Shape,
        target: Point,
        radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<SharedPoint>> {
        let scribble = downcast!(shape, Scribble);
        Ok(first_point_hit(scribble.points.iter().cloned(), target, radius))
    }

    fn contains<'a>(
        &self,
        shape: &'a Shape,
        target: Point,
        _radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        let scribble = downcast!(shape, Scribble);
        Ok(polygon_contains(&positions(&scribble.points), target).then_some(shape))
    }

    fn overlaps<'a>(
        &self,
        shape: &'a Shape,
        target: Rect,
        _radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        let scribble = downcast!(shape, Scribble);
        Ok(polygon_overlaps(&positions(&scribble.points), target).then_some(shape))
    }
}
