use super::{downcast, first_point_hit, ShapeBounds};
use crate::error::HitResult;
use crate::hit_test::HitTest;
use crate::input::ModifierFlags;
use crate::shapes::{Shape, SharedPoint, ShapeKind, ShapeTrait};
use kurbo::{Point, Rect};

/// Bounds for figures.
///
/// Shift drills into the segments: `try_get_point` dispatches to each
/// segment and `contains` returns the innermost match. Without Shift the
/// figure acts as one unit: only its vertex list is tested for points and
/// the figure itself is returned for containment.
#[derive(Debug, Clone, Copy, Default)]
pub struct FigureBounds;

impl ShapeBounds for FigureBounds {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Figure
    }

    fn try_get_point(
        &self,
        shape: &Shape,
        target: Point,
        radius: f64,
        hit: &HitTest,
        modifier: ModifierFlags,
    ) -> HitResult<Option<SharedPoint>> {
        let figure = downcast!(shape, Figure);
        if !modifier.contains(ModifierFlags::SHIFT) {
            return Ok(first_point_hit(figure.points(), target, radius));
        }
        for child in &figure.shapes {
            if let Some(point) = hit.shape_try_get_point(child, target, radius, modifier)? {
                return Ok(Some(point));
            }
        }
        Ok(None)
    }

    fn contains<'a>(
        &self,
        shape: &'a Shape,
        target: Point,
        radius: f64,
        hit: &HitTest,
        modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        let figure = downcast!(shape, Figure);
        for child in &figure.shapes {
            if let Some(result) = hit.shape_contains(child, target, radius, modifier)? {
                return Ok(Some(if modifier.contains(ModifierFlags::SHIFT) {
                    result
                } else {
                    shape
                }));
            }
        }
        Ok(None)
    }

    fn overlaps<'a>(
        &self,
        shape: &'a Shape,
        target: Rect,
        radius: f64,
        hit: &HitTest,
        modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        let figure = downcast!(shape, Figure);
        for child in &figure.shapes {
            if let Some(result) = hit.shape_overlaps(child, target, radius, modifier)? {
                return Ok(Some(result));
            }
        }
        Ok(None)
    }
}
