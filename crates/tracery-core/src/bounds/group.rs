use super::{downcast, first_point_hit, ShapeBounds};
use crate::error::HitResult;
use crate::hit_test::HitTest;
use crate::input::ModifierFlags;
use crate::shapes::{Shape, SharedPoint, ShapeKind};
use kurbo::{Point, Rect};

/// Bounds for groups. A group is hit as one unit: whichever child matches,
/// the group itself is returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupBounds;

impl ShapeBounds for GroupBounds {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Group
    }

    fn try_get_point(
        &self,
        shape: &Shape,
        target: Point,
        radius: f64,
        hit: &HitTest,
        modifier: ModifierFlags,
    ) -> HitResult<Option<SharedPoint>> {
        let group = downcast!(shape, Group);
        if let Some(point) = first_point_hit(group.connectors.iter().cloned(), target, radius) {
            return Ok(Some(point));
        }
        for child in &group.shapes {
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
        let group = downcast!(shape, Group);
        for child in &group.shapes {
            if hit.shape_contains(child, target, radius, modifier)?.is_some() {
                return Ok(Some(shape));
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
        let group = downcast!(shape, Group);
        for child in &group.shapes {
            if hit.shape_overlaps(child, target, radius, modifier)?.is_some() {
                return Ok(Some(shape));
            }
        }
        Ok(None)
    }
}

/// Bounds for containers (layers). Like groups, the container is returned
/// for any child match; guides are never tested.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainerBounds;

impl ShapeBounds for ContainerBounds {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Container
    }

    fn try_get_point(
        &self,
        shape: &Shape,
        target: Point,
        radius: f64,
        hit: &HitTest,
        modifier: ModifierFlags,
    ) -> HitResult<Option<SharedPoint>> {
        let container = downcast!(shape, Container);
        for child in &container.shapes {
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
        let container = downcast!(shape, Container);
        for child in &container.shapes {
            if hit.shape_contains(child, target, radius, modifier)?.is_some() {
                return Ok(Some(shape));
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
        let container = downcast!(shape, Container);
        for child in &container.shapes {
            if hit.shape_overlaps(child, target, radius, modifier)?.is_some() {
                return Ok(Some(shape));
            }
        }
        Ok(None)
    }
}
