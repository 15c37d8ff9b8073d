//! Hit-test engine: resolves shapes to their predicate-set and scans shape
//! sequences.

use crate::bounds::BoundsRegistry;
use crate::error::{HitResult, HitTestError};
use crate::input::ModifierFlags;
use crate::shapes::{Shape, SharedPoint};
use kurbo::{Point, Rect};

/// Dispatches queries to the predicate-set registered for each shape's
/// kind.
///
/// The per-shape methods (`shape_*`) take a radius already in document
/// units and are what composite predicate-sets recurse through. The
/// sequence methods take a screen-space radius plus the view scale, and
/// return the first hit in sequence order.
#[derive(Debug, Default)]
pub struct HitTest {
    registry: BoundsRegistry,
}

impl HitTest {
    pub fn new(registry: BoundsRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &BoundsRegistry {
        &self.registry
    }

    /// First point of `shape` hit by `target`.
    pub fn shape_try_get_point(
        &self,
        shape: &Shape,
        target: Point,
        radius: f64,
        modifier: ModifierFlags,
    ) -> HitResult<Option<SharedPoint>> {
        log::trace!("try_get_point on {:?} {}", shape.kind(), shape.id());
        self.registry
            .resolve(shape)?
            .try_get_point(shape, target, radius, self, modifier)
    }

    /// `shape`, or the shape to select for it, if `target` lies in its extent.
    pub fn shape_contains<'a>(
        &self,
        shape: &'a Shape,
        target: Point,
        radius: f64,
        modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        log::trace!("contains on {:?} {}", shape.kind(), shape.id());
        self.registry
            .resolve(shape)?
            .contains(shape, target, radius, self, modifier)
    }

    /// `shape`, or a matching child, if its extent touches `target`.
    pub fn shape_overlaps<'a>(
        &self,
        shape: &'a Shape,
        target: Rect,
        radius: f64,
        modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        log::trace!("overlaps on {:?} {}", shape.kind(), shape.id());
        self.registry
            .resolve(shape)?
            .overlaps(shape, target, radius, self, modifier)
    }

    /// First point hit across `shapes`, in order.
    pub fn try_get_point(
        &self,
        shapes: &[Shape],
        target: Point,
        radius: f64,
        scale: f64,
        modifier: ModifierFlags,
    ) -> HitResult<Option<SharedPoint>> {
        let radius = effective_radius(radius, scale)?;
        for shape in shapes {
            if let Some(point) = self.shape_try_get_point(shape, target, radius, modifier)? {
                log::debug!("Point hit at {:?} on {:?} {}", point.position(), shape.kind(), shape.id());
                return Ok(Some(point));
            }
        }
        Ok(None)
    }

    /// First shape across `shapes` whose extent contains `target`.
    pub fn contains<'a>(
        &self,
        shapes: &'a [Shape],
        target: Point,
        radius: f64,
        scale: f64,
        modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        let radius = effective_radius(radius, scale)?;
        for shape in shapes {
            if let Some(found) = self.shape_contains(shape, target, radius, modifier)? {
                log::debug!("Contains hit {:?} {}", found.kind(), found.id());
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    /// First shape across `shapes` whose extent touches `target`.
    pub fn overlaps<'a>(
        &self,
        shapes: &'a [Shape],
        target: Rect,
        radius: f64,
        scale: f64,
        modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        let radius = effective_radius(radius, scale)?;
        for shape in shapes {
            if let Some(found) = self.shape_overlaps(shape, target, radius, modifier)? {
                log::debug!("Overlaps hit {:?} {}", found.kind(), found.id());
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    /// Every top-level shape in `shapes` whose extent touches `target`,
    /// in order. Used for rubber-band selection.
    pub fn overlaps_all<'a>(
        &self,
        shapes: &'a [Shape],
        target: Rect,
        radius: f64,
        scale: f64,
        modifier: ModifierFlags,
    ) -> HitResult<Vec<&'a Shape>> {
        let radius = effective_radius(radius, scale)?;
        let mut found = Vec::new();
        for shape in shapes {
            if self.shape_overlaps(shape, target, radius, modifier)?.is_some() {
                found.push(shape);
            }
        }
        Ok(found)
    }
}

/// Screen-space tolerance converted to document units.
pub fn effective_radius(radius: f64, scale: f64) -> HitResult<f64> {
    if !(scale.is_finite() && scale > 0.0) {
        log::warn!("Rejecting hit-test with view scale {scale}");
        return Err(HitTestError::InvalidScale(scale));
    }
    Ok(radius / scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{LineShape, PointShape};

    #[test]
    fn test_effective_radius() {
        assert_eq!(effective_radius(10.0, 2.0).unwrap(), 5.0);
        assert!(matches!(effective_radius(10.0, 0.0), Err(HitTestError::InvalidScale(_))));
        assert!(effective_radius(10.0, -1.0).is_err());
        assert!(effective_radius(10.0, f64::NAN).is_err());
        assert!(effective_radius(10.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_first_shape_wins() {
        let hit = HitTest::default();
        let first = SharedPoint::new(0.0, 0.0);
        let shapes = vec![
            Shape::Point(PointShape::new(first.clone())),
            Shape::Point(PointShape::new(SharedPoint::new(1.0, 1.0))),
        ];
        let found = hit
            .try_get_point(&shapes, Point::new(0.5, 0.5), 2.0, 1.0, ModifierFlags::empty())
            .unwrap()
            .unwrap();
        assert!(found.ptr_eq(&first));
    }

    #[test]
    fn test_unregistered_kind_is_fatal() {
        let hit = HitTest::new(BoundsRegistry::empty());
        let shapes = vec![Shape::Line(LineShape::from_coords(0.0, 0.0, 10.0, 0.0))];
        let result = hit.contains(&shapes, Point::new(5.0, 0.0), 1.0, 1.0, ModifierFlags::empty());
        assert!(matches!(result, Err(HitTestError::Unregistered(_))));
    }

    #[test]
    fn test_empty_sequence_misses() {
        let hit = HitTest::default();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(hit.overlaps(&[], rect, 1.0, 1.0, ModifierFlags::empty()).unwrap().is_none());
        assert!(hit.overlaps_all(&[], rect, 1.0, 1.0, ModifierFlags::empty()).unwrap().is_empty());
    }

    #[test]
    fn test_overlaps_all_collects_in_order() {
        let hit = HitTest::default();
        let a = Shape::Line(LineShape::from_coords(0.0, 0.0, 10.0, 0.0));
        let b = Shape::Line(LineShape::from_coords(100.0, 100.0, 110.0, 100.0));
        let c = Shape::Line(LineShape::from_coords(0.0, 5.0, 10.0, 5.0));
        let ids = [a.id(), c.id()];
        let shapes = vec![a, b, c];
        let found = hit
            .overlaps_all(&shapes, Rect::new(-1.0, -1.0, 20.0, 20.0), 1.0, 1.0, ModifierFlags::empty())
            .unwrap();
        let found_ids: Vec<_> = found.iter().map(|s| s.id()).collect();
        assert_eq!(found_ids, ids);
    }
}
