use super::{downcast, first_point_hit, ShapeBounds};
use crate::error::HitResult;
use crate::geometry::{expand_to_rect, RectExt};
use crate::hit_test::HitTest;
use crate::input::ModifierFlags;
use crate::shapes::{Shape, SharedPoint, ShapeKind, ShapeTrait};
use kurbo::{Point, Rect};

/// Bounds for ellipses: the box spanned by the two corners.
#[derive(Debug, Clone, Copy, Default)]
pub struct EllipseBounds;

impl ShapeBounds for EllipseBounds {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
    }

    fn try_get_point(
        &self,
        shape: &Shape,
        target: Point,
        radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<SharedPoint>> {
        let ellipse = downcast!(shape, Ellipse);
        Ok(first_point_hit(ellipse.points(), target, radius))
    }

    fn contains<'a>(
        &self,
        shape: &'a Shape,
        target: Point,
        _radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        let ellipse = downcast!(shape, Ellipse);
        let extent = Rect::from_corners(ellipse.top_left.position(), ellipse.bottom_right.position());
        Ok(extent.contains_point(target).then_some(shape))
    }

    fn overlaps<'a>(
        &self,
        shape: &'a Shape,
        target: Rect,
        _radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        let ellipse = downcast!(shape, Ellipse);
        let extent = Rect::from_corners(ellipse.top_left.position(), ellipse.bottom_right.position());
        Ok(extent.intersects_with(&target).then_some(shape))
    }
}

/// Bounds for circles: the square enclosing the circle.
#[derive(Debug, Clone, Copy, Default)]
pub struct CircleBounds;

impl ShapeBounds for CircleBounds {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn try_get_point(
        &self,
        shape: &Shape,
        target: Point,
        radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<SharedPoint>> {
        let circle = downcast!(shape, Circle);
        Ok(first_point_hit(circle.points(), target, radius))
    }

    fn contains<'a>(
        &self,
        shape: &'a Shape,
        target: Point,
        _radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        let circle = downcast!(shape, Circle);
        let extent = expand_to_rect(circle.center.position(), circle.radius());
        Ok(extent.contains_point(target).then_some(shape))
    }

    fn overlaps<'a>(
        &self,
        shape: &'a Shape,
        target: Rect,
        _radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        let circle = downcast!(shape, Circle);
        let extent = expand_to_rect(circle.center.position(), circle.radius());
        Ok(extent.intersects_with(&target).then_some(shape))
    }
}

/// Bounds for arcs: the box of the underlying ellipse, regardless of the
/// swept angle.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArcBounds;

impl ShapeBounds for ArcBounds {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Arc
    }

    fn try_get_point(
        &self,
        shape: &Shape,
        target: Point,
        radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<SharedPoint>> {
        let arc = downcast!(shape, Arc);
        Ok(first_point_hit(arc.points(), target, radius))
    }

    fn contains<'a>(
        &self,
        shape: &'a Shape,
        target: Point,
        _radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        let arc = downcast!(shape, Arc);
        let extent = Rect::from_corners(arc.point1.position(), arc.point2.position());
        Ok(extent.contains_point(target).then_some(shape))
    }

    fn overlaps<'a>(
        &self,
        shape: &'a Shape,
        target: Rect,
        _radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        let arc = downcast!(shape, Arc);
        let extent = Rect::from_corners(arc.point1.position(), arc.point2.position());
        Ok(extent.intersects_with(&target).then_some(shape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{ArcShape, CircleShape, EllipseShape};

    #[test]
    fn test_circle_square_extent() {
        let hit = HitTest::default();
        let none = ModifierFlags::empty();
        let shape = Shape::Circle(CircleShape::new(
            SharedPoint::new(50.0, 50.0),
            SharedPoint::new(60.0, 50.0),
        ));
        // Corner of the bounding square counts even though it is outside the circle.
        assert!(CircleBounds.contains(&shape, Point::new(60.0, 60.0), 0.0, &hit, none).unwrap().is_some());
        assert!(CircleBounds.contains(&shape, Point::new(61.0, 50.0), 0.0, &hit, none).unwrap().is_none());
        let rect = Rect::new(59.0, 59.0, 70.0, 70.0);
        assert!(CircleBounds.overlaps(&shape, rect, 0.0, &hit, none).unwrap().is_some());
    }

    #[test]
    fn test_ellipse_corners_any_order() {
        let hit = HitTest::default();
        let none = ModifierFlags::empty();
        let shape = Shape::Ellipse(EllipseShape::new(
            SharedPoint::new(100.0, 100.0),
            SharedPoint::new(0.0, 0.0),
        ));
        assert!(EllipseBounds.contains(&shape, Point::new(100.0, 0.0), 0.0, &hit, none).unwrap().is_some());
        assert!(EllipseBounds.contains(&shape, Point::new(-1.0, 0.0), 0.0, &hit, none).unwrap().is_none());
    }

    #[test]
    fn test_arc_angle_points_are_hit_after_corners() {
        let hit = HitTest::default();
        let none = ModifierFlags::empty();
        let start = SharedPoint::new(100.0, 50.0);
        let shape = Shape::Arc(ArcShape::new(
            SharedPoint::new(0.0, 0.0),
            SharedPoint::new(100.0, 100.0),
            start.clone(),
            SharedPoint::new(50.0, 0.0),
        ));
        let found = ArcBounds
            .try_get_point(&shape, Point::new(99.0, 51.0), 3.0, &hit, none)
            .unwrap()
            .unwrap();
        assert!(found.ptr_eq(&start));
    }
}
