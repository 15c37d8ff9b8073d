use super::{downcast, first_point_hit, positions, ShapeBounds};
use crate::error::HitResult;
use crate::geometry::{polygon_contains, polygon_overlaps};
use crate::hit_test::HitTest;
use crate::input::ModifierFlags;
use crate::shapes::{Shape, SharedPoint, ShapeKind, ShapeTrait};
use kurbo::{Point, Rect};

/// Bounds for cubic beziers: the control polygon stands in for the curve.
#[derive(Debug, Clone, Copy, Default)]
pub struct CubicBezierBounds;

impl ShapeBounds for CubicBezierBounds {
    fn kind(&self) -> ShapeKind {
        ShapeKind::CubicBezier
    }

    fn try_get_point(
        &self,
        shape: &Shape,
        target: Point,
        radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<SharedPoint>> {
        let cubic = downcast!(shape, CubicBezier);
        Ok(first_point_hit(cubic.points(), target, radius))
    }

    fn contains<'a>(
        &self,
        shape: &'a Shape,
        target: Point,
        _radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        let cubic = downcast!(shape, CubicBezier);
        Ok(polygon_contains(&positions(&cubic.points()), target).then_some(shape))
    }

    fn overlaps<'a>(
        &self,
        shape: &'a Shape,
        target: Rect,
        _radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        let cubic = downcast!(shape, CubicBezier);
        Ok(polygon_overlaps(&positions(&cubic.points()), target).then_some(shape))
    }
}

/// Bounds for quadratic beziers, using the start/control/end triangle.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadraticBezierBounds;

impl ShapeBounds for QuadraticBezierBounds {
    fn kind(&self) -> ShapeKind {
        ShapeKind::QuadraticBezier
    }

    fn try_get_point(
        &self,
        shape: &Shape,
        target: Point,
        radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<SharedPoint>> {
        let quad = downcast!(shape, QuadraticBezier);
        Ok(first_point_hit(quad.points(), target, radius))
    }

    fn contains<'a>(
        &self,
        shape: &'a Shape,
        target: Point,
        _radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        let quad = downcast!(shape, QuadraticBezier);
        Ok(polygon_contains(&positions(&quad.points()), target).then_some(shape))
    }

    fn overlaps<'a>(
        &self,
        shape: &'a Shape,
        target: Rect,
        _radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        let quad = downcast!(shape, QuadraticBezier);
        Ok(polygon_overlaps(&positions(&quad.points()), target).then_some(shape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{CubicBezierShape, QuadraticBezierShape};

    fn cubic() -> (Shape, [SharedPoint; 4]) {
        let pts = [
            SharedPoint::new(0.0, 0.0),
            SharedPoint::new(0.0, 100.0),
            SharedPoint::new(100.0, 100.0),
            SharedPoint::new(100.0, 0.0),
        ];
        let shape = Shape::CubicBezier(CubicBezierShape::new(
            pts[0].clone(),
            pts[1].clone(),
            pts[2].clone(),
            pts[3].clone(),
        ));
        (shape, pts)
    }

    #[test]
    fn test_control_point_order() {
        let hit = HitTest::default();
        let (shape, pts) = cubic();
        let none = ModifierFlags::empty();
        let found = CubicBezierBounds
            .try_get_point(&shape, Point::new(2.0, 98.0), 5.0, &hit, none)
            .unwrap()
            .unwrap();
        assert!(found.ptr_eq(&pts[1]));
        assert!(
            CubicBezierBounds
                .try_get_point(&shape, Point::new(50.0, 50.0), 5.0, &hit, none)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_control_polygon_containment() {
        let hit = HitTest::default();
        let (shape, _) = cubic();
        let none = ModifierFlags::empty();
        assert!(CubicBezierBounds.contains(&shape, Point::new(50.0, 50.0), 0.0, &hit, none).unwrap().is_some());
        assert!(CubicBezierBounds.contains(&shape, Point::new(150.0, 50.0), 0.0, &hit, none).unwrap().is_none());
    }

    #[test]
    fn test_quadratic_overlaps() {
        let hit = HitTest::default();
        let shape = Shape::QuadraticBezier(QuadraticBezierShape::new(
            SharedPoint::new(0.0, 0.0),
            SharedPoint::new(50.0, 100.0),
            SharedPoint::new(100.0, 0.0),
        ));
        let none = ModifierFlags::empty();
        let inside = Rect::new(45.0, 10.0, 55.0, 20.0);
        let away = Rect::new(200.0, 200.0, 210.0, 210.0);
        assert!(QuadraticBezierBounds.overlaps(&shape, inside, 0.0, &hit, none).unwrap().is_some());
        assert!(QuadraticBezierBounds.overlaps(&shape, away, 0.0, &hit, none).unwrap().is_none());
    }
}
