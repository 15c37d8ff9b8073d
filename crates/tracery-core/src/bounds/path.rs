use super::{downcast, positions, ShapeBounds};
use crate::error::HitResult;
use crate::geometry::{polygon_contains, polygon_overlaps};
use crate::hit_test::HitTest;
use crate::input::ModifierFlags;
use crate::shapes::{Shape, SharedPoint, ShapeKind, ShapeTrait};
use kurbo::{Point, Rect};

/// Bounds for paths.
///
/// Figures are queried in order and the first result is returned as is.
/// When no figure matches, containment and overlap fall back to the
/// polygon through every point of the path. That polygon follows point
/// order; it is not the path's fill region.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathBounds;

impl ShapeBounds for PathBounds {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Path
    }

    fn try_get_point(
        &self,
        shape: &Shape,
        target: Point,
        radius: f64,
        hit: &HitTest,
        modifier: ModifierFlags,
    ) -> HitResult<Option<SharedPoint>> {
        let path = downcast!(shape, Path);
        for figure in path.figures() {
            if let Some(point) = hit.shape_try_get_point(figure, target, radius, modifier)? {
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
        let path = downcast!(shape, Path);
        for figure in path.figures() {
            if let Some(result) = hit.shape_contains(figure, target, radius, modifier)? {
                return Ok(Some(result));
            }
        }
        Ok(polygon_contains(&positions(&path.points()), target).then_some(shape))
    }

    fn overlaps<'a>(
        &self,
        shape: &'a Shape,
        target: Rect,
        radius: f64,
        hit: &HitTest,
        modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        let path = downcast!(shape, Path);
        for figure in path.figures() {
            if let Some(result) = hit.shape_overlaps(figure, target, radius, modifier)? {
                return Ok(Some(result));
            }
        }
        Ok(polygon_overlaps(&positions(&path.points()), target).then_some(shape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{FigureShape, LineShape, PathShape};

    fn triangle_path() -> Shape {
        let a = SharedPoint::new(0.0, 0.0);
        let b = SharedPoint::new(100.0, 0.0);
        let c = SharedPoint::new(50.0, 100.0);
        let figure = FigureShape::new(vec![
            Shape::Line(LineShape::new(a.clone(), b.clone())),
            Shape::Line(LineShape::new(b, c.clone())),
            Shape::Line(LineShape::new(c, a)),
        ])
        .closed(true);
        Shape::Path(PathShape::new(vec![figure]))
    }

    #[test]
    fn test_interior_falls_back_to_polygon() {
        let hit = HitTest::default();
        let shape = triangle_path();
        let found = PathBounds
            .contains(&shape, Point::new(50.0, 40.0), 2.0, &hit, ModifierFlags::empty())
            .unwrap()
            .unwrap();
        assert_eq!(found.id(), shape.id());
        assert!(
            PathBounds
                .contains(&shape, Point::new(150.0, 40.0), 2.0, &hit, ModifierFlags::empty())
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_edge_match_returns_figure_result() {
        let hit = HitTest::default();
        let shape = triangle_path();
        let figure_id = shape.children()[0].id();
        // On the bottom edge: the figure matches first and owns the result.
        let found = PathBounds
            .contains(&shape, Point::new(50.0, 1.0), 2.0, &hit, ModifierFlags::empty())
            .unwrap()
            .unwrap();
        assert_eq!(found.id(), figure_id);
        // With Shift the figure hands back the segment itself.
        let found = PathBounds
            .contains(&shape, Point::new(50.0, 1.0), 2.0, &hit, ModifierFlags::SHIFT)
            .unwrap()
            .unwrap();
        assert_eq!(found.kind(), ShapeKind::Line);
    }

    #[test]
    fn test_empty_path_is_inert() {
        let hit = HitTest::default();
        let shape = Shape::Path(PathShape::new(Vec::new()));
        let none = ModifierFlags::empty();
        assert!(PathBounds.try_get_point(&shape, Point::ZERO, 5.0, &hit, none).unwrap().is_none());
        assert!(PathBounds.contains(&shape, Point::ZERO, 5.0, &hit, none).unwrap().is_none());
        let rect = Rect::new(-1.0, -1.0, 1.0, 1.0);
        assert!(PathBounds.overlaps(&shape, rect, 5.0, &hit, none).unwrap().is_none());
    }
}
