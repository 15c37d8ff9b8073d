use super::{downcast, first_point_hit, ShapeBounds};
use crate::error::HitResult;
use crate::geometry::RectExt;
use crate::hit_test::HitTest;
use crate::input::ModifierFlags;
use crate::shapes::{Shape, SharedPoint, ShapeKind, ShapeTrait};
use kurbo::{Point, Rect};

/// Bounds for rectangles: the box spanned by the two corners.
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleBounds;

impl ShapeBounds for RectangleBounds {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn try_get_point(
        &self,
        shape: &Shape,
        target: Point,
        radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<SharedPoint>> {
        let rect = downcast!(shape, Rectangle);
        Ok(first_point_hit(rect.points(), target, radius))
    }

    fn contains<'a>(
        &self,
        shape: &'a Shape,
        target: Point,
        _radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        let rect = downcast!(shape, Rectangle);
        Ok(rect.as_rect().contains_point(target).then_some(shape))
    }

    fn overlaps<'a>(
        &self,
        shape: &'a Shape,
        target: Rect,
        _radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        let rect = downcast!(shape, Rectangle);
        Ok(rect.as_rect().intersects_with(&target).then_some(shape))
    }
}

/// Bounds for text blocks: their layout box.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextBounds;

impl ShapeBounds for TextBounds {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Text
    }

    fn try_get_point(
        &self,
        shape: &Shape,
        target: Point,
        radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<SharedPoint>> {
        let text = downcast!(shape, Text);
        Ok(first_point_hit(text.points(), target, radius))
    }

    fn contains<'a>(
        &self,
        shape: &'a Shape,
        target: Point,
        _radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        let text = downcast!(shape, Text);
        let extent = Rect::from_corners(text.top_left.position(), text.bottom_right.position());
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
        let text = downcast!(shape, Text);
        let extent = Rect::from_corners(text.top_left.position(), text.bottom_right.position());
        Ok(extent.intersects_with(&target).then_some(shape))
    }
}

/// Bounds for images: their placement box.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageBounds;

impl ShapeBounds for ImageBounds {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Image
    }

    fn try_get_point(
        &self,
        shape: &Shape,
        target: Point,
        radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<SharedPoint>> {
        let image = downcast!(shape, Image);
        Ok(first_point_hit(image.points(), target, radius))
    }

    fn contains<'a>(
        &self,
        shape: &'a Shape,
        target: Point,
        _radius: f64,
        _hit: &HitTest,
        _modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>> {
        let image = downcast!(shape, Image);
        let extent = Rect::from_corners(image.top_left.position(), image.bottom_right.position());
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
        let image = downcast!(shape, Image);
        let extent = Rect::from_corners(image.top_left.position(), image.bottom_right.position());
        Ok(extent.intersects_with(&target).then_some(shape))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{ImageShape, RectangleShape, TextShape};

    #[test]
    fn test_rectangle_edges_are_inside() {
        let hit = HitTest::default();
        let none = ModifierFlags::empty();
        let shape = Shape::Rectangle(RectangleShape::from_coords(0.0, 0.0, 100.0, 50.0));
        assert!(RectangleBounds.contains(&shape, Point::new(100.0, 50.0), 0.0, &hit, none).unwrap().is_some());
        assert!(RectangleBounds.contains(&shape, Point::new(100.5, 50.0), 0.0, &hit, none).unwrap().is_none());
    }

    #[test]
    fn test_rectangle_corner_points() {
        let hit = HitTest::default();
        let none = ModifierFlags::empty();
        let rect = RectangleShape::from_coords(0.0, 0.0, 100.0, 50.0);
        let corner = rect.bottom_right.clone();
        let shape = Shape::Rectangle(rect);
        let found = RectangleBounds
            .try_get_point(&shape, Point::new(97.0, 48.0), 4.0, &hit, none)
            .unwrap()
            .unwrap();
        assert!(found.ptr_eq(&corner));
    }

    #[test]
    fn test_text_and_image_boxes() {
        let hit = HitTest::default();
        let none = ModifierFlags::empty();
        let text = Shape::Text(TextShape::new(
            SharedPoint::new(0.0, 0.0),
            SharedPoint::new(80.0, 20.0),
            "Label",
        ));
        let image = Shape::Image(ImageShape::new(
            SharedPoint::new(0.0, 0.0),
            SharedPoint::new(64.0, 64.0),
            "logo.png",
        ));
        let rect = Rect::new(70.0, 10.0, 90.0, 30.0);
        assert!(TextBounds.overlaps(&text, rect, 0.0, &hit, none).unwrap().is_some());
        assert!(ImageBounds.overlaps(&image, rect, 0.0, &hit, none).unwrap().is_none());
        assert!(ImageBounds.contains(&image, Point::new(32.0, 32.0), 0.0, &hit, none).unwrap().is_some());
    }
}
