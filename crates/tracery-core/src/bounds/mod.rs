//! Per-kind geometric predicates and the registry that dispatches to them.
//!
//! Each shape kind has exactly one [`ShapeBounds`] implementation answering
//! three questions about a shape: which of its points lies under the
//! cursor, whether the cursor lies inside its extent, and whether a
//! selection rectangle touches its extent. [`BoundsRegistry`] maps
//! [`ShapeKind`] to those implementations and is built once, then shared
//! read-only by the [`HitTest`] engine.

mod bezier;
mod ellipse;
mod figure;
mod group;
mod line;
mod path;
mod point;
mod rectangle;
mod scribble;

pub use bezier::{CubicBezierBounds, QuadraticBezierBounds};
pub use ellipse::{ArcBounds, CircleBounds, EllipseBounds};
pub use figure::FigureBounds;
pub use group::{ContainerBounds, GroupBounds};
pub use line::LineBounds;
pub use path::PathBounds;
pub use point::PointBounds;
pub use rectangle::{ImageBounds, RectangleBounds, TextBounds};
pub use scribble::ScribbleBounds;

use crate::error::{HitResult, HitTestError};
use crate::geometry::{expand_to_rect, RectExt};
use crate::hit_test::HitTest;
use crate::input::ModifierFlags;
use crate::shapes::{Shape, SharedPoint, ShapeKind};
use kurbo::{Point, Rect};
use std::collections::HashMap;
use std::fmt;

/// Unwrap the variant a predicate-set was registered for, or return
/// [`HitTestError::KindMismatch`].
macro_rules! downcast {
    ($shape:expr, $variant:ident) => {
        match $shape {
            crate::shapes::Shape::$variant(inner) => inner,
            other => {
                log::warn!(
                    "{:?} bounds handed a {:?} shape",
                    crate::shapes::ShapeKind::$variant,
                    other.kind()
                );
                return Err(crate::error::HitTestError::KindMismatch {
                    expected: crate::shapes::ShapeKind::$variant,
                    found: other.kind(),
                });
            }
        }
    };
}
pub(crate) use downcast;

/// The predicate-set for one shape kind.
///
/// Implementations are stateless. Every method must be called with a shape
/// of [`ShapeBounds::kind`]; anything else yields
/// [`HitTestError::KindMismatch`]. `radius` is already in document units.
pub trait ShapeBounds: fmt::Debug {
    /// The shape kind this predicate-set answers for.
    fn kind(&self) -> ShapeKind;

    /// First of the shape's points whose tolerance square contains `target`.
    fn try_get_point(
        &self,
        shape: &Shape,
        target: Point,
        radius: f64,
        hit: &HitTest,
        modifier: ModifierFlags,
    ) -> HitResult<Option<SharedPoint>>;

    /// The shape (or the owner that should be selected for it) if `target`
    /// lies within its extent.
    fn contains<'a>(
        &self,
        shape: &'a Shape,
        target: Point,
        radius: f64,
        hit: &HitTest,
        modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>>;

    /// The shape (or a matching child) if its extent touches `target`.
    fn overlaps<'a>(
        &self,
        shape: &'a Shape,
        target: Rect,
        radius: f64,
        hit: &HitTest,
        modifier: ModifierFlags,
    ) -> HitResult<Option<&'a Shape>>;
}

/// Whether `target` falls in the tolerance square around `point`.
pub fn point_hit(point: &SharedPoint, target: Point, radius: f64) -> bool {
    expand_to_rect(point.position(), radius).contains_point(target)
}

/// First point of `points`, in order, hit by `target`.
pub(crate) fn first_point_hit(
    points: impl IntoIterator<Item = SharedPoint>,
    target: Point,
    radius: f64,
) -> Option<SharedPoint> {
    points
        .into_iter()
        .find(|point| point_hit(point, target, radius))
}

/// Current positions of a run of shared points.
pub(crate) fn positions(points: &[SharedPoint]) -> Vec<Point> {
    points.iter().map(SharedPoint::position).collect()
}

/// Maps each shape kind to its predicate-set.
///
/// Build it once at startup with [`BoundsRegistry::with_defaults`] and hand
/// it to the [`HitTest`] engine; it is never mutated while queries run.
pub struct BoundsRegistry {
    table: HashMap<ShapeKind, Box<dyn ShapeBounds>>,
}

impl fmt::Debug for BoundsRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.table.keys().collect();
        kinds.sort_by_key(|k| format!("{k:?}"));
        f.debug_struct("BoundsRegistry")
            .field("kinds", &kinds)
            .finish()
    }
}

impl Default for BoundsRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl BoundsRegistry {
    /// An empty registry. Queries against it fail until kinds are
    /// registered.
    pub fn empty() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// A registry with the built-in predicate-set for every shape kind.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(PointBounds));
        registry.register(Box::new(LineBounds));
        registry.register(Box::new(CubicBezierBounds));
        registry.register(Box::new(QuadraticBezierBounds));
        registry.register(Box::new(ArcBounds));
        registry.register(Box::new(CircleBounds));
        registry.register(Box::new(EllipseBounds));
        registry.register(Box::new(RectangleBounds));
        registry.register(Box::new(TextBounds));
        registry.register(Box::new(ImageBounds));
        registry.register(Box::new(PathBounds));
        registry.register(Box::new(FigureBounds));
        registry.register(Box::new(GroupBounds));
        registry.register(Box::new(ContainerBounds));
        registry.register(Box::new(ScribbleBounds));
        log::info!("Bounds registry built with {} shape kinds", registry.len());
        registry
    }

    /// Register a predicate-set under its own kind, returning the one it
    /// replaces.
    pub fn register(&mut self, bounds: Box<dyn ShapeBounds>) -> Option<Box<dyn ShapeBounds>> {
        self.table.insert(bounds.kind(), bounds)
    }

    /// Look up the predicate-set for `kind`.
    pub fn get(&self, kind: ShapeKind) -> HitResult<&dyn ShapeBounds> {
        match self.table.get(&kind) {
            Some(bounds) => Ok(bounds.as_ref()),
            None => {
                log::warn!("No bounds registered for {kind:?}");
                Err(HitTestError::Unregistered(kind))
            }
        }
    }

    /// Look up the predicate-set for a shape's kind.
    pub fn resolve(&self, shape: &Shape) -> HitResult<&dyn ShapeBounds> {
        self.get(shape.kind())
    }

    /// Shape kinds with no registered predicate-set.
    pub fn missing(&self) -> Vec<ShapeKind> {
        ShapeKind::ALL
            .into_iter()
            .filter(|kind| !self.table.contains_key(kind))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_is_registered() {
        let registry = BoundsRegistry::with_defaults();
        assert!(registry.missing().is_empty());
        for kind in ShapeKind::ALL {
            assert_eq!(registry.get(kind).unwrap().kind(), kind);
        }
    }

    #[test]
    fn test_empty_registry_fails_fast() {
        let registry = BoundsRegistry::empty();
        assert!(matches!(
            registry.get(ShapeKind::Line),
            Err(HitTestError::Unregistered(ShapeKind::Line))
        ));
        assert_eq!(registry.missing().len(), ShapeKind::ALL.len());
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = BoundsRegistry::with_defaults();
        let previous = registry.register(Box::new(LineBounds));
        assert!(previous.is_some());
        assert_eq!(registry.len(), ShapeKind::ALL.len());
    }

    #[test]
    fn test_point_hit_boundary_is_closed() {
        let p = SharedPoint::new(0.0, 0.0);
        assert!(point_hit(&p, Point::new(5.0, 5.0), 5.0));
        assert!(point_hit(&p, Point::new(-5.0, 0.0), 5.0));
        assert!(!point_hit(&p, Point::new(5.01, 0.0), 5.0));
    }
}
