//! Tracery Core Library
//!
//! Hit-testing, geometric bounds and snapping for a 2D vector editor.
//! Tools hand the [`Canvas`] a document-space point with a tolerance; the
//! [`HitTest`] engine dispatches each shape to the [`ShapeBounds`]
//! registered for its kind and recurses through composite shapes.

pub mod bounds;
pub mod camera;
pub mod canvas;
pub mod error;
pub mod geometry;
pub mod hit_test;
pub mod input;
pub mod selection;
pub mod settings;
pub mod shapes;
pub mod snap;

pub use bounds::{BoundsRegistry, ShapeBounds};
pub use camera::Camera;
pub use canvas::{Canvas, CanvasDocument};
pub use error::{HitResult, HitTestError};
pub use hit_test::HitTest;
pub use input::{ModifierFlags, Modifiers};
pub use selection::SelectionState;
pub use settings::EditorSettings;
pub use shapes::{Shape, ShapeId, ShapeKind, ShapeTrait, SharedPoint};
pub use snap::{snap_grid, try_line_snap, LineSnapMode, LineSnapResult, PointFilter};
