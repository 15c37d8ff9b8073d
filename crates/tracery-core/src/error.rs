//! Error types for hit-testing queries.

use crate::shapes::ShapeKind;
use thiserror::Error;

/// Precondition violations raised by the hit-test core.
///
/// "Nothing under the cursor" is never an error: queries report it as
/// `Ok(None)`. These variants indicate a wiring bug (a shape kind missing
/// from the registry, or a predicate-set handed the wrong shape) and are
/// propagated to the caller untouched.
#[derive(Debug, Error)]
pub enum HitTestError {
    #[error("No bounds registered for shape kind {0:?}")]
    Unregistered(ShapeKind),
    #[error("Bounds for {expected:?} received a {found:?} shape")]
    KindMismatch {
        expected: ShapeKind,
        found: ShapeKind,
    },
    #[error("Invalid view scale: {0}")]
    InvalidScale(f64),
    #[error("Settings error: {0}")]
    Settings(#[from] serde_json::Error),
}

/// Result type for hit-test operations.
pub type HitResult<T> = Result<T, HitTestError>;
