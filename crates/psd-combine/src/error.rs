use psd::PsdError;
use thiserror::Error;

/// Errors raised while combining two size distributions.
///
/// The computation is pure and deterministic, so none of these are
/// retryable; callers should skip and report the affected pair.
#[derive(Debug, Error, PartialEq)]
pub enum CombineError {
    /// An underlying construction or estimation error, e.g. a
    /// degenerate range when picking the bridge resolution.
    #[error(transparent)]
    Psd(#[from] PsdError),

    /// A fine bin's intersection with the coarse range matches none of
    /// the supported merge geometries (left-edge, contained, straddle).
    /// Raised rather than approximated, since any ad-hoc split would
    /// break count conservation.
    #[error(
        "unsupported overlap shape: fine bin [{fine_lower}, {fine_upper}] um \
         intersects {targets} target bin(s)"
    )]
    UnsupportedOverlapShape {
        fine_lower: f64,
        fine_upper: f64,
        targets: usize,
    },

    /// A merge produced a bin with inverted boundaries.
    #[error("invariant violation: merged bin has inverted boundaries [{lower}, {upper}] um")]
    InvariantViolation { lower: f64, upper: f64 },
}
