//! Histogram bin types for particle size distributions.

use serde::{Deserialize, Serialize};

/// Which instrument, or which derived process, produced a bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provenance {
    /// The fine instrument covering the small-diameter end (e.g. an SMPS).
    InstrumentA,

    /// The coarse instrument covering the large-diameter end (e.g. an APS).
    InstrumentB,

    /// Synthesized by gap interpolation between the two ranges.
    Interpolated,

    /// Produced by folding overlapping bins of both instruments together.
    Merged,
}

impl Provenance {
    /// Whether the bin still carries an instrument's original values.
    ///
    /// Original bins are passed through combination untouched; only
    /// `Interpolated` and `Merged` bins have derived counts/densities.
    pub fn is_original(&self) -> bool {
        matches!(self, Provenance::InstrumentA | Provenance::InstrumentB)
    }
}

/// One histogram bin of a particle size distribution.
///
/// Diameters are in micrometres. Boundaries always bracket the center:
/// `lower < center < upper`. `density` is derived from `count` and the
/// boundaries (`density = count / (log10(upper) - log10(lower))`) and is
/// recomputed after any boundary or count mutation, never stored
/// independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeBin {
    /// Center diameter of the bin (µm).
    pub center: f64,

    /// Lower diameter boundary (µm).
    pub lower: f64,

    /// Upper diameter boundary (µm).
    pub upper: f64,

    /// Absolute particle count attributed to the bin (dN).
    pub count: f64,

    /// Count normalized by the bin's log10 width (dN/dlogD).
    pub density: f64,

    /// Which instrument or process produced this bin.
    pub provenance: Provenance,
}

impl SizeBin {
    /// Linear bin width in µm.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Logarithmic bin width in decades.
    pub fn log_width(&self) -> f64 {
        self.upper.log10() - self.lower.log10()
    }
}
