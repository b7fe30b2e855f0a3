//! Top-level combination of two size distributions.

use psd::density::density_from_boundaries;
use psd::{Provenance, PsdError, SizeBin, SizeDistribution};
use tracing::{debug, warn};

use crate::classify::{classify_boundaries, RangeRelation};
use crate::error::CombineError;
use crate::gap::{fill_gap, GapFill};
use crate::overlap::merge_overlap;

/// Options controlling the combination.
///
/// Gap interpolation and overlap merging are independently toggleable.
/// With a step disabled, gapped or overlapping bins pass through
/// unfilled/unmerged and the caller is responsible for the resulting
/// inconsistency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombineOptions {
    /// Fold overlapping fine bins into the coarse grid.
    pub merge_overlap: bool,

    /// Bridge a gap between the ranges with interpolated bins.
    pub interpolate_gap: bool,

    /// Parameters for gap interpolation.
    pub gap_fill: GapFill,
}

impl Default for CombineOptions {
    fn default() -> Self {
        Self {
            merge_overlap: true,
            interpolate_gap: true,
            gap_fill: GapFill::default(),
        }
    }
}

/// Combine the fine (low-diameter) and coarse (high-diameter)
/// distributions into one.
///
/// Steps, in order:
/// 1. Tag the inputs' bins ([`Provenance::InstrumentA`] for `low`,
///    [`Provenance::InstrumentB`] for `high`) and concatenate.
/// 2. Classify the range relationship by the facing boundaries.
/// 3. On a gap, bridge it with interpolated bins (if enabled).
/// 4. On an overlap, fold fine bins into the coarse grid (if enabled).
/// 5. Recompute density for every `Interpolated`/`Merged` bin from its
///    count and current boundaries, sort by center diameter, and
///    validate the result.
///
/// Untouched instrument bins come through with their input values
/// bit-identical. An empty input is non-fatal: the other distribution
/// is returned unchanged, provenance tags included.
///
/// # Errors
///
/// * [`PsdError::DegenerateRange`] (wrapped) when a bridge resolution
///   cannot be estimated from a zero-span input
/// * [`CombineError::UnsupportedOverlapShape`] /
///   [`CombineError::InvariantViolation`] from the merge step
/// * construction errors if the combined sequence ends up with
///   duplicate diameters (possible only with a step disabled)
pub fn combine(
    low: &SizeDistribution,
    high: &SizeDistribution,
    options: CombineOptions,
) -> Result<SizeDistribution, CombineError> {
    if low.is_empty() {
        warn!("low-range input is empty; passing the high-range distribution through");
        return Ok(high.clone());
    }
    if high.is_empty() {
        warn!("high-range input is empty; passing the low-range distribution through");
        return Ok(low.clone());
    }

    // 1. Tag sources and concatenate
    let mut bins: Vec<SizeBin> = Vec::with_capacity(low.len() + high.len());
    bins.extend(low.iter().map(|b| SizeBin {
        provenance: Provenance::InstrumentA,
        ..*b
    }));
    bins.extend(high.iter().map(|b| SizeBin {
        provenance: Provenance::InstrumentB,
        ..*b
    }));
    bins.sort_by(|a, b| a.center.total_cmp(&b.center));

    // 2. Classify the range relationship
    let low_max_upper = low.max_upper().ok_or(PsdError::Empty)?;
    let high_min_lower = high.min_lower().ok_or(PsdError::Empty)?;
    let relation = classify_boundaries(low_max_upper, high_min_lower);
    debug!(?relation, low_max_upper, high_min_lower, "classified ranges");

    // 3./4. Reconcile the region between or shared by the ranges
    match relation {
        RangeRelation::Gap if options.interpolate_gap => {
            fill_gap(&mut bins, low, high, &options.gap_fill)?;
        }
        RangeRelation::Overlap if options.merge_overlap => {
            merge_overlap(&mut bins)?;
        }
        _ => {}
    }

    // 5. Renormalize derived bins; original bins keep their densities
    for bin in &mut bins {
        if !bin.provenance.is_original() {
            bin.density = density_from_boundaries(bin.count, bin.lower, bin.upper);
        }
    }
    bins.sort_by(|a, b| a.center.total_cmp(&b.center));

    Ok(SizeDistribution::new(bins)?)
}
