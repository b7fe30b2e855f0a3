//! Merging overlapping bins of the fine instrument into the coarse grid.
//!
//! Over the diameter interval both instruments cover, the same aerosol
//! was counted twice. The finer-binned instrument's overlapping bins are
//! folded into the coarse bins they intersect: width fractions covered
//! by only one instrument keep that instrument's count, and the doubly
//! covered fraction takes the average of both estimates. The fine bins
//! are then dropped.

use psd::{Provenance, SizeBin};
use tracing::debug;

use crate::error::CombineError;

/// Geometry of one fine bin's intersection with the coarse grid,
/// referencing target bins by index into the combined sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OverlapShape {
    /// The fine bin starts below every coarse boundary and reaches into
    /// exactly one coarse bin, which absorbs it whole.
    LeftEdge { target: usize },

    /// The fine bin lies strictly inside exactly one coarse bin.
    Contained { target: usize },

    /// The fine bin crosses the boundary between two adjacent coarse
    /// bins.
    Straddle { first: usize, second: usize },

    /// Anything else, e.g. spanning three or more coarse bins. No merge
    /// rule is defined; callers must raise.
    Unsupported { targets: usize },
}

/// Classify how `fine` intersects the coarse bins listed in
/// `target_indices`.
///
/// `grid_lower`/`grid_upper` are the extreme boundaries of the coarse
/// overlap region, snapshotted before any merging mutates them.
pub(crate) fn classify_shape(
    fine: &SizeBin,
    bins: &[SizeBin],
    target_indices: &[usize],
    grid_lower: f64,
    grid_upper: f64,
) -> OverlapShape {
    let hits: Vec<usize> = target_indices
        .iter()
        .copied()
        .filter(|&t| fine.lower < bins[t].upper && fine.upper > bins[t].lower)
        .collect();

    if fine.lower < grid_lower {
        match hits.as_slice() {
            [target] => OverlapShape::LeftEdge { target: *target },
            _ => OverlapShape::Unsupported {
                targets: hits.len(),
            },
        }
    } else if fine.lower > grid_lower && fine.upper < grid_upper {
        match hits.as_slice() {
            [target] => OverlapShape::Contained { target: *target },
            [first, second] => OverlapShape::Straddle {
                first: *first,
                second: *second,
            },
            _ => OverlapShape::Unsupported {
                targets: hits.len(),
            },
        }
    } else {
        OverlapShape::Unsupported {
            targets: hits.len(),
        }
    }
}

/// Fold every overlapping fine ([`Provenance::InstrumentA`]) bin into
/// the coarse ([`Provenance::InstrumentB`]) bin(s) it intersects, then
/// drop the fine bins and re-sort.
///
/// Fine bins are processed in ascending diameter order; each merge
/// reads the target's current (possibly already merged) values, so
/// successive fine bins accumulate into the same target. Modified
/// targets are tagged [`Provenance::Merged`]; their densities are left
/// for the caller to renormalize.
///
/// # Returns
/// The number of fine bins folded away.
///
/// # Errors
///
/// * [`CombineError::UnsupportedOverlapShape`] for any geometry outside
///   left-edge / contained / straddle
/// * [`CombineError::InvariantViolation`] if a merge would produce
///   inverted boundaries
pub(crate) fn merge_overlap(bins: &mut Vec<SizeBin>) -> Result<usize, CombineError> {
    let fine_max_upper = bins
        .iter()
        .filter(|b| b.provenance == Provenance::InstrumentA)
        .map(|b| b.upper)
        .reduce(f64::max);
    let target_min_lower = bins
        .iter()
        .filter(|b| b.provenance == Provenance::InstrumentB)
        .map(|b| b.lower)
        .reduce(f64::min);
    let (Some(fine_max_upper), Some(target_min_lower)) = (fine_max_upper, target_min_lower) else {
        return Ok(0);
    };

    // Overlapping bins of each side; `bins` is sorted, so these are in
    // ascending diameter order
    let fine_indices: Vec<usize> = (0..bins.len())
        .filter(|&i| {
            bins[i].provenance == Provenance::InstrumentA && bins[i].upper > target_min_lower
        })
        .collect();
    let target_indices: Vec<usize> = (0..bins.len())
        .filter(|&i| {
            bins[i].provenance == Provenance::InstrumentB && bins[i].lower < fine_max_upper
        })
        .collect();

    let grid_lower = target_min_lower;
    let grid_upper = target_indices
        .iter()
        .map(|&t| bins[t].upper)
        .fold(f64::MIN, f64::max);

    for &f in &fine_indices {
        let fine = bins[f];
        let w_f = fine.width();

        match classify_shape(&fine, bins, &target_indices, grid_lower, grid_upper) {
            OverlapShape::LeftEdge { target } => {
                let t = bins[target];
                let w_t = t.width();

                let fine_only = t.lower - fine.lower;
                let overlap = fine.upper - t.lower;
                let target_only = t.upper - fine.upper;

                let lower = fine.lower;
                let upper = t.upper;
                if lower >= upper {
                    return Err(CombineError::InvariantViolation { lower, upper });
                }

                bins[target] = SizeBin {
                    center: (lower + upper) / 2.0,
                    lower,
                    upper,
                    count: fine.count * (fine_only / w_f)
                        + t.count * (target_only / w_t)
                        + 0.5 * (fine.count * overlap / w_f + t.count * overlap / w_t),
                    density: t.density,
                    provenance: Provenance::Merged,
                };
            }
            OverlapShape::Contained { target } => {
                let t = &mut bins[target];
                let w_t = t.upper - t.lower;
                t.count = t.count * (w_t - w_f) / w_t + (t.count * (w_f / w_t) + fine.count) / 2.0;
                t.provenance = Provenance::Merged;
            }
            OverlapShape::Straddle { first, second } => {
                let splits = [
                    // Lower target: covered from fine.lower up to its top edge
                    (
                        first,
                        fine.lower - bins[first].lower,
                        bins[first].upper - fine.lower,
                    ),
                    // Upper target: covered from its bottom edge up to fine.upper
                    (
                        second,
                        bins[second].upper - fine.upper,
                        fine.upper - bins[second].lower,
                    ),
                ];
                for (index, target_only, overlap) in splits {
                    let t = &mut bins[index];
                    let w_t = t.upper - t.lower;
                    t.count = t.count * (target_only / w_t)
                        + (t.count * (overlap / w_t) + fine.count * (overlap / w_f)) / 2.0;
                    t.provenance = Provenance::Merged;
                }
            }
            OverlapShape::Unsupported { targets } => {
                return Err(CombineError::UnsupportedOverlapShape {
                    fine_lower: fine.lower,
                    fine_upper: fine.upper,
                    targets,
                });
            }
        }
    }

    // Drop the folded-away fine bins and restore ordering
    let mut index = 0;
    bins.retain(|_| {
        let keep = fine_indices.binary_search(&index).is_err();
        index += 1;
        keep
    });
    bins.sort_by(|a, b| a.center.total_cmp(&b.center));

    debug!(folded = fine_indices.len(), "merged overlapping fine bins");
    Ok(fine_indices.len())
}
