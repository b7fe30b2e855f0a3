//! Classification of the relationship between two measurement ranges.

use psd::SizeDistribution;

/// How the fine (low-diameter) and coarse (high-diameter) ranges relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeRelation {
    /// The ranges intersect: the fine range's top boundary lies above
    /// the coarse range's bottom boundary.
    Overlap,

    /// A diameter interval between the ranges is covered by neither
    /// instrument.
    Gap,

    /// The ranges share exactly one boundary; nothing to reconcile.
    Touching,
}

/// Classify the relationship between two non-empty ranges by their
/// facing boundaries.
///
/// # Arguments
/// * `low_max_upper` - Largest upper boundary of the low-diameter range (µm)
/// * `high_min_lower` - Smallest lower boundary of the high-diameter range (µm)
pub fn classify_boundaries(low_max_upper: f64, high_min_lower: f64) -> RangeRelation {
    if low_max_upper > high_min_lower {
        RangeRelation::Overlap
    } else if low_max_upper < high_min_lower {
        RangeRelation::Gap
    } else {
        RangeRelation::Touching
    }
}

/// Classify two distributions, or `None` if either is empty.
pub fn classify_ranges(
    low: &SizeDistribution,
    high: &SizeDistribution,
) -> Option<RangeRelation> {
    Some(classify_boundaries(low.max_upper()?, high.min_lower()?))
}
