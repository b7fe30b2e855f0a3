//! A validated, ordered sequence of size bins.

use serde::{Deserialize, Serialize};

use crate::bins::SizeBin;
use crate::error::PsdError;

/// An ordered sequence of [`SizeBin`], strictly ascending by center
/// diameter.
///
/// Ordering and boundary invariants are enforced at construction so that
/// consumers (in particular the combination engine) never have to
/// re-derive them. Bins from a single instrument are contiguous in
/// practice, but contiguity is not enforced here because combined
/// distributions legitimately mix sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeDistribution {
    bins: Vec<SizeBin>,
}

impl SizeDistribution {
    /// Build a distribution from bins, validating the ordering and
    /// boundary invariants.
    ///
    /// # Errors
    ///
    /// * [`PsdError::InvalidBoundaries`] if any bin violates
    ///   `0 < lower < center < upper`
    /// * [`PsdError::NegativeCount`] if any bin has a negative count
    /// * [`PsdError::UnsortedBins`] if centers are not strictly ascending
    ///   (this also rejects duplicate diameters)
    pub fn new(bins: Vec<SizeBin>) -> Result<Self, PsdError> {
        for (index, bin) in bins.iter().enumerate() {
            if !(bin.lower > 0.0 && bin.lower < bin.center && bin.center < bin.upper) {
                return Err(PsdError::InvalidBoundaries {
                    index,
                    lower: bin.lower,
                    center: bin.center,
                    upper: bin.upper,
                });
            }
            if bin.count < 0.0 {
                return Err(PsdError::NegativeCount {
                    index,
                    count: bin.count,
                });
            }
        }
        for (index, pair) in bins.windows(2).enumerate() {
            if pair[1].center <= pair[0].center {
                return Err(PsdError::UnsortedBins {
                    index: index + 1,
                    previous: pair[0].center,
                    current: pair[1].center,
                });
            }
        }
        Ok(Self { bins })
    }

    /// An empty distribution.
    pub fn empty() -> Self {
        Self { bins: Vec::new() }
    }

    pub fn bins(&self) -> &[SizeBin] {
        &self.bins
    }

    pub fn into_bins(self) -> Vec<SizeBin> {
        self.bins
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SizeBin> {
        self.bins.iter()
    }

    /// Smallest center diameter (µm), if any bins exist.
    pub fn min_center(&self) -> Option<f64> {
        self.bins.first().map(|b| b.center)
    }

    /// Largest center diameter (µm), if any bins exist.
    pub fn max_center(&self) -> Option<f64> {
        self.bins.last().map(|b| b.center)
    }

    /// Smallest lower boundary (µm), if any bins exist.
    ///
    /// Bins are ordered by center, not by boundary, so this scans rather
    /// than trusting the first bin.
    pub fn min_lower(&self) -> Option<f64> {
        self.bins.iter().map(|b| b.lower).reduce(f64::min)
    }

    /// Largest upper boundary (µm), if any bins exist.
    pub fn max_upper(&self) -> Option<f64> {
        self.bins.iter().map(|b| b.upper).reduce(f64::max)
    }

    /// Total particle count over all bins.
    pub fn total_count(&self) -> f64 {
        self.bins.iter().map(|b| b.count).sum()
    }

    /// Total particle count over bins whose range intersects `[lower, upper]`.
    pub fn count_in_range(&self, lower: f64, upper: f64) -> f64 {
        self.bins
            .iter()
            .filter(|b| b.lower < upper && b.upper > lower)
            .map(|b| b.count)
            .sum()
    }
}

impl<'a> IntoIterator for &'a SizeDistribution {
    type Item = &'a SizeBin;
    type IntoIter = std::slice::Iter<'a, SizeBin>;

    fn into_iter(self) -> Self::IntoIter {
        self.bins.iter()
    }
}
