//! Bin-boundary geometry on the logarithmic diameter axis.
//!
//! A channel resolution of `r` bins per decade means each bin spans
//! `1/r` decades, split symmetrically in log space around its center.

use crate::distribution::SizeDistribution;
use crate::error::PsdError;

/// Lower and upper boundaries of a bin centered at `center` with
/// `channel_resolution` bins per decade.
///
/// Derived from `dNdlogD = dN * channel_resolution`:
///
/// ```text
/// lower = 2*center / (10^( 1/r) + 1)
/// upper = 2*center / (10^(-1/r) + 1)
/// ```
///
/// This guarantees a constant log width, `upper/lower = 10^(1/r)`, and
/// `lower < center < upper` for any positive center and resolution.
/// Undefined for non-positive inputs; callers must guard.
///
/// # Arguments
/// * `center` - Center diameter in µm
/// * `channel_resolution` - Bins per decade
///
/// # Returns
/// `(lower, upper)` boundaries in µm
pub fn bin_boundaries(center: f64, channel_resolution: f64) -> (f64, f64) {
    let lower = 2.0 * center / (10.0_f64.powf(1.0 / channel_resolution) + 1.0);
    let upper = 2.0 * center / (10.0_f64.powf(-1.0 / channel_resolution) + 1.0);
    (lower, upper)
}

/// Boundaries for a whole column of center diameters at one resolution.
///
/// # Returns
/// `(lowers, uppers)` in the same order as `centers`
pub fn bin_boundaries_for(centers: &[f64], channel_resolution: f64) -> (Vec<f64>, Vec<f64>) {
    let mut lowers = Vec::with_capacity(centers.len());
    let mut uppers = Vec::with_capacity(centers.len());
    for &center in centers {
        let (lower, upper) = bin_boundaries(center, channel_resolution);
        lowers.push(lower);
        uppers.push(upper);
    }
    (lowers, uppers)
}

/// Average channel resolution (bins per decade) of a distribution,
/// counted over the log span of its center diameters.
///
/// # Errors
///
/// * [`PsdError::Empty`] if the distribution has no bins
/// * [`PsdError::DegenerateRange`] if the log span is zero (a single
///   bin), which would divide by zero
pub fn estimate_channel_resolution(distribution: &SizeDistribution) -> Result<f64, PsdError> {
    let min = distribution.min_center().ok_or(PsdError::Empty)?;
    let max = distribution.max_center().ok_or(PsdError::Empty)?;
    let span = max.log10() - min.log10();
    if span <= 0.0 {
        return Err(PsdError::DegenerateRange {
            diameter: min,
            bins: distribution.len(),
        });
    }
    Ok(distribution.len() as f64 / span)
}

/// Log-evenly spaced bin boundaries covering `[start, end]` at
/// `bins_per_decade` resolution.
///
/// The number of bins is `round(bins_per_decade * decades)`. Lower
/// edges are evenly spaced in log space with `end` excluded; each upper
/// edge is the next lower edge, with the last pinned exactly to `end`.
/// Returns empty vectors when the interval is narrower than half a bin.
///
/// # Arguments
/// * `start` - Left edge of the interval (µm)
/// * `end` - Right edge of the interval (µm), `end > start > 0`
/// * `bins_per_decade` - Grid resolution
///
/// # Returns
/// `(lowers, uppers)`, contiguous and covering `[start, end]`
pub fn log_spaced_boundaries(start: f64, end: f64, bins_per_decade: f64) -> (Vec<f64>, Vec<f64>) {
    let log_start = start.log10();
    let log_end = end.log10();
    let decades = log_end - log_start;
    let bin_count = (bins_per_decade * decades).round() as usize;
    if bin_count == 0 {
        return (Vec::new(), Vec::new());
    }

    let step = decades / bin_count as f64;
    let lowers: Vec<f64> = (0..bin_count)
        .map(|i| 10.0_f64.powf(log_start + step * i as f64))
        .collect();

    let mut uppers: Vec<f64> = lowers[1..].to_vec();
    uppers.push(end);
    (lowers, uppers)
}
