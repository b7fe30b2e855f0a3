//! Bridging a measurement gap with interpolated bins.
//!
//! When the two ranges do not touch, a bridge of log-spaced bins is laid
//! across the gap and filled by density interpolation between the two
//! range edges. Raw edge-bin densities are noisy (low counts near an
//! instrument's detection limit), so the interpolation anchors on a
//! local average around each edge instead of the single edge value; the
//! edge bins themselves keep their reported values.

use psd::binning::{estimate_channel_resolution, log_spaced_boundaries};
use psd::density::count_from_density;
use psd::{Provenance, PsdError, SizeBin, SizeDistribution};
use tracing::debug;

use crate::error::CombineError;

/// Parameters for gap interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapFill {
    /// How many bins, counted inward from and including each edge bin,
    /// are averaged to form the interpolation anchor on that side.
    /// Clamped to the bins available. Default 3.
    pub edge_average_window: usize,
}

impl Default for GapFill {
    fn default() -> Self {
        Self {
            edge_average_window: 3,
        }
    }
}

/// Synthesize bridge bins across the gap between `low` and `high` and
/// interpolate their densities.
///
/// `bins` is the sorted concatenation of the two inputs; the new bins
/// are inserted tagged [`Provenance::Interpolated`], with density and
/// count filled. Bins already present are never modified.
///
/// The bridge resolution is the floored average of the two inputs'
/// estimated channel resolutions; density is linear in log10 diameter
/// between the smoothed edge anchors.
///
/// # Returns
/// The number of bins created. Zero when the gap is narrower than half
/// a bridge bin, in which case no interpolation happens.
pub(crate) fn fill_gap(
    bins: &mut Vec<SizeBin>,
    low: &SizeDistribution,
    high: &SizeDistribution,
    params: &GapFill,
) -> Result<usize, CombineError> {
    let resolution =
        ((estimate_channel_resolution(low)? + estimate_channel_resolution(high)?) / 2.0).floor();

    let gap_start = low.max_upper().ok_or(PsdError::Empty)?;
    let gap_end = high.min_lower().ok_or(PsdError::Empty)?;

    let (lowers, uppers) = log_spaced_boundaries(gap_start, gap_end, resolution);
    let created = lowers.len();
    if created == 0 {
        debug!(gap_start, gap_end, resolution, "gap too narrow to bridge");
        return Ok(0);
    }

    for (&lower, &upper) in lowers.iter().zip(uppers.iter()) {
        bins.push(SizeBin {
            center: (lower + upper) / 2.0,
            lower,
            upper,
            count: 0.0,
            density: 0.0,
            provenance: Provenance::Interpolated,
        });
    }
    bins.sort_by(|a, b| a.center.total_cmp(&b.center));

    interpolate_bridge(bins, params);

    debug!(
        created,
        resolution, gap_start, gap_end, "bridged gap with interpolated bins"
    );
    Ok(created)
}

/// Fill the densities and counts of the bridge bins in `bins`.
///
/// The bridge is the contiguous run of `Interpolated` bins; the bins
/// immediately before and after it are the range edges.
fn interpolate_bridge(bins: &mut [SizeBin], params: &GapFill) {
    let is_bridge = |b: &SizeBin| b.provenance == Provenance::Interpolated;
    let Some(first) = bins.iter().position(is_bridge) else {
        return;
    };
    let Some(last) = bins.iter().rposition(is_bridge) else {
        return;
    };
    // Gap boundaries come from non-empty ranges, so edges exist on both sides
    if first == 0 || last + 1 >= bins.len() {
        return;
    }
    let edge_low = first - 1;
    let edge_high = last + 1;

    let window = params.edge_average_window.max(1);
    let anchor_low = mean_density(&bins[(edge_low + 1).saturating_sub(window)..=edge_low]);
    let anchor_high = mean_density(&bins[edge_high..(edge_high + window).min(bins.len())]);

    let x0 = bins[edge_low].center.log10();
    let x1 = bins[edge_high].center.log10();

    for bin in &mut bins[first..=last] {
        let t = (bin.center.log10() - x0) / (x1 - x0);
        bin.density = anchor_low + t * (anchor_high - anchor_low);
        bin.count = count_from_density(bin.density, bin.lower, bin.upper);
    }
}

fn mean_density(bins: &[SizeBin]) -> f64 {
    bins.iter().map(|b| b.density).sum::<f64>() / bins.len() as f64
}
