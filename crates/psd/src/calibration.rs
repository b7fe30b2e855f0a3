//! Application of instrument calibration tables to raw channel counts.
//!
//! Instruments report counts per measurement channel. A calibration
//! table maps each channel to a diameter and a counting efficiency;
//! applying it yields a diameter-calibrated, efficiency-corrected
//! [`SizeDistribution`]. How the raw counts and the table are acquired
//! is out of scope here.

use serde::{Deserialize, Serialize};

use crate::binning::bin_boundaries;
use crate::bins::{Provenance, SizeBin};
use crate::density::density_from_resolution;
use crate::distribution::SizeDistribution;
use crate::error::PsdError;

/// One row of an instrument's size-calibration table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationEntry {
    /// Measurement channel number.
    pub channel: u32,

    /// Diameter assigned to the channel (µm). Zero marks an unused
    /// channel; such rows are skipped.
    pub diameter: f64,

    /// Counting efficiency of the channel. Raw counts are divided by
    /// this value.
    pub efficiency: f64,
}

impl CalibrationEntry {
    /// A row with the diameter already in micrometres (coarse
    /// instruments report µm directly).
    pub fn micrometres(channel: u32, diameter: f64, efficiency: f64) -> Self {
        Self {
            channel,
            diameter,
            efficiency,
        }
    }

    /// A row with the diameter in nanometres, as fine instruments
    /// report it. Converted to µm on construction.
    pub fn nanometres(channel: u32, diameter_nm: f64, efficiency: f64) -> Self {
        Self {
            channel,
            diameter: diameter_nm / 1000.0,
            efficiency,
        }
    }
}

/// Apply a calibration table to raw per-channel counts.
///
/// For each `(channel, raw_count)` pair the matching table row supplies
/// the diameter; boundaries come from the channel resolution, the count
/// is efficiency-corrected (`dn = raw / efficiency`) and the density is
/// the resolution-normalized count. Channels whose calibration diameter
/// is zero are skipped, matching how upstream tables mark unused rows.
/// Output bins are sorted ascending by diameter.
///
/// # Arguments
/// * `raw_counts` - `(channel, raw_count)` pairs as reported
/// * `table` - Calibration rows for this instrument and mode
/// * `channel_resolution` - Bins per decade of the instrument
/// * `provenance` - Source tag for the produced bins
///
/// # Errors
///
/// * [`PsdError::UncalibratedChannel`] if a channel has no table row
/// * [`PsdError::InvalidEfficiency`] if a used row has efficiency <= 0
/// * construction errors from [`SizeDistribution::new`]
pub fn apply_calibration(
    raw_counts: &[(u32, f64)],
    table: &[CalibrationEntry],
    channel_resolution: f64,
    provenance: Provenance,
) -> Result<SizeDistribution, PsdError> {
    let mut bins = Vec::with_capacity(raw_counts.len());

    for &(channel, raw) in raw_counts {
        let entry = table
            .iter()
            .find(|e| e.channel == channel)
            .ok_or(PsdError::UncalibratedChannel { channel })?;

        if entry.diameter == 0.0 {
            continue;
        }
        if entry.efficiency <= 0.0 {
            return Err(PsdError::InvalidEfficiency {
                channel,
                efficiency: entry.efficiency,
            });
        }

        let (lower, upper) = bin_boundaries(entry.diameter, channel_resolution);
        let count = raw / entry.efficiency;
        bins.push(SizeBin {
            center: entry.diameter,
            lower,
            upper,
            count,
            density: density_from_resolution(count, channel_resolution),
            provenance,
        });
    }

    bins.sort_by(|a, b| a.center.total_cmp(&b.center));
    SizeDistribution::new(bins)
}
