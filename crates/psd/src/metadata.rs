//! Measurement identity and parameters.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::bins::Provenance;
use crate::calibration::{apply_calibration, CalibrationEntry};
use crate::distribution::SizeDistribution;
use crate::error::PsdError;

/// Identity and acquisition parameters of one size-distribution
/// measurement, as recorded by the upstream store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementInfo {
    /// Unique identifier of the measurement.
    pub id: Uuid,

    /// Device name as recorded upstream, e.g. "smps2" or "aps3".
    pub device: String,

    /// Channel resolution (bins per decade) the instrument was run at.
    pub channel_resolution: f64,
}

impl MeasurementInfo {
    pub fn new(device: &str, channel_resolution: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            device: device.to_string(),
            channel_resolution,
        }
    }
}

/// A calibrated measurement: parameters plus the distribution built
/// from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub info: MeasurementInfo,
    pub distribution: SizeDistribution,
}

impl Measurement {
    /// Build a measurement from raw per-channel counts and the
    /// instrument's calibration table.
    ///
    /// # Errors
    /// Propagates calibration and construction errors from
    /// [`apply_calibration`].
    pub fn from_raw_counts(
        info: MeasurementInfo,
        provenance: Provenance,
        raw_counts: &[(u32, f64)],
        table: &[CalibrationEntry],
    ) -> Result<Self, PsdError> {
        let distribution =
            apply_calibration(raw_counts, table, info.channel_resolution, provenance)?;
        Ok(Self { info, distribution })
    }
}
