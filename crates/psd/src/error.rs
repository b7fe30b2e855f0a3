use thiserror::Error;

/// Errors produced by distribution construction and estimation.
#[derive(Debug, Error, PartialEq)]
pub enum PsdError {
    /// The distribution spans zero decades (all bins share one diameter,
    /// or there is only one bin), so bins-per-decade is undefined.
    #[error("degenerate size range: {bins} bin(s) all at diameter {diameter} um")]
    DegenerateRange { diameter: f64, bins: usize },

    /// The distribution has no bins where at least one is required.
    #[error("empty size distribution")]
    Empty,

    /// A bin's boundaries do not bracket its center diameter.
    #[error(
        "bin {index}: boundaries must satisfy 0 < lower < center < upper \
         (got lower {lower}, center {center}, upper {upper})"
    )]
    InvalidBoundaries {
        index: usize,
        lower: f64,
        center: f64,
        upper: f64,
    },

    /// A bin carries a negative particle count.
    #[error("bin {index}: negative particle count {count}")]
    NegativeCount { index: usize, count: f64 },

    /// Bins are not strictly ascending by center diameter.
    #[error(
        "bins must be strictly ascending by center diameter \
         (bin {index} at {current} um follows {previous} um)"
    )]
    UnsortedBins {
        index: usize,
        previous: f64,
        current: f64,
    },

    /// A calibration row maps a channel to a non-positive counting efficiency.
    #[error("calibration channel {channel}: counting efficiency must be positive, got {efficiency}")]
    InvalidEfficiency { channel: u32, efficiency: f64 },

    /// A raw measurement channel has no calibration row.
    #[error("no calibration row for measurement channel {channel}")]
    UncalibratedChannel { channel: u32 },
}
