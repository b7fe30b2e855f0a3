//! Particle size distribution (PSD) data model and pure helpers.
//!
//! A size distribution is a histogram of particle counts over diameter
//! bins on a logarithmic axis. This crate provides the bin/distribution
//! types, bin-boundary geometry, channel-resolution estimation, the
//! dN ↔ dN/dlogD normalization primitives, calibration application for
//! raw instrument channels, and closed-form lognormal model densities.
//!
//! All diameters are in micrometres unless a function says otherwise.

pub mod binning;
pub mod bins;
pub mod calibration;
pub mod density;
pub mod distribution;
pub mod error;
pub mod metadata;
pub mod models;

#[cfg(test)]
mod density_test;

pub use bins::{Provenance, SizeBin};
pub use calibration::{apply_calibration, CalibrationEntry};
pub use distribution::SizeDistribution;
pub use error::PsdError;
pub use metadata::{Measurement, MeasurementInfo};

// Re-export the binning and normalization primitives
pub use binning::{
    bin_boundaries, bin_boundaries_for, estimate_channel_resolution, log_spaced_boundaries,
};
pub use density::{count_from_density, density_from_boundaries, density_from_resolution};
pub use models::{bilognormal, lognormal};
