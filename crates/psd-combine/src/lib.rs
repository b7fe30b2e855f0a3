//! Combination of two particle size distributions with different,
//! overlapping measurement ranges.
//!
//! A fine instrument (small diameters, high channel resolution) and a
//! coarse instrument (large diameters) each deliver an independently
//! binned histogram. Depending on calibration their ranges either
//! overlap, touch, or leave a gap. [`combine`] reconciles the two into
//! one physically consistent distribution:
//!
//! - a gap is bridged with log-spaced bins whose densities are
//!   interpolated between smoothed range edges ([`gap`]),
//! - overlapping fine bins are folded into the coarse bins by
//!   width-weighted apportionment ([`overlap`]).
//!
//! The engine is purely computational: no I/O, no state between calls.

pub mod classify;
pub mod combiner;
pub mod error;
pub mod gap;
mod overlap;

#[cfg(test)]
mod overlap_test;

pub use classify::{classify_ranges, RangeRelation};
pub use combiner::{combine, CombineOptions};
pub use error::CombineError;
pub use gap::GapFill;
