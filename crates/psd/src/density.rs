//! Normalization between absolute counts (dN) and log-normalized
//! densities (dN/dlogD).
//!
//! Densities let bins of different widths be compared on one axis. At a
//! channel resolution of `r` bins per decade every bin has log width
//! `1/r`, so the resolution form reduces to a multiplication.

/// Density from a count at a fixed channel resolution.
///
/// `dNdlogD = dN / (1/r) = dN * r`
pub fn density_from_resolution(count: f64, channel_resolution: f64) -> f64 {
    count * channel_resolution
}

/// Density from a count with explicit bin boundaries.
///
/// `dNdlogD = dN / (log10(upper) - log10(lower))`
pub fn density_from_boundaries(count: f64, lower: f64, upper: f64) -> f64 {
    count / (upper.log10() - lower.log10())
}

/// Count from a density with explicit bin boundaries. Inverse of
/// [`density_from_boundaries`].
pub fn count_from_density(density: f64, lower: f64, upper: f64) -> f64 {
    density * (upper.log10() - lower.log10())
}

/// Densities for a whole count column at one channel resolution.
pub fn densities_from_resolution(counts: &[f64], channel_resolution: f64) -> Vec<f64> {
    counts
        .iter()
        .map(|&dn| density_from_resolution(dn, channel_resolution))
        .collect()
}

/// Densities for a count column with per-bin boundaries.
///
/// The three slices must have equal length.
pub fn densities_from_boundaries(counts: &[f64], lowers: &[f64], uppers: &[f64]) -> Vec<f64> {
    debug_assert_eq!(counts.len(), lowers.len());
    debug_assert_eq!(counts.len(), uppers.len());
    counts
        .iter()
        .zip(lowers.iter().zip(uppers.iter()))
        .map(|(&dn, (&lower, &upper))| density_from_boundaries(dn, lower, upper))
        .collect()
}
