//! Closed-form model densities for aerosol size distributions.
//!
//! Evaluated in the dN/dlogD convention (base-10 logarithm), following
//! Limpert, Stahel & Abbt (2001), "Log-normal distributions across the
//! sciences: Keys and clues", BioScience 51(5): 341-352.

use std::f64::consts::PI;

/// Lognormal number density dN/dlogD at diameter `x`.
///
/// # Arguments
/// * `x` - Diameter at which to evaluate (µm)
/// * `mu` - Geometric median diameter (µm)
/// * `sigma` - Geometric standard deviation, natural scale (> 1)
/// * `total` - Total particle number of the mode
///
/// # Returns
/// dN/dlogD at `x`; integrating over log10 diameter recovers `total`
pub fn lognormal(x: f64, mu: f64, sigma: f64, total: f64) -> f64 {
    let log_sigma = sigma.log10();
    (total / (log_sigma * (2.0 * PI).sqrt()))
        * (-(x / mu).log10().powi(2) / (2.0 * log_sigma * log_sigma)).exp()
}

/// Bilognormal number density: the superposition of two lognormal modes.
///
/// # Arguments
/// * `x` - Diameter at which to evaluate (µm)
/// * `mu1`, `sigma1`, `n1` - Median, geometric std dev and total of mode 1
/// * `mu2`, `sigma2`, `n2` - Median, geometric std dev and total of mode 2
pub fn bilognormal(x: f64, mu1: f64, sigma1: f64, n1: f64, mu2: f64, sigma2: f64, n2: f64) -> f64 {
    lognormal(x, mu1, sigma1, n1) + lognormal(x, mu2, sigma2, n2)
}
