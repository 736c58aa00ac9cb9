//! Conversion of spectral densities between spectral domains.
//!
//! A density sampled per unit of one spectral variable is re-expressed per
//! unit of another by multiplying with the Jacobian `|d(in)/d(out)|`. The
//! conversion factors assume the domain units used throughout the crate:
//! wavelength in µm, wavenumber in cm⁻¹ and frequency in Hz.

use super::constants::SI;
use super::kind::SpectralDomain;

/// Convert a spectral axis and a density sampled on it to another domain.
///
/// The converted axis keeps the input order, so a wavelength grid ascending
/// in µm becomes a descending wavenumber or frequency grid.
///
/// # Arguments
/// * `from` - Domain of `spectral` and of the density's denominator
/// * `to` - Target domain
/// * `spectral` - Spectral axis values in `from`'s unit
/// * `density` - Density samples paired with `spectral`
///
/// # Returns
/// `(axis, density)` in the target domain. Pairs beyond the shorter input
/// are dropped.
pub fn convert_spectral_density(
    from: SpectralDomain,
    to: SpectralDomain,
    spectral: &[f64],
    density: &[f64],
) -> (Vec<f64>, Vec<f64>) {
    let c = SI::SPEED_OF_LIGHT;
    spectral
        .iter()
        .zip(density)
        .map(|(&s, &d)| match (from, to) {
            (SpectralDomain::Wavelength, SpectralDomain::Wavenumber)
            | (SpectralDomain::Wavenumber, SpectralDomain::Wavelength) => (1.0e4 / s, d * s * s / 1.0e4),
            (SpectralDomain::Wavenumber, SpectralDomain::Frequency) => (100.0 * c * s, d / (100.0 * c)),
            (SpectralDomain::Frequency, SpectralDomain::Wavenumber) => (s / (100.0 * c), d * 100.0 * c),
            (SpectralDomain::Wavelength, SpectralDomain::Frequency)
            | (SpectralDomain::Frequency, SpectralDomain::Wavelength) => {
                (1.0e6 * c / s, d * s * s / (1.0e6 * c))
            }
            _ => (s, d),
        })
        .unzip()
}
