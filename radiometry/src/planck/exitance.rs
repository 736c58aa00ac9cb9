//! Planck spectral exitance kernels.
//!
//! Each kernel evaluates one spectral variable at one temperature. Where the
//! Planck exponent `x` reaches [`EXP_LIMIT`] the exitance is returned as
//! exactly zero instead of evaluating `exp(x)`; a NaN exponent lands in the
//! same branch.
//!
//! # Overflow Guard
//!
//! The guard applies per element. On a grid spanning cold and hot
//! temperatures, the cold short-wavelength cells are zero while every other
//! cell keeps its full value, so a wide grid never contains infinities.
//!
//! # Numerical Form
//!
//! The occupancy `1 / (e^x − 1)` uses `exp_m1`, which keeps full precision in
//! the Rayleigh-Jeans limit where `x` is small.

use super::constants::{PlanckConstants, EXP_LIMIT};
use super::kind::PlanckKind;

/// `1 / (e^x - 1)`, or zero once `x` is beyond the overflow limit.
#[inline]
fn occupancy(x: f64) -> f64 {
    if x < EXP_LIMIT {
        1.0 / x.exp_m1()
    } else {
        0.0
    }
}

/// Radiant exitance density in W/(m²·µm), wavelength in µm.
pub fn radiant_wavelength(constants: &PlanckConstants, wavelength: f64, temperature: f64) -> f64 {
    let c = &constants.wavelength;
    let x = c.c2 / (wavelength * temperature);
    c.c1_radiant * occupancy(x) / wavelength.powi(5)
}

/// Photon exitance density in q/(s·m²·µm), wavelength in µm.
pub fn photon_wavelength(constants: &PlanckConstants, wavelength: f64, temperature: f64) -> f64 {
    let c = &constants.wavelength;
    let x = c.c2 / (wavelength * temperature);
    c.c1_photon * occupancy(x) / wavelength.powi(4)
}

/// Radiant exitance density in W/(m²·cm⁻¹), wavenumber in cm⁻¹.
pub fn radiant_wavenumber(constants: &PlanckConstants, wavenumber: f64, temperature: f64) -> f64 {
    let c = &constants.wavenumber;
    let x = c.c2 * wavenumber / temperature;
    c.c1_radiant * wavenumber.powi(3) * occupancy(x)
}

/// Photon exitance density in q/(s·m²·cm⁻¹), wavenumber in cm⁻¹.
pub fn photon_wavenumber(constants: &PlanckConstants, wavenumber: f64, temperature: f64) -> f64 {
    let c = &constants.wavenumber;
    let x = c.c2 * wavenumber / temperature;
    c.c1_photon * wavenumber.powi(2) * occupancy(x)
}

/// Radiant exitance density in W/(m²·Hz), frequency in Hz.
pub fn radiant_frequency(constants: &PlanckConstants, frequency: f64, temperature: f64) -> f64 {
    let c = &constants.frequency;
    let x = c.c2 * frequency / temperature;
    c.c1_radiant * frequency.powi(3) * occupancy(x)
}

/// Photon exitance density in q/(s·m²·Hz), frequency in Hz.
pub fn photon_frequency(constants: &PlanckConstants, frequency: f64, temperature: f64) -> f64 {
    let c = &constants.frequency;
    let x = c.c2 * frequency / temperature;
    c.c1_photon * frequency.powi(2) * occupancy(x)
}

/// Spectral exitance of `kind` at a single spectral value and temperature.
///
/// # Arguments
/// * `constants` - Radiation constants table
/// * `kind` - Quantity and spectral domain to evaluate
/// * `spectral` - Spectral value in the unit of `kind`'s domain
/// * `temperature` - Temperature in kelvin
pub fn exitance(constants: &PlanckConstants, kind: PlanckKind, spectral: f64, temperature: f64) -> f64 {
    match kind {
        PlanckKind::RadiantWavelength => radiant_wavelength(constants, spectral, temperature),
        PlanckKind::PhotonWavelength => photon_wavelength(constants, spectral, temperature),
        PlanckKind::RadiantWavenumber => radiant_wavenumber(constants, spectral, temperature),
        PlanckKind::PhotonWavenumber => photon_wavenumber(constants, spectral, temperature),
        PlanckKind::RadiantFrequency => radiant_frequency(constants, spectral, temperature),
        PlanckKind::PhotonFrequency => photon_frequency(constants, spectral, temperature),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_room_temperature_thermal_infrared() {
        let c = PlanckConstants::global();
        let value = radiant_wavelength(&c, 10.0, 300.0);
        assert_relative_eq!(value, 31.177_270_203_730_35, max_relative = 1e-10);
    }

    #[test]
    fn test_overflow_guard_returns_zero() {
        let c = PlanckConstants::global();
        // x = c2 / (0.1 * 1) is about 1.4e5, far beyond the exp limit
        for kind in PlanckKind::ALL {
            let spectral = match kind.domain() {
                crate::planck::SpectralDomain::Wavelength => 0.1,
                crate::planck::SpectralDomain::Wavenumber => 1.0e5,
                crate::planck::SpectralDomain::Frequency => 3.0e15,
            };
            assert_eq!(exitance(&c, kind, spectral, 1.0), 0.0, "{kind}");
        }
    }

    #[test]
    fn test_nan_exponent_is_guarded() {
        let c = PlanckConstants::global();
        assert_eq!(radiant_wavelength(&c, 1.0, f64::NAN), 0.0);
    }

    #[test]
    fn test_non_negative_over_wide_range() {
        let c = PlanckConstants::global();
        for kind in PlanckKind::ALL {
            for t in [1.0, 77.0, 300.0, 5800.0] {
                for s in [1e-3, 0.5, 10.0, 1e3, 1e12] {
                    let v = exitance(&c, kind, s, t);
                    assert!(v >= 0.0 && v.is_finite(), "{kind} at {s}, {t}K gave {v}");
                }
            }
        }
    }

    #[test]
    fn test_peak_is_local_maximum() {
        let c = PlanckConstants::global();
        let t = 1000.0;
        for kind in PlanckKind::ALL {
            let peak = kind.peak(&c, t);
            let at_peak = exitance(&c, kind, peak, t);
            assert!(at_peak > exitance(&c, kind, peak * 0.99, t), "{kind}");
            assert!(at_peak > exitance(&c, kind, peak * 1.01, t), "{kind}");
        }
    }

    #[test]
    fn test_photon_radiant_ratio_is_photon_energy() {
        let c = PlanckConstants::global();
        let wavelength = 2.0;
        let photon_energy = crate::planck::SI::PLANCK_CONSTANT * crate::planck::SI::SPEED_OF_LIGHT
            / (wavelength * 1e-6);
        let radiant = radiant_wavelength(&c, wavelength, 1500.0);
        let photon = photon_wavelength(&c, wavelength, 1500.0);
        assert_relative_eq!(radiant / photon, photon_energy, max_relative = 1e-12);
    }
}
