//! Temperature derivatives of the Planck spectral exitance.
//!
//! With `x` the Planck exponent, `dM/dT = M · x·e^x / (T·(e^x − 1))` for every
//! kind. These kernels do not apply the overflow guard used by the exitance
//! kernels. Where `exp(x)` overflows the result is NaN, not zero.
//!
//! # Physical Framework
//!
//! The derivative is the exitance scaled by a single dimensionless factor, so
//! every kind shares one helper and differs only in the exitance term. The
//! sign is always positive: a hotter blackbody is brighter at every spectral
//! position.

use super::constants::PlanckConstants;
use super::kind::PlanckKind;

/// `x·e^x / (T·(e^x − 1))` and `1 / (e^x − 1)` for the exponent `x`.
#[inline]
fn factors(x: f64, temperature: f64) -> (f64, f64) {
    let ex = x.exp();
    let occupancy = 1.0 / (ex - 1.0);
    (x * ex * occupancy / temperature, occupancy)
}

/// dM/dT for radiant exitance over wavelength, W/(m²·µm·K).
pub fn radiant_wavelength(constants: &PlanckConstants, wavelength: f64, temperature: f64) -> f64 {
    let c = &constants.wavelength;
    let x = c.c2 / (wavelength * temperature);
    let (factor, occupancy) = factors(x, temperature);
    factor * c.c1_radiant * occupancy / wavelength.powi(5)
}

/// dM/dT for photon exitance over wavelength, q/(s·m²·µm·K).
pub fn photon_wavelength(constants: &PlanckConstants, wavelength: f64, temperature: f64) -> f64 {
    let c = &constants.wavelength;
    let x = c.c2 / (wavelength * temperature);
    let (factor, occupancy) = factors(x, temperature);
    factor * c.c1_photon * occupancy / wavelength.powi(4)
}

/// dM/dT for radiant exitance over wavenumber, W/(m²·cm⁻¹·K).
pub fn radiant_wavenumber(constants: &PlanckConstants, wavenumber: f64, temperature: f64) -> f64 {
    let c = &constants.wavenumber;
    let x = c.c2 * wavenumber / temperature;
    let (factor, occupancy) = factors(x, temperature);
    factor * c.c1_radiant * wavenumber.powi(3) * occupancy
}

/// dM/dT for photon exitance over wavenumber, q/(s·m²·cm⁻¹·K).
pub fn photon_wavenumber(constants: &PlanckConstants, wavenumber: f64, temperature: f64) -> f64 {
    let c = &constants.wavenumber;
    let x = c.c2 * wavenumber / temperature;
    let (factor, occupancy) = factors(x, temperature);
    factor * c.c1_photon * wavenumber.powi(2) * occupancy
}

/// dM/dT for radiant exitance over frequency, W/(m²·Hz·K).
pub fn radiant_frequency(constants: &PlanckConstants, frequency: f64, temperature: f64) -> f64 {
    let c = &constants.frequency;
    let x = c.c2 * frequency / temperature;
    let (factor, occupancy) = factors(x, temperature);
    factor * c.c1_radiant * frequency.powi(3) * occupancy
}

/// dM/dT for photon exitance over frequency, q/(s·m²·Hz·K).
pub fn photon_frequency(constants: &PlanckConstants, frequency: f64, temperature: f64) -> f64 {
    let c = &constants.frequency;
    let x = c.c2 * frequency / temperature;
    let (factor, occupancy) = factors(x, temperature);
    factor * c.c1_photon * frequency.powi(2) * occupancy
}

/// Temperature derivative of the spectral exitance of `kind`.
pub fn derivative(constants: &PlanckConstants, kind: PlanckKind, spectral: f64, temperature: f64) -> f64 {
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
    use crate::planck::exitance::exitance;
    use approx::assert_relative_eq;

    #[test]
    fn test_matches_central_difference() {
        let c = PlanckConstants::global();
        let t = 1000.0;
        let dt = 0.01;
        for kind in PlanckKind::ALL {
            let s = kind.peak(&c, t);
            let numeric = (exitance(&c, kind, s, t + dt) - exitance(&c, kind, s, t - dt)) / (2.0 * dt);
            assert_relative_eq!(derivative(&c, kind, s, t), numeric, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_positive_in_normal_range() {
        let c = PlanckConstants::global();
        for t in [200.0, 300.0, 6000.0] {
            assert!(radiant_wavelength(&c, 4.0, t) > 0.0);
            assert!(photon_wavenumber(&c, 1000.0, t) > 0.0);
        }
    }

    #[test]
    fn test_overflow_is_not_guarded() {
        let c = PlanckConstants::global();
        // exitance is clamped to zero here, the derivative is not
        assert_eq!(exitance(&c, PlanckKind::RadiantWavelength, 0.1, 1.0), 0.0);
        assert!(radiant_wavelength(&c, 0.1, 1.0).is_nan());
        assert!(derivative(&c, PlanckKind::PhotonFrequency, 3.0e15, 1.0).is_nan());
    }
}
