//! Total (spectrally integrated) blackbody exitance.

use super::constants::PlanckConstants;
use super::kind::Quantity;

/// Total exitance at `temperature` kelvin.
///
/// Radiant exitance is `σ_e·T⁴` in W/m², photon exitance `σ_q·T³` in
/// q/(s·m²).
pub fn total_exitance(constants: &PlanckConstants, quantity: Quantity, temperature: f64) -> f64 {
    match quantity {
        Quantity::Radiant => constants.sigma_radiant * temperature.powi(4),
        Quantity::Photon => constants.sigma_photon * temperature.powi(3),
    }
}
