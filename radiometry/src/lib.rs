//! Blackbody radiometry
//!
//! This crate evaluates Planck's law for spectral exitance in radiant (energy)
//! and photon-rate units over wavelength, wavenumber and frequency, together
//! with its temperature derivative, the Stefan-Boltzmann total exitance and
//! the CIE chromaticity of sampled spectra.

pub mod algo;
pub mod color;
pub mod planck;
pub mod units;

// Re-exports for easier access
pub use algo::trapezoid::trap_integrate;
pub use color::{chromaticity, spectral_locus, Chromaticity, TristimulusCurves};
pub use planck::{
    dplanck, planck, stefan_boltzmann, EvalOptions, Exitance, Planck, PlanckConstants, PlanckKind,
    Quantity, SpectralDomain,
};
