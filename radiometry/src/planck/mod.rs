//! Blackbody spectral exitance, its temperature derivative and total exitance.
//!
//! The kernels in [`exitance`] and [`derivative`] evaluate one spectral value
//! at one temperature; [`Planck`] broadcasts them over sample sequences and
//! [`planck`] / [`dplanck`] dispatch on selector strings.

pub mod constants;
pub mod conversion;
pub mod derivative;
pub mod dispatch;
pub mod exitance;
pub mod grid;
pub mod kind;
pub mod stefan_boltzmann;

pub use constants::{
    ConstantsError, DisplacementRoots, DomainConstants, PeakConstants, PlanckConstants, EXP_LIMIT,
    SI, ZETA_3,
};
pub use conversion::convert_spectral_density;
pub use dispatch::{dplanck, planck, stefan_boltzmann, Planck, SENTINEL};
pub use grid::{EvalOptions, Exitance, InputError, SampleInput};
pub use kind::{PlanckKind, Quantity, SelectorError, SpectralDomain};
