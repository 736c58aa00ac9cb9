//! Physical and derived radiation constants for the Planck evaluators.
//!
//! Builds the process-wide table of radiation constants that every exitance,
//! derivative and Stefan-Boltzmann evaluation reads from.
//!
//! # Physical Framework
//!
//! Fundamental constants use the exact SI values of the 2019 redefinition
//! (CODATA 2018):
//! - **h**: Planck constant, J·s
//! - **c**: speed of light in vacuum, m/s
//! - **k**: Boltzmann constant, J/K
//!
//! Spectral exitance takes one of two forms, with the same `c2` per domain:
//!
//! ```text
//! wavelength:            M = c1 / (λ^p · (e^(c2/(λT)) − 1))     p = 5 radiant, 4 photon
//! wavenumber, frequency: M = c1 · s^p / (e^(c2·s/T) − 1)        p = 3 radiant, 2 photon
//! ```
//!
//! # Units
//!
//! | domain | spectral unit | radiant exitance | photon exitance |
//! |---|---|---|---|
//! | wavelength | µm | W/m²/µm | q/s/m²/µm |
//! | wavenumber | cm⁻¹ | W/m²/cm⁻¹ | q/s/m²/cm⁻¹ |
//! | frequency | Hz | W/m²/Hz | q/s/m²/Hz |
//!
//! The domains differ only by powers of ten in `c1` and `c2`.
//!
//! # Derived Constants
//!
//! - **First and second radiation constants** for each domain and quantity.
//! - **Stefan-Boltzmann constants** for radiant (`σ_e T⁴`) and photon-rate
//!   (`σ_q T³`) broadband exitance. `σ_q` carries `ζ(3)`.
//! - **Displacement roots** `a_n`, the positive solutions of
//!   `n·(1 − e^(−x)) − x = 0` for n = 2..5, found by bisection.
//! - **Peak constants** built from the roots, giving the Wien-type location
//!   of the spectral maximum for each kind.
//!
//! # Overflow Limit
//!
//! [`EXP_LIMIT`] is the largest exponent argument for which `e^x` stays finite
//! in f64. The exitance kernels return zero beyond it.
//!
//! # Construction
//!
//! Constructing the table cannot fail for the fixed brackets used here. A root
//! outside its bracket means the constants themselves are wrong, so the
//! process-wide table panics rather than carrying on with bad values.

use std::fmt;
use std::f64::consts::PI;
use std::sync::Arc;

use log::debug;
use once_cell::sync::Lazy;
use serde::Serialize;
use thiserror::Error;

use super::kind::{PlanckKind, Quantity, SpectralDomain};
use crate::algo::roots::{bisect, RootError, DEFAULT_TOLERANCE};

/// Fundamental physical constants in SI units.
pub struct SI {}

impl SI {
    /// Planck constant, J·s
    pub const PLANCK_CONSTANT: f64 = 6.626_070_15e-34;

    /// Speed of light in vacuum, m/s
    pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

    /// Boltzmann constant, J/K
    pub const BOLTZMANN_CONSTANT: f64 = 1.380_649e-23;

    /// Elementary charge, C
    pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

    /// Stefan-Boltzmann constant, W/(m²·K⁴)
    pub const STEFAN_BOLTZMANN: f64 = 5.670_374_419e-8;
}

/// Apéry's constant ζ(3)
pub const ZETA_3: f64 = 1.202_056_903_159_594_2;

/// Largest exponent evaluated before `exp` would overflow a double.
pub const EXP_LIMIT: f64 = 709.7;

/// Brackets for the displacement roots a2..a5, indexed by n - 2.
const DISPLACEMENT_BRACKETS: [(u32, f64, f64); 4] =
    [(2, 1.0, 2.0), (3, 2.0, 3.0), (4, 3.5, 4.0), (5, 4.5, 5.0)];

/// Errors raised while deriving the constants table
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConstantsError {
    #[error("Displacement root a{n} not found: {source}")]
    DisplacementRoot {
        n: u32,
        #[source]
        source: RootError,
    },
}

/// First and second radiation constants for one spectral domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DomainConstants {
    /// First radiation constant for radiant exitance
    pub c1_radiant: f64,

    /// First radiation constant for photon-rate exitance
    pub c1_photon: f64,

    /// Second radiation constant; the Planck exponent is built from it
    pub c2: f64,
}

/// Positive roots of `n·(1 − e^(−x)) − x = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplacementRoots {
    pub a2: f64,
    pub a3: f64,
    pub a4: f64,
    pub a5: f64,
}

/// Peak-location constants, one per evaluator kind.
///
/// Wavelength entries are in µm·K (peak = w / T); wavenumber entries in
/// cm⁻¹/K and frequency entries in Hz/K (peak = w · T).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeakConstants {
    pub radiant_wavelength: f64,
    pub photon_wavelength: f64,
    pub radiant_wavenumber: f64,
    pub photon_wavenumber: f64,
    pub radiant_frequency: f64,
    pub photon_frequency: f64,
}

/// Derived constants shared by every Planck evaluation.
///
/// Immutable once built. Share it through [`Arc`]; [`PlanckConstants::global`]
/// hands out the process-wide instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanckConstants {
    /// Wavelength in metres; reference values only
    pub metre: DomainConstants,

    /// Wavelength in micrometres
    pub wavelength: DomainConstants,

    /// Wavenumber in cm⁻¹
    pub wavenumber: DomainConstants,

    /// Frequency in Hz
    pub frequency: DomainConstants,

    /// Radiant Stefan-Boltzmann constant, W/(m²·K⁴)
    pub sigma_radiant: f64,

    /// Photon-rate Stefan-Boltzmann constant, q/(s·m²·K³)
    pub sigma_photon: f64,

    pub roots: DisplacementRoots,

    pub peaks: PeakConstants,
}

static GLOBAL: Lazy<Arc<PlanckConstants>> = Lazy::new(|| {
    Arc::new(
        PlanckConstants::try_new()
            .expect("Planck displacement roots must lie inside their fixed brackets"),
    )
});

/// The function whose positive root is the displacement constant `a_n`.
pub fn displacement_equation(x: f64, n: f64) -> f64 {
    n * (1.0 - (-x).exp()) - x
}

impl PlanckConstants {
    /// Derive the full table from the fundamental constants.
    ///
    /// # Errors
    /// Returns `ConstantsError::DisplacementRoot` if any displacement root
    /// cannot be bracketed, which indicates a defect in the constants.
    pub fn try_new() -> Result<Self, ConstantsError> {
        let h = SI::PLANCK_CONSTANT;
        let c = SI::SPEED_OF_LIGHT;
        let k = SI::BOLTZMANN_CONSTANT;

        let c1em = 2.0 * PI * h * c * c;
        let c1qm = 2.0 * PI * c;
        let c2m = h * c / k;

        // Powers of ten: one for each power of the spectral variable in the
        // numerator, minus one for the density.
        let metre = DomainConstants {
            c1_radiant: c1em,
            c1_photon: c1qm,
            c2: c2m,
        };
        let wavelength = DomainConstants {
            c1_radiant: c1em * 1.0e6_f64.powi(4),
            c1_photon: c1qm * 1.0e6_f64.powi(3),
            c2: c2m * 1.0e6,
        };
        let wavenumber = DomainConstants {
            c1_radiant: c1em * 100.0_f64.powi(3) * 100.0,
            c1_photon: c1qm * 100.0_f64.powi(2) * 100.0,
            c2: c2m * 1.0e2,
        };
        let frequency = DomainConstants {
            c1_radiant: 2.0 * PI * h / (c * c),
            c1_photon: 2.0 * PI / (c * c),
            c2: h / k,
        };

        let sigma_radiant = SI::STEFAN_BOLTZMANN;
        let sigma_photon = 4.0 * PI * ZETA_3 * k.powi(3) / (h.powi(3) * c * c);

        let mut found = [0.0; 4];
        for (slot, &(n, lower, upper)) in found.iter_mut().zip(DISPLACEMENT_BRACKETS.iter()) {
            let root = bisect(
                |x| displacement_equation(x, n as f64),
                lower,
                upper,
                DEFAULT_TOLERANCE,
            )
            .map_err(|source| ConstantsError::DisplacementRoot { n, source })?;
            debug!(
                "Displacement root a{} = {:.14e} after {} iterations",
                n, root.x, root.iterations
            );
            *slot = root.x;
        }
        let roots = DisplacementRoots {
            a2: found[0],
            a3: found[1],
            a4: found[2],
            a5: found[3],
        };

        let peaks = PeakConstants {
            radiant_wavelength: 1e6 * h * c / (k * roots.a5),
            photon_wavelength: 1e6 * h * c / (k * roots.a4),
            radiant_wavenumber: roots.a3 * k / (100.0 * h * c),
            photon_wavenumber: roots.a2 * k / (100.0 * h * c),
            radiant_frequency: roots.a3 * k / h,
            photon_frequency: roots.a2 * k / h,
        };

        Ok(Self {
            metre,
            wavelength,
            wavenumber,
            frequency,
            sigma_radiant,
            sigma_photon,
            roots,
            peaks,
        })
    }

    /// Shared process-wide table, derived on first use.
    ///
    /// # Panics
    /// On first use, if a displacement root cannot be found.
    pub fn global() -> Arc<PlanckConstants> {
        Arc::clone(&GLOBAL)
    }

    /// Radiation constants for a spectral domain
    pub fn domain(&self, domain: SpectralDomain) -> &DomainConstants {
        match domain {
            SpectralDomain::Wavelength => &self.wavelength,
            SpectralDomain::Wavenumber => &self.wavenumber,
            SpectralDomain::Frequency => &self.frequency,
        }
    }

    /// First radiation constant for an evaluator kind
    pub fn c1(&self, kind: PlanckKind) -> f64 {
        let domain = self.domain(kind.domain());
        match kind.quantity() {
            Quantity::Radiant => domain.c1_radiant,
            Quantity::Photon => domain.c1_photon,
        }
    }

    /// Second radiation constant for an evaluator kind
    pub fn c2(&self, kind: PlanckKind) -> f64 {
        self.domain(kind.domain()).c2
    }

    /// Stefan-Boltzmann constant for a quantity
    pub fn sigma(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::Radiant => self.sigma_radiant,
            Quantity::Photon => self.sigma_photon,
        }
    }

    /// Peak-location constant for an evaluator kind
    pub fn displacement(&self, kind: PlanckKind) -> f64 {
        match kind {
            PlanckKind::RadiantWavelength => self.peaks.radiant_wavelength,
            PlanckKind::PhotonWavelength => self.peaks.photon_wavelength,
            PlanckKind::RadiantWavenumber => self.peaks.radiant_wavenumber,
            PlanckKind::PhotonWavenumber => self.peaks.photon_wavenumber,
            PlanckKind::RadiantFrequency => self.peaks.radiant_frequency,
            PlanckKind::PhotonFrequency => self.peaks.photon_frequency,
        }
    }
}

impl fmt::Display for PlanckConstants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "h = {:.14e} Js", SI::PLANCK_CONSTANT)?;
        writeln!(f, "c = {:.14e} m/s", SI::SPEED_OF_LIGHT)?;
        writeln!(f, "k = {:.14e} J/K", SI::BOLTZMANN_CONSTANT)?;
        writeln!(f, "q = {:.14e} C", SI::ELEMENTARY_CHARGE)?;
        writeln!(f)?;
        writeln!(f, "pi = {:.14e}", PI)?;
        writeln!(f, "e = {:.14e}", std::f64::consts::E)?;
        writeln!(f, "zeta(3) = {:.14e}", ZETA_3)?;
        let roots = [
            (2, self.roots.a2),
            (3, self.roots.a3),
            (4, self.roots.a4),
            (5, self.roots.a5),
        ];
        for (n, a) in roots {
            writeln!(f, "a{n} = {a:.14e}, root of {n}(1-exp(-x))-x")?;
        }
        writeln!(f)?;
        writeln!(f, "sigmae = {:.14e} W/(m^2 K^4)", self.sigma_radiant)?;
        writeln!(f, "sigmaq = {:.14e} q/(s m^2 K^3)", self.sigma_photon)?;
        writeln!(f)?;

        let domains = [
            ("m", &self.metre),
            ("um", &self.wavelength),
            ("cm-1", &self.wavenumber),
            ("Hz", &self.frequency),
        ];
        for (unit, domain) in domains {
            writeln!(f, "c1 radiant = {:.14e} with spectral unit {unit}", domain.c1_radiant)?;
            writeln!(f, "c1 photon  = {:.14e} with spectral unit {unit}", domain.c1_photon)?;
            writeln!(f, "c2         = {:.14e} with spectral unit {unit}", domain.c2)?;
            writeln!(f)?;
        }

        for kind in PlanckKind::ALL {
            let unit = match kind.domain() {
                SpectralDomain::Wavelength => "um.K",
                SpectralDomain::Wavenumber => "cm-1/K",
                SpectralDomain::Frequency => "Hz/K",
            };
            writeln!(f, "w{} = {:.14e} {unit}", kind, self.displacement(kind))?;
        }
        Ok(())
    }
}
