//! Quantity and spectral-domain selectors for the Planck evaluators.
//!
//! Six evaluator kinds exist, one per combination of [`Quantity`] (radiant
//! energy or photon rate) and [`SpectralDomain`] (wavelength, wavenumber or
//! frequency). Each kind parses from and prints as a two-character selector:
//! the quantity character `e`/`q` followed by the domain character `l`/`n`/`f`.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::constants::PlanckConstants;

/// Errors produced when parsing a selector string
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectorError {
    #[error("Unknown quantity selector {0:?}, expected 'e' or 'q'")]
    UnknownQuantity(String),

    #[error("Unknown spectral domain selector {0:?}, expected 'l', 'n' or 'f'")]
    UnknownDomain(String),

    #[error("Selector must be two characters (quantity, domain), got {0:?}")]
    Malformed(String),
}

/// Physical quantity carried by the exitance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Energy units, W/(m²·spectral unit)
    Radiant,
    /// Photon-count units, q/(s·m²·spectral unit)
    Photon,
}

impl Quantity {
    /// Selector character, `e` or `q`
    pub fn symbol(&self) -> char {
        match self {
            Quantity::Radiant => 'e',
            Quantity::Photon => 'q',
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'e' => Some(Quantity::Radiant),
            'q' => Some(Quantity::Photon),
            _ => None,
        }
    }
}

impl FromStr for Quantity {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Quantity::from_symbol(c).ok_or_else(|| SelectorError::UnknownQuantity(s.into()))
            }
            _ => Err(SelectorError::UnknownQuantity(s.into())),
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Spectral variable in which the exitance density is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpectralDomain {
    /// Wavelength in micrometres
    Wavelength,
    /// Wavenumber in inverse centimetres
    Wavenumber,
    /// Frequency in hertz
    Frequency,
}

impl SpectralDomain {
    /// Selector character, `l`, `n` or `f`
    pub fn symbol(&self) -> char {
        match self {
            SpectralDomain::Wavelength => 'l',
            SpectralDomain::Wavenumber => 'n',
            SpectralDomain::Frequency => 'f',
        }
    }

    /// Unit of the spectral variable
    pub fn unit(&self) -> &'static str {
        match self {
            SpectralDomain::Wavelength => "um",
            SpectralDomain::Wavenumber => "cm-1",
            SpectralDomain::Frequency => "Hz",
        }
    }

    fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'l' => Some(SpectralDomain::Wavelength),
            'n' => Some(SpectralDomain::Wavenumber),
            'f' => Some(SpectralDomain::Frequency),
            _ => None,
        }
    }
}

impl fmt::Display for SpectralDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One of the six Planck evaluator kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanckKind {
    /// `el`: W/(m²·µm)
    RadiantWavelength,
    /// `en`: W/(m²·cm⁻¹)
    RadiantWavenumber,
    /// `ef`: W/(m²·Hz)
    RadiantFrequency,
    /// `ql`: q/(s·m²·µm)
    PhotonWavelength,
    /// `qn`: q/(s·m²·cm⁻¹)
    PhotonWavenumber,
    /// `qf`: q/(s·m²·Hz)
    PhotonFrequency,
}

impl PlanckKind {
    /// Every kind, radiant first
    pub const ALL: [PlanckKind; 6] = [
        PlanckKind::RadiantWavelength,
        PlanckKind::RadiantWavenumber,
        PlanckKind::RadiantFrequency,
        PlanckKind::PhotonWavelength,
        PlanckKind::PhotonWavenumber,
        PlanckKind::PhotonFrequency,
    ];

    pub fn new(quantity: Quantity, domain: SpectralDomain) -> Self {
        match (quantity, domain) {
            (Quantity::Radiant, SpectralDomain::Wavelength) => PlanckKind::RadiantWavelength,
            (Quantity::Radiant, SpectralDomain::Wavenumber) => PlanckKind::RadiantWavenumber,
            (Quantity::Radiant, SpectralDomain::Frequency) => PlanckKind::RadiantFrequency,
            (Quantity::Photon, SpectralDomain::Wavelength) => PlanckKind::PhotonWavelength,
            (Quantity::Photon, SpectralDomain::Wavenumber) => PlanckKind::PhotonWavenumber,
            (Quantity::Photon, SpectralDomain::Frequency) => PlanckKind::PhotonFrequency,
        }
    }

    pub fn quantity(&self) -> Quantity {
        match self {
            PlanckKind::RadiantWavelength
            | PlanckKind::RadiantWavenumber
            | PlanckKind::RadiantFrequency => Quantity::Radiant,
            PlanckKind::PhotonWavelength
            | PlanckKind::PhotonWavenumber
            | PlanckKind::PhotonFrequency => Quantity::Photon,
        }
    }

    pub fn domain(&self) -> SpectralDomain {
        match self {
            PlanckKind::RadiantWavelength | PlanckKind::PhotonWavelength => {
                SpectralDomain::Wavelength
            }
            PlanckKind::RadiantWavenumber | PlanckKind::PhotonWavenumber => {
                SpectralDomain::Wavenumber
            }
            PlanckKind::RadiantFrequency | PlanckKind::PhotonFrequency => {
                SpectralDomain::Frequency
            }
        }
    }

    /// Two-character selector such as `"el"`
    pub fn selector(&self) -> &'static str {
        match self {
            PlanckKind::RadiantWavelength => "el",
            PlanckKind::RadiantWavenumber => "en",
            PlanckKind::RadiantFrequency => "ef",
            PlanckKind::PhotonWavelength => "ql",
            PlanckKind::PhotonWavenumber => "qn",
            PlanckKind::PhotonFrequency => "qf",
        }
    }

    /// Units of the spectral exitance
    pub fn exitance_unit(&self) -> &'static str {
        match self {
            PlanckKind::RadiantWavelength => "W/(m^2.um)",
            PlanckKind::RadiantWavenumber => "W/(m^2.cm-1)",
            PlanckKind::RadiantFrequency => "W/(m^2.Hz)",
            PlanckKind::PhotonWavelength => "q/(s.m^2.um)",
            PlanckKind::PhotonWavenumber => "q/(s.m^2.cm-1)",
            PlanckKind::PhotonFrequency => "q/(s.m^2.Hz)",
        }
    }

    /// Spectral location of peak exitance at `temperature` kelvin.
    ///
    /// Wavelength peaks scale as `1/T`, wavenumber and frequency peaks as `T`.
    /// The result is in the unit of this kind's spectral domain.
    pub fn peak(&self, constants: &PlanckConstants, temperature: f64) -> f64 {
        let displacement = constants.displacement(*self);
        match self.domain() {
            SpectralDomain::Wavelength => displacement / temperature,
            SpectralDomain::Wavenumber | SpectralDomain::Frequency => displacement * temperature,
        }
    }
}

impl FromStr for PlanckKind {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (q, d) = match (chars.next(), chars.next(), chars.next()) {
            (Some(q), Some(d), None) => (q, d),
            _ => return Err(SelectorError::Malformed(s.into())),
        };

        let quantity =
            Quantity::from_symbol(q).ok_or_else(|| SelectorError::UnknownQuantity(q.into()))?;
        let domain =
            SpectralDomain::from_symbol(d).ok_or_else(|| SelectorError::UnknownDomain(d.into()))?;

        Ok(PlanckKind::new(quantity, domain))
    }
}

impl fmt::Display for PlanckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.selector())
    }
}
