//! Type-safe physical units for evaluator inputs
//!
//! The Planck evaluators work on raw `f64` values in fixed units: kelvin for
//! temperature, µm for wavelength and Hz for frequency. This module wraps the
//! `uom` quantities so callers can hold typed values and convert them to
//! evaluator samples at the boundary.

use uom::si::f64::*;
use uom::si::frequency::{gigahertz, hertz, terahertz};
use uom::si::length::{meter, micrometer, nanometer};
use uom::si::thermodynamic_temperature::{degree_celsius, kelvin};

/// Type alias for temperature with convenient methods
pub type Temperature = ThermodynamicTemperature;

/// Type alias for length measurements with convenient methods
pub type Length = uom::si::f64::Length;

/// Type alias for frequency measurements with convenient methods
pub type Frequency = uom::si::f64::Frequency;

/// Extension trait for temperature conversions
pub trait TemperatureExt {
    /// Create temperature from degrees Celsius
    fn from_celsius(celsius: f64) -> Self;

    /// Get temperature in degrees Celsius
    fn as_celsius(&self) -> f64;

    /// Create temperature from Kelvin
    fn from_kelvin(kelvin: f64) -> Self;

    /// Get temperature in Kelvin
    fn as_kelvin(&self) -> f64;
}

/// Extension trait for wavelength conversions
pub trait LengthExt {
    /// Create length from nanometers
    fn from_nanometers(nm: f64) -> Self;

    /// Get length in nanometers
    fn as_nanometers(&self) -> f64;

    /// Create length from micrometers, the evaluator wavelength unit
    fn from_micrometers(um: f64) -> Self;

    /// Get length in micrometers
    fn as_micrometers(&self) -> f64;

    fn from_meters(m: f64) -> Self;

    fn as_meters(&self) -> f64;
}

/// Extension trait for frequency conversions
pub trait FrequencyExt {
    fn from_hertz(hz: f64) -> Self;

    fn as_hertz(&self) -> f64;

    fn from_terahertz(thz: f64) -> Self;

    fn as_terahertz(&self) -> f64;

    fn as_gigahertz(&self) -> f64;
}

impl TemperatureExt for Temperature {
    fn from_celsius(celsius: f64) -> Self {
        Temperature::new::<degree_celsius>(celsius)
    }

    fn as_celsius(&self) -> f64 {
        self.get::<degree_celsius>()
    }

    fn from_kelvin(kelvin_value: f64) -> Self {
        Temperature::new::<kelvin>(kelvin_value)
    }

    fn as_kelvin(&self) -> f64 {
        self.get::<kelvin>()
    }
}

impl LengthExt for Length {
    fn from_nanometers(nm: f64) -> Self {
        Length::new::<nanometer>(nm)
    }

    fn as_nanometers(&self) -> f64 {
        self.get::<nanometer>()
    }

    fn from_micrometers(um: f64) -> Self {
        Length::new::<micrometer>(um)
    }

    fn as_micrometers(&self) -> f64 {
        self.get::<micrometer>()
    }

    fn from_meters(m: f64) -> Self {
        Length::new::<meter>(m)
    }

    fn as_meters(&self) -> f64 {
        self.get::<meter>()
    }
}

impl FrequencyExt for Frequency {
    fn from_hertz(hz: f64) -> Self {
        Frequency::new::<hertz>(hz)
    }

    fn as_hertz(&self) -> f64 {
        self.get::<hertz>()
    }

    fn from_terahertz(thz: f64) -> Self {
        Frequency::new::<terahertz>(thz)
    }

    fn as_terahertz(&self) -> f64 {
        self.get::<terahertz>()
    }

    fn as_gigahertz(&self) -> f64 {
        self.get::<gigahertz>()
    }
}

/// Temperatures as evaluator samples in kelvin
pub fn kelvin_samples(temperatures: &[Temperature]) -> Vec<f64> {
    temperatures.iter().map(|t| t.as_kelvin()).collect()
}

/// Wavelengths as evaluator samples in micrometers
pub fn micrometer_samples(wavelengths: &[Length]) -> Vec<f64> {
    wavelengths.iter().map(|w| w.as_micrometers()).collect()
}

/// Frequencies as evaluator samples in hertz
pub fn hertz_samples(frequencies: &[Frequency]) -> Vec<f64> {
    frequencies.iter().map(|f| f.as_hertz()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planck::{planck, Exitance};
    use approx::assert_relative_eq;

    #[test]
    fn test_temperature_conversions() {
        let temp_c = Temperature::from_celsius(0.0);
        assert_relative_eq!(temp_c.as_kelvin(), 273.15, epsilon = 0.01);

        let temp_k = Temperature::from_kelvin(373.15);
        assert_relative_eq!(temp_k.as_celsius(), 100.0, epsilon = 0.01);
    }

    #[test]
    fn test_length_conversions() {
        let wavelength = Length::from_nanometers(550.0);
        assert_relative_eq!(wavelength.as_micrometers(), 0.55, epsilon = 1e-9);
        assert_relative_eq!(wavelength.as_meters(), 5.5e-7, epsilon = 1e-15);

        let thermal = Length::from_micrometers(10.0);
        assert_relative_eq!(thermal.as_nanometers(), 10_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_frequency_conversions() {
        let f = Frequency::from_terahertz(30.0);
        assert_relative_eq!(f.as_hertz(), 3.0e13, max_relative = 1e-12);
        assert_relative_eq!(f.as_gigahertz(), 3.0e4, max_relative = 1e-12);
        assert_relative_eq!(Frequency::from_hertz(5.0e14).as_terahertz(), 500.0, max_relative = 1e-12);
    }

    #[test]
    fn test_typed_samples_feed_evaluator() {
        let temperatures = [Temperature::from_celsius(26.85), Temperature::from_kelvin(1000.0)];
        let wavelengths = [Length::from_micrometers(10.0)];

        let t = kelvin_samples(&temperatures);
        let w = micrometer_samples(&wavelengths);
        assert_relative_eq!(t[0], 300.0, epsilon = 1e-9);

        match planck(&w, &t, "el") {
            Exitance::Vector(v) => {
                assert_eq!(v.len(), 2);
                assert_relative_eq!(v[0], 31.177_27, max_relative = 1e-5);
            }
            other => panic!("expected a vector, got {other:?}"),
        }
    }

    #[test]
    fn test_hertz_samples() {
        let f = hertz_samples(&[Frequency::from_terahertz(1.0), Frequency::from_hertz(2.0)]);
        assert_eq!(f.len(), 2);
        assert_relative_eq!(f[0], 1.0e12, max_relative = 1e-12);
        assert_relative_eq!(f[1], 2.0, max_relative = 1e-12);
    }
}
