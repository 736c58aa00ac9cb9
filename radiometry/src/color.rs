//! CIE chromaticity of sampled spectra.
//!
//! A spectrum sampled on a spectral grid is reduced to CIE tristimulus values
//! by trapezoidal integration against the three colour matching functions
//! (x̄, ȳ, z̄), all sampled on the same grid:
//!
//! ```text
//! X = ∫ L(λ)·x̄(λ) dλ      Y = ∫ L(λ)·ȳ(λ) dλ      Z = ∫ L(λ)·z̄(λ) dλ
//! ```
//!
//! and then normalized to chromaticity coordinates `x = X/(X+Y+Z)`,
//! `y = Y/(X+Y+Z)`. The luminance-like `Y` is carried along unnormalized.
//!
//! The curves are supplied by the caller, already interpolated onto the
//! spectral grid. [`chromaticity`] does not check alignment: samples are paired
//! by index and an all-dark spectrum produces NaN coordinates.
//! [`try_chromaticity`] performs the checks.

use serde::Serialize;
use thiserror::Error;

use crate::algo::trapezoid::trap_integrate_product;

/// Errors from checked chromaticity calculation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChromaticityError {
    #[error("{name} has {actual} samples but the spectral grid has {expected}")]
    LengthMismatch {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("At least two spectral samples are needed, got {0}")]
    TooFewSamples(usize),
}

/// Colour matching functions sampled on a spectral grid.
#[derive(Debug, Clone, PartialEq)]
pub struct TristimulusCurves {
    pub x_bar: Vec<f64>,
    pub y_bar: Vec<f64>,
    pub z_bar: Vec<f64>,
}

impl TristimulusCurves {
    pub fn new(x_bar: Vec<f64>, y_bar: Vec<f64>, z_bar: Vec<f64>) -> Self {
        Self { x_bar, y_bar, z_bar }
    }

    /// Number of samples in the shortest curve
    pub fn len(&self) -> usize {
        self.x_bar.len().min(self.y_bar.len()).min(self.z_bar.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check(&self, expected: usize) -> Result<(), ChromaticityError> {
        for (name, curve) in [
            ("x_bar", &self.x_bar),
            ("y_bar", &self.y_bar),
            ("z_bar", &self.z_bar),
        ] {
            if curve.len() != expected {
                return Err(ChromaticityError::LengthMismatch {
                    name,
                    expected,
                    actual: curve.len(),
                });
            }
        }
        Ok(())
    }
}

/// Tristimulus integrals X, Y, Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tristimulus {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Tristimulus {
    /// Integrate `radiance` against each curve over `spectral`.
    pub fn integrate(spectral: &[f64], radiance: &[f64], curves: &TristimulusCurves) -> Self {
        Self {
            x: trap_integrate_product(spectral, radiance, &curves.x_bar),
            y: trap_integrate_product(spectral, radiance, &curves.y_bar),
            z: trap_integrate_product(spectral, radiance, &curves.z_bar),
        }
    }

    /// Normalize to chromaticity coordinates
    pub fn chromaticity(&self) -> Chromaticity {
        let sum = self.x + self.y + self.z;
        Chromaticity {
            x: self.x / sum,
            y: self.y / sum,
            luminance: self.y,
        }
    }
}

/// CIE (x, y) chromaticity with the unnormalized Y tristimulus value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Chromaticity {
    pub x: f64,
    pub y: f64,
    /// Y tristimulus integral, in radiance units times spectral units
    pub luminance: f64,
}

impl Chromaticity {
    /// The implied z coordinate, `1 - x - y`
    pub fn z(&self) -> f64 {
        1.0 - self.x - self.y
    }
}

/// Chromaticity of a spectrum sampled on `spectral`.
///
/// # Arguments
/// * `spectral` - Spectral grid, any spacing and either direction
/// * `radiance` - Spectral radiance or exitance at each grid point
/// * `curves` - Colour matching functions sampled on the same grid
///
/// # Returns
/// `(x, y, Y)` as a [`Chromaticity`]. Mismatched lengths are truncated to the
/// shortest input; a zero tristimulus sum gives NaN coordinates.
pub fn chromaticity(spectral: &[f64], radiance: &[f64], curves: &TristimulusCurves) -> Chromaticity {
    Tristimulus::integrate(spectral, radiance, curves).chromaticity()
}

/// [`chromaticity`] with the inputs checked for alignment first.
///
/// # Errors
/// `TooFewSamples` for a grid of fewer than two points, `LengthMismatch` if
/// the radiance or any curve differs in length from the grid.
pub fn try_chromaticity(
    spectral: &[f64],
    radiance: &[f64],
    curves: &TristimulusCurves,
) -> Result<Chromaticity, ChromaticityError> {
    let expected = spectral.len();
    if expected < 2 {
        return Err(ChromaticityError::TooFewSamples(expected));
    }
    if radiance.len() != expected {
        return Err(ChromaticityError::LengthMismatch {
            name: "radiance",
            expected,
            actual: radiance.len(),
        });
    }
    curves.check(expected)?;
    Ok(chromaticity(spectral, radiance, curves))
}

/// Chromaticity of a monochromatic spike at each grid sample.
///
/// This traces the spectral locus, the horseshoe outline of the chromaticity
/// diagram. Each point integrates a unit spike at one sample, so a spike with
/// no trapezoid width (a single-sample grid, or a repeated grid value) has a
/// zero tristimulus sum and yields NaN coordinates.
pub fn spectral_locus(spectral: &[f64], curves: &TristimulusCurves) -> Vec<(f64, f64)> {
    let n = spectral.len().min(curves.len());
    let spectral = &spectral[..n];
    let mut spike = vec![0.0; n];
    (0..n)
        .map(|i| {
            spike[i] = 1.0;
            let point = Tristimulus::integrate(spectral, &spike, curves).chromaticity();
            spike[i] = 0.0;
            (point.x, point.y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn flat_curves(n: usize) -> TristimulusCurves {
        TristimulusCurves::new(vec![1.0; n], vec![2.0; n], vec![1.0; n])
    }

    #[test]
    fn test_flat_curves() {
        let spectral = [0.4, 0.5, 0.6, 0.7];
        let radiance = [3.0, 3.0, 3.0, 3.0];
        let c = chromaticity(&spectral, &radiance, &flat_curves(4));
        assert_relative_eq!(c.x, 0.25, epsilon = 1e-12);
        assert_relative_eq!(c.y, 0.5, epsilon = 1e-12);
        assert_relative_eq!(c.z(), 0.25, epsilon = 1e-12);
        // 2.0 * 3.0 over a 0.3 wide grid
        assert_relative_eq!(c.luminance, 1.8, epsilon = 1e-12);
    }

    #[test]
    fn test_scale_invariance() {
        let spectral = [0.4, 0.45, 0.55, 0.7];
        let curves = TristimulusCurves::new(
            vec![0.3, 0.2, 0.5, 0.3],
            vec![0.0, 0.3, 1.0, 0.1],
            vec![1.5, 1.0, 0.0, 0.0],
        );
        let radiance = [1.0, 2.0, 3.0, 4.0];
        let doubled: Vec<f64> = radiance.iter().map(|v| v * 2.0).collect();

        let a = chromaticity(&spectral, &radiance, &curves);
        let b = chromaticity(&spectral, &doubled, &curves);
        assert_relative_eq!(a.x, b.x, epsilon = 1e-14);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-14);
        assert_relative_eq!(b.luminance, 2.0 * a.luminance, epsilon = 1e-12);
    }

    #[test]
    fn test_dark_spectrum_is_nan() {
        let c = chromaticity(&[0.4, 0.5], &[0.0, 0.0], &flat_curves(2));
        assert!(c.x.is_nan());
        assert!(c.y.is_nan());
        assert_eq!(c.luminance, 0.0);
    }

    #[test]
    fn test_checked_inputs() {
        let curves = flat_curves(3);
        assert_eq!(
            try_chromaticity(&[0.5], &[1.0], &curves),
            Err(ChromaticityError::TooFewSamples(1))
        );
        assert_eq!(
            try_chromaticity(&[0.4, 0.5, 0.6], &[1.0, 1.0], &curves),
            Err(ChromaticityError::LengthMismatch {
                name: "radiance",
                expected: 3,
                actual: 2
            })
        );
        let short = TristimulusCurves::new(vec![1.0; 3], vec![1.0; 3], vec![1.0; 2]);
        assert_eq!(
            try_chromaticity(&[0.4, 0.5, 0.6], &[1.0; 3], &short),
            Err(ChromaticityError::LengthMismatch {
                name: "z_bar",
                expected: 3,
                actual: 2
            })
        );
        assert!(try_chromaticity(&[0.4, 0.5, 0.6], &[1.0; 3], &curves).is_ok());
    }

    #[test]
    fn test_locus_without_interval_width_is_nan() {
        let curves = flat_curves(3);
        let single = spectral_locus(&[0.5], &curves);
        assert_eq!(single.len(), 1);
        assert!(single[0].0.is_nan() && single[0].1.is_nan());

        // Middle sample is bracketed by a zero-width interval on each side
        let repeated = spectral_locus(&[0.5, 0.5, 0.5], &curves);
        assert!(repeated.iter().all(|(x, y)| x.is_nan() && y.is_nan()));

        let spread = spectral_locus(&[0.4, 0.5, 0.6], &curves);
        assert_relative_eq!(spread[1].0, 0.25, epsilon = 1e-12);
        assert_relative_eq!(spread[1].1, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_locus_matches_spike_integration() {
        let spectral = [0.4, 0.45, 0.55, 0.7];
        let curves = TristimulusCurves::new(
            vec![0.3, 0.2, 0.5, 0.3],
            vec![0.1, 0.3, 1.0, 0.1],
            vec![1.5, 1.0, 0.2, 0.1],
        );
        let locus = spectral_locus(&spectral, &curves);
        assert_eq!(locus.len(), 4);
        for (i, &(x, y)) in locus.iter().enumerate() {
            let mut spike = [0.0; 4];
            spike[i] = 1.0;
            let c = chromaticity(&spectral, &spike, &curves);
            assert_relative_eq!(x, c.x, epsilon = 1e-12);
            assert_relative_eq!(y, c.y, epsilon = 1e-12);
        }
    }
}
