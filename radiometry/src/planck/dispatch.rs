//! Planck evaluator object and selector-string dispatch.
//!
//! [`Planck`] bundles a shared constants table with [`EvalOptions`] and
//! evaluates any [`PlanckKind`] over broadcast inputs. The `*_by_selector`
//! methods and the free functions [`planck`], [`dplanck`] and
//! [`stefan_boltzmann`] accept the two-character selector strings instead.
//! An unknown selector never errors; it yields [`SENTINEL`] values.

use std::sync::Arc;

use log::warn;

use super::constants::PlanckConstants;
use super::derivative::derivative;
use super::exitance::exitance;
use super::grid::{evaluate, validate, EvalOptions, Exitance, InputError, SampleInput};
use super::kind::{PlanckKind, Quantity};
use super::stefan_boltzmann::total_exitance;

/// Value returned in place of a result for an unknown selector
pub const SENTINEL: f64 = -1.0;

/// Planck evaluator bound to a constants table and evaluation options.
///
/// Cloning is cheap; the constants are shared.
#[derive(Debug, Clone)]
pub struct Planck {
    constants: Arc<PlanckConstants>,
    options: EvalOptions,
}

impl Default for Planck {
    fn default() -> Self {
        Self::new(PlanckConstants::global())
    }
}

impl Planck {
    /// Create an evaluator with default options
    pub fn new(constants: Arc<PlanckConstants>) -> Self {
        Self {
            constants,
            options: EvalOptions::default(),
        }
    }

    /// Replace the evaluation options
    pub fn with_options(mut self, options: EvalOptions) -> Self {
        self.options = options;
        self
    }

    pub fn constants(&self) -> &PlanckConstants {
        &self.constants
    }

    pub fn options(&self) -> EvalOptions {
        self.options
    }

    /// Spectral exitance of `kind` over the outer product of the inputs.
    ///
    /// # Arguments
    /// * `kind` - Quantity and spectral domain to evaluate
    /// * `spectral` - Spectral value(s) in the unit of `kind`'s domain
    /// * `temperature` - Temperature(s) in kelvin
    ///
    /// # Returns
    /// An [`Exitance`] ranked by the input lengths, spectral along axis 0
    pub fn exitance(
        &self,
        kind: PlanckKind,
        spectral: impl SampleInput,
        temperature: impl SampleInput,
    ) -> Exitance {
        let constants = self.constants.as_ref();
        evaluate(
            &spectral.samples(),
            &temperature.samples(),
            self.options,
            |s, t| exitance(constants, kind, s, t),
        )
    }

    /// Temperature derivative of the spectral exitance, shaped like
    /// [`Planck::exitance`].
    pub fn derivative(
        &self,
        kind: PlanckKind,
        spectral: impl SampleInput,
        temperature: impl SampleInput,
    ) -> Exitance {
        let constants = self.constants.as_ref();
        evaluate(
            &spectral.samples(),
            &temperature.samples(),
            self.options,
            |s, t| derivative(constants, kind, s, t),
        )
    }

    /// [`Planck::exitance`] with input checks when the options are strict.
    ///
    /// # Errors
    /// With `strict` set, returns `InputError` if either input is empty or
    /// holds a value that is not positive and finite.
    pub fn try_exitance(
        &self,
        kind: PlanckKind,
        spectral: impl SampleInput,
        temperature: impl SampleInput,
    ) -> Result<Exitance, InputError> {
        self.check(&spectral, &temperature)?;
        Ok(self.exitance(kind, spectral, temperature))
    }

    /// [`Planck::derivative`] with input checks when the options are strict.
    pub fn try_derivative(
        &self,
        kind: PlanckKind,
        spectral: impl SampleInput,
        temperature: impl SampleInput,
    ) -> Result<Exitance, InputError> {
        self.check(&spectral, &temperature)?;
        Ok(self.derivative(kind, spectral, temperature))
    }

    fn check(&self, spectral: &impl SampleInput, temperature: &impl SampleInput) -> Result<(), InputError> {
        if self.options.strict {
            validate("spectral", &spectral.samples())?;
            validate("temperature", &temperature.samples())?;
        }
        Ok(())
    }

    /// Exitance for a selector string such as `"el"`.
    ///
    /// An unknown selector yields [`SENTINEL`] shaped like `spectral`: a
    /// scalar for a single value, otherwise a vector of its length. A
    /// one-element sequence counts as a single value and also yields a
    /// scalar. The temperature input does not affect the shape.
    pub fn exitance_by_selector(
        &self,
        selector: &str,
        spectral: impl SampleInput,
        temperature: impl SampleInput,
    ) -> Exitance {
        match selector.parse::<PlanckKind>() {
            Ok(kind) => self.exitance(kind, spectral, temperature),
            Err(e) => {
                warn!("Planck exitance: {}", e);
                Exitance::filled_like(&spectral.samples(), SENTINEL)
            }
        }
    }

    /// Derivative for a selector string; unknown selectors as in
    /// [`Planck::exitance_by_selector`].
    pub fn derivative_by_selector(
        &self,
        selector: &str,
        spectral: impl SampleInput,
        temperature: impl SampleInput,
    ) -> Exitance {
        match selector.parse::<PlanckKind>() {
            Ok(kind) => self.derivative(kind, spectral, temperature),
            Err(e) => {
                warn!("Planck derivative: {}", e);
                Exitance::filled_like(&spectral.samples(), SENTINEL)
            }
        }
    }

    /// Total exitance, `σ_e·T⁴` or `σ_q·T³`
    pub fn stefan_boltzmann(&self, quantity: Quantity, temperature: f64) -> f64 {
        total_exitance(&self.constants, quantity, temperature)
    }

    /// Total exitance for quantity selector `"e"` or `"q"`, else [`SENTINEL`].
    pub fn stefan_boltzmann_by_selector(&self, selector: &str, temperature: f64) -> f64 {
        match selector.parse::<Quantity>() {
            Ok(quantity) => self.stefan_boltzmann(quantity, temperature),
            Err(e) => {
                warn!("Stefan-Boltzmann: {}", e);
                SENTINEL
            }
        }
    }

    /// Spectral position of peak exitance at `temperature`
    pub fn peak(&self, kind: PlanckKind, temperature: f64) -> f64 {
        kind.peak(&self.constants, temperature)
    }
}

/// Spectral exitance for `selector` using the shared constants table.
///
/// ```
/// use radiometry::planck::{planck, Exitance};
///
/// let m = planck(10.0, 300.0, "el");
/// assert!(matches!(m, Exitance::Scalar(v) if (v - 31.177).abs() < 1e-3));
///
/// let bad = planck(vec![1.0, 2.0, 3.0], 300.0, "zz");
/// assert_eq!(bad.to_vec(), vec![-1.0, -1.0, -1.0]);
/// ```
pub fn planck(spectral: impl SampleInput, temperature: impl SampleInput, selector: &str) -> Exitance {
    Planck::default().exitance_by_selector(selector, spectral, temperature)
}

/// Temperature derivative of the spectral exitance for `selector`.
pub fn dplanck(spectral: impl SampleInput, temperature: impl SampleInput, selector: &str) -> Exitance {
    Planck::default().derivative_by_selector(selector, spectral, temperature)
}

/// Total exitance for quantity selector `"e"` or `"q"`, else [`SENTINEL`].
pub fn stefan_boltzmann(temperature: f64, selector: &str) -> f64 {
    Planck::default().stefan_boltzmann_by_selector(selector, temperature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::Array1;

    #[test]
    fn test_selector_matches_kind() {
        let planck = Planck::default();
        let wavelengths = [1.0, 3.0, 10.0];
        for kind in PlanckKind::ALL {
            let by_kind = planck.exitance(kind, wavelengths, 800.0);
            let by_selector = planck.exitance_by_selector(kind.selector(), wavelengths, 800.0);
            assert_eq!(by_kind, by_selector);

            let d_kind = planck.derivative(kind, wavelengths, 800.0);
            let d_selector = planck.derivative_by_selector(kind.selector(), wavelengths, 800.0);
            assert_eq!(d_kind, d_selector);
        }
    }

    #[test]
    fn test_output_shapes() {
        let temps = vec![300.0, 400.0];
        let waves = Array1::linspace(1.0, 20.0, 5);

        assert_eq!(planck(10.0, 300.0, "el").ndim(), 0);
        assert_eq!(planck(&waves, 300.0, "el").shape(), vec![5]);
        assert_eq!(planck(10.0, &temps, "el").shape(), vec![2]);
        assert_eq!(planck(&waves, &temps, "el").shape(), vec![5, 2]);
        // One-element sequences behave like scalars
        assert_eq!(planck([10.0], [300.0], "ql").ndim(), 0);
    }

    #[test]
    fn test_matrix_columns_match_scalar_temperature() {
        let temps = [300.0, 1000.0];
        let waves = [2.0, 5.0, 12.0];
        let grid = planck(waves, temps, "en");
        let m = grid.as_matrix().unwrap();
        for (j, &t) in temps.iter().enumerate() {
            let column = planck(waves, t, "en");
            let column = column.as_vector().unwrap();
            for i in 0..waves.len() {
                assert_eq!(m[[i, j]], column[i]);
            }
        }
    }

    #[test]
    fn test_unknown_selector_sentinel() {
        assert_eq!(planck(5.0, 300.0, "zz"), Exitance::Scalar(SENTINEL));
        assert_eq!(
            planck(vec![1.0, 2.0, 3.0], vec![300.0, 400.0], "zz").to_vec(),
            vec![-1.0; 3]
        );
        assert_eq!(dplanck([1.0, 2.0], 300.0, "lq").to_vec(), vec![-1.0; 2]);
        assert_eq!(planck(5.0, 300.0, ""), Exitance::Scalar(SENTINEL));

        assert_eq!(planck([5.0], [300.0, 400.0], "zz"), Exitance::Scalar(SENTINEL));
        assert_eq!(dplanck(vec![5.0], 300.0, "zz"), Exitance::Scalar(SENTINEL));
    }

    #[test]
    fn test_stefan_boltzmann_selector() {
        assert_relative_eq!(
            stefan_boltzmann(1000.0, "e"),
            5.670_374_419e4,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            stefan_boltzmann(1000.0, "q"),
            1.520_460_859e24,
            max_relative = 1e-8
        );
        assert_eq!(stefan_boltzmann(1000.0, "x"), SENTINEL);
        assert_eq!(stefan_boltzmann(1000.0, "el"), SENTINEL);
    }

    #[test]
    fn test_strict_mode_rejects_bad_input() {
        let lenient = Planck::default();
        assert!(lenient
            .try_exitance(PlanckKind::RadiantWavelength, -1.0, 300.0)
            .is_ok());

        let strict = Planck::default().with_options(EvalOptions {
            strict: true,
            ..EvalOptions::default()
        });
        assert!(strict.options().strict);
        assert_eq!(
            strict.try_exitance(PlanckKind::RadiantWavelength, [1.0, -1.0], 300.0),
            Err(InputError::NotPositive {
                axis: "spectral",
                index: 1,
                value: -1.0
            })
        );
        assert!(strict
            .try_derivative(PlanckKind::PhotonFrequency, 1e14, Vec::<f64>::new())
            .is_err());
        assert_eq!(
            strict
                .try_exitance(PlanckKind::RadiantWavelength, 10.0, 300.0)
                .unwrap(),
            strict.exitance(PlanckKind::RadiantWavelength, 10.0, 300.0)
        );
    }

    #[test]
    fn test_parallel_option() {
        let parallel = Planck::default().with_options(EvalOptions {
            parallel: true,
            strict: false,
        });
        let waves: Vec<f64> = (1..200).map(|i| i as f64 * 0.1).collect();
        let temps = [250.0, 300.0, 3000.0];
        assert_eq!(
            parallel.exitance(PlanckKind::PhotonWavelength, &waves, temps),
            Planck::default().exitance(PlanckKind::PhotonWavelength, &waves, temps)
        );
    }

    #[test]
    fn test_custom_constants_shared() {
        let constants = Arc::new(PlanckConstants::try_new().unwrap());
        let planck = Planck::new(Arc::clone(&constants));
        assert_eq!(Arc::strong_count(&constants), 2);
        assert_eq!(planck.constants(), constants.as_ref());
        assert_relative_eq!(
            planck.peak(PlanckKind::RadiantWavelength, 1000.0),
            2.897_771_955,
            max_relative = 1e-9
        );
    }
}
