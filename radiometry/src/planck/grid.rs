//! Broadcasting of spectral and temperature samples onto an evaluation grid.
//!
//! Every Planck evaluator takes a spectral input and a temperature input, each
//! either a single value or a sequence. Evaluation always runs over the full
//! outer product, spectral variable along axis 0 and temperature along axis 1.
//! The rank of the result then follows from the input lengths:
//!
//! | spectral | temperature | result |
//! |---|---|---|
//! | 1 | 1 | [`Exitance::Scalar`] |
//! | N | 1 | [`Exitance::Vector`] of length N |
//! | 1 | M | [`Exitance::Vector`] of length M |
//! | N | M | [`Exitance::Matrix`] of shape (N, M) |
//!
//! A one-element sequence counts as a single value.
//!
//! # Inputs
//!
//! Anything implementing [`SampleInput`] can be passed for either axis: a bare
//! `f64`, slices, fixed-size arrays, `Vec<f64>`, ndarray 1-D arrays and views,
//! and references to any of these. Samples are borrowed where the storage is
//! contiguous; strided ndarray inputs are copied once into an owned buffer.
//!
//! # Evaluation
//!
//! `evaluate` fills an (N, M) buffer by calling a scalar kernel once per
//! (spectral, temperature) pair with ndarray's `Zip`. With
//! [`EvalOptions::parallel`] set the same loop runs on the rayon pool through
//! `par_for_each`. Kernels are pure so both paths produce identical values.
//! The buffer is then collapsed to the rank given by the table above.
//!
//! # Validation
//!
//! The plain entry points do no checking: non-physical inputs flow into the
//! kernels and come out as NaN, infinity or zero. With [`EvalOptions::strict`]
//! the fallible entry points reject empty inputs and any sample that is not
//! positive and finite with an [`InputError`].

use std::borrow::Cow;

use log::trace;
use ndarray::{Array1, Array2, ArrayView1, Axis, Zip};
use thiserror::Error;

/// Options for controlling grid evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalOptions {
    /// Whether to evaluate the grid in parallel with rayon
    pub parallel: bool,

    /// Whether the fallible entry points validate their inputs
    pub strict: bool,
}

/// Errors reported by strict input validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("{0} input is empty")]
    Empty(&'static str),

    #[error("{axis} sample {index} must be positive and finite, got {value}")]
    NotPositive {
        axis: &'static str,
        index: usize,
        value: f64,
    },
}

/// Anything that can supply one or more `f64` samples.
///
/// Implemented for bare `f64`, slices, arrays, `Vec<f64>` and one-dimensional
/// ndarray types, and for references to any of those.
pub trait SampleInput {
    /// Samples as a contiguous slice, borrowed when possible
    fn samples(&self) -> Cow<'_, [f64]>;
}

impl SampleInput for f64 {
    fn samples(&self) -> Cow<'_, [f64]> {
        Cow::Borrowed(std::slice::from_ref(self))
    }
}

impl SampleInput for [f64] {
    fn samples(&self) -> Cow<'_, [f64]> {
        Cow::Borrowed(self)
    }
}

impl<const N: usize> SampleInput for [f64; N] {
    fn samples(&self) -> Cow<'_, [f64]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl SampleInput for Vec<f64> {
    fn samples(&self) -> Cow<'_, [f64]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl SampleInput for Array1<f64> {
    fn samples(&self) -> Cow<'_, [f64]> {
        match self.as_slice() {
            Some(slice) => Cow::Borrowed(slice),
            None => Cow::Owned(self.to_vec()),
        }
    }
}

impl SampleInput for ArrayView1<'_, f64> {
    fn samples(&self) -> Cow<'_, [f64]> {
        match self.as_slice() {
            Some(slice) => Cow::Borrowed(slice),
            None => Cow::Owned(self.to_vec()),
        }
    }
}

impl<T: SampleInput + ?Sized> SampleInput for &T {
    fn samples(&self) -> Cow<'_, [f64]> {
        (**self).samples()
    }
}

/// Planck evaluator output, ranked by the shapes of the inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum Exitance {
    /// Single spectral value and single temperature
    Scalar(f64),

    /// One input was a single value; indexed by the other
    Vector(Array1<f64>),

    /// Spectral variable along axis 0, temperature along axis 1
    Matrix(Array2<f64>),
}

impl Exitance {
    /// Result shape, empty for a scalar
    pub fn shape(&self) -> Vec<usize> {
        match self {
            Exitance::Scalar(_) => Vec::new(),
            Exitance::Vector(v) => vec![v.len()],
            Exitance::Matrix(m) => m.shape().to_vec(),
        }
    }

    /// Number of array dimensions: 0, 1 or 2
    pub fn ndim(&self) -> usize {
        self.shape().len()
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Exitance::Scalar(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&Array1<f64>> {
        match self {
            Exitance::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Array2<f64>> {
        match self {
            Exitance::Matrix(m) => Some(m),
            _ => None,
        }
    }

    /// All values in logical (row-major) order
    pub fn to_vec(&self) -> Vec<f64> {
        match self {
            Exitance::Scalar(v) => vec![*v],
            Exitance::Vector(v) => v.to_vec(),
            Exitance::Matrix(m) => m.iter().copied().collect(),
        }
    }

    /// A result shaped like `spectral` with every element set to `value`.
    pub(crate) fn filled_like(spectral: &[f64], value: f64) -> Self {
        if spectral.len() == 1 {
            Exitance::Scalar(value)
        } else {
            Exitance::Vector(Array1::from_elem(spectral.len(), value))
        }
    }

    /// Collapse a full (spectral, temperature) grid to the output rank.
    fn from_grid(grid: Array2<f64>) -> Self {
        match grid.dim() {
            (1, 1) => Exitance::Scalar(grid[[0, 0]]),
            (_, 1) => Exitance::Vector(grid.index_axis_move(Axis(1), 0)),
            (1, _) => Exitance::Vector(grid.index_axis_move(Axis(0), 0)),
            _ => Exitance::Matrix(grid),
        }
    }
}

/// Evaluate `kernel(spectral, temperature)` over the outer product of the inputs.
///
/// The grid is indexed `[spectral, temperature]` directly, which is the
/// transpose of a temperature-major flattening.
pub(crate) fn evaluate<F>(
    spectral: &[f64],
    temperature: &[f64],
    options: EvalOptions,
    kernel: F,
) -> Exitance
where
    F: Fn(f64, f64) -> f64 + Sync,
{
    let shape = (spectral.len(), temperature.len());
    trace!("Evaluating Planck grid of shape {:?}", shape);

    let mut grid = Array2::<f64>::zeros(shape);
    if options.parallel {
        Zip::indexed(&mut grid).par_for_each(|(i, j), out| {
            *out = kernel(spectral[i], temperature[j]);
        });
    } else {
        Zip::indexed(&mut grid).for_each(|(i, j), out| {
            *out = kernel(spectral[i], temperature[j]);
        });
    }

    Exitance::from_grid(grid)
}

/// Check that every sample is positive and finite.
pub(crate) fn validate(axis: &'static str, samples: &[f64]) -> Result<(), InputError> {
    if samples.is_empty() {
        return Err(InputError::Empty(axis));
    }
    match samples
        .iter()
        .enumerate()
        .find(|(_, v)| !(v.is_finite() && **v > 0.0))
    {
        Some((index, &value)) => Err(InputError::NotPositive { axis, index, value }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn product(s: f64, t: f64) -> f64 {
        s * 10.0 + t
    }

    #[test]
    fn test_sample_inputs_borrow() {
        let v = vec![1.0_f64, 2.0];
        assert!(matches!(v.samples(), Cow::Borrowed(_)));
        assert_eq!(&*3.0_f64.samples(), &[3.0]);
        assert_eq!([1.0_f64, 2.0, 3.0].samples().len(), 3);
        assert_eq!(&*(&v).samples(), &[1.0, 2.0]);

        let a = array![1.0_f64, 2.0, 3.0, 4.0];
        assert!(matches!(a.samples(), Cow::Borrowed(_)));
        // Strided view has to be copied
        let strided = a.slice(ndarray::s![..;2]);
        assert_eq!(&*strided.samples(), &[1.0, 3.0]);
    }

    #[test]
    fn test_scalar_scalar() {
        let e = evaluate(&[2.0], &[3.0], EvalOptions::default(), product);
        assert_eq!(e, Exitance::Scalar(23.0));
        assert_eq!(e.ndim(), 0);
        assert_eq!(e.as_scalar(), Some(23.0));
    }

    #[test]
    fn test_vector_scalar() {
        let e = evaluate(&[1.0, 2.0, 3.0], &[5.0], EvalOptions::default(), product);
        assert_eq!(e, Exitance::Vector(array![15.0, 25.0, 35.0]));
        assert_eq!(e.shape(), vec![3]);
    }

    #[test]
    fn test_scalar_vector() {
        let e = evaluate(&[1.0], &[5.0, 6.0], EvalOptions::default(), product);
        assert_eq!(e, Exitance::Vector(array![15.0, 16.0]));
    }

    #[test]
    fn test_vector_vector_spectral_on_axis_zero() {
        let e = evaluate(&[1.0, 2.0, 3.0], &[5.0, 6.0], EvalOptions::default(), product);
        let m = e.as_matrix().unwrap();
        assert_eq!(m.dim(), (3, 2));
        assert_eq!(m[[0, 0]], 15.0);
        assert_eq!(m[[2, 1]], 36.0);
        assert_eq!(e.to_vec(), vec![15.0, 16.0, 25.0, 26.0, 35.0, 36.0]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let spectral: Vec<f64> = (0..97).map(|i| i as f64).collect();
        let temperature: Vec<f64> = (0..13).map(|i| i as f64 * 0.5).collect();
        let parallel = EvalOptions {
            parallel: true,
            ..EvalOptions::default()
        };

        let a = evaluate(&spectral, &temperature, EvalOptions::default(), product);
        let b = evaluate(&spectral, &temperature, parallel, product);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_spectral() {
        let e = evaluate(&[], &[300.0], EvalOptions::default(), product);
        assert_eq!(e.shape(), vec![0]);
    }

    #[test]
    fn test_filled_like() {
        assert_eq!(Exitance::filled_like(&[1.0], -1.0), Exitance::Scalar(-1.0));
        assert_eq!(
            Exitance::filled_like(&[1.0, 2.0], -1.0),
            Exitance::Vector(array![-1.0, -1.0])
        );
    }

    #[test]
    fn test_validate() {
        assert!(validate("spectral", &[1.0, 2.0]).is_ok());
        assert_eq!(validate("temperature", &[]), Err(InputError::Empty("temperature")));
        assert_eq!(
            validate("temperature", &[300.0, 0.0]),
            Err(InputError::NotPositive {
                axis: "temperature",
                index: 1,
                value: 0.0
            })
        );
        assert!(validate("spectral", &[f64::NAN]).is_err());
        assert!(validate("spectral", &[f64::INFINITY]).is_err());
    }
}
