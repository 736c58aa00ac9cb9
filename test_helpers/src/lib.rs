//! Test helpers for radiometry
//!
//! This crate provides fixtures shared by the radiometry unit tests,
//! integration tests and benchmarks: analytic CIE 1931 colour matching
//! functions, integration grids, and a scratch directory for test artifacts.

use once_cell::sync::Lazy;
use std::env;
use std::path::{Path, PathBuf};

/// Error type for test helper operations
#[derive(thiserror::Error, Debug)]
pub enum TestHelperError {
    #[error("Failed to find project root: {0}")]
    ProjectRootNotFound(String),
}

/// Colour matching functions sampled on a wavelength grid.
#[derive(Debug, Clone)]
pub struct CieCurves {
    pub x_bar: Vec<f64>,
    pub y_bar: Vec<f64>,
    pub z_bar: Vec<f64>,
}

/// Asymmetric Gaussian lobe used by the multi-lobe fits
fn lobe(lambda_nm: f64, center: f64, below: f64, above: f64) -> f64 {
    let t = (lambda_nm - center) * if lambda_nm < center { below } else { above };
    (-0.5 * t * t).exp()
}

/// CIE 1931 x̄ at `lambda_nm`, multi-lobe fit of Wyman, Sloan and Shirley (2013)
pub fn x_bar_1931(lambda_nm: f64) -> f64 {
    0.362 * lobe(lambda_nm, 442.0, 0.0624, 0.0374) + 1.056 * lobe(lambda_nm, 599.8, 0.0264, 0.0323)
        - 0.065 * lobe(lambda_nm, 501.1, 0.0490, 0.0382)
}

/// CIE 1931 ȳ at `lambda_nm`
pub fn y_bar_1931(lambda_nm: f64) -> f64 {
    0.821 * lobe(lambda_nm, 568.8, 0.0213, 0.0247) + 0.286 * lobe(lambda_nm, 530.9, 0.0613, 0.0322)
}

/// CIE 1931 z̄ at `lambda_nm`
pub fn z_bar_1931(lambda_nm: f64) -> f64 {
    1.217 * lobe(lambda_nm, 437.0, 0.0845, 0.0278) + 0.681 * lobe(lambda_nm, 459.0, 0.0385, 0.0725)
}

/// Sample the CIE 1931 curves on a grid of wavelengths in micrometers.
pub fn cie_1931_curves(wavelengths_um: &[f64]) -> CieCurves {
    let nm: Vec<f64> = wavelengths_um.iter().map(|w| w * 1000.0).collect();
    CieCurves {
        x_bar: nm.iter().map(|&l| x_bar_1931(l)).collect(),
        y_bar: nm.iter().map(|&l| y_bar_1931(l)).collect(),
        z_bar: nm.iter().map(|&l| z_bar_1931(l)).collect(),
    }
}

/// `n` evenly spaced points from `start` to `stop` inclusive
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n).map(|i| start + i as f64 * step).collect()
        }
    }
}

/// `n` logarithmically spaced points from `start` to `stop` inclusive.
///
/// Both endpoints must be positive.
pub fn logspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    linspace(start.ln(), stop.ln(), n)
        .into_iter()
        .map(f64::exp)
        .collect()
}

/// Returns the path to the project root directory.
///
/// Starts from the current directory and moves up until it finds the
/// `Cargo.toml` that declares the workspace.
pub fn find_project_root() -> Result<PathBuf, TestHelperError> {
    let mut current_dir = env::current_dir().map_err(|e| {
        TestHelperError::ProjectRootNotFound(format!("Failed to get current directory: {}", e))
    })?;

    loop {
        let cargo_toml = current_dir.join("Cargo.toml");
        if cargo_toml.exists() {
            let content = std::fs::read_to_string(&cargo_toml).map_err(|e| {
                TestHelperError::ProjectRootNotFound(format!("Failed to read Cargo.toml: {}", e))
            })?;

            if content.contains("[workspace]") {
                return Ok(current_dir);
            }
        }

        if !current_dir.pop() {
            break;
        }
    }

    Err(TestHelperError::ProjectRootNotFound(
        "Workspace root not found".to_string(),
    ))
}

static PROJECT_ROOT: Lazy<PathBuf> =
    Lazy::new(|| find_project_root().expect("Failed to find project root directory"));

/// Directory for test artifacts such as CSV tables, created on demand.
pub fn get_output_dir() -> PathBuf {
    let output_dir = PROJECT_ROOT.join("test_output");
    if !output_dir.exists() {
        std::fs::create_dir_all(&output_dir).expect("Failed to create output directory");
    }
    output_dir
}

/// Path of `path` inside the test output directory
pub fn output_path<P: AsRef<Path>>(path: P) -> PathBuf {
    get_output_dir().join(path)
}
