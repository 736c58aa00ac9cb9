//! Blackbody consistency report
//!
//! For one temperature, evaluates all six Planck exitance kinds on a
//! logarithmic spectral grid and compares the numerical results against the
//! closed forms: the sampled peak against the Wien displacement law, the
//! trapezoid integral against Stefan-Boltzmann, and the analytic dM/dT
//! against a forward difference. Can also print the constants table.
//!
//! Usage:
//! ```
//! cargo run --release --bin planck_report -- --temperature 1000
//! cargo run --release --bin planck_report -- --constants --json
//! ```

use anyhow::{ensure, Result};
use clap::Parser;
use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;

use radiometry::algo::trapezoid::trap_integrate;
use radiometry::planck::{Planck, PlanckConstants, PlanckKind, SpectralDomain, SI};

#[derive(Parser, Debug)]
#[command(name = "planck_report")]
#[command(about = "Blackbody exitance consistency report")]
#[command(version)]
struct Args {
    /// Print the radiation constants table and exit
    #[arg(long)]
    constants: bool,

    /// Emit JSON instead of a text table
    #[arg(long)]
    json: bool,

    /// Blackbody temperature in kelvin
    #[arg(short, long, default_value_t = 1000.0)]
    temperature: f64,

    /// Shortest wavelength of the integration grid in micrometers
    #[arg(long, default_value_t = 0.05)]
    min_wavelength: f64,

    /// Longest wavelength of the integration grid in micrometers
    #[arg(long, default_value_t = 1000.0)]
    max_wavelength: f64,

    /// Number of grid points
    #[arg(short, long, default_value_t = 10_000)]
    points: usize,

    /// Temperature step for the finite-difference derivative, kelvin
    #[arg(long, default_value_t = 0.01)]
    delta_t: f64,
}

/// Numerical checks for one evaluator kind
#[derive(Debug, Serialize)]
struct KindReport {
    selector: &'static str,
    unit: &'static str,
    peak_exitance: f64,
    peak_location: f64,
    wien_location: f64,
    integral: f64,
    stefan_boltzmann: f64,
    integral_relative_error: f64,
    derivative: f64,
    finite_difference: f64,
}

/// Logarithmic wavelength grid in micrometers
fn wavelength_grid(min: f64, max: f64, points: usize) -> Vec<f64> {
    let (lo, hi) = (min.ln(), max.ln());
    let step = (hi - lo) / (points - 1) as f64;
    (0..points).map(|i| (lo + i as f64 * step).exp()).collect()
}

/// The wavelength grid expressed in `domain`, ascending
fn spectral_grid(domain: SpectralDomain, wavelengths: &[f64]) -> Vec<f64> {
    let mut grid: Vec<f64> = match domain {
        SpectralDomain::Wavelength => return wavelengths.to_vec(),
        SpectralDomain::Wavenumber => wavelengths.iter().map(|w| 1.0e4 / w).collect(),
        SpectralDomain::Frequency => wavelengths
            .iter()
            .map(|w| SI::SPEED_OF_LIGHT / (w * 1.0e-6))
            .collect(),
    };
    grid.reverse();
    grid
}

fn report(planck: &Planck, kind: PlanckKind, wavelengths: &[f64], args: &Args) -> KindReport {
    let t = args.temperature;
    let grid = spectral_grid(kind.domain(), wavelengths);
    let values = planck.exitance(kind, &grid, t).to_vec();

    let (peak_index, peak_exitance) = values
        .iter()
        .copied()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |best, (i, v)| if v > best.1 { (i, v) } else { best });
    let peak_location = grid[peak_index];

    let integral = trap_integrate(&grid, &values);
    let stefan_boltzmann = planck.stefan_boltzmann(kind.quantity(), t);

    let derivative = planck
        .derivative(kind, peak_location, t)
        .as_scalar()
        .unwrap_or(f64::NAN);
    let forward = planck
        .exitance(kind, peak_location, t + args.delta_t)
        .as_scalar()
        .unwrap_or(f64::NAN);
    let finite_difference = (forward - peak_exitance) / args.delta_t;

    debug!("{}: integrated {} samples", kind, grid.len());

    KindReport {
        selector: kind.selector(),
        unit: kind.exitance_unit(),
        peak_exitance,
        peak_location,
        wien_location: planck.peak(kind, t),
        integral,
        stefan_boltzmann,
        integral_relative_error: (integral - stefan_boltzmann) / stefan_boltzmann,
        derivative,
        finite_difference,
    }
}

fn print_table(reports: &[KindReport], args: &Args) {
    println!("Blackbody report at {} K", args.temperature);
    println!(
        "Grid: {} points from {} to {} um",
        args.points, args.min_wavelength, args.max_wavelength
    );
    println!();

    for r in reports {
        println!("{} [{}]", r.selector, r.unit);
        println!(
            "  peak        {:.6e} at {:.6e} (Wien {:.6e})",
            r.peak_exitance, r.peak_location, r.wien_location
        );
        println!(
            "  integral    {:.6e} vs {:.6e} (rel. error {:.3e})",
            r.integral, r.stefan_boltzmann, r.integral_relative_error
        );
        println!(
            "  dM/dT       {:.6e} vs forward difference {:.6e}",
            r.derivative, r.finite_difference
        );
        println!();
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let constants = PlanckConstants::global();

    if args.constants {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&*constants)?);
        } else {
            print!("{}", constants);
        }
        return Ok(());
    }

    ensure!(args.points >= 2, "Need at least two grid points, got {}", args.points);
    ensure!(
        args.min_wavelength > 0.0 && args.max_wavelength > args.min_wavelength,
        "Wavelength range must be positive and increasing, got {} to {}",
        args.min_wavelength,
        args.max_wavelength
    );
    ensure!(args.temperature > 0.0, "Temperature must be positive");

    info!(
        "Evaluating {} kinds at {} K on {} points",
        PlanckKind::ALL.len(),
        args.temperature,
        args.points
    );

    let planck = Planck::new(constants);
    let wavelengths = wavelength_grid(args.min_wavelength, args.max_wavelength, args.points);

    let reports: Vec<KindReport> = PlanckKind::ALL
        .par_iter()
        .map(|&kind| report(&planck, kind, &wavelengths, &args))
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print_table(&reports, &args);
    }

    Ok(())
}
