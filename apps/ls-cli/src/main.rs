use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use ls_analysis::{MassSpringDamper, StepInput, TransferFunction, derive_parameters};
use ls_response::{
    InitialConditions, TimeGrid, free_response_series, impulse_response, pole_zero_map,
    step_response,
};

#[derive(Parser)]
#[command(name = "ls-cli")]
#[command(about = "LinSys CLI - first/second order linear system analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive step-response parameters for a transfer function
    Analyze {
        /// Numerator coefficients, descending powers of s, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        num: Vec<f64>,
        /// Denominator coefficients, descending powers of s, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        den: Vec<f64>,
        /// Step input amplitude
        #[arg(long, default_value_t = 1.0)]
        amplitude: f64,
        /// Emit JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
    /// Simulate a step response and export it as CSV
    Step {
        #[arg(long, value_delimiter = ',', required = true)]
        num: Vec<f64>,
        #[arg(long, value_delimiter = ',', required = true)]
        den: Vec<f64>,
        /// Step input amplitude
        #[arg(long, default_value_t = 1.0)]
        amplitude: f64,
        /// End time in seconds
        #[arg(long)]
        t_end: f64,
        /// Time step in seconds
        #[arg(long, default_value_t = 0.01)]
        dt: f64,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Simulate an impulse response and export it as CSV
    Impulse {
        #[arg(long, value_delimiter = ',', required = true)]
        num: Vec<f64>,
        #[arg(long, value_delimiter = ',', required = true)]
        den: Vec<f64>,
        /// End time in seconds
        #[arg(long)]
        t_end: f64,
        /// Time step in seconds
        #[arg(long, default_value_t = 0.01)]
        dt: f64,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print pole and zero locations
    Pzmap {
        #[arg(long, value_delimiter = ',', required = true)]
        num: Vec<f64>,
        #[arg(long, value_delimiter = ',', required = true)]
        den: Vec<f64>,
    },
    /// Classify a mass-spring-damper and export its free vibration as CSV
    Free {
        /// Mass in kg
        #[arg(long)]
        mass: f64,
        /// Spring constant in N/m
        #[arg(long)]
        stiffness: f64,
        /// Damping coefficient in N*s/m
        #[arg(long)]
        damping: f64,
        /// Initial displacement in m
        #[arg(long, default_value_t = 1.0)]
        x0: f64,
        /// Initial velocity in m/s
        #[arg(long, default_value_t = 0.0)]
        v0: f64,
        /// End time in seconds
        #[arg(long)]
        t_end: f64,
        /// Time step in seconds
        #[arg(long, default_value_t = 0.01)]
        dt: f64,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            num,
            den,
            amplitude,
            json,
        } => cmd_analyze(num, den, amplitude, json),
        Commands::Step {
            num,
            den,
            amplitude,
            t_end,
            dt,
            output,
        } => cmd_step(num, den, amplitude, t_end, dt, output.as_deref()),
        Commands::Impulse {
            num,
            den,
            t_end,
            dt,
            output,
        } => cmd_impulse(num, den, t_end, dt, output.as_deref()),
        Commands::Pzmap { num, den } => cmd_pzmap(num, den),
        Commands::Free {
            mass,
            stiffness,
            damping,
            x0,
            v0,
            t_end,
            dt,
            output,
        } => cmd_free(mass, stiffness, damping, x0, v0, t_end, dt, output.as_deref()),
    }
}

fn cmd_analyze(num: Vec<f64>, den: Vec<f64>, amplitude: f64, json: bool) -> AppResult<()> {
    let tf = TransferFunction::from_coefficients(num, den)?;
    let input = StepInput::new(amplitude)?;
    let params = derive_parameters(&tf, &input)?;

    if json {
        println!("{}", ls_report::parameters_to_json(&params)?);
    } else {
        println!("Analyzing {} (step of {:.2})", tf, amplitude);
        print!("{}", ls_report::parameter_report(&params));
    }
    Ok(())
}

fn cmd_step(
    num: Vec<f64>,
    den: Vec<f64>,
    amplitude: f64,
    t_end: f64,
    dt: f64,
    output: Option<&Path>,
) -> AppResult<()> {
    let tf = TransferFunction::from_coefficients(num, den)?;
    let grid = TimeGrid::new(t_end, dt)?;
    let series = step_response(&tf, &grid, amplitude)?;
    write_series(&series, output)
}

fn cmd_impulse(
    num: Vec<f64>,
    den: Vec<f64>,
    t_end: f64,
    dt: f64,
    output: Option<&Path>,
) -> AppResult<()> {
    let tf = TransferFunction::from_coefficients(num, den)?;
    let grid = TimeGrid::new(t_end, dt)?;
    let series = impulse_response(&tf, &grid)?;
    write_series(&series, output)
}

fn cmd_pzmap(num: Vec<f64>, den: Vec<f64>) -> AppResult<()> {
    let tf = TransferFunction::from_coefficients(num, den)?;
    let map = pole_zero_map(&tf)?;
    print!("{}", ls_report::pole_zero_report(&map));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_free(
    mass: f64,
    stiffness: f64,
    damping: f64,
    x0: f64,
    v0: f64,
    t_end: f64,
    dt: f64,
    output: Option<&Path>,
) -> AppResult<()> {
    let msd = MassSpringDamper::new(mass, stiffness, damping)?;
    let ic = InitialConditions::new(x0, v0)?;
    let grid = TimeGrid::new(t_end, dt)?;

    tracing::info!(zeta = msd.damping_ratio(), "classified damping case");
    println!(
        "Damping case: {} (zeta = {:.2}, wn = {:.2} rad/s)",
        msd.case(),
        msd.damping_ratio(),
        msd.natural_frequency()
    );

    let series = free_response_series(&msd, &ic, &grid);
    write_series(&series, output)
}

fn write_series(series: &[ls_response::ResponsePoint], output: Option<&Path>) -> AppResult<()> {
    let csv = ls_report::series_to_csv(series);
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Exported {} data points to {}", series.len(), path.display());
    } else {
        print!("{}", csv);
    }
    Ok(())
}

/// Application error type that wraps errors from the backend crates and
/// surfaces them with a nonzero exit.
#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("Analysis error: {0}")]
    Analysis(#[from] ls_analysis::AnalysisError),

    #[error("Response error: {0}")]
    Response(#[from] ls_response::ResponseError),

    #[error("Export error: {0}")]
    Export(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

type AppResult<T> = Result<T, AppError>;
