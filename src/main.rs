use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rootlog::export::export_csv;
use rootlog::functions::angle_equation;
use rootlog::root_finding::algorithms::{
    Method, DEFAULT_LEFT, DEFAULT_MAX_ITER, DEFAULT_RIGHT, DEFAULT_TOLERANCE,
};
use rootlog::root_finding::muller::RootSelection;
use rootlog::root_finding::RootFinder;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Selection {
    Closest,
    Smallest,
}

impl From<Selection> for RootSelection {
    fn from(s: Selection) -> Self {
        match s {
            Selection::Closest  => RootSelection::Closest,
            Selection::Smallest => RootSelection::Smallest,
        }
    }
}

/// Solve the sample angle equation and print the iteration table.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Method tag: bisection, muller or regula
    #[arg(long, default_value = "muller", value_parser = clap::value_parser!(Method))]
    method: Method,

    /// Left end of the starting bracket
    #[arg(long, default_value_t = DEFAULT_LEFT, allow_negative_numbers = true)]
    xl: f64,

    /// Right end of the starting bracket
    #[arg(long, default_value_t = DEFAULT_RIGHT, allow_negative_numbers = true)]
    xr: f64,

    /// Convergence tolerance
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Iteration cap
    #[arg(long, default_value_t = DEFAULT_MAX_ITER)]
    max_iter: usize,

    /// Rule for picking between two real roots (Muller)
    #[arg(long, value_enum, default_value_t = Selection::Closest)]
    selection: Selection,

    /// Run bisection/regula falsi even if f(xl) and f(xr) share a sign
    #[arg(long)]
    no_sign_check: bool,

    /// Write the trace to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let method = cli.method;

    let finder = RootFinder::new()
        .set_bracket(cli.xl, cli.xr)?
        .set_tolerance(cli.tolerance)?
        .set_max_iter(cli.max_iter)?
        .with_sign_check(!cli.no_sign_check)
        .with_selection(cli.selection.into());

    let report = finder
        .solve(method, angle_equation)
        .with_context(|| format!("{method} failed on [{}, {}]", cli.xl, cli.xr))?;

    print!("{}", report.trace);
    println!("{report}");

    if let Some(path) = cli.csv {
        export_csv(&report.trace, &path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "trace written");
    }

    Ok(())
}
