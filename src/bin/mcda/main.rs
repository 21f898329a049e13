// src/bin/mcda/main.rs
//
// Command-line entrypoint: ranks the alternatives of a CSV decision matrix
// with one of the supported methods.

mod output;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use mcda_rs::{
    bounds_from_matrix, criterion_types, AlternativeTable, BoundsMatrix, Mabac, McdaMethod,
    Normalization, Spotis, Topsis, Vikor, VikorConfig,
};
use ndarray::Array1;
use output::OutputFormat;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Ranking method to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Method {
    Topsis,
    Vikor,
    Mabac,
    Spotis,
}

/// Multi-criteria decision analysis on a CSV decision matrix.
#[derive(Parser, Debug)]
#[command(name = "mcda", version, about)]
struct Cli {
    #[arg(value_enum)]
    method: Method,

    /// CSV file with a header row, one alternative per row.
    #[arg(short, long)]
    input: PathBuf,

    /// Column holding alternative names; alternatives are numbered when omitted.
    #[arg(long)]
    label_column: Option<String>,

    /// Restrict (and order) the criteria to these columns.
    #[arg(long, value_delimiter = ',')]
    criteria: Option<Vec<String>>,

    /// Criterion types: 1 for profit, -1 for cost, one per criterion.
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    types: Vec<i8>,

    /// Criterion weights; equal weights when omitted.
    #[arg(short, long, value_delimiter = ',')]
    weights: Option<Vec<f64>>,

    /// Column normalization for TOPSIS, VIKOR and MABAC.
    #[arg(short, long, default_value = "minmax")]
    normalization: Normalization,

    /// VIKOR strategy weight.
    #[arg(long, default_value_t = 0.5)]
    v: f64,

    /// SPOTIS bounds as `min:max` per criterion; taken from the data when omitted.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    bounds: Option<Vec<String>>,

    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Decimal places in the output.
    #[arg(long, default_value_t = 4)]
    precision: usize,

    /// Increase log verbosity (once info, twice debug, three times trace). RUST_LOG takes precedence.
    #[arg(long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_bounds(specs: &[String]) -> Result<BoundsMatrix> {
    let mut values = Vec::with_capacity(specs.len() * 2);
    for spec in specs {
        let (lo, hi) = spec
            .split_once(':')
            .with_context(|| format!("bound '{}' is not in min:max form", spec))?;
        values.push(lo.trim().parse::<f64>().with_context(|| format!("invalid lower bound in '{}'", spec))?);
        values.push(hi.trim().parse::<f64>().with_context(|| format!("invalid upper bound in '{}'", spec))?);
    }
    Ok(BoundsMatrix::from_shape_vec((specs.len(), 2), values)?)
}

/// Equal weights `1/m`, unrounded.
fn default_weights(m: usize) -> Array1<f64> {
    Array1::from_elem(m, 1.0 / m as f64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut table = AlternativeTable::from_path(&cli.input, cli.label_column.as_deref())
        .with_context(|| format!("failed to load {}", cli.input.display()))?;
    if let Some(names) = &cli.criteria {
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        table = table.select(&names)?;
    }

    let m = table.criteria.len();
    if cli.types.len() != m {
        bail!("{} criterion types given for {} criteria", cli.types.len(), m);
    }
    let types = criterion_types(&cli.types);
    let weights = match &cli.weights {
        Some(w) => Array1::from(w.clone()),
        None => default_weights(m),
    };
    let matrix = table.matrix.clone();
    info!(method = ?cli.method, alternatives = matrix.nrows(), criteria = m, "ranking");

    let ranking = match cli.method {
        Method::Topsis => Topsis::new(matrix, weights, types, cli.normalization)?.rank()?,
        Method::Vikor => {
            let config = VikorConfig { v: cli.v };
            Vikor::new(matrix, weights, types, cli.normalization, Some(config))?.rank()?
        }
        Method::Mabac => Mabac::new(matrix, weights, types, cli.normalization)?.rank()?,
        Method::Spotis => {
            let bounds = match &cli.bounds {
                Some(specs) => parse_bounds(specs)?,
                None => bounds_from_matrix(matrix.view()),
            };
            Spotis::new(matrix, weights, types, bounds)?.rank()?
        }
    };

    println!("{}", output::render(cli.format, &table.labels, &ranking, cli.precision)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_accept_leading_cost_criterion() {
        let cli = Cli::try_parse_from([
            "mcda",
            "mabac",
            "-i",
            "data/vans.csv",
            "--label-column",
            "code",
            "-t",
            "-1,1,1,1,-1,-1,1,1,1,1",
        ])
        .unwrap();
        assert_eq!(cli.method, Method::Mabac);
        assert_eq!(cli.types, vec![-1, 1, 1, 1, -1, -1, 1, 1, 1, 1]);
        assert_eq!(cli.label_column.as_deref(), Some("code"));
    }

    #[test]
    fn bounds_accept_negative_values() {
        let cli = Cli::try_parse_from(["mcda", "spotis", "-i", "x.csv", "-t", "1,-1", "--bounds", "-5:12,-6:10"])
            .unwrap();
        let bounds = parse_bounds(cli.bounds.as_deref().unwrap()).unwrap();
        assert_eq!(bounds, ndarray::array![[-5.0, 12.0], [-6.0, 10.0]]);
    }

    #[test]
    fn default_weights_are_equal_and_sum_to_one() {
        let weights = default_weights(10);
        assert!(weights.iter().all(|&w| w == 0.1));
        assert!((default_weights(3).sum() - 1.0).abs() < 1e-12);
    }
}
