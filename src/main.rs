// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use anyhow::{Context, Result};
use clap::Parser;
use ice_lattice::geometry::boundary::{parse_flags, Boundary};
use ice_lattice::geometry::Lattice;
use ice_lattice::{PartitionSearch, PathCheck, SearchConfig, WeightVector};
use tracing_subscriber::EnvFilter;

/// Enumerate six-vertex lattices and print their partition function.
#[derive(Parser, Debug)]
#[command(name = "ice", version, about)]
struct Cli {
    /// Number of rows (one variable x{row} each).
    #[arg(short, long, default_value_t = 3)]
    rows: usize,

    /// Number of columns.
    #[arg(short, long, default_value_t = 3)]
    columns: usize,

    /// Rows at which a path enters from the left, row 0 first, as 0/1 or f/t.
    #[arg(short, long, default_value = "001")]
    inputs: String,

    /// Columns at which a path leaves at the top, column 0 first, as 0/1 or f/t.
    #[arg(short, long, default_value = "001")]
    outputs: String,

    /// Only print the partition function.
    #[arg(short, long)]
    quiet: bool,

    /// Reject lattices whose terminal paths do not connect.
    #[arg(long)]
    enforce_paths: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let inputs = parse_flags(&cli.inputs)
        .with_context(|| format!("invalid --inputs {:?}", cli.inputs))?;
    let outputs = parse_flags(&cli.outputs)
        .with_context(|| format!("invalid --outputs {:?}", cli.outputs))?;
    let boundary = Boundary::checked(cli.rows, cli.columns, inputs, outputs)
        .context("invalid boundary")?;

    let path_check = if cli.enforce_paths {
        PathCheck::Enforce
    } else {
        PathCheck::Ignore
    };
    let mut search = PartitionSearch::new(cli.rows, cli.columns, boundary)
        .with_config(SearchConfig::new().with_path_check(path_check));
    if !cli.quiet {
        search = search.on_leaf(|lattice, weight| print!("{}", render_leaf(lattice, weight)));
    }

    let partition_function = search.run().partition_function();
    if partition_function.is_empty() {
        println!("There were no lattices that satisfy the entered constraints.");
    } else {
        println!("partition function = {}", partition_function);
    }
    Ok(())
}

/// One accepted lattice followed by its weight and two blank lines.
fn render_leaf(lattice: &Lattice, weight: &WeightVector) -> String {
    format!("{}\nboltzmann-weight = {}\n\n\n", lattice, weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ice_lattice::geometry::SHAPES;

    #[test]
    fn test_render_leaf_layout() {
        let lattice = Lattice::from_rows(vec![vec![SHAPES[0]]]).unwrap();
        let weight = WeightVector::from(vec![1, 0]);
        let expected = "  0\n  ^\n>>x< x0\n  v\n\nboltzmann-weight = 1\n\n\n";
        assert_eq!(render_leaf(&lattice, &weight), expected);
    }
}
