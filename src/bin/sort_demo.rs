//! Prints the effect of each sorting algorithm on a few small inputs.
//!
//! Usage:
//!   sort_demo                                  All algorithms on the built-in inputs
//!   sort_demo -a merge -a quick                Only merge sort and quicksort
//!   sort_demo --values 9,-3,7,7,0              Custom input
//!   sort_demo --count-comparisons              Also report comparison counts
//!
//! Set RUST_LOG=debug to see stability and complexity of every algorithm.

use anyhow::{bail, Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};

use classic_sorts::Algorithm;

const DEFAULT_INPUTS: [[i32; 5]; 5] = [
    [64, 34, 25, 12, 22],
    [5, 2, 8, 1, 9],
    [1, 2, 3, 4, 5],
    [5, 4, 3, 2, 1],
    [3, 1, 3, 2, 1],
];

#[derive(Parser, Debug)]
#[command(version, about = "Run the classic comparison sorts on small integer inputs")]
struct Args {
    /// Algorithm to run, may be given multiple times. Runs all of them if omitted.
    #[arg(short, long = "algorithm", value_name = "NAME")]
    algorithms: Vec<Algorithm>,

    /// Comma separated integers to sort instead of the built-in inputs.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    values: Option<Vec<i32>>,

    /// Report how many comparisons each run performed.
    #[arg(long)]
    count_comparisons: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let algorithms = if args.algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        args.algorithms
    };

    let inputs = match args.values {
        Some(values) => vec![values],
        None => DEFAULT_INPUTS.iter().map(|input| input.to_vec()).collect(),
    };

    info!(
        "Running {} on {} input(s)",
        algorithms
            .iter()
            .map(Algorithm::name)
            .collect::<Vec<_>>()
            .join(", "),
        inputs.len()
    );

    for algorithm in &algorithms {
        let complexity = algorithm.complexity();
        debug!(
            "{algorithm}: stable={}, best={}, average={}, worst={}, space={}",
            algorithm.is_stable(),
            complexity.best,
            complexity.average,
            complexity.worst,
            complexity.space
        );

        for input in &inputs {
            run(*algorithm, input, args.count_comparisons)
                .with_context(|| format!("{algorithm} failed on {input:?}"))?;
        }
    }

    Ok(())
}

fn run(algorithm: Algorithm, input: &[i32], count_comparisons: bool) -> Result<()> {
    let mut v = input.to_vec();
    let mut comp_count = 0u64;

    algorithm.sort_by(&mut v, |a, b| {
        comp_count += 1;
        a.cmp(b)
    });

    if !v.windows(2).all(|w| w[0] <= w[1]) {
        bail!("output is not sorted: {v:?}");
    }

    if count_comparisons {
        println!("{algorithm}: {input:?} -> {v:?} ({comp_count} comparisons)");
    } else {
        println!("{algorithm}: {input:?} -> {v:?}");
    }

    Ok(())
}
