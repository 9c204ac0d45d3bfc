//! `sparsemat` command line: combine two matrix files and write the result.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, ValueEnum};

use sparsemat::{MultiplyConfig, MultiplyStrategy, Result, SparseMatrix};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Operation {
    Add,
    Subtract,
    Multiply,
}

/// Combine two sparse matrix files.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// Operation to perform
    #[arg(value_enum)]
    operation: Operation,

    /// Left operand file
    left: PathBuf,

    /// Right operand file
    right: PathBuf,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Worker threads for multiplication
    #[arg(long)]
    threads: Option<usize>,

    /// Never use the parallel multiplication kernel
    #[arg(long)]
    sequential: bool,

    /// Also list every cell, zeros included
    #[arg(long)]
    dense: bool,
}

fn main() {
    let opts = Opts::parse();

    if let Err(err) = run(&opts) {
        eprintln!("error: {}", err);
        exit(1);
    }
}

fn run(opts: &Opts) -> Result<()> {
    eprintln!("Reading {}...", opts.left.display());
    let left: SparseMatrix = SparseMatrix::load(&opts.left)?;
    eprintln!("Reading {}...", opts.right.display());
    let right: SparseMatrix = SparseMatrix::load(&opts.right)?;

    eprintln!(
        "Computing {:?} of {} × {} ({} nnz) and {} × {} ({} nnz)...",
        opts.operation,
        left.rows(),
        left.cols(),
        left.nnz(),
        right.rows(),
        right.cols(),
        right.nnz(),
    );

    let result = match opts.operation {
        Operation::Add => left.add(&right)?,
        Operation::Subtract => left.subtract(&right)?,
        Operation::Multiply => left.multiply_with(&right, &multiply_config(opts))?,
    };

    match &opts.output {
        Some(path) => {
            result.save(path)?;
            eprintln!("Result written to {}", path.display());
        }
        None => result.write_to(io::stdout().lock())?,
    }

    if opts.dense {
        write_all_cells(&result, io::stdout().lock())?;
    }

    Ok(())
}

/// Lists every cell, zeros included, without materializing a dense array
fn write_all_cells<W: Write>(matrix: &SparseMatrix, mut out: W) -> io::Result<()> {
    for row in 0..matrix.rows() {
        for col in 0..matrix.cols() {
            writeln!(out, "({}, {}, {})", row, col, matrix.get_element(row, col))?;
        }
    }
    Ok(())
}

fn multiply_config(opts: &Opts) -> MultiplyConfig {
    let strategy = if opts.sequential {
        MultiplyStrategy::Sequential
    } else {
        MultiplyStrategy::Auto
    };

    let config = MultiplyConfig::for_strategy(strategy);
    match opts.threads {
        Some(n) => config.with_threads(n),
        None => config,
    }
}
