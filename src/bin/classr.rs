//! Command-line front end for classr.
//!
//! Collects an N×N grid of complex-literal tokens (arguments, stdin, or a
//! named example preset), classifies the matrix, and prints one label per
//! line. Any token that fails to parse yields a single generic
//! invalid-input message; no cell is singled out.

use std::io::Read;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use classr::classify::{classify, Tolerance};
use classr::complex::{parse_complex, Complex};
use classr::matrix::Matrix;

/// Classify a square complex matrix as Hermitian, unitary, both, or neither.
#[derive(Parser)]
#[command(name = "classr", version, about)]
struct Cli {
    /// Side length of the matrix
    #[arg(long, default_value_t = 2)]
    size: usize,

    /// Load a named 2x2 example instead of explicit cells
    #[arg(long, value_enum, conflicts_with = "cells")]
    example: Option<Example>,

    /// Absolute tolerance for approximate equality
    #[arg(long, default_value_t = 1e-8)]
    atol: f64,

    /// Relative tolerance for approximate equality
    #[arg(long, default_value_t = 1e-5)]
    rtol: f64,

    /// size*size cell tokens in row-major order, e.g. `0 1 1 0` or `3+2j`.
    /// Read as whitespace-separated tokens from stdin when omitted.
    #[arg(allow_hyphen_values = true)]
    cells: Vec<String>,
}

#[derive(Copy, Clone, ValueEnum)]
enum Example {
    /// 2x2 identity
    Identity,
    /// [[0, 1], [1, 0]]
    PauliX,
    /// [[0, -i], [i, 0]]
    PauliY,
    /// [[1, 0], [0, -1]]
    PauliZ,
    /// [[2, 1], [3, 4]] - neither Hermitian nor unitary
    Neither,
}

impl Example {
    fn cells(self) -> &'static [&'static str] {
        match self {
            Example::Identity => &["1", "0", "0", "1"],
            Example::PauliX => &["0", "1", "1", "0"],
            Example::PauliY => &["0", "-i", "i", "0"],
            Example::PauliZ => &["1", "0", "0", "-1"],
            Example::Neither => &["2", "1", "3", "4"],
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (size, tokens) = match gather_tokens(&cli) {
        Ok(input) => input,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(2);
        }
    };

    let cells: Result<Vec<Complex>, _> =
        tokens.iter().map(|t| parse_complex(t)).collect();
    let Ok(cells) = cells else {
        eprintln!("Invalid input. Please ensure all matrix elements are in the correct complex format.");
        return ExitCode::FAILURE;
    };

    let matrix = match Matrix::from_vec(size, cells) {
        Ok(m) => m,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    println!("The matrix is classified as:");
    for kind in classify(&matrix, Tolerance::new(cli.atol, cli.rtol)) {
        println!("{kind}");
    }
    ExitCode::SUCCESS
}

/// Resolve the input grid: preset, explicit cells, or stdin tokens.
fn gather_tokens(cli: &Cli) -> Result<(usize, Vec<String>), String> {
    if let Some(example) = cli.example {
        let tokens = example.cells().iter().map(|t| t.to_string()).collect();
        return Ok((2, tokens));
    }

    let tokens = if cli.cells.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .map_err(|err| format!("failed to read stdin: {err}"))?;
        input.split_whitespace().map(str::to_string).collect()
    } else {
        cli.cells.clone()
    };

    let expected = cli.size * cli.size;
    if cli.size == 0 || tokens.len() != expected {
        return Err(format!(
            "expected {expected} cells for a {n}x{n} matrix, got {actual}",
            n = cli.size,
            actual = tokens.len(),
        ));
    }
    Ok((cli.size, tokens))
}
