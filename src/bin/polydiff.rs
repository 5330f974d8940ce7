//! Command-line interface for latex_polydiff
//! Differentiates products of two LaTeX polynomials.
//!
//! Usage:
//!   polydiff "(2x^2 + 3x + 1)(x - 4)"          - Print the derivative
//!   polydiff --steps "(x + 1)(x - 1)"          - Show every pipeline stage
//!   echo "(x)(x)" | polydiff --json            - One expression per stdin line
//!
//! Logging goes to stderr and is controlled by `POLYDIFF_LOG`
//! (e.g. `POLYDIFF_LOG=latex_polydiff=debug`).

use clap::{Parser, ValueEnum};
use latex_polydiff::{Delimiters, Derivation, ProductDiff, Term};
use std::io::{self, BufRead};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "POLYDIFF_LOG";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DelimiterArg {
    /// $$...$$
    Display,
    /// $...$
    Inline,
    /// No delimiters
    None,
}

impl From<DelimiterArg> for Delimiters {
    fn from(arg: DelimiterArg) -> Self {
        match arg {
            DelimiterArg::Display => Delimiters::Display,
            DelimiterArg::Inline => Delimiters::Inline,
            DelimiterArg::None => Delimiters::None,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "polydiff",
    version,
    about = "Differentiate the product of two LaTeX polynomials"
)]
struct Cli {
    /// Expressions like "(2x^2 + 3x + 1)(x - 4)"; read from stdin when omitted
    exprs: Vec<String>,

    /// Polynomial variable
    #[arg(short, long, default_value = "x")]
    variable: String,

    /// Remove zero-coefficient terms left by multiplication
    #[arg(long)]
    drop_zeros: bool,

    /// Math delimiters around the result
    #[arg(long, value_enum, default_value_t = DelimiterArg::Display)]
    delimiters: DelimiterArg,

    /// Print every pipeline stage
    #[arg(long, conflicts_with = "json")]
    steps: bool,

    /// Print each derivation as a JSON object
    #[arg(long)]
    json: bool,
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// `[(2, 2), (3, 1)]`
fn tuple_list(terms: &[Term]) -> String {
    let pairs: Vec<String> = terms
        .iter()
        .map(|t| format!("({}, {})", t.coeff, t.exp))
        .collect();
    format!("[{}]", pairs.join(", "))
}

fn print_steps(d: &Derivation) {
    println!("Polynomial 1: {}", d.first_factor);
    println!("Polynomial 2: {}", d.second_factor);
    println!("Terms 1: {}", tuple_list(&d.first_terms));
    println!("Terms 2: {}", tuple_list(&d.second_terms));
    println!("Product: {}", tuple_list(&d.product));
    println!("Derivative: {}", tuple_list(&d.derivative));
    println!("Result: {}", d.latex);
}

/// Handle one expression; returns false if it was rejected
fn handle_expr(builder: &ProductDiff, cli: &Cli, expr: &str) -> bool {
    match builder.derive(expr) {
        Ok(d) if cli.json => match serde_json::to_string(&d) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                eprintln!("error: cannot serialize result: {}", e);
                return false;
            }
        },
        Ok(d) if cli.steps => print_steps(&d),
        Ok(d) => println!("{}", d.latex),
        Err(e) => {
            eprintln!("error: {}: {}", expr, e);
            return false;
        }
    }
    true
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let builder = ProductDiff::new()
        .variable(cli.variable.clone())
        .drop_zero_terms(cli.drop_zeros)
        .delimiters(cli.delimiters.into());

    let mut all_ok = true;
    if cli.exprs.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    eprintln!("error: cannot read stdin: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            let expr = line.trim();
            if expr.is_empty() {
                continue;
            }
            all_ok &= handle_expr(&builder, &cli, expr);
        }
    } else {
        for expr in &cli.exprs {
            all_ok &= handle_expr(&builder, &cli, expr);
        }
    }

    if all_ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
