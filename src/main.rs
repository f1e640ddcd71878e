use std::{collections::HashMap, fs};

use clap::Parser;
use formulon::{env::registry::Registry, formula::Formula};

/// formulon evaluates arithmetic formulas with support for variables,
/// functions, and implicit multiplication.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells formulon to read the expression from a file instead of the
    /// command line.
    #[arg(short, long)]
    file: bool,

    /// Defines a variable for the evaluation, in the form `name=value`.
    /// May be given multiple times.
    #[arg(short, long, value_name = "NAME=VALUE")]
    var: Vec<String>,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let mut variables = HashMap::new();

    for assignment in &args.var {
        match parse_assignment(assignment) {
            Some((name, value)) => {
                variables.insert(name, value);
            },
            None => {
                eprintln!("Invalid variable assignment '{assignment}'. Expected name=value.");
                std::process::exit(1);
            },
        }
    }

    let registry = Registry::with_builtins();

    match Formula::new(&expression, &registry) {
        Ok(formula) => match formula.evaluate_with(&variables) {
            Ok(value) => println!("{value}"),
            Err(e) => eprintln!("{e}"),
        },
        Err(e) => eprintln!("{e}"),
    }
}

/// Splits a `name=value` assignment into its parts.
fn parse_assignment(assignment: &str) -> Option<(String, f64)> {
    let (name, value) = assignment.split_once('=')?;
    let value = value.trim().parse().ok()?;

    Some((name.trim().to_owned(), value))
}
