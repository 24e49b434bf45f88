use std::{fs, time::Instant};

use clap::Parser;
use whilst::{
    interpreter::{evaluator::Namespace, value::Value},
    run,
};

/// whilst runs programs written in a minimal imperative while-language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the program file to run.
    path: String,

    /// Initial values bound as `_arg0`, `_arg1`, ... in the program's
    /// namespace. Each must be an integer or `true`/`false`.
    arguments: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let mut namespace = Namespace::new();
    for (index, argument) in args.arguments.iter().enumerate() {
        let Some(value) = coerce_argument(argument) else {
            eprintln!("Argument '{argument}' is neither an integer nor a boolean.");
            std::process::exit(2);
        };
        namespace.insert(format!("_arg{index}"), value);
    }

    let source = fs::read_to_string(&args.path).unwrap_or_else(|_| {
        eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                  &args.path);
        std::process::exit(1);
    });

    let start = Instant::now();
    if let Err(e) = run(&source, &mut namespace) {
        eprintln!("{e}");
        std::process::exit(1);
    }
    println!("{} ms", start.elapsed().as_millis());

    // Names starting with an underscore, the injected arguments included,
    // are hidden from the dump.
    let mut bindings: Vec<_> = namespace.iter()
                                        .filter(|(name, _)| !name.starts_with('_'))
                                        .collect();
    bindings.sort_by(|a, b| a.0.cmp(b.0));
    for (name, value) in bindings {
        println!("{name} := {value}");
    }
}

/// Coerces a command-line argument into an initial binding.
///
/// `true` and `false` become booleans; all-digit strings become integers.
/// Anything else is a usage error, reported before the program runs.
fn coerce_argument(argument: &str) -> Option<Value> {
    match argument {
        "true" => Some(Value::Bool(true)),
        "false" => Some(Value::Bool(false)),
        _ if !argument.is_empty() && argument.chars().all(|c| c.is_ascii_digit()) => {
            argument.parse().ok().map(Value::Integer)
        },
        _ => None,
    }
}
