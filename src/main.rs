use std::{io, process};

use clap::Parser;
use pyhton::{
    error::Error,
    interpreter::{
        evaluator::core::Interpreter,
        lexer::{Token, tokenize},
        parser::parse,
        typo::typos_of,
    },
    loader::load_source,
};

/// pyhton runs programs in a Python-like language whose keywords must be
/// typed as typos: `deff`, `retrn`, `prrint`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a `.yp` program.
    #[arg(required_unless_present_any = ["eval", "typos"], conflicts_with = "eval")]
    path: Option<String>,

    /// Runs the given source text instead of a file.
    #[arg(short, long, value_name = "SOURCE")]
    eval: Option<String>,

    /// Dumps the tokens and the parsed statements to stderr before running.
    #[arg(short, long)]
    debug: bool,

    /// Lists every accepted typo of a word and exits.
    #[arg(long, value_name = "WORD")]
    typos: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Some(word) = &args.typos {
        for typo in typos_of(word) {
            println!("{typo}");
        }
        return;
    }

    let source = match (&args.eval, &args.path) {
        (Some(source), _) => source.clone(),
        (None, Some(path)) => load_source(path).unwrap_or_else(|e| {
                                                   eprintln!("{e}");
                                                   process::exit(1);
                                               }),
        (None, None) => return,
    };

    if let Err(e) = execute(&source, args.debug) {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn execute(source: &str, debug: bool) -> Result<(), Error> {
    let tokens = tokenize(source);
    if debug {
        dump_tokens(&tokens);
    }

    let program = parse(&tokens)?;
    if debug {
        eprintln!("statements: {}", program.statements.len());
        for (i, statement) in program.statements.iter().enumerate() {
            eprintln!("{:>4}. [line {}] {statement:?}", i + 1, statement.line_number());
        }
    }

    Interpreter::with_output(io::stdout()).interpret(&program)?;
    Ok(())
}

fn dump_tokens(tokens: &[Token]) {
    eprintln!("tokens: {}", tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        eprintln!("{:>4}. {:<14} {:<16} {}:{}",
                  i + 1,
                  format!("{:?}", token.kind),
                  token.to_string(),
                  token.line,
                  token.column);
    }
}
