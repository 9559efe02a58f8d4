//! Command-line front end for the suanjing lexer.
//!
//! Tokenizes each passage given on the command line (or read from stdin, one
//! passage per line), prints a numbered token dump, and finishes with the
//! accumulated symbol table.

use clap::{Arg, ArgAction, Command};
use colored::{ColoredString, Colorize};
use std::io::{self, Read};
use std::process;
use suanjing::{Category, Lexer};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let matches = Command::new("suanjing")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenize passages of the classical arithmetic register")
        .arg(
            Arg::new("passage")
                .help("Passages to tokenize; reads stdin, one passage per line, when absent")
                .num_args(0..),
        )
        .arg(
            Arg::new("numerals")
                .long("numerals")
                .short('n')
                .help("Path to the numeral grammar resource")
                .default_value("numerals.txt"),
        )
        .arg(
            Arg::new("summary")
                .long("summary")
                .help("Print one `CATEGORY: 'text'` line per passage instead of the token dump")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let numerals = matches.get_one::<String>("numerals").unwrap();
    let mut lexer = Lexer::from_numeral_file(numerals).unwrap_or_else(|err| {
        eprintln!("suanjing: {}", err);
        process::exit(1);
    });

    let passages: Vec<String> = match matches.get_many::<String>("passage") {
        Some(values) => values.cloned().collect(),
        None => read_stdin_passages().unwrap_or_else(|err| {
            eprintln!("suanjing: failed to read stdin: {}", err);
            process::exit(1);
        }),
    };

    let results = lexer.tokenize_texts(passages.iter().map(String::as_str));

    let mut failed = false;
    let mut count = 0;
    for result in &results {
        if matches.get_flag("summary") {
            println!("{}", result.summary());
        } else {
            for token in &result.tokens {
                count += 1;
                println!(
                    "Token {}: Type='{}', Value='{}'",
                    count,
                    paint(token.category),
                    token.text
                );
            }
        }
        if let Some(failure) = &result.failure {
            failed = true;
            eprintln!("suanjing: {}", failure);
        }
    }

    if !matches.get_flag("summary") {
        print_symbols(&lexer);
    }
    if failed {
        process::exit(2);
    }
}

fn read_stdin_passages() -> io::Result<Vec<String>> {
    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;
    Ok(input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}

fn print_symbols(lexer: &Lexer) {
    if lexer.symbols().is_empty() {
        println!("Symbol table is empty.");
        return;
    }
    let mut entries: Vec<_> = lexer.symbols().iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    for (text, category) in entries {
        println!("Symbol: {}, Type: {}", text, paint(category));
    }
}

fn paint(category: Category) -> ColoredString {
    let name = category.name();
    match category {
        Category::Number => name.cyan(),
        Category::Lexeme => name.green(),
        Category::Type => name.yellow(),
        Category::Prefix => name.magenta(),
        Category::Unit => name.blue(),
        Category::Question => name.red(),
        Category::Function => name.bright_purple(),
        Category::Punctuation => name.white(),
        Category::Other => name.dimmed(),
    }
}
