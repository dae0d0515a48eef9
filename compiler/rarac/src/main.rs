//! Rara CLI

use std::path::Path;

use rarac::commands::{lex_file, list_rules, CommandError};

fn main() {
    rarac::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: rara lex <file>");
                std::process::exit(1);
            }
            exit_on_error(lex_file(Path::new(&args[2])));
        }
        "rules" => {
            exit_on_error(list_rules());
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Rara tokenizer {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn exit_on_error(result: Result<(), CommandError>) {
    if let Err(err) = result {
        eprintln!();
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("Rara tokenizer");
    println!();
    println!("Usage: rara <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>    Tokenize a file and display tokens");
    println!("  rules         List the built-in rule set");
    println!("  help          Show this help message");
    println!("  version       Show version information");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=rara_tokenizer=debug) for scan tracing.");
}
