//! Command-line interface for cdl
//! This binary parses cdl files and prints them back out in the requested
//! representation.
//!
//! Usage:
//!   cdl `<path>` [--format `<format>`]   - Parse a file and print it

use clap::{Arg, Command};
use cdl::cdl::ast::Node;
use cdl::cdl::lexing::tokenize;

fn main() {
    let matches = Command::new("cdl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting cdl files")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the cdl file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: json (canonical), pretty (indented), tokens (token dump)")
                .default_value("json"),
        )
        .get_matches();

    let path = matches
        .get_one::<String>("path")
        .expect("path is required");
    let format = matches.get_one::<String>("format").expect("has default");

    let source = std::fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("cannot read {}: {}", path, e);
        std::process::exit(1);
    });

    match format.as_str() {
        "json" | "pretty" => {
            let object = cdl::parse(&source).unwrap_or_else(|e| {
                eprintln!("{}", e);
                std::process::exit(1);
            });
            if format == "json" {
                println!("{}", object.to_json());
            } else {
                println!("{}", object.to_formatted_json(0));
            }
        }
        "tokens" => {
            let tokens = tokenize(&source).unwrap_or_else(|e| {
                eprintln!("{}", e);
                std::process::exit(1);
            });
            let rendered = serde_json::to_string_pretty(&tokens).unwrap_or_else(|e| {
                eprintln!("error formatting tokens: {}", e);
                std::process::exit(1);
            });
            println!("{}", rendered);
        }
        other => {
            eprintln!("unknown format '{}'", other);
            eprintln!("available formats: json, pretty, tokens");
            std::process::exit(1);
        }
    }
}
