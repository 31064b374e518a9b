use clap::{Parser, Subcommand};
use std::path::Path;

use soupling_parser::ParseOptions;

#[derive(Parser)]
#[command(name = "soupling")]
#[command(about = "soupling — tolerant HTML-to-tree parser")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse an HTML file and print the node tree as JSON
    Json {
        /// Input HTML file
        path: String,

        /// Keep source positions on each node
        #[arg(long)]
        positions: bool,

        /// Print compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Parse an HTML file and print it re-serialized as markup
    Html {
        /// Input HTML file
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Json {
            path,
            positions,
            compact,
        } => cmd_json(&path, positions, compact),
        Command::Html { path } => cmd_html(&path),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_json(path: &str, positions: bool, compact: bool) {
    let source = read_source(path);

    let options = ParseOptions {
        include_positions: positions,
        ..ParseOptions::default()
    };
    let tree = soupling_parser::parse_with_options(&source, &options);

    let json = if compact {
        serde_json::to_string(&tree)
    } else {
        serde_json::to_string_pretty(&tree)
    };
    match json {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_html(path: &str) {
    let source = read_source(path);

    let tree = soupling_parser::parse(&source);
    println!("{}", soupling_stringify::stringify(&tree));
}
