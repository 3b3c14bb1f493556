//! pmdsort CLI binary entry point.
//! Delegates to modules for sort/check and prints results.

mod check;
mod cli;
mod config;
mod error;
mod format;
mod key;
mod output;
mod reorder;
mod sort;
mod utils;
mod xml;

use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Sort {
            input_file,
            output_file,
            repo_root,
            indent,
            output,
        } => {
            let eff =
                config::resolve_effective(repo_root.as_deref(), output.as_deref(), indent, None);
            match sort::run_sort(
                Path::new(&input_file),
                output_file.as_deref().map(Path::new),
                eff.indent,
            ) {
                Ok(outcome) => {
                    if outcome.wrote {
                        output::print_sort(&outcome, &eff.output);
                    } else {
                        // No destination: the sorted XML itself goes to stdout.
                        print!("{}", outcome.xml);
                    }
                }
                Err(e) => {
                    eprintln!("{} {}", utils::error_prefix(), e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Check {
            patterns,
            repo_root,
            indent,
            output,
        } => {
            let cli_patterns = if patterns.is_empty() {
                None
            } else {
                Some(patterns)
            };
            let eff = config::resolve_effective(
                repo_root.as_deref(),
                output.as_deref(),
                indent,
                cli_patterns,
            );
            // Friendly note if no pmdsort config was found
            if eff.output != "json" && config::load_config(&eff.repo_root).is_none() {
                eprintln!(
                    "{} {}",
                    utils::note_prefix(),
                    "No pmdsort.toml found; using defaults."
                );
            }
            if eff.check_patterns.is_empty() {
                eprintln!(
                    "{} {}",
                    utils::error_prefix(),
                    "No ruleset patterns given. Pass patterns or add [check].patterns to pmdsort.toml."
                );
                std::process::exit(2);
            }
            let (results, errors) = check::run_check(&eff.repo_root, &eff.check_patterns, eff.indent);
            output::print_check(&results, &eff.output, &errors);
            if !errors.is_empty() || results.iter().any(|r| !r.sorted) {
                std::process::exit(1);
            }
        }
    }
}
