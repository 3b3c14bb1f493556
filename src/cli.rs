//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "pmdsort",
    version,
    about = "Sort PMD ruleset XML files",
    long_about = "pmdsort — a tiny, fast CLI that sorts the rules of a PMD ruleset XML file into a deterministic order and pretty-prints the result.\n\nConfiguration precedence: CLI > pmdsort.toml > defaults.",
    after_help = "Examples:\n  pmdsort sort --input-file pmd-rules.xml\n  pmdsort sort -i pmd-rules.xml -o pmd-rules.xml\n  pmdsort check \"rulesets/*.xml\"",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands for sorting and checking rulesets.
pub enum Commands {
    /// Show version
    #[command(
        about = "Show version",
        long_about = "Print the current pmdsort version."
    )]
    Version,
    /// Sort one ruleset file
    #[command(
        about = "Sort a PMD ruleset",
        long_about = "Reorder the root's children: rule elements ascend by their lowercased ref attribute; other elements (like description) come first in source order. Without --output-file the sorted XML is printed to stdout.",
        after_help = "Examples:\n  pmdsort sort -i pmd-rules.xml\n  pmdsort sort -i pmd-rules.xml -o sorted.xml --indent 4"
    )]
    Sort {
        #[arg(short = 'i', long, help = "The unsorted PMD rule XML file")]
        input_file: String,
        #[arg(
            short = 'o',
            long,
            help = "Write the sorted XML here (overwriting it if it already exists); stdout if omitted"
        )]
        output_file: Option<String>,
        #[arg(long, help = "Repository root for config discovery (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Pretty-print indent width in spaces (default: 2)")]
        indent: Option<usize>,
        #[arg(long, help = "Output mode for status lines: human|json (default: human)")]
        output: Option<String>,
    },
    /// Verify rulesets are already sorted
    #[command(
        about = "Check that rulesets are sorted",
        long_about = "Expand glob patterns relative to the repository root and exit non-zero if any matched ruleset is not already sorted and formatted.",
        after_help = "Examples:\n  pmdsort check \"rulesets/*.xml\"\n  pmdsort check --output json"
    )]
    Check {
        #[arg(help = "Glob patterns of ruleset files (default: [check].patterns from pmdsort.toml)")]
        patterns: Vec<String>,
        #[arg(long, help = "Repository root (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Pretty-print indent width used for comparison (default: 2)")]
        indent: Option<usize>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
