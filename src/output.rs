//! Output rendering for the sort and check commands.
//!
//! Supports `human` (default) and `json` outputs. JSON composition lives
//! in pure helpers so the shapes can be asserted in tests.

use crate::check::CheckResult;
use crate::sort::SortOutcome;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print the status of a sort that wrote its destination file.
/// (Sorts without a destination emit the XML itself instead.)
pub fn print_sort(outcome: &SortOutcome, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_sort_json(outcome)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            let target = outcome.output.as_deref().unwrap_or("-");
            if color {
                println!(
                    "{} {} -> {}",
                    "✏️  sorted:".green().bold(),
                    outcome.input.bold(),
                    target.bold()
                );
            } else {
                println!("✏️  sorted: {} -> {}", outcome.input, target);
            }
        }
    }
}

/// Print check results in the requested format; per-file errors go to
/// stderr in human mode and into the JSON payload otherwise.
pub fn print_check(results: &[CheckResult], output: &str, errors: &[String]) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_check_json(results, errors)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            for r in results {
                if r.sorted {
                    if color {
                        println!("{} {}", "✔ sorted:".green(), r.file);
                    } else {
                        println!("✔ sorted: {}", r.file);
                    }
                } else if color {
                    println!("{} {}", "✖ unsorted:".red().bold(), r.file.clone().bold());
                } else {
                    println!("✖ unsorted: {}", r.file);
                }
            }
            for e in errors {
                eprintln!("{} {}", crate::utils::error_prefix(), e);
            }
            let summary = format!(
                "— Summary — sorted={} unsorted={} errors={} files={}",
                results.iter().filter(|r| r.sorted).count(),
                results.iter().filter(|r| !r.sorted).count(),
                errors.len(),
                results.len()
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Compose sort JSON object (pure) for testing/snapshot purposes.
pub fn compose_sort_json(outcome: &SortOutcome) -> JsonVal {
    json!({
        "input": outcome.input,
        "output": outcome.output,
        "wrote": outcome.wrote,
    })
}

/// Compose check JSON object (pure) for testing/snapshot purposes.
pub fn compose_check_json(results: &[CheckResult], errors: &[String]) -> JsonVal {
    let items: Vec<_> = results
        .iter()
        .map(|r| json!({"file": r.file, "sorted": r.sorted}))
        .collect();
    let summary = json!({
        "sorted": results.iter().filter(|r| r.sorted).count(),
        "unsorted": results.iter().filter(|r| !r.sorted).count(),
        "errors": errors.len(),
        "files": results.len(),
    });
    json!({"results": items, "errors": errors, "summary": summary})
}
