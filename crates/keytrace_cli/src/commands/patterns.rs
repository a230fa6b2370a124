//! Patterns command - lists the built-in signature catalog.

use console::style;
use keytrace_core::pattern::{Pattern, PatternCatalog};

use crate::ui::{colors, print_command_header};

/// Lists built-in detection signatures.
pub fn run(verbose: bool) -> super::Result {
    print_command_header("patterns");

    let catalog = PatternCatalog::builtin()?;

    println!("{}", colors::muted().apply_to(format!("{} signatures", catalog.len())));

    if verbose {
        for pattern in catalog.patterns() {
            print_detail(pattern);
        }
    } else {
        println!();
        for pattern in catalog.patterns() {
            print_row(pattern);
        }
    }

    println!();
    Ok(())
}

fn print_row(pattern: &Pattern) {
    if pattern.requires_context {
        println!(
            "  {}  {}",
            colors::accent().apply_to(pattern.name),
            colors::muted().apply_to("(context required)")
        );
    } else {
        println!("  {}", colors::accent().apply_to(pattern.name));
    }
}

fn print_detail(pattern: &Pattern) {
    println!();
    println!("{}", style(pattern.name).bold());
    println!(
        "  {} {}",
        colors::muted().apply_to("regex"),
        colors::secondary().apply_to(pattern.regex.as_str())
    );

    if pattern.requires_context {
        println!(
            "  {}",
            colors::muted().apply_to("only meaningful with surrounding context")
        );
    }
}
