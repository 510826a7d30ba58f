//! List rules command implementation.

use snakestyle_rules::{line_rules, tree_rules};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<6} {:<26} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in line_rules() {
        println!(
            "{:<6} {:<26} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }
    for rule in tree_rules() {
        println!(
            "{:<6} {:<26} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nAll rules are always enabled; snakestyle has no configuration file.");
}
