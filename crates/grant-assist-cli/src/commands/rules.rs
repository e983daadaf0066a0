//! Rules command implementation.

use anyhow::Result;
use grant_assist_compliance::RuleRegistry;

/// List the registered checks in evaluation order.
pub fn execute() -> Result<()> {
    let registry = RuleRegistry::standard();

    println!("📏 Compliance rules ({})", registry.len());
    println!("{:─<50}", "");
    for rule in registry.iter() {
        println!(
            "{:<14} {:<16} {}",
            rule.id().to_string(),
            rule.category().to_string(),
            rule.name()
        );
        if !rule.description().is_empty() {
            println!("{:<31}{}", "", rule.description());
        }
    }
    Ok(())
}
