//! Catalog command - list reference entries for a category.

use colored::Colorize;
use kantei::{Catalog, Category, CategoryAttribute};

pub fn run(
    category: Category,
    json_output: bool,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::builtin();
    let entries = catalog.entries(category);

    if json_output {
        println!("{}", serde_json::to_string_pretty(entries)?);
        return Ok(());
    }

    println!(
        "{} {} ({} entries, {} names)",
        "Catalog for".cyan().bold(),
        category.to_string().white().bold(),
        entries.len(),
        catalog.base_names(category).len()
    );
    println!();
    println!(
        "  {:<24} {:>7} {:>7}  {}",
        "Name".bold(),
        "Buy".bold(),
        "Sell".bold(),
        "Attribute".bold()
    );

    for entry in entries {
        let attribute = match entry.attribute {
            CategoryAttribute::None => String::new(),
            other => other.to_string(),
        };
        println!(
            "  {:<24} {:>7} {:>7}  {}",
            entry.name,
            entry.buy_price,
            entry.sell_price,
            attribute.dimmed()
        );
    }

    Ok(())
}
