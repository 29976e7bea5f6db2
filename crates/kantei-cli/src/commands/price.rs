//! Price command - translate a price and list the items it could be.

use colored::Colorize;
use kantei::{AttributeUpdate, Category, KanteiError, Tracker};

use crate::cli::PriceArgs;

pub fn run(args: PriceArgs, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut tracker = Tracker::new()?;

    let buy = match (args.buy, args.sell) {
        (Some(buy), _) => buy,
        (None, Some(sell)) => tracker
            .buy_for(sell)
            .ok_or_else(|| format!("Sell price {} matches no catalog item", sell))?,
        (None, None) => return Err("Either --buy or --sell is required".into()),
    };
    let sell = tracker.sell_for(buy);

    let categories: Vec<Category> = match args.category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };

    let mut matches: Vec<(Category, Vec<String>)> = Vec::new();
    for category in categories {
        let id = tracker.create_item(category, category.key())?;
        match tracker.set_attributes(id, AttributeUpdate::new().with_buy_price(buy)) {
            Ok(()) => {
                let names = tracker.candidates(id)?.iter().map(|c| c.to_string()).collect();
                matches.push((category, names));
            }
            Err(KanteiError::NoPriceMatch { .. }) => {
                if verbose {
                    eprintln!("{} no {} at {}", "·".dimmed(), category, buy);
                }
            }
            Err(e) => return Err(e.into()),
        }
    }

    if args.json {
        let candidates: serde_json::Map<String, serde_json::Value> = matches
            .iter()
            .map(|(category, names)| (category.key().to_string(), serde_json::json!(names)))
            .collect();
        let output = serde_json::json!({
            "buy_price": buy,
            "sell_price": sell,
            "candidates": candidates,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match sell {
        Some(sell) => println!(
            "{} buy {} / sell {}",
            "Price:".cyan().bold(),
            buy.to_string().white().bold(),
            sell.to_string().white().bold()
        ),
        None => println!(
            "{} buy {} (no face-value sell price)",
            "Price:".cyan().bold(),
            buy.to_string().white().bold()
        ),
    }
    println!();

    if matches.is_empty() {
        println!("{}", "No catalog item matches this price.".yellow());
        return Ok(());
    }

    for (category, names) in &matches {
        println!("{} ({})", category.to_string().yellow().bold(), names.len());
        for name in names {
            println!("  {}", name);
        }
    }

    Ok(())
}
