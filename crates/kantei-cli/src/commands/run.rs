//! Run command - replay a tracking session from a JSON script.
//!
//! A script is a JSON array of operations applied in order to a fresh
//! tracker. Records are addressed by label:
//!
//! ```json
//! [
//!   { "op": "add", "label": "A", "category": "grass" },
//!   { "op": "set", "label": "A", "buy_price": 70 },
//!   { "op": "confirm", "label": "A", "name": "睡眠草" },
//!   { "op": "delete", "label": "A" },
//!   { "op": "reset" },
//!   { "op": "delete_all" }
//! ]
//! ```

use std::fs;
use std::path::PathBuf;

use colored::Colorize;
use kantei::{AttributeUpdate, Category, KanteiError, Tracker};
use serde::{Deserialize, Serialize};

/// One scripted operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptOp {
    Add {
        label: String,
        category: Category,
    },
    Set {
        label: String,
        #[serde(flatten)]
        update: AttributeUpdate,
    },
    Confirm {
        label: String,
        name: String,
    },
    Delete {
        label: String,
    },
    DeleteAll,
    Reset,
}

/// Outcome of one rejected operation.
#[derive(Debug, Serialize)]
struct Rejection {
    step: usize,
    op: ScriptOp,
    error: String,
}

pub fn run(
    file: PathBuf,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("Script file not found: {}", file.display()).into());
    }
    let content = fs::read_to_string(&file)?;
    let ops: Vec<ScriptOp> = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse script {}: {}", file.display(), e))?;

    let mut tracker = Tracker::new()?;
    let mut rejections = Vec::new();

    for (index, op) in ops.into_iter().enumerate() {
        let step = index + 1;
        match apply(&mut tracker, &op) {
            Ok(()) => {
                if verbose && !json_output {
                    eprintln!("{} {}", format!("[{}]", step).dimmed(), describe(&op));
                }
            }
            Err(e) => {
                if !json_output {
                    eprintln!(
                        "{} {} {}",
                        format!("[{}]", step).dimmed(),
                        "rejected:".red().bold(),
                        e
                    );
                }
                rejections.push(Rejection {
                    step,
                    op,
                    error: e.to_string(),
                });
            }
        }
    }

    if json_output {
        let output = serde_json::json!({
            "records": tracker.records(),
            "ledger": tracker.ledger(),
            "rejected": rejections,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_table(&tracker);
    if !rejections.is_empty() {
        println!();
        println!(
            "{} {} operation(s) rejected",
            "Warning:".yellow().bold(),
            rejections.len()
        );
    }

    Ok(())
}

/// Apply one operation to the tracker.
fn apply(tracker: &mut Tracker, op: &ScriptOp) -> Result<(), KanteiError> {
    match op {
        ScriptOp::Add { label, category } => tracker.create_item(*category, label).map(|_| ()),
        ScriptOp::Set { label, update } => {
            let id = tracker.id_of(label)?;
            tracker.set_attributes(id, *update)
        }
        ScriptOp::Confirm { label, name } => {
            let id = tracker.id_of(label)?;
            tracker.confirm_manually(id, name)
        }
        ScriptOp::Delete { label } => {
            let id = tracker.id_of(label)?;
            tracker.delete_item(id)
        }
        ScriptOp::DeleteAll => {
            tracker.delete_all();
            Ok(())
        }
        ScriptOp::Reset => tracker.reset_identifications(),
    }
}

fn describe(op: &ScriptOp) -> String {
    match op {
        ScriptOp::Add { label, category } => format!("add {} ({})", label, category),
        ScriptOp::Set { label, .. } => format!("set {}", label),
        ScriptOp::Confirm { label, name } => format!("confirm {} as {}", label, name),
        ScriptOp::Delete { label } => format!("delete {}", label),
        ScriptOp::DeleteAll => "delete all".to_string(),
        ScriptOp::Reset => "reset identifications".to_string(),
    }
}

/// Print every record with its identification state.
fn print_table(tracker: &Tracker) {
    println!("{} ({} items)", "Items".cyan().bold(), tracker.records().len());
    println!();

    for record in tracker.records() {
        let price = match (record.buy_price, record.sell_price) {
            (Some(buy), Some(sell)) => format!("{}/{}", buy, sell),
            (Some(buy), None) => buy.to_string(),
            _ => "-".to_string(),
        };
        let state = match &record.confirmed {
            Some(confirmation) => confirmation
                .as_candidate()
                .to_string()
                .green()
                .bold()
                .to_string(),
            None if record.candidates.is_empty() => "?".dimmed().to_string(),
            None => record
                .candidates
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        };
        let blocked = if tracker.ledger().blocks_of(record.id).next().is_some() {
            " [group]".blue().to_string()
        } else {
            String::new()
        };

        println!(
            "  {:<8} {:<6} {:>11}  {}{}",
            record.label,
            record.category.to_string(),
            price,
            state,
            blocked
        );
    }
}
