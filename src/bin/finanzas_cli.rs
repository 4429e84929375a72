use std::{env, path::PathBuf, process};

use finanzas_core::{
    cli::{output, report},
    init,
    ledger::Transaction,
    storage::{JsonStorage, StorageBackend},
};

fn main() {
    init();

    if let Err(err) = run() {
        output::error(err);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1).peekable();

    let mut root: Option<PathBuf> = None;
    if args.peek().map(String::as_str) == Some("--dir") {
        args.next();
        let path = args.next().ok_or("--dir requires a path argument")?;
        root = Some(PathBuf::from(path));
    }
    let storage = JsonStorage::new(root)?;

    let command = args.next().unwrap_or_else(|| "dashboard".to_string());
    match command.as_str() {
        "dashboard" => {
            let ledger = storage.load()?;
            report::render_dashboard(&ledger)?;
        }
        "list" => {
            let ledger = storage.load()?;
            report::render_transactions(&ledger);
        }
        "health" => {
            let ledger = storage.load()?;
            report::render_health(&ledger);
        }
        "projection" => {
            let profile = args
                .next()
                .unwrap_or_else(|| report::DEFAULT_PROFILE.to_string());
            let years = match args.next() {
                Some(raw) => raw.parse::<u32>()?,
                None => report::DEFAULT_HORIZON_YEARS,
            };
            let ledger = storage.load()?;
            report::render_projection(&ledger, &profile, years)?;
        }
        "add" => {
            let kind = args.next().ok_or_else(usage_error)?;
            let amount = args.next().ok_or_else(usage_error)?.parse::<f64>()?;
            let transaction = match kind.as_str() {
                "income" => {
                    let description = rest_as_description(args)?;
                    Transaction::income(amount, description)?
                }
                "expense" => {
                    let category = args.next().ok_or_else(usage_error)?;
                    let description = rest_as_description(args)?;
                    Transaction::expense(amount, category, description)?
                }
                _ => return Err(usage_error().into()),
            };
            let mut ledger = storage.load()?;
            let id = ledger.add_transaction(transaction);
            storage.save(&ledger)?;
            output::success(format!("Recorded transaction {id}"));
        }
        "remove" => {
            let id = args.next().ok_or_else(usage_error)?.parse::<i64>()?;
            let mut ledger = storage.load()?;
            if ledger.remove_transaction(id) {
                storage.save(&ledger)?;
                output::success(format!("Removed transaction {id}"));
            } else {
                output::warning(format!("No transaction with id {id}"));
            }
        }
        "help" | "--help" => print_usage(),
        _ => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn rest_as_description(
    args: impl Iterator<Item = String>,
) -> Result<String, Box<dyn std::error::Error>> {
    let description = args.collect::<Vec<_>>().join(" ");
    if description.is_empty() {
        return Err(usage_error().into());
    }
    Ok(description)
}

fn usage_error() -> String {
    "invalid arguments, run `finanzas_cli help` for usage".to_string()
}

fn print_usage() {
    println!("finanzas_cli - personal finance dashboard");
    println!();
    println!("Usage: finanzas_cli [--dir <path>] <command>");
    println!();
    println!("Commands:");
    println!("  dashboard                                  overview, savings rate, net worth");
    println!("  list                                       transaction table");
    println!("  health                                     financial health indicators");
    println!("  projection [profile] [years]               capital projection table");
    println!("  add income <amount> <description...>       record an income");
    println!("  add expense <amount> <category> <desc...>  record an expense");
    println!("  remove <id>                                delete a transaction");
    println!("  help                                       show this message");
    println!();
    println!("Profiles: conservative, moderate, aggressive (default: moderate)");
    let categories: Vec<&str> = finanzas_core::ledger::EXPENSE_CATEGORIES
        .iter()
        .map(|info| info.key)
        .collect();
    println!("Categories: {}", categories.join(", "));
}
