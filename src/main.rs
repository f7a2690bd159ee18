use std::{error::Error, fs::File, path::PathBuf};

use clap::Parser;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use dtmoney_core::{
    Locale, csv::read_transactions, stores::MemoryTransactionStore, stores::TransactionStore,
    summarize, table_rows,
};

/// Prints a transaction table and its summary totals from a CSV statement.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to a CSV statement (title,type,category,amount,created_at).
    statement: PathBuf,

    /// Only print the summary totals.
    #[arg(long)]
    summary_only: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer().with_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            ),
        )
        .init();

    let args = Args::parse();

    let statement = File::open(&args.statement)?;
    let builders = read_transactions(statement)?;
    tracing::debug!("read {} transactions from {:?}", builders.len(), args.statement);

    let mut store = MemoryTransactionStore::new();
    for builder in builders {
        store.create(builder)?;
    }

    let transactions = store.fetch_all()?;
    let locale = Locale::pt_br();

    if !args.summary_only {
        for row in table_rows(&transactions, &locale) {
            println!(
                "{:<28} {:>16}  {:<20} {}",
                row.title, row.formatted_amount, row.category, row.formatted_date
            );
        }
        println!();
    }

    let summary = summarize(&transactions).display(&locale);
    println!("Entradas: {:>16}", summary.income);
    println!("Saídas:   {:>16}", summary.outcome);
    println!("Total:    {:>16}", summary.total);

    Ok(())
}
