use std::error::Error;

use clap::Parser;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use finboard::{
    MonthlyTotals, Transaction, TransactionStore, TransactionSummary, TransactionType,
    expense_breakdown, format_currency, format_date, percentage, recent_transactions,
    sample_transactions,
};

/// Renders the finboard dashboard in the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of calendar months to include in the income/expense series.
    #[arg(short, long, default_value_t = 6)]
    months: usize,

    /// Canonical timezone used for date stamping, e.g. "Pacific/Auckland".
    /// Defaults to UTC.
    #[arg(long)]
    timezone: Option<String>,

    /// Start from an empty store instead of the generated sample data.
    #[arg(long)]
    empty: bool,

    /// Print the summary and monthly series as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();

    let args = Args::parse();

    let mut store = match args.timezone.as_deref() {
        Some(name) => TransactionStore::with_timezone(name)?,
        None => TransactionStore::new(),
    };

    if !args.empty {
        store.seed(sample_transactions(store.today()))?;
    }

    let summary = store.summary();
    let series = store.monthly_series(args.months);

    if args.json {
        let report = serde_json::json!({
            "summary": summary,
            "monthly": series,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_totals(&summary);
    print_monthly_series(&series);
    print_expense_breakdown(&summary);
    print_recent_transactions(store.list());

    Ok(())
}

fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().pretty().with_filter(env_filter))
        .init();
}

fn print_totals(summary: &TransactionSummary) {
    println!("Personal Finance");
    println!();
    println!("Current Balance  {:>12}", format_currency(summary.balance));
    println!(
        "Total Income     {:>12}",
        format_currency(summary.total_income)
    );
    println!(
        "Total Expenses   {:>12}",
        format_currency(summary.total_expenses)
    );
}

fn print_monthly_series(series: &[MonthlyTotals]) {
    println!();
    println!("Income vs Expenses");
    for point in series {
        println!(
            "{:<4} income {:>12}   expenses {:>12}",
            point.label,
            format_currency(point.income),
            format_currency(point.expenses)
        );
    }
}

fn print_expense_breakdown(summary: &TransactionSummary) {
    println!();
    println!("Expense Breakdown");
    for (category, amount) in expense_breakdown(summary) {
        println!(
            "{:<14} {:>12}  {:>5.1}%",
            category,
            format_currency(amount),
            percentage(amount, summary.total_expenses)
        );
    }
}

fn print_recent_transactions(transactions: &[Transaction]) {
    println!();
    println!("Recent Transactions");
    for transaction in recent_transactions(transactions, 10) {
        let amount = match transaction.kind {
            TransactionType::Income => format_currency(transaction.amount),
            TransactionType::Expense => format_currency(-transaction.amount),
        };

        println!(
            "{:<12} {:<14} {:<16} {:>12}",
            format_date(transaction.date),
            transaction.category.as_ref(),
            transaction.description,
            amount
        );
    }
}
