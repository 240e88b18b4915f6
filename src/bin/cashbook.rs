//! CLI binary for managing a personal cashbook.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{Datelike, Utc};
use clap::{Args, Parser, Subcommand};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, Table};
use owo_colors::OwoColorize;

use cashbook_rs::ledger::{LedgerBlocking, NewTransaction, TransactionQuery};
use cashbook_rs::models::{
    Amount, Category, CategoryId, CategoryKind, CategoryTotal, DailyGroup, Month, MonthlyReport,
    Period, TransactionId, TxDate, UserId, format_value,
};
use cashbook_rs::storage::{BlockingStorage, FileStorage};

/// Environment variable naming the acting user.
const USER_ENV: &str = "CASHBOOK_USER";
/// User ID used when [`USER_ENV`] is not set.
const DEFAULT_USER: &str = "local";
/// Currency used when `--currency` is not given.
const DEFAULT_CURRENCY: &str = "VND";

/// Personal cashbook CLI — record transactions and browse reports.
#[derive(Debug, Parser)]
#[command(name = "cashbook", version, about)]
struct Cli {
    /// Override the storage directory (default: XDG data dir).
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,
    /// Acting user ID (default: $CASHBOOK_USER, then "local").
    #[arg(long, global = true)]
    user: Option<String>,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
enum Command {
    /// Record a new transaction.
    Add(AddArgs),
    /// List transactions grouped per day, newest day first.
    Transactions(PeriodArgs),
    /// Show the monthly cash-flow and per-category report.
    Report(PeriodArgs),
    /// List the category catalog, split into expense and income.
    Categories,
    /// Seed the catalog with a starter set of categories.
    Seed,
    /// Remove a transaction by ID.
    Remove {
        /// Transaction ID to remove.
        id: String,
    },
}

/// Arguments for the `add` subcommand.
#[derive(Debug, Args)]
struct AddArgs {
    /// Category name (case-insensitive).
    #[arg(long)]
    category: String,
    /// Signed amount — negative for expenses, positive for income.
    #[arg(long, allow_hyphen_values = true)]
    amount: f64,
    /// Currency code.
    #[arg(long, default_value = DEFAULT_CURRENCY)]
    currency: String,
    /// Day of month (default: today).
    #[arg(long)]
    day: Option<u8>,
    /// Month, e.g. `jan` (default: current month).
    #[arg(long, value_parser = parse_month)]
    month: Option<Month>,
    /// Year (default: current year).
    #[arg(long)]
    year: Option<i32>,
    /// Optional free-text note.
    #[arg(long)]
    note: Option<String>,
}

/// Month/year scope shared by `transactions` and `report`.
#[derive(Debug, Args)]
struct PeriodArgs {
    /// Month, e.g. `jan` (default: current month).
    #[arg(long, value_parser = parse_month)]
    month: Option<Month>,
    /// Year (default: current year).
    #[arg(long)]
    year: Option<i32>,
}

/// Parses a month name for clap.
fn parse_month(s: &str) -> Result<Month, String> {
    s.parse().map_err(|err| format!("{err}"))
}

/// Returns today's day/month/year in UTC.
fn today() -> (u8, Month, i32) {
    let now = Utc::now();
    #[allow(
        clippy::cast_possible_truncation,
        reason = "chrono day-of-month and month0 always fit in u8/usize"
    )]
    let (day, month_idx) = (now.day() as u8, now.month0() as usize);
    let month = Month::ALL.get(month_idx).copied().unwrap_or(Month::Jan);
    (day, month, now.year())
}

/// Resolves the acting user from the flag, environment, or default.
fn resolve_user(flag: Option<String>) -> UserId {
    let raw = flag
        .or_else(|| std::env::var(USER_ENV).ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| DEFAULT_USER.to_owned());
    UserId::new(raw)
}

/// Runs the CLI, returning an appropriate exit code.
fn run() -> io::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let _dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    let user = resolve_user(cli.user);

    let storage = match create_storage(cli.data_dir) {
        Ok(storage) => storage,
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} failed to initialize storage: {err}",
                "error:".red().bold()
            )?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let ledger = LedgerBlocking::new(storage);
    dispatch(&ledger, &user, cli.command)
}

/// Creates the storage backend, using `data_dir` if provided or the
/// default XDG data directory otherwise.
fn create_storage(data_dir: Option<PathBuf>) -> cashbook_rs::error::Result<FileStorage> {
    let dir = match data_dir {
        Some(dir) => dir,
        None => FileStorage::default_dir()?,
    };
    FileStorage::new(dir)
}

/// Dispatches to the appropriate subcommand handler.
fn dispatch<S: BlockingStorage>(
    ledger: &LedgerBlocking<S>,
    user: &UserId,
    command: Command,
) -> io::Result<ExitCode> {
    match command {
        Command::Add(args) => cmd_add(ledger, user, args),
        Command::Transactions(args) => cmd_transactions(ledger, user, &args),
        Command::Report(args) => cmd_report(ledger, user, &args),
        Command::Categories => cmd_categories(ledger),
        Command::Seed => cmd_seed(ledger),
        Command::Remove { id } => cmd_remove(ledger, &id),
    }
}

/// Executes the `add` subcommand: records one transaction.
fn cmd_add<S: BlockingStorage>(
    ledger: &LedgerBlocking<S>,
    user: &UserId,
    args: AddArgs,
) -> io::Result<ExitCode> {
    let Some(category) = resolve_category(ledger, &args.category)? else {
        return Ok(ExitCode::FAILURE);
    };

    let (today_day, today_month, today_year) = today();
    let date = TxDate::new(
        args.day.unwrap_or(today_day),
        args.month.unwrap_or(today_month),
        args.year.unwrap_or(today_year),
    );
    let new = NewTransaction {
        user: user.clone(),
        category: category.id,
        date,
        amount: Amount::new(args.amount, args.currency),
        note: args.note,
    };

    match ledger.add_transaction(new) {
        Ok(tx) => {
            let mut out = io::stdout().lock();
            writeln!(
                out,
                "{} {} on {} ({})",
                "Recorded".green().bold(),
                tx.amount.formatted(),
                tx.date,
                tx.category.name
            )?;
            writeln!(out, "  {} {}", "id:".dimmed(), tx.id)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} failed to record transaction: {err}",
                "error:".red().bold()
            )?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Resolves a category by name, printing an error on failure.
///
/// Returns `Ok(Some(category))` on success, `Ok(None)` if the name was
/// not found (error already printed), or `Err` on I/O failure.
fn resolve_category<S: BlockingStorage>(
    ledger: &LedgerBlocking<S>,
    name: &str,
) -> io::Result<Option<Category>> {
    match ledger.find_category_by_name(name) {
        Ok(Some(category)) => Ok(Some(category)),
        Ok(None) => {
            writeln!(
                io::stderr().lock(),
                "{} category not found: {name}",
                "error:".red().bold()
            )?;
            writeln!(
                io::stderr().lock(),
                "  {} run `cashbook categories` to list the catalog",
                "hint:".cyan()
            )?;
            Ok(None)
        }
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} failed to look up category: {err}",
                "error:".red().bold()
            )?;
            Ok(None)
        }
    }
}

/// Builds the query for a period-scoped subcommand.
fn period_query(user: &UserId, args: &PeriodArgs) -> (TransactionQuery, Period) {
    let (_, today_month, today_year) = today();
    let month = args.month.unwrap_or(today_month);
    let year = args.year.unwrap_or(today_year);
    let query = TransactionQuery::new().user(user.clone()).period(month, year);
    (query, Period::new(month, year))
}

/// Executes the `transactions` subcommand: per-day groups for a month.
fn cmd_transactions<S: BlockingStorage>(
    ledger: &LedgerBlocking<S>,
    user: &UserId,
    args: &PeriodArgs,
) -> io::Result<ExitCode> {
    let (query, period) = period_query(user, args);
    match ledger.daily_transactions(&query) {
        Ok(groups) => {
            print_daily_groups(&groups, period)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} failed to read transactions: {err}",
                "error:".red().bold()
            )?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Executes the `report` subcommand: monthly cash flow and totals.
fn cmd_report<S: BlockingStorage>(
    ledger: &LedgerBlocking<S>,
    user: &UserId,
    args: &PeriodArgs,
) -> io::Result<ExitCode> {
    let (_, period) = period_query(user, args);
    match ledger.monthly_report(user, period) {
        Ok(report) => {
            print_monthly_report(&report)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} failed to build report: {err}",
                "error:".red().bold()
            )?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Executes the `categories` subcommand: lists the catalog.
fn cmd_categories<S: BlockingStorage>(ledger: &LedgerBlocking<S>) -> io::Result<ExitCode> {
    match ledger.category_catalog() {
        Ok(catalog) => {
            print_category_table("Expense Categories", &catalog.expense)?;
            print_category_table("Income Categories", &catalog.income)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} failed to read categories: {err}",
                "error:".red().bold()
            )?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Executes the `seed` subcommand: installs the starter catalog.
fn cmd_seed<S: BlockingStorage>(ledger: &LedgerBlocking<S>) -> io::Result<ExitCode> {
    let categories = starter_categories();
    let count = categories.len();
    match ledger.seed_categories(categories) {
        Ok(()) => {
            writeln!(
                io::stdout().lock(),
                "{} {count} categories",
                "Seeded".green().bold()
            )?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} failed to seed categories: {err}",
                "error:".red().bold()
            )?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Executes the `remove` subcommand: deletes a transaction by ID.
fn cmd_remove<S: BlockingStorage>(ledger: &LedgerBlocking<S>, id: &str) -> io::Result<ExitCode> {
    let tx_id = TransactionId::new(id.to_owned());
    match ledger.remove_transaction(&tx_id) {
        Ok(()) => {
            writeln!(
                io::stdout().lock(),
                "{} {id}",
                "Removed".green().bold()
            )?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            writeln!(
                io::stderr().lock(),
                "{} failed to remove transaction: {err}",
                "error:".red().bold()
            )?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// The starter catalog installed by `cashbook seed`.
fn starter_categories() -> Vec<Category> {
    let expense: &[(&str, &str, &str)] = &[
        ("cat-food", "Food", "fast-food"),
        ("cat-transport", "Transport", "bus"),
        ("cat-rent", "Rent", "home"),
        ("cat-utilities", "Utilities", "flash"),
        ("cat-shopping", "Shopping", "cart"),
        ("cat-health", "Health", "medkit"),
    ];
    let income: &[(&str, &str, &str)] = &[
        ("cat-salary", "Salary", "cash"),
        ("cat-bonus", "Bonus", "gift"),
        ("cat-interest", "Interest", "trending-up"),
    ];

    let build = |items: &[(&str, &str, &str)], kind: CategoryKind| {
        items
            .iter()
            .map(|&(id, name, icon)| Category {
                id: CategoryId::new(id.to_owned()),
                name: name.to_owned(),
                icon: icon.to_owned(),
                icon_color: "#ffffff".to_owned(),
                background_color: match kind {
                    CategoryKind::Expense => "#e74c3c".to_owned(),
                    CategoryKind::Income => "#2ecc71".to_owned(),
                },
                kind,
            })
            .collect::<Vec<_>>()
    };

    let mut categories = build(expense, CategoryKind::Expense);
    categories.extend(build(income, CategoryKind::Income));
    categories
}

// ── Output formatting ────────────────────────────────────────────────

/// Renders a signed amount cell, red for expenses and green for income.
fn amount_cell(value: f64, currency: &str) -> Cell {
    let text = format_value(value, currency);
    if value < 0.0_f64 {
        Cell::new(text).fg(Color::Red)
    } else {
        Cell::new(text).fg(Color::Green)
    }
}

/// Prints per-day transaction groups for a period.
fn print_daily_groups(groups: &[DailyGroup], period: Period) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if groups.is_empty() {
        writeln!(out, "{}", format_args!("No transactions in {period}.").dimmed())?;
        return Ok(());
    }

    writeln!(out, "{} {}", "Transactions".green().bold(), format_args!("({period})").dimmed())?;
    for group in groups {
        writeln!(out)?;
        writeln!(
            out,
            "{}  {}",
            group.date.to_string().bold(),
            group.amount.formatted().dimmed()
        )?;

        let mut table = Table::new();
        _ = table.load_preset(UTF8_FULL);
        _ = table.set_header(vec![
            Cell::new("Category").fg(Color::Cyan),
            Cell::new("Amount").fg(Color::Cyan),
            Cell::new("Note").fg(Color::Cyan),
            Cell::new("ID").fg(Color::Cyan),
        ]);
        for tx in &group.transactions {
            let note = tx.note.as_deref().unwrap_or("");
            _ = table.add_row(vec![
                Cell::new(&tx.category.name),
                amount_cell(tx.amount.value, &tx.amount.currency),
                Cell::new(note),
                Cell::new(tx.id.as_inner()).fg(Color::DarkGrey),
            ]);
        }
        writeln!(out, "{table}")?;
    }
    Ok(())
}

/// Prints the monthly report: cash flow plus per-category totals.
fn print_monthly_report(report: &MonthlyReport) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(
        out,
        "{} {}",
        "Monthly Report".green().bold(),
        format_args!("({})", report.period).dimmed()
    )?;
    writeln!(out)?;

    let mut table = Table::new();
    _ = table.load_preset(UTF8_FULL);
    _ = table.set_header(vec![
        Cell::new("Cash Flow").fg(Color::Cyan),
        Cell::new("Total").fg(Color::Cyan),
    ]);
    _ = table.add_row(vec![Cell::new("Expense"), flow_cell(report.cash_flow.expense.as_ref())]);
    _ = table.add_row(vec![Cell::new("Income"), flow_cell(report.cash_flow.income.as_ref())]);
    writeln!(out, "{table}")?;
    writeln!(out)?;

    print_totals_table(&mut out, "By Expense Category", &report.expense)?;
    print_totals_table(&mut out, "By Income Category", &report.income)?;
    Ok(())
}

/// Renders one cash-flow side, or a dimmed dash when absent.
fn flow_cell(side: Option<&Amount>) -> Cell {
    side.map_or_else(
        || Cell::new("\u{2014}").fg(Color::DarkGrey),
        |amount| amount_cell(amount.value, &amount.currency),
    )
}

/// Prints a per-category totals table under a heading.
fn print_totals_table<W: Write>(
    out: &mut W,
    heading: &str,
    totals: &[CategoryTotal],
) -> io::Result<()> {
    if totals.is_empty() {
        writeln!(out, "{} {}", heading.bold(), "(none)".dimmed())?;
        writeln!(out)?;
        return Ok(());
    }

    let mut table = Table::new();
    _ = table.load_preset(UTF8_FULL);
    _ = table.set_header(vec![
        Cell::new("Category").fg(Color::Cyan),
        Cell::new("Total").fg(Color::Cyan),
    ]);
    for total in totals {
        _ = table.add_row(vec![
            Cell::new(&total.category.name),
            amount_cell(total.amount.value, &total.amount.currency),
        ]);
    }
    writeln!(out, "{}", heading.bold())?;
    writeln!(out, "{table}")?;
    writeln!(out)?;
    Ok(())
}

/// Prints one side of the category catalog.
fn print_category_table(heading: &str, categories: &[Category]) -> io::Result<()> {
    let mut out = io::stdout().lock();
    if categories.is_empty() {
        writeln!(out, "{} {}", heading.bold(), "(none)".dimmed())?;
        return Ok(());
    }

    let mut table = Table::new();
    _ = table.load_preset(UTF8_FULL);
    _ = table.set_header(vec![
        Cell::new("Name").fg(Color::Cyan),
        Cell::new("Icon").fg(Color::Cyan),
        Cell::new("ID").fg(Color::Cyan),
    ]);
    for category in categories {
        _ = table.add_row(vec![
            Cell::new(&category.name),
            Cell::new(&category.icon),
            Cell::new(category.id.as_inner()).fg(Color::DarkGrey),
        ]);
    }
    writeln!(out, "{}", heading.bold())?;
    writeln!(out, "{table}")?;
    Ok(())
}

/// Entry point.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            // Last-resort error output — if stderr itself failed, nothing
            // we can do.
            let _ignored = writeln!(io::stderr(), "fatal I/O error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use cashbook_rs::storage::InMemoryStorage;

    /// Creates a ledger over a fresh in-memory storage.
    fn mock_ledger() -> LedgerBlocking<InMemoryStorage> {
        LedgerBlocking::new(InMemoryStorage::new())
    }

    /// Creates a ledger pre-seeded with the starter catalog.
    fn seeded_ledger() -> LedgerBlocking<InMemoryStorage> {
        let ledger = mock_ledger();
        ledger.seed_categories(starter_categories()).unwrap();
        ledger
    }

    // ── parse_month tests ─────────────────────────────────────────────

    #[test]
    fn parse_month_valid() {
        assert_eq!(parse_month("jan").unwrap(), Month::Jan);
        assert_eq!(parse_month("Dec").unwrap(), Month::Dec);
    }

    #[test]
    fn parse_month_invalid() {
        assert!(parse_month("not-a-month").is_err());
        assert!(parse_month("13").is_err());
    }

    // ── resolve_user tests ────────────────────────────────────────────

    #[test]
    fn resolve_user_prefers_flag() {
        let user = resolve_user(Some("flag-user".to_owned()));
        assert_eq!(user, UserId::new("flag-user".to_owned()));
    }

    // ── create_storage tests ──────────────────────────────────────────

    #[test]
    fn create_storage_with_custom_dir() {
        let dir = tempfile::tempdir().unwrap();
        let storage = create_storage(Some(dir.path().to_path_buf()));
        assert!(storage.is_ok());
    }

    // ── starter catalog tests ─────────────────────────────────────────

    #[test]
    fn starter_catalog_covers_both_kinds() {
        let categories = starter_categories();
        assert!(categories.iter().any(|c| c.kind == CategoryKind::Expense));
        assert!(categories.iter().any(|c| c.kind == CategoryKind::Income));
    }

    #[test]
    fn starter_catalog_ids_are_unique() {
        let categories = starter_categories();
        let mut ids: Vec<&str> = categories.iter().map(|c| c.id.as_inner()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), categories.len());
    }

    // ── resolve_category tests ────────────────────────────────────────

    #[test]
    fn resolve_category_found() {
        let ledger = seeded_ledger();
        let category = resolve_category(&ledger, "food").unwrap();
        assert_eq!(category.unwrap().name, "Food");
    }

    #[test]
    fn resolve_category_not_found() {
        let ledger = seeded_ledger();
        let category = resolve_category(&ledger, "Yachts").unwrap();
        assert!(category.is_none());
    }

    // ── print function tests ─────────────────────────────────────────

    #[test]
    fn print_daily_groups_empty() {
        assert!(print_daily_groups(&[], Period::new(Month::Jan, 2024)).is_ok());
    }

    #[test]
    fn print_category_table_empty() {
        assert!(print_category_table("Expense Categories", &[]).is_ok());
    }

    #[test]
    fn print_category_table_with_data() {
        assert!(print_category_table("Expense Categories", &starter_categories()).is_ok());
    }

    #[test]
    fn print_monthly_report_empty_month() {
        let report = MonthlyReport {
            period: Period::new(Month::Jan, 2024),
            cash_flow: cashbook_rs::models::CashFlow::default(),
            expense: Vec::new(),
            income: Vec::new(),
        };
        assert!(print_monthly_report(&report).is_ok());
    }

    // ── cmd_* tests ──────────────────────────────────────────────────

    #[test]
    fn cmd_seed_then_categories() {
        let ledger = mock_ledger();
        assert!(cmd_seed(&ledger).is_ok());
        assert_eq!(
            ledger.categories().unwrap().len(),
            starter_categories().len()
        );
        assert!(cmd_categories(&ledger).is_ok());
    }

    #[test]
    fn cmd_add_records_transaction() {
        let ledger = seeded_ledger();
        let user = UserId::new("u-1".to_owned());
        let args = AddArgs {
            category: "Food".to_owned(),
            amount: -50_000.0,
            currency: DEFAULT_CURRENCY.to_owned(),
            day: Some(5),
            month: Some(Month::Jan),
            year: Some(2024),
            note: Some("Lunch".to_owned()),
        };
        assert!(cmd_add(&ledger, &user, args).is_ok());
        let txs = ledger.transactions().unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].note.as_deref(), Some("Lunch"));
    }

    #[test]
    fn cmd_add_unknown_category_records_nothing() {
        let ledger = seeded_ledger();
        let user = UserId::new("u-1".to_owned());
        let args = AddArgs {
            category: "Yachts".to_owned(),
            amount: -1.0,
            currency: DEFAULT_CURRENCY.to_owned(),
            day: Some(5),
            month: Some(Month::Jan),
            year: Some(2024),
            note: None,
        };
        assert!(cmd_add(&ledger, &user, args).is_ok());
        assert!(ledger.transactions().unwrap().is_empty());
    }

    #[test]
    fn cmd_transactions_and_report() {
        let ledger = seeded_ledger();
        let user = UserId::new("u-1".to_owned());
        let _tx = ledger
            .add_transaction(NewTransaction {
                user: user.clone(),
                category: CategoryId::new("cat-food".to_owned()),
                date: TxDate::new(5, Month::Jan, 2024),
                amount: Amount::new(-50_000.0, DEFAULT_CURRENCY),
                note: None,
            })
            .unwrap();

        let args = PeriodArgs {
            month: Some(Month::Jan),
            year: Some(2024),
        };
        assert!(cmd_transactions(&ledger, &user, &args).is_ok());
        assert!(cmd_report(&ledger, &user, &args).is_ok());
    }

    #[test]
    fn cmd_remove_is_idempotent() {
        let ledger = seeded_ledger();
        let user = UserId::new("u-1".to_owned());
        let tx = ledger
            .add_transaction(NewTransaction {
                user,
                category: CategoryId::new("cat-food".to_owned()),
                date: TxDate::new(5, Month::Jan, 2024),
                amount: Amount::new(-1.0, DEFAULT_CURRENCY),
                note: None,
            })
            .unwrap();
        assert!(cmd_remove(&ledger, tx.id.as_inner()).is_ok());
        assert!(ledger.transactions().unwrap().is_empty());
        assert!(cmd_remove(&ledger, tx.id.as_inner()).is_ok());
    }

    #[test]
    fn dispatch_categories() {
        let ledger = seeded_ledger();
        let user = UserId::new("u-1".to_owned());
        assert!(dispatch(&ledger, &user, Command::Categories).is_ok());
    }
}
