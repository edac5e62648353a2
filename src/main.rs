use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use household_budget::cli::{
    handle_add, handle_audit, handle_categories, handle_export, handle_import, handle_recent,
    handle_summary, handle_trend, AddArgs, ExportFormat,
};
use household_budget::config::{BudgetPaths, Settings};
use household_budget::models::YearMonth;
use household_budget::storage::ExpenseStore;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Household expense tracker",
    long_about = "Record dated, categorized household expenses and see where the \
                  money goes: monthly totals, category breakdowns and a running \
                  monthly average, all from the command line."
)]
struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add(AddArgs),

    /// List the most recent expenses, newest first
    Recent {
        /// Number of expenses to show (defaults to the configured limit)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show this month, last month, monthly average and total
    Summary {
        /// Reference month (YYYY-MM) instead of the current one
        #[arg(long)]
        month: Option<YearMonth>,
    },

    /// Chart spending by month
    Trend,

    /// Chart spending by category
    Categories,

    /// Export the full expense history
    Export {
        /// Output file or directory (defaults to ./household_budget_<date>.json)
        output: Option<PathBuf>,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
    },

    /// Replace the expense history with the contents of an export file
    Import {
        /// Path to a JSON export file
        file: PathBuf,
    },

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(filter),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let mut store = ExpenseStore::open(&paths)?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&mut store, &settings, args)?,
        Some(Commands::Recent { limit }) => handle_recent(&store, &settings, limit)?,
        Some(Commands::Summary { month }) => handle_summary(&store, &settings, month)?,
        Some(Commands::Trend) => handle_trend(&store, &settings)?,
        Some(Commands::Categories) => handle_categories(&store, &settings)?,
        Some(Commands::Export { output, format }) => handle_export(&store, output, format)?,
        Some(Commands::Import { file }) => handle_import(&mut store, &file)?,
        Some(Commands::Audit { count }) => handle_audit(&paths, count)?,
        Some(Commands::Config) => {
            println!("Household Budget Configuration");
            println!("==============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Recent limit:    {}", settings.recent_limit);
            println!("  Chart width:     {}", settings.chart_width);
            println!();
            println!("Stored expenses: {}", store.len());
        }
        None => {
            println!("Household Budget - terminal expense tracker");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget add 1200 -c food -m lunch' to record an expense.");
        }
    }

    Ok(())
}
