use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use moneytrack::cli::{
    handle_export_command, handle_login, handle_register, handle_report_command,
    handle_settings_command, handle_transaction_command, require_user, ExportCommands,
    ReportCommands, SettingsCommands, TransactionCommands, USER_ENV,
};
use moneytrack::config::paths::DATA_DIR_ENV;
use moneytrack::config::{Settings, TrackerPaths};
use moneytrack::services::SettingsService;
use moneytrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "moneytrack",
    author = "Kaylee Beyene",
    version,
    about = "Personal income and expense tracker",
    long_about = "MoneyTrack records income and expense transactions in several \
                  currencies and reports totals, category breakdowns, monthly \
                  summaries, and a next-month forecast in a chosen base currency."
)]
struct Cli {
    /// Data directory (defaults to ~/.config/moneytrack)
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// User to act as
    #[arg(short, long, global = true, env = USER_ENV)]
    user: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory, database, and config file
    Init,

    /// Show current configuration and paths
    Config,

    /// Register a new user
    Register {
        /// Username
        username: String,
    },

    /// Check a user's credentials
    Login {
        /// Username
        username: String,
    },

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Analytics reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Stored settings
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Export transactions
    #[command(subcommand)]
    Export(ExportCommands),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    moneytrack::logging::init(&moneytrack::logging::verbosity_filter(
        cli.verbose,
        &settings.log_filter,
    ));

    // Initialize storage
    let storage = Storage::open(&paths, settings.default_base_currency)?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing MoneyTrack at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Register a user with 'moneytrack register <username>'.");
        }
        Some(Commands::Config) => {
            println!("MoneyTrack Configuration");
            println!("========================");
            println!("Data directory:   {}", paths.base_dir().display());
            println!("Database:         {}", paths.database_file().display());
            println!("Config file:      {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!(
                "  Base currency:   {}",
                SettingsService::new(&storage).base_currency()?
            );
            println!("  Forecast window: {}", settings.forecast_window_months);
            println!("  Log filter:      {}", settings.log_filter);
        }
        Some(Commands::Register { username }) => {
            handle_register(&storage, &username)?;
        }
        Some(Commands::Login { username }) => {
            handle_login(&storage, &username)?;
        }
        Some(Commands::Transaction(cmd)) => {
            let user = require_user(&storage, cli.user.as_deref())?;
            handle_transaction_command(&storage, &user, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            let user = require_user(&storage, cli.user.as_deref())?;
            handle_report_command(&storage, &settings, &user, cmd)?;
        }
        Some(Commands::Settings(cmd)) => {
            handle_settings_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            let user = require_user(&storage, cli.user.as_deref())?;
            handle_export_command(&storage, &user, cmd)?;
        }
        None => {
            println!("MoneyTrack - Personal income and expense tracker");
            println!();
            println!("Run 'moneytrack --help' for usage information.");
        }
    }

    Ok(())
}
