//! Export CLI commands

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{TrackerError, TrackerResult};
use crate::export::{export_json, export_transactions_csv, UserExport};
use crate::models::UserIdentity;
use crate::services::{SettingsService, TransactionService};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export transactions to CSV
    Csv {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export transactions to JSON with metadata
    Json {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle an export command
pub fn handle_export_command(
    storage: &Storage,
    user: &UserIdentity,
    cmd: ExportCommands,
) -> TrackerResult<()> {
    let transactions = TransactionService::new(storage).list(user)?;

    match cmd {
        ExportCommands::Csv { output } => {
            let count = transactions.len();
            let writer = open_output(output.as_ref())?;
            export_transactions_csv(&transactions, writer)?;
            report_written(output.as_ref(), count);
        }

        ExportCommands::Json { output } => {
            let base = SettingsService::new(storage).base_currency()?;
            let export = UserExport::new(&user.username, base, transactions);
            let mut writer = open_output(output.as_ref())?;
            export_json(&export, &mut writer)?;
            writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;
            writer
                .flush()
                .map_err(|e| TrackerError::Export(e.to_string()))?;
            report_written(output.as_ref(), export.metadata.transaction_count);
        }
    }

    Ok(())
}

fn open_output(path: Option<&PathBuf>) -> TrackerResult<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                TrackerError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}

fn report_written(path: Option<&PathBuf>, count: usize) {
    if let Some(path) = path {
        eprintln!("Exported {} transaction(s) to {}", count, path.display());
    }
}
