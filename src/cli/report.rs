//! Report CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_category_bars, format_forecast};
use crate::error::TrackerResult;
use crate::models::UserIdentity;
use crate::services::AnalyticsService;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Income, expense, and net totals
    Totals,
    /// Amounts grouped by category
    Categories {
        /// Keep income and expense rows of a category apart
        #[arg(long)]
        by_type: bool,
        /// Draw a bar per category
        #[arg(long, conflicts_with = "by_type")]
        bars: bool,
    },
    /// Income and expense per calendar month
    Monthly {
        /// Print as CSV
        #[arg(long)]
        csv: bool,
    },
    /// Next-month net forecast
    Forecast {
        /// Number of trailing months to average
        #[arg(short, long)]
        months: Option<usize>,
    },
    /// Every report at once
    Dashboard,
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    user: &UserIdentity,
    cmd: ReportCommands,
) -> TrackerResult<()> {
    let analytics = AnalyticsService::new(
        storage,
        &settings.exchange_rates,
        settings.forecast_window_months,
    );

    match cmd {
        ReportCommands::Totals => {
            let base = analytics.converter()?.base();
            print!("{}", analytics.totals(user)?.format_terminal(base));
        }

        ReportCommands::Categories { by_type, bars } => {
            let base = analytics.converter()?.base();
            if by_type {
                print!(
                    "{}",
                    analytics.category_breakdown_by_type(user)?.format_terminal(base)
                );
            } else if bars {
                print!(
                    "{}",
                    format_category_bars(&analytics.category_breakdown(user)?, 30)
                );
            } else {
                print!("{}", analytics.category_breakdown(user)?.format_terminal(base));
            }
        }

        ReportCommands::Monthly { csv } => {
            let summary = analytics.monthly_summary(user)?;
            if csv {
                let stdout = std::io::stdout();
                summary.export_csv(&mut stdout.lock())?;
            } else {
                let base = analytics.converter()?.base();
                print!("{}", summary.format_terminal(base));
            }
        }

        ReportCommands::Forecast { months } => {
            let window = months.unwrap_or(settings.forecast_window_months);
            let base = analytics.converter()?.base();
            let forecast = analytics.forecast_with_window(user, window)?;
            print!("{}", format_forecast(forecast, base, window.max(1)));
        }

        ReportCommands::Dashboard => {
            print!("{}", analytics.dashboard(user)?.format_terminal());
        }
    }

    Ok(())
}
