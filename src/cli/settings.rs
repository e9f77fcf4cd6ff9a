//! Settings CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_notice, separator};
use crate::error::TrackerResult;
use crate::fx::RateTable;
use crate::models::Currency;
use crate::services::SettingsService;
use crate::storage::Storage;

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show the stored settings
    Show,
    /// Change the base currency used by reports
    BaseCurrency {
        /// Currency code (USD, MMK, EUR, JPY, SGD, THB, CNY)
        code: String,
    },
    /// Show exchange rates into the base currency
    Rates,
}

/// Handle a settings command
pub fn handle_settings_command(
    storage: &Storage,
    settings: &Settings,
    cmd: SettingsCommands,
) -> TrackerResult<()> {
    let service = SettingsService::new(storage);

    match cmd {
        SettingsCommands::Show => {
            println!("Base currency:   {}", service.base_currency()?);
            println!("Forecast window: {} month(s)", settings.forecast_window_months);
            println!("Rate pivot:      {}", settings.exchange_rates.pivot);
        }

        SettingsCommands::BaseCurrency { code } => {
            let currency: Currency = code.parse()?;
            let notice = service.set_base_currency(currency)?;
            println!("{}", format_notice(&notice));
        }

        SettingsCommands::Rates => {
            let table = RateTable::new(service.base_currency()?, &settings.exchange_rates);
            println!("Rates into {}", table.base());
            println!("{}", separator(30));
            for currency in Currency::all() {
                match table.cross_rate(*currency) {
                    Ok(rate) => println!("1 {:<4} = {} {}", currency, rate.normalize(), table.base()),
                    Err(_) => println!("1 {:<4} = (no rate)", currency),
                }
            }
        }
    }

    Ok(())
}
