pub mod cli;
pub mod core;

use crate::core::CurrencyCode;
use crate::core::config::AppConfig;
use anyhow::Result;
use tracing::{debug, info};

/// Commands that run against the loaded configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Convert {
        amount: f64,
        from: CurrencyCode,
        to: Option<CurrencyCode>,
    },
    Format {
        amount: f64,
        currency: CurrencyCode,
        show_symbol: bool,
    },
    Rates,
    Listings {
        currency: Option<CurrencyCode>,
    },
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("cardfx starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load_or_default()?,
    };
    debug!("Loaded config: {config:#?}");

    let pricing = config.pricing()?;
    let strict = config.strict_currencies;

    match command {
        AppCommand::Convert { amount, from, to } => {
            let to = to.unwrap_or_else(|| config.display_currency.clone());
            cli::convert::run(&pricing, amount, &from, &to, strict)
        }
        AppCommand::Format {
            amount,
            currency,
            show_symbol,
        } => cli::format::run(&pricing, amount, &currency, show_symbol, strict),
        AppCommand::Rates => {
            cli::rates::run(&pricing);
            Ok(())
        }
        AppCommand::Listings { currency } => {
            let display = currency.unwrap_or_else(|| config.display_currency.clone());
            if strict {
                if !pricing.supports(&display) {
                    anyhow::bail!("Display currency {display} is not configured");
                }
                let unsupported = config
                    .listings
                    .iter()
                    .find(|l| !pricing.supports(&l.currency));
                if let Some(listing) = unsupported {
                    anyhow::bail!(
                        "Listing {:?} is priced in unconfigured currency {}",
                        listing.name,
                        listing.currency
                    );
                }
            }
            cli::listings::run(&pricing, &config.listings, &display);
            Ok(())
        }
    }
}
