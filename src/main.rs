use anyhow::Result;
use cardfx::core::CurrencyCode;
use cardfx::core::log::init_logging;
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for cardfx::AppCommand {
    fn from(cmd: Commands) -> cardfx::AppCommand {
        match cmd {
            Commands::Convert { amount, from, to } => {
                cardfx::AppCommand::Convert { amount, from, to }
            }
            Commands::Format {
                amount,
                currency,
                no_symbol,
            } => cardfx::AppCommand::Format {
                amount,
                currency,
                show_symbol: !no_symbol,
            },
            Commands::Rates => cardfx::AppCommand::Rates,
            Commands::Listings { currency } => cardfx::AppCommand::Listings { currency },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount between currencies
    Convert {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        from: CurrencyCode,
        /// Target currency (defaults to the configured display currency)
        #[arg(short, long)]
        to: Option<CurrencyCode>,
    },
    /// Format an amount in a currency
    Format {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        currency: CurrencyCode,
        /// Omit the currency symbol
        #[arg(long)]
        no_symbol: bool,
    },
    /// Show the exchange rate table
    Rates,
    /// Show configured listings and the cart total in the display currency
    Listings {
        /// Display currency (defaults to the configured one)
        #[arg(long)]
        currency: Option<CurrencyCode>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => cardfx::cli::setup::setup(),
        Some(cmd) => cardfx::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
