use crate::core::cart::Listing;
use crate::core::currency::CurrencyCode;
use crate::core::pricing::Pricing;
use crate::core::rates::ExchangeRateTable;
use crate::core::symbols::{CurrencyFormat, SymbolPosition, SymbolTable};
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CurrencySettings {
    pub code: CurrencyCode,
    /// Units of this currency per 1 USD.
    pub rate: f64,
    pub symbol: String,
    #[serde(default)]
    pub position: SymbolPosition,
    #[serde(default)]
    pub spaced: bool,
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
    #[serde(default = "default_group_separator")]
    pub group_separator: char,
}

fn default_decimal_separator() -> char {
    '.'
}

fn default_group_separator() -> char {
    ','
}

impl CurrencySettings {
    fn format(&self) -> CurrencyFormat {
        CurrencyFormat {
            symbol: self.symbol.clone(),
            position: self.position,
            spaced: self.spaced,
            decimal_separator: self.decimal_separator,
            group_separator: self.group_separator,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub display_currency: CurrencyCode,
    /// Fail on unknown currencies instead of degrading to a neutral rate.
    #[serde(default)]
    pub strict_currencies: bool,
    pub rates_as_of: Option<NaiveDate>,
    /// Replaces the built-in currencies when present.
    pub currencies: Option<Vec<CurrencySettings>>,
    #[serde(default)]
    pub listings: Vec<Listing>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            display_currency: CurrencyCode::base(),
            strict_currencies: false,
            rates_as_of: None,
            currencies: None,
            listings: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Loads the default config file, or the built-in defaults when there is none.
    pub fn load_or_default() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "cardfx", "cardfx")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    /// Builds the validated pricing tables described by this config.
    pub fn pricing(&self) -> Result<Pricing> {
        let pricing = match &self.currencies {
            None => {
                debug!("Using built-in currencies");
                Pricing::builtin()
            }
            Some(currencies) => {
                if currencies.is_empty() {
                    bail!("At least one currency must be configured");
                }
                let rates = ExchangeRateTable::new(
                    currencies.iter().map(|c| (c.code.clone(), c.rate)),
                    self.rates_as_of,
                )
                .context("Invalid exchange rates in config")?;
                let symbols =
                    SymbolTable::new(currencies.iter().map(|c| (c.code.clone(), c.format())))
                        .context("Invalid currency formats in config")?;
                Pricing::new(rates, symbols)?
            }
        };

        if !pricing.supports(&self.display_currency) {
            bail!(
                "Display currency {} is not one of the configured currencies",
                self.display_currency
            );
        }
        Ok(pricing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
display_currency: "eur"
rates_as_of: "2025-02-01"
currencies:
  - code: "USD"
    rate: 1.0
    symbol: "$"
  - code: "EUR"
    rate: 0.95
    symbol: "€"
  - code: "PLN"
    rate: 4.05
    symbol: "zł"
    position: suffix
    spaced: true
    decimal_separator: ","
    group_separator: " "
listings:
  - name: "Charizard Base Set PSA 9"
    price: 1299.99
    currency: "USD"
  - name: "Sealed Booster Box"
    price: 420.0
    currency: "PLN"
    quantity: 2
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(config.display_currency.as_str(), "EUR");
        assert!(!config.strict_currencies);
        assert_eq!(config.listings.len(), 2);
        assert_eq!(config.listings[0].quantity, 1);
        assert_eq!(config.listings[1].quantity, 2);

        let currencies = config.currencies.as_ref().unwrap();
        assert_eq!(currencies[0].position, SymbolPosition::Prefix);
        assert_eq!(currencies[0].decimal_separator, '.');
        assert_eq!(currencies[2].position, SymbolPosition::Suffix);
        assert_eq!(currencies[2].group_separator, ' ');

        let pricing = config.pricing().unwrap();
        assert_eq!(pricing.rate(&"EUR".parse().unwrap()), Some(0.95));
        assert_eq!(
            pricing.rates().as_of(),
            NaiveDate::from_ymd_opt(2025, 2, 1)
        );
    }

    #[test]
    fn test_default_config_uses_builtin_pricing() {
        let config = AppConfig::default();
        assert!(config.display_currency.is_base());
        assert_eq!(config.pricing().unwrap(), Pricing::builtin());
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = AppConfig::load_from_path(dir.path().join("missing.yaml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_builtin_currencies_when_omitted() {
        let config: AppConfig = serde_yaml::from_str("display_currency: GBP\n").unwrap();
        assert!(config.listings.is_empty());
        let pricing = config.pricing().unwrap();
        assert_eq!(pricing, Pricing::builtin());
    }

    #[test]
    fn test_unknown_display_currency_is_rejected() {
        let config: AppConfig = serde_yaml::from_str("display_currency: JPY\n").unwrap();
        let err = config.pricing().unwrap_err();
        assert!(err.to_string().contains("JPY"));
    }

    #[test]
    fn test_invalid_base_rate_is_rejected() {
        let yaml_str = r#"
display_currency: USD
currencies:
  - code: USD
    rate: 1.1
    symbol: "$"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml_str).unwrap();
        let err = config.pricing().unwrap_err();
        assert!(format!("{err:#}").contains("must be 1.0"));
    }

    #[test]
    fn test_empty_currency_list_is_rejected() {
        let config: AppConfig =
            serde_yaml::from_str("display_currency: USD\ncurrencies: []\n").unwrap();
        assert!(config.pricing().is_err());
    }

    #[test]
    fn test_malformed_currency_code_fails_to_parse() {
        let result = serde_yaml::from_str::<AppConfig>("display_currency: \"U5D\"\n");
        assert!(result.is_err());
    }
}
