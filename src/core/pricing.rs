//! The rate and symbol tables bundled into one validated pricing context.

use crate::core::currency::CurrencyCode;
use crate::core::rates::{CurrencyRateProvider, ExchangeRateTable};
use crate::core::symbols::{CurrencyFormat, SymbolPosition, SymbolTable};
use anyhow::{Result, bail};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Rates and display formats that are known to cover the same currencies.
#[derive(Debug, Clone, PartialEq)]
pub struct Pricing {
    rates: ExchangeRateTable,
    symbols: SymbolTable,
}

impl Pricing {
    pub fn new(rates: ExchangeRateTable, symbols: SymbolTable) -> Result<Self> {
        if let Some(code) = rates.codes().find(|code| !symbols.contains(code)) {
            bail!("Currency {code} has an exchange rate but no display format");
        }
        if let Some(code) = symbols.codes().find(|code| !rates.contains(code)) {
            bail!("Currency {code} has a display format but no exchange rate");
        }
        Ok(Pricing { rates, symbols })
    }

    /// The hardcoded marketplace currencies.
    pub fn builtin() -> Self {
        let mut rates = BTreeMap::new();
        let mut symbols = BTreeMap::new();
        for (code, rate, format) in builtin_entries() {
            rates.insert(code.clone(), rate);
            symbols.insert(code, format);
        }
        Pricing {
            rates: ExchangeRateTable::from_trusted(rates, builtin_as_of()),
            symbols: SymbolTable::from_trusted(symbols),
        }
    }

    pub fn rates(&self) -> &ExchangeRateTable {
        &self.rates
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn rate(&self, code: &CurrencyCode) -> Option<f64> {
        self.rates.rate(code)
    }

    pub fn format_for(&self, code: &CurrencyCode) -> Option<&CurrencyFormat> {
        self.symbols.get(code)
    }

    pub fn supports(&self, code: &CurrencyCode) -> bool {
        self.rates.contains(code)
    }

    pub fn currencies(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.rates.codes()
    }
}

impl Default for Pricing {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_as_of() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2025, 1, 15)
}

fn builtin_entries() -> Vec<(CurrencyCode, f64, CurrencyFormat)> {
    let code = |s: &'static str| CurrencyCode::from_static(s);
    vec![
        (code("USD"), 1.0, CurrencyFormat::prefix("$")),
        (code("EUR"), 0.92, CurrencyFormat::prefix("€")),
        (code("GBP"), 0.79, CurrencyFormat::prefix("£")),
        (
            code("PLN"),
            3.98,
            CurrencyFormat {
                symbol: "zł".to_string(),
                position: SymbolPosition::Suffix,
                spaced: true,
                decimal_separator: ',',
                group_separator: ' ',
            },
        ),
    ]
}
