//! Static exchange rate table relative to the base currency

use crate::core::currency::CurrencyCode;
use anyhow::{Result, bail};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

/// Looks up how many units of a currency equal one unit of the base currency.
pub trait CurrencyRateProvider: Send + Sync {
    fn rate(&self, code: &CurrencyCode) -> Option<f64>;
}

/// Immutable mapping of currency code to units per 1 USD.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRateTable {
    rates: BTreeMap<CurrencyCode, f64>,
    as_of: Option<NaiveDate>,
}

impl ExchangeRateTable {
    /// Builds a table, rejecting non-positive or non-finite rates and a USD
    /// entry that is not exactly 1.0.
    pub fn new<I>(entries: I, as_of: Option<NaiveDate>) -> Result<Self>
    where
        I: IntoIterator<Item = (CurrencyCode, f64)>,
    {
        let mut rates = BTreeMap::new();
        for (code, rate) in entries {
            if !rate.is_finite() || rate <= 0.0 {
                bail!("Exchange rate for {code} must be a positive number, got {rate}");
            }
            if code.is_base() && rate != 1.0 {
                bail!("Exchange rate for base currency {code} must be 1.0, got {rate}");
            }
            if rates.insert(code.clone(), rate).is_some() {
                bail!("Duplicate exchange rate entry for {code}");
            }
        }
        debug!("Built exchange rate table with {} entries", rates.len());
        Ok(ExchangeRateTable { rates, as_of })
    }

    /// Builds a table from entries that are already known to be valid.
    pub(crate) fn from_trusted(rates: BTreeMap<CurrencyCode, f64>, as_of: Option<NaiveDate>) -> Self {
        ExchangeRateTable { rates, as_of }
    }

    pub fn as_of(&self) -> Option<NaiveDate> {
        self.as_of
    }

    pub fn contains(&self, code: &CurrencyCode) -> bool {
        self.rates.contains_key(code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &CurrencyCode> {
        self.rates.keys()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl CurrencyRateProvider for ExchangeRateTable {
    fn rate(&self, code: &CurrencyCode) -> Option<f64> {
        self.rates.get(code).copied()
    }
}
