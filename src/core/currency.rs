//! Currency codes and monetary amounts

use anyhow::{Result, anyhow};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// ISO-style currency code, always stored upper-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// The reference currency every conversion is routed through.
    pub const BASE: &'static str = "USD";

    pub fn base() -> Self {
        CurrencyCode(Self::BASE.to_string())
    }

    /// For literal, already upper-case codes.
    pub(crate) fn from_static(code: &'static str) -> Self {
        CurrencyCode(code.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_base(&self) -> bool {
        self.0 == Self::BASE
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(anyhow!("Invalid currency code: {:?}", s));
        }
        Ok(CurrencyCode(code))
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Replaces NaN and infinities with zero so they never reach arithmetic.
pub fn sanitize_amount(amount: f64) -> f64 {
    if amount.is_finite() { amount } else { 0.0 }
}

/// Same as [`sanitize_amount`] for values that may be missing altogether.
pub fn sanitize_optional(amount: Option<f64>) -> f64 {
    amount.map_or(0.0, sanitize_amount)
}

/// A price expressed in some currency.
#[derive(Debug, Clone, PartialEq)]
pub struct MonetaryAmount {
    pub value: f64,
    pub currency: CurrencyCode,
}

impl MonetaryAmount {
    pub fn new(value: f64, currency: CurrencyCode) -> Self {
        MonetaryAmount {
            value: sanitize_amount(value),
            currency,
        }
    }
}
