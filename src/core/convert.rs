//! Conversion between currencies through the base currency.

use crate::core::currency::{CurrencyCode, MonetaryAmount, sanitize_amount};
use crate::core::pricing::Pricing;
use anyhow::{Result, anyhow};
use tracing::{debug, warn};

/// Neutral factor used for a currency missing from the rate table.
const NEUTRAL_RATE: f64 = 1.0;

/// Rounds to cents, half away from zero. Values too large to scale have no
/// fractional cents and are returned as is.
pub fn round2(value: f64) -> f64 {
    let cents = value * 100.0;
    if !cents.is_finite() {
        return value;
    }
    cents.round() / 100.0
}

/// Converts `amount` from one currency to another.
///
/// Non-finite amounts are treated as zero. Converting a currency to itself
/// returns the amount untouched. Otherwise the amount is routed through the
/// base currency and rounded to cents once, at the end. A currency missing
/// from the rate table contributes a factor of 1.0 and logs a warning.
pub fn convert(pricing: &Pricing, amount: f64, from: &CurrencyCode, to: &CurrencyCode) -> f64 {
    let amount = sanitize_amount(amount);
    if from == to {
        return amount;
    }
    let from_rate = rate_or_neutral(pricing, from);
    let to_rate = rate_or_neutral(pricing, to);
    convert_with_rates(amount, from_rate, to_rate)
}

/// Like [`convert`], but fails on currencies missing from the rate table.
pub fn try_convert(
    pricing: &Pricing,
    amount: f64,
    from: &CurrencyCode,
    to: &CurrencyCode,
) -> Result<f64> {
    let amount = sanitize_amount(amount);
    if from == to {
        return Ok(amount);
    }
    let from_rate = pricing
        .rate(from)
        .ok_or_else(|| anyhow!("No exchange rate configured for {from}"))?;
    let to_rate = pricing
        .rate(to)
        .ok_or_else(|| anyhow!("No exchange rate configured for {to}"))?;
    Ok(convert_with_rates(amount, from_rate, to_rate))
}

fn convert_with_rates(amount: f64, from_rate: f64, to_rate: f64) -> f64 {
    let base = amount / from_rate;
    // Overflow past f64::MAX is treated like any other non-finite amount
    let converted = sanitize_amount(round2(base * to_rate));
    debug!(amount, from_rate, to_rate, converted, "Converted amount");
    converted
}

fn rate_or_neutral(pricing: &Pricing, code: &CurrencyCode) -> f64 {
    pricing.rate(code).unwrap_or_else(|| {
        warn!(currency = %code, "No exchange rate configured, using neutral rate");
        NEUTRAL_RATE
    })
}

impl MonetaryAmount {
    /// Returns this amount expressed in `target`, leaving `self` untouched.
    pub fn convert_to(&self, pricing: &Pricing, target: &CurrencyCode) -> MonetaryAmount {
        MonetaryAmount {
            value: convert(pricing, self.value, &self.currency, target),
            currency: target.clone(),
        }
    }
}
