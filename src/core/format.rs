//! Locale-independent rendering of prices.
//!
//! Number formatting never consults the process locale, so the same input
//! renders identically on every machine.

use crate::core::convert::round2;
use crate::core::currency::{CurrencyCode, MonetaryAmount, sanitize_amount};
use crate::core::pricing::Pricing;
use crate::core::symbols::{CurrencyFormat, SymbolPosition};
use anyhow::{Result, anyhow};
use std::borrow::Cow;
use tracing::warn;

/// Renders `amount` with two decimals, grouped thousands and, optionally,
/// the currency symbol. Unknown currencies fall back to the raw code.
pub fn format_price(
    pricing: &Pricing,
    amount: f64,
    currency: &CurrencyCode,
    show_symbol: bool,
) -> String {
    let format = match pricing.format_for(currency) {
        Some(format) => Cow::Borrowed(format),
        None => {
            warn!(%currency, "No display format configured, using currency code");
            Cow::Owned(CurrencyFormat::fallback(currency))
        }
    };
    render(&format, amount, show_symbol)
}

/// Like [`format_price`], but fails on currencies without a display format.
pub fn try_format_price(
    pricing: &Pricing,
    amount: f64,
    currency: &CurrencyCode,
    show_symbol: bool,
) -> Result<String> {
    let format = pricing
        .format_for(currency)
        .ok_or_else(|| anyhow!("No display format configured for {currency}"))?;
    Ok(render(format, amount, show_symbol))
}

pub fn format_amount(pricing: &Pricing, amount: &MonetaryAmount, show_symbol: bool) -> String {
    format_price(pricing, amount.value, &amount.currency, show_symbol)
}

fn render(format: &CurrencyFormat, amount: f64, show_symbol: bool) -> String {
    let rounded = round2(sanitize_amount(amount));
    let negative = rounded < 0.0;
    let number = format_number(rounded.abs(), format.decimal_separator, format.group_separator);

    let mut output = String::with_capacity(number.len() + format.symbol.len() + 2);
    if negative {
        output.push('-');
    }
    if !show_symbol {
        output.push_str(&number);
        return output;
    }
    match format.position {
        SymbolPosition::Prefix => {
            output.push_str(&format.symbol);
            if format.spaced {
                output.push(' ');
            }
            output.push_str(&number);
        }
        SymbolPosition::Suffix => {
            output.push_str(&number);
            if format.spaced {
                output.push(' ');
            }
            output.push_str(&format.symbol);
        }
    }
    output
}

/// Formats a non-negative value with exactly two decimals.
fn format_number(value: f64, decimal_separator: char, group_separator: char) -> String {
    // `{:.2}` is locale-independent and always uses '.' and no grouping.
    let plain = format!("{value:.2}");
    let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3 + 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(group_separator);
        }
        grouped.push(digit);
    }
    grouped.push(decimal_separator);
    grouped.push_str(fraction);
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> CurrencyCode {
        s.parse().unwrap()
    }

    #[test]
    fn test_usd_with_symbol() {
        let pricing = Pricing::builtin();
        assert_eq!(format_price(&pricing, 19.99, &code("USD"), true), "$19.99");
        assert_eq!(format_price(&pricing, 0.0, &code("USD"), true), "$0.00");
        assert_eq!(format_price(&pricing, 5.0, &code("USD"), true), "$5.00");
    }

    #[test]
    fn test_non_finite_renders_as_zero() {
        let pricing = Pricing::builtin();
        assert_eq!(format_price(&pricing, f64::NAN, &code("USD"), true), "$0.00");
        assert_eq!(
            format_price(&pricing, f64::INFINITY, &code("USD"), true),
            "$0.00"
        );
    }

    #[test]
    fn test_eur_uses_its_symbol() {
        let pricing = Pricing::builtin();
        assert_eq!(format_price(&pricing, 92.0, &code("EUR"), true), "€92.00");
    }

    #[test]
    fn test_thousands_grouping() {
        let pricing = Pricing::builtin();
        let usd = code("USD");
        assert_eq!(format_price(&pricing, 999.0, &usd, true), "$999.00");
        assert_eq!(format_price(&pricing, 1000.0, &usd, true), "$1,000.00");
        assert_eq!(format_price(&pricing, 1234567.891, &usd, true), "$1,234,567.89");
        assert_eq!(format_price(&pricing, 100000.0, &usd, false), "100,000.00");
    }

    #[test]
    fn test_suffix_currency() {
        let pricing = Pricing::builtin();
        assert_eq!(
            format_price(&pricing, 1234.56, &code("PLN"), true),
            "1 234,56 zł"
        );
        assert_eq!(format_price(&pricing, 1234.56, &code("PLN"), false), "1 234,56");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        let pricing = Pricing::builtin();
        assert_eq!(format_price(&pricing, 0.125, &code("USD"), true), "$0.13");
        assert_eq!(format_price(&pricing, 9.999, &code("USD"), true), "$10.00");
        assert_eq!(format_price(&pricing, 999.999, &code("USD"), true), "$1,000.00");
    }

    #[test]
    fn test_negative_amounts() {
        let pricing = Pricing::builtin();
        assert_eq!(format_price(&pricing, -5.5, &code("USD"), true), "-$5.50");
        assert_eq!(format_price(&pricing, -1234.5, &code("PLN"), true), "-1 234,50 zł");
        assert_eq!(format_price(&pricing, -0.001, &code("USD"), true), "$0.00");
    }

    #[test]
    fn test_unknown_currency_falls_back_to_code() {
        let pricing = Pricing::builtin();
        assert_eq!(format_price(&pricing, 50.0, &code("ZZZ"), true), "ZZZ 50.00");
        assert_eq!(format_price(&pricing, 50.0, &code("ZZZ"), false), "50.00");
        assert!(try_format_price(&pricing, 50.0, &code("ZZZ"), true).is_err());
    }

    #[test]
    fn test_always_two_decimals() {
        let pricing = Pricing::builtin();
        for x in [0.0, 0.1, 0.01, 1.0, 12.3, 99.999, 1e6, 123456789.5, 1e15] {
            let rendered = format_price(&pricing, x, &code("USD"), false);
            let (_, fraction) = rendered.split_once('.').unwrap();
            assert_eq!(fraction.len(), 2, "{rendered}");
            assert!(fraction.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_huge_amounts_keep_two_decimals() {
        let pricing = Pricing::builtin();
        for (amount, currency) in [(1e307, "USD"), (f64::MAX, "USD"), (f64::MAX, "PLN")] {
            let rendered = format_price(&pricing, amount, &code(currency), false);
            assert!(!rendered.contains("inf"), "{rendered}");
            let decimal = if currency == "PLN" { ',' } else { '.' };
            let (integer, fraction) = rendered.rsplit_once(decimal).unwrap();
            assert_eq!(fraction, "00");
            assert!(integer.chars().all(|c| c.is_ascii_digit() || c == ',' || c == ' '));
            assert!(integer.chars().filter(char::is_ascii_digit).count() >= 307);
        }
        assert!(format_price(&pricing, f64::MAX, &code("USD"), true).starts_with("$179,769,313"));
        assert!(format_price(&pricing, f64::MAX, &code("PLN"), true).ends_with(",00 zł"));
    }

    #[test]
    fn test_format_amount() {
        let pricing = Pricing::builtin();
        let amount = MonetaryAmount::new(1299.99, code("GBP"));
        assert_eq!(format_amount(&pricing, &amount, true), "£1,299.99");
    }
}
