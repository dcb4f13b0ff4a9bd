use crate::core::{CurrencyCode, Pricing, format_price, try_format_price};
use anyhow::Result;

pub fn render(
    pricing: &Pricing,
    amount: f64,
    currency: &CurrencyCode,
    show_symbol: bool,
    strict: bool,
) -> Result<String> {
    if strict {
        try_format_price(pricing, amount, currency, show_symbol)
    } else {
        Ok(format_price(pricing, amount, currency, show_symbol))
    }
}

pub fn run(
    pricing: &Pricing,
    amount: f64,
    currency: &CurrencyCode,
    show_symbol: bool,
    strict: bool,
) -> Result<()> {
    println!("{}", render(pricing, amount, currency, show_symbol, strict)?);
    Ok(())
}
