use crate::core::{CurrencyCode, Pricing, convert, format_price, try_convert, try_format_price};
use anyhow::Result;

/// Renders `amount` in `from` next to its equivalent in `to`, e.g. `$100.00 = €92.00`.
pub fn render(
    pricing: &Pricing,
    amount: f64,
    from: &CurrencyCode,
    to: &CurrencyCode,
    strict: bool,
) -> Result<String> {
    let (source, target) = if strict {
        let converted = try_convert(pricing, amount, from, to)?;
        (
            try_format_price(pricing, amount, from, true)?,
            try_format_price(pricing, converted, to, true)?,
        )
    } else {
        let converted = convert(pricing, amount, from, to);
        (
            format_price(pricing, amount, from, true),
            format_price(pricing, converted, to, true),
        )
    };
    Ok(format!("{source} = {target}"))
}

pub fn run(
    pricing: &Pricing,
    amount: f64,
    from: &CurrencyCode,
    to: &CurrencyCode,
    strict: bool,
) -> Result<()> {
    println!("{}", render(pricing, amount, from, to, strict)?);
    Ok(())
}
