use super::ui;
use crate::core::{CurrencyRateProvider, Pricing, format_price};
use comfy_table::Cell;

const SAMPLE_AMOUNT: f64 = 1234.56;

/// Lists every configured currency with its rate and a formatted sample.
pub fn render(pricing: &Pricing) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell("Symbol"),
        ui::header_cell("Per USD"),
        ui::header_cell("Example"),
    ]);

    for code in pricing.currencies() {
        let symbol = pricing
            .format_for(code)
            .map_or(String::new(), |f| f.symbol.clone());
        let rate = pricing.rates().rate(code).unwrap_or(f64::NAN);
        table.add_row(vec![
            Cell::new(code.as_str()),
            Cell::new(symbol),
            ui::price_cell(&format!("{rate:.4}")),
            ui::price_cell(&format_price(pricing, SAMPLE_AMOUNT, code, true)),
        ]);
    }

    let as_of = pricing
        .rates()
        .as_of()
        .map_or("unknown date".to_string(), |d| d.format("%Y-%m-%d").to_string());
    format!(
        "{} {}\n\n{}",
        ui::style_text("Exchange rates", ui::StyleType::Title),
        ui::style_text(&format!("(as of {as_of})"), ui::StyleType::Subtle),
        table
    )
}

pub fn run(pricing: &Pricing) {
    println!("{}", render(pricing));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_all_currencies() {
        let output = render(&Pricing::builtin());
        for expected in ["USD", "EUR", "GBP", "PLN", "0.9200", "1 234,56 zł", "€1,234.56"] {
            assert!(output.contains(expected), "missing {expected} in\n{output}");
        }
        assert!(output.contains("2025-01-15"));
    }
}
