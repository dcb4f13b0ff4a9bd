use super::ui;
use crate::core::cache::PriceCache;
use crate::core::cart::{Listing, cart_total};
use crate::core::{CurrencyCode, DisplayPreference, PriceLabel, Pricing, format_amount};
use comfy_table::Cell;
use tracing::debug;

/// Renders the marketplace grid with every price shown in `display`,
/// followed by the cart total.
pub fn render(pricing: &Pricing, listings: &[Listing], display: &CurrencyCode) -> String {
    let preference = DisplayPreference::new(display.clone());
    let cache = PriceCache::new();
    let mut labels: Vec<PriceLabel> = listings
        .iter()
        .map(|l| PriceLabel::new(l.price(), l.currency.clone(), true, preference.subscribe()))
        .collect();

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Listing"),
        ui::header_cell("Qty"),
        ui::header_cell("Listed price"),
        ui::header_cell(&format!("Price ({display})")),
    ]);

    for (listing, label) in listings.iter().zip(labels.iter_mut()) {
        table.add_row(vec![
            Cell::new(&listing.name),
            ui::price_cell(&listing.quantity.to_string()),
            ui::price_cell(&format_amount(pricing, &listing.unit_price(), true)),
            ui::price_cell(label.render_cached(pricing, &cache)),
        ]);
    }
    debug!(
        hits = cache.hits(),
        misses = cache.misses(),
        "Rendered listing grid"
    );

    let total = cart_total(pricing, listings, display);
    table.add_row(vec![
        Cell::new(ui::style_text("Cart total", ui::StyleType::TotalLabel)),
        Cell::new(""),
        Cell::new(""),
        ui::total_cell(&format_amount(pricing, &total, true)),
    ]);

    let mut output = format!(
        "{}\n\n",
        ui::style_text("Marketplace listings", ui::StyleType::Title)
    );
    output.push_str(&table.to_string());
    output.push_str(&format!(
        "\n\nTotal ({}): {}",
        ui::style_text(display.as_str(), ui::StyleType::TotalLabel),
        ui::style_text(&format_amount(pricing, &total, true), ui::StyleType::TotalValue)
    ));
    output
}

pub fn run(pricing: &Pricing, listings: &[Listing], display: &CurrencyCode) {
    if listings.is_empty() {
        println!("No listings configured");
        return;
    }
    println!("{}", render(pricing, listings, display));
}
