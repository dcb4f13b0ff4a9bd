//! Cart subtotals in the buyer's display currency.
use crate::core::convert::{convert, round2};
use crate::core::currency::{CurrencyCode, MonetaryAmount, sanitize_optional};
use crate::core::pricing::Pricing;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A listing as it appears in a cart or a marketplace grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub name: String,
    /// Missing prices render and total as zero.
    #[serde(default)]
    pub price: Option<f64>,
    pub currency: CurrencyCode,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl Listing {
    pub fn price(&self) -> f64 {
        sanitize_optional(self.price)
    }

    pub fn unit_price(&self) -> MonetaryAmount {
        MonetaryAmount::new(self.price(), self.currency.clone())
    }
}

/// Converts each unit price to `target` (rounded to cents), multiplies by the
/// quantity, and sums. The sum is rounded to cents again.
pub fn cart_total(pricing: &Pricing, items: &[Listing], target: &CurrencyCode) -> MonetaryAmount {
    let total = items
        .iter()
        .map(|item| {
            let unit = convert(pricing, item.price(), &item.currency, target);
            round2(unit * f64::from(item.quantity))
        })
        .sum::<f64>();
    let currency = target.as_str();
    debug!(items = items.len(), currency, total, "Calculated cart total");
    MonetaryAmount::new(round2(total), target.clone())
}
