//! Price labels that follow the user's display currency.
//!
//! A [`PriceLabel`] keeps the last rendered string and reruns the
//! convert-then-format pipeline only when one of its inputs changed.

use crate::core::cache::PriceCache;
use crate::core::convert::convert;
use crate::core::currency::{CurrencyCode, sanitize_amount};
use crate::core::format::format_price;
use crate::core::pricing::Pricing;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// The user's selected display currency.
///
/// Owned by the surrounding UI state; labels only hold receivers.
#[derive(Debug)]
pub struct DisplayPreference {
    sender: watch::Sender<CurrencyCode>,
}

impl DisplayPreference {
    pub fn new(currency: CurrencyCode) -> Self {
        let (sender, _) = watch::channel(currency);
        DisplayPreference { sender }
    }

    pub fn current(&self) -> CurrencyCode {
        self.sender.borrow().clone()
    }

    /// Changes the display currency. Subscribers are only notified when the
    /// value actually differs.
    pub fn select(&self, currency: CurrencyCode) {
        self.sender.send_if_modified(|current| {
            if *current == currency {
                return false;
            }
            debug!(from = %current, to = %currency, "Display currency changed");
            *current = currency;
            true
        });
    }

    pub fn subscribe(&self) -> watch::Receiver<CurrencyCode> {
        self.sender.subscribe()
    }
}

/// Everything the rendered output depends on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabelKey {
    amount_bits: u64,
    from: CurrencyCode,
    show_symbol: bool,
    display: CurrencyCode,
}

impl LabelKey {
    pub fn new(amount: f64, from: CurrencyCode, show_symbol: bool, display: CurrencyCode) -> Self {
        LabelKey {
            amount_bits: sanitize_amount(amount).to_bits(),
            from,
            show_symbol,
            display,
        }
    }

    pub fn amount(&self) -> f64 {
        f64::from_bits(self.amount_bits)
    }

    pub fn display(&self) -> &CurrencyCode {
        &self.display
    }

    /// Runs the conversion and formatting pipeline for this key.
    pub fn render(&self, pricing: &Pricing) -> String {
        let converted = convert(pricing, self.amount(), &self.from, &self.display);
        format_price(pricing, converted, &self.display, self.show_symbol)
    }
}

#[derive(Debug)]
pub struct PriceLabel {
    amount: f64,
    from: CurrencyCode,
    show_symbol: bool,
    preference: watch::Receiver<CurrencyCode>,
    memo: Option<(LabelKey, Arc<str>)>,
    recomputations: usize,
}

impl PriceLabel {
    pub fn new(
        amount: f64,
        from: CurrencyCode,
        show_symbol: bool,
        preference: watch::Receiver<CurrencyCode>,
    ) -> Self {
        PriceLabel {
            amount,
            from,
            show_symbol,
            preference,
            memo: None,
            recomputations: 0,
        }
    }

    pub fn set_amount(&mut self, amount: f64) {
        self.amount = amount;
    }

    pub fn set_currency(&mut self, from: CurrencyCode) {
        self.from = from;
    }

    pub fn set_show_symbol(&mut self, show_symbol: bool) {
        self.show_symbol = show_symbol;
    }

    /// Number of times the pipeline actually ran.
    pub fn recompute_count(&self) -> usize {
        self.recomputations
    }

    pub fn key(&self) -> LabelKey {
        let display = self.preference.borrow().clone();
        LabelKey::new(self.amount, self.from.clone(), self.show_symbol, display)
    }

    /// Returns the formatted price in the current display currency.
    pub fn render(&mut self, pricing: &Pricing) -> &str {
        self.refresh(|key| key.render(pricing).into())
    }

    /// Like [`PriceLabel::render`], but a recompute goes through a cache
    /// shared with other labels.
    pub fn render_cached(&mut self, pricing: &Pricing, cache: &PriceCache) -> &str {
        self.refresh(|key| cache.get_or_render(key, pricing))
    }

    fn refresh(&mut self, compute: impl FnOnce(&LabelKey) -> Arc<str>) -> &str {
        let key = self.key();
        let stale = self.memo.as_ref().is_none_or(|(cached, _)| *cached != key);
        if stale {
            let output = compute(&key);
            self.recomputations += 1;
            debug!(display = %key.display(), %output, "Recomputed price label");
            self.memo = Some((key, output));
        }
        self.memo.as_ref().map_or("", |(_, output)| &**output)
    }
}
