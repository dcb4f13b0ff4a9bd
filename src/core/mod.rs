//! Currency normalization: rate and symbol tables, conversion, formatting

pub mod cache;
pub mod cart;
pub mod config;
pub mod convert;
pub mod currency;
pub mod format;
pub mod label;
pub mod log;
pub mod pricing;
pub mod rates;
pub mod symbols;

// Re-export main types for cleaner imports
pub use convert::{convert, round2, try_convert};
pub use currency::{CurrencyCode, MonetaryAmount};
pub use format::{format_amount, format_price, try_format_price};
pub use label::{DisplayPreference, PriceLabel};
pub use pricing::Pricing;
pub use rates::{CurrencyRateProvider, ExchangeRateTable};
