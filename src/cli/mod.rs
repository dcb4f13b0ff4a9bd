//! Command-line front end

pub mod convert;
pub mod format;
pub mod listings;
pub mod rates;
pub mod setup;
pub mod ui;
