//! Core domain types and abstractions

pub mod asset;
pub mod config;
pub mod currency;
pub mod log;

// Re-export main types for cleaner imports
pub use asset::{Asset, AssetFilter, AssetType, Location, NewAsset};
pub use currency::{Currency, CurrencyRateProvider, RateTable};
