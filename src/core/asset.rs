//! Asset records and the dimensions they are filtered by

use super::currency::Currency;
use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Office location an asset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "USA")]
    Usa,
    Tyskland,
    Storbritannien,
    Sverige,
}

impl Location {
    pub const ALL: [Location; 4] = [
        Location::Usa,
        Location::Tyskland,
        Location::Storbritannien,
        Location::Sverige,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Location::Usa => "USA",
            Location::Tyskland => "Tyskland",
            Location::Storbritannien => "Storbritannien",
            Location::Sverige => "Sverige",
        }
    }

    /// Currency prices are shown in for this office.
    pub fn currency(&self) -> Currency {
        match self {
            Location::Usa => Currency::Usd,
            Location::Tyskland => Currency::Eur,
            Location::Storbritannien => Currency::Gbp,
            Location::Sverige => Currency::Sek,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Location {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Location::ALL
            .into_iter()
            .find(|l| l.name() == s)
            .ok_or_else(|| anyhow!("Unknown location: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetType {
    Laptop,
    Mobiltelefon,
}

impl AssetType {
    pub const ALL: [AssetType; 2] = [AssetType::Laptop, AssetType::Mobiltelefon];

    pub fn name(&self) -> &'static str {
        match self {
            AssetType::Laptop => "Laptop",
            AssetType::Mobiltelefon => "Mobiltelefon",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AssetType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        AssetType::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| anyhow!("Unknown asset type: {s}"))
    }
}

/// A purchased asset as persisted by the store. `price` is in USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: u64,
    pub asset_type: AssetType,
    pub brand: String,
    pub model: String,
    pub price: Decimal,
    pub purchase_date: NaiveDate,
    pub country: Location,
}

/// An asset that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAsset {
    pub asset_type: AssetType,
    pub brand: String,
    pub model: String,
    pub price: Decimal,
    pub purchase_date: NaiveDate,
    pub country: Location,
}

impl NewAsset {
    pub fn into_asset(self, id: u64) -> Asset {
        Asset {
            id,
            asset_type: self.asset_type,
            brand: self.brand,
            model: self.model,
            price: self.price,
            purchase_date: self.purchase_date,
            country: self.country,
        }
    }
}

/// Exact-match filter on both dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetFilter {
    pub country: Location,
    pub asset_type: AssetType,
}

impl AssetFilter {
    #[cfg(test)]
    pub(crate) fn matches(&self, asset: &Asset) -> bool {
        asset.country == self.country && asset.asset_type == self.asset_type
    }
}
