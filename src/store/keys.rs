//! Byte layouts for keys stored in the asset keyspace.
//!
//! Index keys sort by location, then asset type, then most recent purchase
//! first, then ascending id, so a prefix scan yields query order directly.

use crate::core::asset::{Asset, AssetFilter};
use anyhow::{Result, bail};
use chrono::{Datelike, NaiveDate};

const SEPARATOR: u8 = 0;
const TAIL_LEN: usize = 4 + 8;

pub fn record_key(id: u64) -> Vec<u8> {
    id.to_be_bytes().to_vec()
}

pub fn filter_prefix(filter: &AssetFilter) -> Vec<u8> {
    let country = filter.country.name().as_bytes();
    let asset_type = filter.asset_type.name().as_bytes();

    let mut prefix = Vec::with_capacity(country.len() + asset_type.len() + 2);
    prefix.extend_from_slice(country);
    prefix.push(SEPARATOR);
    prefix.extend_from_slice(asset_type);
    prefix.push(SEPARATOR);
    prefix
}

pub fn index_key(asset: &Asset) -> Vec<u8> {
    let filter = AssetFilter {
        country: asset.country,
        asset_type: asset.asset_type,
    };
    let mut key = filter_prefix(&filter);
    key.extend_from_slice(&inverted_date(asset.purchase_date).to_be_bytes());
    key.extend_from_slice(&asset.id.to_be_bytes());
    key
}

/// Recovers the record id from the tail of an index key.
pub fn id_from_index_key(key: &[u8]) -> Result<u64> {
    if key.len() < TAIL_LEN {
        bail!("Index key too short: {} bytes", key.len());
    }
    let mut id = [0u8; 8];
    id.copy_from_slice(&key[key.len() - 8..]);
    Ok(u64::from_be_bytes(id))
}

pub fn decode_u64(bytes: &[u8]) -> Result<u64> {
    let Ok(raw) = <[u8; 8]>::try_from(bytes) else {
        bail!("Expected 8 bytes, found {}", bytes.len());
    };
    Ok(u64::from_be_bytes(raw))
}

pub fn decode_u32(bytes: &[u8]) -> Result<u32> {
    let Ok(raw) = <[u8; 4]>::try_from(bytes) else {
        bail!("Expected 4 bytes, found {}", bytes.len());
    };
    Ok(u32::from_be_bytes(raw))
}

// Later dates map to smaller values.
fn inverted_date(date: NaiveDate) -> u32 {
    let shifted = (i64::from(date.num_days_from_ce()) - i64::from(i32::MIN)) as u32;
    u32::MAX - shifted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::asset::{AssetType, Location};
    use rust_decimal::Decimal;

    fn asset(id: u64, date: (i32, u32, u32)) -> Asset {
        Asset {
            id,
            asset_type: AssetType::Laptop,
            brand: "Dell".to_string(),
            model: "XPS13".to_string(),
            price: Decimal::new(1000, 0),
            purchase_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            country: Location::Usa,
        }
    }

    #[test]
    fn test_index_keys_sort_newest_first_then_by_id() {
        let mut keys = vec![
            index_key(&asset(1, (2024, 1, 10))),
            index_key(&asset(2, (2024, 3, 1))),
            index_key(&asset(4, (2024, 1, 10))),
            index_key(&asset(3, (2023, 12, 31))),
        ];
        keys.sort();
        let ids: Vec<u64> = keys
            .iter()
            .map(|k| id_from_index_key(k).unwrap())
            .collect();
        assert_eq!(ids, vec![2, 1, 4, 3]);
    }

    #[test]
    fn test_index_key_starts_with_filter_prefix() {
        let a = asset(9, (2024, 5, 5));
        let prefix = filter_prefix(&AssetFilter {
            country: Location::Usa,
            asset_type: AssetType::Laptop,
        });
        assert!(index_key(&a).starts_with(&prefix));

        let other = filter_prefix(&AssetFilter {
            country: Location::Usa,
            asset_type: AssetType::Mobiltelefon,
        });
        assert!(!index_key(&a).starts_with(&other));
    }

    #[test]
    fn test_decode_rejects_wrong_lengths() {
        assert_eq!(decode_u64(&7u64.to_be_bytes()).unwrap(), 7);
        assert!(decode_u64(&[1, 2, 3]).is_err());
        assert_eq!(decode_u32(&2u32.to_be_bytes()).unwrap(), 2);
        assert!(decode_u32(&[]).is_err());
        assert!(id_from_index_key(&[0; 5]).is_err());
    }
}
