use anyhow::Result;
use asset_tracker::cli::menu::Prompt;
use asset_tracker::core::config::AppConfig;
use asset_tracker::core::{AssetFilter, AssetType, Location, NewAsset};
use asset_tracker::store::{AssetRepository, AssetStore};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;
use tracing::info;

mod test_utils {
    use super::*;

    pub struct ScriptedPrompt {
        lines: VecDeque<String>,
    }

    impl ScriptedPrompt {
        pub fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|l| l.to_string()).collect(),
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn read_line(&mut self) -> Result<Option<String>> {
            Ok(self.lines.pop_front())
        }
    }

    pub fn seed_store(path: &Path) {
        let store = AssetStore::open(path).expect("Failed to open store");
        let seed = [
            (AssetType::Laptop, "Dell", "XPS13", 1000, (2024, 1, 10), Location::Usa),
            (AssetType::Laptop, "HP", "EliteBook", 900, (2024, 3, 1), Location::Usa),
            (AssetType::Mobiltelefon, "Apple", "iPhone14", 800, (2024, 2, 1), Location::Usa),
            (AssetType::Laptop, "Lenovo", "ThinkPad", 900, (2023, 11, 20), Location::Tyskland),
        ];
        for (asset_type, brand, model, price, (y, m, d), country) in seed {
            store
                .insert(NewAsset {
                    asset_type,
                    brand: brand.to_string(),
                    model: model.to_string(),
                    price: Decimal::new(price, 0),
                    purchase_date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
                    country,
                })
                .expect("Failed to seed asset");
        }
    }

    pub fn config_for(path: &Path) -> AppConfig {
        AppConfig {
            data_path: Some(path.to_string_lossy().into_owned()),
        }
    }
}

#[test_log::test]
fn test_full_session_over_seeded_store() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    test_utils::seed_store(dir.path());

    let config = test_utils::config_for(dir.path());
    let mut prompt = test_utils::ScriptedPrompt::new(&["1", "1", "y", "4", "1", "n"]);
    let mut out = Vec::new();

    let result = asset_tracker::run_session(&config, &mut prompt, &mut out);
    assert!(result.is_ok(), "Session failed with: {:?}", result.err());

    let output = String::from_utf8(out).unwrap();
    info!(%output, "Session output");

    let elite = output.find("EliteBook").expect("EliteBook listed");
    let xps = output.find("XPS13").expect("XPS13 listed");
    assert!(elite < xps, "Most recent purchase should be listed first");
    assert!(output.contains("$900.00"));
    assert!(output.contains("$1000.00"));
    assert!(output.contains("2024-03-01"));
    assert!(!output.contains("iPhone14"));
    // Sverige has no laptops: header only.
    assert!(output.contains("Pris i SEK"));
    assert!(!output.contains(" kr"));
    assert!(!output.contains("ThinkPad"));
}

#[test_log::test]
fn test_session_converts_prices_to_office_currency() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    test_utils::seed_store(dir.path());

    let config = test_utils::config_for(dir.path());
    let mut prompt = test_utils::ScriptedPrompt::new(&["2", "1", "n"]);
    let mut out = Vec::new();

    let result = asset_tracker::run_session(&config, &mut prompt, &mut out);
    assert!(result.is_ok(), "Session failed with: {:?}", result.err());

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Pris i EUR"));
    assert!(output.contains("ThinkPad"));
    assert!(output.contains("765.00 EUR"));
    assert!(!output.contains("900.00 EUR"));
    assert!(!output.contains("EliteBook"));
}

#[test_log::test]
fn test_store_scenario_queries() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    test_utils::seed_store(dir.path());

    let store = AssetStore::open(dir.path()).expect("Failed to reopen store");
    assert_eq!(store.len().unwrap(), 4);

    let laptops = store
        .query(&AssetFilter {
            country: Location::Usa,
            asset_type: AssetType::Laptop,
        })
        .unwrap();
    let listed: Vec<(&str, Decimal)> = laptops
        .iter()
        .map(|a| (a.model.as_str(), a.price))
        .collect();
    assert_eq!(
        listed,
        vec![
            ("EliteBook", Decimal::new(900, 0)),
            ("XPS13", Decimal::new(1000, 0))
        ]
    );
    assert!(laptops.iter().all(|a| a.country == Location::Usa));
    assert!(laptops.iter().all(|a| a.asset_type == AssetType::Laptop));

    let none = store
        .query(&AssetFilter {
            country: Location::Sverige,
            asset_type: AssetType::Laptop,
        })
        .unwrap();
    assert!(none.is_empty());
}

#[test_log::test]
fn test_run_with_config_file() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store_dir = dir.path().join("store");
    let config_path = dir.path().join("config.yaml");
    fs::write(
        &config_path,
        format!("data_path: \"{}\"\n", store_dir.display()),
    )
    .expect("Failed to write config file");

    let config = AppConfig::load_from_path(&config_path).unwrap();
    let mut prompt = test_utils::ScriptedPrompt::new(&["3", "2", "n"]);
    let mut out = Vec::new();

    let result = asset_tracker::run_session(&config, &mut prompt, &mut out);
    assert!(result.is_ok(), "Session failed with: {:?}", result.err());
    assert!(store_dir.exists(), "Store should be created on first run");

    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("Välkommen till Asset Tracking System"));
    assert!(output.contains("Pris i GBP"));
}

#[test_log::test]
fn test_unusable_store_location_fails_before_prompting() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "occupied").unwrap();

    let config = test_utils::config_for(&blocker);
    let mut prompt = test_utils::ScriptedPrompt::new(&["1", "1", "n"]);
    let mut out = Vec::new();

    let result = asset_tracker::run_session(&config, &mut prompt, &mut out);
    let err = result.expect_err("Opening a store on a file should fail");
    assert!(err.to_string().contains("Could not initialize asset store"));
    assert!(out.is_empty(), "No prompt should be shown");
}

#[test_log::test]
fn test_missing_explicit_config_is_an_error() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = dir.path().join("nope.yaml");

    let result = asset_tracker::run(Some(missing.to_str().unwrap()));
    assert!(result.is_err());
}
