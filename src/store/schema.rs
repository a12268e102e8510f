//! Versioned layout of the asset keyspace.

use super::keys;
use crate::core::asset::Asset;
use anyhow::{Context, Result, bail};
use fjall::{Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use tracing::{debug, info};

pub const META_PARTITION: &str = "meta";
pub const ASSETS_PARTITION: &str = "assets";
pub const INDEX_PARTITION: &str = "asset_index";

pub const SCHEMA_VERSION_KEY: &[u8] = b"schema_version";
pub const NEXT_ID_KEY: &[u8] = b"next_id";

struct Migration {
    version: u32,
    name: &'static str,
    apply: fn(&Keyspace) -> Result<()>,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        name: "create_assets",
        apply: create_assets,
    },
    Migration {
        version: 2,
        name: "index_assets_by_location_and_type",
        apply: build_asset_index,
    },
];

pub const LATEST_VERSION: u32 = 2;

pub fn open_partition(keyspace: &Keyspace, name: &str) -> Result<PartitionHandle> {
    keyspace
        .open_partition(name, PartitionCreateOptions::default())
        .with_context(|| format!("Failed to open partition: {name}"))
}

pub fn current_version(meta: &PartitionHandle) -> Result<u32> {
    match meta.get(SCHEMA_VERSION_KEY)? {
        Some(raw) => keys::decode_u32(&raw).context("Corrupt schema version"),
        None => Ok(0),
    }
}

/// Applies every migration newer than the stored schema version, in order.
/// Returns the resulting version.
pub fn migrate(keyspace: &Keyspace) -> Result<u32> {
    let meta = open_partition(keyspace, META_PARTITION)?;
    let mut version = current_version(&meta)?;
    if version > LATEST_VERSION {
        bail!(
            "Store schema version {version} is newer than the supported version {LATEST_VERSION}"
        );
    }

    for migration in MIGRATIONS.iter().filter(move |m| m.version > version) {
        info!(
            version = migration.version,
            name = migration.name,
            "Applying store migration"
        );
        (migration.apply)(keyspace)
            .with_context(|| format!("Migration {} failed", migration.name))?;
        meta.insert(SCHEMA_VERSION_KEY, migration.version.to_be_bytes().to_vec())?;
        keyspace.persist(PersistMode::SyncAll)?;
        version = migration.version;
    }

    debug!(version, "Store schema is up to date");
    Ok(version)
}

fn create_assets(keyspace: &Keyspace) -> Result<()> {
    let meta = open_partition(keyspace, META_PARTITION)?;
    open_partition(keyspace, ASSETS_PARTITION)?;
    if meta.get(NEXT_ID_KEY)?.is_none() {
        meta.insert(NEXT_ID_KEY, 1u64.to_be_bytes().to_vec())?;
    }
    Ok(())
}

fn build_asset_index(keyspace: &Keyspace) -> Result<()> {
    let assets = open_partition(keyspace, ASSETS_PARTITION)?;
    let index = open_partition(keyspace, INDEX_PARTITION)?;

    let mut indexed = 0usize;
    for item in assets.iter() {
        let (key, value) = item?;
        let asset: Asset = serde_json::from_slice(&value)
            .with_context(|| format!("Failed to decode asset record {:?}", &*key))?;
        index.insert(keys::index_key(&asset), keys::record_key(asset.id))?;
        indexed += 1;
    }
    debug!(indexed, "Backfilled asset index");
    Ok(())
}
