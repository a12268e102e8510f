pub mod keys;
pub mod schema;

use crate::core::asset::{Asset, AssetFilter, NewAsset};
use anyhow::{Context, Result, bail};
use fjall::{Keyspace, PartitionHandle, PersistMode};
use schema::{ASSETS_PARTITION, INDEX_PARTITION, META_PARTITION, NEXT_ID_KEY};
use std::path::Path;
use tracing::debug;

/// Read access to assets, as needed by the interactive session.
pub trait AssetRepository {
    /// Assets matching both fields of `filter`, most recent purchase first.
    /// Ties on purchase date are ordered by ascending id.
    fn query(&self, filter: &AssetFilter) -> Result<Vec<Asset>>;
}

/// Asset collection persisted in a `fjall` keyspace.
pub struct AssetStore {
    keyspace: Keyspace,
    meta: PartitionHandle,
    assets: PartitionHandle,
    index: PartitionHandle,
}

impl AssetStore {
    /// Opens the store at `path`, creating it if needed, and upgrades its
    /// schema to the latest version.
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create store directory: {}", path.display()))?;

        let keyspace = fjall::Config::new(path)
            .open()
            .with_context(|| format!("Failed to open asset store at {}", path.display()))?;
        let version = schema::migrate(&keyspace).context("Failed to upgrade store schema")?;
        debug!(path = %path.display(), version, "Opened asset store");

        Ok(Self {
            meta: schema::open_partition(&keyspace, META_PARTITION)?,
            assets: schema::open_partition(&keyspace, ASSETS_PARTITION)?,
            index: schema::open_partition(&keyspace, INDEX_PARTITION)?,
            keyspace,
        })
    }

    /// Stores a new asset under the next free id. Used for seeding.
    pub fn insert(&self, new_asset: NewAsset) -> Result<Asset> {
        if new_asset.price.is_sign_negative() {
            bail!(
                "Asset price must not be negative: {} {} costs {}",
                new_asset.brand,
                new_asset.model,
                new_asset.price
            );
        }

        let id = self.next_id()?;
        let asset = new_asset.into_asset(id);
        let record = serde_json::to_vec(&asset)?;

        let mut batch = self.keyspace.batch();
        batch.insert(&self.assets, keys::record_key(id), record);
        batch.insert(&self.index, keys::index_key(&asset), keys::record_key(id));
        batch.insert(&self.meta, NEXT_ID_KEY, (id + 1).to_be_bytes().to_vec());
        batch.commit()?;
        self.keyspace.persist(PersistMode::SyncAll)?;

        debug!(id, brand = %asset.brand, model = %asset.model, "Inserted asset");
        Ok(asset)
    }

    pub fn get(&self, id: u64) -> Result<Option<Asset>> {
        self.assets
            .get(keys::record_key(id))?
            .map(|raw| {
                serde_json::from_slice(&raw)
                    .with_context(|| format!("Failed to decode asset record {id}"))
            })
            .transpose()
    }

    /// Number of stored assets.
    pub fn len(&self) -> Result<usize> {
        Ok(self.assets.len()?)
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.assets.is_empty()?)
    }

    fn next_id(&self) -> Result<u64> {
        match self.meta.get(NEXT_ID_KEY)? {
            Some(raw) => keys::decode_u64(&raw).context("Corrupt id counter"),
            None => Ok(1),
        }
    }
}

impl AssetRepository for AssetStore {
    fn query(&self, filter: &AssetFilter) -> Result<Vec<Asset>> {
        let mut results = Vec::new();
        for item in self.index.prefix(keys::filter_prefix(filter)) {
            let (key, _) = item?;
            let id = keys::id_from_index_key(&key)?;
            let asset = self
                .get(id)?
                .with_context(|| format!("Index refers to missing asset {id}"))?;
            results.push(asset);
        }
        debug!(
            country = %filter.country,
            asset_type = %filter.asset_type,
            count = results.len(),
            "Queried assets"
        );
        Ok(results)
    }
}
