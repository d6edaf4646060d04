//! # API Facade
//!
//! Single entry point for every operation a front end needs: inventory
//! load/save, cache load/save, bulk import, remote sync and search, and
//! cache search. The facade holds the resolved paths and the catalog
//! source; it does no business logic of its own and never touches stdout.
//!
//! Generic over [`CatalogSource`] so the network edge can be stubbed in
//! tests, the same way the storage seam works in similar layered designs.

use crate::config::CardzConfig;
use crate::error::Result;
use crate::importer::{self, ImportSummary};
use crate::model::Card;
use crate::remote::CatalogSource;
use crate::{cache, inventory, sync};
use std::path::{Path, PathBuf};

/// The main facade for cardz operations.
///
/// All UI clients (CLI, desktop shell, etc.) should go through this type.
pub struct CardzApi<C: CatalogSource> {
    catalog: C,
    inventory_path: PathBuf,
    cache_path: PathBuf,
    bulk_data_path: PathBuf,
}

impl<C: CatalogSource> CardzApi<C> {
    /// Wire a facade from config, resolving file paths inside `data_dir`.
    pub fn new(config: &CardzConfig, data_dir: &Path, catalog: C) -> Self {
        Self {
            catalog,
            inventory_path: config.inventory_path(data_dir),
            cache_path: config.cache_path(data_dir),
            bulk_data_path: config.bulk_data_path(data_dir),
        }
    }

    /// Load the user's owned-card list. Missing file is an empty inventory.
    pub fn load_inventory(&self) -> Result<Vec<Card>> {
        inventory::load(&self.inventory_path)
    }

    /// Rewrite the owned-card list wholesale.
    pub fn save_inventory(&self, cards: &[Card]) -> Result<()> {
        inventory::save(cards, &self.inventory_path)
    }

    /// Load the reference cache snapshot. Never fails; worst case is empty.
    pub fn load_cache(&self) -> Vec<Card> {
        cache::load(&self.cache_path)
    }

    /// Replace the reference cache snapshot.
    pub fn save_cache(&self, cards: &[Card]) -> Result<()> {
        cache::save(cards, &self.cache_path)
    }

    /// Rebuild the cache from the local bulk dataset.
    pub fn import_bulk(&self) -> Result<ImportSummary> {
        importer::run(&self.bulk_data_path, &self.cache_path)
    }

    /// Refresh the cache from the remote catalog. Returns records written.
    /// On a network failure the previous cache is untouched.
    pub fn sync_remote(&self) -> Result<usize> {
        sync::run(&self.catalog, &self.cache_path)
    }

    /// Replace the cache with the built-in sample set (offline fallback).
    pub fn seed_sample_cache(&self) -> Result<usize> {
        sync::seed_sample(&self.cache_path)
    }

    /// Prefix search against the remote catalog.
    pub fn search_remote(&self, query: &str) -> Result<Vec<Card>> {
        self.catalog.search_by_name(query)
    }

    /// Case-insensitive substring search over the cached snapshot,
    /// matching name, type, or set name.
    pub fn search_cache(&self, query: &str) -> Vec<Card> {
        let needle = query.to_lowercase();
        self.load_cache()
            .into_iter()
            .filter(|card| {
                card.name.to_lowercase().contains(&needle)
                    || card.card_type.to_lowercase().contains(&needle)
                    || card.set_name.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Path of the inventory flat file, for display to the user.
    pub fn inventory_path(&self) -> &Path {
        &self.inventory_path
    }
}
