//! # Sync Orchestrator
//!
//! One remote refresh cycle: fetch a bounded run of catalog pages and
//! replace the reference cache with the concatenation. The page budget is a
//! deployment throttle (one page of 250) so a sync stays short on slow
//! connections, not an architectural limit.
//!
//! Nothing is written until every page has been fetched, so a network
//! failure mid-run leaves the previous cache untouched. The error reaches
//! the caller typed (see [`crate::error::CardzError`]); a caller that wants
//! a non-empty cache anyway can fall back to [`seed_sample`].

use crate::cache;
use crate::error::Result;
use crate::model::Card;
use crate::remote::CatalogSource;
use log::info;
use std::path::Path;

/// Pages fetched per sync cycle.
const SYNC_PAGE_COUNT: u32 = 1;

/// Records requested per page.
const SYNC_PAGE_SIZE: u32 = 250;

/// Run one refresh cycle against `source`, replacing the cache file at
/// `cache_path`. Returns the total record count written.
pub fn run<C: CatalogSource>(source: &C, cache_path: &Path) -> Result<usize> {
    let mut all_cards = Vec::new();

    for page in 1..=SYNC_PAGE_COUNT {
        let cards = source.fetch_page(page, SYNC_PAGE_SIZE)?;
        info!("Fetched page {} ({} records)", page, cards.len());
        all_cards.extend(cards);
    }

    cache::save(&all_cards, cache_path)?;
    Ok(all_cards.len())
}

/// Replace the cache with the built-in sample set. Deterministic fallback
/// for callers that hit a network failure and still need a usable cache.
pub fn seed_sample(cache_path: &Path) -> Result<usize> {
    let cards = sample_cards();
    cache::save(&cards, cache_path)?;
    Ok(cards.len())
}

/// A small fixed reference set, usable fully offline.
pub fn sample_cards() -> Vec<Card> {
    vec![
        Card::new("base1-4", "Charizard", "Fire", "Rare Holo", "Base", 0, ""),
        Card::new("base1-2", "Blastoise", "Water", "Rare Holo", "Base", 0, ""),
        Card::new("base1-15", "Venusaur", "Grass", "Rare Holo", "Base", 0, ""),
        Card::new("base1-58", "Pikachu", "Electric", "Common", "Base", 0, ""),
        Card::new("base1-10", "Mewtwo", "Psychic", "Rare Holo", "Base", 0, ""),
        Card::new("basep-8", "Mew", "Psychic", "Promo", "Wizards Promos", 0, ""),
        Card::new("fossil-1", "Aerodactyl", "Fighting", "Rare Holo", "Fossil", 0, ""),
        Card::new("jungle-1", "Clefable", "Colorless", "Rare Holo", "Jungle", 0, ""),
    ]
}
