//! # Bulk Catalog Importer
//!
//! One-shot rebuild of the reference cache from a local copy of the bulk
//! card dataset:
//!
//! ```text
//! <root>/
//! ├── sets/en.json      # array of {id, name} set descriptors
//! └── cards/en/
//!     ├── base1.json    # array of card objects, one file per set
//!     └── ...
//! ```
//!
//! The required pieces (root directory, sets file, at least one card file)
//! fail fast with a descriptive error. Everything below that granularity is
//! tolerated: a card file that does not parse is logged and skipped, a
//! non-object element inside a file is dropped, and the import finishes
//! with whatever did parse. Partial success is the normal path for this
//! dataset, not a failure.

use crate::cache;
use crate::error::{CardzError, Result};
use crate::model::{self, Card, DEFAULT_RARITY, DEFAULT_TYPE};
use log::warn;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

const SETS_FILE: &str = "sets/en.json";
const CARDS_DIR: &str = "cards/en";

#[derive(Debug, Deserialize)]
struct SetDescriptor {
    id: String,
    name: String,
}

/// Outcome of a completed bulk import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Total cards written to the cache
    pub cards: usize,
    /// Set files successfully processed (skipped files not counted)
    pub sets: usize,
}

impl fmt::Display for ImportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Imported {} cards from {} sets.", self.cards, self.sets)
    }
}

/// Rebuild the reference cache at `cache_path` from the dataset at `root`.
///
/// Replaces the cache file wholesale on success. All imported cards carry
/// quantity 0 (reference-only, unowned).
pub fn run(root: &Path, cache_path: &Path) -> Result<ImportSummary> {
    if !root.exists() {
        return Err(CardzError::Import(format!(
            "Data directory '{}' not found. Place the bulk card dataset there before importing.",
            root.display()
        )));
    }

    let set_names = load_set_names(&root.join(SETS_FILE))?;

    let cards_dir = root.join(CARDS_DIR);
    let mut card_files: Vec<_> = fs::read_dir(&cards_dir)
        .map_err(|e| {
            CardzError::Import(format!("Cannot read card directory '{}': {}", cards_dir.display(), e))
        })?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();

    if card_files.is_empty() {
        return Err(CardzError::Import(format!(
            "No card JSON files found in {}",
            cards_dir.display()
        )));
    }
    card_files.sort();

    let mut all_cards = Vec::new();
    let mut sets_processed = 0;

    for card_file in &card_files {
        // Base name minus extension is the set identifier
        let set_id = card_file
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_default();
        let set_name = set_names.get(&set_id).cloned().unwrap_or_else(|| set_id.clone());

        match load_set_file(card_file, &set_name) {
            Ok(cards) => {
                all_cards.extend(cards);
                sets_processed += 1;
            }
            Err(e) => {
                warn!("Failed to process {}: {}", card_file.display(), e);
            }
        }
    }

    cache::save(&all_cards, cache_path)?;

    Ok(ImportSummary {
        cards: all_cards.len(),
        sets: sets_processed,
    })
}

fn load_set_names(sets_file: &Path) -> Result<HashMap<String, String>> {
    let content = fs::read_to_string(sets_file).map_err(|e| {
        CardzError::Import(format!("Error loading sets from '{}': {}", sets_file.display(), e))
    })?;
    let sets: Vec<SetDescriptor> = serde_json::from_str(&content).map_err(|e| {
        CardzError::Import(format!("Error parsing sets file '{}': {}", sets_file.display(), e))
    })?;

    Ok(sets.into_iter().map(|set| (set.id, set.name)).collect())
}

fn load_set_file(path: &Path, set_name: &str) -> Result<Vec<Card>> {
    let content = fs::read_to_string(path)?;
    let entries: Vec<Value> = serde_json::from_str(&content)?;

    Ok(entries
        .iter()
        .filter_map(|entry| match entry.as_object() {
            Some(_) => Some(entry_to_card(entry, set_name)),
            None => {
                warn!("Skipping non-object entry in {}: {}", path.display(), entry);
                None
            }
        })
        .collect())
}

/// Normalize one bulk card object. The bulk dataset is trusted less than
/// the user's own data, so every field falls back to a placeholder.
fn entry_to_card(obj: &Value, set_name: &str) -> Card {
    let id = obj
        .get("id")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    let name = obj
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("Unknown");
    let card_type = model::first_type(obj).unwrap_or_else(|| DEFAULT_TYPE.to_string());
    let rarity = obj
        .get("rarity")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_RARITY);
    let image_url = obj
        .get("images")
        .and_then(|images| images.get("small"))
        .and_then(Value::as_str)
        .unwrap_or("");

    Card::new(id, name, card_type, rarity, set_name, 0, image_url)
}
