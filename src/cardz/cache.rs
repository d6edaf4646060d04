//! # Reference Cache Codec
//!
//! The reference cache is a local read-only snapshot of catalog cards,
//! stored as a JSON array of seven-key objects. It is rebuilt wholesale by
//! the bulk importer or the remote sync — never merged incrementally — so a
//! load always sees one full, consistent snapshot.
//!
//! Cache data originates from bulk files and the remote API, both less
//! trusted than the user's own inventory, so this codec is strictly more
//! lenient than the flat-file one: a missing file, a malformed top level,
//! or a malformed element must never block the application. Every field of
//! every object is defaulted individually.

use crate::error::Result;
use crate::inventory::write_replacing;
use crate::model::{Card, DEFAULT_RARITY, DEFAULT_TYPE};
use log::warn;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load the cache from `path`. Absent file or unparseable top-level
/// structure yields an empty snapshot, not an error.
pub fn load(path: &Path) -> Vec<Card> {
    if !path.exists() {
        return Vec::new();
    }

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Could not read cache file {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    let values: Vec<Value> = match serde_json::from_str(&content) {
        Ok(values) => values,
        Err(e) => {
            warn!("Cache file {} is not a JSON array: {}", path.display(), e);
            return Vec::new();
        }
    };

    values
        .iter()
        .filter_map(|value| match value.as_object() {
            Some(_) => Some(entry_to_card(value)),
            None => {
                warn!("Skipping non-object cache entry: {}", value);
                None
            }
        })
        .collect()
}

/// Replace the cache file at `path` with the given snapshot.
pub fn save(cards: &[Card], path: &Path) -> Result<()> {
    let content = serde_json::to_string(cards)?;
    write_replacing(path, content.as_bytes())
}

/// Build a card from one cache object, defaulting each field individually.
fn entry_to_card(obj: &Value) -> Card {
    Card::new(
        string_or(obj, "id", ""),
        string_or(obj, "name", ""),
        string_or(obj, "type", DEFAULT_TYPE),
        string_or(obj, "rarity", DEFAULT_RARITY),
        string_or(obj, "setName", ""),
        obj.get("quantity").and_then(Value::as_u64).unwrap_or(1) as u32,
        string_or(obj, "imageUrl", ""),
    )
}

fn string_or(obj: &Value, key: &str, default: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn bare_name_entry_gets_full_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cache.json");
        fs::write(&path, r#"[{"name":"Pikachu"}]"#).unwrap();

        let cards = load(&path);
        assert_eq!(
            cards,
            vec![Card::new("", "Pikachu", "N/A", "Common", "", 1, "")]
        );
    }

    #[test]
    fn missing_file_is_empty_cache() {
        let temp_dir = TempDir::new().unwrap();
        assert!(load(&temp_dir.path().join("cache.json")).is_empty());
    }

    #[test]
    fn malformed_top_level_is_empty_cache() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cache.json");
        fs::write(&path, "{not json").unwrap();
        assert!(load(&path).is_empty());

        fs::write(&path, r#"{"data": []}"#).unwrap();
        assert!(load(&path).is_empty());
    }

    #[test]
    fn non_object_entries_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cache.json");
        fs::write(&path, r#"[42, {"name":"Eevee"}, "stray"]"#).unwrap();

        let cards = load(&path);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].name, "Eevee");
    }

    #[test]
    fn non_numeric_quantity_defaults_to_one() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cache.json");
        fs::write(&path, r#"[{"name":"Eevee","quantity":"four"}]"#).unwrap();

        assert_eq!(load(&path)[0].quantity, 1);
    }

    #[test]
    fn save_then_load_roundtrips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cache.json");
        let cards = vec![
            Card::new("base1-4", "Charizard", "Fire", "Rare Holo", "Base", 0, "url"),
            Card::new("base1-58", "Pikachu", "Electric", "Common", "Base", 0, ""),
        ];

        save(&cards, &path).unwrap();
        assert_eq!(load(&path), cards);
    }

    #[test]
    fn save_replaces_wholesale() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cache.json");

        save(
            &[Card::new("a", "A", "N/A", "Common", "", 0, "")],
            &path,
        )
        .unwrap();
        save(
            &[Card::new("b", "B", "N/A", "Common", "", 0, "")],
            &path,
        )
        .unwrap();

        let cards = load(&path);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, "b");
    }
}
