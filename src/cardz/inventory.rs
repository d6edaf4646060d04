//! # Inventory Flat-File Codec
//!
//! The user's owned-card list is persisted as UTF-8 text, one record per
//! line, seven fields joined by `,`:
//!
//! ```text
//! id,name,type,rarity,setName,quantity,imageUrl
//! ```
//!
//! No header line, no escaping. The unescaped delimiter is a **known
//! limitation** carried over for compatibility with existing data files: a
//! literal comma inside `name` or `setName` makes the line over-long on
//! reload and it is dropped. Do not "fix" this with quoting — it would break
//! every file already on disk.
//!
//! Parsing is deliberately forgiving at line granularity: one bad line never
//! aborts the file. Lines with exactly 6 fields are the pre-image-url legacy
//! format and load with an empty `imageUrl`.

use crate::error::Result;
use crate::model::Card;
use std::fs;
use std::path::Path;

/// Serialize records to the flat format, one line per record, trailing
/// newline after each.
pub fn serialize(cards: &[Card]) -> String {
    let mut out = String::new();
    for card in cards {
        out.push_str(&to_line(card));
        out.push('\n');
    }
    out
}

/// Parse flat-format text. Malformed lines are skipped silently; see
/// [`parse_line`] for what counts as malformed.
pub fn deserialize(text: &str) -> Vec<Card> {
    text.lines().filter_map(parse_line).collect()
}

/// Load the inventory from `path`. A missing file is an empty inventory,
/// not an error.
pub fn load(path: &Path) -> Result<Vec<Card>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    Ok(deserialize(&content))
}

/// Save the inventory to `path`, rewriting the whole file.
///
/// Writes to a sibling temp file and renames over the destination so a
/// failed write leaves the previous file intact.
pub fn save(cards: &[Card], path: &Path) -> Result<()> {
    write_replacing(path, serialize(cards).as_bytes())
}

/// Temp-then-rename write shared with the cache codec.
pub(crate) fn write_replacing(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn to_line(card: &Card) -> String {
    format!(
        "{},{},{},{},{},{},{}",
        card.id,
        card.name,
        card.card_type,
        card.rarity,
        card.set_name,
        card.quantity,
        card.image_url
    )
}

/// Parse one line. Returns `None` (drop the line) when:
/// - fewer than 6 or more than 7 fields (6 is the legacy format),
/// - the quantity field is not a non-negative integer,
/// - `id` or `name` is empty.
fn parse_line(line: &str) -> Option<Card> {
    // `split` keeps trailing empty fields, so "...,1," round-trips an
    // empty imageUrl.
    let parts: Vec<&str> = line.split(',').collect();

    let image_url = match parts.len() {
        6 => "",
        7 => parts[6],
        _ => return None,
    };

    let quantity: u32 = parts[5].parse().ok()?;

    let card = Card::new(
        parts[0], parts[1], parts[2], parts[3], parts[4], quantity, image_url,
    );
    if !card.is_valid() {
        return None;
    }
    Some(card)
}
