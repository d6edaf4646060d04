use serde::{Deserialize, Serialize};

/// Default card type when upstream data carries none.
pub const DEFAULT_TYPE: &str = "N/A";

/// Default rarity when upstream data carries none.
pub const DEFAULT_RARITY: &str = "Common";

/// One catalog or inventory entry.
///
/// The same shape is used everywhere: the user's owned list, the reference
/// cache, bulk-import output, and remote search results. `quantity` carries
/// the distinction: `0` is a reference-only record, `1` a fresh remote pull,
/// any positive value in the inventory is an owned count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub rarity: String,
    pub set_name: String,
    pub quantity: u32,
    pub image_url: String,
}

impl Card {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        card_type: impl Into<String>,
        rarity: impl Into<String>,
        set_name: impl Into<String>,
        quantity: u32,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            card_type: card_type.into(),
            rarity: rarity.into(),
            set_name: set_name.into(),
            quantity,
            image_url: image_url.into(),
        }
    }

    /// A record is valid for the inventory flat file only with a non-empty
    /// id and name.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && !self.name.is_empty()
    }
}

/// First element of an upstream card object's `types` array, if present.
/// Both the bulk dataset and the remote API use the same shape.
pub fn first_type(obj: &serde_json::Value) -> Option<String> {
    obj.get("types")?
        .as_array()?
        .first()?
        .as_str()
        .map(ToOwned::to_owned)
}
