//! # Remote Catalog Client
//!
//! Blocking client for the paginated card-catalog HTTP API. Two operations:
//! page fetch and free-text name search, both field-projected server-side
//! to keep payloads small.
//!
//! The [`CatalogSource`] trait is the seam between the orchestration layer
//! and the network: production code uses [`CatalogClient`], tests use a
//! stub. The HTTP client is built once at construction and injected — no
//! ambient singletons.

use crate::config::CardzConfig;
use crate::error::{CardzError, Result};
use crate::model::{self, Card, DEFAULT_RARITY, DEFAULT_TYPE};
use log::debug;
use reqwest::blocking::Client;
use serde_json::Value;
use std::time::Duration;

/// Server-side field projection: the minimal set a Card needs.
const SELECT_FIELDS: &str = "id,name,types,rarity,set.name,images.small";

/// Name search result cap. Kept small to bound payload size.
const SEARCH_PAGE_SIZE: u32 = 30;

/// Abstract source of catalog cards.
///
/// Implementations must treat a non-2xx response as a hard failure for the
/// call, never as an empty success.
pub trait CatalogSource {
    /// Fetch one page of the catalog. Records come back with quantity 1.
    fn fetch_page(&self, page: u32, page_size: u32) -> Result<Vec<Card>>;

    /// Prefix search on card names, capped at 30 results.
    fn search_by_name(&self, query: &str) -> Result<Vec<Card>>;
}

/// Production [`CatalogSource`] over HTTP.
pub struct CatalogClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl CatalogClient {
    /// Build a client from config. Connect and per-request timeouts are
    /// both bounded so a dead network fails within `timeout_secs` instead
    /// of hanging the caller.
    pub fn new(config: &CardzConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn get(&self, url: &str) -> Result<Value> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header("X-Api-Key", &self.api_key)
            .header("Accept", "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(CardzError::Api {
                status: status.as_u16(),
            });
        }

        Ok(response.json()?)
    }
}

impl CatalogSource for CatalogClient {
    fn fetch_page(&self, page: u32, page_size: u32) -> Result<Vec<Card>> {
        let url = format!(
            "{}?page={}&pageSize={}&select={}",
            self.base_url, page, page_size, SELECT_FIELDS
        );
        Ok(parse_response(&self.get(&url)?))
    }

    fn search_by_name(&self, query: &str) -> Result<Vec<Card>> {
        // Trailing wildcard only: a leading wildcard defeats server-side
        // name indexing.
        let encoded = urlencoding::encode(&format!("name:{}*", query)).into_owned();
        let url = format!(
            "{}?q={}&pageSize={}&select={}",
            self.base_url, encoded, SEARCH_PAGE_SIZE, SELECT_FIELDS
        );
        Ok(parse_response(&self.get(&url)?))
    }
}

/// Map an API response body to cards. A body without the top-level `data`
/// array degrades to an empty list rather than failing.
fn parse_response(body: &Value) -> Vec<Card> {
    let Some(data) = body.get("data").and_then(Value::as_array) else {
        return Vec::new();
    };

    data.iter().map(record_to_card).collect()
}

/// Project one API record onto a Card, quantity fixed at 1.
///
/// Rarity is the one asymmetric field: it defaults to "Common" only when
/// absent or JSON null. An empty string sent by the server passes through
/// as-is — this mirrors the upstream API and round-trip tests depend on it.
fn record_to_card(obj: &Value) -> Card {
    let id = string_field(obj, "id");
    let name = string_field(obj, "name");
    let card_type = model::first_type(obj).unwrap_or_else(|| DEFAULT_TYPE.to_string());

    let rarity = match obj.get("rarity") {
        None | Some(Value::Null) => DEFAULT_RARITY.to_string(),
        Some(value) => value.as_str().unwrap_or("").to_string(),
    };

    let set_name = obj
        .get("set")
        .and_then(|set| set.get("name"))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();
    let image_url = obj
        .get("images")
        .and_then(|images| images.get("small"))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string();

    Card::new(id, name, card_type, rarity, set_name, 1, image_url)
}

fn string_field(obj: &Value, key: &str) -> String {
    match obj.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(value) => value.as_str().unwrap_or("").to_string(),
    }
}
