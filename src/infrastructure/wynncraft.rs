//! Wynncraft item database client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::application::ports::outbound::{CatalogError, CatalogSource};
use crate::domain::entities::{
    ArmourAttributes, IngredientAttributes, Item, ItemKind, WeaponAttributes,
};

/// Client for the Wynncraft v3 item database
pub struct WynncraftClient {
    client: Client,
    url: String,
}

impl WynncraftClient {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl CatalogSource for WynncraftClient {
    async fn fetch_catalog(&self) -> Result<Vec<Item>, CatalogError> {
        tracing::debug!(url = %self.url, "Fetching item database");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status().as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CatalogError::Request(e.to_string()))?;

        parse_item_database(&body)
    }
}

/// Decode the upstream payload: an object keyed by item name, in upstream
/// order. A plain array of items is accepted too.
///
/// An item whose fields fail to decode is kept in its category with no
/// stats, so the candidate order of every mode still matches upstream.
pub fn parse_item_database(body: &[u8]) -> Result<Vec<Item>, CatalogError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| CatalogError::Decode(e.to_string()))?;

    let entries: Vec<(Option<String>, serde_json::Value)> = match value {
        serde_json::Value::Object(map) => map.into_iter().map(|(k, v)| (Some(k), v)).collect(),
        serde_json::Value::Array(values) => values.into_iter().map(|v| (None, v)).collect(),
        other => {
            return Err(CatalogError::Decode(format!(
                "expected an object or array of items, got {}",
                json_kind(&other)
            )))
        }
    };

    let mut items = Vec::with_capacity(entries.len());
    for (name, value) in entries {
        let mut item = match Item::deserialize(&value) {
            Ok(item) => item,
            Err(e) => {
                tracing::warn!(item = ?name, "Keeping undecodable item without stats: {}", e);
                fallback_item(&value)
            }
        };
        if item.internal_name.is_empty() {
            match name {
                Some(name) => item.internal_name = name,
                None => {
                    tracing::warn!("Skipping item without a name");
                    continue;
                }
            }
        }
        items.push(item);
    }

    Ok(items)
}

/// Name, category and level of a record whose remaining fields are unusable
fn fallback_item(value: &Value) -> Item {
    let item_type = value.get("type").and_then(Value::as_str).unwrap_or_default();
    let kind = match item_type.to_ascii_lowercase().as_str() {
        "weapon" => ItemKind::Weapon(WeaponAttributes::default()),
        "armour" | "armor" => ItemKind::Armour(ArmourAttributes::default()),
        "ingredient" => ItemKind::Ingredient(IngredientAttributes::default()),
        _ => ItemKind::Other {
            item_type: item_type.to_string(),
        },
    };

    let name = value
        .get("internalName")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let mut item = Item::new(name, kind);
    item.level = value.pointer("/requirements/level").and_then(Value::as_i64);
    item
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
