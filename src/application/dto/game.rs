use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Item;
use crate::domain::services::{GameMode, StatComparator, StatResults};

/// Body of a daily target request
#[derive(Debug, Default, Deserialize)]
pub struct DailyRequestDto {
    #[serde(default)]
    pub seed: Option<i64>,
    #[serde(default)]
    pub mode: Option<String>,
}

/// Body of a guess evaluation request
///
/// The guess is either an item key or a full item. The target is either a
/// full item or re-derived from the seed.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessRequestDto {
    #[serde(default)]
    pub mode: Option<String>,
    #[serde(default)]
    pub guess: Option<String>,
    #[serde(default)]
    pub guess_item: Option<Item>,
    #[serde(default)]
    pub target: Option<Item>,
    #[serde(default)]
    pub seed: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct GuessResponseDto {
    pub mode: String,
    pub guess: String,
    pub results: StatResults,
    pub solved: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ItemSearchQueryDto {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct StatSummaryDto {
    pub key: String,
    pub name: String,
}

impl From<&StatComparator> for StatSummaryDto {
    fn from(stat: &StatComparator) -> Self {
        Self {
            key: stat.key.to_string(),
            name: stat.name.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ModeSummaryDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub stats: Vec<StatSummaryDto>,
}

impl From<&GameMode> for ModeSummaryDto {
    fn from(mode: &GameMode) -> Self {
        Self {
            id: mode.id.to_string(),
            title: mode.title.to_string(),
            description: mode.description.to_string(),
            icon: mode.icon.to_string(),
            stats: mode.stats.iter().map(StatSummaryDto::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRefreshDto {
    pub items: usize,
    pub fetched_at: DateTime<Utc>,
}
