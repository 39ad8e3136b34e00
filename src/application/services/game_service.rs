//! Game Service - Daily targets, guess scoring and item suggestions
//!
//! Validates requests at the boundary (mode ids, required parameters) and
//! hands the pure engine an already-resolved catalog.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::dto::{DailyRequestDto, GuessRequestDto, GuessResponseDto};
use crate::application::ports::outbound::CatalogError;
use crate::application::services::CatalogService;
use crate::domain::entities::{Catalog, Item};
use crate::domain::services::{evaluate, select, GameMode, ModeRegistry, SelectionError, StatResults};

/// Number of suggestions returned when the caller gives no limit
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("Missing required parameters")]
    MissingParameters,
    #[error("Invalid game mode: {0}")]
    InvalidMode(String),
    #[error("No valid items found for game mode: {0}")]
    NoCandidates(String),
    #[error("No item named '{0}' in this game mode")]
    UnknownItem(String),
    #[error("Game mode '{0}' is not registered")]
    UnknownMode(String),
    #[error("Failed to fetch items: {0}")]
    Fetch(#[from] CatalogError),
}

impl From<SelectionError> for GameError {
    fn from(e: SelectionError) -> Self {
        match e {
            SelectionError::NoCandidates(mode) => Self::NoCandidates(mode),
        }
    }
}

pub struct GameService {
    registry: Arc<ModeRegistry>,
    catalog: Arc<CatalogService>,
}

impl GameService {
    pub fn new(registry: Arc<ModeRegistry>, catalog: Arc<CatalogService>) -> Self {
        Self { registry, catalog }
    }

    pub fn list_modes(&self) -> &[GameMode] {
        self.registry.list_modes()
    }

    pub fn find_mode(&self, id: &str) -> Result<&GameMode, GameError> {
        self.registry
            .find_mode(id)
            .ok_or_else(|| GameError::InvalidMode(id.to_string()))
    }

    pub async fn catalog(&self) -> Result<Arc<Catalog>, GameError> {
        Ok(self.catalog.get().await?)
    }

    /// Resolve the target item for `{seed, mode}`
    #[instrument(skip(self))]
    pub async fn daily_target(&self, request: DailyRequestDto) -> Result<Item, GameError> {
        let (Some(seed), Some(mode_id)) = (request.seed, non_blank(request.mode)) else {
            return Err(GameError::MissingParameters);
        };

        let mode = self.find_mode(&mode_id)?;
        self.target_for_seed(mode, seed).await
    }

    pub async fn target_for_seed(&self, mode: &GameMode, seed: i64) -> Result<Item, GameError> {
        let catalog = self.catalog.get().await?;
        let target = select(mode, &catalog.items, seed)?;
        debug!(mode = mode.id, seed, target = %target.internal_name, "Selected target");
        Ok(target.clone())
    }

    /// Score a guess, looking the guess and target up as needed
    #[instrument(skip(self, request), fields(mode = ?request.mode, guess = ?request.guess))]
    pub async fn evaluate_guess(&self, request: GuessRequestDto) -> Result<GuessResponseDto, GameError> {
        let mode_id = non_blank(request.mode).ok_or(GameError::MissingParameters)?;
        let mode = self.find_mode(&mode_id)?;

        let guess = match (request.guess_item, non_blank(request.guess)) {
            (Some(item), _) => item,
            (None, Some(key)) => self.find_candidate(mode, &key).await?,
            (None, None) => return Err(GameError::MissingParameters),
        };

        let target = match (request.target, request.seed) {
            (Some(item), _) => item,
            (None, Some(seed)) => self.target_for_seed(mode, seed).await?,
            (None, None) => return Err(GameError::MissingParameters),
        };

        let results = self.score(mode, &guess, &target)?;
        let solved = results.solved();
        debug!(guess = %guess.internal_name, solved, "Guess evaluated");

        Ok(GuessResponseDto {
            mode: mode.id.to_string(),
            guess: guess.internal_name,
            results,
            solved,
        })
    }

    /// Evaluate under `mode`, which must be one of the registered modes
    pub fn score(&self, mode: &GameMode, guess: &Item, target: &Item) -> Result<StatResults, GameError> {
        if self.registry.find_mode(mode.id).is_none() {
            return Err(GameError::UnknownMode(mode.id.to_string()));
        }
        Ok(evaluate(mode, guess, target))
    }

    /// Items of `mode` whose name contains `query`, ignoring case
    pub async fn search_items(
        &self,
        mode_id: &str,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Item>, GameError> {
        let mode = self.find_mode(mode_id)?;
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let catalog = self.catalog.get().await?;
        Ok(mode
            .candidates(&catalog.items)
            .into_iter()
            .filter(|item| item.internal_name.to_lowercase().contains(&query))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn find_candidate(&self, mode: &GameMode, key: &str) -> Result<Item, GameError> {
        let catalog = self.catalog.get().await?;
        let key = key.trim();
        mode.candidates(&catalog.items)
            .into_iter()
            .find(|item| item.internal_name.eq_ignore_ascii_case(key))
            .cloned()
            .ok_or_else(|| GameError::UnknownItem(key.to_string()))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::TimeDelta;

    use crate::application::ports::outbound::CatalogSource;
    use crate::domain::entities::{IngredientAttributes, ItemCategory, ItemKind, WeaponAttributes};
    use crate::domain::value_objects::GuessResult;
    use crate::infrastructure::catalog_store::MemoryCatalogStore;

    struct FixedSource(Vec<Item>);

    #[async_trait]
    impl CatalogSource for FixedSource {
        async fn fetch_catalog(&self) -> Result<Vec<Item>, CatalogError> {
            Ok(self.0.clone())
        }
    }

    struct DownSource;

    #[async_trait]
    impl CatalogSource for DownSource {
        async fn fetch_catalog(&self) -> Result<Vec<Item>, CatalogError> {
            Err(CatalogError::Request("connection refused".into()))
        }
    }

    fn weapon(name: &str, rarity: &str, level: i64) -> Item {
        Item::new(
            name,
            ItemKind::Weapon(WeaponAttributes {
                rarity: Some(rarity.into()),
                weapon_type: Some("spear".into()),
                ..Default::default()
            }),
        )
        .with_level(level)
    }

    fn game_with(source: Arc<dyn CatalogSource>) -> GameService {
        let catalog = CatalogService::new(source, Arc::new(MemoryCatalogStore::new()), TimeDelta::hours(24));
        GameService::new(Arc::new(ModeRegistry::new()), Arc::new(catalog))
    }

    fn game() -> GameService {
        game_with(Arc::new(FixedSource(vec![
            weapon("Nirvana", "mythic", 100),
            Item::new("Eel Tail", ItemKind::Ingredient(IngredientAttributes::default())),
            weapon("Bob's Lament", "legendary", 70),
            weapon("Spear of Sin", "fabled", 80),
        ])))
    }

    fn daily(seed: Option<i64>, mode: Option<&str>) -> DailyRequestDto {
        DailyRequestDto {
            seed,
            mode: mode.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_daily_target_is_deterministic() {
        let game = game();

        let first = game.daily_target(daily(Some(4), Some("weapons"))).await.unwrap();
        let second = game.daily_target(daily(Some(4), Some("weapons"))).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.internal_name, "Bob's Lament");

        // Zero is a valid seed
        let zero = game.daily_target(daily(Some(0), Some("weapons"))).await.unwrap();
        assert_eq!(zero.internal_name, "Nirvana");
    }

    #[tokio::test]
    async fn test_daily_target_errors() {
        let game = game();

        assert!(matches!(
            game.daily_target(daily(None, Some("weapons"))).await,
            Err(GameError::MissingParameters)
        ));
        assert!(matches!(
            game.daily_target(daily(Some(1), Some("  "))).await,
            Err(GameError::MissingParameters)
        ));
        assert!(matches!(
            game.daily_target(daily(Some(1), Some("gear"))).await,
            Err(GameError::InvalidMode(mode)) if mode == "gear"
        ));
        assert!(matches!(
            game.daily_target(daily(Some(1), Some("armor"))).await,
            Err(GameError::NoCandidates(mode)) if mode == "armor"
        ));
    }

    #[tokio::test]
    async fn test_fetch_failure_surfaces_as_fetch_error() {
        let game = game_with(Arc::new(DownSource));
        assert!(matches!(
            game.daily_target(daily(Some(1), Some("weapons"))).await,
            Err(GameError::Fetch(CatalogError::Request(_)))
        ));
    }

    #[tokio::test]
    async fn test_evaluate_guess_by_key_against_seeded_target() {
        let game = game();
        let response = game
            .evaluate_guess(GuessRequestDto {
                mode: Some("weapons".into()),
                guess: Some("spear of sin".into()),
                seed: Some(0),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(response.guess, "Spear of Sin");
        assert_eq!(response.results.get("rarity"), Some(GuessResult::Lower));
        assert_eq!(response.results.get("type"), Some(GuessResult::Correct));
        assert_eq!(response.results.get("level"), Some(GuessResult::Lower));
        assert!(!response.solved);
    }

    #[tokio::test]
    async fn test_evaluate_guess_with_full_items_solves() {
        let game = game();
        let target = weapon("Nirvana", "mythic", 100);
        let response = game
            .evaluate_guess(GuessRequestDto {
                mode: Some("weapons".into()),
                guess_item: Some(target.clone()),
                target: Some(target),
                ..Default::default()
            })
            .await
            .unwrap();

        assert!(response.solved);
        assert!(response.results.iter().all(|(_, r)| r == GuessResult::Correct));
    }

    #[tokio::test]
    async fn test_evaluate_guess_errors() {
        let game = game();

        let missing_target = game
            .evaluate_guess(GuessRequestDto {
                mode: Some("weapons".into()),
                guess: Some("Nirvana".into()),
                ..Default::default()
            })
            .await;
        assert!(matches!(missing_target, Err(GameError::MissingParameters)));

        // Ingredients are not candidates of the weapons mode
        let wrong_mode = game
            .evaluate_guess(GuessRequestDto {
                mode: Some("weapons".into()),
                guess: Some("Eel Tail".into()),
                seed: Some(0),
                ..Default::default()
            })
            .await;
        assert!(matches!(wrong_mode, Err(GameError::UnknownItem(_))));
    }

    #[tokio::test]
    async fn test_guess_key_lookup_stays_inside_the_mode() {
        // A non-weapon spelled the same way comes first in the catalog
        let game = game_with(Arc::new(FixedSource(vec![
            Item::new("ember", ItemKind::Other { item_type: "material".into() }),
            weapon("Ember", "rare", 30),
        ])));

        let response = game
            .evaluate_guess(GuessRequestDto {
                mode: Some("weapons".into()),
                guess: Some("Ember".into()),
                seed: Some(0),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(response.guess, "Ember");
        assert!(response.solved);
    }

    #[test]
    fn test_score_rejects_unregistered_mode() {
        let game = game();
        let rogue = GameMode {
            id: "accessories",
            title: "Accessories",
            description: "",
            icon: "",
            category: ItemCategory::Weapon,
            stats: vec![],
        };
        let item = weapon("Nirvana", "mythic", 100);

        assert!(matches!(
            game.score(&rogue, &item, &item),
            Err(GameError::UnknownMode(id)) if id == "accessories"
        ));
    }

    #[tokio::test]
    async fn test_search_items() {
        let game = game();

        let names = |items: Vec<Item>| items.into_iter().map(|i| i.internal_name).collect::<Vec<_>>();

        assert_eq!(
            names(game.search_items("weapons", "S", DEFAULT_SEARCH_LIMIT).await.unwrap()),
            vec!["Bob's Lament", "Spear of Sin"]
        );
        assert_eq!(
            names(game.search_items("weapons", "a", 1).await.unwrap()),
            vec!["Nirvana"]
        );
        assert!(game.search_items("weapons", "", 5).await.unwrap().is_empty());
        assert!(matches!(
            game.search_items("pets", "a", 5).await,
            Err(GameError::InvalidMode(_))
        ));
    }
}
