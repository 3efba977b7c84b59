//! Game setup from already-loaded deck definitions.
//!
//! Deck files are parsed elsewhere; this module takes the parsed lists,
//! validates them, and deals the opening position:
//!
//! 1. Layers are built and each is copied `layer_copies` times into the pool
//! 2. Customer orders are resolved (names matching a layer become that
//!    layer) and composed into the customer deck for this player count
//! 3. The pantry deck is shuffled, the row dealt, then each player's hand
//! 4. The opening customers are drawn into the window
//!
//! All shuffles use one `GameRng` seeded from `build(seed)`.
//!
//! ```
//! use magic_bakery::rules::{BakeryBuilder, DeckDefinitions, LayerDefinition, OrderDefinition};
//!
//! let decks = DeckDefinitions::new()
//!     .ingredient("flour", 20)
//!     .ingredient("eggs", 20)
//!     .layer(LayerDefinition::new("sponge", &["flour", "eggs"]))
//!     .order(OrderDefinition::new(1, "Cupcake", &["sponge"]))
//!     .order(OrderDefinition::new(1, "Pancake", &["flour", "eggs"]))
//!     .order(OrderDefinition::new(1, "Omelette", &["eggs", "eggs"]))
//!     .order(OrderDefinition::new(1, "Bread", &["flour", "flour"]))
//!     .order(OrderDefinition::new(2, "Layer cake", &["sponge", "sponge"]))
//!     .order(OrderDefinition::new(2, "Custard", &["eggs", "eggs", "eggs"]))
//!     .order(OrderDefinition::new(3, "Tower", &["sponge", "sponge", "sponge"]));
//!
//! let engine = BakeryBuilder::new(decks)
//!     .players(["Ada", "Grace"])
//!     .build(42)
//!     .unwrap();
//! assert_eq!(engine.actions_remaining(), 3);
//! ```

use log::info;
use serde::{Deserialize, Serialize};

use super::engine::BakeryEngine;
use crate::core::config::BakeryConfig;
use crate::core::entity::OrderId;
use crate::core::error::{BakeryError, Result};
use crate::core::player::{Player, PlayerId, PlayerMap};
use crate::core::rng::GameRng;
use crate::customers::{compose_order_deck, CustomerOrder, CustomerQueue};
use crate::ingredients::{normalize_name, Ingredient, Layer};
use crate::pantry::Pantry;

/// An ingredient and how many copies go into the pantry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientCount {
    pub name: String,
    pub count: usize,
}

/// A layer and the ingredients it is baked from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerDefinition {
    pub name: String,
    pub recipe: Vec<String>,
}

impl LayerDefinition {
    pub fn new(name: impl Into<String>, recipe: &[&str]) -> Self {
        Self {
            name: name.into(),
            recipe: recipe.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A customer order card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDefinition {
    pub level: u8,
    pub name: String,
    pub recipe: Vec<String>,
    pub garnish: Vec<String>,
}

impl OrderDefinition {
    pub fn new(level: u8, name: impl Into<String>, recipe: &[&str]) -> Self {
        Self {
            level,
            name: name.into(),
            recipe: recipe.iter().map(|s| s.to_string()).collect(),
            garnish: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_garnish(mut self, garnish: &[&str]) -> Self {
        self.garnish = garnish.iter().map(|s| s.to_string()).collect();
        self
    }
}

/// Everything the deck loader supplies.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckDefinitions {
    pub ingredients: Vec<IngredientCount>,
    pub layers: Vec<LayerDefinition>,
    pub orders: Vec<OrderDefinition>,
}

impl DeckDefinitions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn ingredient(mut self, name: impl Into<String>, count: usize) -> Self {
        self.ingredients.push(IngredientCount { name: name.into(), count });
        self
    }

    #[must_use]
    pub fn layer(mut self, layer: LayerDefinition) -> Self {
        self.layers.push(layer);
        self
    }

    #[must_use]
    pub fn order(mut self, order: OrderDefinition) -> Self {
        self.orders.push(order);
        self
    }

    /// Build one `Layer` per definition, rejecting duplicates.
    ///
    /// Layers are identified by recipe, so two definitions with the same
    /// recipe (or the same name) would be indistinguishable in play.
    pub fn build_layers(&self) -> Result<Vec<Layer>> {
        let mut layers: Vec<Layer> = Vec::with_capacity(self.layers.len());
        for def in &self.layers {
            let recipe = def
                .recipe
                .iter()
                .map(|name| Ingredient::new(name))
                .collect::<Result<Vec<_>>>()?;
            let layer = Layer::new(&def.name, recipe)?;

            if let Some(other) = layers.iter().find(|l| **l == layer || l.name() == layer.name()) {
                return Err(BakeryError::config(format!(
                    "layers {} and {} cannot be told apart",
                    other.name(),
                    layer.name()
                )));
            }
            layers.push(layer);
        }
        Ok(layers)
    }

    /// Expand ingredient counts into individual cards.
    pub fn build_ingredients(&self) -> Result<Vec<Ingredient>> {
        let mut out = Vec::new();
        for entry in &self.ingredients {
            let ingredient = Ingredient::new(&entry.name)?;
            out.extend(std::iter::repeat(ingredient).take(entry.count));
        }
        Ok(out)
    }

    /// Build every order, resolving layer names against `layers`.
    ///
    /// IDs are assigned in definition order starting at 0.
    pub fn build_orders(&self, layers: &[Layer]) -> Result<Vec<CustomerOrder>> {
        let resolve = |name: &String| -> Result<Ingredient> {
            let key = normalize_name(name);
            match layers.iter().find(|l| l.name() == key) {
                Some(layer) => Ok(Ingredient::Layer(layer.clone())),
                None => Ingredient::new(name),
            }
        };

        let mut id = OrderId::new(0);
        let mut orders = Vec::with_capacity(self.orders.len());
        for def in &self.orders {
            let recipe = def.recipe.iter().map(&resolve).collect::<Result<Vec<_>>>()?;
            let garnish = def.garnish.iter().map(&resolve).collect::<Result<Vec<_>>>()?;
            orders.push(CustomerOrder::new(id, def.name.clone(), recipe, garnish, def.level)?);
            id = id.next();
        }
        Ok(orders)
    }
}

/// Builder for a new game.
pub struct BakeryBuilder {
    decks: DeckDefinitions,
    config: BakeryConfig,
    players: Vec<String>,
}

impl BakeryBuilder {
    pub fn new(decks: DeckDefinitions) -> Self {
        Self {
            decks,
            config: BakeryConfig::default(),
            players: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(mut self, config: BakeryConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a player. Seats are assigned in the order players are added.
    #[must_use]
    pub fn player(mut self, name: impl Into<String>) -> Self {
        self.players.push(name.into());
        self
    }

    #[must_use]
    pub fn players<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.players.extend(names.into_iter().map(Into::into));
        self
    }

    /// Validate the definitions and deal the opening position.
    pub fn build(self, seed: u64) -> Result<BakeryEngine> {
        let Self { decks, config, players } = self;

        config.validate()?;
        let player_count = players.len();
        config.check_player_count(player_count)?;
        let mix = config
            .order_mix_for(player_count)
            .ok_or_else(|| BakeryError::config(format!("no customer deck defined for {} players", player_count)))?;

        let mut rng = GameRng::new(seed);

        let layers = decks.build_layers()?;
        let orders = decks.build_orders(&layers)?;
        let deck = compose_order_deck(orders, mix, &mut rng)?;
        let mut customers = CustomerQueue::new(deck, config.queue_width);

        let mut pantry = Pantry::new(decks.build_ingredients()?, config.pantry_width, &mut rng);
        pantry.fill_row(&mut rng)?;

        let mut seats = PlayerMap::new(player_count, |p| Player::new(players[p.index()].clone()));
        for seat in PlayerId::all(player_count) {
            for _ in 0..config.starting_hand {
                seats[seat].add_to_hand(pantry.draw(&mut rng)?);
            }
        }

        for _ in 0..config.initial_orders_for(player_count) {
            if customers.is_deck_empty() {
                break;
            }
            customers.add_order()?;
        }

        let pool: Vec<Layer> = layers
            .iter()
            .flat_map(|layer| std::iter::repeat(layer.clone()).take(config.layer_copies))
            .collect();

        info!(
            "new game for {} players (seed {}): {} orders in the deck",
            player_count,
            seed,
            customers.deck_len()
        );

        Ok(BakeryEngine::from_parts(config, seats, pantry, pool, customers, rng))
    }
}
