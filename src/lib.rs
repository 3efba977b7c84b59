//! # magic-bakery
//!
//! A deterministic rules engine for a cooperative bakery card game.
//!
//! Players share a pantry of ingredients, bake them into layers and serve
//! a queue of customers before they lose patience and leave.
//!
//! ## Design Principles
//!
//! 1. **One owner**: `BakeryEngine` owns all game state. Callers issue one
//!    action at a time and read snapshots; nothing is shared or global.
//!
//! 2. **Atomic actions**: every action validates before it mutates. An
//!    `Err` leaves the game exactly as it was and spends no action.
//!
//! 3. **Deterministic**: all shuffles draw from one seeded `GameRng`, so a
//!    seed, the player list and the action sequence replay a game exactly.
//!
//! ## Modules
//!
//! - `core`: player and order IDs, actions, RNG, configuration, errors
//! - `ingredients`: ingredients, layers and wildcard-aware matching
//! - `customers`: customer orders, the customer deck and the queue
//! - `pantry`: the shared ingredient row, draw deck and discard pile
//! - `rules`: game setup and the turn engine
//!
//! ## Example
//!
//! ```
//! use magic_bakery::{ActionType, BakeryBuilder, DeckDefinitions, LayerDefinition, OrderDefinition};
//!
//! let mut decks = DeckDefinitions::new()
//!     .ingredient("flour", 15)
//!     .ingredient("sugar", 15)
//!     .ingredient("helpful duck", 4)
//!     .layer(LayerDefinition::new("biscuit", &["flour", "sugar"]));
//! for level in [1, 1, 1, 1, 2, 2, 3] {
//!     decks = decks.order(OrderDefinition::new(level, "Biscuits", &["biscuit", "sugar"]));
//! }
//!
//! let mut engine = BakeryBuilder::new(decks)
//!     .players(["Ada", "Grace"])
//!     .build(2024)
//!     .unwrap();
//!
//! assert!(engine.available_actions().contains(&ActionType::RefreshPantry));
//! let first = engine.pantry().row()[0].name().to_string();
//! engine.draw_from_pantry(&first).unwrap();
//! assert_eq!(engine.actions_remaining(), 2);
//! assert!(!engine.end_turn());
//! ```

pub mod core;
pub mod ingredients;
pub mod customers;
pub mod pantry;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    OrderId, Player, PlayerId, PlayerMap,
    GameRng, GameRngState,
    BakeryConfig, OrderMix,
    Action, ActionRecord, ActionType,
    BakeryError, Resource, Result,
};

pub use crate::ingredients::{Ingredient, Layer, Matcher, WILDCARD_NAME};

pub use crate::customers::{CustomerOrder, CustomerQueue, OrderStatus};

pub use crate::pantry::Pantry;

pub use crate::rules::{
    BakeryBuilder, BakeryEngine, DeckDefinitions, IngredientCount,
    LayerDefinition, OrderDefinition, ServiceRecord,
};
