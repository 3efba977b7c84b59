//! Game rules: setup and the turn engine.
//!
//! `BakeryBuilder` turns deck definitions into a dealt `BakeryEngine`; the
//! engine then validates and applies every player action.

pub mod engine;
pub mod setup;

pub use engine::{BakeryEngine, ServiceRecord};
pub use setup::{BakeryBuilder, DeckDefinitions, IngredientCount, LayerDefinition, OrderDefinition};
