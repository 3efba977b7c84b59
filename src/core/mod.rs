//! Core engine types: identifiers, players, actions, RNG, configuration,
//! errors.
//!
//! These are the building blocks every other module depends on.

pub mod entity;
pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use entity::OrderId;
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::{BakeryConfig, OrderMix};
pub use action::{Action, ActionRecord, ActionType};
pub use error::{BakeryError, Resource, Result};
