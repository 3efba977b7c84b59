//! Typed failures for every engine operation.
//!
//! Mutating operations validate before they mutate, so any `Err` returned
//! from the engine leaves state exactly as it was.

use thiserror::Error;

use super::entity::OrderId;
use super::player::PlayerId;

/// Shared resource that ran dry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    /// Pantry draw deck and discard pile are both empty.
    Pantry,
    /// No customer orders remain to be drawn.
    CustomerDeck,
    /// Every copy of a layer is already in play.
    LayerPool,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Pantry => write!(f, "pantry"),
            Resource::CustomerDeck => write!(f, "customer deck"),
            Resource::LayerPool => write!(f, "layer pool"),
        }
    }
}

/// Every failure the engine can signal.
#[derive(Debug, Error)]
pub enum BakeryError {
    #[error("no actions remain this turn")]
    ActionBudgetExhausted,

    /// Required ingredients are absent.
    ///
    /// `required` and `available` count the ingredients the operation needed
    /// and the ones it could actually match.
    #[error("wrong ingredients for {context}: needed {required}, matched {available}")]
    IngredientMismatch {
        context: String,
        required: usize,
        available: usize,
    },

    #[error("{0} exhausted")]
    ResourceExhausted(Resource),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("{0} is not an active customer order")]
    OrderNotActive(OrderId),

    #[error("{0} cannot receive ingredients")]
    InvalidRecipient(PlayerId),

    #[error("failed to encode or decode engine state: {0}")]
    Persistence(#[from] bincode::Error),
}

impl BakeryError {
    /// Shorthand for a missing-ingredient failure with no counts.
    pub(crate) fn missing(context: impl Into<String>) -> Self {
        BakeryError::IngredientMismatch {
            context: context.into(),
            required: 1,
            available: 0,
        }
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        BakeryError::InvalidConfiguration(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BakeryError>;
