//! Player actions and the action history.
//!
//! `ActionType` is what the presentation layer enables or disables;
//! `Action` is a completed action with its arguments, as recorded in the
//! engine's history for replay and debugging.

use serde::{Deserialize, Serialize};

use super::entity::OrderId;
use super::player::PlayerId;

/// The five kinds of action a player can spend a turn on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    DrawIngredient,
    PassIngredient,
    BakeLayer,
    FulfilOrder,
    RefreshPantry,
}

impl ActionType {
    /// All action kinds in menu order.
    pub const ALL: [ActionType; 5] = [
        ActionType::DrawIngredient,
        ActionType::PassIngredient,
        ActionType::BakeLayer,
        ActionType::FulfilOrder,
        ActionType::RefreshPantry,
    ];
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ActionType::DrawIngredient => "draw ingredient",
            ActionType::PassIngredient => "pass ingredient",
            ActionType::BakeLayer => "bake layer",
            ActionType::FulfilOrder => "fulfil order",
            ActionType::RefreshPantry => "refresh pantry",
        };
        f.write_str(label)
    }
}

/// A completed action and its arguments.
///
/// Ingredients and layers are recorded by name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Draw { ingredient: String },
    Pass { ingredient: String, recipient: PlayerId },
    Bake { layer: String },
    Fulfil { order: OrderId, garnished: bool },
    Refresh,
}

impl Action {
    /// The kind of this action.
    #[must_use]
    pub fn action_type(&self) -> ActionType {
        match self {
            Action::Draw { .. } => ActionType::DrawIngredient,
            Action::Pass { .. } => ActionType::PassIngredient,
            Action::Bake { .. } => ActionType::BakeLayer,
            Action::Fulfil { .. } => ActionType::FulfilOrder,
            Action::Refresh => ActionType::RefreshPantry,
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Round number when action was taken.
    pub round: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, round: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            round,
            sequence,
        }
    }
}
