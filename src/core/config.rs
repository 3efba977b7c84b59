//! Game configuration.
//!
//! `BakeryConfig` collects every table-size and pacing constant the rules
//! depend on. Games start from `BakeryConfig::default()` (the published
//! board-game rules) and override individual values with the `with_*`
//! builder methods:
//!
//! ```
//! use magic_bakery::core::BakeryConfig;
//!
//! let config = BakeryConfig::default()
//!     .with_pantry_width(6)
//!     .with_garnish_reward(3);
//! assert!(config.validate().is_ok());
//! assert_eq!(config.actions_for(2), 3);
//! assert_eq!(config.actions_for(4), 2);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{BakeryError, Result};

/// How many customer orders of each level go into the deck for a given
/// player count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderMix {
    /// Player count this mix applies to.
    pub players: usize,
    /// Orders of level 1, 2 and 3, in that order.
    pub levels: [usize; 3],
}

impl OrderMix {
    pub const fn new(players: usize, levels: [usize; 3]) -> Self {
        Self { players, levels }
    }

    /// Total orders in a deck built from this mix.
    #[must_use]
    pub fn total(&self) -> usize {
        self.levels.iter().sum()
    }
}

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BakeryConfig {
    /// Visible pantry row width.
    pub pantry_width: usize,

    /// Customer window width (number of order slots).
    pub queue_width: usize,

    /// Ingredients dealt to each player at setup.
    pub starting_hand: usize,

    /// Copies of each layer definition in the shared layer pool.
    pub layer_copies: usize,

    /// Ingredients drawn from the pantry deck after a garnished order.
    pub garnish_reward: usize,

    /// Actions per turn below `large_table_from` players.
    pub actions_small_table: u32,

    /// Actions per turn from `large_table_from` players upwards.
    pub actions_large_table: u32,

    /// Player count at which the large-table action budget applies.
    pub large_table_from: usize,

    pub min_players: usize,
    pub max_players: usize,

    /// Orders placed in the window at setup for an even player count.
    pub initial_orders_even: usize,

    /// Orders placed in the window at setup for an odd player count.
    pub initial_orders_odd: usize,

    /// Customer deck composition per player count.
    pub order_mix: Vec<OrderMix>,
}

impl Default for BakeryConfig {
    fn default() -> Self {
        Self {
            pantry_width: 5,
            queue_width: 3,
            starting_hand: 3,
            layer_copies: 4,
            garnish_reward: 2,
            actions_small_table: 3,
            actions_large_table: 2,
            large_table_from: 4,
            min_players: 2,
            max_players: 5,
            initial_orders_even: 1,
            initial_orders_odd: 2,
            order_mix: vec![
                OrderMix::new(2, [4, 2, 1]),
                OrderMix::new(3, [1, 2, 4]),
                OrderMix::new(4, [1, 2, 4]),
                OrderMix::new(5, [0, 1, 6]),
            ],
        }
    }
}

impl BakeryConfig {
    #[must_use]
    pub fn with_pantry_width(mut self, width: usize) -> Self {
        self.pantry_width = width;
        self
    }

    #[must_use]
    pub fn with_queue_width(mut self, width: usize) -> Self {
        self.queue_width = width;
        self
    }

    #[must_use]
    pub fn with_starting_hand(mut self, size: usize) -> Self {
        self.starting_hand = size;
        self
    }

    #[must_use]
    pub fn with_layer_copies(mut self, copies: usize) -> Self {
        self.layer_copies = copies;
        self
    }

    #[must_use]
    pub fn with_garnish_reward(mut self, count: usize) -> Self {
        self.garnish_reward = count;
        self
    }

    /// Set the per-turn action budgets for small and large tables.
    #[must_use]
    pub fn with_actions(mut self, small_table: u32, large_table: u32) -> Self {
        self.actions_small_table = small_table;
        self.actions_large_table = large_table;
        self
    }

    /// Replace (or add) the deck composition for one player count.
    #[must_use]
    pub fn with_order_mix(mut self, mix: OrderMix) -> Self {
        self.order_mix.retain(|m| m.players != mix.players);
        self.order_mix.push(mix);
        self
    }

    /// Actions each player may take per turn at this table size.
    #[must_use]
    pub fn actions_for(&self, player_count: usize) -> u32 {
        if player_count >= self.large_table_from {
            self.actions_large_table
        } else {
            self.actions_small_table
        }
    }

    /// Orders dealt into the window at setup.
    #[must_use]
    pub fn initial_orders_for(&self, player_count: usize) -> usize {
        if player_count % 2 == 0 {
            self.initial_orders_even
        } else {
            self.initial_orders_odd
        }
    }

    /// Customer deck composition for this player count, if one is defined.
    #[must_use]
    pub fn order_mix_for(&self, player_count: usize) -> Option<&OrderMix> {
        self.order_mix.iter().find(|m| m.players == player_count)
    }

    /// Check the player count against the configured bounds.
    pub fn check_player_count(&self, player_count: usize) -> Result<()> {
        if (self.min_players..=self.max_players).contains(&player_count) {
            Ok(())
        } else {
            Err(BakeryError::config(format!(
                "player count {} outside [{}, {}]",
                player_count, self.min_players, self.max_players
            )))
        }
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> Result<()> {
        if self.pantry_width == 0 {
            return Err(BakeryError::config("pantry width must be positive"));
        }
        if self.queue_width == 0 {
            return Err(BakeryError::config("queue width must be positive"));
        }
        if self.layer_copies == 0 {
            return Err(BakeryError::config("layer copies must be positive"));
        }
        if self.actions_small_table == 0 || self.actions_large_table == 0 {
            return Err(BakeryError::config("action budget must be positive"));
        }
        if self.min_players < 2 || self.min_players > self.max_players {
            return Err(BakeryError::config(format!(
                "player bounds [{}, {}] are invalid",
                self.min_players, self.max_players
            )));
        }
        let most_initial = self.initial_orders_even.max(self.initial_orders_odd);
        if most_initial > self.queue_width {
            return Err(BakeryError::config(format!(
                "{} initial orders do not fit a window of {}",
                most_initial, self.queue_width
            )));
        }
        Ok(())
    }
}
