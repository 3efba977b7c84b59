//! Customer deck composition.
//!
//! The deck is built once at setup: all loaded orders are shuffled, split by
//! level, the configured number of each level is taken, and the result is
//! shuffled again. Both shuffles draw from the engine's RNG, so the deck is
//! a pure function of the seed and the loaded orders.

use log::debug;
use rustc_hash::FxHashMap;

use super::order::CustomerOrder;
use crate::core::config::OrderMix;
use crate::core::error::{BakeryError, Result};
use crate::core::rng::GameRng;

/// Build the customer deck for one game. The top of the deck is the end of
/// the returned `Vec`.
pub fn compose_order_deck(
    mut orders: Vec<CustomerOrder>,
    mix: &OrderMix,
    rng: &mut GameRng,
) -> Result<Vec<CustomerOrder>> {
    rng.shuffle(&mut orders);

    let mut by_level: FxHashMap<u8, Vec<CustomerOrder>> = FxHashMap::default();
    for order in orders {
        by_level.entry(order.level()).or_default().push(order);
    }

    let mut deck = Vec::with_capacity(mix.total());
    for (level, &wanted) in (1u8..).zip(mix.levels.iter()) {
        let pool = by_level.remove(&level).unwrap_or_default();
        if pool.len() < wanted {
            return Err(BakeryError::config(format!(
                "{} players need {} level {} orders, only {} loaded",
                mix.players,
                wanted,
                level,
                pool.len()
            )));
        }
        deck.extend(pool.into_iter().take(wanted));
    }

    rng.shuffle(&mut deck);
    debug!("composed customer deck of {} orders for {} players", deck.len(), mix.players);

    Ok(deck)
}
