//! The bakery rules engine.
//!
//! `BakeryEngine` owns the whole game: players and their hands, the pantry,
//! the pool of unbaked layers, the customer queue and the RNG. Callers drive
//! it one action at a time and read snapshots back; nothing else mutates
//! game state.
//!
//! ## Turns
//!
//! Each turn the current player has a fixed action budget (3 at small
//! tables, 2 at large ones). Every successful action spends one unit; a
//! failed action spends nothing and changes nothing. `end_turn` passes play
//! to the next seat once the budget is spent. When play wraps back to the
//! first seat a new round begins and a customer arrives, or, once the
//! customer deck is empty, the queue ages by one step.
//!
//! ## Conservation
//!
//! Ingredients only move between the pantry and hands, and layers only
//! between the layer pool and hands. Consumed ingredients go to the pantry
//! discard pile and consumed layers back to the pool, so both totals are
//! constant for the whole game.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::action::{Action, ActionRecord, ActionType};
use crate::core::config::BakeryConfig;
use crate::core::entity::OrderId;
use crate::core::error::{BakeryError, Resource, Result};
use crate::core::player::{Player, PlayerId, PlayerMap};
use crate::core::rng::GameRng;
use crate::customers::{CustomerOrder, CustomerQueue, OrderStatus};
use crate::ingredients::{extract, Ingredient, Layer, Matcher};
use crate::pantry::Pantry;

/// How the customers have fared so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    /// Orders served without their garnish.
    pub fulfilled: usize,
    /// Orders served with their garnish.
    pub garnished: usize,
    /// Customers who left unserved.
    pub given_up: usize,
}

impl ServiceRecord {
    /// Orders served, garnished or not.
    #[must_use]
    pub fn served(&self) -> usize {
        self.fulfilled + self.garnished
    }
}

/// Complete game state and the operations that change it.
///
/// Serializes as one unit, RNG included, so a restored engine continues
/// with exactly the shuffles the saved one would have had.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BakeryEngine {
    config: BakeryConfig,
    players: PlayerMap<Player>,
    current: PlayerId,
    actions_used: u32,
    round: u32,
    pantry: Pantry,
    /// Unbaked layers, duplicates included.
    layers: Vec<Layer>,
    customers: CustomerQueue,
    rng: GameRng,
    history: im::Vector<ActionRecord>,
}

impl BakeryEngine {
    pub(crate) fn from_parts(
        config: BakeryConfig,
        players: PlayerMap<Player>,
        pantry: Pantry,
        layers: Vec<Layer>,
        customers: CustomerQueue,
        rng: GameRng,
    ) -> Self {
        Self {
            config,
            players,
            current: PlayerId::new(0),
            actions_used: 0,
            round: 1,
            pantry,
            layers,
            customers,
            rng,
            history: im::Vector::new(),
        }
    }

    // === Actions ===

    /// Take the visible pantry ingredient called `name` into the current
    /// player's hand. The slot is refilled from the draw deck.
    pub fn draw_from_pantry(&mut self, name: &str) -> Result<Ingredient> {
        self.check_budget()?;
        let slot = self
            .pantry
            .position(name)
            .ok_or_else(|| BakeryError::missing(format!("pantry lookup of {}", name.trim())))?;

        let ingredient = self.pantry.take(slot, &mut self.rng);
        self.players[self.current].add_to_hand(ingredient.clone());

        self.record(Action::Draw {
            ingredient: ingredient.name().to_string(),
        });
        Ok(ingredient)
    }

    /// Give one `ingredient` from the current player's hand to `recipient`.
    pub fn pass_ingredient(&mut self, ingredient: &Ingredient, recipient: PlayerId) -> Result<()> {
        self.check_budget()?;
        if recipient == self.current || !self.players.contains(recipient) {
            return Err(BakeryError::InvalidRecipient(recipient));
        }
        if !self.players[self.current].remove_from_hand(ingredient) {
            return Err(BakeryError::missing(format!("pass of {}", ingredient)));
        }
        self.players[recipient].add_to_hand(ingredient.clone());

        self.record(Action::Pass {
            ingredient: ingredient.name().to_string(),
            recipient,
        });
        Ok(())
    }

    /// Bake `layer` from the current player's hand.
    ///
    /// Matched ingredients, wildcards included, go to the discard pile and
    /// one copy of the layer moves from the pool into the hand.
    pub fn bake_layer(&mut self, layer: &Layer) -> Result<()> {
        self.check_budget()?;
        let pooled = self
            .layers
            .iter()
            .position(|l| l == layer)
            .ok_or(BakeryError::ResourceExhausted(Resource::LayerPool))?;

        let hand = self.players[self.current].hand();
        let claim = Matcher::new(hand)
            .claim(layer.recipe())
            .map_err(|met| BakeryError::IngredientMismatch {
                context: format!("layer {}", layer.name()),
                required: layer.recipe().len(),
                available: met,
            })?;

        let used = extract(self.players[self.current].hand_mut(), &claim);
        self.pantry.discard_all(used);
        let baked = self.layers.remove(pooled);

        let action = Action::Bake {
            layer: baked.name().to_string(),
        };
        self.players[self.current].add_to_hand(Ingredient::Layer(baked));
        self.record(action);
        Ok(())
    }

    /// Serve `order` from the current player's hand.
    ///
    /// Plain ingredients go to the discard pile and layers back to the pool.
    /// A garnished order also rewards the player with `garnish_reward`
    /// ingredients from the pantry draw deck, as many as are left. Returns
    /// the ingredients the order consumed.
    pub fn fulfill_order(&mut self, order: OrderId, want_garnish: bool) -> Result<Vec<Ingredient>> {
        self.check_budget()?;
        let current = self.current;
        let served = self
            .customers
            .get_mut(order)
            .ok_or(BakeryError::OrderNotActive(order))?;

        let used = served.fulfill(self.players[current].hand_mut(), want_garnish)?;
        let garnished = served.status() == OrderStatus::Garnished;
        info!(
            "{} served {}{}",
            self.players[current].name(),
            served.name(),
            if garnished { " with garnish" } else { "" }
        );

        for ingredient in used.iter().cloned() {
            match ingredient {
                Ingredient::Layer(layer) => self.layers.push(layer),
                other => self.pantry.discard_all([other]),
            }
        }
        if garnished {
            let reward = self.pantry.draw_up_to(self.config.garnish_reward, &mut self.rng);
            for ingredient in reward {
                self.players[current].add_to_hand(ingredient);
            }
        }

        self.customers.remove(order)?;
        if !self.customers.is_about_to_evict() {
            if let Some(stale) = self.customers.peek_mut() {
                if stale.status() == OrderStatus::Impatient {
                    stale.set_status(OrderStatus::Waiting);
                }
            }
        }

        self.record(Action::Fulfil { order, garnished });
        Ok(used)
    }

    /// Clear the pantry row, reshuffle and deal a new row.
    pub fn refresh_pantry(&mut self) -> Result<()> {
        self.check_budget()?;
        self.pantry.refresh(&mut self.rng)?;
        self.record(Action::Refresh);
        Ok(())
    }

    /// Action kinds the current player can take right now.
    ///
    /// Every listed action has at least one argument for which it succeeds.
    #[must_use]
    pub fn available_actions(&self) -> Vec<ActionType> {
        if self.actions_remaining() == 0 {
            return Vec::new();
        }
        let hand = self.current_player().hand();

        ActionType::ALL
            .into_iter()
            .filter(|kind| match kind {
                ActionType::DrawIngredient => !self.pantry.row().is_empty(),
                ActionType::PassIngredient => !hand.is_empty(),
                ActionType::BakeLayer => self.layers.iter().any(|l| l.can_bake(hand)),
                ActionType::FulfilOrder => !self.customers.fulfilable(hand).is_empty(),
                ActionType::RefreshPantry => self.pantry.total() > 0,
            })
            .collect()
    }

    // === Turn control ===

    /// Pass play to the next seat.
    ///
    /// Returns false, changing nothing, while the current player still has
    /// actions left.
    pub fn end_turn(&mut self) -> bool {
        if self.actions_remaining() > 0 {
            return false;
        }

        self.actions_used = 0;
        self.current = self.current.next(self.players.player_count());
        debug!("{} to play", self.players[self.current].name());

        if self.current == PlayerId::new(0) {
            self.start_round();
        }
        true
    }

    fn start_round(&mut self) {
        self.round += 1;
        info!("round {} begins", self.round);

        if self.customers.add_order().is_err() {
            self.customers.advance();
        }

        if self.is_game_over() {
            let record = self.service_record();
            info!(
                "game over after {} rounds: {} served ({} garnished), {} gave up",
                self.round,
                record.served(),
                record.garnished,
                record.given_up
            );
        }
    }

    fn check_budget(&self) -> Result<()> {
        if self.actions_remaining() == 0 {
            Err(BakeryError::ActionBudgetExhausted)
        } else {
            Ok(())
        }
    }

    fn record(&mut self, action: Action) {
        debug!(
            "{} ({}): {:?}",
            self.players[self.current].name(),
            self.current,
            action
        );
        let record = ActionRecord::new(self.current, action, self.round, self.actions_used);
        self.history.push_back(record);
        self.actions_used += 1;
    }

    // === Queries ===

    /// No customers left to draw and nobody waiting.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.customers.is_deck_empty() && self.customers.is_empty()
    }

    #[must_use]
    pub fn actions_permitted(&self) -> u32 {
        self.config.actions_for(self.players.player_count())
    }

    #[must_use]
    pub fn actions_remaining(&self) -> u32 {
        self.actions_permitted().saturating_sub(self.actions_used)
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.contains(id).then(|| &self.players[id])
    }

    #[must_use]
    pub fn pantry(&self) -> &Pantry {
        &self.pantry
    }

    /// The unbaked layer pool, duplicates included.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Distinct pooled layers the current player can bake.
    #[must_use]
    pub fn bakeable_layers(&self) -> Vec<&Layer> {
        let hand = self.current_player().hand();
        let mut bakeable: Vec<&Layer> = Vec::new();
        for layer in &self.layers {
            if !bakeable.contains(&layer) && layer.can_bake(hand) {
                bakeable.push(layer);
            }
        }
        bakeable
    }

    #[must_use]
    pub fn customers(&self) -> &CustomerQueue {
        &self.customers
    }

    /// Active orders the current player can serve.
    #[must_use]
    pub fn fulfilable_orders(&self) -> Vec<&CustomerOrder> {
        self.customers.fulfilable(self.current_player().hand())
    }

    /// Active orders the current player can serve with garnish.
    #[must_use]
    pub fn garnishable_orders(&self) -> Vec<&CustomerOrder> {
        self.customers.garnishable(self.current_player().hand())
    }

    /// Current round, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn config(&self) -> &BakeryConfig {
        &self.config
    }

    #[must_use]
    pub fn service_record(&self) -> ServiceRecord {
        ServiceRecord {
            fulfilled: self.customers.inactive_with_status(OrderStatus::Fulfilled).len(),
            garnished: self.customers.inactive_with_status(OrderStatus::Garnished).len(),
            given_up: self.customers.inactive_with_status(OrderStatus::GivenUp).len(),
        }
    }

    /// Every successful action so far, oldest first.
    #[must_use]
    pub fn action_history(&self) -> &im::Vector<ActionRecord> {
        &self.history
    }

    // === Persistence ===

    /// Encode the whole engine as an opaque blob.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore an engine encoded by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }

    #[cfg(test)]
    pub(crate) fn set_hand(&mut self, player: PlayerId, hand: Vec<Ingredient>) {
        *self.players[player].hand_mut() = hand;
    }
}
