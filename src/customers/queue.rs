//! The customer queue: a fixed window of order slots fed from a deck.
//!
//! ## Slots
//!
//! The window is a fixed-length slice of optional orders. Slot 0 is the
//! fresh end, where new customers arrive; the last slot is the stale end,
//! from which customers leave. Empty slots are kept in place because a
//! customer's position is how close they are to leaving.
//!
//! ## Time passing
//!
//! Each tick every customer steps one slot toward the stale end. An empty
//! slot absorbs the step: customers on its fresh side move up into it and
//! customers on its stale side stay put. Slot 0 only counts as room when a
//! new customer is about to be drawn into it. With no empty slot to absorb
//! the step, the customer in the stale-end slot gives up.
//!
//! ```text
//! deck empty:     [A, B, C] -> [_, A, B]   C leaves
//! deck empty:     [_, A, B] -> [_, _, A]   B leaves
//! deck non-empty: [A, _, B] -> [_, A, B]   nobody leaves
//! ```
//!
//! A customer is impatient exactly when the next tick would make them leave.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::order::{CustomerOrder, OrderStatus};
use crate::core::entity::OrderId;
use crate::core::error::{BakeryError, Resource, Result};
use crate::ingredients::Ingredient;

/// Active window, undrawn deck and resolved orders.
///
/// Every order is in exactly one of the three.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerQueue {
    slots: Box<[Option<CustomerOrder>]>,
    /// Top of the deck is the end.
    deck: Vec<CustomerOrder>,
    inactive: Vec<CustomerOrder>,
}

impl CustomerQueue {
    /// Create a queue with an empty window of `width` slots.
    ///
    /// Panics if `width` is zero.
    #[must_use]
    pub fn new(deck: Vec<CustomerOrder>, width: usize) -> Self {
        assert!(width > 0, "Customer window needs at least one slot");
        Self {
            slots: vec![None; width].into_boxed_slice(),
            deck,
            inactive: Vec::new(),
        }
    }

    /// Let time pass, then draw the next customer into the fresh-end slot.
    ///
    /// Returns the customer who left, if any. Fails without touching the
    /// queue if the deck is empty.
    pub fn add_order(&mut self) -> Result<Option<&CustomerOrder>> {
        if self.deck.is_empty() {
            return Err(BakeryError::ResourceExhausted(Resource::CustomerDeck));
        }

        let left = self.age();
        if let Some(order) = self.deck.pop() {
            debug!("{} arrives", order.name());
            self.slots[0] = Some(order);
        }
        self.mark_impatient_if_about_to_leave();

        Ok(if left { self.inactive.last() } else { None })
    }

    /// Let time pass without drawing a new customer.
    ///
    /// Returns the customer who left, if any.
    pub fn advance(&mut self) -> Option<&CustomerOrder> {
        let left = self.age();
        self.mark_impatient_if_about_to_leave();

        if left {
            self.inactive.last()
        } else {
            None
        }
    }

    /// Flag the stale-end customer as impatient if the next tick would make
    /// them leave.
    ///
    /// Returns whether a customer was flagged.
    pub fn mark_impatient_if_about_to_leave(&mut self) -> bool {
        if !self.is_about_to_evict() {
            return false;
        }
        match self.slots.last_mut().and_then(Option::as_mut) {
            Some(order) if !order.status().is_terminal() => {
                order.set_status(OrderStatus::Impatient);
                true
            }
            _ => false,
        }
    }

    /// Would the next tick evict the stale-end customer?
    #[must_use]
    pub fn is_about_to_evict(&self) -> bool {
        let stale_occupied = self.slots.last().is_some_and(Option::is_some);
        stale_occupied && self.absorbing_slot().is_none()
    }

    /// Take a customer out of the window, leaving their slot empty.
    ///
    /// Served customers keep their status; anyone else gives up.
    pub fn remove(&mut self, id: OrderId) -> Result<()> {
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| matches!(slot, Some(o) if o.id() == id))
            .ok_or(BakeryError::OrderNotActive(id))?;

        if let Some(mut order) = slot.take() {
            if !order.status().is_served() {
                order.abandon();
            }
            self.inactive.push(order);
        }
        Ok(())
    }

    /// The customer in the stale-end slot.
    #[must_use]
    pub fn peek(&self) -> Option<&CustomerOrder> {
        self.slots.last().and_then(Option::as_ref)
    }

    pub(crate) fn peek_mut(&mut self) -> Option<&mut CustomerOrder> {
        self.slots.last_mut().and_then(Option::as_mut)
    }

    /// Active order by ID.
    #[must_use]
    pub fn get(&self, id: OrderId) -> Option<&CustomerOrder> {
        self.active_orders().find(|o| o.id() == id)
    }

    pub(crate) fn get_mut(&mut self, id: OrderId) -> Option<&mut CustomerOrder> {
        self.slots.iter_mut().flatten().find(|o| o.id() == id)
    }

    /// Active orders `hand` can fulfil.
    #[must_use]
    pub fn fulfilable(&self, hand: &[Ingredient]) -> Vec<&CustomerOrder> {
        self.active_orders().filter(|o| o.can_fulfill(hand)).collect()
    }

    /// Active orders `hand` can fulfil and garnish.
    #[must_use]
    pub fn garnishable(&self, hand: &[Ingredient]) -> Vec<&CustomerOrder> {
        self.active_orders().filter(|o| o.can_garnish(hand)).collect()
    }

    /// The window, fresh end first, empty slots included.
    #[must_use]
    pub fn slots(&self) -> &[Option<CustomerOrder>] {
        &self.slots
    }

    /// Occupied slots, fresh end first.
    pub fn active_orders(&self) -> impl Iterator<Item = &CustomerOrder> {
        self.slots.iter().flatten()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn size(&self) -> usize {
        self.active_orders().count()
    }

    /// Is the window empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    #[must_use]
    pub fn is_deck_empty(&self) -> bool {
        self.deck.is_empty()
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// Resolved orders in the order they left the window.
    #[must_use]
    pub fn inactive(&self) -> &[CustomerOrder] {
        &self.inactive
    }

    /// Resolved orders with the given status.
    #[must_use]
    pub fn inactive_with_status(&self, status: OrderStatus) -> Vec<&CustomerOrder> {
        self.inactive.iter().filter(|o| o.status() == status).collect()
    }

    /// The empty slot that absorbs the next tick, if any.
    fn absorbing_slot(&self) -> Option<usize> {
        let arriving = !self.deck.is_empty();
        let mut occupied_before = false;
        for (i, slot) in self.slots.iter().enumerate() {
            match slot {
                Some(_) => occupied_before = true,
                None if arriving || occupied_before => return Some(i),
                None => {}
            }
        }
        None
    }

    /// Move every customer one step toward the stale end.
    ///
    /// Returns true if the stale-end customer left.
    fn age(&mut self) -> bool {
        if let Some(i) = self.absorbing_slot() {
            self.slots[..=i].rotate_right(1);
            return false;
        }

        let left = self.slots.last_mut().and_then(Option::take);
        self.slots.rotate_right(1);

        match left {
            Some(mut order) => {
                order.abandon();
                info!("{} gave up waiting", order.name());
                self.inactive.push(order);
                true
            }
            None => false,
        }
    }
}
