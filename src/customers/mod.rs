//! Customers: orders, the customer deck and the customer queue.
//!
//! - `CustomerOrder`: one order, its recipe and garnish, and fulfilment
//! - `compose_order_deck`: level-stratified deck built at setup
//! - `CustomerQueue`: the fixed window of active orders and how it ages

mod order;
mod deck;
mod queue;

pub use order::{CustomerOrder, OrderStatus};
pub use deck::compose_order_deck;
pub use queue::CustomerQueue;
