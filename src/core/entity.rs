//! Stable identifiers for customer orders.
//!
//! Orders move between the customer deck, the active window and the inactive
//! list, so callers refer to them by `OrderId` rather than by position.
//! IDs are allocated sequentially at setup in the order the definitions were
//! supplied, before any shuffling, so a given deck always yields the same IDs.
//!
//! ```
//! use magic_bakery::core::OrderId;
//!
//! let first = OrderId::new(0);
//! assert_eq!(first.next(), OrderId::new(1));
//! assert_eq!(format!("{}", first), "Order(0)");
//! ```

use serde::{Deserialize, Serialize};

/// Identifier for a customer order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl OrderId {
    /// Create an order ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The ID allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Order({})", self.0)
    }
}
