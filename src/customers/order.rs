//! A single customer order.
//!
//! An order knows its recipe and optional garnish and decides whether a
//! multiset of ingredients can satisfy them. The garnish is always checked
//! against what would be left after the recipe is taken, never against the
//! full hand.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::entity::OrderId;
use crate::core::error::{BakeryError, Result};
use crate::ingredients::{describe, extract, Ingredient, Matcher};

/// Where an order is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Waiting to be served.
    Waiting,
    /// Served without garnish.
    Fulfilled,
    /// Served with garnish.
    Garnished,
    /// Will leave at the next tick unless served.
    Impatient,
    /// Left unserved.
    GivenUp,
}

impl OrderStatus {
    /// Was the order served?
    #[must_use]
    pub fn is_served(self) -> bool {
        matches!(self, OrderStatus::Fulfilled | OrderStatus::Garnished)
    }

    /// Can the status still change?
    #[must_use]
    pub fn is_terminal(self) -> bool {
        self.is_served() || self == OrderStatus::GivenUp
    }
}

/// A customer order card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerOrder {
    id: OrderId,
    name: String,
    recipe: Vec<Ingredient>,
    garnish: Vec<Ingredient>,
    level: u8,
    status: OrderStatus,
}

impl CustomerOrder {
    /// Create a waiting order.
    ///
    /// Fails with `InvalidConfiguration` if the recipe is empty or the level
    /// is outside 1-3.
    pub fn new(
        id: OrderId,
        name: impl Into<String>,
        recipe: Vec<Ingredient>,
        garnish: Vec<Ingredient>,
        level: u8,
    ) -> Result<Self> {
        let name = name.into();
        if recipe.is_empty() {
            return Err(BakeryError::config(format!("order {} has an empty recipe", name)));
        }
        if !(1..=3).contains(&level) {
            return Err(BakeryError::config(format!(
                "order {} has level {}, expected 1-3",
                name, level
            )));
        }
        Ok(Self {
            id,
            name,
            recipe,
            garnish,
            level,
            status: OrderStatus::Waiting,
        })
    }

    #[must_use]
    pub fn id(&self) -> OrderId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn recipe(&self) -> &[Ingredient] {
        &self.recipe
    }

    #[must_use]
    pub fn garnish(&self) -> &[Ingredient] {
        &self.garnish
    }

    #[must_use]
    pub fn level(&self) -> u8 {
        self.level
    }

    #[must_use]
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    #[must_use]
    pub fn recipe_description(&self) -> String {
        describe(&self.recipe)
    }

    #[must_use]
    pub fn garnish_description(&self) -> String {
        describe(&self.garnish)
    }

    /// Can `available` cover the recipe?
    #[must_use]
    pub fn can_fulfill(&self, available: &[Ingredient]) -> bool {
        Matcher::new(available).claim(&self.recipe).is_ok()
    }

    /// Can `available` cover the recipe and then the garnish from what is left?
    #[must_use]
    pub fn can_garnish(&self, available: &[Ingredient]) -> bool {
        if self.garnish.is_empty() {
            return false;
        }
        let mut matcher = Matcher::new(available);
        matcher.claim(&self.recipe).is_ok() && matcher.claim(&self.garnish).is_ok()
    }

    /// Serve this order from `hand`.
    ///
    /// Removes the matched ingredients from `hand` and returns them. With
    /// `want_garnish`, the garnish is also taken if the rest of the hand
    /// covers it; otherwise the order is served plain. On failure `hand` and
    /// the order are untouched.
    pub fn fulfill(&mut self, hand: &mut Vec<Ingredient>, want_garnish: bool) -> Result<Vec<Ingredient>> {
        let mut matcher = Matcher::new(hand);
        let mut claim = matcher.claim(&self.recipe).map_err(|met| BakeryError::IngredientMismatch {
            context: format!("order {}", self.name),
            required: self.recipe.len(),
            available: met,
        })?;

        let mut garnished = false;
        if want_garnish && !self.garnish.is_empty() {
            if let Ok(extra) = matcher.claim(&self.garnish) {
                claim.extend(extra);
                garnished = true;
            }
        }

        let used = extract(hand, &claim);
        self.status = if garnished {
            OrderStatus::Garnished
        } else {
            OrderStatus::Fulfilled
        };
        debug!("{} served with {}", self.name, describe(&used));

        Ok(used)
    }

    /// The customer leaves unserved.
    pub fn abandon(&mut self) {
        self.status = OrderStatus::GivenUp;
    }
}

impl std::fmt::Display for CustomerOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (level {}): {}", self.name, self.level, self.recipe_description())?;
        if !self.garnish.is_empty() {
            write!(f, " + {}", self.garnish_description())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredients::Layer;

    fn ing(name: &str) -> Ingredient {
        Ingredient::new(name).unwrap()
    }

    fn duck() -> Ingredient {
        Ingredient::Wildcard
    }

    fn sponge() -> Ingredient {
        Layer::new("sponge", vec![ing("flour"), ing("eggs")]).unwrap().into()
    }

    fn cake() -> CustomerOrder {
        CustomerOrder::new(
            OrderId::new(1),
            "Birthday cake",
            vec![sponge(), ing("sugar")],
            vec![ing("fruit")],
            2,
        )
        .unwrap()
    }

    #[test]
    fn test_construction_validation() {
        assert!(matches!(
            CustomerOrder::new(OrderId::new(0), "Nothing", vec![], vec![], 1),
            Err(BakeryError::InvalidConfiguration(_))
        ));
        assert!(CustomerOrder::new(OrderId::new(0), "Too hard", vec![ing("milk")], vec![], 4).is_err());

        let order = cake();
        assert_eq!(order.status(), OrderStatus::Waiting);
        assert_eq!(order.level(), 2);
        assert_eq!(order.recipe_description(), "sponge, sugar");
        assert_eq!(order.garnish_description(), "fruit");
    }

    #[test]
    fn test_can_fulfill() {
        let order = cake();
        assert!(order.can_fulfill(&[ing("sugar"), sponge()]));
        assert!(order.can_fulfill(&[sponge(), duck()]));
        assert!(!order.can_fulfill(&[ing("sugar")]));
        // Wildcards never stand in for the sponge layer
        assert!(!order.can_fulfill(&[duck(), duck()]));
    }

    #[test]
    fn test_can_garnish_uses_residual_hand() {
        let order = cake();
        // Only one wildcard: it cannot cover both the sugar and the fruit
        assert!(!order.can_garnish(&[sponge(), duck()]));
        assert!(order.can_garnish(&[sponge(), duck(), ing("fruit")]));
        assert!(order.can_garnish(&[sponge(), duck(), duck()]));
    }

    #[test]
    fn test_no_garnish_list_is_never_garnishable() {
        let order = CustomerOrder::new(OrderId::new(2), "Toast", vec![ing("bread")], vec![], 1).unwrap();
        assert!(!order.can_garnish(&[ing("bread"), ing("butter")]));
    }

    #[test]
    fn test_fulfill_consumes_recipe() {
        let mut order = cake();
        let mut hand = vec![ing("fruit"), sponge(), ing("sugar"), ing("milk")];

        let used = order.fulfill(&mut hand, false).unwrap();

        assert_eq!(used, vec![sponge(), ing("sugar")]);
        assert_eq!(hand, vec![ing("fruit"), ing("milk")]);
        assert_eq!(order.status(), OrderStatus::Fulfilled);
    }

    #[test]
    fn test_fulfill_with_garnish() {
        let mut order = cake();
        let mut hand = vec![ing("fruit"), sponge(), duck()];

        let used = order.fulfill(&mut hand, true).unwrap();

        assert_eq!(used, vec![sponge(), duck(), ing("fruit")]);
        assert!(hand.is_empty());
        assert_eq!(order.status(), OrderStatus::Garnished);
    }

    #[test]
    fn test_fulfill_falls_back_to_plain_when_garnish_short() {
        let mut order = cake();
        let mut hand = vec![sponge(), ing("sugar"), ing("milk")];

        let used = order.fulfill(&mut hand, true).unwrap();

        assert_eq!(used.len(), 2);
        assert_eq!(hand, vec![ing("milk")]);
        assert_eq!(order.status(), OrderStatus::Fulfilled);
    }

    #[test]
    fn test_failed_fulfill_is_atomic() {
        let mut order = cake();
        let mut hand = vec![ing("sugar"), duck()];
        let before = hand.clone();

        let err = order.fulfill(&mut hand, true).unwrap_err();

        match err {
            BakeryError::IngredientMismatch { required, available, .. } => {
                assert_eq!(required, 2);
                assert_eq!(available, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(hand, before);
        assert_eq!(order.status(), OrderStatus::Waiting);
    }

    #[test]
    fn test_abandon_is_idempotent() {
        let mut order = cake();
        order.abandon();
        order.abandon();
        assert_eq!(order.status(), OrderStatus::GivenUp);
        assert!(order.status().is_terminal());
        assert!(!order.status().is_served());
    }

    #[test]
    fn test_display() {
        assert_eq!(cake().to_string(), "Birthday cake (level 2): sponge, sugar + fruit");
    }
}
