//! Pantry storage: visible row, draw deck and discard pile.
//!
//! Ingredients only ever move between these three piles and the players;
//! the pantry never creates or drops one. When the draw deck runs out the
//! discard pile is shuffled back in.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::error::{BakeryError, Resource, Result};
use crate::core::rng::GameRng;
use crate::ingredients::{normalize_name, Ingredient};

/// The shared ingredient supply.
///
/// ## Usage
///
/// ```
/// use magic_bakery::core::GameRng;
/// use magic_bakery::ingredients::Ingredient;
/// use magic_bakery::pantry::Pantry;
///
/// let mut rng = GameRng::new(42);
/// let flour = Ingredient::new("flour").unwrap();
/// let mut pantry = Pantry::new(vec![flour; 8], 5, &mut rng);
///
/// pantry.fill_row(&mut rng).unwrap();
/// assert_eq!(pantry.row().len(), 5);
/// assert_eq!(pantry.deck_len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pantry {
    width: usize,
    row: Vec<Ingredient>,
    /// Top of the deck is the end.
    deck: Vec<Ingredient>,
    discard: Vec<Ingredient>,
}

impl Pantry {
    /// Shuffle `ingredients` into a new draw deck. The row starts empty.
    #[must_use]
    pub fn new(mut ingredients: Vec<Ingredient>, width: usize, rng: &mut GameRng) -> Self {
        rng.shuffle(&mut ingredients);
        Self {
            width,
            row: Vec::with_capacity(width),
            deck: ingredients,
            discard: Vec::new(),
        }
    }

    /// Visible ingredients, in slot order.
    #[must_use]
    pub fn row(&self) -> &[Ingredient] {
        &self.row
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    #[must_use]
    pub fn discard(&self) -> &[Ingredient] {
        &self.discard
    }

    /// Ingredients that can still be drawn (deck plus discard).
    #[must_use]
    pub fn drawable(&self) -> usize {
        self.deck.len() + self.discard.len()
    }

    /// Every ingredient the pantry holds.
    #[must_use]
    pub fn total(&self) -> usize {
        self.row.len() + self.drawable()
    }

    /// Draw the top of the deck, recycling the discard pile if needed.
    pub fn draw(&mut self, rng: &mut GameRng) -> Result<Ingredient> {
        if self.deck.is_empty() {
            self.recycle_discard(rng);
        }
        self.deck
            .pop()
            .ok_or(BakeryError::ResourceExhausted(Resource::Pantry))
    }

    /// Draw up to `count` ingredients, stopping early if the pantry runs dry.
    pub fn draw_up_to(&mut self, count: usize, rng: &mut GameRng) -> Vec<Ingredient> {
        let count = count.min(self.drawable());
        (0..count).filter_map(|_| self.draw(rng).ok()).collect()
    }

    /// Top up the row to its full width.
    ///
    /// Fails with `ResourceExhausted` if the pantry cannot fill it, leaving
    /// the pantry unchanged.
    pub fn fill_row(&mut self, rng: &mut GameRng) -> Result<()> {
        let missing = self.width.saturating_sub(self.row.len());
        if self.drawable() < missing {
            return Err(BakeryError::ResourceExhausted(Resource::Pantry));
        }
        let drawn = self.draw_up_to(missing, rng);
        self.row.extend(drawn);
        Ok(())
    }

    /// Slot of the first visible ingredient called `name` (case-insensitive).
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        let key = normalize_name(name);
        self.row.iter().position(|i| i.name() == key)
    }

    /// Take the ingredient in `slot` and refill the slot from the deck.
    ///
    /// If nothing is left to draw the slot is left out of the row.
    pub(crate) fn take(&mut self, slot: usize, rng: &mut GameRng) -> Ingredient {
        let taken = self.row.remove(slot);
        if let Ok(next) = self.draw(rng) {
            self.row.insert(slot, next);
        }
        taken
    }

    /// Put used ingredients on the discard pile.
    pub(crate) fn discard_all(&mut self, ingredients: impl IntoIterator<Item = Ingredient>) {
        self.discard.extend(ingredients);
    }

    /// Clear the row to the discard pile, shuffle everything back into the
    /// deck and deal a fresh row.
    pub fn refresh(&mut self, rng: &mut GameRng) -> Result<()> {
        if self.total() == 0 {
            return Err(BakeryError::ResourceExhausted(Resource::Pantry));
        }
        self.discard.append(&mut self.row);
        self.deck.append(&mut self.discard);
        rng.shuffle(&mut self.deck);

        let width = self.width.min(self.deck.len());
        let drawn = self.draw_up_to(width, rng);
        self.row.extend(drawn);
        Ok(())
    }

    fn recycle_discard(&mut self, rng: &mut GameRng) {
        if self.discard.is_empty() {
            return;
        }
        debug!("reshuffling {} discarded ingredients into the pantry deck", self.discard.len());
        self.deck.append(&mut self.discard);
        rng.shuffle(&mut self.deck);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ing(name: &str) -> Ingredient {
        Ingredient::new(name).unwrap()
    }

    fn stock(count: usize) -> Vec<Ingredient> {
        let names = ["flour", "eggs", "sugar", "butter"];
        (0..count).map(|i| ing(names[i % names.len()])).collect()
    }

    #[test]
    fn test_fill_row() {
        let mut rng = GameRng::new(42);
        let mut pantry = Pantry::new(stock(12), 5, &mut rng);

        pantry.fill_row(&mut rng).unwrap();

        assert_eq!(pantry.row().len(), 5);
        assert_eq!(pantry.deck_len(), 7);
        assert_eq!(pantry.total(), 12);
    }

    #[test]
    fn test_fill_row_short_supply_is_atomic() {
        let mut rng = GameRng::new(42);
        let mut pantry = Pantry::new(stock(3), 5, &mut rng);

        let result = pantry.fill_row(&mut rng);

        assert!(matches!(result, Err(BakeryError::ResourceExhausted(Resource::Pantry))));
        assert!(pantry.row().is_empty());
        assert_eq!(pantry.deck_len(), 3);
    }

    #[test]
    fn test_draw_recycles_discard() {
        let mut rng = GameRng::new(1);
        let mut pantry = Pantry::new(Vec::new(), 5, &mut rng);
        pantry.discard_all(vec![ing("milk"), ing("fruit")]);

        let first = pantry.draw(&mut rng).unwrap();
        assert!(pantry.discard().is_empty());
        assert_eq!(pantry.deck_len(), 1);
        assert!(first == ing("milk") || first == ing("fruit"));

        pantry.draw(&mut rng).unwrap();
        assert!(matches!(
            pantry.draw(&mut rng),
            Err(BakeryError::ResourceExhausted(Resource::Pantry))
        ));
    }

    #[test]
    fn test_take_refills_same_slot() {
        let mut rng = GameRng::new(42);
        let mut pantry = Pantry::new(stock(8), 5, &mut rng);
        pantry.fill_row(&mut rng).unwrap();
        let untouched = pantry.row()[3].clone();

        let slot = 2;
        let expected_refill_from_deck = pantry.deck_len() - 1;
        pantry.take(slot, &mut rng);

        assert_eq!(pantry.row().len(), 5);
        assert_eq!(pantry.row()[3], untouched);
        assert_eq!(pantry.deck_len(), expected_refill_from_deck);
    }

    #[test]
    fn test_take_with_nothing_left_shrinks_row() {
        let mut rng = GameRng::new(42);
        let mut pantry = Pantry::new(stock(5), 5, &mut rng);
        pantry.fill_row(&mut rng).unwrap();

        pantry.take(0, &mut rng);

        assert_eq!(pantry.row().len(), 4);
        assert_eq!(pantry.total(), 4);
    }

    #[test]
    fn test_position_is_case_insensitive() {
        let mut rng = GameRng::new(42);
        let mut pantry = Pantry::new(vec![ing("flour"); 5], 5, &mut rng);
        pantry.fill_row(&mut rng).unwrap();

        assert_eq!(pantry.position(" FLOUR"), Some(0));
        assert_eq!(pantry.position("eggs"), None);
    }

    #[test]
    fn test_refresh_conserves_ingredients() {
        let mut rng = GameRng::new(42);
        let mut pantry = Pantry::new(stock(10), 5, &mut rng);
        pantry.fill_row(&mut rng).unwrap();
        pantry.discard_all(vec![ing("milk"), ing("milk")]);

        pantry.refresh(&mut rng).unwrap();

        assert_eq!(pantry.row().len(), 5);
        assert!(pantry.discard().is_empty());
        assert_eq!(pantry.total(), 12);
    }

    #[test]
    fn test_refresh_empty_pantry_fails() {
        let mut rng = GameRng::new(42);
        let mut pantry = Pantry::new(Vec::new(), 5, &mut rng);
        assert!(matches!(
            pantry.refresh(&mut rng),
            Err(BakeryError::ResourceExhausted(Resource::Pantry))
        ));
    }

    #[test]
    fn test_draw_up_to_stops_when_dry() {
        let mut rng = GameRng::new(42);
        let mut pantry = Pantry::new(stock(1), 5, &mut rng);
        assert_eq!(pantry.draw_up_to(2, &mut rng).len(), 1);
        assert_eq!(pantry.total(), 0);
    }
}
