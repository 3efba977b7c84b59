//! Players and per-player data storage.
//!
//! ## PlayerId
//!
//! Seat index of a player. Turn order follows seat order.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access, indexed by
//! `PlayerId`.
//!
//! ## Player
//!
//! A named participant and the ingredients in their hand.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::ingredients::{describe, Ingredient};

/// Player seat, 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping at `player_count`.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use magic_bakery::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use magic_bakery::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::new(3, |_| 0);
/// scores[PlayerId::new(1)] += 2;
/// assert_eq!(scores[PlayerId::new(1)], 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Is `player` a seat in this map?
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A participant and their hand.
///
/// The hand is a multiset: its order carries no meaning for matching, but
/// `sorted_hand` gives a canonical view for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Vec<Ingredient>,
}

impl Player {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn hand(&self) -> &[Ingredient] {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Vec<Ingredient> {
        &mut self.hand
    }

    pub fn add_to_hand(&mut self, ingredient: Ingredient) {
        self.hand.push(ingredient);
    }

    /// Remove one unit of `ingredient`.
    ///
    /// Returns true if the ingredient was found and removed.
    pub fn remove_from_hand(&mut self, ingredient: &Ingredient) -> bool {
        if let Some(pos) = self.hand.iter().position(|i| i == ingredient) {
            self.hand.remove(pos);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn has_ingredient(&self, ingredient: &Ingredient) -> bool {
        self.hand.contains(ingredient)
    }

    #[must_use]
    pub fn wildcard_count(&self) -> usize {
        self.hand.iter().filter(|i| i.is_wildcard()).count()
    }

    /// Hand sorted by name.
    #[must_use]
    pub fn sorted_hand(&self) -> Vec<&Ingredient> {
        let mut sorted: Vec<&Ingredient> = self.hand.iter().collect();
        sorted.sort();
        sorted
    }

    /// Sorted hand as "a, b, c".
    #[must_use]
    pub fn hand_description(&self) -> String {
        let sorted: Vec<Ingredient> = self.sorted_hand().into_iter().cloned().collect();
        describe(&sorted)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
