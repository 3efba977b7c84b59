//! Ingredient model and ingredient matching.
//!
//! - `Ingredient`: basic ingredients, the wildcard, and baked layers
//! - `Layer`: composite ingredient with its own recipe
//! - `Matcher`: one-to-one multiset matching with wildcard substitution

mod ingredient;
mod matching;

pub use ingredient::{describe, normalize_name, Ingredient, Layer, WILDCARD_NAME};
pub use matching::{Claim, Matcher};

pub(crate) use matching::extract;
