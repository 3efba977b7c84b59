//! Ingredient and layer value types.
//!
//! ## Identity
//!
//! - Plain ingredients are identified by their normalized name
//!   (trimmed, lower-cased).
//! - The wildcard ("helpful duck") is a single distinguished value.
//! - Layers are identified by their recipe: two layers are equal when their
//!   sorted recipes are equal, whatever they are called.
//!
//! Whether an ingredient is composite is decided once, by its variant.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::core::error::{BakeryError, Result};

use super::matching::Matcher;

/// Name of the wildcard ingredient.
pub const WILDCARD_NAME: &str = "helpful duck";

/// Normalize an ingredient name for comparison.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A single ingredient card.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Ingredient {
    /// An atomic ingredient (flour, eggs, ...).
    Basic(String),
    /// The wildcard, which stands in for any single basic ingredient.
    Wildcard,
    /// A baked layer.
    Layer(Layer),
}

impl Ingredient {
    /// Create a basic ingredient (or the wildcard) from a name.
    ///
    /// ```
    /// use magic_bakery::ingredients::Ingredient;
    ///
    /// let flour = Ingredient::new("  Flour ").unwrap();
    /// assert_eq!(flour.name(), "flour");
    /// assert!(Ingredient::new("Helpful Duck").unwrap().is_wildcard());
    /// assert!(Ingredient::new("   ").is_err());
    /// ```
    pub fn new(name: &str) -> Result<Self> {
        let name = normalize_name(name);
        if name.is_empty() {
            return Err(BakeryError::config("ingredient name must not be empty"));
        }
        if name == WILDCARD_NAME {
            Ok(Ingredient::Wildcard)
        } else {
            Ok(Ingredient::Basic(name))
        }
    }

    /// Normalized display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Ingredient::Basic(name) => name,
            Ingredient::Wildcard => WILDCARD_NAME,
            Ingredient::Layer(layer) => layer.name(),
        }
    }

    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Ingredient::Wildcard)
    }

    /// True for layers, which the wildcard can never stand in for.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        matches!(self, Ingredient::Layer(_))
    }

    /// The layer inside this ingredient, if it is one.
    #[must_use]
    pub fn as_layer(&self) -> Option<&Layer> {
        match self {
            Ingredient::Layer(layer) => Some(layer),
            _ => None,
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Ingredient::Basic(_) => 0,
            Ingredient::Wildcard => 1,
            Ingredient::Layer(_) => 2,
        }
    }
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Ingredient::Basic(a), Ingredient::Basic(b)) => a == b,
            (Ingredient::Wildcard, Ingredient::Wildcard) => true,
            (Ingredient::Layer(a), Ingredient::Layer(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Ingredient {}

impl Hash for Ingredient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        match self {
            Ingredient::Basic(name) => name.hash(state),
            Ingredient::Wildcard => {}
            Ingredient::Layer(layer) => layer.hash(state),
        }
    }
}

impl Ord for Ingredient {
    /// Orders by name first so sorted hands read alphabetically.
    ///
    /// Layer names and recipes are kept one-to-one at setup, so ordering by
    /// name agrees with recipe-based equality.
    fn cmp(&self, other: &Self) -> Ordering {
        self.name()
            .cmp(other.name())
            .then_with(|| self.rank().cmp(&other.rank()))
            .then_with(|| match (self, other) {
                (Ingredient::Layer(a), Ingredient::Layer(b)) => a.sorted_recipe().cmp(&b.sorted_recipe()),
                _ => Ordering::Equal,
            })
    }
}

impl PartialOrd for Ingredient {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for Ingredient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Layer> for Ingredient {
    fn from(layer: Layer) -> Self {
        Ingredient::Layer(layer)
    }
}

/// A composite ingredient baked from its own recipe.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Layer {
    name: String,
    recipe: Vec<Ingredient>,
}

impl Layer {
    /// Create a layer. The recipe must not be empty.
    ///
    /// ```
    /// use magic_bakery::ingredients::{Ingredient, Layer};
    ///
    /// let flour = Ingredient::new("flour").unwrap();
    /// let eggs = Ingredient::new("eggs").unwrap();
    /// let sponge = Layer::new("Sponge", vec![flour.clone(), eggs.clone()]).unwrap();
    /// let same = Layer::new("Other name", vec![eggs, flour]).unwrap();
    /// assert_eq!(sponge, same);
    /// assert!(Layer::new("Nothing", vec![]).is_err());
    /// ```
    pub fn new(name: &str, recipe: Vec<Ingredient>) -> Result<Self> {
        let name = normalize_name(name);
        if name.is_empty() {
            return Err(BakeryError::config("layer name must not be empty"));
        }
        if recipe.is_empty() {
            return Err(BakeryError::config(format!("layer {} has an empty recipe", name)));
        }
        Ok(Self { name, recipe })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recipe in the order it was defined.
    #[must_use]
    pub fn recipe(&self) -> &[Ingredient] {
        &self.recipe
    }

    /// Recipe in canonical order (the layer's identity).
    #[must_use]
    pub fn sorted_recipe(&self) -> Vec<&Ingredient> {
        let mut sorted: Vec<&Ingredient> = self.recipe.iter().collect();
        sorted.sort();
        sorted
    }

    /// Can `available` cover this layer's recipe?
    ///
    /// Missing basic ingredients may be covered by wildcards in `available`,
    /// one wildcard per missing ingredient.
    #[must_use]
    pub fn can_bake(&self, available: &[Ingredient]) -> bool {
        Matcher::new(available).claim(&self.recipe).is_ok()
    }

    /// Comma-separated recipe for display.
    #[must_use]
    pub fn recipe_description(&self) -> String {
        describe(&self.recipe)
    }
}

impl PartialEq for Layer {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_recipe() == other.sorted_recipe()
    }
}

impl Eq for Layer {}

impl Hash for Layer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted_recipe().hash(state);
    }
}

impl std::fmt::Display for Layer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// Join ingredient names with ", ".
#[must_use]
pub fn describe(ingredients: &[Ingredient]) -> String {
    ingredients
        .iter()
        .map(Ingredient::name)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ing(name: &str) -> Ingredient {
        Ingredient::new(name).unwrap()
    }

    #[test]
    fn test_name_normalization() {
        assert_eq!(ing("  FLOUR "), ing("flour"));
        assert_eq!(ing("Dark Chocolate").name(), "dark chocolate");
        assert_eq!(ing("HELPFUL DUCK"), Ingredient::Wildcard);
        assert!(matches!(Ingredient::new(""), Err(BakeryError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_layer_identity_is_recipe_based() {
        let a = Layer::new("sponge", vec![ing("flour"), ing("eggs")]).unwrap();
        let b = Layer::new("sponge", vec![ing("eggs"), ing("flour")]).unwrap();
        let c = Layer::new("sponge", vec![ing("eggs"), ing("sugar")]).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(Ingredient::from(a.clone()), Ingredient::from(b));
        assert_ne!(Ingredient::from(a), ing("sponge"));
    }

    #[test]
    fn test_composite_capability() {
        let layer = Layer::new("jam", vec![ing("fruit"), ing("sugar")]).unwrap();
        assert!(Ingredient::from(layer).is_composite());
        assert!(!ing("fruit").is_composite());
        assert!(!Ingredient::Wildcard.is_composite());
    }

    #[test]
    fn test_layer_rejects_empty_recipe() {
        assert!(matches!(
            Layer::new("air", Vec::new()),
            Err(BakeryError::InvalidConfiguration(_))
        ));
        assert!(Layer::new(" ", vec![ing("flour")]).is_err());
    }

    #[test]
    fn test_ordering_by_name() {
        let mut hand = vec![ing("sugar"), Ingredient::Wildcard, ing("butter"), ing("eggs")];
        hand.sort();
        let names: Vec<_> = hand.iter().map(Ingredient::name).collect();
        assert_eq!(names, vec!["butter", "eggs", "helpful duck", "sugar"]);
    }

    #[test]
    fn test_can_bake_with_wildcard() {
        let layer = Layer::new("sponge", vec![ing("flour"), ing("eggs")]).unwrap();

        assert!(layer.can_bake(&[ing("eggs"), ing("flour")]));
        assert!(layer.can_bake(&[ing("flour"), Ingredient::Wildcard]));
        assert!(layer.can_bake(&[Ingredient::Wildcard, Ingredient::Wildcard]));
        assert!(!layer.can_bake(&[ing("flour")]));
        assert!(!layer.can_bake(&[ing("flour"), ing("flour")]));
    }

    #[test]
    fn test_descriptions() {
        let layer = Layer::new("icing", vec![ing("butter"), ing("sugar")]).unwrap();
        assert_eq!(layer.recipe_description(), "butter, sugar");
        assert_eq!(describe(&[]), "");
        assert_eq!(format!("{}", Ingredient::from(layer)), "icing");
    }

    #[test]
    fn test_ingredient_serialization() {
        let layer = Layer::new("jam", vec![ing("fruit"), ing("sugar")]).unwrap();
        let items = vec![ing("flour"), Ingredient::Wildcard, Ingredient::from(layer)];

        let json = serde_json::to_string(&items).unwrap();
        let deserialized: Vec<Ingredient> = serde_json::from_str(&json).unwrap();
        assert_eq!(items, deserialized);
    }
}
