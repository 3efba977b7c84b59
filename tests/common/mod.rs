//! Shared deck fixtures for integration tests.

#![allow(dead_code)]

use magic_bakery::{BakeryBuilder, BakeryEngine, DeckDefinitions, Ingredient, LayerDefinition, OrderDefinition};

/// Route engine logs to the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A full set of decks that supports every table size from 2 to 5.
pub fn bakery_decks() -> DeckDefinitions {
    DeckDefinitions::new()
        .ingredient("flour", 10)
        .ingredient("eggs", 10)
        .ingredient("butter", 10)
        .ingredient("sugar", 10)
        .ingredient("milk", 6)
        .ingredient("fruit", 6)
        .ingredient("chocolate", 6)
        .ingredient("helpful duck", 6)
        .layer(LayerDefinition::new("sponge", &["flour", "eggs", "sugar"]))
        .layer(LayerDefinition::new("biscuit", &["flour", "butter", "sugar"]))
        .layer(LayerDefinition::new("jam", &["fruit", "sugar"]))
        .layer(LayerDefinition::new("icing", &["butter", "sugar", "milk"]))
        .layer(LayerDefinition::new("crumb", &["flour", "butter"]))
        .order(OrderDefinition::new(1, "Jam tart", &["crumb", "jam"]).with_garnish(&["fruit"]))
        .order(OrderDefinition::new(1, "Fairy cake", &["sponge", "icing"]))
        .order(OrderDefinition::new(1, "Shortbread", &["biscuit", "sugar"]))
        .order(OrderDefinition::new(1, "Milkshake", &["milk", "fruit"]).with_garnish(&["chocolate"]))
        .order(OrderDefinition::new(1, "Crumble", &["crumb", "fruit"]))
        .order(OrderDefinition::new(2, "Victoria sponge", &["sponge", "jam", "sponge"]).with_garnish(&["sugar"]))
        .order(OrderDefinition::new(2, "Millionaire", &["biscuit", "icing", "chocolate"]))
        .order(OrderDefinition::new(2, "Trifle", &["sponge", "jam", "milk"]).with_garnish(&["fruit", "sugar"]))
        .order(OrderDefinition::new(3, "Wedding cake", &["sponge", "sponge", "icing", "jam"]))
        .order(OrderDefinition::new(3, "Black forest", &["sponge", "chocolate", "fruit", "icing"]))
        .order(OrderDefinition::new(3, "Battenberg", &["sponge", "jam", "icing"]).with_garnish(&["chocolate"]))
        .order(OrderDefinition::new(3, "Gateau", &["sponge", "icing", "chocolate"]))
        .order(OrderDefinition::new(3, "Cheesecake", &["crumb", "fruit", "butter"]))
        .order(OrderDefinition::new(3, "Opera cake", &["sponge", "chocolate", "icing", "chocolate"]))
}

/// Number of ingredient cards in `bakery_decks`.
pub const INGREDIENT_TOTAL: usize = 64;

pub fn new_game(players: usize, seed: u64) -> BakeryEngine {
    let names = ["Ada", "Grace", "Alan", "Edsger", "Barbara"];
    BakeryBuilder::new(bakery_decks())
        .players(names.iter().take(players).copied())
        .build(seed)
        .expect("fixture decks build for 2-5 players")
}

/// Ingredients held anywhere: pantry row, draw deck, discard, and hands.
pub fn ingredients_in_play(engine: &BakeryEngine) -> usize {
    let in_hands: usize = engine
        .players()
        .values()
        .map(|p| p.hand().iter().filter(|i| !i.is_composite()).count())
        .sum();
    engine.pantry().total() + in_hands
}

/// Layers held anywhere: the unbaked pool and hands.
pub fn layers_in_play(engine: &BakeryEngine) -> usize {
    let in_hands: usize = engine
        .players()
        .values()
        .map(|p| p.hand().iter().filter(|i| i.is_composite()).count())
        .sum();
    engine.layers().len() + in_hands
}

pub fn ing(name: &str) -> Ingredient {
    Ingredient::new(name).unwrap()
}
