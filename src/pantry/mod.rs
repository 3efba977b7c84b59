//! The shared ingredient supply.
//!
//! The `Pantry` owns the visible row players draw from, the face-down draw
//! deck that refills it, and the discard pile used ingredients go to.

mod store;

pub use store::Pantry;
