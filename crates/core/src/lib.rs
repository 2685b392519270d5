//! Core game logic. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod config;
pub mod deck;
pub mod events;
pub mod hand;
pub mod jokers;
pub mod persistence;
pub mod rng;
pub mod run;
pub mod scoring;
pub mod stage;
pub mod state;

pub use cards::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use hand::*;
pub use jokers::*;
pub use persistence::*;
pub use rng::*;
pub use run::*;
pub use scoring::*;
pub use stage::*;
pub use state::*;
