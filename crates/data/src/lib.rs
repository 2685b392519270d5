//! JSON loading for game data and the high score file.

pub mod load;
pub mod persistence;
pub mod schema;

pub use load::*;
pub use persistence::*;
pub use schema::*;
