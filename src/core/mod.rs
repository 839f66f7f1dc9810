//! Core engine types: items, catalogs, tiles, epochs, RNG, configuration.
//!
//! These are the fixed inputs of a game. Nothing here changes while a game
//! is being played; the mutable parts live in `engine`.

pub mod catalog;
pub mod config;
pub mod epoch;
pub mod error;
pub mod item;
pub mod rng;
pub mod tile;

pub use catalog::Catalog;
pub use config::GameConfig;
pub use epoch::Epoch;
pub use error::{CatalogError, ConfigError};
pub use item::{Item, ItemId};
pub use rng::GameRng;
pub use tile::{Position, Tile};
