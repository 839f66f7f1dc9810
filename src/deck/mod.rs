//! Deck builder: catalog in, shuffled pairs out.

pub mod builder;

pub use builder::build_deck;
