//! Deck construction.
//!
//! Every catalog item is laid down twice, the 2N entries are shuffled with
//! Fisher-Yates, and each tile takes its final offset as its position.

use im::Vector;
use tracing::trace;

use crate::core::{Catalog, GameRng, ItemId, Position, Tile};

/// Build a shuffled deck from a catalog.
///
/// ## Guarantees
///
/// - Output length is `2 * catalog.len()`
/// - Every item id appears at exactly two positions
/// - `deck[i].position == Position::new(i)`
/// - The permutation is uniform over all orderings
///
/// ## Example
///
/// ```
/// use memory_match::core::{Catalog, GameRng};
/// use memory_match::deck::build_deck;
///
/// let catalog = Catalog::sample();
/// let deck = build_deck(&catalog, &mut GameRng::new(42));
///
/// assert_eq!(deck.len(), 16);
/// for (i, tile) in deck.iter().enumerate() {
///     assert_eq!(tile.position.index(), i);
/// }
/// ```
pub fn build_deck(catalog: &Catalog, rng: &mut GameRng) -> Vector<Tile> {
    let mut ids: Vec<ItemId> = catalog
        .iter()
        .flat_map(|item| [item.id, item.id])
        .collect();

    rng.shuffle(&mut ids);
    trace!(tiles = ids.len(), "deck shuffled");

    ids.into_iter()
        .enumerate()
        .map(|(offset, item)| Tile::new(Position::new(offset as u32), item))
        .collect()
}
