//! Validated item catalogs.
//!
//! A `Catalog` is the fixed list of distinct pairable items for one game.
//! Construction validates the two caller contracts the engine depends on:
//! the list is non-empty and every id is unique.

use im::{HashMap as ImHashMap, Vector};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::CatalogError;
use super::item::{Item, ItemId};

/// Ordered, validated list of items.
///
/// Backed by persistent collections so every `GameState` and snapshot can
/// hold its own copy for O(1).
///
/// ## Example
///
/// ```
/// use memory_match::core::{Catalog, CatalogError, Item, ItemId};
///
/// let catalog = Catalog::new(vec![
///     Item::new(ItemId::new(1), "Hat", "/images/chapeu.png"),
///     Item::new(ItemId::new(2), "Juice", "/images/suco.png"),
/// ])
/// .unwrap();
/// assert_eq!(catalog.len(), 2);
///
/// assert_eq!(Catalog::new(vec![]).unwrap_err(), CatalogError::Empty);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Item>", into = "Vec<Item>")]
pub struct Catalog {
    items: Vector<Item>,
    index: ImHashMap<ItemId, usize>,
}

impl Catalog {
    /// Validate and build a catalog.
    ///
    /// # Errors
    ///
    /// - `CatalogError::Empty` if `items` is empty.
    /// - `CatalogError::DuplicateId` for the first id seen twice.
    pub fn new(items: impl IntoIterator<Item = Item>) -> Result<Self, CatalogError> {
        let items: Vector<Item> = items.into_iter().collect();
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = FxHashSet::default();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId { id: item.id });
            }
        }

        let index = items
            .iter()
            .enumerate()
            .map(|(slot, item)| (item.id, slot))
            .collect();

        Ok(Self { items, index })
    }

    /// Placeholder catalog for the idle state before any game starts.
    pub(crate) fn empty() -> Self {
        Self {
            items: Vector::new(),
            index: ImHashMap::new(),
        }
    }

    /// The eight-item beach set used by demos and benchmarks.
    #[must_use]
    pub fn sample() -> Self {
        let entries = [
            (1, "Coconut", "/images/coco.png"),
            (2, "Sand", "/images/areia.png"),
            (3, "Ball", "/images/bola.png"),
            (4, "Bag", "/images/bolsa.png"),
            (5, "Hat", "/images/chapeu.png"),
            (6, "Sunglasses", "/images/oculus.png"),
            (7, "Ice cream", "/images/sorvete.png"),
            (8, "Juice", "/images/suco.png"),
        ];

        let items: Vector<Item> = entries
            .into_iter()
            .map(|(id, name, image)| Item::new(ItemId::new(id), name, image))
            .collect();
        let index = items
            .iter()
            .enumerate()
            .map(|(slot, item)| (item.id, slot))
            .collect();

        Self { items, index }
    }

    /// Number of distinct items (the number of pairs in a deck).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Only the idle placeholder is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.index.get(&id).and_then(|&slot| self.items.get(slot))
    }

    /// Check if an id belongs to this catalog.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.index.contains_key(&id)
    }

    /// Iterate over items in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}

impl TryFrom<Vec<Item>> for Catalog {
    type Error = CatalogError;

    fn try_from(items: Vec<Item>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl From<Catalog> for Vec<Item> {
    fn from(catalog: Catalog) -> Self {
        catalog.items.into_iter().collect()
    }
}
