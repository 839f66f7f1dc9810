//! Catalog items - the static data behind every pair of tiles.
//!
//! An `Item` is defined by the catalog and never owned or mutated by the
//! game state. Two tiles in a deck refer to the same `ItemId`; that shared
//! id is the pairing relation.

use serde::{Deserialize, Serialize};

/// Unique identifier for a catalog item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl ItemId {
    /// Create a new item ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item({})", self.0)
    }
}

/// A pairable catalog entry.
///
/// `name` and `image` are display payload only; the engine compares items
/// by `id` alone.
///
/// ## Example
///
/// ```
/// use memory_match::core::{Item, ItemId};
///
/// let coconut = Item::new(ItemId::new(1), "Coconut", "/images/coco.png");
/// assert_eq!(coconut.id, ItemId::new(1));
/// assert_eq!(coconut.name, "Coconut");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier within a catalog.
    pub id: ItemId,

    /// Human-readable name.
    pub name: String,

    /// Resource reference for the face image.
    pub image: String,
}

impl Item {
    /// Create a new item.
    pub fn new(id: ItemId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
        }
    }
}
