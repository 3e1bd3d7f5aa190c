use std::fmt::Display;

use crate::containers::HashSet;
use crate::containers::StorageKey;

/// The handle of an item; items are numbered in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId {
    pub id: u32,
}

impl ItemId {
    pub fn new(id: u32) -> Self {
        ItemId { id }
    }
}

impl StorageKey for ItemId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        ItemId { id: index as u32 }
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "i{}", self.id)
    }
}

/// The handle of a bag; bags are numbered in creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BagId {
    pub id: u32,
}

impl BagId {
    pub fn new(id: u32) -> Self {
        BagId { id }
    }
}

impl StorageKey for BagId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        BagId { id: index as u32 }
    }
}

impl Display for BagId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "bag{}", self.id)
    }
}

/// A named, sized unit which has to be placed in exactly one bag.
#[derive(Debug, Clone)]
pub struct Item {
    pub(crate) name: String,
    pub(crate) size: u32,
    /// The items this item may never share a bag with; symmetric over the whole model.
    pub(crate) conflicts: HashSet<ItemId>,
    /// If present, the closed list of items this item may share a bag with.
    pub(crate) allow_list: Option<HashSet<ItemId>>,
}

impl Item {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn conflicts_with(&self, other: ItemId) -> bool {
        self.conflicts.contains(&other)
    }

    /// Returns whether the allow-list of this item (if any) admits `other`.
    pub fn allows(&self, other: ItemId) -> bool {
        self.allow_list
            .as_ref()
            .map_or(true, |allowed| allowed.contains(&other))
    }

    pub fn has_allow_list(&self) -> bool {
        self.allow_list.is_some()
    }

    pub fn num_conflicts(&self) -> usize {
        self.conflicts.len()
    }

    pub fn num_allowed(&self) -> usize {
        self.allow_list.as_ref().map_or(0, |allowed| allowed.len())
    }
}

/// A fixed-capacity container.
///
/// Only the capacity is static; what is currently packed in the bag is tracked by the
/// [`PackingState`](crate::engine::PackingState).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bag {
    pub(crate) capacity: u32,
}

impl Bag {
    pub fn capacity(&self) -> u32 {
        self.capacity
    }
}
