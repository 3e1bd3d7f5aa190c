//! The static description of a bagging problem: the items, the bags and the pairwise
//! compatibility constraints between items.
//!
//! A [`Model`] is created once through a [`ModelBuilder`] and never changes afterwards; all of the
//! mutable state of the solving process lives in the [`PackingState`] and the [`DomainStore`].
//! Items and bags are referred to by the handles [`ItemId`] and [`BagId`], which are handed out in
//! declaration order. Names are only used when building the model and when reporting a packing.
//!
//! ```rust
//! # use bagit_core::model::ItemDeclaration;
//! # use bagit_core::model::Model;
//! let mut builder = Model::builder();
//! builder.add_bags(2, 10);
//! let a = builder.add_item(ItemDeclaration::new("a", 5).conflicting_with(["b"])).unwrap();
//! let b = builder.add_item(ItemDeclaration::new("b", 5)).unwrap();
//! let model = builder.build();
//!
//! // Conflicts are made symmetric when the model is built
//! assert!(model.item(b).conflicts_with(a));
//! assert!(!model.are_compatible(a, b));
//! ```
#[cfg(doc)]
use crate::engine::DomainStore;
#[cfg(doc)]
use crate::engine::PackingState;

mod item;
mod model_builder;
mod model_error;

pub use item::Bag;
pub use item::BagId;
pub use item::Item;
pub use item::ItemId;
pub use model_builder::ItemDeclaration;
pub use model_builder::ModelBuilder;
pub use model_error::ModelError;

use crate::bagit_assert_moderate;
use crate::containers::HashMap;
use crate::containers::KeyedVec;

/// The immutable problem instance.
#[derive(Debug, Clone)]
pub struct Model {
    items: KeyedVec<ItemId, Item>,
    bags: KeyedVec<BagId, Bag>,
    item_ids: HashMap<String, ItemId>,
}

impl Model {
    pub fn builder() -> ModelBuilder {
        ModelBuilder::default()
    }

    pub fn num_items(&self) -> usize {
        self.items.len()
    }

    pub fn num_bags(&self) -> usize {
        self.bags.len()
    }

    pub fn item(&self, item: ItemId) -> &Item {
        &self.items[item]
    }

    pub fn bag(&self, bag: BagId) -> &Bag {
        &self.bags[bag]
    }

    /// Returns the handle of the item with the provided name, if it was declared.
    pub fn find_item(&self, name: &str) -> Option<ItemId> {
        self.item_ids.get(name).copied()
    }

    /// All item handles in declaration order.
    pub fn item_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.keys()
    }

    /// All bag handles in creation order.
    pub fn bag_ids(&self) -> impl Iterator<Item = BagId> + '_ {
        self.bags.keys()
    }

    pub fn items(&self) -> impl Iterator<Item = (ItemId, &Item)> + '_ {
        self.items.iter_with_keys()
    }

    pub fn total_item_size(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.size())).sum()
    }

    pub fn total_capacity(&self) -> u64 {
        self.bags.iter().map(|bag| u64::from(bag.capacity())).sum()
    }

    /// Returns whether the two items may share a bag: neither conflicts with the other, and each
    /// one is on the allow-list of the other (if that other item has one).
    ///
    /// Conflicts are symmetric after [`ModelBuilder::build`], so only one direction is looked up.
    pub fn are_compatible(&self, first: ItemId, second: ItemId) -> bool {
        let first_item = &self.items[first];
        let second_item = &self.items[second];
        bagit_assert_moderate!(
            first_item.conflicts_with(second) == second_item.conflicts_with(first),
            "conflicts between {} and {} are not symmetric",
            first_item.name(),
            second_item.name()
        );

        !first_item.conflicts_with(second)
            && first_item.allows(second)
            && second_item.allows(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(declarations: Vec<ItemDeclaration>) -> Model {
        let mut builder = Model::builder();
        builder.add_bags(2, 10);
        for declaration in declarations {
            let _ = builder.add_item(declaration).unwrap();
        }
        builder.build()
    }

    #[test]
    fn totals_are_summed_over_items_and_bags() {
        let model = model(vec![
            ItemDeclaration::new("a", 5),
            ItemDeclaration::new("b", 6),
        ]);

        assert_eq!(model.total_item_size(), 11);
        assert_eq!(model.total_capacity(), 20);
        assert_eq!(model.num_items(), 2);
        assert_eq!(model.num_bags(), 2);
    }

    #[test]
    fn allow_list_is_one_sided_but_checked_both_ways() {
        let model = model(vec![
            ItemDeclaration::new("a", 3).allowed_with(["b"]),
            ItemDeclaration::new("b", 3),
            ItemDeclaration::new("c", 3),
        ]);
        let a = model.find_item("a").unwrap();
        let b = model.find_item("b").unwrap();
        let c = model.find_item("c").unwrap();

        assert!(model.are_compatible(a, b));
        assert!(model.are_compatible(b, a));
        assert!(!model.are_compatible(a, c));
        assert!(!model.are_compatible(c, a));
        assert!(model.are_compatible(b, c));
    }

    #[test]
    fn unknown_names_are_not_found() {
        let model = model(vec![ItemDeclaration::new("a", 3)]);

        assert_eq!(model.find_item("a"), Some(ItemId::new(0)));
        assert_eq!(model.find_item("z"), None);
    }
}
