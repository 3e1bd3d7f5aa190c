use crate::containers::KeyedVec;
use crate::engine::InfeasibilityReason;
use crate::engine::PackingState;
use crate::model::BagId;
use crate::model::ItemId;
use crate::model::Model;
#[cfg(doc)]
use crate::termination::TerminationCondition;
#[cfg(doc)]
use crate::Solver;

/// The result of a call to [`Solver::satisfy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatisfactionResult {
    /// Every item has been placed; the [`Packing`] respects all capacities and constraints.
    Satisfiable(Packing),
    /// There is no packing, for the given reason.
    Unsatisfiable(InfeasibilityReason),
    /// It is not known whether a packing exists. This is the result when the
    /// [`TerminationCondition`] triggered during search.
    Unknown,
}

/// A complete assignment of items to bags.
///
/// Bags are listed in creation order and the items in a bag in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packing {
    contents: KeyedVec<BagId, Vec<ItemId>>,
}

impl Packing {
    pub(crate) fn from_state(state: &PackingState<'_>) -> Self {
        let contents = state
            .model()
            .bag_ids()
            .map(|bag| {
                let mut items = state.packed_items(bag).to_vec();
                items.sort();
                items
            })
            .collect();

        Packing { contents }
    }

    pub fn num_bags(&self) -> usize {
        self.contents.len()
    }

    /// The items packed in `bag`.
    pub fn items_in(&self, bag: BagId) -> &[ItemId] {
        &self.contents[bag]
    }

    /// The bag which holds `item`, if the item is part of the packing.
    pub fn bag_of(&self, item: ItemId) -> Option<BagId> {
        self.contents
            .iter_with_keys()
            .find(|(_, items)| items.contains(&item))
            .map(|(bag, _)| bag)
    }

    /// All bags which hold at least one item, together with their items.
    pub fn non_empty_bags(&self) -> impl Iterator<Item = (BagId, &[ItemId])> + '_ {
        self.contents
            .iter_with_keys()
            .filter(|(_, items)| !items.is_empty())
            .map(|(bag, items)| (bag, items.as_slice()))
    }

    /// The names of the items packed in `bag`, looked up in `model`.
    pub fn item_names<'a>(&'a self, model: &'a Model, bag: BagId) -> impl Iterator<Item = &'a str> + 'a {
        self.contents[bag].iter().map(|&item| model.item(item).name())
    }
}
