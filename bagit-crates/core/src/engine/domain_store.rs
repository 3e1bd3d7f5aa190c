use crate::containers::KeyedVec;
use crate::model::BagId;
use crate::model::ItemId;
use crate::model::Model;

/// The candidate bags ("domain") of every item.
///
/// Domains start out as all bags in creation order and can only shrink. They are advisory: a bag
/// being in the domain of an item does not mean the item can be packed there right now, the
/// [`PackingState`](super::PackingState) remains the authority on that.
#[derive(Debug, Clone)]
pub struct DomainStore {
    domains: KeyedVec<ItemId, Vec<BagId>>,
}

impl DomainStore {
    /// Gives every item of the model every bag as a candidate.
    pub fn new(model: &Model) -> Self {
        let all_bags = model.bag_ids().collect::<Vec<_>>();

        DomainStore {
            domains: KeyedVec::with_len(model.num_items(), all_bags),
        }
    }

    pub fn domain(&self, item: ItemId) -> &[BagId] {
        &self.domains[item]
    }

    pub fn size(&self, item: ItemId) -> usize {
        self.domains[item].len()
    }

    pub fn contains(&self, item: ItemId, bag: BagId) -> bool {
        self.domains[item].contains(&bag)
    }

    pub fn is_empty(&self, item: ItemId) -> bool {
        self.domains[item].is_empty()
    }

    /// Returns the first item (in declaration order) which has no candidates left.
    pub fn first_empty(&self) -> Option<ItemId> {
        self.domains
            .iter_with_keys()
            .find_map(|(item, domain)| domain.is_empty().then_some(item))
    }

    /// Removes every candidate of `item` for which `should_remove` holds, keeping the order of the
    /// remaining candidates.
    ///
    /// Returns the number of removed candidates.
    pub fn remove_if(&mut self, item: ItemId, mut should_remove: impl FnMut(BagId) -> bool) -> usize {
        let domain = &mut self.domains[item];
        let size_before = domain.len();
        domain.retain(|&bag| !should_remove(bag));

        size_before - domain.len()
    }

    /// Removes `bag` from the domain of `item`; returns whether it was a candidate.
    pub fn remove(&mut self, item: ItemId, bag: BagId) -> bool {
        self.remove_if(item, |candidate| candidate == bag) > 0
    }
}
