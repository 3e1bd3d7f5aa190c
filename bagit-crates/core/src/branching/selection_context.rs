use crate::engine::DomainStore;
use crate::engine::PackingState;
use crate::model::BagId;
use crate::model::ItemId;
use crate::model::Model;

/// A read-only view of the solver state which selectors base their decisions on.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a, 'model> {
    state: &'a PackingState<'model>,
    domains: &'a DomainStore,
}

impl<'a, 'model> SelectionContext<'a, 'model> {
    pub fn new(state: &'a PackingState<'model>, domains: &'a DomainStore) -> Self {
        SelectionContext { state, domains }
    }

    pub fn model(&self) -> &'model Model {
        self.state.model()
    }

    pub fn domain(&self, item: ItemId) -> &'a [BagId] {
        self.domains.domain(item)
    }

    pub fn domain_size(&self, item: ItemId) -> usize {
        self.domains.size(item)
    }

    pub fn num_packed(&self, bag: BagId) -> usize {
        self.state.num_packed(bag)
    }

    pub fn free_capacity(&self, bag: BagId) -> u32 {
        self.state.free_capacity(bag)
    }
}
