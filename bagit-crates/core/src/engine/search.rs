use log::debug;
use log::trace;

use super::termination::TerminationCondition;
use super::DomainStore;
use super::PackingState;
use crate::bagit_assert_moderate;
use crate::bagit_assert_simple;
use crate::branching::SelectionContext;
use crate::branching::ValueSelector;
use crate::branching::VariableSelector;
use crate::create_statistics_struct;
use crate::model::ItemId;

create_statistics_struct!(
    /// Statistics of the backtracking search.
    SearchStatistics {
        /// The number of times an item was tentatively placed in a bag
        num_decisions: u64,
        /// The number of placements which were undone because the remaining items could not be
        /// placed
        num_backtracks: u64,
        /// The number of candidate bags which were refused by the packing state at the time they
        /// were tried
        num_rejected_packs: u64,
});

/// How a call to [`BacktrackingSearch::solve`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Every item is placed; the packing state holds the packing.
    Solved,
    /// Every candidate bag of every item has been tried; there is no packing.
    Exhausted,
    /// The termination condition triggered before a conclusion was reached.
    Terminated,
}

/// Chronological backtracking over the unplaced items.
///
/// The search places one item at a time: the [`VariableSelector`] picks the item, the
/// [`ValueSelector`] orders its candidate bags, and each bag is tried with
/// [`PackingState::pack`]. When the remaining items cannot be placed the placement is undone with
/// [`PackingState::unpack`] and the next bag is tried. The domains are not filtered any further
/// during search; `pack` is the authority on whether a placement is allowed.
///
/// Unless the search is [`SearchOutcome::Solved`], the packing state is handed back exactly as it
/// was received.
pub struct BacktrackingSearch {
    variable_selector: Box<dyn VariableSelector>,
    value_selector: Box<dyn ValueSelector>,
    statistics: SearchStatistics,
}

impl std::fmt::Debug for BacktrackingSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BacktrackingSearch")
            .field("statistics", &self.statistics)
            .finish_non_exhaustive()
    }
}

impl BacktrackingSearch {
    pub fn new(
        variable_selector: Box<dyn VariableSelector>,
        value_selector: Box<dyn ValueSelector>,
    ) -> Self {
        BacktrackingSearch {
            variable_selector,
            value_selector,
            statistics: SearchStatistics::default(),
        }
    }

    pub fn statistics(&self) -> SearchStatistics {
        self.statistics
    }

    /// Tries to place every item which is not yet placed in `state`, choosing only among the bags
    /// in `domains`.
    pub fn solve<T: TerminationCondition>(
        &mut self,
        state: &mut PackingState<'_>,
        domains: &DomainStore,
        termination: &mut T,
    ) -> SearchOutcome {
        let mut unassigned: Vec<ItemId> = state
            .model()
            .item_ids()
            .filter(|&item| state.assigned_bag(item).is_none())
            .collect();

        debug!("Starting search over {} unplaced item(s)", unassigned.len());
        let outcome = self.place_remaining(state, domains, &mut unassigned, termination);
        debug!("Search finished: {outcome:?}");

        bagit_assert_simple!(outcome != SearchOutcome::Solved || state.is_complete());
        bagit_assert_moderate!(state.is_consistent());

        outcome
    }

    /// `unassigned` is kept in declaration order; an item is taken out while it is placed and put
    /// back at the same position when it is unpacked.
    fn place_remaining<T: TerminationCondition>(
        &mut self,
        state: &mut PackingState<'_>,
        domains: &DomainStore,
        unassigned: &mut Vec<ItemId>,
        termination: &mut T,
    ) -> SearchOutcome {
        if unassigned.is_empty() {
            return SearchOutcome::Solved;
        }

        if termination.should_stop() {
            return SearchOutcome::Terminated;
        }

        let context = SelectionContext::new(state, domains);
        let Some(item) = self.variable_selector.select_variable(&context, unassigned) else {
            return SearchOutcome::Solved;
        };
        let candidates = self.value_selector.order_values(&context, item);

        let index = unassigned
            .iter()
            .position(|&unplaced| unplaced == item)
            .expect("the variable selector returns one of the unplaced items");
        let _ = unassigned.remove(index);

        for bag in candidates {
            if !state.pack(bag, item) {
                trace!("{item} does not fit in {bag}");
                self.statistics.num_rejected_packs += 1;
                continue;
            }

            trace!("Placed {item} in {bag}");
            self.statistics.num_decisions += 1;
            termination.decision_has_been_made();

            match self.place_remaining(state, domains, unassigned, termination) {
                SearchOutcome::Solved => return SearchOutcome::Solved,
                SearchOutcome::Terminated => {
                    state.unpack(bag, item);
                    unassigned.insert(index, item);
                    return SearchOutcome::Terminated;
                }
                SearchOutcome::Exhausted => {
                    trace!("Backtracking on {item} in {bag}");
                    state.unpack(bag, item);
                    self.statistics.num_backtracks += 1;
                }
            }
        }

        unassigned.insert(index, item);
        SearchOutcome::Exhausted
    }
}
