use std::collections::VecDeque;

use log::debug;

use super::ConsistencyStatus;
use super::DomainStore;
use super::InfeasibilityReason;
use super::PackingState;
use crate::containers::StorageKey;
use crate::create_statistics_struct;
use crate::model::BagId;
use crate::model::ItemId;
use crate::model::Model;

/// How much filtering is done before the search starts.
///
/// Every level includes the levels before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ConsistencyLevel {
    /// Only compare the total item size with the total capacity.
    CapacityOnly,
    /// Also remove bags which cannot hold an item on its own.
    Node,
    /// Also propagate pairwise support between all items.
    #[default]
    Arc,
}

create_statistics_struct!(
    /// Statistics of the filtering done before the search.
    ConsistencyStatistics {
        /// The number of candidate bags removed by node consistency
        num_node_prunings: u64,
        /// The number of arcs which were revised
        num_arc_revisions: u64,
        /// The number of candidate bags removed by arc consistency
        num_arc_prunings: u64,
});

/// An ordered pair of distinct items; revising it prunes candidates of `from` which lack a
/// supporting candidate of `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Arc {
    from: ItemId,
    to: ItemId,
}

/// Prunes candidate bags from the [`DomainStore`] based on the current [`PackingState`].
///
/// All checks are made against the state of the bags at the time of filtering (normally: all bags
/// empty). Whether a bag "supports" a pair of items is decided by asking the packing state whether
/// each item could be packed in it individually, not by reasoning about a hypothetical joint
/// assignment; the search re-checks every placement against the live state anyway.
#[derive(Debug, Default)]
pub struct ConsistencyEngine {
    statistics: ConsistencyStatistics,
}

impl ConsistencyEngine {
    pub fn statistics(&self) -> ConsistencyStatistics {
        self.statistics
    }

    /// Runs every filtering step enabled by `level`, stopping at the first one which proves
    /// infeasibility.
    pub fn filter(
        &mut self,
        level: ConsistencyLevel,
        state: &PackingState<'_>,
        domains: &mut DomainStore,
    ) -> ConsistencyStatus {
        self.check_total_capacity(state.model())?;

        if level == ConsistencyLevel::CapacityOnly {
            return Ok(());
        }
        self.enforce_node_consistency(state, domains)?;

        if level == ConsistencyLevel::Node {
            return Ok(());
        }
        self.enforce_arc_consistency(state, domains)
    }

    /// A necessary condition: the items together must fit in the bags together.
    pub fn check_total_capacity(&self, model: &Model) -> ConsistencyStatus {
        let total_size = model.total_item_size();
        let total_capacity = model.total_capacity();

        if total_size > total_capacity {
            debug!("Total item size {total_size} exceeds the total capacity {total_capacity}");
            return Err(InfeasibilityReason::InsufficientCapacity {
                total_size,
                total_capacity,
            });
        }

        Ok(())
    }

    /// Removes every candidate bag which cannot currently hold the item on its own.
    ///
    /// Items which are already packed are left alone.
    pub fn enforce_node_consistency(
        &mut self,
        state: &PackingState<'_>,
        domains: &mut DomainStore,
    ) -> ConsistencyStatus {
        for item in unassigned_items(state) {
            let num_removed = domains.remove_if(item, |bag| !state.can_pack(bag, item));
            self.statistics.num_node_prunings += num_removed as u64;

            if domains.is_empty(item) {
                debug!("Node consistency emptied the domain of {item}");
                return Err(InfeasibilityReason::EmptyDomain { item });
            }
        }

        debug!(
            "Node consistency removed {} candidate(s)",
            self.statistics.num_node_prunings
        );
        Ok(())
    }

    /// AC-3 style propagation over all ordered pairs of distinct items.
    ///
    /// Whenever the domain of an item shrinks, the arcs pointing at it from all other items are
    /// revisited. Terminates at the fixpoint or as soon as a domain becomes empty.
    pub fn enforce_arc_consistency(
        &mut self,
        state: &PackingState<'_>,
        domains: &mut DomainStore,
    ) -> ConsistencyStatus {
        let num_items = state.model().num_items();
        let items = unassigned_items(state);

        let mut queue = VecDeque::with_capacity(num_items * num_items.saturating_sub(1));
        let mut is_queued = vec![false; num_items * num_items];

        for &from in &items {
            for &to in &items {
                if from != to {
                    enqueue(&mut queue, &mut is_queued, num_items, Arc { from, to });
                }
            }
        }

        while let Some(arc) = queue.pop_front() {
            is_queued[arc.from.index() * num_items + arc.to.index()] = false;

            if !self.revise(arc, state, domains) {
                continue;
            }

            if domains.is_empty(arc.from) {
                debug!("Arc consistency emptied the domain of {}", arc.from);
                return Err(InfeasibilityReason::EmptyDomain { item: arc.from });
            }

            for &neighbour in &items {
                if neighbour != arc.from && neighbour != arc.to {
                    let arc = Arc {
                        from: neighbour,
                        to: arc.from,
                    };
                    enqueue(&mut queue, &mut is_queued, num_items, arc);
                }
            }
        }

        debug!(
            "Arc consistency revised {} arc(s) and removed {} candidate(s)",
            self.statistics.num_arc_revisions, self.statistics.num_arc_prunings
        );
        Ok(())
    }

    /// Removes the candidates of `arc.from` which have no support among the candidates of
    /// `arc.to`; returns whether anything was removed.
    fn revise(&mut self, arc: Arc, state: &PackingState<'_>, domains: &mut DomainStore) -> bool {
        self.statistics.num_arc_revisions += 1;

        let supporting_bags = domains.domain(arc.to).to_vec();
        let is_supported = |bag: BagId| {
            supporting_bags.iter().any(|&other_bag| {
                other_bag != bag || (state.can_pack(bag, arc.from) && state.can_pack(bag, arc.to))
            })
        };

        let num_removed = domains.remove_if(arc.from, |bag| !is_supported(bag));
        self.statistics.num_arc_prunings += num_removed as u64;

        num_removed > 0
    }
}

fn unassigned_items(state: &PackingState<'_>) -> Vec<ItemId> {
    state
        .model()
        .item_ids()
        .filter(|&item| state.assigned_bag(item).is_none())
        .collect()
}

/// Adds `arc` to the back of the queue unless it is already waiting in it.
fn enqueue(queue: &mut VecDeque<Arc>, is_queued: &mut [bool], num_items: usize, arc: Arc) {
    let slot = arc.from.index() * num_items + arc.to.index();
    if !is_queued[slot] {
        is_queued[slot] = true;
        queue.push_back(arc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemDeclaration;

    fn model(capacities: &[u32], declarations: Vec<ItemDeclaration>) -> Model {
        let mut builder = Model::builder();
        for &capacity in capacities {
            let _ = builder.add_bag(capacity);
        }
        for declaration in declarations {
            let _ = builder.add_item(declaration).unwrap();
        }
        builder.build()
    }

    #[test]
    fn total_size_above_total_capacity_is_infeasible() {
        let model = model(
            &[10],
            vec![ItemDeclaration::new("a", 6), ItemDeclaration::new("b", 6)],
        );
        let engine = ConsistencyEngine::default();

        assert_eq!(
            engine.check_total_capacity(&model),
            Err(InfeasibilityReason::InsufficientCapacity {
                total_size: 12,
                total_capacity: 10
            })
        );
    }

    #[test]
    fn total_size_equal_to_total_capacity_passes() {
        let model = model(
            &[6, 6],
            vec![ItemDeclaration::new("a", 6), ItemDeclaration::new("b", 6)],
        );
        let engine = ConsistencyEngine::default();

        assert_eq!(engine.check_total_capacity(&model), Ok(()));
    }

    #[test]
    fn node_consistency_removes_bags_which_are_too_small() {
        let model = model(
            &[3, 10, 4],
            vec![ItemDeclaration::new("a", 4), ItemDeclaration::new("b", 2)],
        );
        let state = PackingState::new(&model);
        let mut domains = DomainStore::new(&model);
        let mut engine = ConsistencyEngine::default();

        assert_eq!(engine.enforce_node_consistency(&state, &mut domains), Ok(()));

        assert_eq!(domains.domain(ItemId::new(0)), &[BagId::new(1), BagId::new(2)]);
        assert_eq!(domains.size(ItemId::new(1)), 3);
        assert_eq!(engine.statistics().num_node_prunings, 1);
    }

    #[test]
    fn node_consistency_reports_the_item_without_candidates() {
        let model = model(
            &[3, 3, 3],
            vec![ItemDeclaration::new("a", 2), ItemDeclaration::new("b", 4)],
        );
        let state = PackingState::new(&model);
        let mut domains = DomainStore::new(&model);
        let mut engine = ConsistencyEngine::default();

        assert_eq!(
            engine.enforce_node_consistency(&state, &mut domains),
            Err(InfeasibilityReason::EmptyDomain {
                item: ItemId::new(1)
            })
        );
    }

    #[test]
    fn node_consistency_uses_the_live_bag_contents() {
        let model = model(
            &[10, 10],
            vec![
                ItemDeclaration::new("a", 4).conflicting_with(["b"]),
                ItemDeclaration::new("b", 4),
            ],
        );
        let mut state = PackingState::new(&model);
        assert!(state.pack(BagId::new(0), ItemId::new(0)));
        let mut domains = DomainStore::new(&model);
        let mut engine = ConsistencyEngine::default();

        assert_eq!(engine.enforce_node_consistency(&state, &mut domains), Ok(()));

        assert_eq!(domains.domain(ItemId::new(1)), &[BagId::new(1)]);
    }

    #[test]
    fn arc_consistency_keeps_individually_feasible_candidates() {
        let model = model(
            &[10],
            vec![
                ItemDeclaration::new("a", 4).conflicting_with(["b"]),
                ItemDeclaration::new("b", 4),
            ],
        );
        let state = PackingState::new(&model);
        let mut domains = DomainStore::new(&model);
        let mut engine = ConsistencyEngine::default();

        assert_eq!(
            engine.filter(ConsistencyLevel::Arc, &state, &mut domains),
            Ok(())
        );

        // Support is judged against the empty bag, so the conflict is left to the search
        assert_eq!(domains.size(ItemId::new(0)), 1);
        assert_eq!(domains.size(ItemId::new(1)), 1);
    }

    #[test]
    fn arc_consistency_prunes_candidate_whose_only_support_is_the_same_bag() {
        let model = model(
            &[3, 10],
            vec![ItemDeclaration::new("a", 4), ItemDeclaration::new("b", 4)],
        );
        let state = PackingState::new(&model);
        let mut domains = DomainStore::new(&model);
        assert!(domains.remove(ItemId::new(1), BagId::new(1)));
        let mut engine = ConsistencyEngine::default();

        assert_eq!(engine.enforce_arc_consistency(&state, &mut domains), Ok(()));

        // The first bag cannot hold `a`, and `b` has no other candidate to support it there
        assert_eq!(domains.domain(ItemId::new(0)), &[BagId::new(1)]);
        assert_eq!(domains.domain(ItemId::new(1)), &[BagId::new(0)]);
        assert_eq!(engine.statistics().num_arc_prunings, 1);
    }

    #[test]
    fn arc_consistency_reports_emptied_domain() {
        let model = model(
            &[3],
            vec![ItemDeclaration::new("a", 4), ItemDeclaration::new("b", 2)],
        );
        let state = PackingState::new(&model);
        let mut domains = DomainStore::new(&model);
        let mut engine = ConsistencyEngine::default();

        assert_eq!(
            engine.enforce_arc_consistency(&state, &mut domains),
            Err(InfeasibilityReason::EmptyDomain {
                item: ItemId::new(0)
            })
        );
    }

    #[test]
    fn arc_consistency_after_node_consistency_reaches_a_fixpoint_without_pruning() {
        let model = model(
            &[5, 5],
            vec![
                ItemDeclaration::new("a", 5),
                ItemDeclaration::new("b", 2).allowed_with(["c"]),
                ItemDeclaration::new("c", 2),
            ],
        );
        let state = PackingState::new(&model);
        let mut domains = DomainStore::new(&model);
        let mut engine = ConsistencyEngine::default();

        assert_eq!(
            engine.filter(ConsistencyLevel::Arc, &state, &mut domains),
            Ok(())
        );

        assert_eq!(engine.statistics().num_arc_prunings, 0);
        assert_eq!(engine.statistics().num_arc_revisions, 6);
        assert!(model.item_ids().all(|item| domains.size(item) == 2));
    }

    #[test]
    fn capacity_only_level_does_not_touch_domains() {
        let model = model(&[3, 10], vec![ItemDeclaration::new("a", 4)]);
        let state = PackingState::new(&model);
        let mut domains = DomainStore::new(&model);
        let mut engine = ConsistencyEngine::default();

        assert_eq!(
            engine.filter(ConsistencyLevel::CapacityOnly, &state, &mut domains),
            Ok(())
        );

        assert_eq!(domains.size(ItemId::new(0)), 2);
    }
}
