use std::cmp::Reverse;

use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::model::ItemId;

/// A [`VariableSelector`] which selects the item with the fewest candidate bags left (minimum
/// remaining values).
///
/// Ties are broken by the number of conflicts (more first), then by the number of items on the
/// allow-list (more first), then by the size (larger first), and finally by declaration order.
#[derive(Debug)]
pub struct MostConstrained {
    tie_breaker: InOrderTieBreaker<ItemId, MostConstrainedValue>,
}

/// Compared field by field; the [`Reverse`]d fields make "more" rank lower, so a single
/// minimising tie-breaker handles all keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct MostConstrainedValue {
    domain_size: usize,
    num_conflicts: Reverse<usize>,
    num_allowed: Reverse<usize>,
    size: Reverse<u32>,
}

impl MostConstrained {
    pub fn new() -> Self {
        MostConstrained {
            tie_breaker: InOrderTieBreaker::new(Direction::Minimum),
        }
    }
}

impl Default for MostConstrained {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableSelector for MostConstrained {
    fn select_variable(
        &mut self,
        context: &SelectionContext<'_, '_>,
        unassigned: &[ItemId],
    ) -> Option<ItemId> {
        for &item in unassigned {
            let data = context.model().item(item);
            self.tie_breaker.consider(
                item,
                MostConstrainedValue {
                    domain_size: context.domain_size(item),
                    num_conflicts: Reverse(data.num_conflicts()),
                    num_allowed: Reverse(data.num_allowed()),
                    size: Reverse(data.size()),
                },
            );
        }

        self.tie_breaker.select()
    }
}
