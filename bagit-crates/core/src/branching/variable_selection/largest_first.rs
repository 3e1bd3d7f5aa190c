use crate::branching::tie_breaking::Direction;
use crate::branching::tie_breaking::InOrderTieBreaker;
use crate::branching::tie_breaking::TieBreaker;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::SelectionContext;
use crate::model::ItemId;

/// A [`VariableSelector`] which places the largest remaining item first, ignoring domains and
/// constraints; ties are broken by declaration order.
#[derive(Debug)]
pub struct LargestFirst {
    tie_breaker: InOrderTieBreaker<ItemId, u32>,
}

impl LargestFirst {
    pub fn new() -> Self {
        LargestFirst {
            tie_breaker: InOrderTieBreaker::new(Direction::Maximum),
        }
    }
}

impl Default for LargestFirst {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableSelector for LargestFirst {
    fn select_variable(
        &mut self,
        context: &SelectionContext<'_, '_>,
        unassigned: &[ItemId],
    ) -> Option<ItemId> {
        for &item in unassigned {
            self.tie_breaker
                .consider(item, context.model().item(item).size());
        }

        self.tie_breaker.select()
    }
}
