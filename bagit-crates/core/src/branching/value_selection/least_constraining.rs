use std::cmp::Reverse;

use itertools::Itertools;
use log::warn;

use crate::branching::value_selection::ValueSelector;
use crate::branching::SelectionContext;
use crate::model::BagId;
use crate::model::ItemId;

/// A [`ValueSelector`] which tries the bags holding the fewest items first, preferring bags with
/// more free capacity among those. Remaining ties keep bag creation order.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeastConstrainingBag;

impl ValueSelector for LeastConstrainingBag {
    fn order_values(&mut self, context: &SelectionContext<'_, '_>, item: ItemId) -> Vec<BagId> {
        if context.domain_size(item) == 0 {
            warn!("The LeastConstrainingBag value selector was provided with an empty domain for {item}");
        }

        // `sorted_by_key` is stable, and domains are kept in creation order
        context
            .domain(item)
            .iter()
            .copied()
            .sorted_by_key(|&bag| (context.num_packed(bag), Reverse(context.free_capacity(bag))))
            .collect()
    }
}
