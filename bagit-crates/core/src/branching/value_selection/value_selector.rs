use crate::branching::value_selection::InputOrder;
use crate::branching::value_selection::LeastConstrainingBag;
use crate::branching::SelectionContext;
use crate::model::BagId;
use crate::model::ItemId;

/// Determines the order in which the search tries the candidate bags of an item.
pub trait ValueSelector {
    /// Returns the bags of the current domain of `item` in the order they should be tried. The
    /// returned bags are exactly the domain of `item`.
    fn order_values(&mut self, context: &SelectionContext<'_, '_>, item: ItemId) -> Vec<BagId>;
}

/// The value selection strategies which can be configured on the solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ValueSelection {
    /// See [`LeastConstrainingBag`].
    #[default]
    LeastConstraining,
    /// See [`InputOrder`].
    InputOrder,
}

impl ValueSelection {
    pub fn create_selector(self) -> Box<dyn ValueSelector> {
        match self {
            ValueSelection::LeastConstraining => Box::new(LeastConstrainingBag),
            ValueSelection::InputOrder => Box::new(InputOrder),
        }
    }
}
