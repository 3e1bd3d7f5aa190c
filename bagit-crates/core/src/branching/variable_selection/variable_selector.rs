use crate::branching::SelectionContext;
use crate::branching::variable_selection::LargestFirst;
use crate::branching::variable_selection::MostConstrained;
use crate::model::ItemId;

/// Selects which of the unplaced items the search places next.
pub trait VariableSelector {
    /// Returns one of `unassigned`, or `None` if it is empty.
    ///
    /// `unassigned` is given in declaration order.
    fn select_variable(
        &mut self,
        context: &SelectionContext<'_, '_>,
        unassigned: &[ItemId],
    ) -> Option<ItemId>;
}

/// The variable selection strategies which can be configured on the solver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum VariableSelection {
    /// See [`MostConstrained`].
    #[default]
    MostConstrained,
    /// See [`LargestFirst`].
    LargestFirst,
}

impl VariableSelection {
    pub fn create_selector(self) -> Box<dyn VariableSelector> {
        match self {
            VariableSelection::MostConstrained => Box::new(MostConstrained::new()),
            VariableSelection::LargestFirst => Box::new(LargestFirst::new()),
        }
    }
}
