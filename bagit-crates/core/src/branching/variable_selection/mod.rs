//! Strategies for selecting the next item to place.
mod largest_first;
mod most_constrained;
mod variable_selector;

pub use largest_first::LargestFirst;
pub use most_constrained::MostConstrained;
pub use variable_selector::VariableSelection;
pub use variable_selector::VariableSelector;
