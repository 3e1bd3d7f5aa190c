//! Strategies for ordering the candidate bags of the selected item.
mod input_order;
mod least_constraining;
mod value_selector;

pub use input_order::InputOrder;
pub use least_constraining::LeastConstrainingBag;
pub use value_selector::ValueSelection;
pub use value_selector::ValueSelector;
