//! The decision making of the search: which item to place next ([`VariableSelector`]) and in
//! which order to try its candidate bags ([`ValueSelector`]).
//!
//! Both are deterministic: among equally ranked items the first one in declaration order is
//! selected, and among equally ranked bags the first one in creation order is tried first.

mod selection_context;
pub mod tie_breaking;
pub mod value_selection;
pub mod variable_selection;

pub use selection_context::SelectionContext;
pub use tie_breaking::*;
pub use value_selection::*;
pub use variable_selection::*;
