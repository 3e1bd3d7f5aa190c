//! # BagIt
//! A constraint-satisfaction solver which packs named, sized items into bags of fixed capacity.
//! Besides the capacities, items may carry pairwise constraints: a conflict list (the named items
//! may never share a bag with it) and a closed allow-list (it may only share a bag with the named
//! items).
//!
//! Solving happens in two phases. First the candidate bags of every item are filtered
//! ([`options::ConsistencyLevel`]), which may already show that no packing exists. Then a
//! backtracking search places one item at a time, guided by a
//! [`branching::VariableSelector`] and a [`branching::ValueSelector`].
//!
//! # Example
//! ```rust
//! # use bagit_core::model::ItemDeclaration;
//! # use bagit_core::model::Model;
//! # use bagit_core::options::SolverOptions;
//! # use bagit_core::results::InfeasibilityReason;
//! # use bagit_core::results::SatisfactionResult;
//! # use bagit_core::termination::Indefinite;
//! # use bagit_core::Solver;
//! let mut builder = Model::builder();
//! let _ = builder.add_bag(10);
//! let _ = builder.add_item(ItemDeclaration::new("a", 4).conflicting_with(["b"])).unwrap();
//! let _ = builder.add_item(ItemDeclaration::new("b", 4)).unwrap();
//!
//! let mut solver = Solver::new(builder.build(), SolverOptions::default());
//!
//! // Both items fit, but they may not share the only bag
//! assert_eq!(
//!     solver.satisfy(&mut Indefinite),
//!     SatisfactionResult::Unsatisfiable(InfeasibilityReason::SearchExhausted)
//! );
//! ```
#[doc(hidden)]
pub mod bagit_asserts;
pub mod branching;
pub mod containers;
pub mod engine;
pub mod model;
pub mod statistics;

pub use convert_case;

// We declare a private module with public use, so that all exports from API are exports directly
// from the crate.
mod api;

pub use api::*;

pub use crate::api::solver::Solver;
