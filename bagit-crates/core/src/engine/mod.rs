//! The constraint-satisfaction engine: the mutable [`PackingState`], the candidate bags per item
//! in the [`DomainStore`], the filtering done by the [`ConsistencyEngine`], and the
//! [`BacktrackingSearch`] which turns all of it into a packing.
mod consistency_engine;
mod domain_store;
mod infeasibility;
mod packing_state;
mod search;
pub(crate) mod termination;

pub use consistency_engine::ConsistencyEngine;
pub use consistency_engine::ConsistencyLevel;
pub use consistency_engine::ConsistencyStatistics;
pub use domain_store::DomainStore;
pub use infeasibility::ConsistencyStatus;
pub use infeasibility::InfeasibilityReason;
pub use packing_state::PackingState;
pub use search::BacktrackingSearch;
pub use search::SearchOutcome;
pub use search::SearchStatistics;
