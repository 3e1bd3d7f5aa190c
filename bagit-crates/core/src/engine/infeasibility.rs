use std::fmt::Display;

use crate::model::ItemId;

/// Why a problem was concluded to have no packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfeasibilityReason {
    /// The items together are larger than all bags together.
    InsufficientCapacity {
        total_size: u64,
        total_capacity: u64,
    },
    /// Filtering removed every candidate bag of `item`.
    EmptyDomain { item: ItemId },
    /// The search tried every candidate bag for every item without finding a packing.
    SearchExhausted,
}

impl Display for InfeasibilityReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InfeasibilityReason::InsufficientCapacity {
                total_size,
                total_capacity,
            } => write!(
                f,
                "the total item size {total_size} exceeds the total capacity {total_capacity}"
            ),
            InfeasibilityReason::EmptyDomain { item } => {
                write!(f, "no bag can hold item {item}")
            }
            InfeasibilityReason::SearchExhausted => write!(f, "the search space was exhausted"),
        }
    }
}

/// The outcome of a filtering step: either the problem may still be feasible, or it provably is
/// not.
pub type ConsistencyStatus = Result<(), InfeasibilityReason>;
