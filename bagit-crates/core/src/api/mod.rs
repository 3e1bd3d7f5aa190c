mod outputs;
pub(crate) mod solver;

pub mod results {
    pub use crate::api::outputs::Packing;
    pub use crate::api::outputs::SatisfactionResult;
    pub use crate::engine::InfeasibilityReason;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod options {
    pub use crate::api::solver::SolverOptions;
    pub use crate::branching::ValueSelection;
    pub use crate::branching::VariableSelection;
    pub use crate::engine::ConsistencyLevel;
    #[cfg(doc)]
    use crate::Solver;
}

pub mod termination {
    pub use crate::engine::termination::combinator::*;
    pub use crate::engine::termination::decision_budget::*;
    pub use crate::engine::termination::indefinite::*;
    pub use crate::engine::termination::time_budget::*;
    pub use crate::engine::termination::TerminationCondition;
    #[cfg(doc)]
    use crate::Solver;
}

#[doc(hidden)]
pub mod asserts {
    pub use crate::bagit_assert_advanced;
    pub use crate::bagit_assert_eq_simple;
    pub use crate::bagit_assert_moderate;
    pub use crate::bagit_assert_simple;
    pub use crate::bagit_asserts::BAGIT_ASSERT_ADVANCED;
    pub use crate::bagit_asserts::BAGIT_ASSERT_LEVEL_DEFINITION;
    pub use crate::bagit_asserts::BAGIT_ASSERT_MODERATE;
    pub use crate::bagit_asserts::BAGIT_ASSERT_SIMPLE;
}
