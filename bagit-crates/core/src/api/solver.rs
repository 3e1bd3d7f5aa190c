use std::time::Instant;

use log::info;

use crate::api::outputs::Packing;
use crate::api::outputs::SatisfactionResult;
use crate::branching::ValueSelection;
use crate::branching::VariableSelection;
use crate::create_statistics_struct;
use crate::engine::termination::TerminationCondition;
use crate::engine::BacktrackingSearch;
use crate::engine::ConsistencyEngine;
use crate::engine::ConsistencyLevel;
use crate::engine::ConsistencyStatistics;
use crate::engine::DomainStore;
use crate::engine::InfeasibilityReason;
use crate::engine::PackingState;
use crate::engine::SearchOutcome;
use crate::engine::SearchStatistics;
use crate::model::Model;
use crate::statistics::log_statistic_postfix;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// Options which determine how the [`Solver`] goes about finding a packing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverOptions {
    /// How much filtering is done before the search starts.
    pub consistency_level: ConsistencyLevel,
    /// Which item is placed next.
    pub variable_selection: VariableSelection,
    /// In which order the candidate bags of an item are tried.
    pub value_selection: ValueSelection,
}

create_statistics_struct!(
    /// Statistics of the last call to [`Solver::satisfy`].
    SolverStatistics {
        consistency: ConsistencyStatistics,
        search: SearchStatistics,
        /// The wall-clock time of the last call, in milliseconds
        time_spent_in_solver: u64,
});

/// The entry point for solving a bagging problem.
///
/// # Example
/// ```rust
/// # use bagit_core::model::ItemDeclaration;
/// # use bagit_core::model::Model;
/// # use bagit_core::options::SolverOptions;
/// # use bagit_core::results::SatisfactionResult;
/// # use bagit_core::termination::Indefinite;
/// # use bagit_core::Solver;
/// let mut builder = Model::builder();
/// builder.add_bags(2, 10);
/// for name in ["a", "b", "c"] {
///     let _ = builder.add_item(ItemDeclaration::new(name, 5)).unwrap();
/// }
///
/// let mut solver = Solver::new(builder.build(), SolverOptions::default());
///
/// let SatisfactionResult::Satisfiable(packing) = solver.satisfy(&mut Indefinite) else {
///     panic!("three items of size 5 fit in two bags of capacity 10");
/// };
/// assert_eq!(packing.non_empty_bags().count(), 2);
/// ```
#[derive(Debug)]
pub struct Solver {
    model: Model,
    options: SolverOptions,
    statistics: SolverStatistics,
}

impl Solver {
    pub fn new(model: Model, options: SolverOptions) -> Self {
        Solver {
            model,
            options,
            statistics: SolverStatistics::default(),
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn options(&self) -> SolverOptions {
        self.options
    }

    pub fn statistics(&self) -> SolverStatistics {
        self.statistics
    }

    /// Filters the candidate bags of every item and then searches for a packing, until one is
    /// found, the search proves there is none, or `termination` triggers.
    ///
    /// Every call starts from empty bags.
    pub fn satisfy<T: TerminationCondition>(&mut self, termination: &mut T) -> SatisfactionResult {
        let start = Instant::now();
        self.statistics = SolverStatistics::default();

        let mut state = PackingState::new(&self.model);
        let mut domains = DomainStore::new(&self.model);

        let mut consistency_engine = ConsistencyEngine::default();
        let filter_status =
            consistency_engine.filter(self.options.consistency_level, &state, &mut domains);
        self.statistics.consistency = consistency_engine.statistics();

        let result = match filter_status {
            Err(reason) => SatisfactionResult::Unsatisfiable(reason),
            Ok(()) => {
                let mut search = BacktrackingSearch::new(
                    self.options.variable_selection.create_selector(),
                    self.options.value_selection.create_selector(),
                );
                let outcome = search.solve(&mut state, &domains, termination);
                self.statistics.search = search.statistics();

                match outcome {
                    SearchOutcome::Solved => {
                        SatisfactionResult::Satisfiable(Packing::from_state(&state))
                    }
                    SearchOutcome::Exhausted => {
                        SatisfactionResult::Unsatisfiable(InfeasibilityReason::SearchExhausted)
                    }
                    SearchOutcome::Terminated => SatisfactionResult::Unknown,
                }
            }
        };

        self.statistics.time_spent_in_solver = start.elapsed().as_millis() as u64;

        match &result {
            SatisfactionResult::Satisfiable(_) => info!("Found a packing"),
            SatisfactionResult::Unsatisfiable(reason) => info!("No packing exists: {reason}"),
            SatisfactionResult::Unknown => info!("Stopped before reaching a conclusion"),
        }

        result
    }

    /// Logs the statistics of the last call to [`Solver::satisfy`].
    pub fn log_statistics(&self) {
        self.statistics.log(StatisticLogger::default());
        log_statistic_postfix();
    }
}
