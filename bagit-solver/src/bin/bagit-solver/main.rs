mod result;

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use std::time::Instant;

use bagit_solver::core::asserts::BAGIT_ASSERT_LEVEL_DEFINITION;
use bagit_solver::core::asserts::BAGIT_ASSERT_MODERATE;
use bagit_solver::core::convert_case::Case;
use bagit_solver::core::options::*;
use bagit_solver::core::statistics::configure_statistic_logging;
use bagit_solver::core::statistics::should_log_statistics;
use bagit_solver::core::termination::Combinator;
use bagit_solver::core::termination::DecisionBudget;
use bagit_solver::core::termination::TimeBudget;
use bagit_solver::core::Solver;
use bagit_solver::instance::read_instance;
use bagit_solver::output::write_result;
use clap::Parser;
use log::error;
use log::info;
use log::warn;
use log::Level;
use log::LevelFilter;
use result::BagItResult;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The instance to solve.
    ///
    /// The first line holds the number of bags, the second line the capacity of every bag, and
    /// each following line one item: '<name> <size> [<+|-> <name> ...]', where '+' introduces
    /// the items it may share a bag with and '-' the items it may not share a bag with.
    #[clap(verbatim_doc_comment)]
    instance_path: PathBuf,

    /// The time budget for the solver, given in milliseconds.
    ///
    /// When the budget runs out before a packing is found, 'failure' is reported.
    ///
    /// Possible values: u64 (Optional)
    #[arg(short = 't', long = "time-limit", verbatim_doc_comment)]
    time_limit: Option<u64>,

    /// The maximum number of times the search may tentatively place an item in a bag.
    ///
    /// Possible values: u64 (Optional)
    #[arg(long = "decision-limit", verbatim_doc_comment)]
    decision_limit: Option<u64>,

    /// How much filtering of the candidate bags is done before the search starts.
    #[arg(long = "consistency", value_enum, default_value_t)]
    consistency: ConsistencyLevel,

    /// Which item the search places next.
    #[arg(long = "variable-selection", value_enum, default_value_t)]
    variable_selection: VariableSelection,

    /// In which order the search tries the candidate bags of an item.
    #[arg(long = "value-selection", value_enum, default_value_t)]
    value_selection: ValueSelection,

    /// Enables log message output from the solver, including the time taken to solve.
    ///
    /// Log messages are written to stderr, so the result on stdout is unaffected.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,

    /// Enables logging of statistics from the solver.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,

    /// If `--verbose` is enabled then this option removes the timestamp information from the log
    /// messages.
    ///
    /// Possible values: bool
    #[arg(long = "omit-timestamp", verbatim_doc_comment)]
    omit_timestamp: bool,

    /// If `--verbose` is enabled then this option removes the call site information from the log
    /// messages.
    ///
    /// Possible values: bool
    #[arg(long = "omit-call-site", verbatim_doc_comment)]
    omit_call_site: bool,
}

fn configure_logging(
    verbose: bool,
    log_statistics: bool,
    omit_timestamp: bool,
    omit_call_site: bool,
) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging(
            "c STAT",
            None,
            Some(Case::Camel),
            Some(Box::new(std::io::stderr())),
        );
    }
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "c ")?;
            if record.level() != Level::Info && !omit_timestamp {
                write!(buf, "{} ", buf.timestamp())?;
            }
            write!(buf, "{} ", record.level())?;
            if record.level() != Level::Info && !omit_call_site {
                write!(
                    buf,
                    "[{}:{}] ",
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0)
                )?;
            }
            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> BagItResult<()> {
    let args = Args::parse();

    configure_logging(
        args.verbose,
        args.log_statistics,
        args.omit_timestamp,
        args.omit_call_site,
    )?;

    if BAGIT_ASSERT_LEVEL_DEFINITION >= BAGIT_ASSERT_MODERATE {
        warn!(
            "Potential performance degradation: the BagIt assert level is set to {BAGIT_ASSERT_LEVEL_DEFINITION}, meaning many debug asserts are active which may result in performance degradation."
        );
    }

    let model = read_instance(&args.instance_path)?;
    info!(
        "Read {} item(s) and {} bag(s) from {}",
        model.num_items(),
        model.num_bags(),
        args.instance_path.display()
    );

    let solver_options = SolverOptions {
        consistency_level: args.consistency,
        variable_selection: args.variable_selection,
        value_selection: args.value_selection,
    };
    let mut solver = Solver::new(model, solver_options);

    let mut termination = Combinator::new(
        args.time_limit
            .map(|time_limit| TimeBudget::starting_now(Duration::from_millis(time_limit))),
        args.decision_limit.map(DecisionBudget::new),
    );

    let start = Instant::now();
    let result = solver.satisfy(&mut termination);
    info!("Time taken: {:.6} seconds", start.elapsed().as_secs_f64());

    let mut stdout = std::io::stdout().lock();
    write_result(&mut stdout, solver.model(), &result)?;
    stdout.flush()?;

    if should_log_statistics() {
        solver.log_statistics();
    }

    Ok(())
}
