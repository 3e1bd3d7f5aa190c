//! Shared code for running the solver binary in integration tests.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::fs::File;
use std::path::Path;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::time::Duration;

use bagit_solver::core::model::Model;
use bagit_solver::instance::read_instance;
use wait_timeout::ChildExt;

#[derive(Debug)]
pub(crate) struct SolverRun {
    pub(crate) status: ExitStatus,
    pub(crate) stdout: String,
    pub(crate) stderr: String,
}

/// What the solver reported on stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ReportedOutcome {
    /// The item names of every non-empty bag.
    Success(Vec<Vec<String>>),
    Failure,
}

pub(crate) fn instance_path(instance_name: &str) -> PathBuf {
    PathBuf::from(format!(
        "{}/tests/instances/{instance_name}.txt",
        env!("CARGO_MANIFEST_DIR")
    ))
}

pub(crate) fn run_solver(instance_name: &str) -> SolverRun {
    run_solver_with_options(instance_name, std::iter::empty(), instance_name)
}

/// Runs the solver on the instance, writing its output next to the instance in files named after
/// `run_name`, which should be unique per test.
pub(crate) fn run_solver_with_options(
    instance_name: &str,
    args: impl IntoIterator<Item = String>,
    run_name: &str,
) -> SolverRun {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let instance_path = instance_path(instance_name);
    let solver = PathBuf::from(env!("CARGO_BIN_EXE_bagit-solver"));

    let log_file_path = instance_path.with_file_name(format!("{run_name}.log"));
    let err_file_path = instance_path.with_file_name(format!("{run_name}.err"));

    let mut command = Command::new(solver);
    for arg in args {
        let _ = command.arg(arg);
    }

    let mut child = command
        .arg(&instance_path)
        .stdout(File::create(&log_file_path).expect("Failed to create log file."))
        .stderr(File::create(&err_file_path).expect("Failed to create error file."))
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run solver.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => panic!("solver took more than {} seconds", TEST_TIMEOUT.as_secs()),
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting solver: {e}"),
    };

    SolverRun {
        status,
        stdout: read_and_remove(&log_file_path),
        stderr: read_and_remove(&err_file_path),
    }
}

fn read_and_remove(path: &Path) -> String {
    let contents = std::fs::read_to_string(path).expect("Failed to read solver output.");
    std::fs::remove_file(path).expect("Failed to remove solver output.");
    contents
}

pub(crate) fn parse_outcome(stdout: &str) -> ReportedOutcome {
    let mut lines = stdout.lines();

    match lines.next() {
        Some("success") => ReportedOutcome::Success(
            lines
                .map(|line| line.split('\t').map(str::to_owned).collect())
                .collect(),
        ),
        Some("failure") => {
            assert_eq!(lines.next(), None, "failure should be reported on its own");
            ReportedOutcome::Failure
        }
        other => panic!("unexpected first line of output: {other:?}"),
    }
}

/// Checks that the reported bags form a valid packing of the instance: every item is packed
/// exactly once, no bag is over capacity, and all items sharing a bag are compatible.
pub(crate) fn verify_packing(model: &Model, bags: &[Vec<String>]) {
    assert!(
        bags.len() <= model.num_bags(),
        "{} bags were reported but the instance has {}",
        bags.len(),
        model.num_bags()
    );

    let mut num_packed = vec![0; model.num_items()];
    // Bags are uniform in the instance format
    let capacity = model
        .bag_ids()
        .next()
        .map_or(0, |bag| model.bag(bag).capacity());

    for bag in bags {
        assert!(!bag.is_empty(), "empty bags should not be reported");

        let items = bag
            .iter()
            .map(|name| {
                model
                    .find_item(name)
                    .unwrap_or_else(|| panic!("unknown item '{name}' was reported"))
            })
            .collect::<Vec<_>>();

        let load: u32 = items.iter().map(|&item| model.item(item).size()).sum();
        assert!(load <= capacity, "bag {bag:?} exceeds the capacity {capacity}");

        for (index, &first) in items.iter().enumerate() {
            num_packed[first.id as usize] += 1;
            for &second in &items[index + 1..] {
                assert!(
                    model.are_compatible(first, second),
                    "incompatible items share bag {bag:?}"
                );
            }
        }
    }

    for item in model.item_ids() {
        assert_eq!(
            num_packed[item.id as usize],
            1,
            "item '{}' should be packed exactly once",
            model.item(item).name()
        );
    }
}

pub(crate) fn read_model(instance_name: &str) -> Model {
    read_instance(instance_path(instance_name)).expect("Failed to read the instance.")
}
