#![cfg(test)]

mod helpers;

use helpers::run_solver;
use helpers::run_solver_with_options;

#[test]
fn packing_is_deterministic() {
    let run = run_solver("spread_over_two_bags");

    assert!(run.status.success());
    assert_eq!(run.stdout, "success\na\tc\nb\n");
}

#[test]
fn empty_instance_reports_success_without_bags() {
    let run = run_solver("no_items");

    assert!(run.status.success());
    assert_eq!(run.stdout, "success\n");
}

#[test]
fn duplicate_item_is_an_error() {
    let run = run_solver("duplicate_item");

    assert_eq!(run.status.code(), Some(1));
    assert!(run.stdout.is_empty());
    assert!(run.stderr.contains("Execution failed"));
    assert!(run.stderr.contains("line 5"));
    assert!(run.stderr.contains("declared more than once"));
}

#[test]
fn unknown_marker_is_an_error() {
    let run = run_solver("unknown_marker");

    assert_eq!(run.status.code(), Some(1));
    assert!(run.stdout.is_empty());
    assert!(run.stderr.contains("unknown constraint marker '*'"));
}

#[test]
fn verbose_output_reports_the_time_taken_on_stderr() {
    let run = run_solver_with_options(
        "spread_over_two_bags",
        ["--verbose".to_owned(), "--omit-timestamp".to_owned()],
        "verbose_output_reports_the_time_taken_on_stderr",
    );

    assert!(run.status.success());
    assert_eq!(run.stdout, "success\na\tc\nb\n");
    assert!(run
        .stderr
        .lines()
        .any(|line| line.starts_with("c INFO Time taken: ") && line.ends_with(" seconds")));
}

#[test]
fn statistics_are_logged_in_camel_case() {
    let run = run_solver_with_options(
        "conflict_in_single_bag",
        ["--log-statistics".to_owned(), "--consistency".to_owned(), "capacity-only".to_owned()],
        "statistics_are_logged_in_camel_case",
    );

    assert!(run.status.success());
    assert_eq!(run.stdout, "failure\n");
    assert!(run.stderr.contains("c STAT searchNumDecisions=1"));
    assert!(run.stderr.contains("c STAT searchNumBacktracks=1"));
    assert!(run.stderr.contains("c STAT searchNumRejectedPacks=1"));
    assert!(run.stderr.contains("c STAT consistencyNumNodePrunings=0"));
    assert!(run.stderr.contains("c STAT timeSpentInSolver="));
}
