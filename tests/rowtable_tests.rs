//! Row Table invariants (spec.md §8).

mod support;

use support::{Cmd, MockController, TestSpec};

#[test]
fn opening_sets_row_and_zero_hits() {
    let mut ctrl = MockController::new();
    ctrl.open_row(0, 7);

    assert_eq!(ctrl.row_table.get_open_row(&vec![0, 7]), 7);
    assert_eq!(ctrl.row_table.get_hits(&vec![0, 7], false), 0);
}

#[test]
fn consecutive_accesses_accumulate_hits() {
    let mut ctrl = MockController::new();
    ctrl.open_row(0, 7);
    for _ in 0..3 {
        ctrl.access(0, 7);
    }
    assert_eq!(ctrl.row_table.get_hits(&vec![0, 7], false), 3);
}

#[test]
fn closing_removes_the_rowgroup() {
    let mut ctrl = MockController::new();
    ctrl.open_row(0, 7);
    ctrl.close(0);

    assert_eq!(
        ctrl.row_table.get_open_row(&vec![0, 7]),
        dram_sched::rowtable::NO_OPEN_ROW
    );
}

#[test]
fn get_hits_requires_matching_row_unless_to_opened_row() {
    let mut ctrl = MockController::new();
    ctrl.open_row(0, 7);
    ctrl.access(0, 7);

    // Querying a different row in the same bank: 0 unless to_opened_row.
    assert_eq!(ctrl.row_table.get_hits(&vec![0, 9], false), 0);
    assert_eq!(ctrl.row_table.get_hits(&vec![0, 9], true), 1);
}

#[test]
#[should_panic]
fn accessing_a_mismatched_row_panics() {
    let mut ctrl = MockController::new();
    ctrl.open_row(0, 7);
    ctrl.row_table
        .update(&TestSpec, Cmd::Acc, &vec![0, 9], ctrl.clk);
}

#[test]
#[should_panic]
fn closing_with_no_open_rows_panics() {
    let mut ctrl = MockController::new();
    ctrl.row_table
        .update(&TestSpec, Cmd::Pre, &vec![0, 0], ctrl.clk);
}
