//! Custom assertions for mapping trees and conflict reports

use mapping_ir::{ConflictReport, ConflictRule, MappingTree};

/// Assert the depth-first full names of `tree`
pub fn assert_full_names(tree: &MappingTree, expected: &[&str]) {
    assert_eq!(
        tree.full_names(),
        expected,
        "Unexpected full names in tree of {} nodes",
        tree.len()
    );
}

/// Assert every node carries the root's source-synthetic and data-stream flags
pub fn assert_root_flags_everywhere(tree: &MappingTree) {
    let root = tree.flags();
    for node in tree.iter() {
        assert_eq!(
            node.flags().is_source_synthetic,
            root.is_source_synthetic,
            "source-synthetic flag drifted at '{}'",
            node.full_name()
        );
        assert_eq!(
            node.flags().is_data_stream,
            root.is_data_stream,
            "data-stream flag drifted at '{}'",
            node.full_name()
        );
    }
}

/// Assert `report` holds a conflict at `full_name` matching `rule`
pub fn assert_conflict(report: &ConflictReport, full_name: &str, rule: &ConflictRule) {
    let conflict = report
        .find(full_name)
        .unwrap_or_else(|| panic!("no conflict at '{}'. Report: {}", full_name, report));
    assert_eq!(&conflict.rule, rule, "wrong rule at '{}'", full_name);
}
