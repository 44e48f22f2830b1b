//! Merge integration tests
//!
//! Two independently assembled trees reconciled under each merge reason,
//! with policy tables taken from defaults and from YAML configuration.

#[path = "../common/mod.rs"]
mod common;

use common::*;
use mapping_ir::features::merge::{MappingMerger, MergeMappingUseCase};
use mapping_ir::{
    ConflictRule, MapperBuilderContext, MapperConfig, MergePolicy, MergeReason, TreeMerger,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_schema_update_adds_fields() {
    let existing = assemble(&metrics_definition());
    let incoming = assemble(&metrics_definition_v2());

    for reason in MergeReason::ALL {
        let merged = TreeMerger::default()
            .merge(&existing, &incoming, reason)
            .unwrap();
        assert_full_names(
            &merged,
            &[
                "@timestamp",
                "host",
                "host.name",
                "host.ip",
                "cpu",
                "cpu.usage",
                "cpu.cores",
                "cpu.steal",
                "message",
                "service",
            ],
        );
    }
}

#[test]
fn test_partial_update_retains_existing_fields() {
    let existing = assemble(&metrics_definition());
    let incoming = assemble(&definition(json!({
        "fields": [
            { "name": "cpu", "type": "object", "fields": [ { "name": "idle", "type": "double" } ] }
        ]
    })));

    let merged = MergeMappingUseCase::new(TreeMerger::default())
        .execute(&existing, &incoming, MergeReason::MappingUpdate)
        .unwrap();

    // existing order kept, incoming-only children appended
    assert_full_names(
        &merged,
        &[
            "@timestamp",
            "host",
            "host.name",
            "host.ip",
            "cpu",
            "cpu.usage",
            "cpu.cores",
            "cpu.idle",
            "message",
        ],
    );
    assert!(merged
        .get("host.name")
        .unwrap()
        .as_leaf()
        .unwrap()
        .is_dimension());
}

#[test]
fn test_recovery_reports_every_omission() {
    let existing = assemble(&metrics_definition());
    let incoming = assemble(&definition(json!({
        "fields": [
            { "name": "@timestamp", "type": "date" },
            { "name": "cpu", "type": "object", "fields": [ { "name": "usage", "type": "double" } ] }
        ]
    })));

    let report = TreeMerger::default()
        .merge(&existing, &incoming, MergeReason::MappingRecovery)
        .unwrap_err();

    assert_eq!(report.reason(), MergeReason::MappingRecovery);
    assert_eq!(report.full_names(), vec!["host", "cpu.cores", "message"]);
    for name in ["host", "cpu.cores", "message"] {
        assert_conflict(&report, name, &ConflictRule::FieldOmitted);
    }
}

#[test]
fn test_kind_change_rejected_under_every_reason() {
    let existing = assemble(&metrics_definition());
    let incoming = assemble(&definition(json!({
        "fields": [
            { "name": "@timestamp", "type": "date" },
            { "name": "host", "type": "object", "params": { "time_series_dimension": true }, "fields": [
                { "name": "name", "type": "keyword" },
                { "name": "ip", "type": "ip" }
            ] },
            { "name": "cpu", "type": "nested", "fields": [
                { "name": "usage", "type": "double" },
                { "name": "cores", "type": "integer" }
            ] },
            { "name": "message", "type": "keyword" }
        ]
    })));

    for reason in MergeReason::ALL {
        let report = TreeMerger::default()
            .merge(&existing, &incoming, reason)
            .unwrap_err();

        assert_eq!(report.len(), 2, "reason {}", reason);
        assert_conflict(
            &report,
            "cpu",
            &ConflictRule::KindMismatch {
                existing: "object".to_string(),
                incoming: "nested".to_string(),
            },
        );
        assert_conflict(
            &report,
            "message",
            &ConflictRule::KindMismatch {
                existing: "text".to_string(),
                incoming: "keyword".to_string(),
            },
        );
    }
}

#[test]
fn test_dimension_role_is_not_updateable() {
    let existing = assemble(&metrics_definition());
    let incoming = assemble(&definition(json!({
        "fields": [
            { "name": "host", "type": "object", "fields": [
                { "name": "name", "type": "keyword" }
            ] }
        ]
    })));

    let report = TreeMerger::default()
        .merge(&existing, &incoming, MergeReason::MappingUpdate)
        .unwrap_err();

    // the flip is reported where it was declared, not again at host.name
    assert_eq!(report.full_names(), vec!["host"]);
    assert_conflict(
        &report,
        "host",
        &ConflictRule::DimensionChange {
            existing: true,
            incoming: false,
        },
    );
}

#[test]
fn test_leaf_dimension_role_is_not_updateable() {
    let existing = assemble(&metrics_definition());
    let incoming = assemble(&definition(json!({
        "fields": [
            { "name": "message", "type": "text", "params": { "time_series_dimension": true } }
        ]
    })));

    let report = TreeMerger::default()
        .merge(&existing, &incoming, MergeReason::MappingUpdate)
        .unwrap_err();
    assert_conflict(
        &report,
        "message",
        &ConflictRule::DimensionChange {
            existing: false,
            incoming: true,
        },
    );
}

#[test]
fn test_dotted_field_cannot_shadow_object_path() {
    let existing = assemble(&metrics_definition());
    let incoming = assemble(&definition(json!({
        "fields": [ { "name": "cpu.usage", "type": "keyword" } ]
    })));

    for reason in MergeReason::ALL {
        let report = TreeMerger::default()
            .merge(&existing, &incoming, reason)
            .unwrap_err();
        assert_conflict(
            &report,
            "cpu.usage",
            &ConflictRule::KindMismatch {
                existing: "double".to_string(),
                incoming: "keyword".to_string(),
            },
        );
    }
}

#[test]
fn test_redefinition_allowed_only_for_updates() {
    let existing = assemble(&metrics_definition());
    let incoming = assemble(&definition(json!({
        "fields": [
            { "name": "message", "type": "text", "params": { "norms": false } }
        ]
    })));

    let merged = TreeMerger::default()
        .merge(&existing, &incoming, MergeReason::MappingUpdatePreflight)
        .unwrap();
    assert_eq!(merged.get("message").unwrap().params()["norms"], json!(false));

    let report = TreeMerger::default()
        .merge(&existing, &incoming, MergeReason::MappingRecovery)
        .unwrap_err();
    assert_conflict(&report, "message", &ConflictRule::Redefinition);
}

#[test]
fn test_policy_table_from_yaml() {
    let config = MapperConfig::from_yaml_str(
        r#"
version: 1
merge_policies:
  index_template:
    allow_omission: false
    allow_redefinition: true
"#,
    )
    .unwrap();
    assert_eq!(
        config.policy_table().policy(MergeReason::IndexTemplate),
        MergePolicy {
            allow_omission: false,
            allow_redefinition: true,
        }
    );

    let merger = TreeMerger::new(config.policy_table().clone());
    let existing = assemble(&metrics_definition());
    let incoming = assemble(&definition(json!({
        "fields": [ { "name": "message", "type": "text" } ]
    })));

    let report = merger
        .merge(&existing, &incoming, MergeReason::IndexTemplate)
        .unwrap_err();
    assert_eq!(report.full_names(), vec!["@timestamp", "host", "cpu"]);

    assert!(merger
        .merge(&existing, &incoming, MergeReason::MappingUpdate)
        .is_ok());
}

#[test]
fn test_root_flags_must_match() {
    let existing = assemble_with(&MapperBuilderContext::root(false, false), &metrics_definition());
    let incoming = assemble_with(&MapperBuilderContext::root(false, true), &metrics_definition_v2());

    let report = TreeMerger::default()
        .merge(&existing, &incoming, MergeReason::MappingUpdate)
        .unwrap_err();
    assert_eq!(report.len(), 1);
    assert_conflict(
        &report,
        "_doc",
        &ConflictRule::RootFlagsChange {
            existing: existing.flags(),
            incoming: incoming.flags(),
        },
    );

    let same_flags = assemble_with(&MapperBuilderContext::root(false, true), &metrics_definition());
    let merged = TreeMerger::default()
        .merge(&same_flags, &incoming, MergeReason::MappingUpdate)
        .unwrap();
    assert!(merged.flags().is_data_stream);
    assert_root_flags_everywhere(&merged);
}

#[test]
fn test_merge_leaves_inputs_untouched() {
    let existing = assemble(&metrics_definition());
    let incoming = assemble(&metrics_definition_v2());
    let (existing_before, incoming_before) = (existing.clone(), incoming.clone());

    let merged = TreeMerger::default()
        .merge(&existing, &incoming, MergeReason::MappingUpdate)
        .unwrap();

    assert_eq!(existing.full_names(), existing_before.full_names());
    assert_eq!(incoming.full_names(), incoming_before.full_names());
    assert_eq!(existing, existing_before);
    assert_eq!(merged.len(), 10);
}

#[test]
fn test_report_serializes_for_operators() {
    let existing = assemble(&metrics_definition());
    let incoming = assemble(&definition(json!({
        "fields": [ { "name": "message", "type": "long" } ]
    })));

    let report = TreeMerger::default()
        .merge(&existing, &incoming, MergeReason::MappingUpdate)
        .unwrap_err();
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["reason"], "mapping_update");
    assert_eq!(value["conflicts"][0]["full_name"], "message");
    assert_eq!(value["conflicts"][0]["rule"], "kind_mismatch");
    assert!(report.to_string().contains("[message]: cannot change kind from [text] to [long]"));
}
