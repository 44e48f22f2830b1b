//! Tree assembly integration tests
//!
//! Exercises the public surface end to end:
//! 1. JSON definitions assemble into ordered trees with context-derived names
//! 2. Root flags reach every node; dimension flags only ever rise
//! 3. Failures abort the whole build with the offending full name
//! 4. Limits and parallelism come from `MapperConfig`

#[path = "../common/mod.rs"]
mod common;

use common::*;
use mapping_ir::features::field_mapping::LeafFieldBuilder;
use mapping_ir::features::tree_assembly::{AssembleMappingUseCase, MappingAssembler};
use mapping_ir::{
    AssemblyConfig, FieldKindRegistry, MapperBuilderContext, MapperConfig, MapperError,
    MergeReason, TreeAssembler,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

#[test]
fn test_metrics_mapping_full_names() {
    let tree = assemble(&metrics_definition());

    assert_full_names(
        &tree,
        &[
            "@timestamp",
            "host",
            "host.name",
            "host.ip",
            "cpu",
            "cpu.usage",
            "cpu.cores",
            "message",
        ],
    );
    assert_eq!(tree.fields().keys().collect::<Vec<_>>(), vec!["@timestamp", "host", "cpu", "message"]);
    assert_eq!(tree.get("cpu.usage").unwrap().kind(), "double");
}

#[test]
fn test_dimensions_follow_declaring_object() {
    let tree = assemble(&metrics_definition());

    let host = tree.get("host").unwrap().as_composite().unwrap();
    assert!(host.contains_dimensions());
    assert!(!host.flags().parent_contains_dimensions);

    for name in ["host.name", "host.ip"] {
        let leaf = tree.get(name).unwrap().as_leaf().unwrap();
        assert!(leaf.is_dimension(), "{} should be a dimension", name);
        assert!(leaf.flags().parent_contains_dimensions);
    }

    for name in ["cpu.usage", "cpu.cores", "message"] {
        assert!(!tree.get(name).unwrap().as_leaf().unwrap().is_dimension());
    }
}

#[test]
fn test_data_stream_flags_reach_every_node() {
    let root = MapperBuilderContext::root(true, true);
    let tree = assemble_with(&root, &deep_definition(12));

    assert_eq!(tree.len(), 12);
    assert!(tree.flags().is_data_stream);
    assert_root_flags_everywhere(&tree);
}

#[test]
fn test_use_case_builds_from_fresh_root() {
    let use_case = AssembleMappingUseCase::new(TreeAssembler::with_defaults());

    let tree = use_case
        .execute(true, false, MergeReason::IndexTemplate, &metrics_definition())
        .unwrap();
    assert!(tree.flags().is_source_synthetic);
    assert!(!tree.flags().is_data_stream);
    assert_eq!(tree.len(), 8);
}

#[test]
fn test_duplicate_name_aborts_without_partial_tree() {
    let def = definition(json!({
        "fields": [
            { "name": "a", "type": "object", "fields": [ { "name": "b", "type": "long" } ] },
            { "name": "c", "type": "keyword" },
            { "name": "a", "type": "object", "fields": [] }
        ]
    }));

    let state = TreeAssembler::with_defaults().run(&MapperBuilderContext::root(false, false), &def);
    assert_eq!(state.state_name(), "failed");
    assert!(state.tree().is_none());

    let err = state.into_result().unwrap_err();
    assert!(err.is_data_error());
    assert_eq!(err.full_name(), Some("a"));
}

#[test]
fn test_unknown_kind_cites_full_name() {
    let def = definition(json!({
        "fields": [
            { "name": "geo", "type": "object", "fields": [ { "name": "shape", "type": "geo_shape" } ] }
        ]
    }));

    let err = TreeAssembler::with_defaults()
        .assemble(&MapperBuilderContext::root(false, false), &def)
        .unwrap_err();
    assert!(matches!(err, MapperError::Definition { .. }));
    assert_eq!(err.full_name(), Some("geo.shape"));
}

#[test]
fn test_malformed_params_are_definition_errors() {
    let def = definition(json!({
        "fields": [
            { "name": "zone", "type": "keyword", "params": { "time_series_dimension": "yes" } }
        ]
    }));

    let err = TreeAssembler::with_defaults()
        .assemble(&MapperBuilderContext::root(false, false), &def)
        .unwrap_err();
    assert_eq!(err.full_name(), Some("zone"));
    assert!(err.to_string().contains("must be a boolean"));
}

#[test]
fn test_empty_name_is_invalid_argument() {
    let def = definition(json!({
        "fields": [ { "name": "", "type": "keyword" } ]
    }));

    let err = TreeAssembler::with_defaults()
        .assemble(&MapperBuilderContext::root(false, false), &def)
        .unwrap_err();
    assert!(matches!(err, MapperError::InvalidArgument(_)));
    assert!(!err.is_data_error());
}

#[test]
fn test_custom_kind_registration() {
    let mut kinds = FieldKindRegistry::with_defaults();
    kinds
        .register(Arc::new(LeafFieldBuilder::new("geo_point")))
        .unwrap();
    let assembler = TreeAssembler::new(Arc::new(kinds), AssemblyConfig::default());

    let def = definition(json!({
        "fields": [ { "name": "location", "type": "geo_point" } ]
    }));
    let tree = assembler
        .assemble(&MapperBuilderContext::root(false, false), &def)
        .unwrap();
    assert_eq!(tree.get("location").unwrap().kind(), "geo_point");
}

#[test]
fn test_limits_loaded_from_yaml() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"version: 1\nassembly:\n  max_depth: 3\n  max_fields: 50\n")
        .unwrap();
    let config = MapperConfig::from_yaml(file.path()).unwrap();

    let assembler = TreeAssembler::new(
        Arc::new(FieldKindRegistry::with_defaults()),
        config.assembly_config().clone(),
    );
    let root = MapperBuilderContext::root(false, false);

    assert!(assembler.assemble(&root, &deep_definition(3)).is_ok());

    let err = assembler.assemble(&root, &deep_definition(4)).unwrap_err();
    assert!(matches!(
        err,
        MapperError::DepthLimitExceeded { depth: 4, limit: 3, .. }
    ));
    assert_eq!(err.full_name(), Some("l0.l1.l2.leaf"));

    let err = assembler
        .assemble(&root, &wide_definition(10, 5))
        .unwrap_err();
    assert!(matches!(
        err,
        MapperError::FieldLimitExceeded { count: 60, limit: 50 }
    ));
}

#[test]
fn test_parallel_siblings_preserve_order() {
    let config = MapperConfig::default().assembly(|c| c.parallel_siblings(true).parallel_threshold(8));
    let parallel = TreeAssembler::new(
        Arc::new(FieldKindRegistry::with_defaults()),
        config.assembly_config().clone(),
    );
    let def = wide_definition(64, 16);
    let root = MapperBuilderContext::root(false, false);

    let tree = parallel.assemble(&root, &def).unwrap();
    let sequential = assemble(&def);

    assert_eq!(tree.len(), 64 * 17);
    assert_eq!(tree.full_names(), sequential.full_names());
}

#[test]
fn test_independent_builds_on_many_threads() {
    let assembler: Arc<dyn MappingAssembler> = Arc::new(TreeAssembler::with_defaults());
    let expected = assemble(&metrics_definition());

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let assembler = Arc::clone(&assembler);
                scope.spawn(move || {
                    let root = MapperBuilderContext::root(i % 2 == 0, false);
                    assembler.assemble(&root, &metrics_definition()).unwrap()
                })
            })
            .collect();

        for handle in handles {
            let tree = handle.join().unwrap();
            assert_eq!(tree.full_names(), expected.full_names());
        }
    });
}

#[test]
fn test_tree_serializes_with_full_names() {
    let tree = assemble(&definition(json!({
        "fields": [
            { "name": "a", "type": "object", "fields": [ { "name": "b", "type": "long" } ] }
        ]
    })));

    let value = serde_json::to_value(&tree).unwrap();
    let a = &value["root"]["children"]["a"];
    assert_eq!(a["node"], "composite");
    assert_eq!(a["full_name"], "a");
    assert_eq!(a["children"]["b"]["full_name"], "a.b");
    assert_eq!(a["children"]["b"]["kind"], "long");
}
