//! DAG Integration Tests
//!
//! Cycle detection through the public API, from decoded pipelines.

use dagcheck::{DagValidator, Pipeline, PipelineGraph, ValidationResult};
use pretty_assertions::assert_eq;
use serde_json::json;

fn pipeline(value: serde_json::Value) -> Pipeline {
    Pipeline::from_json(&value.to_string()).unwrap()
}

fn validate(value: serde_json::Value) -> ValidationResult {
    DagValidator::new().validate_pipeline(&pipeline(value))
}

// ═══════════════════════════════════════════════════════════════
// Acyclic graphs
// ═══════════════════════════════════════════════════════════════

#[test]
fn test_dag_empty_pipeline() {
    let result = validate(json!({"nodes": [], "edges": []}));

    assert!(result.is_dag);
    assert_eq!((result.num_nodes, result.num_edges), (0, 0));
}

#[test]
fn test_dag_diamond_no_cycle() {
    // Diamond: A → B, A → C, B → D, C → D
    let result = validate(json!({
        "nodes": [{"id": "a"}, {"id": "b"}, {"id": "c"}, {"id": "d"}],
        "edges": [
            {"source": "a", "target": "b"},
            {"source": "a", "target": "c"},
            {"source": "b", "target": "d"},
            {"source": "c", "target": "d"}
        ]
    }));

    assert!(result.is_dag);
    assert_eq!(result.processed_count(), 4);
}

#[test]
fn test_dag_disconnected_valid() {
    // A → B, C → D (two disconnected chains)
    let result = validate(json!({
        "nodes": [{"id": "a"}, {"id": "b"}, {"id": "c"}, {"id": "d"}],
        "edges": [
            {"source": "a", "target": "b"},
            {"source": "c", "target": "d"}
        ]
    }));

    assert!(result.is_dag);
    assert_eq!(result.num_nodes, 4);
}

#[test]
fn test_dag_edge_order_is_irrelevant() {
    // Edge order does not matter: C → B listed before A → C
    let result = validate(json!({
        "nodes": [{"id": "b"}, {"id": "c"}, {"id": "a"}],
        "edges": [
            {"source": "c", "target": "b"},
            {"source": "a", "target": "c"}
        ]
    }));

    assert!(result.is_dag);
}

// ═══════════════════════════════════════════════════════════════
// Cycles
// ═══════════════════════════════════════════════════════════════

#[test]
fn test_dag_self_loop() {
    let result = validate(json!({
        "nodes": [{"id": "a"}],
        "edges": [{"source": "a", "target": "a"}]
    }));

    assert!(!result.is_dag);
    assert_eq!((result.num_nodes, result.num_edges), (1, 1));
}

#[test]
fn test_dag_chain_plus_cyclic_pair() {
    let result = validate(json!({
        "nodes": [{"id": "a"}, {"id": "b"}, {"id": "c"}, {"id": "x"}, {"id": "y"}],
        "edges": [
            {"source": "a", "target": "b"},
            {"source": "b", "target": "c"},
            {"source": "x", "target": "y"},
            {"source": "y", "target": "x"}
        ]
    }));

    assert!(!result.is_dag);
    assert_eq!(result.num_nodes, 5);
    assert_eq!(result.num_edges, 4);
}

#[test]
fn test_dag_cycle_fed_by_source() {
    // input → a → b → a: the source is processed, the loop stays blocked
    let result = validate(json!({
        "nodes": [{"id": "input"}, {"id": "a"}, {"id": "b"}],
        "edges": [
            {"source": "input", "target": "a"},
            {"source": "a", "target": "b"},
            {"source": "b", "target": "a"}
        ]
    }));

    assert!(!result.is_dag);
    assert_eq!(result.processed_count(), 1);
}

// ═══════════════════════════════════════════════════════════════
// Tolerance policy: edges with unknown endpoints
// ═══════════════════════════════════════════════════════════════

#[test]
fn test_ghost_edges_are_counted_not_followed() {
    // Deliberate: unknown endpoints are dropped instead of rejected
    let result = validate(json!({
        "nodes": [{"id": "a"}],
        "edges": [
            {"source": "a", "target": "a"},
            {"source": "a", "target": "ghost"}
        ]
    }));

    assert_eq!(result.num_edges, 2);
    assert_eq!(result.num_nodes, 1);
    assert!(!result.is_dag);
}

#[test]
fn test_ghost_cycle_does_not_count() {
    // A "cycle" through a node that is not listed is invisible
    let result = validate(json!({
        "nodes": [{"id": "a"}, {"id": "b"}],
        "edges": [
            {"source": "a", "target": "ghost"},
            {"source": "ghost", "target": "a"},
            {"source": "a", "target": "b"}
        ]
    }));

    assert!(result.is_dag);
    assert_eq!(result.num_edges, 3);
}

#[test]
fn test_graph_reports_dropped_edges() {
    let pipeline = pipeline(json!({
        "nodes": [{"id": "a"}],
        "edges": [{"source": "a", "target": "ghost"}]
    }));
    let graph = PipelineGraph::build(pipeline.node_ids(), pipeline.edge_pairs());

    assert_eq!(graph.dropped_edges(), 1);
    assert_eq!(graph.edge_count(), 1);
    assert!(DagValidator::new().validate_graph(&graph).is_dag);
}

// ═══════════════════════════════════════════════════════════════
// Duplicates
// ═══════════════════════════════════════════════════════════════

#[test]
fn test_duplicate_nodes_and_edges() {
    let result = validate(json!({
        "nodes": [{"id": "a"}, {"id": "b"}, {"id": "a"}],
        "edges": [
            {"source": "a", "target": "b"},
            {"source": "a", "target": "b"}
        ]
    }));

    assert!(result.is_dag);
    assert_eq!(result.num_nodes, 2);
    assert_eq!(result.num_edges, 2);
}

#[test]
fn test_missing_edges_key_defaults_to_empty() {
    let result = validate(json!({"nodes": [{"id": "a"}, {"id": "b"}]}));

    assert!(result.is_dag);
    assert_eq!(result.num_edges, 0);
}

#[test]
fn test_validation_is_idempotent() {
    let pipeline = pipeline(json!({
        "nodes": [{"id": "a"}, {"id": "b"}],
        "edges": [{"source": "a", "target": "b"}, {"source": "b", "target": "a"}]
    }));
    let validator = DagValidator::new();

    assert_eq!(
        validator.validate_pipeline(&pipeline),
        validator.validate_pipeline(&pipeline)
    );
}
