//! DAG Validation - Kahn's algorithm over a PipelineGraph
//!
//! A graph is acyclic iff every node can be removed in topological order,
//! i.e. the number of processed nodes equals the number of distinct nodes.

use std::collections::VecDeque;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::ast::Pipeline;

use super::graph::PipelineGraph;

/// Outcome of validating one pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub is_dag: bool,
    #[serde(skip)]
    processed: usize,
}

impl ValidationResult {
    /// Nodes removed by the topological pass before the queue ran dry
    pub fn processed_count(&self) -> usize {
        self.processed
    }
}

/// Stateless cycle checker
#[derive(Debug, Clone, Copy, Default)]
pub struct DagValidator;

impl DagValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate raw node IDs and (source, target) pairs.
    pub fn validate<K, N, E>(&self, nodes: N, edges: E) -> ValidationResult
    where
        K: Hash + Eq + Clone,
        N: IntoIterator<Item = K>,
        E: IntoIterator<Item = (K, K)>,
    {
        self.validate_graph(&PipelineGraph::build(nodes, edges))
    }

    pub fn validate_pipeline(&self, pipeline: &Pipeline) -> ValidationResult {
        self.validate(pipeline.node_ids(), pipeline.edge_pairs())
    }

    pub fn validate_graph<K>(&self, graph: &PipelineGraph<K>) -> ValidationResult
    where
        K: Hash + Eq + Clone,
    {
        let processed = processed_count(graph);
        let result = ValidationResult {
            num_nodes: graph.node_count(),
            num_edges: graph.edge_count(),
            is_dag: processed == graph.node_count(),
            processed,
        };

        tracing::debug!(
            num_nodes = result.num_nodes,
            num_edges = result.num_edges,
            processed,
            is_dag = result.is_dag,
            "validated pipeline graph"
        );

        result
    }
}

/// Run Kahn's algorithm and return how many nodes were dequeued.
fn processed_count<K: Hash + Eq + Clone>(graph: &PipelineGraph<K>) -> usize {
    let mut in_degree: FxHashMap<&K, usize> = graph
        .node_ids()
        .iter()
        .map(|id| (id, graph.in_degree(id)))
        .collect();

    let mut queue: VecDeque<&K> = graph
        .node_ids()
        .iter()
        .filter(|id| in_degree.get(id) == Some(&0))
        .collect();

    let mut processed = 0;

    while let Some(node) = queue.pop_front() {
        processed += 1;

        for succ in graph.successors(node) {
            if let Some(deg) = in_degree.get_mut(succ) {
                *deg -= 1;
                if *deg == 0 {
                    queue.push_back(succ);
                }
            }
        }
    }

    processed
}
