//! PipelineGraph - adjacency + in-degree structure for one validation
//!
//! Generic over the node key so callers can borrow IDs straight out of the
//! payload (`&NodeId`, `&str`) instead of copying them. FxHashMap for
//! faster hashing. Built fresh per request, never shared.

use std::borrow::Borrow;
use std::hash::Hash;

use rustc_hash::{FxHashMap, FxHashSet};

/// Directed graph over the de-duplicated node set of a pipeline
///
/// Edges whose source or target is not a known node are dropped from the
/// structure but still counted in `edge_count`.
#[derive(Debug, Clone)]
pub struct PipelineGraph<K> {
    /// node_id -> successors, in edge input order
    adjacency: FxHashMap<K, Vec<K>>,
    /// node_id -> number of incoming (kept) edges
    in_degree: FxHashMap<K, usize>,
    /// Distinct node IDs in first-appearance order
    node_ids: Vec<K>,
    /// Quick lookup for node existence
    node_set: FxHashSet<K>,
    /// Raw number of input edges, dropped ones included
    edge_count: usize,
    /// Edges ignored because an endpoint is unknown
    dropped_edges: usize,
}

impl<K> Default for PipelineGraph<K> {
    fn default() -> Self {
        Self {
            adjacency: FxHashMap::default(),
            in_degree: FxHashMap::default(),
            node_ids: Vec::new(),
            node_set: FxHashSet::default(),
            edge_count: 0,
            dropped_edges: 0,
        }
    }
}

impl<K> PipelineGraph<K>
where
    K: Hash + Eq + Clone,
{
    pub fn build<N, E>(nodes: N, edges: E) -> Self
    where
        N: IntoIterator<Item = K>,
        E: IntoIterator<Item = (K, K)>,
    {
        let nodes = nodes.into_iter();
        let capacity = nodes.size_hint().0;
        let mut graph = Self {
            adjacency: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            in_degree: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            node_ids: Vec::with_capacity(capacity),
            node_set: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
            edge_count: 0,
            dropped_edges: 0,
        };

        for id in nodes {
            if !graph.node_set.insert(id.clone()) {
                continue;
            }
            graph.node_ids.push(id.clone());
            graph.adjacency.insert(id.clone(), Vec::new());
            graph.in_degree.insert(id, 0);
        }

        for (source, target) in edges {
            graph.edge_count += 1;

            if !graph.node_set.contains(&source) || !graph.node_set.contains(&target) {
                graph.dropped_edges += 1;
                continue;
            }

            if let Some(deg) = graph.in_degree.get_mut(&target) {
                *deg += 1;
            }
            graph.adjacency.entry(source).or_default().push(target);
        }

        if graph.dropped_edges > 0 {
            tracing::debug!(
                dropped = graph.dropped_edges,
                "ignored edges with unknown endpoints"
            );
        }

        graph
    }

    /// Successors of a node (empty for unknown IDs)
    #[inline]
    pub fn successors<Q>(&self, node_id: &Q) -> &[K]
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.adjacency.get(node_id).map_or(&[], Vec::as_slice)
    }

    /// Initial in-degree of a node (0 for unknown IDs)
    #[inline]
    pub fn in_degree<Q>(&self, node_id: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.in_degree.get(node_id).copied().unwrap_or(0)
    }

    #[inline]
    pub fn contains<Q>(&self, node_id: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.node_set.contains(node_id)
    }
}

impl<K> PipelineGraph<K> {
    /// Number of distinct node IDs
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    /// Number of input edges, including dropped ones
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[inline]
    pub fn dropped_edges(&self) -> usize {
        self.dropped_edges
    }

    /// Distinct node IDs in first-appearance order
    pub fn node_ids(&self) -> &[K] {
        &self.node_ids
    }
}
