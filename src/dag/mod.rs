//! DAG Module - graph construction and cycle detection
//!
//! - `graph`: PipelineGraph (adjacency + in-degree, generic over borrowed IDs)
//! - `validate`: DagValidator (Kahn's algorithm), ValidationResult

mod graph;
mod validate;

pub use graph::PipelineGraph;
pub use validate::{DagValidator, ValidationResult};
