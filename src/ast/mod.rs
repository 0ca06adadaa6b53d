//! AST Module - decoded request payloads
//!
//! - `pipeline`: Pipeline, PipelineNode, PipelineEdge
//!
//! These types are the "what" posted by the pipeline editor.
//! For the graph built from them, see the `dag` module.

mod pipeline;

pub use pipeline::{NodeId, Pipeline, PipelineEdge, PipelineNode};
