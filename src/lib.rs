//! dagcheck - DAG validation service for pipeline graphs
//!
//! The core is [`DagValidator`], a Kahn's-algorithm cycle check over the
//! nodes and edges of a [`Pipeline`]. The [`server`] module exposes it over
//! HTTP for the pipeline editor.

pub mod ast;
pub mod config;
pub mod dag;
pub mod error;
pub mod server;

pub use ast::{NodeId, Pipeline, PipelineEdge, PipelineNode};
pub use config::{ConfigOverrides, ServerConfig};
pub use dag::{DagValidator, PipelineGraph, ValidationResult};
pub use error::{DagCheckError, FixSuggestion};
