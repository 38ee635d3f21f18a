#![forbid(unsafe_code)]

//! Dependency matrix construction and deterministic topological ordering.
//!
//! Per-item ordering hints ("must come before X", "must come after Y", plus
//! droppable resilient suggestions) are flattened into a square boolean
//! depends-on relation ([`DependencyGraph`]), which [`calculate_order`] turns
//! into a total order or a [`Error::CyclicDependency`] failure. Everything is
//! transient and single-threaded; one invocation allocates its own matrix and
//! shares nothing.

pub mod error;
pub mod graph;
pub mod sort;

pub use error::{Error, Result};
pub use graph::{DependencyGraph, Hints};
pub use sort::calculate_order;
