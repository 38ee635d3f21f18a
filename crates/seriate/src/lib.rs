#![forbid(unsafe_code)]

//! Deterministic load/execution ordering for named item collections.
//!
//! Hosts with a registry of named components (plugins, modules, packages)
//! declare per-item "must come before X" / "must come after Y" lists on
//! their payloads; [`order_by_dependencies`] reorders the collection to
//! honor them, failing with [`graph::Error::CyclicDependency`] when the
//! constraints contradict each other.
//!
//! The underlying matrix and sorter live in [`seriate_graph`] and are
//! re-exported as [`graph`] for hosts that want to drive them directly.

pub use seriate_graph as graph;

pub mod hints;
pub mod order;

pub use graph::{DependencyGraph, Error, Hints, calculate_order};
pub use hints::HintSource;
pub use order::{
    dependency_order, dependency_order_resilient, order_by_dependencies,
    order_by_dependencies_resilient,
};
