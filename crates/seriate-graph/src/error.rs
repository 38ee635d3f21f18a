use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error<K: fmt::Debug> {
    /// The hard constraints are mutually contradictory; no total order exists.
    #[error("cyclic dependency: no valid order exists for {} remaining item(s)", .remaining.len())]
    CyclicDependency {
        /// Identifiers still unresolved when the sort stalled. At least one
        /// cycle runs through them; exact cycle membership is not computed.
        remaining: Vec<K>,
    },
}

pub type Result<T, K> = std::result::Result<T, Error<K>>;
