//! Dependency matrix construction from per-item ordering hints.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

pub(crate) type FxIndexMap<K, V> = indexmap::IndexMap<K, V, rustc_hash::FxBuildHasher>;
type FxIndexSet<T> = indexmap::IndexSet<T, rustc_hash::FxBuildHasher>;

/// Ordering hints declared by a single item.
///
/// All channels are optional and default to empty. References to identifiers
/// that are not part of the collection are legal; they become isolated matrix
/// keys and are filtered out again when a collection is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hints<K> {
    /// Identifiers this item must be ordered before.
    #[serde(default)]
    pub precede: Vec<K>,
    /// Identifiers this item must be ordered after.
    #[serde(default)]
    pub follow: Vec<K>,
    /// Identifiers this item prefers to be ordered after. A resilient edge is
    /// dropped when a hard edge already points the opposite way.
    #[serde(default)]
    pub follow_resilient: Vec<K>,
}

/// A flat "depends on" relation over a fixed, insertion-ordered key set.
///
/// `depends_on(a, b)` means "`a` must be ordered after `b`". The relation is
/// kept as a full square boolean matrix with reflexive cells pinned to
/// `false`; key order is the tie-break reference for [`calculate_order`].
///
/// [`calculate_order`]: crate::sort::calculate_order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyGraph<K: Eq + Hash> {
    matrix: FxIndexMap<K, FxIndexMap<K, bool>>,
}

impl<K> DependencyGraph<K>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    /// Creates an empty (all-`false`) matrix over `keys`, duplicates ignored.
    pub fn new(keys: impl IntoIterator<Item = K>) -> Self {
        let keys: FxIndexSet<K> = keys.into_iter().collect();
        let matrix = keys
            .iter()
            .map(|k| {
                let row: FxIndexMap<K, bool> =
                    keys.iter().map(|other| (other.clone(), false)).collect();
                (k.clone(), row)
            })
            .collect();
        Self { matrix }
    }

    /// Builds the dependency relation from per-item hints.
    ///
    /// The key universe is the union of hint keys and every referenced
    /// identifier, in encounter order. Hard channels (`precede`, `follow`)
    /// are applied first; the resilient channel is resolved afterwards so
    /// that a hard edge wins over a conflicting resilient one no matter how
    /// the input is ordered.
    pub fn from_hints(hints: &[(K, Hints<K>)]) -> Self {
        let mut keys: FxIndexSet<K> = FxIndexSet::default();
        for (id, h) in hints {
            keys.insert(id.clone());
            for referenced in h.precede.iter().chain(&h.follow).chain(&h.follow_resilient) {
                keys.insert(referenced.clone());
            }
        }

        let mut graph = Self::new(keys);

        for (a, h) in hints {
            for b in &h.follow {
                graph.add_dependency(a, b);
            }
            for b in &h.precede {
                // "A precedes B" is the mirror of "B follows A".
                graph.add_dependency(b, a);
            }
        }

        for (a, h) in hints {
            for b in &h.follow_resilient {
                if graph.depends_on(b, a) {
                    tracing::debug!(
                        item = ?a,
                        suggested = ?b,
                        "dropping resilient edge; a dependency already points the other way"
                    );
                    continue;
                }
                graph.add_dependency(a, b);
            }
        }

        graph
    }

    /// Marks `a` as depending on `b` (`a` must be ordered after `b`).
    ///
    /// Identifiers outside the key set and self-references are ignored.
    pub fn add_dependency(&mut self, a: &K, b: &K) {
        if a == b {
            return;
        }
        let Some(row) = self.matrix.get_mut(a) else {
            return;
        };
        if let Some(cell) = row.get_mut(b) {
            *cell = true;
        }
    }

    /// Returns `true` when `a` must be ordered after `b`.
    pub fn depends_on(&self, a: &K, b: &K) -> bool {
        self.matrix
            .get(a)
            .and_then(|row| row.get(b))
            .copied()
            .unwrap_or(false)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.matrix.contains_key(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.matrix.keys()
    }

    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }

    /// Matrix rows in key order; each row covers the full key set in the
    /// same order.
    pub(crate) fn rows(&self) -> impl Iterator<Item = &FxIndexMap<K, bool>> {
        self.matrix.values()
    }
}
