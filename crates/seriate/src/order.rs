//! The collection orderer: reorders an item collection by declared hints.

use crate::hints::HintSource;
use indexmap::IndexMap;
use seriate_graph::{DependencyGraph, Hints, Result, calculate_order};
use std::fmt;
use std::hash::Hash;

/// Reorders `items` so that every declared before/after constraint holds.
///
/// `precede_field` and `follow_field` name the payload attributes holding the
/// "must come before" and "must come after" identifier lists; a missing
/// attribute counts as empty. Hint references to identifiers outside `items`
/// are treated as satisfied and never appear in the output.
///
/// The input is left untouched; the result is a new map with the same keys
/// and payload values. Items with no constraints keep their relative input
/// order among the initial roots; an item is emitted directly after the last
/// item it depends on.
pub fn order_by_dependencies<K, V>(
    items: &IndexMap<K, V>,
    precede_field: &str,
    follow_field: &str,
) -> Result<IndexMap<K, V>, K>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: HintSource<K> + Clone,
{
    order_by_dependencies_resilient(items, precede_field, follow_field, None)
}

/// Like [`order_by_dependencies`], with an optional third field naming the
/// resilient ("prefer to follow") hint list. Resilient hints lose silently
/// against opposing hard constraints instead of manufacturing a cycle.
pub fn order_by_dependencies_resilient<K, V>(
    items: &IndexMap<K, V>,
    precede_field: &str,
    follow_field: &str,
    resilient_field: Option<&str>,
) -> Result<IndexMap<K, V>, K>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: HintSource<K> + Clone,
{
    let order = dependency_order_resilient(items, precede_field, follow_field, resilient_field)?;

    let mut ordered: IndexMap<K, V> = IndexMap::with_capacity(items.len());
    for id in order {
        // dependency_order_resilient only yields identifiers present in `items`.
        if let Some(payload) = items.get(&id) {
            ordered.insert(id, payload.clone());
        }
    }
    Ok(ordered)
}

/// The ordering-only variant: returns the item identifiers in dependency
/// order without rebuilding the collection.
pub fn dependency_order<K, V>(
    items: &IndexMap<K, V>,
    precede_field: &str,
    follow_field: &str,
) -> Result<Vec<K>, K>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: HintSource<K>,
{
    dependency_order_resilient(items, precede_field, follow_field, None)
}

/// Like [`dependency_order`], with an optional resilient hint field.
pub fn dependency_order_resilient<K, V>(
    items: &IndexMap<K, V>,
    precede_field: &str,
    follow_field: &str,
    resilient_field: Option<&str>,
) -> Result<Vec<K>, K>
where
    K: Eq + Hash + Clone + fmt::Debug,
    V: HintSource<K>,
{
    let hints: Vec<(K, Hints<K>)> = items
        .iter()
        .map(|(id, payload)| {
            let hints = Hints {
                precede: payload.hint_list(precede_field),
                follow: payload.hint_list(follow_field),
                follow_resilient: resilient_field
                    .map(|field| payload.hint_list(field))
                    .unwrap_or_default(),
            };
            (id.clone(), hints)
        })
        .collect();

    let graph = DependencyGraph::from_hints(&hints);
    let order = calculate_order(&graph)?;

    let filtered: Vec<K> = order
        .into_iter()
        .filter(|id| {
            let present = items.contains_key(id);
            if !present {
                tracing::trace!(?id, "hint references an identifier absent from the collection");
            }
            present
        })
        .collect();
    Ok(filtered)
}
