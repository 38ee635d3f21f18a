//! Deterministic topological ordering over a [`DependencyGraph`].

use crate::error::{Error, Result};
use crate::graph::DependencyGraph;
use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;

/// Computes a total order of the graph's key set.
///
/// For every pair with `depends_on(a, b)` the result places `b` before `a`.
/// Keys without dependencies start out in insertion order; a key whose last
/// dependency has just been emitted is emitted next, ahead of older roots.
/// The output is therefore a pure function of the matrix content and its key
/// order.
///
/// Fails with [`Error::CyclicDependency`] when the remaining keys can no
/// longer be reduced; the error carries the stuck key set and no partial
/// order is produced.
pub fn calculate_order<K>(graph: &DependencyGraph<K>) -> Result<Vec<K>, K>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    let keys: Vec<&K> = graph.keys().collect();
    let rows: Vec<_> = graph.rows().collect();
    let n = keys.len();

    let mut deps_left: Vec<usize> = rows
        .iter()
        .map(|row| row.values().filter(|&&dep| dep).count())
        .collect();
    let mut worklist: VecDeque<usize> = (0..n).filter(|&i| deps_left[i] == 0).collect();
    let mut done = vec![false; n];
    let mut order: Vec<K> = Vec::with_capacity(n);

    while let Some(i) = worklist.pop_front() {
        done[i] = true;
        order.push(keys[i].clone());

        let mut freed: Vec<usize> = Vec::new();
        for j in 0..n {
            if done[j] || deps_left[j] == 0 {
                continue;
            }
            if rows[j].get_index(i).is_some_and(|(_, &dep)| dep) {
                deps_left[j] -= 1;
                if deps_left[j] == 0 {
                    freed.push(j);
                }
            }
        }
        // Freed keys run before older roots, keeping key order among themselves.
        for &j in freed.iter().rev() {
            worklist.push_front(j);
        }
    }

    if order.len() < n {
        let remaining: Vec<K> = (0..n)
            .filter(|&i| !done[i])
            .map(|i| keys[i].clone())
            .collect();
        tracing::debug!(stuck = remaining.len(), "dependency graph contains a cycle");
        return Err(Error::CyclicDependency { remaining });
    }

    Ok(order)
}
