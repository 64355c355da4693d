// src/graph/dijkstra.rs

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};
use std::fmt::Debug;
use std::ops::Add;
use log::{debug, trace};
use num::Zero;
use crate::core::{EulerError, Result};
use crate::graph::graph::GraphOps;

/// Shortest path from `start` to `goal`, both ends included.
///
/// Priority-queue Dijkstra over non-negative weights. The open set is a
/// min-heap of (distance, node, parent), so ties fall to the smaller node.
/// `closed` keeps the best tentative distance per discovered node and
/// `explored` the chosen parent per finalized node; stale heap entries for
/// finalized nodes are skipped. Every traversed edge must carry a weight.
///
/// Fails with `Unreachable` once the open set is exhausted without reaching
/// `goal`, and with `UnknownNode` if `start` is not in the graph.
pub fn dijkstra<G, N, W>(graph: &G, start: &N, goal: &N) -> Result<Vec<N>>
where
    G: GraphOps<N, W>,
    N: Ord + Clone + Debug,
    W: Ord + Copy + Zero + Add<Output = W>,
{
    if !graph.contains(start) {
        return Err(EulerError::UnknownNode(format!("{:?}", start)));
    }
    debug!("Dijkstra from {:?} to {:?} over {} nodes", start, goal, graph.len());

    let mut opened: BinaryHeap<Reverse<(W, N, Option<N>)>> = BinaryHeap::new();
    let mut closed: BTreeMap<N, W> = BTreeMap::new();
    let mut explored: BTreeMap<N, Option<N>> = BTreeMap::new();
    opened.push(Reverse((W::zero(), start.clone(), None)));

    while let Some(Reverse((dist, node, parent))) = opened.pop() {
        if &node == goal {
            let mut path = vec![node];
            let mut current = parent;
            while let Some(p) = current {
                current = explored.get(&p).cloned().flatten();
                path.push(p);
            }
            path.reverse();
            debug!("Reached {:?} in {} steps after exploring {} nodes", goal, path.len() - 1, explored.len());
            return Ok(path);
        }
        if explored.contains_key(&node) {
            continue;
        }

        let adjacency = graph.adjacency(&node);
        explored.insert(node.clone(), parent);
        let Some(adjacency) = adjacency else {
            continue;
        };

        for (neighbor, weight) in adjacency {
            if explored.contains_key(neighbor) {
                continue;
            }
            let weight = (*weight).ok_or_else(|| {
                EulerError::invalid_argument(format!("edge {:?} -> {:?} has no weight", node, neighbor))
            })?;
            let new_cost = dist + weight;
            if let Some(&old_cost) = closed.get(neighbor) {
                if old_cost <= new_cost {
                    continue;
                }
            }
            trace!("Improved tentative cost of {:?} via {:?}", neighbor, node);
            closed.insert(neighbor.clone(), new_cost);
            opened.push(Reverse((new_cost, neighbor.clone(), Some(node.clone()))));
        }
    }

    Err(EulerError::Unreachable {
        start: format!("{:?}", start),
        goal: format!("{:?}", goal),
    })
}

/// Sum of the edge weights along `path`.
pub fn path_cost<G, N, W>(graph: &G, path: &[N]) -> Result<W>
where
    G: GraphOps<N, W>,
    N: Ord + Clone + Debug,
    W: Copy + Zero + Add<Output = W>,
{
    let mut total = W::zero();
    for step in path.windows(2) {
        let (u, v) = (&step[0], &step[1]);
        match graph.weight(u, v) {
            Some(Some(&weight)) => total = total + weight,
            Some(None) => {
                return Err(EulerError::invalid_argument(format!("edge {:?} -> {:?} has no weight", u, v)))
            }
            None => return Err(EulerError::invalid_argument(format!("no edge {:?} -> {:?}", u, v))),
        }
    }
    Ok(total)
}
