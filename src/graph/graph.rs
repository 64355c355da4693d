// src/graph/graph.rs

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;
use crate::core::{EulerError, Result};

pub type Adjacency<N, W> = BTreeMap<N, Option<W>>;

/// Capabilities shared by the undirected and directed graphs.
///
/// Nodes may be any ordered, cloneable value. Edge weights are optional:
/// `None` means "no weight" and is distinct from a zero weight.
pub trait GraphOps<N, W>
where
    N: Ord + Clone + Debug,
    W: Clone,
{
    /// Fails if `node` is already present.
    fn add_node(&mut self, node: N) -> Result<()>;

    /// Adds the edge, creating either endpoint if it is missing.
    fn add_edge(&mut self, u: N, v: N, weight: Option<W>);

    /// Outgoing adjacency of `node` (all neighbours for an undirected graph).
    fn adjacency(&self, node: &N) -> Option<&Adjacency<N, W>>;

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_>;

    fn weighted_edge_list(&self) -> Vec<(N, N, Option<W>)>;

    fn add_nodes<I: IntoIterator<Item = N>>(&mut self, nodes: I) -> Result<()>
    where
        Self: Sized,
    {
        for node in nodes {
            self.add_node(node)?;
        }
        Ok(())
    }

    fn contains(&self, node: &N) -> bool {
        self.adjacency(node).is_some()
    }

    fn len(&self) -> usize {
        self.nodes().count()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn neighbors(&self, node: &N) -> Result<Vec<N>> {
        self.adjacency(node)
            .map(|adjacent| adjacent.keys().cloned().collect())
            .ok_or_else(|| EulerError::UnknownNode(format!("{:?}", node)))
    }

    /// Weight of the edge u -> v; outer `None` when there is no such edge.
    fn weight<'a>(&'a self, u: &N, v: &N) -> Option<Option<&'a W>>
    where
        N: 'a,
        W: 'a,
    {
        self.adjacency(u)?.get(v).map(Option::as_ref)
    }

    fn edge_list(&self) -> Vec<(N, N)> {
        self.weighted_edge_list().into_iter().map(|(u, v, _)| (u, v)).collect()
    }
}

/// Undirected graph; every edge is stored in both endpoints' adjacency maps.
#[derive(Debug, Clone)]
pub struct Graph<N, W = i64> {
    adj: BTreeMap<N, Adjacency<N, W>>,
}

impl<N, W> Graph<N, W>
where
    N: Ord + Clone + Debug,
    W: Clone,
{
    pub fn new() -> Self {
        Graph { adj: BTreeMap::new() }
    }
}

impl<N, W> Default for Graph<N, W>
where
    N: Ord + Clone + Debug,
    W: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> GraphOps<N, W> for Graph<N, W>
where
    N: Ord + Clone + Debug,
    W: Clone,
{
    fn add_node(&mut self, node: N) -> Result<()> {
        if self.adj.contains_key(&node) {
            return Err(EulerError::DuplicateNode(format!("{:?}", node)));
        }
        self.adj.insert(node, BTreeMap::new());
        Ok(())
    }

    fn add_edge(&mut self, u: N, v: N, weight: Option<W>) {
        self.adj.entry(u.clone()).or_default().insert(v.clone(), weight.clone());
        self.adj.entry(v).or_default().insert(u, weight);
    }

    fn adjacency(&self, node: &N) -> Option<&Adjacency<N, W>> {
        self.adj.get(node)
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.adj.keys())
    }

    fn len(&self) -> usize {
        self.adj.len()
    }

    /// Each undirected edge is reported once, from whichever endpoint is visited first.
    fn weighted_edge_list(&self) -> Vec<(N, N, Option<W>)> {
        let mut seen: BTreeSet<&N> = BTreeSet::new();
        let mut edges = Vec::new();
        for (node, neighbors) in &self.adj {
            for (neighbor, weight) in neighbors {
                if !seen.contains(neighbor) {
                    edges.push((node.clone(), neighbor.clone(), weight.clone()));
                }
            }
            seen.insert(node);
        }
        edges
    }
}

/// Directed graph with separate successor and predecessor maps.
#[derive(Debug, Clone)]
pub struct DiGraph<N, W = i64> {
    succ: BTreeMap<N, Adjacency<N, W>>,
    pred: BTreeMap<N, Adjacency<N, W>>,
}

impl<N, W> DiGraph<N, W>
where
    N: Ord + Clone + Debug,
    W: Clone,
{
    pub fn new() -> Self {
        DiGraph {
            succ: BTreeMap::new(),
            pred: BTreeMap::new(),
        }
    }

    pub fn successors(&self, node: &N) -> Result<Vec<N>> {
        self.neighbors(node)
    }

    pub fn predecessors(&self, node: &N) -> Result<Vec<N>> {
        self.pred
            .get(node)
            .map(|adjacent| adjacent.keys().cloned().collect())
            .ok_or_else(|| EulerError::UnknownNode(format!("{:?}", node)))
    }
}

impl<N, W> Default for DiGraph<N, W>
where
    N: Ord + Clone + Debug,
    W: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> GraphOps<N, W> for DiGraph<N, W>
where
    N: Ord + Clone + Debug,
    W: Clone,
{
    fn add_node(&mut self, node: N) -> Result<()> {
        if self.succ.contains_key(&node) {
            return Err(EulerError::DuplicateNode(format!("{:?}", node)));
        }
        self.succ.insert(node.clone(), BTreeMap::new());
        self.pred.insert(node, BTreeMap::new());
        Ok(())
    }

    fn add_edge(&mut self, u: N, v: N, weight: Option<W>) {
        self.pred.entry(u.clone()).or_default();
        self.succ.entry(v.clone()).or_default();
        self.succ.entry(u.clone()).or_default().insert(v.clone(), weight.clone());
        self.pred.entry(v).or_default().insert(u, weight);
    }

    fn adjacency(&self, node: &N) -> Option<&Adjacency<N, W>> {
        self.succ.get(node)
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.succ.keys())
    }

    fn len(&self) -> usize {
        self.succ.len()
    }

    fn weighted_edge_list(&self) -> Vec<(N, N, Option<W>)> {
        self.succ
            .iter()
            .flat_map(|(node, neighbors)| {
                neighbors
                    .iter()
                    .map(move |(neighbor, weight)| (node.clone(), neighbor.clone(), weight.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructed_empty() {
        let g: Graph<i32> = Graph::new();
        assert_eq!(g.len(), 0);
        assert!(g.is_empty());
    }

    #[test]
    fn test_add_nodes() {
        let mut g: Graph<i32> = Graph::new();
        g.add_nodes([1, 2, 3]).unwrap();
        assert_eq!(g.len(), 3);
        assert!(g.contains(&1) && g.contains(&2) && g.contains(&3));
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let mut g: Graph<i32> = Graph::new();
        g.add_node(1).unwrap();
        assert!(matches!(g.add_node(1), Err(EulerError::DuplicateNode(_))));

        let mut d: DiGraph<i32> = DiGraph::new();
        d.add_edge(1, 2, None);
        assert!(d.add_node(2).is_err());
    }

    #[test]
    fn test_undirected_edge_is_symmetric() {
        let mut g: Graph<i32> = Graph::new();
        g.add_edge(1, 2, Some(54));
        assert_eq!(g.len(), 2);
        assert_eq!(g.weight(&1, &2), Some(Some(&54)));
        assert_eq!(g.weight(&2, &1), Some(Some(&54)));
        assert_eq!(g.weighted_edge_list(), vec![(1, 2, Some(54))]);
    }

    #[test]
    fn test_undirected_edge_list_does_not_duplicate() {
        let mut g: Graph<i32> = Graph::new();
        g.add_edge(1, 2, None);
        g.add_edge(2, 3, None);
        g.add_edge(3, 1, None);
        let edges = g.edge_list();
        assert_eq!(edges.len(), 3);
        assert!(!(edges.contains(&(1, 2)) && edges.contains(&(2, 1))));
    }

    #[test]
    fn test_unweighted_is_not_zero() {
        let mut g: Graph<&str> = Graph::new();
        g.add_edge("a", "b", None);
        g.add_edge("b", "c", Some(0));
        assert_eq!(g.weight(&"a", &"b"), Some(None));
        assert_eq!(g.weight(&"b", &"c"), Some(Some(&0)));
        assert_eq!(g.weight(&"a", &"c"), None);
    }

    #[test]
    fn test_neighbors() {
        let mut g: Graph<i32> = Graph::new();
        g.add_node(1).unwrap();
        assert_eq!(g.neighbors(&1).unwrap(), Vec::<i32>::new());
        g.add_edge(1, 2, None);
        assert_eq!(g.neighbors(&1).unwrap(), vec![2]);
        assert_eq!(g.neighbors(&2).unwrap(), vec![1]);
        assert!(matches!(g.neighbors(&9), Err(EulerError::UnknownNode(_))));
    }

    #[test]
    fn test_digraph_edges_are_one_way() {
        let mut d: DiGraph<i32> = DiGraph::new();
        d.add_edge(1, 2, Some(6));
        d.add_edge(2, 3, None);
        d.add_edge(1, 3, None);
        assert_eq!(d.len(), 3);
        assert_eq!(d.neighbors(&1).unwrap(), vec![2, 3]);
        assert_eq!(d.neighbors(&3).unwrap(), Vec::<i32>::new());
        assert_eq!(d.predecessors(&3).unwrap(), vec![1, 2]);
        assert_eq!(d.successors(&2).unwrap(), vec![3]);
        assert_eq!(d.edge_list(), vec![(1, 2), (1, 3), (2, 3)]);
        assert_eq!(d.weighted_edge_list()[0], (1, 2, Some(6)));
    }

    #[test]
    fn test_digraph_add_node_sets_both_maps() {
        let mut d: DiGraph<i32> = DiGraph::new();
        d.add_nodes([1, 2]).unwrap();
        assert_eq!(d.neighbors(&1).unwrap(), Vec::<i32>::new());
        assert_eq!(d.predecessors(&2).unwrap(), Vec::<i32>::new());
        d.add_edge(1, 2, None);
        assert!(d.adjacency(&1).unwrap().contains_key(&2));
    }

    fn total_weight<G: GraphOps<String, u32>>(graph: &G, path: &[String]) -> u32 {
        path.windows(2)
            .filter_map(|pair| graph.weight(&pair[0], &pair[1]).flatten())
            .sum()
    }

    #[test]
    fn test_weight_through_generic_bound() {
        let mut d: DiGraph<String, u32> = DiGraph::new();
        d.add_edge("a".to_string(), "b".to_string(), Some(4));
        d.add_edge("b".to_string(), "c".to_string(), Some(5));
        let path = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(total_weight(&d, &path), 9);
        assert_eq!(d.weight(&"c".to_string(), &"a".to_string()), None);
    }
}
