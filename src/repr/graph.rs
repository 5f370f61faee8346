use std::{fmt::Debug, hash::Hash, marker::PhantomData};

use fxhash::{FxHashMap, FxHashSet};
use itertools::Either;
use tracing::trace;

use super::Vertex;
use crate::{
    edge::EdgeRecord,
    error::{GraphError, Result},
    ops::*,
    testing::test_graph_store,
    *,
};

/// A mutable graph with keyed vertices and optionally weighted edges.
///
/// # Type parameters
/// - `K`: vertex key; unique within the graph.
/// - `W`: edge weight; edges may also be inserted without a weight.
/// - `D`: [`Directed`] or [`Undirected`]; fixed at construction.
///
/// Vertices and edge records are kept in flat arenas addressed by [`Node`] and [`EdgeId`].
/// Undirected edges are stored as two twin records so that traversal from either endpoint is
/// `O(degree)`. Cloning produces a fully independent deep copy.
#[derive(Clone, Debug)]
pub struct Graph<K, W = (), D = Directed> {
    vertices: Vec<Option<Vertex<K>>>,
    free_vertices: Vec<Node>,
    index: FxHashMap<K, Node>,
    edges: Vec<Option<EdgeRecord<W>>>,
    free_edges: Vec<EdgeId>,
    num_vertices: NumNodes,
    num_edges: NumEdges,
    _dir: PhantomData<D>,
}

/// Directed graph
pub type DiGraph<K, W = ()> = Graph<K, W, Directed>;

/// Undirected graph
pub type UnGraph<K, W = ()> = Graph<K, W, Undirected>;

impl<K, W, D> Default for Graph<K, W, D> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            free_vertices: Vec::new(),
            index: FxHashMap::default(),
            edges: Vec::new(),
            free_edges: Vec::new(),
            num_vertices: 0,
            num_edges: 0,
            _dir: PhantomData,
        }
    }
}

impl<K, W, D> Graph<K, W, D> {
    /// ** Panics if `u` is not live **
    fn slot(&self, u: Node) -> &Vertex<K> {
        match self.vertices.get(u as usize) {
            Some(Some(vertex)) => vertex,
            _ => panic!("node {u} is not part of the graph"),
        }
    }

    /// ** Panics if `u` is not live **
    fn slot_mut(&mut self, u: Node) -> &mut Vertex<K> {
        match self.vertices.get_mut(u as usize) {
            Some(Some(vertex)) => vertex,
            _ => panic!("node {u} is not part of the graph"),
        }
    }

    /// ** Panics if `e` is not live **
    fn record(&self, e: EdgeId) -> &EdgeRecord<W> {
        match self.edges.get(e as usize) {
            Some(Some(record)) => record,
            _ => panic!("edge {e} is not part of the graph"),
        }
    }

    /// ** Panics if `e` is not live **
    fn record_mut(&mut self, e: EdgeId) -> &mut EdgeRecord<W> {
        match self.edges.get_mut(e as usize) {
            Some(Some(record)) => record,
            _ => panic!("edge {e} is not part of the graph"),
        }
    }

    fn edge_ref(&self, e: EdgeId) -> EdgeRef<'_, K, W> {
        let record = self.record(e);
        EdgeRef {
            source: &self.slot(record.source).key,
            target: &self.slot(record.target).key,
            weight: record.weight.as_ref(),
        }
    }

    fn alloc_edge(&mut self, record: EdgeRecord<W>) -> EdgeId {
        match self.free_edges.pop() {
            Some(e) => {
                self.edges[e as usize] = Some(record);
                e
            }
            None => {
                self.edges.push(Some(record));
                (self.edges.len() - 1) as EdgeId
            }
        }
    }

    /// ** Panics if `e` is not live **
    fn release_edge(&mut self, e: EdgeId) -> EdgeRecord<W> {
        match self.edges.get_mut(e as usize).and_then(Option::take) {
            Some(record) => {
                self.free_edges.push(e);
                record
            }
            None => panic!("edge {e} is not part of the graph"),
        }
    }

    /// Returns the record `u -> v` if present
    fn find_edge(&self, u: Node, v: Node) -> Option<EdgeId> {
        self.slot(u)
            .out_edges
            .iter()
            .copied()
            .find(|&e| self.record(e).target == v)
    }

    /// Number of vertices in the graph
    pub fn vertices_count(&self) -> usize {
        self.num_vertices as usize
    }

    /// Number of logical edges in the graph; an undirected edge counts once
    pub fn edges_count(&self) -> usize {
        self.num_edges as usize
    }

    /// Iterates over all vertex keys in arena order
    pub fn vertices(&self) -> impl Iterator<Item = &K> + '_ {
        self.vertices.iter().flatten().map(|v| &v.key)
    }

    /// Iterates over all logical edges; for undirected graphs each edge is reported once
    pub fn all_edges(&self) -> impl Iterator<Item = EdgeRef<'_, K, W>> + '_
    where
        D: Direction,
    {
        self.edges.iter().enumerate().filter_map(move |(e, record)| {
            let record = record.as_ref()?;
            let e = e as EdgeId;
            (D::DIRECTED || e <= record.twin).then(|| self.edge_ref(e))
        })
    }
}

impl<K, W, D> Graph<K, W, D>
where
    K: Eq + Hash + Clone + Debug,
    W: Clone,
    D: Direction,
{
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with space reserved for `vertices` vertices and `edges` edges
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        let records = if D::DIRECTED { edges } else { 2 * edges };
        Self {
            vertices: Vec::with_capacity(vertices),
            index: FxHashMap::with_capacity_and_hasher(vertices, Default::default()),
            edges: Vec::with_capacity(records),
            ..Self::default()
        }
    }

    /// Creates a graph from a list of vertices and unweighted edges between them.
    ///
    /// # Errors
    /// Fails like [`Graph::add_vertices`] and [`Graph::add_edges`].
    pub fn from_edges<V, E>(vertices: V, edges: E) -> Result<Self>
    where
        V: IntoIterator<Item = K>,
        E: IntoIterator<Item = (K, K)>,
    {
        let mut graph = Self::new();
        graph.add_vertices(vertices)?;
        graph.add_edges(edges)?;
        Ok(graph)
    }

    /// Creates a graph from a list of vertices and weighted edges between them.
    ///
    /// # Errors
    /// Fails like [`Graph::add_vertices`] and [`Graph::add_weighted_edges`].
    pub fn from_weighted_edges<V, E>(vertices: V, edges: E) -> Result<Self>
    where
        V: IntoIterator<Item = K>,
        E: IntoIterator<Item = (K, K, W)>,
    {
        let mut graph = Self::new();
        graph.add_vertices(vertices)?;
        graph.add_weighted_edges(edges)?;
        Ok(graph)
    }

    fn node_or_err(&self, key: &K) -> Result<Node> {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| GraphError::vertex_not_found(key))
    }

    /// Returns *true* if a vertex with this key exists
    pub fn contains_vertex(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the vertex stored under `key`
    pub fn vertex(&self, key: &K) -> Option<&Vertex<K>> {
        self.index.get(key).map(|&u| self.slot(u))
    }

    /// Returns *true* if the edge `(source, target)` exists.
    /// Missing vertices simply yield *false*.
    pub fn has_edge(&self, source: &K, target: &K) -> bool {
        match (self.index.get(source), self.index.get(target)) {
            (Some(&u), Some(&v)) => self.find_edge(u, v).is_some(),
            _ => false,
        }
    }

    /// Returns the weight of the edge `(source, target)` if the edge exists and carries one
    pub fn edge_weight(&self, source: &K, target: &K) -> Option<&W> {
        let u = *self.index.get(source)?;
        let v = *self.index.get(target)?;
        self.record(self.find_edge(u, v)?).weight.as_ref()
    }

    /// Iterates over the outgoing edges of `key` in insertion order.
    /// For undirected graphs these are all incident edges, each oriented away from `key`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `key` is absent.
    pub fn edges(&self, key: &K) -> Result<impl Iterator<Item = EdgeRef<'_, K, W>> + '_> {
        let u = self.node_or_err(key)?;
        Ok(self
            .slot(u)
            .out_edges
            .iter()
            .map(move |&e| self.edge_ref(e)))
    }

    /// Iterates over the incoming edges of `key`.
    /// For undirected graphs these are all incident edges, each oriented towards `key`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `key` is absent.
    pub fn in_edges(&self, key: &K) -> Result<impl Iterator<Item = EdgeRef<'_, K, W>> + '_> {
        let u = self.node_or_err(key)?;
        let vertex = self.slot(u);
        let ids = if D::DIRECTED {
            Either::Left(vertex.in_edges.iter().copied())
        } else {
            Either::Right(vertex.out_edges.iter().map(move |&e| self.record(e).twin))
        };
        Ok(ids.map(move |e| self.edge_ref(e)))
    }

    /// Iterates over the keys of all outgoing neighbors of `key`
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `key` is absent.
    pub fn neighbors(&self, key: &K) -> Result<impl Iterator<Item = &K> + '_> {
        Ok(self.edges(key)?.map(|e| e.target()))
    }

    /// Adds an isolated vertex.
    ///
    /// # Errors
    /// [`GraphError::DuplicateVertex`] if the key is already present.
    pub fn add_vertex(&mut self, key: K) -> Result<()> {
        if self.index.contains_key(&key) {
            return Err(GraphError::duplicate_vertex(&key));
        }

        let vertex = Vertex::new(key.clone());
        let u = match self.free_vertices.pop() {
            Some(u) => {
                self.vertices[u as usize] = Some(vertex);
                u
            }
            None => {
                self.vertices.push(Some(vertex));
                (self.vertices.len() - 1) as Node
            }
        };

        self.index.insert(key, u);
        self.num_vertices += 1;
        trace!(node = u, "added vertex");
        Ok(())
    }

    /// Adds all vertices or none of them.
    ///
    /// # Errors
    /// [`GraphError::DuplicateVertex`] if any key is already present or occurs twice.
    pub fn add_vertices<I>(&mut self, keys: I) -> Result<()>
    where
        I: IntoIterator<Item = K>,
    {
        let keys: Vec<K> = keys.into_iter().collect();

        let mut seen = FxHashSet::default();
        for key in &keys {
            if self.index.contains_key(key) || !seen.insert(key) {
                return Err(GraphError::duplicate_vertex(key));
            }
        }

        for key in keys {
            self.add_vertex(key)?;
        }
        Ok(())
    }

    /// Removes a vertex together with every edge incident to it.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if the key is absent.
    pub fn remove_vertex(&mut self, key: &K) -> Result<()> {
        let u = self.node_or_err(key)?;
        let vertex = match self.vertices[u as usize].take() {
            Some(vertex) => vertex,
            None => panic!("index points to freed node {u}"),
        };

        // records u -> x
        for e in vertex.out_edges {
            let record = self.release_edge(e);
            if D::DIRECTED {
                if record.target != u {
                    self.slot_mut(record.target).detach_in(e);
                }
            } else if record.twin != e {
                self.slot_mut(record.target).detach_out(record.twin);
                self.release_edge(record.twin);
            }
            self.num_edges -= 1;
        }

        // records x -> u; self-loops were already released above
        for e in vertex.in_edges {
            if self.edges[e as usize].is_none() {
                continue;
            }
            let record = self.release_edge(e);
            self.slot_mut(record.source).detach_out(e);
            self.num_edges -= 1;
        }

        self.index.remove(key);
        self.free_vertices.push(u);
        self.num_vertices -= 1;
        trace!(node = u, "removed vertex");
        Ok(())
    }

    /// Adds the unweighted edge `(source, target)`.
    ///
    /// # Errors
    /// See [`Graph::insert_edge`].
    pub fn add_edge(&mut self, source: &K, target: &K) -> Result<()> {
        self.insert_edge(source, target, None)
    }

    /// Adds the edge `(source, target)` with weight `weight`.
    ///
    /// # Errors
    /// See [`Graph::insert_edge`].
    pub fn add_weighted_edge(&mut self, source: &K, target: &K, weight: W) -> Result<()> {
        self.insert_edge(source, target, Some(weight))
    }

    /// Adds the edge `(source, target)` with an optional weight.
    /// In undirected graphs the mirrored half `(target, source)` is inserted with the same weight.
    ///
    /// # Errors
    /// - [`GraphError::VertexNotFound`] if an endpoint is absent,
    /// - [`GraphError::DuplicateEdge`] if the edge already exists.
    pub fn insert_edge(&mut self, source: &K, target: &K, weight: Option<W>) -> Result<()> {
        let u = self.node_or_err(source)?;
        let v = self.node_or_err(target)?;

        if self.find_edge(u, v).is_some() {
            return Err(GraphError::duplicate_edge(source, target));
        }

        self.link(u, v, weight);
        Ok(())
    }

    /// Adds all unweighted edges or none of them.
    ///
    /// # Errors
    /// Fails like [`Graph::insert_edge`], also if the same edge occurs twice in `edges`.
    pub fn add_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, K)>,
    {
        self.insert_edges(edges.into_iter().map(|(s, t)| (s, t, None)))
    }

    /// Adds all weighted edges or none of them.
    ///
    /// # Errors
    /// Fails like [`Graph::insert_edge`], also if the same edge occurs twice in `edges`.
    pub fn add_weighted_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, K, W)>,
    {
        self.insert_edges(edges.into_iter().map(|(s, t, w)| (s, t, Some(w))))
    }

    fn insert_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: Iterator<Item = (K, K, Option<W>)>,
    {
        let mut resolved = Vec::new();
        let mut batch = FxHashSet::default();

        for (source, target, weight) in edges {
            let u = self.node_or_err(&source)?;
            let v = self.node_or_err(&target)?;

            let edge = if D::DIRECTED {
                Edge(u, v)
            } else {
                Edge(u, v).normalized()
            };

            if self.find_edge(u, v).is_some() || !batch.insert(edge) {
                return Err(GraphError::duplicate_edge(&source, &target));
            }
            resolved.push((u, v, weight));
        }

        for (u, v, weight) in resolved {
            self.link(u, v, weight);
        }
        Ok(())
    }

    /// Removes the edge `(source, target)` (both halves in undirected graphs) and returns its weight.
    ///
    /// # Errors
    /// [`GraphError::EdgeNotFound`] if the edge or one of its endpoints is absent.
    pub fn remove_edge(&mut self, source: &K, target: &K) -> Result<Option<W>> {
        let e = match (self.index.get(source), self.index.get(target)) {
            (Some(&u), Some(&v)) => self.find_edge(u, v),
            _ => None,
        }
        .ok_or_else(|| GraphError::edge_not_found(source, target))?;

        Ok(self.unlink(e))
    }

    /// Inserts the records of a new edge; all preconditions are checked by the caller
    fn link(&mut self, u: Node, v: Node, weight: Option<W>) {
        if D::DIRECTED {
            let e = self.alloc_edge(EdgeRecord {
                source: u,
                target: v,
                weight,
                twin: INVALID_EDGE,
            });
            self.slot_mut(u).out_edges.push(e);
            self.slot_mut(v).in_edges.push(e);
        } else if u == v {
            let e = self.alloc_edge(EdgeRecord {
                source: u,
                target: u,
                weight,
                twin: INVALID_EDGE,
            });
            self.record_mut(e).twin = e;
            self.slot_mut(u).out_edges.push(e);
        } else {
            let e = self.alloc_edge(EdgeRecord {
                source: u,
                target: v,
                weight: weight.clone(),
                twin: INVALID_EDGE,
            });
            let f = self.alloc_edge(EdgeRecord {
                source: v,
                target: u,
                weight,
                twin: e,
            });
            self.record_mut(e).twin = f;
            self.slot_mut(u).out_edges.push(e);
            self.slot_mut(v).out_edges.push(f);
        }

        self.num_edges += 1;
        trace!(source = u, target = v, "added edge");
    }

    /// Removes the records of an existing edge
    fn unlink(&mut self, e: EdgeId) -> Option<W> {
        let record = self.release_edge(e);
        self.slot_mut(record.source).detach_out(e);

        if D::DIRECTED {
            self.slot_mut(record.target).detach_in(e);
        } else if record.twin != e {
            self.slot_mut(record.target).detach_out(record.twin);
            self.release_edge(record.twin);
        }

        self.num_edges -= 1;
        trace!(
            source = record.source,
            target = record.target,
            "removed edge"
        );
        record.weight
    }
}

impl<K, W, D> GraphType for Graph<K, W, D>
where
    D: Direction,
{
    type Dir = D;
}

impl<K, W, D> GraphNodeOrder for Graph<K, W, D> {
    fn number_of_nodes(&self) -> NumNodes {
        self.num_vertices
    }

    fn node_bound(&self) -> usize {
        self.vertices.len()
    }

    fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(u, v)| v.is_some().then_some(u as Node))
    }
}

impl<K, W, D> GraphEdgeOrder for Graph<K, W, D> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<K, W, D> AdjacencyList for Graph<K, W, D> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.slot(u)
            .out_edges
            .iter()
            .map(move |&e| self.record(e).target)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.slot(u).degree()
    }

    fn ith_neighbor(&self, u: Node, i: NumNodes) -> Node {
        self.record(self.slot(u).out_edges[i as usize]).target
    }

    fn incident_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        // undirected graphs keep no incoming lists, so the chain only adds in directed graphs
        let vertex = self.slot(u);
        self.neighbors_of(u).chain(
            vertex
                .in_edges
                .iter()
                .map(move |&e| self.record(e).source),
        )
    }
}

impl<K, W> DirectedAdjacencyList for Graph<K, W, Directed> {
    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.slot(u).in_degree()
    }
}

impl<K, W, D> WeightedAdjacencyList for Graph<K, W, D> {
    type Weight = W;

    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Option<&W>)> + '_ {
        self.slot(u).out_edges.iter().map(move |&e| {
            let record = self.record(e);
            (record.target, record.weight.as_ref())
        })
    }
}

impl<K, W, D> KeyedGraph for Graph<K, W, D>
where
    K: Eq + Hash + Clone + Debug,
{
    type Key = K;

    fn key_of(&self, u: Node) -> &K {
        &self.slot(u).key
    }

    fn node_of(&self, key: &K) -> Option<Node> {
        self.index.get(key).copied()
    }
}

test_graph_store!(test_directed_store, DiGraph, false);
test_graph_store!(test_undirected_store, UnGraph, true);

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn vertex_count_follows_insertions() {
        let mut graph: UnGraph<&str> = Graph::new();
        for (i, key) in ["a", "b", "c", "d"].into_iter().enumerate() {
            graph.add_vertex(key).unwrap();
            assert_eq!(graph.vertices_count(), i + 1);
        }

        assert_eq!(
            graph.add_vertex("c"),
            Err(GraphError::DuplicateVertex("\"c\"".into()))
        );
        assert_eq!(graph.vertices_count(), 4);
    }

    #[test]
    fn undirected_edges_are_symmetric() {
        let graph: UnGraph<&str, u32> =
            Graph::from_weighted_edges(["a", "b", "c"], [("a", "b", 3), ("b", "c", 5)]).unwrap();

        assert!(graph.has_edge(&"a", &"b"));
        assert!(graph.has_edge(&"b", &"a"));
        assert_eq!(graph.edge_weight(&"b", &"a"), Some(&3));
        assert_eq!(graph.edge_weight(&"c", &"b"), Some(&5));
        assert!(!graph.has_edge(&"a", &"c"));
        assert_eq!(graph.edges_count(), 2);
        assert_eq!(graph.vertex(&"b").unwrap().degree(), 2);
        assert_eq!(graph.vertex(&"b").unwrap().key(), &"b");

        let incoming = graph
            .in_edges(&"b")
            .unwrap()
            .map(|e| (*e.source(), *e.target()))
            .collect_vec();
        assert_eq!(incoming, vec![("a", "b"), ("c", "b")]);
    }

    #[test]
    fn directed_edges_have_orientation() {
        let graph: DiGraph<u32> = Graph::from_edges(0..3, [(0, 1), (1, 2), (2, 2)]).unwrap();

        assert!(graph.has_edge(&0, &1));
        assert!(!graph.has_edge(&1, &0));
        assert!(graph.has_edge(&2, &2));
        assert_eq!(graph.vertex(&2).unwrap().in_degree(), 2);
        assert_eq!(graph.vertex(&2).unwrap().degree(), 1);
        assert_eq!(
            graph.neighbors(&1).unwrap().copied().collect_vec(),
            vec![2]
        );
    }

    #[test]
    fn failed_mutations_leave_graph_unchanged() {
        let mut graph: UnGraph<u32, i64> =
            Graph::from_weighted_edges(0..4, [(0, 1, 1), (1, 2, 2)]).unwrap();
        let before = graph.all_edges().map(|e| (*e.source(), *e.target())).collect_vec();

        assert_eq!(
            graph.add_edge(&0, &9),
            Err(GraphError::VertexNotFound("9".into()))
        );
        assert_eq!(
            graph.add_weighted_edge(&1, &0, 7),
            Err(GraphError::DuplicateEdge("1".into(), "0".into()))
        );
        assert_eq!(
            graph.remove_edge(&0, &3),
            Err(GraphError::EdgeNotFound("0".into(), "3".into()))
        );
        assert_eq!(
            graph.remove_vertex(&5),
            Err(GraphError::VertexNotFound("5".into()))
        );

        // the second edge is a duplicate of the first one in an undirected graph
        assert!(graph.add_edges([(2, 3), (3, 2)]).is_err());
        assert!(!graph.has_edge(&2, &3));
        assert!(graph.add_vertices([7, 8, 7]).is_err());
        assert!(!graph.contains_vertex(&7));

        let after = graph.all_edges().map(|e| (*e.source(), *e.target())).collect_vec();
        assert_eq!(before, after);
        assert_eq!(graph.edge_weight(&0, &1), Some(&1));
        assert_eq!(graph.vertices_count(), 4);
        assert_eq!(graph.edges_count(), 2);
    }

    #[test]
    fn remove_vertex_cascades() {
        let mut graph: DiGraph<&str> = Graph::from_edges(
            ["a", "b", "c"],
            [("a", "b"), ("b", "a"), ("b", "c"), ("c", "b"), ("b", "b")],
        )
        .unwrap();

        graph.remove_vertex(&"b").unwrap();
        assert_eq!(graph.edges_count(), 0);
        for x in ["a", "b", "c"] {
            assert!(!graph.has_edge(&"b", &x));
            assert!(!graph.has_edge(&x, &"b"));
        }
        assert_eq!(graph.vertex(&"a").unwrap().degree(), 0);
        assert_eq!(graph.vertex(&"c").unwrap().in_degree(), 0);

        // the freed slot is recycled
        graph.add_vertex("d").unwrap();
        assert_eq!(graph.node_bound(), 3);
        assert_eq!(graph.vertices().copied().collect_vec(), vec!["a", "d", "c"]);
    }

    #[test]
    fn remove_edge_returns_weight() {
        let mut graph: UnGraph<char, f64> =
            Graph::from_weighted_edges(['x', 'y'], [('x', 'y', 0.5), ('y', 'y', 2.0)]).unwrap();

        assert_eq!(graph.remove_edge(&'y', &'x'), Ok(Some(0.5)));
        assert!(!graph.has_edge(&'x', &'y'));
        assert_eq!(graph.remove_edge(&'y', &'y'), Ok(Some(2.0)));
        assert_eq!(graph.edges_count(), 0);

        graph.add_edge(&'x', &'y').unwrap();
        assert_eq!(graph.edge_weight(&'x', &'y'), None);
        assert!(graph.has_edge(&'y', &'x'));
    }

    #[test]
    fn clone_is_independent() {
        let original: UnGraph<u32, u32> =
            Graph::from_weighted_edges(0..3, [(0, 1, 4), (1, 2, 6)]).unwrap();
        let mut copy = original.clone();

        copy.remove_vertex(&1).unwrap();
        copy.add_weighted_edge(&0, &2, 9).unwrap();

        assert_eq!(original.vertices_count(), 3);
        assert_eq!(original.edge_weight(&1, &0), Some(&4));
        assert!(!original.has_edge(&0, &2));
        assert_eq!(copy.edges_count(), 1);
    }
}
