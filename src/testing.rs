/// Checks every graph store against a set-based model under random mutations
macro_rules! test_graph_store {
    ($env:ident, $graph:ident, $undirected:literal) => {
        #[cfg(test)]
        mod $env {
            use crate::{error::GraphError, ops::*, repr::*};
            use fxhash::FxHashMap;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            type Model = FxHashMap<(u32, u32), u32>;

            fn normalize(u: u32, v: u32) -> (u32, u32) {
                if $undirected && v < u { (v, u) } else { (u, v) }
            }

            fn assert_matches_model(graph: &$graph<u32, u32>, n: u32, vertices: &[u32], edges: &Model) {
                assert_eq!(graph.vertices_count(), vertices.len());
                assert_eq!(graph.number_of_nodes() as usize, vertices.len());
                assert_eq!(graph.edges_count(), edges.len());
                assert_eq!(graph.number_of_edges() as usize, edges.len());
                assert_eq!(graph.all_edges().count(), edges.len());
                assert_eq!(graph.is_directed(), !$undirected);

                assert_eq!(
                    graph.vertices().copied().sorted().collect_vec(),
                    vertices.iter().copied().sorted().collect_vec()
                );

                for u in graph.nodes() {
                    assert_eq!(graph.node_of(graph.key_of(u)), Some(u));
                }

                for u in 0..n {
                    for v in 0..n {
                        let expected = edges.get(&normalize(u, v));
                        assert_eq!(graph.has_edge(&u, &v), expected.is_some());
                        assert_eq!(graph.edge_weight(&u, &v), expected);
                    }
                }

                for &u in vertices {
                    let out_degree = edges
                        .keys()
                        .filter(|&&(a, b)| a == u || ($undirected && b == u))
                        .count();
                    let in_degree = edges
                        .keys()
                        .filter(|&&(a, b)| b == u || ($undirected && a == u))
                        .count();

                    assert_eq!(graph.vertex(&u).unwrap().degree() as usize, out_degree);
                    assert_eq!(graph.edges(&u).unwrap().count(), out_degree);
                    assert_eq!(graph.in_edges(&u).unwrap().count(), in_degree);

                    for e in graph.edges(&u).unwrap() {
                        assert_eq!(*e.source(), u);
                        assert_eq!(e.weight(), edges.get(&normalize(u, *e.target())));
                    }
                    for e in graph.in_edges(&u).unwrap() {
                        assert_eq!(*e.target(), u);
                    }
                }
            }

            #[test]
            fn random_mutations_match_model() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [5u32, 10, 20] {
                    for _ in 0..10 {
                        let mut graph: $graph<u32, u32> = Graph::new();
                        let mut vertices: Vec<u32> = Vec::new();
                        let mut edges = Model::default();

                        for _ in 0..(20 * n) {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);

                            match rng.random_range(0..10) {
                                0..=1 => {
                                    let expected = if vertices.contains(&u) {
                                        Err(GraphError::DuplicateVertex(format!("{u}")))
                                    } else {
                                        vertices.push(u);
                                        Ok(())
                                    };
                                    assert_eq!(graph.add_vertex(u), expected);
                                }
                                2 => {
                                    let expected = if let Some(pos) = vertices.iter().position(|&x| x == u) {
                                        vertices.swap_remove(pos);
                                        edges.retain(|&(a, b), _| a != u && b != u);
                                        Ok(())
                                    } else {
                                        Err(GraphError::VertexNotFound(format!("{u}")))
                                    };
                                    assert_eq!(graph.remove_vertex(&u), expected);
                                }
                                3..=7 => {
                                    let weight = rng.random_range(0..100);
                                    let expected = if !vertices.contains(&u) {
                                        Err(GraphError::VertexNotFound(format!("{u}")))
                                    } else if !vertices.contains(&v) {
                                        Err(GraphError::VertexNotFound(format!("{v}")))
                                    } else if edges.contains_key(&normalize(u, v)) {
                                        Err(GraphError::DuplicateEdge(format!("{u}"), format!("{v}")))
                                    } else {
                                        edges.insert(normalize(u, v), weight);
                                        Ok(())
                                    };
                                    assert_eq!(graph.add_weighted_edge(&u, &v, weight), expected);
                                }
                                _ => {
                                    let expected = match edges.remove(&normalize(u, v)) {
                                        Some(weight) => Ok(Some(weight)),
                                        None => Err(GraphError::EdgeNotFound(format!("{u}"), format!("{v}"))),
                                    };
                                    assert_eq!(graph.remove_edge(&u, &v), expected);
                                }
                            }
                        }

                        assert_matches_model(&graph, n, &vertices, &edges);

                        let copy = graph.clone();
                        for &u in &vertices {
                            graph.remove_vertex(&u).unwrap();
                        }
                        assert!(graph.is_empty());
                        assert_eq!(graph.number_of_edges(), 0);
                        assert_matches_model(&copy, n, &vertices, &edges);
                    }
                }
            }

            #[test]
            fn bulk_insertion_is_atomic() {
                let rng = &mut Pcg64Mcg::seed_from_u64(4);

                for n in [5u32, 10, 20] {
                    let mut graph: $graph<u32, u32> = Graph::with_capacity(n as usize, 0);
                    graph.add_vertices(0..n).unwrap();
                    let mut edges = Model::default();

                    for _ in 0..20 {
                        let batch = (0..rng.random_range(1..5))
                            .map(|_| (rng.random_range(0..n), rng.random_range(0..n), 1))
                            .collect_vec();

                        let mut model = edges.clone();
                        let valid = batch
                            .iter()
                            .all(|&(u, v, w)| model.insert(normalize(u, v), w).is_none());

                        assert_eq!(graph.add_weighted_edges(batch).is_ok(), valid);
                        if valid {
                            edges = model;
                        }
                        assert_matches_model(&graph, n, &(0..n).collect_vec(), &edges);
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_store;

#[cfg(test)]
pub(crate) use oracles::*;
