use std::collections::{HashMap, HashSet, VecDeque};

use citymst::{Edge, Graph, Kruskal, Prim, SpanningTreeAlgorithm};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn graph(id: i64, nodes: &[&str], edges: &[(&str, &str, i64)]) -> Graph {
    Graph::new(
        id,
        nodes.iter().map(|s| s.to_string()).collect(),
        edges
            .iter()
            .map(|&(from, to, weight)| Edge::new(from, to, weight))
            .collect(),
    )
    .unwrap()
}

/// Random graph whose edges land inside `groups` disjoint node blocks, so the
/// number of components is at least `groups`.
fn random_graph(rng: &mut ChaCha8Rng, id: i64, nodes: usize, groups: usize, density: f64) -> Graph {
    let labels: Vec<String> = (0..nodes).map(|i| format!("v{i}")).collect();
    let mut edges = Vec::new();
    for a in 0..nodes {
        for b in (a + 1)..nodes {
            if a % groups == b % groups && rng.random_bool(density) {
                let weight = rng.random_range(1..=20);
                edges.push(Edge::new(labels[a].clone(), labels[b].clone(), weight));
            }
        }
    }
    Graph::new(id, labels, edges).unwrap()
}

/// Components via plain BFS, independent of the crate's union-find.
fn bfs_components(graph: &Graph) -> usize {
    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in graph.edges() {
        adjacency.entry(&edge.from).or_default().push(&edge.to);
        adjacency.entry(&edge.to).or_default().push(&edge.from);
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut components = 0;
    for node in graph.nodes() {
        if !seen.insert(node) {
            continue;
        }
        components += 1;
        let mut queue = VecDeque::from([node.as_str()]);
        while let Some(current) = queue.pop_front() {
            for &next in adjacency.get(current).into_iter().flatten() {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }
    components
}

/// True when `edges` contains no cycle over the graph's nodes.
fn is_acyclic(graph: &Graph, edges: &[Edge]) -> bool {
    let mut parent: HashMap<&str, &str> = graph
        .nodes()
        .iter()
        .map(|n| (n.as_str(), n.as_str()))
        .collect();
    fn root<'a>(parent: &HashMap<&'a str, &'a str>, mut node: &'a str) -> &'a str {
        while parent[node] != node {
            node = parent[node];
        }
        node
    }
    for edge in edges {
        let a = root(&parent, &edge.from);
        let b = root(&parent, &edge.to);
        if a == b {
            return false;
        }
        parent.insert(a, b);
    }
    true
}

#[test]
fn same_cost_on_reference_graphs() {
    let graphs = [
        graph(1, &["A", "B", "C"], &[("A", "B", 1), ("B", "C", 2), ("A", "C", 3)]),
        graph(
            2,
            &["A", "B", "C", "D", "E"],
            &[
                ("A", "B", 4),
                ("A", "C", 3),
                ("B", "C", 2),
                ("B", "D", 5),
                ("C", "D", 7),
                ("C", "E", 8),
                ("D", "E", 6),
            ],
        ),
        graph(
            3,
            &["A", "B", "C", "D"],
            &[
                ("A", "B", 1),
                ("A", "C", 4),
                ("A", "D", 3),
                ("B", "C", 2),
                ("B", "D", 5),
                ("C", "D", 6),
            ],
        ),
        graph(
            4,
            &["A", "B", "C", "D", "E", "F"],
            &[
                ("A", "B", 2),
                ("A", "C", 3),
                ("B", "C", 1),
                ("B", "D", 5),
                ("C", "D", 4),
                ("C", "E", 6),
                ("D", "E", 2),
                ("D", "F", 3),
                ("E", "F", 1),
            ],
        ),
    ];
    let expected = [3, 16, 6, 10];

    for (g, cost) in graphs.iter().zip(expected) {
        let prim = Prim.find_spanning_tree(g);
        let kruskal = Kruskal.find_spanning_tree(g);

        assert_eq!(prim.total_weight(), cost, "prim cost for graph {}", g.id());
        assert_eq!(kruskal.total_weight(), cost, "kruskal cost for graph {}", g.id());
        assert_eq!(prim.edge_count(), g.vertex_count() - 1);
        assert_eq!(kruskal.edge_count(), g.vertex_count() - 1);
    }
}

#[test]
fn medium_graph_tracks_metrics() {
    let g = graph(
        1,
        &["A", "B", "C", "D", "E", "F", "G", "H"],
        &[
            ("A", "B", 1),
            ("A", "C", 4),
            ("B", "C", 2),
            ("B", "D", 6),
            ("C", "D", 3),
            ("C", "E", 7),
            ("D", "E", 5),
            ("D", "F", 8),
            ("E", "F", 4),
            ("E", "G", 9),
            ("F", "G", 6),
            ("F", "H", 10),
            ("G", "H", 7),
        ],
    );

    let prim = Prim.find_spanning_tree(&g);
    let kruskal = Kruskal.find_spanning_tree(&g);

    assert_eq!(prim.total_weight(), kruskal.total_weight());
    assert_eq!(prim.total_weight(), 28);
    assert_eq!(prim.edge_count(), 7);
    assert_eq!(kruskal.edge_count(), 7);
    assert!(prim.operation_count() > 0);
    assert!(kruskal.operation_count() > 0);
    assert!(prim.elapsed_millis() >= 0.0);
    assert!(kruskal.elapsed_millis() >= 0.0);
}

#[test]
fn random_forests_agree() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);

    for id in 0..60 {
        let nodes = rng.random_range(1..40);
        let groups = rng.random_range(1..=4);
        let density = rng.random_range(0.05..0.9);
        let g = random_graph(&mut rng, id, nodes, groups, density);
        let components = bfs_components(&g);

        let prim = Prim.find_spanning_tree(&g);
        let kruskal = Kruskal.find_spanning_tree(&g);

        assert_eq!(g.component_count(), components, "graph {id}");
        assert_eq!(prim.edge_count(), nodes - components, "prim graph {id}");
        assert_eq!(kruskal.edge_count(), nodes - components, "kruskal graph {id}");
        assert_eq!(prim.total_weight(), kruskal.total_weight(), "graph {id}");
        assert!(is_acyclic(&g, prim.tree_edges()), "prim graph {id}");
        assert!(is_acyclic(&g, kruskal.tree_edges()), "kruskal graph {id}");

        let recomputed: i64 = prim.tree_edges().iter().map(|e| e.weight).sum();
        assert_eq!(recomputed, prim.total_weight());
    }
}

#[test]
fn distinct_weights_give_identical_edge_sets() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let labels: Vec<String> = (0..25).map(|i| format!("d{i}")).collect();
    let mut edges = Vec::new();
    let mut weight = 0;
    for a in 0..labels.len() {
        for b in (a + 1)..labels.len() {
            weight += rng.random_range(1..5);
            if rng.random_bool(0.3) || b == a + 1 {
                edges.push(Edge::new(labels[a].clone(), labels[b].clone(), weight));
            }
        }
    }
    let g = Graph::new(9, labels, edges).unwrap();

    let normalize = |edges: &[Edge]| {
        let mut pairs: Vec<(String, String, i64)> = edges
            .iter()
            .map(|e| {
                let (a, b) = if e.from <= e.to {
                    (e.from.clone(), e.to.clone())
                } else {
                    (e.to.clone(), e.from.clone())
                };
                (a, b, e.weight)
            })
            .collect();
        pairs.sort();
        pairs
    };

    let prim = Prim.find_spanning_tree(&g);
    let kruskal = Kruskal.find_spanning_tree(&g);
    assert_eq!(normalize(prim.tree_edges()), normalize(kruskal.tree_edges()));
}

#[test]
fn repeated_runs_are_deterministic() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let g = random_graph(&mut rng, 1, 30, 2, 0.4);

    for algorithm in [&Prim as &dyn SpanningTreeAlgorithm, &Kruskal] {
        let first = algorithm.find_spanning_tree(&g);
        let second = algorithm.find_spanning_tree(&g);

        assert_eq!(first.tree_edges(), second.tree_edges(), "{}", algorithm.name());
        assert_eq!(first.total_weight(), second.total_weight());
        assert_eq!(first.operation_count(), second.operation_count());
    }
}

#[test]
fn empty_and_single_vertex_graphs() {
    for g in [graph(1, &[], &[]), graph(2, &["A"], &[])] {
        for algorithm in [&Prim as &dyn SpanningTreeAlgorithm, &Kruskal] {
            let result = algorithm.find_spanning_tree(&g);
            assert!(result.tree_edges().is_empty());
            assert_eq!(result.total_weight(), 0);
        }
    }
}
