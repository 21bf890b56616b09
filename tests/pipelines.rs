use bellman_queens::error::GraphError;
use bellman_queens::graph::bellman_ford::run;
use bellman_queens::graph::loader::{load_file, parse_str};
use bellman_queens::graph::{Distance, report};
use bellman_queens::queens::{BatsatOracle, Placement, SolutionEnumerator};
use itertools::Itertools;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("bellman-queens-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_shortest_path_scenario() {
    let loaded = parse_str("A B 1\nB C 2\nA C 5\n").unwrap();
    let graph = loaded.graph;
    let paths = run(&graph, "A").unwrap();

    assert!(paths.success());
    let distances = graph
        .vertices()
        .map(|(v, label)| (label, paths.distance(v)))
        .collect_vec();
    assert_eq!(
        distances,
        vec![
            ("A", Distance::ZERO),
            ("B", Distance::finite(1.0)),
            ("C", Distance::finite(3.0)),
        ]
    );

    let path = paths.path_to(graph.vertex("C").unwrap()).unwrap();
    let labels = path.iter().map(|&v| graph.label(v)).collect_vec();
    assert_eq!(labels, vec!["A", "B", "C"]);
}

#[test]
fn test_negative_cycle_scenario() {
    let graph = parse_str("A B -1\nB A -1\n").unwrap().graph;
    for source in ["A", "B"] {
        assert!(!run(&graph, source).unwrap().success(), "source {source}");
    }
}

#[test]
fn test_full_report_from_file() {
    let path = temp_file(
        "report.txt",
        "A B 4\nA C 1\nC B 2\n\nB D 1\nE A 3\nbroken line\nD E x\n",
    );
    let loaded = load_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(loaded.skipped.len(), 2);
    let graph = loaded.graph;
    let source = graph.first_vertex().map(|v| graph.label(v)).unwrap();
    assert_eq!(source, "A");

    let paths = run(&graph, source).unwrap();
    let mut out = Vec::new();
    report::write_results(&mut out, &graph, &paths).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\nPlus courts chemins depuis le nœud A:\n\
         Vers B: distance = 3, chemin A -> C -> B\n\
         Vers C: distance = 1, chemin A -> C\n\
         Vers D: distance = 4, chemin A -> C -> B -> D\n\
         Vers E: distance = Inaccessible, chemin -\n"
    );
}

#[test]
fn test_empty_file_is_fatal() {
    let path = temp_file("empty.txt", "\n\nnot an edge\n");
    let result = load_file(&path);
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(result, Err(GraphError::Empty)));
}

#[test]
fn test_unknown_source_is_fatal() {
    let graph = parse_str("A B 1\n").unwrap().graph;
    let err = run(&graph, "Q").unwrap_err();
    assert_eq!(err.to_string(), "source vertex 'Q' does not exist in the graph");
}

fn solutions(n: usize) -> Vec<Placement> {
    let mut enumerator = SolutionEnumerator::new(n, BatsatOracle::new()).unwrap();
    enumerator.solutions().try_collect().unwrap()
}

#[test]
fn test_queens_counts() {
    let counts = (0..=6).map(|n| solutions(n).len()).collect_vec();
    assert_eq!(counts, vec![0, 1, 0, 0, 2, 10, 4]);
}

#[test]
fn test_eight_queens() {
    let mut enumerator = SolutionEnumerator::new(8, BatsatOracle::new()).unwrap();
    let summary = enumerator.enumerate().unwrap();

    assert_eq!(summary.count, 92);
    assert!(summary.first.is_some_and(|first| first.is_solution()));
    assert_eq!(enumerator.blocking_clauses(), 92);
    assert_eq!(enumerator.encoded_clauses().len(), 8 + 728);
}

#[test]
fn test_every_model_is_a_distinct_valid_placement() {
    for n in [4, 5, 6, 7] {
        let placements = solutions(n);
        assert!(placements.iter().all(Placement::is_solution), "n = {n}");
        assert!(placements.iter().all_unique(), "n = {n}");
    }
}

#[test]
fn test_single_queen_board() {
    let placements = solutions(1);
    assert_eq!(placements.len(), 1);
    assert!(placements[0].has_queen(0, 0));
}
