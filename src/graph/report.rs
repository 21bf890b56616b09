//! Console rendering of shortest-path results.

use crate::graph::Graph;
use crate::graph::bellman_ford::ShortestPaths;
use itertools::Itertools;
use std::io::{self, Write};

/// Alert printed instead of the per-vertex lines when a negative cycle is reachable.
pub const NEGATIVE_CYCLE_ALERT: &str =
    "ALERTE : Un cycle de poids négatif a été détecté accessible depuis la source !";

/// Writes the graph summary header.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_summary<W: Write>(out: &mut W, name: &str, graph: &Graph) -> io::Result<()> {
    writeln!(out, "Traitement du graphe: {name}")?;
    writeln!(out, "Nombre de sommets: {}", graph.vertex_count())?;
    writeln!(out, "Nombre d'arêtes: {}", graph.edge_count())
}

/// Writes one line per vertex other than the source, in label order, or the
/// negative-cycle alert.
///
/// ```text
/// Vers C: distance = 3, chemin A -> B -> C
/// Vers D: distance = Inaccessible, chemin -
/// ```
///
/// # Errors
///
/// Propagates write failures.
pub fn write_results<W: Write>(out: &mut W, graph: &Graph, paths: &ShortestPaths) -> io::Result<()> {
    writeln!(
        out,
        "\nPlus courts chemins depuis le nœud {}:",
        graph.label(paths.source())
    )?;

    if !paths.success() {
        return writeln!(out, "{NEGATIVE_CYCLE_ALERT}");
    }

    for (vertex, label) in graph.vertices() {
        if vertex == paths.source() {
            continue;
        }

        match paths.path_to(vertex) {
            Ok(path) => writeln!(
                out,
                "Vers {label}: distance = {}, chemin {}",
                paths.distance(vertex),
                path.iter().map(|&v| graph.label(v)).join(" -> ")
            )?,
            Err(reason) => {
                tracing::debug!(vertex = label, %reason, "no path");
                writeln!(out, "Vers {label}: distance = Inaccessible, chemin -")?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::bellman_ford::run;
    use pretty_assertions::assert_eq;

    fn render(graph: &Graph, source: &str) -> String {
        let paths = run(graph, source).unwrap();
        let mut out = Vec::new();
        write_results(&mut out, graph, &paths).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_results_are_sorted_and_skip_the_source() {
        let graph = Graph::from_edges([
            ("A", "B", 1.0),
            ("B", "C", 2.0),
            ("A", "C", 5.0),
            ("D", "A", 1.0),
        ]);

        assert_eq!(
            render(&graph, "A"),
            "\nPlus courts chemins depuis le nœud A:\n\
             Vers B: distance = 1, chemin A -> B\n\
             Vers C: distance = 3, chemin A -> B -> C\n\
             Vers D: distance = Inaccessible, chemin -\n"
        );
    }

    #[test]
    fn test_fractional_distances() {
        let graph = Graph::from_edges([("a", "b", 0.5), ("b", "c", -2.25)]);
        let text = render(&graph, "a");
        assert!(text.contains("Vers c: distance = -1.75, chemin a -> b -> c"));
    }

    #[test]
    fn test_negative_cycle_replaces_every_line() {
        let graph = Graph::from_edges([("A", "B", -1.0), ("B", "A", -1.0), ("A", "C", 1.0)]);

        assert_eq!(
            render(&graph, "A"),
            format!("\nPlus courts chemins depuis le nœud A:\n{NEGATIVE_CYCLE_ALERT}\n")
        );
    }

    #[test]
    fn test_summary() {
        let graph = Graph::from_edges([("A", "B", 1.0), ("A", "B", 2.0)]);
        let mut out = Vec::new();
        write_summary(&mut out, "g.txt", &graph).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Traitement du graphe: g.txt\nNombre de sommets: 2\nNombre d'arêtes: 2\n"
        );
    }
}
