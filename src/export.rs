use std::collections::HashMap;
use std::fmt::Write as _;

use petgraph::stable_graph::NodeIndex;
use serde::{Deserialize, Serialize};

use crate::Graph;

/// Scale of one canvas unit in the TikZ picture, in centimeters.
const TIKZ_UNIT_CM: f32 = 0.01;

/// The two text formats a graph snapshot can be exported to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Tikz,
    Listing,
}

/// Numbers the nodes 0-based in snapshot order; export indices are
/// positions in this sequence, not raw graph indices.
fn sequence_numbers(g: &Graph) -> HashMap<NodeIndex, usize> {
    g.nodes().enumerate().map(|(i, (idx, _))| (idx, i)).collect()
}

/// Renders the graph as a `TikZ` picture: one `\draw` directive per edge
/// followed by one `\filldraw` circle per node, using raw unscaled
/// coordinates rounded to the nearest integer. Each unordered pair is
/// emitted exactly once.
pub fn to_tikz(g: &Graph) -> String {
    let mut t = format!("\\begin{{tikzpicture}}[x={TIKZ_UNIT_CM:.6}cm, y={TIKZ_UNIT_CM:.6}cm]\r");

    for (a, b) in g.edge_pairs() {
        let (Some(na), Some(nb)) = (g.node(a), g.node(b)) else {
            continue;
        };
        let (pa, pb) = (na.location(), nb.location());
        let _ = write!(
            t,
            "\\draw[very thick] ({:.0}, {:.0}) -- ({:.0}, {:.0});\r",
            pa.x, pa.y, pb.x, pb.y
        );
    }

    for (_, n) in g.nodes() {
        let p = n.location();
        let _ = write!(
            t,
            "\\filldraw[fill=white, draw=black] ({:.0}, {:.0}) circle [radius = 2pt];\r",
            p.x, p.y
        );
    }

    t.push_str("\\end{tikzpicture}\n");
    t
}

/// Renders the graph as Python list literals: a coordinate list in node
/// order followed by an adjacency list of 0-based index pairs, lower index
/// first. An empty graph still yields valid (empty) list syntax.
pub fn to_listing(g: &Graph) -> String {
    let seq = sequence_numbers(g);

    let coords: Vec<String> = g
        .nodes()
        .map(|(_, n)| {
            let p = n.location();
            format!("[{:.0}, {:.0}]", p.x, p.y)
        })
        .collect();

    let mut adjacency: Vec<(usize, usize)> = g
        .edge_pairs()
        .map(|(a, b)| {
            let (u, v) = (seq[&a], seq[&b]);
            (u.min(v), u.max(v))
        })
        .collect();
    adjacency.sort_unstable();
    let adjacency: Vec<String> = adjacency
        .iter()
        .map(|(u, v)| format!("[{u}, {v}]"))
        .collect();

    format!(
        "GraphNodes = [{}];  GraphEdges = [{}]",
        coords.join(", "),
        adjacency.join(", ")
    )
}
