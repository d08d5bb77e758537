//! Kruskal minimum-spanning-tree driver over [`UnionFind`].
//!
//! Edges are sorted by weight ascending with a stable sort, so equal weights
//! keep their input order. Each edge consideration, the root lookups, the
//! union result, and the running MST cost are all recorded as steps. A graph
//! that runs out of edges before collecting `|V| - 1` of them is disconnected,
//! which the final step reports rather than treating as an error.

use crate::engines::union_find::{UnionFind, UnionOutcome};
use crate::trace::{Location, TraceBuilder};

/// Reference pseudocode rendered by the UI; step line indices point here.
pub const PSEUDOCODE: &[&str] = &[
    "kruskal(V, E):",
    "  sort E by weight ascending (stable)",
    "  for each edge (u, v, w) in E:",
    "    ru = find(u); rv = find(v)",
    "    if ru == rv: skip edge (cycle)",
    "    union(ru, rv); add edge to MST",
    "    if |MST| == V - 1: stop",
    "  if |MST| < V - 1: graph is disconnected",
    "  return MST",
];

const L_SORT: usize = 1;
const L_CONSIDER: usize = 2;
const L_FIND: usize = 3;
const L_CYCLE: usize = 4;
const L_ACCEPT: usize = 5;
const L_COMPLETE: usize = 6;
const L_DISCONNECTED: usize = 7;
const L_RETURN: usize = 8;

/// An undirected weighted edge. Weights are real and may be negative; the
/// sort is purely comparison-based.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
    pub weight: f64,
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} ({})", self.u, self.v, self.weight)
    }
}

/// How the run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MstOutcome {
    /// `|MST| == |V| - 1`: a spanning tree was found.
    Spanning,
    /// Edges ran out first: the graph is disconnected.
    Disconnected,
}

/// Frozen state of the run at one step.
#[derive(Debug, Clone)]
pub struct KruskalSnapshot {
    /// DSU parent array.
    pub parent: Vec<usize>,
    /// DSU rank array.
    pub rank: Vec<u32>,
    /// All edges in sorted order.
    pub edges: Vec<Edge>,
    /// Indices into `edges` accepted into the MST so far.
    pub mst: Vec<usize>,
    /// Running MST cost.
    pub cost: f64,
    /// Roots discovered for the edge under consideration, if any.
    pub roots: Option<(usize, usize)>,
}

/// Result of a full run.
#[derive(Debug, Clone)]
pub struct MstResult {
    pub edges: Vec<Edge>,
    pub cost: f64,
    pub outcome: MstOutcome,
}

fn snapshot(
    dsu: &UnionFind,
    edges: &[Edge],
    mst: &[usize],
    cost: f64,
    roots: Option<(usize, usize)>,
) -> KruskalSnapshot {
    KruskalSnapshot {
        parent: dsu.parent_slice().to_vec(),
        rank: dsu.rank_slice().to_vec(),
        edges: edges.to_vec(),
        mst: mst.to_vec(),
        cost,
        roots,
    }
}

/// Run Kruskal's algorithm over `vertices` vertices and the given edges.
pub fn run(
    vertices: usize,
    mut edges: Vec<Edge>,
    trace: &mut TraceBuilder<KruskalSnapshot>,
) -> MstResult {
    // Stable sort: ties keep input order. total_cmp gives a total order even
    // though weights are floats.
    edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut dsu = UnionFind::new(vertices);
    let mut mst: Vec<usize> = Vec::new();
    let mut cost = 0.0;

    trace.push(
        snapshot(&dsu, &edges, &mst, cost, None),
        Vec::new(),
        L_SORT,
        format!(
            "Sorted {} edge(s) by weight; {} vertex/vertices start as singletons",
            edges.len(),
            vertices
        ),
    );

    let target = vertices.saturating_sub(1);
    let mut complete = vertices <= 1;

    for (idx, edge) in edges.iter().enumerate() {
        if complete {
            break;
        }
        trace.push(
            snapshot(&dsu, &edges, &mst, cost, None),
            vec![
                Location::Edge(idx),
                Location::Vertex(edge.u),
                Location::Vertex(edge.v),
            ],
            L_CONSIDER,
            format!("Considering edge {}", edge),
        );

        let ru = dsu.find(edge.u);
        let rv = dsu.find(edge.v);
        trace.push(
            snapshot(&dsu, &edges, &mst, cost, Some((ru, rv))),
            vec![Location::Vertex(ru), Location::Vertex(rv)],
            L_FIND,
            format!("find({}) = {}, find({}) = {}", edge.u, ru, edge.v, rv),
        );

        match dsu.union(edge.u, edge.v) {
            UnionOutcome::AlreadyUnified => {
                trace.push(
                    snapshot(&dsu, &edges, &mst, cost, Some((ru, rv))),
                    vec![Location::Edge(idx)],
                    L_CYCLE,
                    format!("Skipped edge {}: it would close a cycle", edge),
                );
            }
            UnionOutcome::Unified => {
                mst.push(idx);
                cost += edge.weight;
                trace.push(
                    snapshot(&dsu, &edges, &mst, cost, Some((ru, rv))),
                    vec![Location::Edge(idx)],
                    L_ACCEPT,
                    format!("Added edge {} to the MST; running cost {}", edge, cost),
                );
                if mst.len() == target {
                    complete = true;
                    trace.push(
                        snapshot(&dsu, &edges, &mst, cost, None),
                        Vec::new(),
                        L_COMPLETE,
                        format!("MST complete with {} edge(s)", mst.len()),
                    );
                }
            }
        }
    }

    let outcome = if complete || mst.len() == target {
        MstOutcome::Spanning
    } else {
        MstOutcome::Disconnected
    };

    match outcome {
        MstOutcome::Spanning => trace.push(
            snapshot(&dsu, &edges, &mst, cost, None),
            Vec::new(),
            L_RETURN,
            format!("Spanning tree found: {} edge(s), total cost {}", mst.len(), cost),
        ),
        MstOutcome::Disconnected => trace.push(
            snapshot(&dsu, &edges, &mst, cost, None),
            Vec::new(),
            L_DISCONNECTED,
            format!(
                "Graph is disconnected: only {} of {} required edge(s) found",
                mst.len(),
                target
            ),
        ),
    }

    MstResult {
        edges: mst.iter().map(|&i| edges[i]).collect(),
        cost,
        outcome,
    }
}
