//! Morris in-order traversal: threaded, O(1) auxiliary space.
//!
//! Nodes live in an arena (`Vec<TreeNode>` indexed by [`NodeId`]), so ids are
//! per-run and never shared process state. A node's `right` field always
//! holds the *structural* right child; the transient threads live in a
//! separate `FxHashMap<NodeId, NodeId>` (predecessor → ancestor). Removing a
//! thread is a map removal, so the structural pointer is restored by
//! construction even when a deeper thread exists. When the loop ends the
//! thread map is empty and the tree is bit-for-bit what it started as.

use rustc_hash::FxHashMap;

use crate::trace::{Location, TraceBuilder};

/// Reference pseudocode rendered by the UI; step line indices point here.
pub const PSEUDOCODE: &[&str] = &[
    "current = root",
    "while current != null:",
    "  if current.left == null:",
    "    visit current; current = current.right",
    "  else:",
    "    pred = rightmost node of current.left",
    "    if pred.right == null:",
    "      thread pred.right -> current; descend left",
    "    else:  (thread back to current)",
    "      remove thread; visit current; go right",
];

const L_START: usize = 0;
const L_VISIT_LEAFLEFT: usize = 3;
const L_PRED_WALK: usize = 5;
const L_THREAD: usize = 7;
const L_UNTHREAD: usize = 9;

/// Arena index of a tree node.
pub type NodeId = usize;

/// A binary tree node. `right` is always the structural child; threads are
/// tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeNode {
    pub value: i64,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

/// An arena-allocated binary tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Tree {
    pub nodes: Vec<TreeNode>,
    pub root: Option<NodeId>,
}

impl Tree {
    /// In-order values by the standard recursive definition. Used as the
    /// reference the Morris order must match.
    pub fn recursive_inorder(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.nodes.len());
        fn walk(tree: &Tree, node: Option<NodeId>, out: &mut Vec<i64>) {
            if let Some(id) = node {
                walk(tree, tree.nodes[id].left, out);
                out.push(tree.nodes[id].value);
                walk(tree, tree.nodes[id].right, out);
            }
        }
        walk(self, self.root, &mut out);
        out
    }
}

/// Frozen state of the traversal at one step.
#[derive(Debug, Clone)]
pub struct MorrisSnapshot {
    pub nodes: Vec<TreeNode>,
    /// Transient threads: predecessor id → ancestor id it points back to.
    pub threads: FxHashMap<NodeId, NodeId>,
    pub current: Option<NodeId>,
    pub predecessor: Option<NodeId>,
    /// Values visited so far, in order.
    pub visited: Vec<i64>,
}

/// One traversal run: owns its tree copy, thread map, and result.
#[derive(Debug)]
pub struct MorrisTraversal {
    tree: Tree,
    threads: FxHashMap<NodeId, NodeId>,
    visited: Vec<i64>,
}

impl MorrisTraversal {
    pub fn new(tree: Tree) -> Self {
        MorrisTraversal {
            tree,
            threads: FxHashMap::default(),
            visited: Vec::new(),
        }
    }

    /// The tree after the run. Structural pointers are never mutated, so this
    /// always equals the input tree.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// `right` as the algorithm sees it: the structural child if present,
    /// otherwise the thread out of this node.
    fn effective_right(&self, id: NodeId) -> Option<NodeId> {
        self.tree.nodes[id]
            .right
            .or_else(|| self.threads.get(&id).copied())
    }

    fn snapshot(&self, current: Option<NodeId>, predecessor: Option<NodeId>) -> MorrisSnapshot {
        MorrisSnapshot {
            nodes: self.tree.nodes.clone(),
            threads: self.threads.clone(),
            current,
            predecessor,
            visited: self.visited.clone(),
        }
    }

    /// Run the traversal to completion, returning the visit order.
    pub fn run(&mut self, trace: &mut TraceBuilder<MorrisSnapshot>) -> Vec<i64> {
        let mut current = self.tree.root;

        match current {
            None => {
                trace.push(
                    self.snapshot(None, None),
                    Vec::new(),
                    L_START,
                    "Tree is empty; nothing to traverse".to_string(),
                );
                return Vec::new();
            }
            Some(id) => trace.push(
                self.snapshot(current, None),
                vec![Location::Node(id)],
                L_START,
                format!("Starting at root node {} (value {})", id, self.tree.nodes[id].value),
            ),
        }

        while let Some(cur) = current {
            match self.tree.nodes[cur].left {
                None => {
                    self.visited.push(self.tree.nodes[cur].value);
                    let next = self.effective_right(cur);
                    trace.push(
                        self.snapshot(current, None),
                        vec![Location::Node(cur)],
                        L_VISIT_LEAFLEFT,
                        format!(
                            "No left child: visited node {} (value {})",
                            cur, self.tree.nodes[cur].value
                        ),
                    );
                    current = next;
                }
                Some(left) => {
                    // Rightmost node of the left subtree, stopping at a
                    // thread that already points back at `cur`.
                    let mut pred = left;
                    while let Some(r) = self.effective_right(pred) {
                        if r == cur {
                            break;
                        }
                        pred = r;
                    }
                    trace.push(
                        self.snapshot(current, Some(pred)),
                        vec![Location::Node(cur), Location::Node(pred)],
                        L_PRED_WALK,
                        format!("Predecessor of node {} is node {}", cur, pred),
                    );

                    if self.threads.get(&pred) == Some(&cur) {
                        // Left subtree finished: remove the thread, visit,
                        // move right.
                        self.threads.remove(&pred);
                        self.visited.push(self.tree.nodes[cur].value);
                        let next = self.effective_right(cur);
                        trace.push(
                            self.snapshot(current, Some(pred)),
                            vec![Location::Node(cur), Location::Node(pred)],
                            L_UNTHREAD,
                            format!(
                                "Removed thread {} -> {}; visited node {} (value {})",
                                pred, cur, cur, self.tree.nodes[cur].value
                            ),
                        );
                        current = next;
                    } else {
                        self.threads.insert(pred, cur);
                        trace.push(
                            self.snapshot(Some(left), Some(pred)),
                            vec![Location::Node(cur), Location::Node(pred)],
                            L_THREAD,
                            format!("Created thread {} -> {}; descending left", pred, cur),
                        );
                        current = Some(left);
                    }
                }
            }
        }

        trace.push(
            self.snapshot(None, None),
            Vec::new(),
            L_START,
            format!(
                "Traversal complete: visited {} node(s); no threads remain",
                self.visited.len()
            ),
        );
        self.visited.clone()
    }
}
