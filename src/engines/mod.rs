//! Instrumented algorithm engines.
//!
//! Each engine runs the textbook algorithm while appending steps to a
//! [`TraceBuilder`](crate::trace::TraceBuilder): one step per conceptual
//! operation (comparison, swap, union, thread creation, cell mark, ...).
//! Traces are intentionally verbose: pedagogical granularity over speed.
//!
//! - [`heap`]: array-backed binary min-heap priority queue
//! - [`union_find`]: disjoint-set forest with path compression and
//!   union-by-rank
//! - [`kruskal`]: minimum-spanning-tree driver on top of [`union_find`]
//! - [`morris`]: threaded in-order traversal, O(1) auxiliary space
//! - [`maze`]: exhaustive backtracking path search over a grid

pub mod heap;
pub mod kruskal;
pub mod maze;
pub mod morris;
pub mod union_find;
