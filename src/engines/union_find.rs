//! Weighted disjoint-set forest with full path compression.
//!
//! `find` walks parent pointers to the root, then repoints *every* node it
//! visited directly at that root. `union` attaches the lower-rank root under
//! the higher-rank root; on a rank tie the first root wins and its rank
//! increments, a fixed side so results are deterministic.

/// Result of a union attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnionOutcome {
    /// The two elements were in different sets and are now joined.
    Unified,
    /// The two elements already shared a root; joining them would close a
    /// cycle.
    AlreadyUnified,
}

/// Disjoint-set forest over elements `0..n`.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    /// `n` singleton sets: every element is its own root with rank 0.
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn parent_slice(&self) -> &[usize] {
        &self.parent
    }

    pub fn rank_slice(&self) -> &[u32] {
        &self.rank
    }

    /// Representative of the set containing `x`, compressing the whole path.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Second pass: repoint every visited node at the root.
        let mut node = x;
        while self.parent[node] != node {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Join the sets containing `i` and `j` by rank.
    pub fn union(&mut self, i: usize, j: usize) -> UnionOutcome {
        let ri = self.find(i);
        let rj = self.find(j);
        if ri == rj {
            return UnionOutcome::AlreadyUnified;
        }
        if self.rank[ri] < self.rank[rj] {
            self.parent[ri] = rj;
        } else if self.rank[ri] > self.rank[rj] {
            self.parent[rj] = ri;
        } else {
            self.parent[rj] = ri;
            self.rank[ri] += 1;
        }
        UnionOutcome::Unified
    }
}
