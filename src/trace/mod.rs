//! Step trace: the data contract shared by every algorithm engine.
//!
//! An engine does not just compute a result: it runs the textbook algorithm
//! while appending [`Step`]s to a [`TraceBuilder`]. Each step carries a deep,
//! independent snapshot of the structure at that instant, the set of logical
//! positions the algorithm is touching, the current pseudocode line, and a
//! human-readable narrative. Finishing the builder yields a [`Trace`], which
//! is immutable: playback only ever reads it by index.
//!
//! Every engine emits at least one step, even for degenerate input (empty
//! array, empty tree), so playback always has a defined initial state.

/// A logical position inside a data structure, used for UI emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// An index into an array-backed structure (heap slot, DSU element).
    Slot(usize),
    /// A tree node id (arena index).
    Node(usize),
    /// A maze grid cell.
    Cell { row: usize, col: usize },
    /// A graph vertex.
    Vertex(usize),
    /// A position in the sorted edge list.
    Edge(usize),
}

/// One frozen instant of an algorithm run.
///
/// `snapshot` is a deep copy owned by the step; it never aliases state that a
/// later step mutates.
#[derive(Debug, Clone)]
pub struct Step<S> {
    /// Position in the trace, 0-based and strictly increasing.
    pub index: usize,
    /// Deep copy of the structure's state at this instant.
    pub snapshot: S,
    /// Positions the algorithm is currently touching.
    pub highlights: Vec<Location>,
    /// 0-based line into the engine's reference pseudocode (display only).
    pub line: usize,
    /// Description of the operation just performed.
    pub narrative: String,
}

/// Accumulates steps during a run. Append-only: no step is ever removed or
/// reordered after emission.
#[derive(Debug)]
pub struct TraceBuilder<S> {
    steps: Vec<Step<S>>,
}

impl<S> TraceBuilder<S> {
    pub fn new() -> Self {
        TraceBuilder { steps: Vec::new() }
    }

    /// Append a step with the next sequence index.
    pub fn push(&mut self, snapshot: S, highlights: Vec<Location>, line: usize, narrative: String) {
        let index = self.steps.len();
        self.steps.push(Step {
            index,
            snapshot,
            highlights,
            line,
            narrative,
        });
    }

    /// Consume the builder and return the completed, immutable trace.
    pub fn finish(self) -> Trace<S> {
        Trace { steps: self.steps }
    }
}

/// A completed trace. Read-only: playback walks it by index.
#[derive(Debug, Clone)]
pub struct Trace<S> {
    steps: Vec<Step<S>>,
}

impl<S> Trace<S> {
    pub fn get(&self, index: usize) -> Option<&Step<S>> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&Step<S>> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step<S>> {
        self.steps.iter()
    }
}
