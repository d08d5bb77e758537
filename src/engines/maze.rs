//! Backtracking maze solver: exhaustive path search over a grid.
//!
//! The search starts at `(0, 0)` and targets `(rows-1, cols-1)`, trying
//! directions in the fixed order Right, Down, Up, Left. Cells on the current
//! candidate path are marked in an `on_path` matrix; when a branch fails,
//! every mark it made is removed before the search backtracks past it, so no
//! stale marks survive backtracking.
//!
//! Two modes share the one algorithm: [`SearchMode::FirstPath`] stops at the
//! first path to the goal and leaves it marked; [`SearchMode::AllPaths`]
//! records every path that reaches the goal, unmarks, and keeps searching,
//! never short-circuiting.

use crate::trace::{Location, TraceBuilder};

/// Reference pseudocode rendered by the UI; step line indices point here.
pub const PSEUDOCODE: &[&str] = &[
    "solve(r, c):",
    "  if out of bounds, wall, or on path:",
    "    return blocked",
    "  if (r, c) == goal:",
    "    mark; record the path; return found",
    "  mark (r, c) on the path",
    "  for dir in [right, down, up, left]:",
    "    if solve(r + dr, c + dc): return found",
    "  unmark (r, c)  (backtrack)",
    "  return not found",
];

const L_BLOCKED: usize = 2;
const L_GOAL: usize = 4;
const L_MARK: usize = 5;
const L_UNMARK: usize = 8;
const L_DONE: usize = 9;

/// One grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Open,
}

/// A rectangular maze. Rows are non-empty and all the same length; the input
/// parser enforces that, plus open start and goal cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub cells: Vec<Vec<Cell>>,
}

impl Maze {
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, |row| row.len())
    }

    pub fn is_open(&self, row: usize, col: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .is_some_and(|&c| c == Cell::Open)
    }
}

/// Stop at the first path, or enumerate every path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    FirstPath,
    AllPaths,
}

/// What the step just did, for UI emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeAction {
    Blocked,
    Mark,
    Goal,
    Unmark,
    Done,
}

/// Frozen state of the search at one step.
#[derive(Debug, Clone)]
pub struct MazeSnapshot {
    pub cells: Vec<Vec<Cell>>,
    pub on_path: Vec<Vec<bool>>,
    pub action: MazeAction,
}

/// Whether a path to the goal exists. Exhaustive at every call site; no
/// `Option` standing in for "not found".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Vec<(usize, usize)>),
    NotFound,
}

/// Outcome plus every recorded solution (`FirstPath` records at most one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub solutions: Vec<Vec<(usize, usize)>>,
}

// Direction priority: Right, Down, Up, Left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (-1, 0), (0, -1)];

/// Per-run search state, exclusively owned by one `solve` invocation.
struct Search<'a> {
    maze: &'a Maze,
    mode: SearchMode,
    on_path: Vec<Vec<bool>>,
    /// Current candidate path, in visit order.
    path: Vec<(usize, usize)>,
    solutions: Vec<Vec<(usize, usize)>>,
}

impl Search<'_> {
    fn snapshot(&self, action: MazeAction) -> MazeSnapshot {
        MazeSnapshot {
            cells: self.maze.cells.clone(),
            on_path: self.on_path.clone(),
            action,
        }
    }

    fn cell(row: usize, col: usize) -> Location {
        Location::Cell { row, col }
    }

    /// Returns true iff the goal was reached and the search should stop
    /// (never true in `AllPaths` mode).
    fn solve(&mut self, row: isize, col: isize, trace: &mut TraceBuilder<MazeSnapshot>) -> bool {
        let in_bounds = row >= 0
            && col >= 0
            && (row as usize) < self.maze.rows()
            && (col as usize) < self.maze.cols();
        if !in_bounds {
            trace.push(
                self.snapshot(MazeAction::Blocked),
                Vec::new(),
                L_BLOCKED,
                format!("Blocked at ({}, {}): out of bounds", row, col),
            );
            return false;
        }
        let (r, c) = (row as usize, col as usize);
        if !self.maze.is_open(r, c) || self.on_path[r][c] {
            trace.push(
                self.snapshot(MazeAction::Blocked),
                vec![Self::cell(r, c)],
                L_BLOCKED,
                format!(
                    "Blocked at ({}, {}): {}",
                    r,
                    c,
                    if self.on_path[r][c] { "already on the path" } else { "wall" }
                ),
            );
            return false;
        }

        let goal = (self.maze.rows() - 1, self.maze.cols() - 1);
        if (r, c) == goal {
            self.on_path[r][c] = true;
            self.path.push((r, c));
            self.solutions.push(self.path.clone());
            trace.push(
                self.snapshot(MazeAction::Goal),
                vec![Self::cell(r, c)],
                L_GOAL,
                format!("Reached the goal ({}, {}): path of {} cell(s)", r, c, self.path.len()),
            );
            match self.mode {
                // The successful path stays marked.
                SearchMode::FirstPath => return true,
                // Keep searching: unmark and report "not found" upward so
                // siblings are still tried.
                SearchMode::AllPaths => {
                    self.on_path[r][c] = false;
                    self.path.pop();
                    trace.push(
                        self.snapshot(MazeAction::Unmark),
                        vec![Self::cell(r, c)],
                        L_UNMARK,
                        format!("Unmarked goal ({}, {}); continuing to search for more paths", r, c),
                    );
                    return false;
                }
            }
        }

        self.on_path[r][c] = true;
        self.path.push((r, c));
        trace.push(
            self.snapshot(MazeAction::Mark),
            vec![Self::cell(r, c)],
            L_MARK,
            format!("Marked ({}, {}) on the current path", r, c),
        );

        for (dr, dc) in DIRECTIONS {
            if self.solve(row + dr, col + dc, trace) {
                return true;
            }
        }

        self.on_path[r][c] = false;
        self.path.pop();
        trace.push(
            self.snapshot(MazeAction::Unmark),
            vec![Self::cell(r, c)],
            L_UNMARK,
            format!("Dead end: unmarked ({}, {}) and backtracked", r, c),
        );
        false
    }
}

/// Search the maze from `(0, 0)` to `(rows-1, cols-1)`.
pub fn solve(maze: &Maze, mode: SearchMode, trace: &mut TraceBuilder<MazeSnapshot>) -> SearchReport {
    let mut search = Search {
        maze,
        mode,
        on_path: vec![vec![false; maze.cols()]; maze.rows()],
        path: Vec::new(),
        solutions: Vec::new(),
    };

    search.solve(0, 0, trace);

    let outcome = match search.solutions.first() {
        Some(path) => SearchOutcome::Found(path.clone()),
        None => SearchOutcome::NotFound,
    };

    let narrative = match (&outcome, mode) {
        (SearchOutcome::Found(path), SearchMode::FirstPath) => {
            format!("Found a path of {} cell(s)", path.len())
        }
        (SearchOutcome::Found(_), SearchMode::AllPaths) => {
            format!("Search exhausted: {} path(s) found", search.solutions.len())
        }
        (SearchOutcome::NotFound, _) => "Search exhausted: no path to the goal".to_string(),
    };
    trace.push(search.snapshot(MazeAction::Done), Vec::new(), L_DONE, narrative);

    SearchReport {
        outcome,
        solutions: search.solutions,
    }
}
