//! # Introduction
//!
//! algotty animates classic algorithms step by step in the terminal. An
//! algorithm engine runs the textbook algorithm while emitting an ordered,
//! immutable trace of state snapshots; a playback controller then replays
//! the trace under user control through a TUI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Input → Parser → Engine → Step trace → Playback → TUI
//! ```
//!
//! 1. [`input`]: parses and fully validates raw input before any engine runs.
//! 2. [`engines`]: the instrumented algorithms, binary min-heap, weighted
//!    union-find driving Kruskal's MST, Morris in-order traversal, and a
//!    backtracking maze solver. Each appends [`trace::Step`]s as it works.
//! 3. [`trace`]: the step-trace contract, append-only during generation and
//!    immutable afterwards, with one deep snapshot per conceptual operation.
//! 4. [`playback`]: cursor plus single pending tick deadline; play, pause,
//!    single-step, variable speed, reset.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod engines;
pub mod input;
pub mod playback;
pub mod trace;
pub mod ui;
