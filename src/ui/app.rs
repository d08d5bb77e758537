//! Main TUI application state and logic

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    text::Line,
    Frame, Terminal,
};

use crate::engines::heap::{HeapSnapshot, MinHeapQueue, PqValue};
use crate::engines::kruskal::{self, Edge, KruskalSnapshot};
use crate::engines::maze::{self, Maze, MazeSnapshot, SearchMode};
use crate::engines::morris::{MorrisSnapshot, MorrisTraversal, Tree};
use crate::engines::{heap, morris};
use crate::playback::Player;
use crate::trace::TraceBuilder;
use crate::ui::panes;

/// The parsed, validated input a run is generated from. Kept so that reset
/// can discard the trace and regenerate it from the original input.
#[derive(Debug, Clone)]
pub enum RunSpec {
    /// Items are enqueued in order, then dequeued until the queue is empty.
    Heap(Vec<(PqValue, i64)>),
    Kruskal { vertices: usize, edges: Vec<Edge> },
    Morris(Tree),
    Maze { maze: Maze, mode: SearchMode },
}

/// A player for whichever engine produced the trace.
pub enum Session {
    Heap(Player<HeapSnapshot>),
    Kruskal(Player<KruskalSnapshot>),
    Morris(Player<MorrisSnapshot>),
    Maze(Player<MazeSnapshot>),
}

macro_rules! with_player {
    ($session:expr, $p:ident => $body:expr) => {
        match $session {
            Session::Heap($p) => $body,
            Session::Kruskal($p) => $body,
            Session::Morris($p) => $body,
            Session::Maze($p) => $body,
        }
    };
}

/// Generate a fresh trace from the run spec. Trace generation is synchronous
/// and completes before playback ever touches it.
pub fn build_session(spec: &RunSpec) -> Session {
    match spec {
        RunSpec::Heap(items) => {
            let mut queue = MinHeapQueue::new();
            let mut trace = TraceBuilder::new();
            for (value, priority) in items {
                queue.enqueue(&mut trace, value.clone(), *priority);
            }
            if items.is_empty() {
                queue.peek(&mut trace);
            }
            while !queue.is_empty() {
                queue.dequeue(&mut trace);
            }
            Session::Heap(Player::new(trace.finish()))
        }
        RunSpec::Kruskal { vertices, edges } => {
            let mut trace = TraceBuilder::new();
            kruskal::run(*vertices, edges.clone(), &mut trace);
            Session::Kruskal(Player::new(trace.finish()))
        }
        RunSpec::Morris(tree) => {
            let mut trace = TraceBuilder::new();
            MorrisTraversal::new(tree.clone()).run(&mut trace);
            Session::Morris(Player::new(trace.finish()))
        }
        RunSpec::Maze { maze, mode } => {
            let mut trace = TraceBuilder::new();
            maze::solve(maze, *mode, &mut trace);
            Session::Maze(Player::new(trace.finish()))
        }
    }
}

impl Session {
    pub fn algorithm_name(&self) -> &'static str {
        match self {
            Session::Heap(_) => "Binary Min-Heap",
            Session::Kruskal(_) => "Kruskal's MST",
            Session::Morris(_) => "Morris In-order Traversal",
            Session::Maze(_) => "Backtracking Maze Solver",
        }
    }

    pub fn pseudocode(&self) -> &'static [&'static str] {
        match self {
            Session::Heap(_) => heap::PSEUDOCODE,
            Session::Kruskal(_) => kruskal::PSEUDOCODE,
            Session::Morris(_) => morris::PSEUDOCODE,
            Session::Maze(_) => maze::PSEUDOCODE,
        }
    }

    pub fn cursor(&self) -> usize {
        with_player!(self, p => p.cursor())
    }

    pub fn len(&self) -> usize {
        with_player!(self, p => p.len())
    }

    pub fn is_playing(&self) -> bool {
        with_player!(self, p => p.is_playing())
    }

    pub fn at_end(&self) -> bool {
        with_player!(self, p => p.at_end())
    }

    pub fn period(&self) -> Duration {
        with_player!(self, p => p.period())
    }

    pub fn play(&mut self, now: Instant) {
        with_player!(self, p => p.play(now))
    }

    pub fn pause(&mut self) {
        with_player!(self, p => p.pause())
    }

    pub fn step_forward(&mut self) {
        with_player!(self, p => p.step_forward())
    }

    pub fn step_back(&mut self) {
        with_player!(self, p => p.step_back())
    }

    pub fn jump_to_start(&mut self) {
        with_player!(self, p => p.jump_to_start())
    }

    pub fn jump_to_end(&mut self) {
        with_player!(self, p => p.jump_to_end())
    }

    pub fn set_period(&mut self, now: Instant, period: Duration) {
        with_player!(self, p => p.set_period(now, period))
    }

    pub fn advance_if_due(&mut self, now: Instant) -> bool {
        with_player!(self, p => p.advance_if_due(now))
    }

    /// Pseudocode line of the step under the cursor.
    pub fn current_line(&self) -> usize {
        with_player!(self, p => p.current_step().map_or(0, |s| s.line))
    }

    /// Narratives from the start of the trace through the cursor.
    pub fn narratives(&self) -> Vec<String> {
        with_player!(self, p => p
            .trace()
            .iter()
            .take(p.cursor() + 1)
            .map(|s| s.narrative.clone())
            .collect())
    }

    /// Structure pane contents for the step under the cursor.
    pub fn structure_lines(&self) -> Vec<Line<'static>> {
        match self {
            Session::Heap(p) => p
                .current_step()
                .map(|s| panes::heap_lines(&s.snapshot, &s.highlights))
                .unwrap_or_default(),
            Session::Kruskal(p) => p
                .current_step()
                .map(|s| panes::kruskal_lines(&s.snapshot, &s.highlights))
                .unwrap_or_default(),
            Session::Morris(p) => p
                .current_step()
                .map(|s| panes::morris_lines(&s.snapshot, &s.highlights))
                .unwrap_or_default(),
            Session::Maze(p) => p
                .current_step()
                .map(|s| panes::maze_lines(&s.snapshot, &s.highlights))
                .unwrap_or_default(),
        }
    }
}

/// The main application state
pub struct App {
    /// The current playback session
    pub session: Session,

    /// Original input, for regeneration on reset
    pub spec: RunSpec,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app from a validated run spec.
    pub fn new(spec: RunSpec) -> Self {
        let session = build_session(&spec);
        App {
            session,
            spec,
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Auto-play: advance the cursor when the tick deadline passes.
            if self.session.advance_if_due(Instant::now()) {
                self.status_message = if self.session.at_end() {
                    "Playback complete".to_string()
                } else {
                    "Playing...".to_string()
                };
            }

            // Poll with timeout so auto-play keeps ticking without input.
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Left column: pseudocode above the narrative log. Right column: the
        // data structure.
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(pane_area);

        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[0]);

        panes::render_pseudocode_pane(
            frame,
            left_rows[0],
            self.session.pseudocode(),
            self.session.current_line(),
        );
        panes::render_log_pane(frame, left_rows[1], &self.session.narratives());
        panes::render_structure_pane(
            frame,
            columns[1],
            self.session.algorithm_name(),
            self.session.structure_lines(),
        );
        panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.session.cursor(),
            self.session.len(),
            self.session.is_playing(),
            self.session.period().as_millis(),
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Right => {
                self.session.step_forward();
                self.status_message = "Stepped forward".to_string();
            }
            KeyCode::Left => {
                self.session.step_back();
                self.status_message = "Stepped backward".to_string();
            }
            KeyCode::Char(' ') => {
                // Toggle play/pause (200ms debounce against key repeat)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    if self.session.is_playing() {
                        self.session.pause();
                        self.status_message = "Paused".to_string();
                    } else if self.session.at_end() {
                        self.status_message = "Nothing to play".to_string();
                    } else {
                        self.session.play(Instant::now());
                        self.status_message = "Playing...".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.session.jump_to_end();
                self.status_message = "Jumped to end".to_string();
            }
            KeyCode::Backspace => {
                self.session.jump_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                // Discard the trace and regenerate from the original input.
                self.session = build_session(&self.spec);
                self.status_message = "Reset".to_string();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let period = self.session.period().saturating_sub(Duration::from_millis(150));
                self.session.set_period(Instant::now(), period);
                self.status_message = format!("Speed: {}ms/step", self.session.period().as_millis());
            }
            KeyCode::Char('-') | KeyCode::Char('_') => {
                let period = self.session.period() + Duration::from_millis(150);
                self.session.set_period(Instant::now(), period);
                self.status_message = format!("Speed: {}ms/step", self.session.period().as_millis());
            }
            _ => {}
        }
    }
}
