//! Stateless render functions for each visible pane.
//!
//! The left column shows the reference pseudocode (with the current line
//! highlighted) above the narrative log; the right column draws the data
//! structure from the step's snapshot, with the step's highlighted positions
//! emphasized. A status bar runs along the bottom.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::engines::heap::HeapSnapshot;
use crate::engines::kruskal::KruskalSnapshot;
use crate::engines::maze::{Cell, MazeSnapshot};
use crate::engines::morris::MorrisSnapshot;
use crate::trace::Location;
use crate::ui::theme::DEFAULT_THEME;

fn pane_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
}

/// Render the pseudocode listing with the current line highlighted.
pub fn render_pseudocode_pane(
    frame: &mut Frame,
    area: Rect,
    listing: &'static [&'static str],
    current_line: usize,
) {
    let lines: Vec<Line> = listing
        .iter()
        .enumerate()
        .map(|(idx, text)| {
            let is_current = idx == current_line;
            let marker = if is_current { "▶ " } else { "  " };
            let num_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            let content_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            Line::from(vec![
                Span::styled(format!("{}{:2} ", marker, idx), num_style),
                Span::styled((*text).to_string(), content_style),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(pane_block("Pseudocode"));
    frame.render_widget(paragraph, area);
}

/// Render the narrative log up to the cursor, latest entry at the bottom.
pub fn render_log_pane(frame: &mut Frame, area: Rect, narratives: &[String]) {
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let skip = narratives.len().saturating_sub(visible_height);
    let lines: Vec<Line> = narratives
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(idx, text)| {
            let is_latest = idx + 1 == narratives.len();
            let style = if is_latest {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            Line::from(vec![
                Span::styled(format!("{:4} ", idx), Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(text.clone(), style),
            ])
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(pane_block("Narrative"));
    frame.render_widget(paragraph, area);
}

/// Render the structure pane from pre-built lines.
pub fn render_structure_pane(frame: &mut Frame, area: Rect, title: &str, lines: Vec<Line<'static>>) {
    let paragraph = Paragraph::new(lines).block(pane_block(title));
    frame.render_widget(paragraph, area);
}

/// Render the status bar: step position, message, play state, keybinds.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    current_step: usize,
    total_steps: usize,
    is_playing: bool,
    period_ms: u128,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let left_spans = vec![
        Span::styled(
            format!(" Step {}/{} ", current_step + 1, total_steps),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}ms ", period_ms),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];
    let left = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);

    let mut right_spans = vec![
        Span::styled(" ←/→ ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" play ", desc_style),
        Span::styled(" +/- ", key_style),
        Span::styled(" speed ", desc_style),
        Span::styled(" r ", key_style),
        Span::styled(" reset ", desc_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
    ];
    if is_playing {
        right_spans.push(Span::styled(
            " ▶ PLAYING ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if current_step + 1 >= total_steps {
        right_spans.push(Span::styled(
            " END ",
            Style::default()
                .bg(DEFAULT_THEME.error)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }
    let right = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right, layout[1]);
}

fn is_highlighted_slot(highlights: &[Location], slot: usize) -> bool {
    highlights.iter().any(|h| *h == Location::Slot(slot))
}

fn highlight_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(DEFAULT_THEME.highlight)
        .add_modifier(Modifier::BOLD)
}

/// Heap array drawn one slot per line, indented by tree depth.
pub fn heap_lines(snapshot: &HeapSnapshot, highlights: &[Location]) -> Vec<Line<'static>> {
    if snapshot.items.is_empty() {
        return vec![Line::from(Span::styled(
            "(empty queue)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))];
    }
    let mut lines = Vec::with_capacity(snapshot.items.len());
    for (i, item) in snapshot.items.iter().enumerate() {
        let depth = (i + 1).ilog2() as usize;
        let style = if is_highlighted_slot(highlights, i) {
            highlight_style()
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:3} ", i),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::raw("  ".repeat(depth)),
            Span::styled(format!("{} (pri {})", item.value, item.priority), style),
        ]));
    }
    if let Some(cmp) = snapshot.compare {
        let verdict = if cmp.a_smaller { "<" } else { ">=" };
        lines.push(Line::from(Span::styled(
            format!("compare: slot {} {} slot {}", cmp.a, verdict, cmp.b),
            Style::default().fg(DEFAULT_THEME.primary),
        )));
    }
    lines
}

/// Sorted edge list plus DSU arrays and running cost.
pub fn kruskal_lines(snapshot: &KruskalSnapshot, highlights: &[Location]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (idx, edge) in snapshot.edges.iter().enumerate() {
        let in_mst = snapshot.mst.contains(&idx);
        let considering = highlights.iter().any(|h| *h == Location::Edge(idx));
        let (marker, style) = if considering {
            ("→ ", highlight_style())
        } else if in_mst {
            ("✓ ", Style::default().fg(DEFAULT_THEME.success))
        } else {
            ("  ", Style::default().fg(DEFAULT_THEME.fg))
        };
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), style),
            Span::styled(format!("{}", edge), style),
        ]));
    }
    lines.push(Line::from(Span::raw("")));
    lines.push(Line::from(Span::styled(
        format!("parent: {:?}", snapshot.parent),
        Style::default().fg(DEFAULT_THEME.comment),
    )));
    lines.push(Line::from(Span::styled(
        format!("rank:   {:?}", snapshot.rank),
        Style::default().fg(DEFAULT_THEME.comment),
    )));
    if let Some((ru, rv)) = snapshot.roots {
        lines.push(Line::from(Span::styled(
            format!("roots:  {} / {}", ru, rv),
            Style::default().fg(DEFAULT_THEME.primary),
        )));
    }
    lines.push(Line::from(Span::styled(
        format!("cost:   {}", snapshot.cost),
        Style::default()
            .fg(DEFAULT_THEME.success)
            .add_modifier(Modifier::BOLD),
    )));
    lines
}

/// Node arena with left/right/thread pointers, current and predecessor
/// markers, and the visit order so far.
pub fn morris_lines(snapshot: &MorrisSnapshot, _highlights: &[Location]) -> Vec<Line<'static>> {
    if snapshot.nodes.is_empty() {
        return vec![Line::from(Span::styled(
            "(empty tree)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))];
    }
    let fmt_child = |child: Option<usize>| match child {
        Some(id) => format!("#{}", id),
        None => "·".to_string(),
    };
    let mut lines = Vec::with_capacity(snapshot.nodes.len() + 2);
    for (id, node) in snapshot.nodes.iter().enumerate() {
        let marker = if snapshot.current == Some(id) {
            "→ "
        } else if snapshot.predecessor == Some(id) {
            "p "
        } else {
            "  "
        };
        let style = if snapshot.current == Some(id) {
            highlight_style()
        } else if snapshot.predecessor == Some(id) {
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        let mut text = format!(
            "{}#{} val={}  L:{} R:{}",
            marker,
            id,
            node.value,
            fmt_child(node.left),
            fmt_child(node.right)
        );
        if let Some(target) = snapshot.threads.get(&id) {
            text.push_str(&format!("  ~> #{} (thread)", target));
        }
        lines.push(Line::from(Span::styled(text, style)));
    }
    lines.push(Line::from(Span::raw("")));
    let visited = snapshot
        .visited
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(Line::from(Span::styled(
        format!("visited: [{}]", visited),
        Style::default().fg(DEFAULT_THEME.success),
    )));
    lines
}

/// The grid: walls, open cells, current-path marks, highlighted cell.
pub fn maze_lines(snapshot: &MazeSnapshot, highlights: &[Location]) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(snapshot.cells.len());
    for (r, row) in snapshot.cells.iter().enumerate() {
        let mut spans = Vec::with_capacity(row.len());
        for (c, cell) in row.iter().enumerate() {
            let touched = highlights
                .iter()
                .any(|h| *h == Location::Cell { row: r, col: c });
            let (text, style) = if touched {
                ("▓▓", highlight_style())
            } else if snapshot.on_path[r][c] {
                ("◆ ", Style::default().fg(DEFAULT_THEME.path).add_modifier(Modifier::BOLD))
            } else {
                match cell {
                    Cell::Wall => ("██", Style::default().fg(DEFAULT_THEME.wall)),
                    Cell::Open => ("· ", Style::default().fg(DEFAULT_THEME.comment)),
                }
            };
            spans.push(Span::styled(text.to_string(), style));
        }
        lines.push(Line::from(spans));
    }
    lines
}
