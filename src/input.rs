//! Input parsing for the five engine input formats.
//!
//! Validation happens entirely before any engine runs: a parser either
//! returns a fully checked structure or an [`InputError`] describing what was
//! wrong, and the caller reports it without losing interactivity. Engines
//! never see malformed input.
//!
//! Formats:
//! - array: comma-separated integers (`"5,2,8"`)
//! - edge list: `u-v(weight)` entries separated by `;` (`"0-1(1);1-2(2)"`),
//!   validated against a vertex count
//! - tree: comma-separated level-order values, `x` or `null` for an absent
//!   child; empty input is the empty tree
//! - maze: `0`/`1` comma-separated per row, newline-separated rows; `0` is a
//!   wall, `1` is open; start `(0,0)` and goal `(N-1,M-1)` must be open
//! - priority-queue: a value token (number or text) plus an integer priority

use crate::engines::heap::PqValue;
use crate::engines::kruskal::Edge;
use crate::engines::maze::{Cell, Maze};
use crate::engines::morris::{Tree, TreeNode};

/// A malformed-input failure, detected before engine invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// The input was empty where a value was required.
    Empty { what: &'static str },
    /// A token that should have been an integer was not.
    NotAnInteger { token: String },
    /// An edge entry did not match `u-v(weight)`.
    EdgeSyntax { entry: String },
    /// An edge weight failed to parse or was not finite.
    BadWeight { token: String },
    /// An edge referenced a vertex outside `0..vertices`.
    VertexOutOfRange { vertex: usize, vertices: usize },
    /// The vertex count was zero or unparseable.
    BadVertexCount { token: String },
    /// A maze row had a different length than the first row.
    RaggedRow { row: usize, expected: usize, got: usize },
    /// A maze cell token was neither `0` nor `1`.
    BadCell { row: usize, col: usize, token: String },
    /// The maze start or goal cell is a wall.
    BlockedEndpoint { which: &'static str },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::Empty { what } => write!(f, "{} input is empty", what),
            InputError::NotAnInteger { token } => {
                write!(f, "'{}' is not an integer", token)
            }
            InputError::EdgeSyntax { entry } => {
                write!(f, "edge '{}' does not match u-v(weight)", entry)
            }
            InputError::BadWeight { token } => {
                write!(f, "'{}' is not a finite edge weight", token)
            }
            InputError::VertexOutOfRange { vertex, vertices } => {
                write!(f, "vertex {} out of range for {} vertex/vertices", vertex, vertices)
            }
            InputError::BadVertexCount { token } => {
                write!(f, "'{}' is not a positive vertex count", token)
            }
            InputError::RaggedRow { row, expected, got } => {
                write!(f, "maze row {} has {} cell(s), expected {}", row, got, expected)
            }
            InputError::BadCell { row, col, token } => {
                write!(f, "maze cell ({}, {}) is '{}', expected 0 or 1", row, col, token)
            }
            InputError::BlockedEndpoint { which } => {
                write!(f, "maze {} cell must be open", which)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Parse a comma-separated list of integers.
pub fn parse_array(input: &str) -> Result<Vec<i64>, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty { what: "array" });
    }
    trimmed
        .split(',')
        .map(|tok| {
            let tok = tok.trim();
            tok.parse::<i64>().map_err(|_| InputError::NotAnInteger {
                token: tok.to_string(),
            })
        })
        .collect()
}

/// Parse a positive vertex count.
pub fn parse_vertex_count(input: &str) -> Result<usize, InputError> {
    let tok = input.trim();
    match tok.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(InputError::BadVertexCount {
            token: tok.to_string(),
        }),
    }
}

/// Parse `u-v(weight)` entries separated by `;`, validating vertex indices
/// against `vertices`. Weights are real and may be negative.
pub fn parse_edge_list(vertices: usize, input: &str) -> Result<Vec<Edge>, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    let mut edges = Vec::new();
    for entry in trimmed.split(';') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let syntax_err = || InputError::EdgeSyntax {
            entry: entry.to_string(),
        };

        let open = entry.find('(').ok_or_else(syntax_err)?;
        if !entry.ends_with(')') {
            return Err(syntax_err());
        }
        let (pair, rest) = entry.split_at(open);
        let weight_tok = rest[1..rest.len() - 1].trim();

        let (u_tok, v_tok) = pair.trim().split_once('-').ok_or_else(syntax_err)?;
        let u = u_tok
            .trim()
            .parse::<usize>()
            .map_err(|_| syntax_err())?;
        let v = v_tok
            .trim()
            .parse::<usize>()
            .map_err(|_| syntax_err())?;
        for vertex in [u, v] {
            if vertex >= vertices {
                return Err(InputError::VertexOutOfRange { vertex, vertices });
            }
        }
        let weight = weight_tok
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite())
            .ok_or_else(|| InputError::BadWeight {
                token: weight_tok.to_string(),
            })?;
        edges.push(Edge { u, v, weight });
    }
    Ok(edges)
}

fn is_tree_sentinel(token: &str) -> bool {
    token.eq_ignore_ascii_case("x") || token.eq_ignore_ascii_case("null")
}

/// Parse comma-separated level-order values into an arena tree. `x` / `null`
/// mark an absent child; empty input denotes the empty tree.
pub fn parse_tree(input: &str) -> Result<Tree, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Tree::default());
    }

    let tokens: Vec<&str> = trimmed.split(',').map(str::trim).collect();
    let mut slots: Vec<Option<i64>> = Vec::with_capacity(tokens.len());
    for tok in &tokens {
        if is_tree_sentinel(tok) {
            slots.push(None);
        } else {
            let value = tok.parse::<i64>().map_err(|_| InputError::NotAnInteger {
                token: tok.to_string(),
            })?;
            slots.push(Some(value));
        }
    }

    let mut tree = Tree::default();
    let Some(root_value) = slots[0] else {
        // A sentinel root is the empty tree.
        return Ok(tree);
    };
    tree.nodes.push(TreeNode {
        value: root_value,
        left: None,
        right: None,
    });
    tree.root = Some(0);

    // Level-order: each real node consumes the next two slots as children.
    let mut pending = std::collections::VecDeque::from([0usize]);
    let mut next_slot = 1;
    while let Some(parent) = pending.pop_front() {
        for side in 0..2 {
            if next_slot >= slots.len() {
                break;
            }
            let slot = slots[next_slot];
            next_slot += 1;
            if let Some(value) = slot {
                let id = tree.nodes.len();
                tree.nodes.push(TreeNode {
                    value,
                    left: None,
                    right: None,
                });
                if side == 0 {
                    tree.nodes[parent].left = Some(id);
                } else {
                    tree.nodes[parent].right = Some(id);
                }
                pending.push_back(id);
            }
        }
    }
    Ok(tree)
}

/// Parse a maze grid: rows separated by newlines, cells by commas.
pub fn parse_maze(input: &str) -> Result<Maze, InputError> {
    let mut cells: Vec<Vec<Cell>> = Vec::new();
    for (row_idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut row = Vec::new();
        for (col_idx, tok) in line.split(',').enumerate() {
            match tok.trim() {
                "0" => row.push(Cell::Wall),
                "1" => row.push(Cell::Open),
                other => {
                    return Err(InputError::BadCell {
                        row: row_idx,
                        col: col_idx,
                        token: other.to_string(),
                    })
                }
            }
        }
        if let Some(first) = cells.first() {
            if row.len() != first.len() {
                return Err(InputError::RaggedRow {
                    row: row_idx,
                    expected: first.len(),
                    got: row.len(),
                });
            }
        }
        cells.push(row);
    }
    if cells.is_empty() {
        return Err(InputError::Empty { what: "maze" });
    }

    let maze = Maze { cells };
    if !maze.is_open(0, 0) {
        return Err(InputError::BlockedEndpoint { which: "start" });
    }
    if !maze.is_open(maze.rows() - 1, maze.cols() - 1) {
        return Err(InputError::BlockedEndpoint { which: "goal" });
    }
    Ok(maze)
}

/// Parse a priority-queue value token: numbers become [`PqValue::Number`],
/// anything else is text.
pub fn parse_pq_value(token: &str) -> PqValue {
    let token = token.trim();
    match token.parse::<f64>() {
        Ok(n) if n.is_finite() => PqValue::Number(n),
        _ => PqValue::Text(token.to_string()),
    }
}

/// Parse an integer priority.
pub fn parse_priority(token: &str) -> Result<i64, InputError> {
    let token = token.trim();
    token.parse::<i64>().map_err(|_| InputError::NotAnInteger {
        token: token.to_string(),
    })
}

/// Parse comma-separated queue entries: `value:priority` pairs, or bare
/// integers that serve as both value and priority (`"A:5,B:2"`, `"5,2,8"`).
pub fn parse_queue_items(input: &str) -> Result<Vec<(PqValue, i64)>, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty { what: "queue" });
    }
    trimmed
        .split(',')
        .map(|entry| match entry.split_once(':') {
            Some((value_tok, priority_tok)) => {
                let priority = parse_priority(priority_tok)?;
                Ok((parse_pq_value(value_tok), priority))
            }
            None => {
                let priority = parse_priority(entry)?;
                Ok((PqValue::Number(priority as f64), priority))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_roundtrip() {
        assert_eq!(parse_array("5, 2,8").unwrap(), vec![5, 2, 8]);
    }

    #[test]
    fn array_rejects_garbage() {
        assert_eq!(
            parse_array("5,two,8"),
            Err(InputError::NotAnInteger {
                token: "two".to_string()
            })
        );
        assert_eq!(parse_array("  "), Err(InputError::Empty { what: "array" }));
    }

    #[test]
    fn edge_list_parses_entries() {
        let edges = parse_edge_list(4, "0-1(1); 1-2(2.5);2-3(-3)").unwrap();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[1].u, 1);
        assert_eq!(edges[1].v, 2);
        assert_eq!(edges[1].weight, 2.5);
        assert_eq!(edges[2].weight, -3.0);
    }

    #[test]
    fn edge_list_validates_vertices() {
        assert_eq!(
            parse_edge_list(2, "0-5(1)"),
            Err(InputError::VertexOutOfRange {
                vertex: 5,
                vertices: 2
            })
        );
    }

    #[test]
    fn edge_list_rejects_bad_syntax() {
        assert!(matches!(
            parse_edge_list(4, "0+1(1)"),
            Err(InputError::EdgeSyntax { .. })
        ));
        assert!(matches!(
            parse_edge_list(4, "0-1(inf)"),
            Err(InputError::BadWeight { .. })
        ));
    }

    #[test]
    fn tree_level_order() {
        let tree = parse_tree("4,2,6,1,3,5,7").unwrap();
        assert_eq!(tree.nodes.len(), 7);
        assert_eq!(tree.recursive_inorder(), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn tree_sentinels_skip_children() {
        // 1 with only a right child 3, which has a left child 2.
        let tree = parse_tree("1,x,3,2,null").unwrap();
        assert_eq!(tree.recursive_inorder(), vec![1, 2, 3]);
    }

    #[test]
    fn tree_empty_inputs() {
        assert_eq!(parse_tree("").unwrap().root, None);
        assert_eq!(parse_tree("x").unwrap().root, None);
    }

    #[test]
    fn maze_shape_checks() {
        assert!(parse_maze("1,1\n1,1").is_ok());
        assert!(matches!(
            parse_maze("1,1\n1"),
            Err(InputError::RaggedRow { .. })
        ));
        assert!(matches!(
            parse_maze("0,1\n1,1"),
            Err(InputError::BlockedEndpoint { which: "start" })
        ));
        assert!(matches!(
            parse_maze("1,1\n1,0"),
            Err(InputError::BlockedEndpoint { which: "goal" })
        ));
        assert!(matches!(
            parse_maze("1,2\n1,1"),
            Err(InputError::BadCell { .. })
        ));
    }

    #[test]
    fn pq_value_tokens() {
        assert_eq!(parse_pq_value("3.5"), PqValue::Number(3.5));
        assert_eq!(parse_pq_value("job-a"), PqValue::Text("job-a".to_string()));
    }

    #[test]
    fn queue_items_accept_pairs_and_bare_integers() {
        let items = parse_queue_items("A:5, 2, note:8").unwrap();
        assert_eq!(items[0], (PqValue::Text("A".to_string()), 5));
        assert_eq!(items[1], (PqValue::Number(2.0), 2));
        assert_eq!(items[2], (PqValue::Text("note".to_string()), 8));

        assert!(matches!(
            parse_queue_items("A:x"),
            Err(InputError::NotAnInteger { .. })
        ));
    }
}
