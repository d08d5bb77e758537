//! Binary min-heap priority queue, instrumented per comparison and swap.
//!
//! The queue is array-backed and zero-indexed: the children of slot `i` live
//! at `2i + 1` and `2i + 2`, its parent at `(i - 1) / 2`. The heap invariant
//! is that no slot has a smaller priority than its parent.
//!
//! Queue contents persist across operations until [`MinHeapQueue::reset`];
//! each operation appends its steps to a caller-supplied trace builder, so a
//! caller may give every operation a fresh trace or script several operations
//! into one run.

use crate::trace::{Location, TraceBuilder};

/// Reference pseudocode rendered by the UI; step line indices point here.
pub const PSEUDOCODE: &[&str] = &[
    "enqueue(value, priority):",
    "  append (value, priority) at the end",
    "  i = last slot",
    "  while i > 0 and pri[i] < pri[parent(i)]:",
    "    swap i with parent(i); i = parent(i)",
    "",
    "dequeue():",
    "  if queue is empty: return empty",
    "  root = items[0]",
    "  move last item into slot 0, shrink",
    "  i = 0; loop:",
    "    smallest = min-priority of {i, left, right}",
    "    if smallest != i: swap, i = smallest",
    "  return root",
    "",
    "peek():",
    "  if queue is empty: return empty",
    "  return items[0]",
];

const L_APPEND: usize = 1;
const L_UP_CMP: usize = 3;
const L_UP_SWAP: usize = 4;
const L_DQ_EMPTY: usize = 7;
const L_DQ_ROOT: usize = 8;
const L_DQ_MOVE: usize = 9;
const L_DOWN_CMP: usize = 11;
const L_DOWN_SWAP: usize = 12;
const L_DQ_RETURN: usize = 13;
const L_PEEK_EMPTY: usize = 16;
const L_PEEK_RETURN: usize = 17;

/// Payload stored in the queue: callers may enqueue text or numbers.
///
/// Comparison rules (used for display ordering only; the heap orders by
/// priority): numbers compare numerically via `total_cmp`, texts compare
/// lexicographically, and any number orders before any text.
#[derive(Debug, Clone, PartialEq)]
pub enum PqValue {
    Text(String),
    Number(f64),
}

impl PqValue {
    pub fn compare(&self, other: &PqValue) -> std::cmp::Ordering {
        use std::cmp::Ordering;
        match (self, other) {
            (PqValue::Number(a), PqValue::Number(b)) => a.total_cmp(b),
            (PqValue::Text(a), PqValue::Text(b)) => a.cmp(b),
            (PqValue::Number(_), PqValue::Text(_)) => Ordering::Less,
            (PqValue::Text(_), PqValue::Number(_)) => Ordering::Greater,
        }
    }
}

impl std::fmt::Display for PqValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PqValue::Text(s) => write!(f, "{}", s),
            PqValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
        }
    }
}

/// One queue entry.
#[derive(Debug, Clone, PartialEq)]
pub struct HeapItem {
    pub value: PqValue,
    pub priority: i64,
}

/// The priority comparison a step just performed, for UI emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapCompare {
    pub a: usize,
    pub b: usize,
    /// True when slot `a` held the strictly smaller priority.
    pub a_smaller: bool,
}

/// Frozen state of the queue at one step.
#[derive(Debug, Clone)]
pub struct HeapSnapshot {
    pub items: Vec<HeapItem>,
    pub compare: Option<HeapCompare>,
}

/// Array-backed binary min-heap.
#[derive(Debug, Default)]
pub struct MinHeapQueue {
    items: Vec<HeapItem>,
}

impl MinHeapQueue {
    pub fn new() -> Self {
        MinHeapQueue { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[HeapItem] {
        &self.items
    }

    /// Discard all contents.
    pub fn reset(&mut self) {
        self.items.clear();
    }

    fn snapshot(&self, compare: Option<HeapCompare>) -> HeapSnapshot {
        HeapSnapshot {
            items: self.items.clone(),
            compare,
        }
    }

    /// Insert an item, then sift it up until the heap property holds.
    pub fn enqueue(
        &mut self,
        trace: &mut TraceBuilder<HeapSnapshot>,
        value: PqValue,
        priority: i64,
    ) {
        self.items.push(HeapItem {
            value: value.clone(),
            priority,
        });
        let mut i = self.items.len() - 1;
        trace.push(
            self.snapshot(None),
            vec![Location::Slot(i)],
            L_APPEND,
            format!("Appended ({}, pri {}) at slot {}", value, priority, i),
        );

        while i > 0 {
            let parent = (i - 1) / 2;
            let smaller = self.items[i].priority < self.items[parent].priority;
            trace.push(
                self.snapshot(Some(HeapCompare {
                    a: i,
                    b: parent,
                    a_smaller: smaller,
                })),
                vec![Location::Slot(i), Location::Slot(parent)],
                L_UP_CMP,
                format!(
                    "Compared slot {} (pri {}) with parent slot {} (pri {})",
                    i, self.items[i].priority, parent, self.items[parent].priority
                ),
            );
            if !smaller {
                break;
            }
            self.items.swap(i, parent);
            trace.push(
                self.snapshot(None),
                vec![Location::Slot(i), Location::Slot(parent)],
                L_UP_SWAP,
                format!("Swapped slots {} and {}", i, parent),
            );
            i = parent;
        }
    }

    /// Remove and return the minimum-priority item, or `None` when empty.
    ///
    /// An empty dequeue is a normal terminal outcome: it emits an
    /// informational step, never an error.
    pub fn dequeue(&mut self, trace: &mut TraceBuilder<HeapSnapshot>) -> Option<HeapItem> {
        if self.items.is_empty() {
            trace.push(
                self.snapshot(None),
                Vec::new(),
                L_DQ_EMPTY,
                "Queue is empty; nothing to dequeue".to_string(),
            );
            return None;
        }

        if self.items.len() == 1 {
            let item = self.items.remove(0);
            trace.push(
                self.snapshot(None),
                Vec::new(),
                L_DQ_RETURN,
                format!("Dequeued ({}, pri {}); queue is now empty", item.value, item.priority),
            );
            return Some(item);
        }

        let root = self.items[0].clone();
        trace.push(
            self.snapshot(None),
            vec![Location::Slot(0)],
            L_DQ_ROOT,
            format!("Captured root ({}, pri {})", root.value, root.priority),
        );

        if let Some(last) = self.items.pop() {
            self.items[0] = last;
        }
        trace.push(
            self.snapshot(None),
            vec![Location::Slot(0)],
            L_DQ_MOVE,
            format!("Moved last item into slot 0; {} item(s) remain", self.items.len()),
        );

        self.sift_down(trace, 0);

        trace.push(
            self.snapshot(None),
            Vec::new(),
            L_DQ_RETURN,
            format!("Dequeued ({}, pri {})", root.value, root.priority),
        );
        Some(root)
    }

    /// Return the minimum-priority item without removing it.
    pub fn peek(&self, trace: &mut TraceBuilder<HeapSnapshot>) -> Option<HeapItem> {
        match self.items.first() {
            None => {
                trace.push(
                    self.snapshot(None),
                    Vec::new(),
                    L_PEEK_EMPTY,
                    "Queue is empty; nothing to peek".to_string(),
                );
                None
            }
            Some(item) => {
                trace.push(
                    self.snapshot(None),
                    vec![Location::Slot(0)],
                    L_PEEK_RETURN,
                    format!("Peeked root ({}, pri {})", item.value, item.priority),
                );
                Some(item.clone())
            }
        }
    }

    fn sift_down(&mut self, trace: &mut TraceBuilder<HeapSnapshot>, start: usize) {
        let mut i = start;
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;

            if left < self.items.len() {
                let smaller = self.items[left].priority < self.items[smallest].priority;
                trace.push(
                    self.snapshot(Some(HeapCompare {
                        a: left,
                        b: smallest,
                        a_smaller: smaller,
                    })),
                    vec![Location::Slot(left), Location::Slot(smallest)],
                    L_DOWN_CMP,
                    format!(
                        "Compared left child slot {} (pri {}) with slot {} (pri {})",
                        left, self.items[left].priority, smallest, self.items[smallest].priority
                    ),
                );
                if smaller {
                    smallest = left;
                }
            }
            if right < self.items.len() {
                let smaller = self.items[right].priority < self.items[smallest].priority;
                trace.push(
                    self.snapshot(Some(HeapCompare {
                        a: right,
                        b: smallest,
                        a_smaller: smaller,
                    })),
                    vec![Location::Slot(right), Location::Slot(smallest)],
                    L_DOWN_CMP,
                    format!(
                        "Compared right child slot {} (pri {}) with slot {} (pri {})",
                        right, self.items[right].priority, smallest, self.items[smallest].priority
                    ),
                );
                if smaller {
                    smallest = right;
                }
            }

            if smallest == i {
                break;
            }
            self.items.swap(i, smallest);
            trace.push(
                self.snapshot(None),
                vec![Location::Slot(i), Location::Slot(smallest)],
                L_DOWN_SWAP,
                format!("Swapped slots {} and {}", i, smallest),
            );
            i = smallest;
        }
    }
}
