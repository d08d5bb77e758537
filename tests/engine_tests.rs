// Integration tests for the algorithm engines

use algotty::engines::heap::{HeapItem, MinHeapQueue, PqValue};
use algotty::engines::kruskal::{self, Edge, MstOutcome};
use algotty::engines::maze::{self, SearchMode, SearchOutcome};
use algotty::engines::morris::MorrisTraversal;
use algotty::engines::union_find::{UnionFind, UnionOutcome};
use algotty::input;
use algotty::trace::TraceBuilder;

fn is_min_heap(items: &[HeapItem]) -> bool {
    for i in 0..items.len() {
        for child in [2 * i + 1, 2 * i + 2] {
            if child < items.len() && items[i].priority > items[child].priority {
                return false;
            }
        }
    }
    true
}

#[test]
fn heap_dequeues_in_priority_order() {
    let mut queue = MinHeapQueue::new();
    let mut trace = TraceBuilder::new();

    queue.enqueue(&mut trace, PqValue::Text("A".to_string()), 5);
    queue.enqueue(&mut trace, PqValue::Text("B".to_string()), 2);
    queue.enqueue(&mut trace, PqValue::Text("C".to_string()), 8);

    let first = queue.dequeue(&mut trace).expect("queue not empty");
    assert_eq!(first.value, PqValue::Text("B".to_string()));
    assert_eq!(first.priority, 2);

    let second = queue.dequeue(&mut trace).expect("queue not empty");
    assert_eq!(second.value, PqValue::Text("A".to_string()));
    assert_eq!(second.priority, 5);
}

#[test]
fn heap_invariant_holds_after_every_operation() {
    let mut queue = MinHeapQueue::new();
    let mut trace = TraceBuilder::new();

    for v in [5, 3, 8, 1, 9, 2, 7, 4, 6] {
        queue.enqueue(&mut trace, PqValue::Number(v as f64), v);
        assert!(is_min_heap(queue.items()), "heap broken after enqueue {}", v);
    }

    let mut drained = Vec::new();
    while let Some(item) = queue.dequeue(&mut trace) {
        assert!(is_min_heap(queue.items()), "heap broken after dequeue");
        drained.push(item.priority);
    }
    let mut sorted = drained.clone();
    sorted.sort();
    assert_eq!(drained, sorted, "dequeue order not non-decreasing");
    assert_eq!(drained.len(), 9);
}

#[test]
fn heap_empty_operations_emit_informational_steps() {
    let mut queue = MinHeapQueue::new();
    let mut trace = TraceBuilder::new();

    assert!(queue.dequeue(&mut trace).is_none());
    assert!(queue.peek(&mut trace).is_none());

    let trace = trace.finish();
    assert_eq!(trace.len(), 2);
    for step in trace.iter() {
        assert!(step.narrative.contains("empty"));
    }
}

#[test]
fn heap_peek_does_not_mutate() {
    let mut queue = MinHeapQueue::new();
    let mut trace = TraceBuilder::new();
    queue.enqueue(&mut trace, PqValue::Number(1.0), 1);
    queue.enqueue(&mut trace, PqValue::Number(2.0), 2);

    let before = queue.items().to_vec();
    let peeked = queue.peek(&mut trace).expect("queue not empty");
    assert_eq!(peeked.priority, 1);
    assert_eq!(queue.items(), &before[..]);
}

#[test]
fn heap_reset_discards_contents() {
    let mut queue = MinHeapQueue::new();
    let mut trace = TraceBuilder::new();
    queue.enqueue(&mut trace, PqValue::Number(3.0), 3);
    queue.enqueue(&mut trace, PqValue::Number(1.0), 1);
    assert_eq!(queue.len(), 2);

    queue.reset();
    assert!(queue.is_empty());
    assert!(queue.dequeue(&mut trace).is_none());
}

#[test]
fn pq_values_order_numbers_before_texts() {
    use std::cmp::Ordering;

    let two = PqValue::Number(2.0);
    let ten = PqValue::Number(10.0);
    let apple = PqValue::Text("apple".to_string());
    let pear = PqValue::Text("pear".to_string());

    assert_eq!(two.compare(&ten), Ordering::Less);
    assert_eq!(apple.compare(&pear), Ordering::Less);
    assert_eq!(ten.compare(&apple), Ordering::Less);
    assert_eq!(pear.compare(&two), Ordering::Greater);
    assert_eq!(two.compare(&PqValue::Number(2.0)), Ordering::Equal);
}

#[test]
fn union_find_is_idempotent_and_monotonic() {
    let mut dsu = UnionFind::new(8);

    for x in 0..8 {
        assert_eq!(dsu.find(x), x);
        let root = dsu.find(x);
        assert_eq!(dsu.find(root), root, "find(find(x)) != find(x)");
    }

    assert_eq!(dsu.union(1, 2), UnionOutcome::Unified);
    assert_eq!(dsu.union(3, 4), UnionOutcome::Unified);
    assert_eq!(dsu.find(1), dsu.find(2));

    assert_eq!(dsu.union(2, 1), UnionOutcome::AlreadyUnified);

    assert_eq!(dsu.union(1, 3), UnionOutcome::Unified);
    // Never un-unified.
    assert_eq!(dsu.find(1), dsu.find(4));
    assert_eq!(dsu.find(2), dsu.find(3));
}

#[test]
fn union_find_compresses_paths() {
    let mut dsu = UnionFind::new(6);
    // Two rank-1 trees merged on a tie leave 3 two hops from the root.
    dsu.union(0, 1);
    dsu.union(2, 3);
    dsu.union(0, 2);
    assert_eq!(dsu.parent_slice()[3], 2);
    assert_eq!(dsu.parent_slice()[2], 0);

    let root = dsu.find(3);
    assert_eq!(root, 0);
    // find repointed the whole path, not just the query node.
    assert_eq!(dsu.parent_slice()[3], 0);
    for x in 0..4 {
        dsu.find(x);
        assert_eq!(dsu.parent_slice()[x], root);
    }
}

#[test]
fn kruskal_finds_the_chain_mst() {
    let edges = input::parse_edge_list(4, "0-1(1);1-2(2);2-3(3);0-3(4)").unwrap();
    let mut trace = TraceBuilder::new();
    let result = kruskal::run(4, edges, &mut trace);

    assert_eq!(result.outcome, MstOutcome::Spanning);
    assert_eq!(result.cost, 6.0);
    let pairs: Vec<(usize, usize)> = result.edges.iter().map(|e| (e.u, e.v)).collect();
    assert_eq!(pairs, vec![(0, 1), (1, 2), (2, 3)]);
}

#[test]
fn kruskal_reports_disconnected_graphs() {
    let edges = vec![Edge { u: 0, v: 1, weight: 1.0 }];
    let mut trace = TraceBuilder::new();
    let result = kruskal::run(4, edges, &mut trace);

    assert_eq!(result.outcome, MstOutcome::Disconnected);
    assert_eq!(result.edges.len(), 1);
    let trace = trace.finish();
    assert!(trace
        .last()
        .expect("trace is never empty")
        .narrative
        .contains("disconnected"));
}

#[test]
fn kruskal_breaks_weight_ties_by_input_order() {
    // All weights equal: the two earliest input edges must win.
    let edges = input::parse_edge_list(3, "0-1(1);0-2(1);1-2(1)").unwrap();
    let mut trace = TraceBuilder::new();
    let result = kruskal::run(3, edges, &mut trace);

    let pairs: Vec<(usize, usize)> = result.edges.iter().map(|e| (e.u, e.v)).collect();
    assert_eq!(pairs, vec![(0, 1), (0, 2)]);
}

/// Minimum spanning-tree cost by exhaustive subset search, for cross-checking.
fn brute_force_mst_cost(vertices: usize, edges: &[Edge]) -> Option<f64> {
    let need = vertices - 1;
    let mut best: Option<f64> = None;
    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != need {
            continue;
        }
        let mut dsu = UnionFind::new(vertices);
        let mut cost = 0.0;
        let mut ok = true;
        for (i, edge) in edges.iter().enumerate() {
            if mask & (1 << i) != 0 {
                if dsu.union(edge.u, edge.v) == UnionOutcome::AlreadyUnified {
                    ok = false;
                    break;
                }
                cost += edge.weight;
            }
        }
        if !ok {
            continue;
        }
        let root = dsu.find(0);
        if (0..vertices).all(|v| dsu.find(v) == root) {
            best = Some(match best {
                Some(b) if b <= cost => b,
                _ => cost,
            });
        }
    }
    best
}

#[test]
fn kruskal_matches_brute_force_on_small_graphs() {
    let cases = [
        (4usize, "0-1(1);1-2(2);2-3(3);0-3(4);0-2(5)"),
        (5, "0-1(4);0-2(3);1-2(1);1-3(2);2-3(4);3-4(2);2-4(5)"),
        (6, "0-1(7);0-2(8);1-2(3);1-3(6);2-3(4);2-4(3);3-4(2);3-5(5);4-5(2)"),
        (4, "0-1(-2);1-2(-3);2-3(1);0-3(-1)"),
    ];
    for (vertices, spec) in cases {
        let edges = input::parse_edge_list(vertices, spec).unwrap();
        let mut trace = TraceBuilder::new();
        let result = kruskal::run(vertices, edges.clone(), &mut trace);
        let expected = brute_force_mst_cost(vertices, &edges).expect("graph is connected");

        assert_eq!(result.outcome, MstOutcome::Spanning, "graph {}", spec);
        assert_eq!(result.cost, expected, "graph {}", spec);
        assert_eq!(result.edges.len(), vertices - 1);
    }
}

#[test]
fn morris_visits_in_order_and_restores_the_tree() {
    let tree = input::parse_tree("4,2,6,1,3,5,7").unwrap();
    let mut traversal = MorrisTraversal::new(tree.clone());
    let mut trace = TraceBuilder::new();
    let order = traversal.run(&mut trace);

    assert_eq!(order, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(traversal.tree(), &tree, "structural pointers changed");

    let trace = trace.finish();
    let last = trace.last().expect("trace is never empty");
    assert!(last.snapshot.threads.is_empty(), "residual threads remain");
    assert_eq!(last.snapshot.nodes, tree.nodes);
}

#[test]
fn morris_matches_recursive_inorder_on_assorted_shapes() {
    let shapes = [
        "42",
        "3,2,x,1",          // left-skewed
        "1,x,2,x,3",        // right-skewed
        "8,4,12,2,6,10,14,1,3,5,7,9,11,13,15",
        "5,3,9,1,4,x,10,x,2",
        "2,1,x,x,x",
    ];
    for shape in shapes {
        let tree = input::parse_tree(shape).unwrap();
        let mut traversal = MorrisTraversal::new(tree.clone());
        let mut trace = TraceBuilder::new();
        let order = traversal.run(&mut trace);
        assert_eq!(order, tree.recursive_inorder(), "shape {}", shape);
        assert_eq!(traversal.tree(), &tree, "shape {}", shape);
    }
}

#[test]
fn morris_threads_appear_mid_run_and_vanish_by_the_end() {
    let tree = input::parse_tree("4,2,6,1,3,5,7").unwrap();
    let mut traversal = MorrisTraversal::new(tree);
    let mut trace = TraceBuilder::new();
    traversal.run(&mut trace);

    let trace = trace.finish();
    assert!(
        trace.iter().any(|s| !s.snapshot.threads.is_empty()),
        "no thread was ever created"
    );
    assert!(trace.last().unwrap().snapshot.threads.is_empty());
}

#[test]
fn morris_empty_tree_emits_one_step() {
    let tree = input::parse_tree("").unwrap();
    let mut traversal = MorrisTraversal::new(tree);
    let mut trace = TraceBuilder::new();
    let order = traversal.run(&mut trace);

    assert!(order.is_empty());
    assert_eq!(trace.finish().len(), 1);
}

fn assert_valid_path(maze: &maze::Maze, path: &[(usize, usize)]) {
    assert!(!path.is_empty());
    assert_eq!(path[0], (0, 0));
    assert_eq!(
        *path.last().unwrap(),
        (maze.rows() - 1, maze.cols() - 1)
    );
    for &(r, c) in path {
        assert!(maze.is_open(r, c), "path crosses a wall at ({}, {})", r, c);
    }
    for pair in path.windows(2) {
        let (r0, c0) = pair[0];
        let (r1, c1) = pair[1];
        let dist = r0.abs_diff(r1) + c0.abs_diff(c1);
        assert_eq!(dist, 1, "path jumps from ({}, {}) to ({}, {})", r0, c0, r1, c1);
    }
}

#[test]
fn maze_routes_around_a_center_wall() {
    let maze = input::parse_maze("1,1,1\n1,0,1\n1,1,1").unwrap();
    let mut trace = TraceBuilder::new();
    let report = maze::solve(&maze, SearchMode::FirstPath, &mut trace);

    match &report.outcome {
        SearchOutcome::Found(path) => {
            assert_valid_path(&maze, path);
            assert!(!path.contains(&(1, 1)));
        }
        SearchOutcome::NotFound => panic!("a path exists"),
    }
}

#[test]
fn maze_reports_failure_when_walled_off() {
    let maze = input::parse_maze("1,0\n0,1").unwrap();
    let mut trace = TraceBuilder::new();
    let report = maze::solve(&maze, SearchMode::FirstPath, &mut trace);

    assert_eq!(report.outcome, SearchOutcome::NotFound);
    assert!(report.solutions.is_empty());

    // No stale marks survive backtracking: the final snapshot is clean.
    let trace = trace.finish();
    let last = trace.last().unwrap();
    assert!(last.snapshot.on_path.iter().flatten().all(|&m| !m));
}

#[test]
fn maze_first_path_prefers_right_then_down() {
    let maze = input::parse_maze("1,1\n1,1").unwrap();
    let mut trace = TraceBuilder::new();
    let report = maze::solve(&maze, SearchMode::FirstPath, &mut trace);

    assert_eq!(
        report.outcome,
        SearchOutcome::Found(vec![(0, 0), (0, 1), (1, 1)])
    );
    assert_eq!(report.solutions.len(), 1);

    // The successful path stays marked in the final snapshot.
    let trace = trace.finish();
    let last = trace.last().unwrap();
    for &(r, c) in &[(0, 0), (0, 1), (1, 1)] {
        assert!(last.snapshot.on_path[r][c]);
    }
    assert!(!last.snapshot.on_path[1][0]);
}

#[test]
fn maze_all_paths_enumerates_every_solution() {
    let maze = input::parse_maze("1,1\n1,1").unwrap();
    let mut trace = TraceBuilder::new();
    let report = maze::solve(&maze, SearchMode::AllPaths, &mut trace);

    assert_eq!(report.solutions.len(), 2);
    for path in &report.solutions {
        assert_valid_path(&maze, path);
    }
    // Right-first ordering: the right-then-down path is discovered first.
    assert_eq!(report.solutions[0], vec![(0, 0), (0, 1), (1, 1)]);
    assert_eq!(report.solutions[1], vec![(0, 0), (1, 0), (1, 1)]);

    // All-paths mode unmarks everything, including successful paths.
    let trace = trace.finish();
    let last = trace.last().unwrap();
    assert!(last.snapshot.on_path.iter().flatten().all(|&m| !m));
}

#[test]
fn maze_single_cell_is_its_own_path() {
    let maze = input::parse_maze("1").unwrap();
    let mut trace = TraceBuilder::new();
    let report = maze::solve(&maze, SearchMode::FirstPath, &mut trace);
    assert_eq!(report.outcome, SearchOutcome::Found(vec![(0, 0)]));
}

#[test]
fn traces_are_deterministic() {
    let run_kruskal = || {
        let edges = input::parse_edge_list(4, "0-1(1);1-2(2);2-3(3);0-3(4)").unwrap();
        let mut trace = TraceBuilder::new();
        kruskal::run(4, edges, &mut trace);
        trace.finish()
    };
    let a = run_kruskal();
    let b = run_kruskal();
    assert_eq!(a.len(), b.len());
    for (sa, sb) in a.iter().zip(b.iter()) {
        assert_eq!(sa.index, sb.index);
        assert_eq!(sa.narrative, sb.narrative);
        assert_eq!(sa.highlights, sb.highlights);
        assert_eq!(sa.line, sb.line);
        assert_eq!(sa.snapshot.parent, sb.snapshot.parent);
        assert_eq!(sa.snapshot.mst, sb.snapshot.mst);
    }

    let run_maze = || {
        let maze = input::parse_maze("1,1,1\n1,0,1\n1,1,1").unwrap();
        let mut trace = TraceBuilder::new();
        maze::solve(&maze, SearchMode::AllPaths, &mut trace);
        trace.finish()
    };
    let a = run_maze();
    let b = run_maze();
    assert_eq!(a.len(), b.len());
    for (sa, sb) in a.iter().zip(b.iter()) {
        assert_eq!(sa.narrative, sb.narrative);
        assert_eq!(sa.snapshot.on_path, sb.snapshot.on_path);
    }
}

#[test]
fn trace_indices_are_strictly_increasing() {
    let edges = input::parse_edge_list(4, "0-1(1);1-2(2);2-3(3)").unwrap();
    let mut trace = TraceBuilder::new();
    kruskal::run(4, edges, &mut trace);
    let trace = trace.finish();

    assert!(!trace.is_empty());
    for (expected, step) in trace.iter().enumerate() {
        assert_eq!(step.index, expected);
    }
}

#[test]
fn snapshots_are_independent_copies() {
    // Earlier steps must not reflect later mutations: the heap array in the
    // first enqueue step stays one element long forever.
    let mut queue = MinHeapQueue::new();
    let mut trace = TraceBuilder::new();
    queue.enqueue(&mut trace, PqValue::Number(5.0), 5);
    queue.enqueue(&mut trace, PqValue::Number(2.0), 2);
    queue.enqueue(&mut trace, PqValue::Number(8.0), 8);

    let trace = trace.finish();
    let first = trace.get(0).unwrap();
    assert_eq!(first.snapshot.items.len(), 1);
    assert_eq!(first.snapshot.items[0].priority, 5);
}
