//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use state_search::{ExprTree, ExpressionTreePuzzle, PuzzleState};

/// Explicit directed graph; successors are listed in insertion order.
#[derive(Debug, Default)]
pub struct Graph {
    edges: BTreeMap<u32, Vec<u32>>,
    goals: BTreeSet<u32>,
    dead: BTreeSet<u32>,
    expansions: Cell<usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edge(mut self, from: u32, to: u32) -> Self {
        self.edges.entry(from).or_default().push(to);
        self
    }

    pub fn goal(mut self, node: u32) -> Self {
        self.goals.insert(node);
        self
    }

    /// Nodes that report `fail_fast`.
    pub fn dead(mut self, node: u32) -> Self {
        self.dead.insert(node);
        self
    }

    pub fn start(self, node: u32) -> Node {
        Node {
            id: node,
            graph: Rc::new(self),
        }
    }
}

/// Position in a [`Graph`].
#[derive(Debug, Clone)]
pub struct Node {
    pub id: u32,
    graph: Rc<Graph>,
}

impl Node {
    /// Number of `extensions()` calls made on any node of this graph.
    pub fn expansions(&self) -> usize {
        self.graph.expansions.get()
    }
}

impl PuzzleState for Node {
    type Key = u32;

    fn extensions(&self) -> Vec<Self> {
        self.graph.expansions.set(self.graph.expansions.get() + 1);
        self.graph
            .edges
            .get(&self.id)
            .map(|next| {
                next.iter()
                    .map(|&id| Node {
                        id,
                        graph: Rc::clone(&self.graph),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn is_solved(&self) -> bool {
        self.graph.goals.contains(&self.id)
    }

    fn fail_fast(&self) -> bool {
        self.graph.dead.contains(&self.id)
    }

    fn identity(&self) -> u32 {
        self.id
    }
}

/// 0 -> 1 -> 2 -> 3 -> 4 is listed first; 0 -> 5 -> 4 is the shortcut.
pub fn long_and_short_route() -> Node {
    Graph::new()
        .edge(0, 1)
        .edge(0, 5)
        .edge(1, 2)
        .edge(2, 3)
        .edge(3, 4)
        .edge(5, 4)
        .goal(4)
        .start(0)
}

/// a * 3 = 15: only a = 5 works.
pub fn single_variable_puzzle() -> ExpressionTreePuzzle {
    ExpressionTreePuzzle::new(ExprTree::mul(vec![ExprTree::var("a"), ExprTree::num(3)]), 15)
        .unwrap()
}

/// a * b = 37 has no single-digit factorisation.
pub fn unreachable_target_puzzle() -> ExpressionTreePuzzle {
    ExpressionTreePuzzle::new(ExprTree::mul(vec![ExprTree::var("a"), ExprTree::var("b")]), 37)
        .unwrap()
}

/// a + 10 = 5 is below the smallest reachable value.
pub fn target_below_minimum_puzzle() -> ExpressionTreePuzzle {
    ExpressionTreePuzzle::new(ExprTree::add(vec![ExprTree::var("a"), ExprTree::num(10)]), 5)
        .unwrap()
}

/// ((a * (b + 6 + 6)) + 5) = 61: a = 4, b = 2.
pub fn nested_puzzle() -> ExpressionTreePuzzle {
    let tree = ExprTree::add(vec![
        ExprTree::mul(vec![
            ExprTree::var("a"),
            ExprTree::add(vec![ExprTree::var("b"), ExprTree::num(6), ExprTree::num(6)]),
        ]),
        ExprTree::num(5),
    ]);
    ExpressionTreePuzzle::new(tree, 61).unwrap()
}
