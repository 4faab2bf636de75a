//! Exact values of tree positions.
//!
//! A `GameTree` is an immutable snapshot of a `GameGraph` that passed tree
//! certification. Nodes are stored in a flat arena in breadth-first order,
//! so every child sits at a higher index than its parent and values can be
//! computed with a single reverse sweep instead of recursion.
//!
//! ## Value rule
//!
//! Let `C` be the sum of a node's children's values (red children first,
//! then blue). A leaf is worth `-1` on a red stem, `+1` on a blue stem and
//! `0` at the root. Otherwise:
//!
//! - root: `C`
//! - red stem: the smallest `n >= 1` with `C < n - 1`, value `(C - n) / 2^(n-1)`
//! - blue stem: the smallest `n >= 1` with `C > 1 - n`, value `(C + n) / 2^(n-1)`
//!
//! ```
//! use hackenbush::graph::GameGraph;
//! use hackenbush::tree::GameTree;
//!
//! // Red stick at the ground carrying a blue stick.
//! let red = vec![vec![0, 1, 0], vec![1, 0, 0], vec![0, 0, 0]];
//! let blue = vec![vec![0, 0, 0], vec![0, 0, 1], vec![0, 1, 0]];
//! let graph = GameGraph::new(3, &red, &blue).unwrap();
//!
//! let tree = GameTree::from_graph(&graph).unwrap();
//! assert_eq!(tree.value().unwrap().to_string(), "-1/2");
//! ```

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

use super::node::{NodeId, TreeNode};
use crate::core::{Color, TreeError, ValueError};
use crate::graph::{GameGraph, GROUND};
use crate::value::Rational;

/// Arena-based tree snapshot of a position.
#[derive(Clone, Debug)]
pub struct GameTree {
    /// All nodes in breadth-first order.
    nodes: Vec<TreeNode>,

    /// Node for each reachable vertex.
    by_vertex: FxHashMap<usize, NodeId>,

    /// Position version this tree was built from.
    source_version: u64,
}

impl GameTree {
    /// Build a tree snapshot of `graph`.
    ///
    /// Fails with `TreeError::NotATree` unless `graph.is_tree()` holds.
    pub fn from_graph(graph: &GameGraph) -> Result<Self, TreeError> {
        if !graph.is_tree() {
            return Err(TreeError::NotATree);
        }

        let red = graph.edges(Color::Red);
        let blue = graph.edges(Color::Blue);
        let heights = graph.height_map();

        let mut tree = Self {
            nodes: Vec::with_capacity(graph.size()),
            by_vertex: FxHashMap::default(),
            source_version: graph.version(),
        };
        tree.nodes.push(TreeNode::root(GROUND));
        tree.by_vertex.insert(GROUND, NodeId::new(0));

        for height in 0..=heights.max_height() {
            for &vertex in heights.at_height(height) {
                let parent = tree.by_vertex[&vertex];
                for next in 0..graph.size() {
                    if !heights.is_reachable(next) || heights.get(next) <= height {
                        continue;
                    }
                    let stem = if red.get(vertex, next) == 1 {
                        Color::Red
                    } else if blue.get(vertex, next) == 1 {
                        Color::Blue
                    } else {
                        continue;
                    };
                    tree.attach(parent, next, stem)?;
                }
            }
        }

        log::trace!(
            "built tree of {} nodes at version {}",
            tree.nodes.len(),
            tree.source_version
        );
        Ok(tree)
    }

    fn attach(&mut self, parent: NodeId, vertex: usize, stem: Color) -> Result<NodeId, TreeError> {
        let id = NodeId::from_index(self.nodes.len()).ok_or(TreeError::TooManyNodes {
            limit: u32::MAX as usize,
        })?;
        let depth = self.nodes[parent.index()].depth + 1;
        self.nodes.push(TreeNode::new(vertex, parent, stem, depth));
        let parent_node = &mut self.nodes[parent.index()];
        match stem {
            Color::Red => parent_node.red_children.push(id),
            Color::Blue => parent_node.blue_children.push(id),
        }
        self.by_vertex.insert(vertex, id);
        Ok(id)
    }

    // === Structure ===

    /// The root node ID (the ground).
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.index()]
    }

    /// Parent of `id`, `None` at the root.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.get(id).parent;
        (!parent.is_none()).then_some(parent)
    }

    /// Node for a vertex of the source position, if it is reachable.
    #[must_use]
    pub fn find(&self, vertex: usize) -> Option<NodeId> {
        self.by_vertex.get(&vertex).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in breadth-first order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &TreeNode)> {
        (0u32..).map(NodeId::new).zip(self.nodes.iter())
    }

    /// Version of the position this snapshot was taken from.
    #[must_use]
    pub fn source_version(&self) -> u64 {
        self.source_version
    }

    /// Whether `graph` has not moved since this snapshot.
    #[must_use]
    pub fn is_current(&self, graph: &GameGraph) -> bool {
        graph.version() == self.source_version
    }

    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let count = |color: Color| self.nodes.iter().filter(|n| n.stem == Some(color)).count();
        TreeStats {
            node_count: self.nodes.len(),
            max_depth: self.nodes.iter().map(|n| n.depth).max().unwrap_or(0),
            leaf_count: self.nodes.iter().filter(|n| n.is_leaf()).count(),
            red_stems: count(Color::Red),
            blue_stems: count(Color::Blue),
        }
    }

    // === Values ===

    /// Value of the whole position.
    pub fn value(&self) -> Result<Rational, ValueError> {
        self.node_value(self.root())
    }

    /// Value of the position, refusing a snapshot that `graph` has outrun.
    pub fn value_for(&self, graph: &GameGraph) -> Result<Rational, ValueError> {
        if !self.is_current(graph) {
            return Err(ValueError::StaleTree {
                built: self.source_version,
                current: graph.version(),
            });
        }
        self.value()
    }

    /// Value of the subtree at `id` together with the stem it sits on.
    ///
    /// Computed once per node and cached. Only the subtree at `id` is
    /// evaluated.
    pub fn node_value(&self, id: NodeId) -> Result<Rational, ValueError> {
        if let Some(value) = self.get(id).cached_value() {
            return Ok(value);
        }
        // Post-order over the subtree at `id` only. `id` is pushed first,
        // so it is the last node evaluated.
        let mut value = Rational::ZERO;
        let mut stack = vec![(id, false)];
        while let Some((current, expanded)) = stack.pop() {
            let node = self.get(current);
            if let Some(cached) = node.cached_value() {
                value = cached;
                continue;
            }
            if expanded {
                value = self.evaluate(node)?;
                let _ = node.value.set(value);
            } else {
                stack.push((current, true));
                stack.extend(node.all_children().map(|child| (child, false)));
            }
        }
        Ok(value)
    }

    /// Values of the children of `id`, red children first.
    pub fn child_values(&self, id: NodeId) -> Result<Vec<Rational>, ValueError> {
        self.get(id)
            .all_children()
            .map(|child| self.node_value(child))
            .collect()
    }

    fn evaluate(&self, node: &TreeNode) -> Result<Rational, ValueError> {
        if node.is_leaf() {
            return Ok(match node.stem {
                Some(Color::Red) => Rational::MINUS_ONE,
                Some(Color::Blue) => Rational::ONE,
                None => Rational::ZERO,
            });
        }

        let values = node
            .all_children()
            .map(|child| self.node_value(child))
            .collect::<Result<Vec<_>, _>>()?;
        let children = Rational::sum(values)?;

        let value = match node.stem {
            None => children,
            Some(stem) => stem_value(children, stem)?,
        };
        log::trace!("vertex {} ({:?} stem): {children} -> {value}", node.vertex, node.stem);
        Ok(value)
    }
}

/// Value of a subtree worth `children` placed on a `stem` stick.
pub fn stem_value(children: Rational, stem: Color) -> Result<Rational, ValueError> {
    let mut n: i64 = 1;
    match stem {
        Color::Red => {
            while children.cmp_integer(n - 1) != Ordering::Less {
                n += 1;
            }
            children.shift_and_halve(n, halvings(n)?)
        }
        Color::Blue => {
            while children.cmp_integer(1 - n) != Ordering::Greater {
                n += 1;
            }
            children.shift_and_halve(-n, halvings(n)?)
        }
    }
}

fn halvings(n: i64) -> Result<u32, ValueError> {
    u32::try_from(n - 1).map_err(|_| ValueError::Overflow)
}

/// Statistics about a tree snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes, root included.
    pub node_count: usize,

    /// Deepest node below the root.
    pub max_depth: u32,

    pub leaf_count: usize,

    /// Nodes on a red stem.
    pub red_stems: usize,

    /// Nodes on a blue stem.
    pub blue_stems: usize,
}
