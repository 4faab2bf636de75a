//! Tree node structures.
//!
//! Nodes live in the `GameTree` arena and refer to each other by `NodeId`.
//! A node owns nothing: the arena owns every node, children are index
//! lists split by stem color, and the parent link is a plain index.

use std::cell::OnceCell;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Color;
use crate::value::Rational;

/// Index into the `GameTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// ID for an arena index, `None` if it would not fit below `NONE`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index)
            .ok()
            .filter(|&id| id != u32::MAX)
            .map(Self)
    }

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// A vertex of a tree position.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TreeNode {
    /// Vertex index in the source position.
    pub vertex: usize,

    /// Parent node (NONE for the root).
    pub parent: NodeId,

    /// Color of the stick joining this node to its parent (`None` at the root).
    pub stem: Option<Color>,

    /// Children hanging from red sticks, in discovery order.
    pub red_children: SmallVec<[NodeId; 4]>,

    /// Children hanging from blue sticks, in discovery order.
    pub blue_children: SmallVec<[NodeId; 4]>,

    /// Depth below the root.
    pub depth: u32,

    #[serde(skip)]
    pub(crate) value: OnceCell<Rational>,
}

impl TreeNode {
    /// Create a node hanging from `parent` by a `stem` stick.
    #[must_use]
    pub fn new(vertex: usize, parent: NodeId, stem: Color, depth: u32) -> Self {
        Self {
            vertex,
            parent,
            stem: Some(stem),
            red_children: SmallVec::new(),
            blue_children: SmallVec::new(),
            depth,
            value: OnceCell::new(),
        }
    }

    /// Create the root (ground) node.
    #[must_use]
    pub fn root(vertex: usize) -> Self {
        Self {
            vertex,
            parent: NodeId::NONE,
            stem: None,
            red_children: SmallVec::new(),
            blue_children: SmallVec::new(),
            depth: 0,
            value: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.red_children.is_empty() && self.blue_children.is_empty()
    }

    /// Children joined by `color` sticks.
    #[must_use]
    pub fn children(&self, color: Color) -> &[NodeId] {
        match color {
            Color::Red => self.red_children.as_slice(),
            Color::Blue => self.blue_children.as_slice(),
        }
    }

    /// All children, red first then blue.
    pub fn all_children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.red_children.iter().chain(self.blue_children.iter()).copied()
    }

    /// Cached value, if it has been computed.
    #[must_use]
    pub fn cached_value(&self) -> Option<Rational> {
        self.value.get().copied()
    }
}
