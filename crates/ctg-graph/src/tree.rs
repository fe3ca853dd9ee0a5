//! Arena-backed contig tree.
//!
//! Nodes live in a single `Vec` and refer to their children by index. They
//! are appended in the order the traversal visits them (depth-first
//! pre-order), so the arena doubles as the flat visit list: walking it front
//! to back yields every segment in visit order, revisits included.

use serde::{Deserialize, Serialize};

use crate::segment::Segment;

/// Index of a node within its [`ContigTree`].
pub type NodeIndex = usize;

/// One visited contig and the links expanded from it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub segment: Segment,
    /// Number of link hops from the root.
    pub depth: usize,
    /// Children in link order.
    pub children: Vec<NodeIndex>,
}

/// A bounded-depth tree of contigs rooted at one (id, orientation) pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContigTree {
    nodes: Vec<TreeNode>,
}

impl ContigTree {
    /// Index of the root node.
    pub const ROOT: NodeIndex = 0;

    pub(crate) fn new(root: Segment) -> Self {
        Self {
            nodes: vec![TreeNode {
                segment: root,
                depth: 0,
                children: Vec::new(),
            }],
        }
    }

    /// Append `segment` as the last child of `parent`.
    pub(crate) fn push_child(&mut self, parent: NodeIndex, segment: Segment) -> NodeIndex {
        let index = self.nodes.len();
        let depth = self.nodes[parent].depth + 1;
        self.nodes.push(TreeNode {
            segment,
            depth,
            children: Vec::new(),
        });
        self.nodes[parent].children.push(index);
        index
    }

    pub fn root(&self) -> &TreeNode {
        &self.nodes[Self::ROOT]
    }

    pub fn node(&self, index: NodeIndex) -> Option<&TreeNode> {
        self.nodes.get(index)
    }

    /// The children of `index`, in link order.
    pub fn children(&self, index: NodeIndex) -> impl Iterator<Item = &TreeNode> + '_ {
        self.nodes
            .get(index)
            .into_iter()
            .flat_map(move |node| node.children.iter().map(move |&c| &self.nodes[c]))
    }

    /// Total number of visits, revisits included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in visit order.
    pub fn iter(&self) -> std::slice::Iter<'_, TreeNode> {
        self.nodes.iter()
    }

    /// All segments in visit order.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.nodes.iter().map(|n| &n.segment)
    }

    /// Consume the tree, keeping the flat visit list.
    pub fn into_segments(self) -> Vec<Segment> {
        self.nodes.into_iter().map(|n| n.segment).collect()
    }

    /// Greatest depth reached.
    pub fn height(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a ContigTree {
    type Item = &'a TreeNode;
    type IntoIter = std::slice::Iter<'a, TreeNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
