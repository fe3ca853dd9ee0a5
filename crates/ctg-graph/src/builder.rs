//! Orientation-aware, depth-bounded tree construction.
//!
//! [`TreeBuilder`] walks the link graph from a starting contig. Each visited
//! contig is located, oriented and appended to the tree; its links are then
//! expanded if the depth allows, following only those links declared for the
//! orientation the contig is currently read in. A link's far-side symbol sets
//! the child's orientation.
//!
//! The walk uses an explicit stack rather than recursion. Children are pushed
//! in reverse link order so they pop in link order, which reproduces a
//! recursive depth-first pre-order exactly. There is no cycle detection: a
//! cycle shorter than the depth bound revisits contigs, and each revisit is
//! its own node.

use tracing::{debug, trace};

use ctg_store::RecordSource;
use ctg_types::{ContigId, Orientation};

use crate::error::GraphResult;
use crate::link::{link_tokens, Link};
use crate::segment::Segment;
use crate::tree::{ContigTree, NodeIndex};

/// A link waiting to be visited.
struct Pending {
    id: ContigId,
    orientation: Orientation,
    parent: NodeIndex,
}

/// Builds [`ContigTree`]s from a [`RecordSource`].
pub struct TreeBuilder<S> {
    source: S,
}

impl<S: RecordSource> TreeBuilder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Build the tree rooted at `start` read in `orientation`.
    ///
    /// Nodes at `max_depth` are visited but not expanded, so `max_depth = 0`
    /// yields a lone root. Any lookup or parse failure aborts the build.
    pub fn build(
        &self,
        start: ContigId,
        max_depth: usize,
        orientation: Orientation,
    ) -> GraphResult<ContigTree> {
        let mut tree = ContigTree::new(self.visit(start, orientation)?);
        let mut stack = Vec::new();
        self.expand(&tree, ContigTree::ROOT, max_depth, &mut stack)?;

        while let Some(next) = stack.pop() {
            let segment = self.visit(next.id, next.orientation)?;
            let index = tree.push_child(next.parent, segment);
            self.expand(&tree, index, max_depth, &mut stack)?;
        }

        debug!(
            root = %start,
            %orientation,
            max_depth,
            visits = tree.len(),
            "built contig tree"
        );
        Ok(tree)
    }

    fn visit(&self, id: ContigId, orientation: Orientation) -> GraphResult<Segment> {
        let record = self.source.locate(id)?;
        Ok(Segment::from_record(record, orientation))
    }

    /// Queue the eligible links of node `index`.
    fn expand(
        &self,
        tree: &ContigTree,
        index: NodeIndex,
        max_depth: usize,
        stack: &mut Vec<Pending>,
    ) -> GraphResult<()> {
        let Some(node) = tree.node(index) else {
            return Ok(());
        };
        let tokens = link_tokens(&node.segment.header)?;
        if node.depth >= max_depth || tokens.is_empty() {
            return Ok(());
        }

        let links = tokens
            .into_iter()
            .map(Link::parse)
            .collect::<GraphResult<Vec<_>>>()?;
        let orientation = node.segment.orientation;

        for link in links.iter().rev().filter(|l| l.applies_to(orientation)) {
            trace!(from = %node.segment.id, to = %link.target, depth = node.depth + 1, "follow link");
            stack.push(Pending {
                id: link.target,
                orientation: link.other_side,
                parent: index,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use ctg_store::{ContigFile, InMemoryContigs, LocatorConfig, StoreError};
    use ctg_types::sequence::reverse_complement;

    use super::*;
    use crate::error::GraphError;

    fn build(text: &str, start: u64, depth: usize, orientation: Orientation) -> GraphResult<ContigTree> {
        TreeBuilder::new(InMemoryContigs::new(text)).build(ContigId::new(start), depth, orientation)
    }

    fn ids(tree: &ContigTree) -> Vec<u64> {
        tree.segments().map(|s| s.id.get()).collect()
    }

    #[test]
    fn three_record_example() {
        let text = ">1 LN:i:4 L:+:2:-\nAACG\n>2 LN:i:5\nGGATC\n>3 LN:i:3\nTTA\n";
        let tree = build(text, 1, 1, Orientation::Forward).unwrap();

        assert_eq!(tree.len(), 2);
        let root = tree.root();
        assert_eq!(root.segment.id, ContigId::new(1));
        assert_eq!(root.segment.sequence, "AACG");
        assert_eq!(root.children.len(), 1);

        let child = tree.node(root.children[0]).unwrap();
        assert_eq!(child.segment.id, ContigId::new(2));
        assert_eq!(child.segment.orientation, Orientation::Reverse);
        assert_eq!(child.segment.sequence, reverse_complement("GGATC"));
        assert_eq!(child.depth, 1);
    }

    #[test]
    fn depth_zero_is_root_only() {
        let text = ">1 L:+:2:+ L:+:3:+\nA\n>2\nC\n>3\nG\n";
        let tree = build(text, 1, 0, Orientation::Forward).unwrap();
        assert_eq!(tree.len(), 1);
        assert!(tree.root().children.is_empty());
    }

    #[test]
    fn orientation_filters_links() {
        let text = ">1 L:+:2:+ L:-:3:+\nA\n>2\nC\n>3\nG\n";
        let fwd = build(text, 1, 1, Orientation::Forward).unwrap();
        assert_eq!(ids(&fwd), vec![1, 2]);

        let rev = build(text, 1, 1, Orientation::Reverse).unwrap();
        assert_eq!(ids(&rev), vec![1, 3]);
        assert_eq!(rev.root().segment.sequence, "T");
    }

    #[test]
    fn visits_in_depth_first_preorder() {
        // 1 -> (2 -> 4, 3 -> 5)
        let text = concat!(
            ">1 L:+:2:+ L:+:3:+\nA\n",
            ">2 L:+:4:+\nC\n",
            ">3 L:+:5:+\nG\n",
            ">4\nT\n",
            ">5\nA\n",
        );
        let tree = build(text, 1, 3, Orientation::Forward).unwrap();
        assert_eq!(ids(&tree), vec![1, 2, 4, 3, 5]);
        let child_ids: Vec<u64> = tree
            .children(ContigTree::ROOT)
            .map(|n| n.segment.id.get())
            .collect();
        assert_eq!(child_ids, vec![2, 3]);
    }

    #[test]
    fn cycles_revisit_until_depth_bound() {
        let text = ">1 L:+:2:+\nAC\n>2 L:+:1:+\nGT\n";
        let tree = build(text, 1, 3, Orientation::Forward).unwrap();
        assert_eq!(ids(&tree), vec![1, 2, 1, 2]);
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn orientation_flips_along_path() {
        // 1(+) -> 2(-) ; from 2 read in reverse only the '-' link applies.
        let text = ">1 L:+:2:-\nAAA\n>2 L:-:3:- L:+:1:+\nCCA\n>3\nGTT\n";
        let tree = build(text, 1, 2, Orientation::Forward).unwrap();
        let segs: Vec<_> = tree.segments().collect();
        assert_eq!(ids(&tree), vec![1, 2, 3]);
        assert_eq!(segs[1].orientation, Orientation::Reverse);
        assert_eq!(segs[1].sequence, "TGG");
        assert_eq!(segs[2].orientation, Orientation::Reverse);
        assert_eq!(segs[2].sequence, "AAC");
    }

    #[test]
    fn malformed_link_aborts() {
        let text = ">1 L:+:two:+\nA\n>2\nC\n";
        let err = build(text, 1, 1, Orientation::Forward).unwrap_err();
        assert!(matches!(err, GraphError::MalformedLink { .. }));
    }

    #[test]
    fn malformed_link_beyond_depth_is_ignored() {
        let text = ">1 L:+:two:+\nA\n>2\nC\n";
        let tree = build(text, 1, 0, Orientation::Forward).unwrap();
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn missing_target_aborts() {
        let text = ">1 L:+:9:+\nA\n>2\nC\n";
        let err = build(text, 1, 1, Orientation::Forward).unwrap_err();
        assert!(matches!(err, GraphError::Store(StoreError::NotFound { .. })));
    }

    #[test]
    fn missing_root_aborts() {
        let err = build(">1\nA\n>2\nC\n", 40, 2, Orientation::Forward).unwrap_err();
        assert!(matches!(err, GraphError::Store(StoreError::NotFound { .. })));
    }

    #[test]
    fn builds_from_disk() {
        let text = ">1 L:+:2:-\nAACG\n>2\nGGATC\n>3\nTTA\n";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file.flush().unwrap();

        let source = ContigFile::new(file.path(), LocatorConfig::default());
        let builder = TreeBuilder::new(&source);
        let tree = builder.build(ContigId::new(1), 1, Orientation::Forward).unwrap();
        assert_eq!(tree, build(text, 1, 1, Orientation::Forward).unwrap());
    }
}
