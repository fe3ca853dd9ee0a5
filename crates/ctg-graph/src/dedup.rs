//! Collapse a flat visit list into one segment per contig id.

use std::collections::HashMap;

use ctg_types::ContigId;

use crate::segment::Segment;

/// Segments keyed by contig id, last visit wins.
///
/// A later insert with an id already present replaces the stored segment,
/// orientation included, but keeps the position where the id was first
/// seen. Iteration therefore follows first-visit order.
#[derive(Clone, Debug, Default)]
pub struct VisitSet {
    positions: HashMap<ContigId, usize>,
    segments: Vec<Segment>,
}

impl VisitSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `segment`, returning the segment it replaced, if any.
    pub fn insert(&mut self, segment: Segment) -> Option<Segment> {
        match self.positions.get(&segment.id) {
            Some(&pos) => Some(std::mem::replace(&mut self.segments[pos], segment)),
            None => {
                self.positions.insert(segment.id, self.segments.len());
                self.segments.push(segment);
                None
            }
        }
    }

    pub fn get(&self, id: ContigId) -> Option<&Segment> {
        self.positions.get(&id).map(|&pos| &self.segments[pos])
    }

    pub fn contains(&self, id: ContigId) -> bool {
        self.positions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments in first-visit order.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}

impl Extend<Segment> for VisitSet {
    fn extend<I: IntoIterator<Item = Segment>>(&mut self, iter: I) {
        for segment in iter {
            self.insert(segment);
        }
    }
}

impl FromIterator<Segment> for VisitSet {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a VisitSet {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Deduplicate `segments` by id in traversal order.
pub fn dedupe<I: IntoIterator<Item = Segment>>(segments: I) -> VisitSet {
    segments.into_iter().collect()
}
