//! Parent maps, search trees and path reconstruction.

use std::collections::HashMap;

use pathviz_core::Point;

use crate::error::PathError;

/// Node → parent links recorded while a search discovers nodes.
///
/// The search root has no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentMap {
    links: HashMap<Point, Point>,
}

impl ParentMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) the parent of `child`.
    #[inline]
    pub fn insert(&mut self, child: Point, parent: Point) {
        self.links.insert(child, parent);
    }

    #[inline]
    pub fn get(&self, child: Point) -> Option<Point> {
        self.links.get(&child).copied()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl FromIterator<(Point, Point)> for ParentMap {
    fn from_iter<I: IntoIterator<Item = (Point, Point)>>(iter: I) -> Self {
        Self {
            links: iter.into_iter().collect(),
        }
    }
}

/// An ordered route from source to goal, both inclusive. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Point>"))]
pub struct Path(Vec<Point>);

impl Path {
    /// A one-node path (source == goal).
    pub fn single(p: Point) -> Self {
        Self(vec![p])
    }

    /// Number of nodes (edges + 1).
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Number of moves.
    #[inline]
    pub fn edges(&self) -> usize {
        self.0.len() - 1
    }

    pub fn first(&self) -> Point {
        self.0[0]
    }

    pub fn last(&self) -> Point {
        self.0[self.0.len() - 1]
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    /// Append `next`, which must start where `self` ends; the shared
    /// junction node is kept once.
    pub fn extend_with(&mut self, next: &Path) {
        debug_assert_eq!(self.last(), next.first());
        self.0.extend_from_slice(&next.0[1..]);
    }
}

impl TryFrom<Vec<Point>> for Path {
    type Error = PathError;

    fn try_from(points: Vec<Point>) -> Result<Self, PathError> {
        if points.is_empty() {
            return Err(PathError::Empty);
        }
        Ok(Self(points))
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Walk `goal → parent(goal) → … → source` and return it source-first.
///
/// Fails with [`PathError::Broken`] if a link is missing or the chain does
/// not reach `source` within `parents.len() + 1` steps.
pub fn reconstruct(parents: &ParentMap, source: Point, goal: Point) -> Result<Path, PathError> {
    let mut chain = vec![goal];
    let mut cur = goal;
    while cur != source {
        let steps = chain.len() - 1;
        if steps > parents.len() {
            return Err(PathError::Broken { at: cur, steps });
        }
        cur = parents
            .get(cur)
            .ok_or(PathError::Broken { at: cur, steps })?;
        chain.push(cur);
    }
    chain.reverse();
    Ok(Path(chain))
}

/// The result of a successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tree {
    /// One parent map rooted at the source.
    Single {
        source: Point,
        goal: Point,
        parents: ParentMap,
    },
    /// Two parent maps, rooted at source and goal, joined at `meeting`.
    Meeting {
        source: Point,
        goal: Point,
        meeting: Point,
        forward: ParentMap,
        backward: ParentMap,
    },
}

impl Tree {
    pub fn source(&self) -> Point {
        match self {
            Tree::Single { source, .. } | Tree::Meeting { source, .. } => *source,
        }
    }

    pub fn goal(&self) -> Point {
        match self {
            Tree::Single { goal, .. } | Tree::Meeting { goal, .. } => *goal,
        }
    }

    /// The source-rooted parent map.
    pub fn parents(&self) -> &ParentMap {
        match self {
            Tree::Single { parents, .. } => parents,
            Tree::Meeting { forward, .. } => forward,
        }
    }

    /// Rebuild the source → goal path.
    ///
    /// For a meeting tree this is the source-side path to the meeting node
    /// followed by the goal-side chain from the meeting node (exclusive) to
    /// the goal.
    pub fn path(&self) -> Result<Path, PathError> {
        match self {
            Tree::Single {
                source,
                goal,
                parents,
            } => reconstruct(parents, *source, *goal),
            Tree::Meeting {
                source,
                goal,
                meeting,
                forward,
                backward,
            } => {
                let mut path = reconstruct(forward, *source, *meeting)?;
                let mut tail = reconstruct(backward, *goal, *meeting)?;
                tail.0.reverse();
                path.extend_with(&tail);
                Ok(path)
            }
        }
    }
}
