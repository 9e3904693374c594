//! Per-node trace tags built from visitation events.
//!
//! An [`Overlay`] is what a renderer paints on top of the grid roles: which
//! nodes were queued or visited, by which search side, during which leg,
//! and which nodes ended up on the route. Terminal nodes are never tagged,
//! and `Path` tags are never overwritten by later legs.

use pathviz_core::{GridGraph, Point, Range};

use crate::event::{Observer, Side, VisitEvent};
use crate::tree::Path;

/// Trace state of a single node.
///
/// `shade` is the leg index modulo 2, so consecutive legs can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    #[default]
    None,
    Queued { side: Side, shade: u8 },
    Visited { side: Side, shade: u8 },
    Path,
}

impl Tag {
    /// Glyph used when dumping an overlay as text.
    pub const fn glyph(self) -> Option<char> {
        match self {
            Tag::None => None,
            Tag::Queued { side: Side::Forward, .. } => Some('+'),
            Tag::Queued { side: Side::Backward, .. } => Some('x'),
            Tag::Visited { side: Side::Forward, .. } => Some(':'),
            Tag::Visited { side: Side::Backward, .. } => Some(';'),
            Tag::Path => Some('*'),
        }
    }
}

/// Tag layer over a [`GridGraph`].
#[derive(Debug, Clone)]
pub struct Overlay {
    bounds: Range,
    tags: Vec<Tag>,
    terminal: Vec<bool>,
    shade: u8,
}

impl Overlay {
    /// Create an empty overlay sized to `graph`, remembering its terminals.
    pub fn new(graph: &GridGraph) -> Self {
        let bounds = graph.bounds();
        Self {
            bounds,
            tags: vec![Tag::None; bounds.len()],
            terminal: bounds.iter().map(|p| graph.is_terminal(p)).collect(),
            shade: 0,
        }
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.bounds.contains(p) {
            Some((p.row as usize) * (self.bounds.cols() as usize) + (p.col as usize))
        } else {
            None
        }
    }

    /// Tag at `p`; out-of-bounds points read as [`Tag::None`].
    pub fn tag(&self, p: Point) -> Tag {
        self.index(p).map_or(Tag::None, |i| self.tags[i])
    }

    fn paint(&mut self, p: Point, tag: Tag) {
        let Some(i) = self.index(p) else {
            return;
        };
        if self.terminal[i] || self.tags[i] == Tag::Path {
            return;
        }
        self.tags[i] = tag;
    }

    /// Tag every non-terminal node of `path` as [`Tag::Path`].
    pub fn mark_path(&mut self, path: &Path) {
        for &p in path {
            self.paint(p, Tag::Path);
        }
    }

    /// Drop every tag, e.g. before a new run.
    pub fn clear(&mut self) {
        self.tags.fill(Tag::None);
        self.shade = 0;
    }

    /// Number of nodes whose tag satisfies `pred`.
    pub fn count(&self, pred: impl Fn(Tag) -> bool) -> usize {
        self.tags.iter().filter(|&&t| pred(t)).count()
    }

    /// Text dump: role glyphs with trace glyphs on top of free nodes.
    pub fn render(&self, graph: &GridGraph) -> String {
        let mut out = String::with_capacity(self.tags.len() + self.bounds.rows() as usize);
        for (p, role) in graph.iter() {
            let ch = match self.tag(p).glyph() {
                Some(c) if !role.is_terminal() => c,
                _ => role.glyph(),
            };
            out.push(ch);
            if p.col == self.bounds.max.col - 1 {
                out.push('\n');
            }
        }
        out
    }
}

impl Observer for Overlay {
    fn on_event(&mut self, event: VisitEvent) {
        let shade = self.shade;
        let tag = match event {
            VisitEvent::Enqueued { side, .. } => Tag::Queued { side, shade },
            VisitEvent::Settled { side, .. } => Tag::Visited { side, shade },
        };
        self.paint(event.pos(), tag);
    }

    fn begin_leg(&mut self, leg: usize, _from: Point, _to: Point) {
        self.shade = (leg % 2) as u8;
    }
}
