//! Visitation events and the observer contract.
//!
//! Searches and generators report every state transition to an
//! [`Observer`], synchronously and in emission order. The observer is also
//! polled for cancellation once per frontier pop.

use pathviz_core::Point;

/// Which frontier produced an event. Only bidirectional search emits
/// [`Side::Backward`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    #[default]
    Forward,
    Backward,
}

/// A single node state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisitEvent {
    /// The node joined a frontier (or, from a generator, became a wall).
    Enqueued { pos: Point, side: Side },
    /// The node was expanded; its neighbours have been processed.
    Settled { pos: Point, side: Side },
}

impl VisitEvent {
    #[inline]
    pub const fn enqueued(pos: Point) -> Self {
        Self::Enqueued {
            pos,
            side: Side::Forward,
        }
    }

    #[inline]
    pub const fn settled(pos: Point) -> Self {
        Self::Settled {
            pos,
            side: Side::Forward,
        }
    }

    #[inline]
    pub const fn pos(self) -> Point {
        match self {
            Self::Enqueued { pos, .. } | Self::Settled { pos, .. } => pos,
        }
    }

    #[inline]
    pub const fn side(self) -> Side {
        match self {
            Self::Enqueued { side, .. } | Self::Settled { side, .. } => side,
        }
    }

    #[inline]
    pub const fn is_enqueued(self) -> bool {
        matches!(self, Self::Enqueued { .. })
    }
}

/// Receives visitation events and answers cancellation polls.
///
/// Implementations must not call back into a search from `on_event`.
pub trait Observer {
    /// Called once per transition, before the search returns.
    fn on_event(&mut self, event: VisitEvent);

    /// Polled before every frontier pop. Returning `true` ends the search
    /// with [`SearchError::Aborted`](crate::SearchError::Aborted).
    fn should_abort(&mut self) -> bool {
        false
    }

    /// Called by [`route`](crate::route) before leg `leg` (`from` → `to`)
    /// is searched.
    fn begin_leg(&mut self, _leg: usize, _from: Point, _to: Point) {}
}

/// Discards every event.
impl Observer for () {
    fn on_event(&mut self, _event: VisitEvent) {}
}

/// Any `FnMut(VisitEvent)` is an observer that never aborts.
impl<F: FnMut(VisitEvent)> Observer for F {
    fn on_event(&mut self, event: VisitEvent) {
        self(event)
    }
}

/// Collects every event in order.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    pub events: Vec<VisitEvent>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `Enqueued` events seen.
    pub fn enqueued(&self) -> usize {
        self.events.iter().filter(|e| e.is_enqueued()).count()
    }

    /// Number of `Settled` events seen.
    pub fn settled(&self) -> usize {
        self.events.len() - self.enqueued()
    }
}

impl Observer for Recorder {
    fn on_event(&mut self, event: VisitEvent) {
        self.events.push(event);
    }
}

/// Wraps an observer with an external abort query, e.g. a quit flag.
pub struct Abortable<O, A> {
    pub inner: O,
    abort: A,
}

impl<O: Observer, A: FnMut() -> bool> Abortable<O, A> {
    pub fn new(inner: O, abort: A) -> Self {
        Self { inner, abort }
    }

    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: Observer, A: FnMut() -> bool> Observer for Abortable<O, A> {
    fn on_event(&mut self, event: VisitEvent) {
        self.inner.on_event(event);
    }

    fn should_abort(&mut self) -> bool {
        (self.abort)() || self.inner.should_abort()
    }

    fn begin_leg(&mut self, leg: usize, from: Point, to: Point) {
        self.inner.begin_leg(leg, from, to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_observe() {
        let mut seen = Vec::new();
        let mut obs = |e: VisitEvent| seen.push(e.pos());
        obs.on_event(VisitEvent::enqueued(Point::new(1, 2)));
        assert!(!obs.should_abort());
        assert_eq!(seen, vec![Point::new(1, 2)]);
    }

    #[test]
    fn recorder_counts() {
        let mut r = Recorder::new();
        r.on_event(VisitEvent::enqueued(Point::new(0, 1)));
        r.on_event(VisitEvent::enqueued(Point::new(1, 0)));
        r.on_event(VisitEvent::settled(Point::new(0, 0)));
        assert_eq!(r.enqueued(), 2);
        assert_eq!(r.settled(), 1);
    }

    #[test]
    fn abortable_forwards_and_polls() {
        let mut polls = 0;
        let mut obs = Abortable::new(Recorder::new(), || {
            polls += 1;
            polls > 2
        });
        obs.on_event(VisitEvent::settled(Point::ZERO));
        assert!(!obs.should_abort());
        assert!(!obs.should_abort());
        assert!(obs.should_abort());
        assert_eq!(obs.into_inner().events.len(), 1);
    }

    #[test]
    fn event_accessors() {
        let e = VisitEvent::Settled {
            pos: Point::new(3, 4),
            side: Side::Backward,
        };
        assert_eq!(e.pos(), Point::new(3, 4));
        assert_eq!(e.side(), Side::Backward);
        assert!(!e.is_enqueued());
        assert_eq!(VisitEvent::enqueued(Point::ZERO).side(), Side::Forward);
    }
}
