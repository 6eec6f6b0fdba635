// ABOUTME: Slide navigation state machine for the ds-slides application
// ABOUTME: Owns the authoritative slide index and adjudicates transition requests

use crate::deck::SlideDeck;
use log::debug;
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::{Arc, Weak};

/// A request to change the current slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Advance by one slide, clamped at the last slide.
    Next,
    /// Go back by one slide, clamped at the first slide.
    Prev,
    /// Jump directly to an index. Out-of-range indices are ignored.
    GoTo(usize),
}

/// Point-in-time view of the navigator, delivered to observers and
/// serialized over the wire to viewers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigatorSnapshot {
    pub index: usize,
    pub total: usize,
    pub slide_id: String,
    pub progress: f64,
    pub is_first: bool,
    pub is_last: bool,
}

/// Receives a snapshot after every accepted transition.
pub trait NavigatorObserver: Send + Sync {
    fn on_slide_change(&self, snapshot: &NavigatorSnapshot);
}

/// The single authoritative slide position for a presentation.
///
/// All mutation funnels through `request`; every reader sees a fully
/// committed index. Invalid requests (next past the end, prev before the
/// start, out-of-range goto) are absorbed as no-ops rather than errors.
pub struct SlideNavigator {
    deck: SlideDeck,
    current: RwLock<usize>,
    observers: RwLock<Vec<Weak<dyn NavigatorObserver>>>,
}

impl SlideNavigator {
    /// Create a navigator positioned on the first slide of the deck.
    pub fn new(deck: SlideDeck) -> Self {
        Self {
            deck,
            current: RwLock::new(0),
            observers: RwLock::new(Vec::new()),
        }
    }

    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    /// Current position. Side-effect free.
    pub fn current_index(&self) -> usize {
        *self.current.read()
    }

    /// Deck length; constant for the process lifetime.
    pub fn total_slides(&self) -> usize {
        self.deck.len()
    }

    /// `(current + 1) / total`, in `(0, 1]` for any non-empty deck.
    pub fn progress_fraction(&self) -> f64 {
        (self.current_index() + 1) as f64 / self.deck.len() as f64
    }

    pub fn is_first(&self) -> bool {
        self.current_index() == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index() == self.deck.len() - 1
    }

    /// Apply a transition request.
    ///
    /// Returns whether the index moved. Rejected requests leave the state
    /// untouched, notify nobody and are not errors; callers that need to
    /// re-broadcast state can skip the no-op case.
    pub fn request(&self, transition: Transition) -> bool {
        let mut current = self.current.write();
        let target = match transition {
            Transition::Next if *current + 1 < self.deck.len() => *current + 1,
            Transition::Prev if *current > 0 => *current - 1,
            Transition::GoTo(index) if index < self.deck.len() => index,
            _ => {
                debug!(
                    "Ignoring transition {:?} at index {}/{}",
                    transition,
                    *current,
                    self.deck.len()
                );
                return false;
            }
        };

        if target == *current {
            return false;
        }

        *current = target;
        drop(current);

        debug!("Moved to slide index {}", target);
        self.notify_observers();
        true
    }

    /// Snapshot of the current state for observers and the wire.
    pub fn snapshot(&self) -> NavigatorSnapshot {
        let index = self.current_index();
        let total = self.deck.len();
        NavigatorSnapshot {
            index,
            total,
            slide_id: self
                .deck
                .get(index)
                .map(|slide| slide.id.clone())
                .unwrap_or_default(),
            progress: (index + 1) as f64 / total as f64,
            is_first: index == 0,
            is_last: index == total - 1,
        }
    }

    /// Register an observer. Only a weak reference is held: dropping the
    /// `Arc` detaches the observer, so registration is scoped to the
    /// observer's lifetime.
    pub fn observe(&self, observer: Arc<dyn NavigatorObserver>) {
        let mut observers = self.observers.write();
        observers.push(Arc::downgrade(&observer));
    }

    /// Notify all live observers of an accepted transition.
    fn notify_observers(&self) {
        let snapshot = self.snapshot();
        let mut observers = self.observers.write();

        // Remove any dead weak references
        observers.retain(|weak| weak.strong_count() > 0);

        for weak in observers.iter() {
            if let Some(observer) = weak.upgrade() {
                observer.on_slide_change(&snapshot);
            }
        }
    }
}
