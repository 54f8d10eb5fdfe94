//! Host-owned selection binding
//!
//! [`Selection`] is the shared index a switch bar reads while rendering and
//! writes when a segment is clicked. The host keeps one clone, hands others
//! to any number of widgets, and observes writes through
//! [`Selection::subscribe`].
//!
//! The handle is `Rc`-based and therefore `!Send`: every read, write and
//! notification happens on the UI thread.

use std::cell::Cell;
use std::rc::Rc;

use tokio::sync::broadcast;

/// Buffered change notifications per subscriber before old ones are dropped
const CHANGE_CAPACITY: usize = 64;

/// Shared, observable selection index
///
/// # Example
///
/// ```
/// use switchbar_core::Selection;
///
/// let selection = Selection::new(0);
/// let widget_side = selection.clone();
/// let mut changes = selection.subscribe();
///
/// widget_side.set(1);
/// assert_eq!(selection.get(), 1);
/// assert_eq!(changes.try_recv().unwrap(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Selection {
    inner: Rc<Inner>,
}

#[derive(Debug)]
struct Inner {
    value: Cell<usize>,
    changes: broadcast::Sender<usize>,
}

impl Selection {
    /// Creates a binding holding `initial`.
    ///
    /// No range check is made: an index past the end of a bar's titles
    /// simply highlights nothing.
    pub fn new(initial: usize) -> Self {
        let (changes, _) = broadcast::channel(CHANGE_CAPACITY);
        Selection {
            inner: Rc::new(Inner {
                value: Cell::new(initial),
                changes,
            }),
        }
    }

    /// Current index
    pub fn get(&self) -> usize {
        self.inner.value.get()
    }

    /// Whether `index` is the current selection
    pub fn is_selected(&self, index: usize) -> bool {
        self.get() == index
    }

    /// Writes `index` and notifies subscribers.
    ///
    /// Writing the current value still counts as a write and is broadcast.
    pub fn set(&self, index: usize) {
        let previous = self.inner.value.replace(index);
        tracing::trace!(previous, index, "selection written");
        // no subscribers is fine
        let _ = self.inner.changes.send(index);
    }

    /// Moves to the next of `len` segments, wrapping to the first.
    ///
    /// Returns the new index, or `None` when there are no segments. An
    /// out-of-range current value restarts at 0.
    pub fn select_next(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let next = self
            .get()
            .checked_add(1)
            .filter(|next| *next < len)
            .unwrap_or(0);
        self.set(next);
        Some(next)
    }

    /// Moves to the previous of `len` segments, wrapping to the last.
    ///
    /// An out-of-range current value restarts at the last segment.
    pub fn select_previous(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let current = self.get();
        let previous = if current == 0 || current >= len {
            len - 1
        } else {
            current - 1
        };
        self.set(previous);
        Some(previous)
    }

    /// Receiver for every subsequent write, from any clone
    pub fn subscribe(&self) -> broadcast::Receiver<usize> {
        self.inner.changes.subscribe()
    }

    /// Number of live receivers
    pub fn subscriber_count(&self) -> usize {
        self.inner.changes.receiver_count()
    }

    /// Whether two handles share the same underlying value
    pub fn ptr_eq(&self, other: &Selection) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::TryRecvError;

    #[test]
    fn test_clones_share_value() {
        let host = Selection::new(2);
        let widget = host.clone();
        widget.set(0);
        assert_eq!(host.get(), 0);
        assert!(host.ptr_eq(&widget));
        assert!(!host.ptr_eq(&Selection::new(0)));
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Selection::default().get(), 0);
    }

    #[test]
    fn test_set_same_value_still_notifies() {
        let selection = Selection::new(1);
        let mut rx = selection.subscribe();
        selection.set(1);
        assert_eq!(rx.try_recv().unwrap(), 1);
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn test_every_writer_is_observed() {
        let host = Selection::new(0);
        let a = host.clone();
        let b = host.clone();
        let mut rx = host.subscribe();
        a.set(3);
        b.set(1);
        assert_eq!(rx.try_recv().unwrap(), 3);
        assert_eq!(rx.try_recv().unwrap(), 1);
        assert_eq!(host.subscriber_count(), 1);
    }

    #[test]
    fn test_set_without_subscribers_does_not_panic() {
        let selection = Selection::new(0);
        selection.set(9);
        assert_eq!(selection.get(), 9);
    }

    #[test]
    fn test_next_wraps() {
        let selection = Selection::new(2);
        assert_eq!(selection.select_next(3), Some(0));
        assert_eq!(selection.select_next(3), Some(1));
    }

    #[test]
    fn test_previous_wraps() {
        let selection = Selection::new(0);
        assert_eq!(selection.select_previous(3), Some(2));
        assert_eq!(selection.select_previous(3), Some(1));
    }

    #[test]
    fn test_navigation_with_no_segments() {
        let selection = Selection::new(4);
        assert_eq!(selection.select_next(0), None);
        assert_eq!(selection.select_previous(0), None);
        assert_eq!(selection.get(), 4);
    }

    #[test]
    fn test_navigation_from_out_of_range() {
        let selection = Selection::new(10);
        assert_eq!(selection.select_next(3), Some(0));
        selection.set(10);
        assert_eq!(selection.select_previous(3), Some(2));
    }

    #[test]
    fn test_is_selected() {
        let selection = Selection::new(1);
        assert!(selection.is_selected(1));
        assert!(!selection.is_selected(0));
    }
}
