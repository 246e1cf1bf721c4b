//! Render notification slot.
//!
//! The dialog core knows nothing about rendering. Instead it owns a single
//! callback slot the hosting shell fills once at attach time; every
//! state-changing call fires it at most once, after the state change is
//! visible. The callback's only contract is "schedule a re-render soon".
//! In a non-UI host a channel send gives the same fire-and-forget semantics.

use std::sync::{Arc, Mutex};

type RenderFn = Arc<dyn Fn() + Send + Sync>;

/// Single-slot redraw callback.
///
/// Cloning shares the slot. Installing a new callback replaces the previous
/// one, so re-registering is safe; a shell normally sets it once at attach
/// time.
#[derive(Clone, Default)]
pub struct RenderNotifier {
    slot: Arc<Mutex<Option<RenderFn>>>,
}

impl RenderNotifier {
    /// Create an empty notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the render callback, replacing any previous one.
    ///
    /// The callback is invoked synchronously from within mutating dialog
    /// calls, after the context releases its state lock; it may re-enter the
    /// read accessors.
    pub fn set(&self, f: impl Fn() + Send + Sync + 'static) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(Arc::new(f));
        }
    }

    /// Whether a callback is installed.
    pub fn is_set(&self) -> bool {
        self.slot.lock().map(|slot| slot.is_some()).unwrap_or(false)
    }

    /// Fire the callback once, if one is installed.
    ///
    /// Fire-and-forget; a no-op when the slot is empty.
    pub fn notify(&self) {
        let f = self
            .slot
            .lock()
            .ok()
            .and_then(|slot| slot.as_ref().map(Arc::clone));
        if let Some(f) = f {
            f();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_notify_without_callback_is_noop() {
        let notifier = RenderNotifier::new();
        assert!(!notifier.is_set());
        notifier.notify();
    }

    #[test]
    fn test_notify_fires_installed_callback() {
        let notifier = RenderNotifier::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        notifier.set(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(notifier.is_set());
        notifier.notify();
        notifier.notify();
        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_set_overwrites_previous_callback() {
        let notifier = RenderNotifier::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&first);
        notifier.set(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let counter = Arc::clone(&second);
        notifier.set(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        notifier.notify();
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clones_share_the_slot() {
        let notifier = RenderNotifier::new();
        let clone = notifier.clone();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        clone.set(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        notifier.notify();
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
