//! Result envelope returned when a dialog closes.
//!
//! Every open/close cycle ends with exactly one [`DialogResult`] flowing back
//! through the future returned by `show`. The envelope pairs a close kind
//! with an optional opaque payload; the dialog core never inspects the
//! payload.

use std::any::Any;
use std::fmt;

/// How a dialog cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DialogResultKind {
    /// No outcome was produced. Only seen when the dialog host was torn down
    /// while a cycle was still open.
    #[default]
    Unset,
    /// The interaction completed successfully.
    Ok,
    /// The interaction was cancelled (also produced by `dismiss`).
    Cancel,
    /// The dialog was exited without completing, e.g. via a backdrop click.
    Exit,
}

/// Immutable (kind, payload) pair resolving a dialog cycle.
///
/// Built via the named constructors; each kind has a data-free and a
/// data-carrying form. The payload is opaque to the dialog core and is
/// handed to whoever consumes the envelope.
///
/// # Example
///
/// ```ignore
/// handle.close(DialogResult::ok_with(SavedRecord { id: 42 }));
///
/// // On the awaiting side:
/// let result = pending.await;
/// if result.is_ok() {
///     let saved: Option<SavedRecord> = result.into_data();
/// }
/// ```
pub struct DialogResult {
    kind: DialogResultKind,
    data: Option<Box<dyn Any + Send + Sync>>,
}

impl DialogResult {
    fn new(kind: DialogResultKind, data: Option<Box<dyn Any + Send + Sync>>) -> Self {
        Self { kind, data }
    }

    /// An envelope with no outcome and no payload.
    pub fn unset() -> Self {
        Self::new(DialogResultKind::Unset, None)
    }

    /// A successful outcome without payload.
    pub fn ok() -> Self {
        Self::new(DialogResultKind::Ok, None)
    }

    /// A successful outcome carrying a payload.
    pub fn ok_with(data: impl Any + Send + Sync) -> Self {
        Self::new(DialogResultKind::Ok, Some(Box::new(data)))
    }

    /// A cancelled outcome without payload.
    pub fn cancel() -> Self {
        Self::new(DialogResultKind::Cancel, None)
    }

    /// A cancelled outcome carrying a payload.
    pub fn cancel_with(data: impl Any + Send + Sync) -> Self {
        Self::new(DialogResultKind::Cancel, Some(Box::new(data)))
    }

    /// An exited outcome without payload.
    pub fn exit() -> Self {
        Self::new(DialogResultKind::Exit, None)
    }

    /// An exited outcome carrying a payload.
    pub fn exit_with(data: impl Any + Send + Sync) -> Self {
        Self::new(DialogResultKind::Exit, Some(Box::new(data)))
    }

    /// The close kind.
    pub fn kind(&self) -> DialogResultKind {
        self.kind
    }

    /// Whether the cycle completed successfully.
    pub fn is_ok(&self) -> bool {
        self.kind == DialogResultKind::Ok
    }

    /// Whether the cycle was cancelled.
    pub fn is_cancel(&self) -> bool {
        self.kind == DialogResultKind::Cancel
    }

    /// Whether the cycle was exited.
    pub fn is_exit(&self) -> bool {
        self.kind == DialogResultKind::Exit
    }

    /// Whether the envelope carries a payload.
    pub fn has_data(&self) -> bool {
        self.data.is_some()
    }

    /// Borrow the payload as `T`.
    ///
    /// Returns `None` if there is no payload or it is not a `T`.
    pub fn data<T: Any>(&self) -> Option<&T> {
        self.data.as_ref().and_then(|d| d.downcast_ref::<T>())
    }

    /// Take ownership of the payload as `T`, consuming the envelope.
    ///
    /// Returns `None` if there is no payload or it is not a `T`; a
    /// mismatched payload is dropped with the envelope.
    pub fn into_data<T: Any>(self) -> Option<T> {
        self.data.and_then(|d| d.downcast::<T>().ok()).map(|d| *d)
    }
}

impl fmt::Debug for DialogResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DialogResult")
            .field("kind", &self.kind)
            .field("has_data", &self.data.is_some())
            .finish()
    }
}
