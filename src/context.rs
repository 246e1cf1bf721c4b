//! Dialog context: state machine and control API.
//!
//! One [`DialogContext`] per dialog host, owned by the hosting shell for its
//! lifetime. The context tracks whether a dialog is open, which content
//! descriptor and options it holds, and the oneshot handshake between `show`
//! and `close` that lets callers await a modal interaction as a single
//! operation. It knows nothing about rendering; shells observe changes
//! through the [`RenderNotifier`] slot.

use std::fmt;
use std::sync::{Arc, RwLock};

use tokio::sync::oneshot;
use uuid::Uuid;

use crate::content::{ContentId, DialogContent, find_content};
use crate::error::DialogError;
use crate::notifier::RenderNotifier;
use crate::options::DialogOptions;
use crate::pending::PendingDialog;
use crate::result::DialogResult;

/// Unique identifier for a dialog context, used to tell hosts apart in logs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ContextId(Uuid);

impl ContextId {
    /// Create a new unique context ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ContextId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inner state for DialogContext.
struct DialogContextInner {
    /// True between a successful `show`/`switch` and the next
    /// `close`/`dismiss`.
    open: bool,
    /// Descriptor of the content component to render, `None` when closed.
    content: Option<ContentId>,
    /// Current options carrier, `None` when closed.
    options: Option<Arc<dyn DialogOptions>>,
    /// Sender half of the in-flight cycle. Replaced, never reused, on each
    /// `show`; `take()` on resolution gives resolve-if-unresolved semantics.
    pending: Option<oneshot::Sender<DialogResult>>,
}

/// Dialog state and control core.
///
/// Uses interior mutability: all methods take `&self`, and cloning shares
/// state, so the context can be handed to content components and async
/// tasks. Every mutating call serializes on the interior lock and fires the
/// render notifier at most once, after the lock is released.
///
/// # Example
///
/// ```ignore
/// let ctx = DialogContext::new();
/// ctx.set_render_notifier(move || { let _ = redraw_tx.try_send(()); });
///
/// let result = ctx
///     .show::<EditFormContent>(Options::new().param("id", 42_i64))
///     .await;
/// if result.is_ok() {
///     // content called close(DialogResult::ok..) or ok_with(..)
/// }
/// ```
#[derive(Clone)]
pub struct DialogContext {
    id: ContextId,
    inner: Arc<RwLock<DialogContextInner>>,
    /// The single redraw callback slot, shared across clones.
    notifier: RenderNotifier,
}

impl DialogContext {
    /// Create a new closed context.
    pub fn new() -> Self {
        Self {
            id: ContextId::new(),
            inner: Arc::new(RwLock::new(DialogContextInner {
                open: false,
                content: None,
                options: None,
                pending: None,
            })),
            notifier: RenderNotifier::new(),
        }
    }

    /// This context's log identity.
    pub fn id(&self) -> ContextId {
        self.id
    }

    // =========================================================================
    // Render notification wiring
    // =========================================================================

    /// Install the render callback, typically once at shell attach time.
    ///
    /// See [`RenderNotifier::set`] for the callback contract.
    pub fn set_render_notifier(&self, f: impl Fn() + Send + Sync + 'static) {
        self.notifier.set(f);
    }

    /// The notifier slot itself.
    pub fn notifier(&self) -> &RenderNotifier {
        &self.notifier
    }

    // =========================================================================
    // Control API
    // =========================================================================

    /// Open the dialog with content type `C`.
    ///
    /// Stores the options and descriptor, marks the dialog open, arms a
    /// fresh pending-result cycle, and fires the render notifier once. The
    /// returned future resolves with the [`DialogResult`] passed to the
    /// `close`/`dismiss` that ends the cycle.
    ///
    /// Calling `show` while a dialog is already open replaces the content
    /// and starts a new cycle; the previous cycle's future is resolved with
    /// a `cancel` result so its awaiter is never leaked.
    pub fn show<C: DialogContent>(&self, options: impl DialogOptions) -> PendingDialog {
        self.show_inner(ContentId::of::<C>(), Arc::new(options))
    }

    /// Open the dialog by type-erased descriptor name.
    ///
    /// Fails with [`DialogError::UnknownContent`] (synchronously, with no
    /// state change) when `name` is not a registered content component.
    pub fn show_named(
        &self,
        name: &str,
        options: impl DialogOptions,
    ) -> Result<PendingDialog, DialogError> {
        let content =
            find_content(name).ok_or_else(|| DialogError::UnknownContent(name.to_string()))?;
        Ok(self.show_inner(content, Arc::new(options)))
    }

    fn show_inner(&self, content: ContentId, options: Arc<dyn DialogOptions>) -> PendingDialog {
        let (tx, rx) = oneshot::channel();

        let orphaned = {
            let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
            let orphaned = inner.pending.replace(tx);
            inner.open = true;
            inner.content = Some(content);
            inner.options = Some(options);
            orphaned
        };

        // Policy for show-while-open: the previous cycle is resolved as
        // cancelled before the new one begins, so its awaiter resumes
        // instead of waiting forever.
        if let Some(prev) = orphaned {
            log::debug!("dialog {}: cancelling in-flight cycle before new show", self.id);
            let _ = prev.send(DialogResult::cancel());
        }

        log::debug!("dialog {}: show {}", self.id, content);
        self.notifier.notify();
        PendingDialog::new(rx)
    }

    /// Replace the displayed content and options without ending the cycle.
    ///
    /// The pending future armed by the original `show` is untouched: one
    /// future spans any number of content switches, and the `close` that
    /// eventually ends the cycle resolves it. The returned `bool` is always
    /// `true`, kept for interface symmetry with the fallible named variant.
    ///
    /// Switching while closed is a caller error the context does not
    /// reject: the dialog opens without a pending cycle, so a later `close`
    /// resolves nothing.
    pub fn switch<C: DialogContent>(&self, options: impl DialogOptions) -> bool {
        self.switch_inner(ContentId::of::<C>(), Arc::new(options))
    }

    /// [`switch`](Self::switch) by type-erased descriptor name.
    ///
    /// Fails with [`DialogError::UnknownContent`] (synchronously, with no
    /// state change) when `name` is not a registered content component.
    pub fn switch_named(
        &self,
        name: &str,
        options: impl DialogOptions,
    ) -> Result<bool, DialogError> {
        let content =
            find_content(name).ok_or_else(|| DialogError::UnknownContent(name.to_string()))?;
        Ok(self.switch_inner(content, Arc::new(options)))
    }

    fn switch_inner(&self, content: ContentId, options: Arc<dyn DialogOptions>) -> bool {
        {
            let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
            if inner.open {
                log::debug!("dialog {}: switch to {}", self.id, content);
            } else {
                log::warn!(
                    "dialog {}: switch to {} while closed, no pending cycle will exist",
                    self.id,
                    content
                );
            }
            inner.open = true;
            inner.content = Some(content);
            inner.options = Some(options);
        }

        self.notifier.notify();
        true
    }

    /// Replace the options of the open dialog.
    ///
    /// `None` means "leave unchanged". Content descriptor and pending cycle
    /// are untouched either way. A full no-op when the dialog is closed.
    pub fn update(&self, options: Option<Arc<dyn DialogOptions>>) {
        {
            let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
            if !inner.open {
                return;
            }
            if let Some(options) = options {
                inner.options = Some(options);
            }
        }

        log::debug!("dialog {}: update", self.id);
        self.notifier.notify();
    }

    /// Close the dialog as cancelled.
    ///
    /// Exactly `close(DialogResult::cancel())`.
    pub fn dismiss(&self) {
        self.close(DialogResult::cancel());
    }

    /// Close the dialog, resolving the pending future with `result`.
    ///
    /// Clears the open flag, content descriptor, and options, fires the
    /// render notifier, then resolves the cycle's future. Idempotent: a
    /// second `close` after the dialog is already closed is a harmless
    /// no-op, and the future only ever resolves once.
    pub fn close(&self, result: DialogResult) {
        let pending = {
            let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
            if !inner.open {
                log::debug!("dialog {}: close ignored, already closed", self.id);
                return;
            }
            inner.open = false;
            inner.content = None;
            inner.options = None;
            inner.pending.take()
        };

        log::debug!("dialog {}: close ({:?})", self.id, result.kind());
        self.notifier.notify();

        match pending {
            Some(tx) => {
                // Receiver may be gone when the caller dropped the future.
                let _ = tx.send(result);
            }
            None => {
                // Reachable when the dialog was opened by a closed-state
                // switch: there is no cycle to resolve.
                log::debug!("dialog {}: close with no pending cycle", self.id);
            }
        }
    }

    // =========================================================================
    // Readable state
    // =========================================================================

    /// Whether a dialog is currently open.
    pub fn is_open(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .open
    }

    /// Whether a content descriptor is present.
    ///
    /// Distinct reader from [`is_open`](Self::is_open); the two are equal in
    /// every reachable state.
    pub fn is_active(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .content
            .is_some()
    }

    /// Descriptor of the content component to render, `None` when closed.
    pub fn active_content(&self) -> Option<ContentId> {
        self.inner.read().unwrap_or_else(|e| e.into_inner()).content
    }

    /// The current options carrier, `None` when closed.
    pub fn options(&self) -> Option<Arc<dyn DialogOptions>> {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .options
            .clone()
    }

    // =========================================================================
    // Content-side capability
    // =========================================================================

    /// A narrowed handle for the content component being displayed.
    pub fn handle(&self) -> DialogHandle {
        DialogHandle { ctx: self.clone() }
    }
}

impl Default for DialogContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Narrow capability handed to content components.
///
/// Exposes only the operations a hosted component needs to finish its
/// interaction: `close`, `dismiss`, and `update`. Content cannot re-open or
/// switch the dialog through this handle.
///
/// A component that requires a dialog host should treat a missing handle as
/// a precondition violation and fail fast at construction rather than run
/// with silently wrong behavior.
#[derive(Clone)]
pub struct DialogHandle {
    ctx: DialogContext,
}

impl DialogHandle {
    /// Close the dialog, resolving the pending future with `result`.
    pub fn close(&self, result: DialogResult) {
        self.ctx.close(result);
    }

    /// Close the dialog as cancelled.
    pub fn dismiss(&self) {
        self.ctx.dismiss();
    }

    /// Replace the options of the open dialog; `None` leaves them unchanged.
    pub fn update(&self, options: Option<Arc<dyn DialogOptions>>) {
        self.ctx.update(options);
    }
}
