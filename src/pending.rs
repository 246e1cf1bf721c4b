//! The pending-result future armed by `show`.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use crate::result::DialogResult;

/// The awaitable half of one open/close dialog cycle.
///
/// Returned by [`show`](crate::DialogContext::show) and resolved exactly once
/// with the [`DialogResult`] passed to whichever of `close`/`dismiss` ends
/// the cycle. There is no external cancellation and no timeout; the shell is
/// responsible for eventually matching every `show` with a `close` or
/// `dismiss`.
///
/// If every clone of the owning context is dropped while the cycle is still
/// open, the future resolves with [`DialogResult::unset`] rather than
/// hanging.
#[derive(Debug)]
pub struct PendingDialog {
    rx: oneshot::Receiver<DialogResult>,
}

impl PendingDialog {
    pub(crate) fn new(rx: oneshot::Receiver<DialogResult>) -> Self {
        Self { rx }
    }
}

impl Future for PendingDialog {
    type Output = DialogResult;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.get_mut().rx).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            // Sender dropped without resolving: the dialog host went away
            // mid-cycle.
            Poll::Ready(Err(_)) => Poll::Ready(DialogResult::unset()),
            Poll::Pending => Poll::Pending,
        }
    }
}
