pub mod content;
pub mod context;
pub mod error;
pub mod notifier;
pub mod options;
pub mod pending;
pub mod result;

// Re-exported for the `register_content!` macro expansion.
#[doc(hidden)]
pub use inventory;

pub use context::DialogContext;

pub mod prelude {
    pub use crate::content::{ContentId, DialogContent};
    pub use crate::context::{ContextId, DialogContext, DialogHandle};
    pub use crate::error::DialogError;
    pub use crate::notifier::RenderNotifier;
    pub use crate::options::{DialogOptions, Options, ParameterMap};
    pub use crate::pending::PendingDialog;
    pub use crate::register_content;
    pub use crate::result::{DialogResult, DialogResultKind};
}
