//! The options carrier passed alongside a content descriptor.
//!
//! An options carrier transports three independent channels from the caller
//! to the dialog: control parameters bound to the content component's inputs,
//! shell options consumed by the hosting overlay, and one opaque payload for
//! whole-object transfer. Concrete shells define their own carrier types
//! (adding fields like a backdrop-click-to-exit flag or a size class) by
//! implementing [`DialogOptions`]; [`Options`] is the standard carrier.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock};

/// String-keyed map of heterogeneous values.
///
/// Values are stored type-erased and read back with a typed
/// [`get`](ParameterMap::get). Cloning is cheap; values are shared, never
/// copied.
#[derive(Clone, Default)]
pub struct ParameterMap {
    values: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl ParameterMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// A shared empty map, used by the [`DialogOptions`] channel defaults.
    pub fn empty() -> &'static ParameterMap {
        static EMPTY: LazyLock<ParameterMap> = LazyLock::new(ParameterMap::new);
        &EMPTY
    }

    /// Insert a value under `name`, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Any + Send + Sync) {
        self.values.insert(name.into(), Arc::new(value));
    }

    /// Borrow the value under `name` as `T`.
    ///
    /// Returns `None` if the name is absent or the value is not a `T`.
    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.values.get(name).and_then(|v| v.downcast_ref::<T>())
    }

    /// Whether a value exists under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the entry names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

impl fmt::Debug for ParameterMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.values.keys()).finish()
    }
}

/// The three-channel data-passing contract for showing a dialog.
///
/// Object safe so the context can hold any shell's carrier behind
/// `Arc<dyn DialogOptions>`. Every channel defaults to empty; a carrier
/// overrides only the channels it transports.
pub trait DialogOptions: Send + Sync + 'static {
    /// Parameters bound to the content component's inputs.
    fn control_parameters(&self) -> &ParameterMap {
        ParameterMap::empty()
    }

    /// Shell-specific configuration (width, size class, backdrop behavior).
    fn shell_options(&self) -> &ParameterMap {
        ParameterMap::empty()
    }

    /// Single opaque payload for whole-object transfer.
    ///
    /// The dialog core never inspects, clones, or mutates it.
    fn data(&self) -> Option<&(dyn Any + Send + Sync)> {
        None
    }
}

/// The standard options carrier.
///
/// # Example
///
/// ```ignore
/// let pending = ctx.show::<EditFormContent>(
///     Options::new()
///         .param("id", 42_i64)
///         .shell_option("width", "600px".to_string()),
/// );
/// ```
#[derive(Default)]
pub struct Options {
    params: ParameterMap,
    shell: ParameterMap,
    data: Option<Box<dyn Any + Send + Sync>>,
}

impl Options {
    /// Create an empty carrier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a control parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl Any + Send + Sync) -> Self {
        self.params.insert(name, value);
        self
    }

    /// Add a shell option.
    pub fn shell_option(mut self, name: impl Into<String>, value: impl Any + Send + Sync) -> Self {
        self.shell.insert(name, value);
        self
    }

    /// Set the opaque payload.
    pub fn with_data(mut self, data: impl Any + Send + Sync) -> Self {
        self.data = Some(Box::new(data));
        self
    }
}

impl DialogOptions for Options {
    fn control_parameters(&self) -> &ParameterMap {
        &self.params
    }

    fn shell_options(&self) -> &ParameterMap {
        &self.shell
    }

    fn data(&self) -> Option<&(dyn Any + Send + Sync)> {
        self.data.as_deref()
    }
}
