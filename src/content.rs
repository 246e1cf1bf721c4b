//! Content descriptors and the renderable-content registry.
//!
//! A content descriptor names which component type a shell should render
//! inside the dialog. The generic entry points (`show::<C>`, `switch::<C>`)
//! prove the capability at compile time through [`DialogContent`]; the
//! dynamic entry points (`show_named`, `switch_named`) resolve a type-erased
//! name against the inventory-backed registry instead.

use std::any::TypeId;
use std::fmt;

/// Capability marker for types renderable inside a dialog shell.
///
/// Implementing this trait declares "a shell knows how to render me" and
/// makes the type usable with the generic dialog entry points. Types meant
/// to be resolvable by name must also be registered:
///
/// ```ignore
/// struct EditFormContent;
///
/// impl DialogContent for EditFormContent {
///     const NAME: &'static str = "edit_form";
/// }
///
/// register_content!(EditFormContent);
/// ```
pub trait DialogContent: 'static {
    /// Registry name used by the dynamic entry points and in log lines.
    const NAME: &'static str;
}

/// Identifier of a dialog content component type.
///
/// Copyable descriptor pairing the type identity with its registry name.
/// This is what the context stores while a dialog is open and what a shell
/// reads back to decide what to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentId {
    type_id: TypeId,
    name: &'static str,
}

impl ContentId {
    /// The descriptor for content type `C`.
    pub fn of<C: DialogContent>() -> Self {
        Self {
            type_id: TypeId::of::<C>(),
            name: C::NAME,
        }
    }

    /// The registry name of the content type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this descriptor identifies content type `C`.
    pub fn is<C: DialogContent>(&self) -> bool {
        self.type_id == TypeId::of::<C>()
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Registry entry for inventory-based content discovery.
pub struct ContentRegistration {
    /// Registry name.
    name: &'static str,
    /// Descriptor factory, a fn pointer because `TypeId::of` cannot run in
    /// const position.
    id: fn() -> ContentId,
}

impl ContentRegistration {
    /// Create a new content registration.
    pub const fn new(name: &'static str, id: fn() -> ContentId) -> Self {
        Self { name, id }
    }

    /// The registry name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The registered descriptor.
    pub fn content_id(&self) -> ContentId {
        (self.id)()
    }
}

inventory::collect!(ContentRegistration);

/// Iterate over all registered content types.
pub fn registered_contents() -> impl Iterator<Item = &'static ContentRegistration> {
    inventory::iter::<ContentRegistration>()
}

/// Resolve a type-erased descriptor name against the registry.
pub fn find_content(name: &str) -> Option<ContentId> {
    registered_contents()
        .find(|reg| reg.name() == name)
        .map(|reg| reg.content_id())
}

/// Register a [`DialogContent`] type for dynamic name lookup.
///
/// Expands to an inventory submission; call once per content type at module
/// scope.
#[macro_export]
macro_rules! register_content {
    ($ty:ty) => {
        $crate::inventory::submit! {
            $crate::content::ContentRegistration::new(
                <$ty as $crate::content::DialogContent>::NAME,
                $crate::content::ContentId::of::<$ty>,
            )
        }
    };
}
