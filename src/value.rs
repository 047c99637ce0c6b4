//! Type-erased option values and their runtime descriptors.
//!
//! A [`Value`] is computed at write time: it holds the erased value, the
//! [`Descriptor`] of its concrete type (or the nil sentinel), and the capability
//! views it was declared to provide. Reads compare against these instead of
//! inspecting the value itself.

use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Runtime description of a stored value's type.
///
/// `Nil` marks a value that was written as nil; it is distinct from an absent
/// key. Type descriptors compare by `TypeId`, the name is kept for messages.
#[derive(Debug, Clone, Copy)]
pub enum Descriptor {
    Nil,
    Type { id: TypeId, name: &'static str },
}

impl Descriptor {
    /// The descriptor a value of exactly type `T` produces.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Descriptor::Type {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Descriptor::Nil)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Descriptor::Nil => "<nil>",
            Descriptor::Type { name, .. } => name,
        }
    }
}

impl PartialEq for Descriptor {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Descriptor::Nil, Descriptor::Nil) => true,
            (Descriptor::Type { id: a, .. }, Descriptor::Type { id: b, .. }) => a == b,
            _ => false,
        }
    }
}

impl Eq for Descriptor {}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Storage half of a [`Value`]: what the registry keeps under the value map.
pub(crate) struct Slot {
    inner: Option<Arc<dyn Any + Send + Sync>>,
    // Each entry is an `Arc<dyn Trait>` boxed as `Any`.
    capabilities: Vec<Box<dyn Any + Send + Sync>>,
}

impl Slot {
    pub(crate) fn downcast<T: Any>(&self) -> Option<&T> {
        self.inner.as_ref()?.downcast_ref::<T>()
    }

    /// Looks up the value viewed as `Arc<D>`, through a declared capability,
    /// because the value itself is an `Arc<D>`, or because `D` is the erased
    /// `dyn Any + Send + Sync` every stored value provides.
    pub(crate) fn view<D: ?Sized + 'static>(&self) -> Option<Arc<D>> {
        self.capabilities
            .iter()
            .find_map(|view| view.downcast_ref::<Arc<D>>())
            .or_else(|| self.downcast::<Arc<D>>())
            .cloned()
            .or_else(|| {
                let erased: Box<dyn Any> = Box::new(Arc::clone(self.inner.as_ref()?));
                erased.downcast::<Arc<D>>().ok().map(|view| *view)
            })
    }
}

/// A value ready to be written into an option set.
///
/// Most callers never build one directly: [`write`](crate::write) wraps plain
/// values. Build a `Value` to write nil or to declare capabilities.
///
/// ```rust
/// use std::sync::Arc;
/// use typed_options::{read_dyn, write_value, Options, Value};
///
/// trait Greeter: Send + Sync {
///     fn greet(&self) -> String;
/// }
///
/// struct English;
///
/// impl Greeter for English {
///     fn greet(&self) -> String {
///         "hello".into()
///     }
/// }
///
/// let mut options = Options::new();
/// let value = Value::builder(English).provides::<dyn Greeter>(|v| v).build();
/// write_value(&mut options, "greeter", value).unwrap();
///
/// let greeter: Arc<dyn Greeter> = read_dyn(&options, "greeter").unwrap();
/// assert_eq!(greeter.greet(), "hello");
/// ```
pub struct Value {
    slot: Slot,
    descriptor: Descriptor,
}

impl Value {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            slot: Slot {
                inner: Some(value),
                capabilities: Vec::new(),
            },
            descriptor: Descriptor::of::<T>(),
        }
    }

    /// The nil value. Satisfies no capability and no concrete type.
    pub fn nil() -> Self {
        Self {
            slot: Slot {
                inner: None,
                capabilities: Vec::new(),
            },
            descriptor: Descriptor::Nil,
        }
    }

    /// Starts a value that declares the capabilities it provides.
    pub fn builder<T: Any + Send + Sync>(value: T) -> ValueBuilder<T> {
        Self::builder_from_arc(Arc::new(value))
    }

    /// Like [`builder`](Self::builder), for a value already shared elsewhere.
    pub fn builder_from_arc<T: Any + Send + Sync>(value: Arc<T>) -> ValueBuilder<T> {
        ValueBuilder {
            value,
            capabilities: Vec::new(),
        }
    }

    pub fn descriptor(&self) -> Descriptor {
        self.descriptor
    }

    pub(crate) fn into_parts(self) -> (Slot, Descriptor) {
        (self.slot, self.descriptor)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("descriptor", &self.descriptor.name())
            .field("capabilities", &self.slot.capabilities.len())
            .finish()
    }
}

/// Builder for a [`Value`] with capability views.
pub struct ValueBuilder<T> {
    value: Arc<T>,
    capabilities: Vec<Box<dyn Any + Send + Sync>>,
}

impl<T: Any + Send + Sync> ValueBuilder<T> {
    /// Declares that the value can be read as `Arc<D>`.
    ///
    /// `cast` is normally the identity closure `|v| v`; the unsizing coercion
    /// to `Arc<D>` happens at its return.
    pub fn provides<D>(mut self, cast: impl FnOnce(Arc<T>) -> Arc<D>) -> Self
    where
        D: ?Sized + Send + Sync + 'static,
    {
        self.capabilities
            .push(Box::new(cast(Arc::clone(&self.value))));
        self
    }

    pub fn build(self) -> Value {
        Value {
            slot: Slot {
                inner: Some(self.value),
                capabilities: self.capabilities,
            },
            descriptor: Descriptor::of::<T>(),
        }
    }
}

impl<T: Any + Send + Sync> From<ValueBuilder<T>> for Value {
    fn from(builder: ValueBuilder<T>) -> Self {
        builder.build()
    }
}
