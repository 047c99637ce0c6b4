//! The option set passed through setter callbacks.
//!
//! An [`Options`] value is created empty, populated by applying setters in
//! order, and read afterwards. Writes need `&mut Options`, so once construction
//! hands out shared references the set is effectively frozen.

use std::fmt;
use std::sync::Arc;

use crate::registry::Registry;
use crate::{Descriptor, OptionKey, OptionsEvent, TraceCallback};

/// A write-once set of typed options.
///
/// # Examples
///
/// ```rust
/// use typed_options::{read, set, Options};
///
/// let options = Options::new().resolve([set("retries", 3u32), set("verbose", true)]);
///
/// assert_eq!(read::<u32>(&options, "retries").unwrap(), 3);
/// assert!(read::<bool>(&options, "verbose").unwrap());
/// ```
#[derive(Default)]
pub struct Options {
    registry: Registry,
    trace: Option<Arc<TraceCallback>>,
}

impl Options {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            trace: None,
        }
    }

    /// Applies `setters` in order and returns the populated set.
    pub fn resolve<I, S>(mut self, setters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: FnOnce(&mut Options),
    {
        let mut applied = 0;
        for setter in setters {
            self.apply(setter);
            applied += 1;
        }

        tracing::trace!(setters = applied, options = self.len(), "option set resolved");
        self.emit_event(&OptionsEvent::Resolve { setters: applied });
        self
    }

    /// Applies a single setter.
    pub fn apply(&mut self, setter: impl FnOnce(&mut Options)) {
        setter(self);
    }

    // ---------------------------------------------------------------------------------------------
    // Tracing
    // ---------------------------------------------------------------------------------------------

    /// Sets a callback invoked for every write, read and resolution on this set.
    ///
    /// Replaces any previously installed callback.
    pub fn set_trace_callback(&mut self, callback: impl Fn(&OptionsEvent<'_>) + Send + Sync + 'static) {
        self.trace = Some(Arc::new(callback));
    }

    /// Builder form of [`set_trace_callback`](Self::set_trace_callback).
    pub fn with_trace_callback(
        mut self,
        callback: impl Fn(&OptionsEvent<'_>) + Send + Sync + 'static,
    ) -> Self {
        self.set_trace_callback(callback);
        self
    }

    pub fn clear_trace_callback(&mut self) {
        self.trace = None;
    }

    pub(crate) fn emit_event(&self, event: &OptionsEvent<'_>) {
        if let Some(callback) = self.trace.as_ref() {
            callback(event);
        }
    }

    // ---------------------------------------------------------------------------------------------
    // Introspection
    // ---------------------------------------------------------------------------------------------

    pub fn contains(&self, key: impl AsRef<str>) -> bool {
        self.registry.contains(key.as_ref())
    }

    /// Descriptor of the value stored under `key`, `None` if the key is unset.
    pub fn descriptor(&self, key: impl AsRef<str>) -> Option<Descriptor> {
        self.registry.descriptor(key.as_ref())
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &OptionKey> {
        self.registry.keys()
    }

    pub(crate) fn registry(&self) -> &Registry {
        &self.registry
    }

    pub(crate) fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self
            .keys()
            .filter_map(|key| Some((key.as_str(), self.descriptor(key)?.name())))
            .collect();
        entries.sort_unstable();

        f.debug_struct("Options")
            .field("options", &entries)
            .field("traced", &self.trace.is_some())
            .finish()
    }
}

/// Creates an empty option set and applies `setters` to it in order.
///
/// ```rust
/// use typed_options::{read_or_default, resolve, setter, write_or_panic, OptionSetter};
///
/// fn with_port(port: u16) -> OptionSetter {
///     setter(move |options| write_or_panic(options, "port", port))
/// }
///
/// let options = resolve([with_port(8080)]);
/// assert_eq!(read_or_default(&options, "port", 80u16).unwrap(), 8080);
/// assert_eq!(read_or_default(&options, "backlog", 128u32).unwrap(), 128);
/// ```
pub fn resolve<I, S>(setters: I) -> Options
where
    I: IntoIterator<Item = S>,
    S: FnOnce(&mut Options),
{
    Options::new().resolve(setters)
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
