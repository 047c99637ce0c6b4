/// Events emitted by an option set during operations.
///
/// These events are passed to the trace callback installed with
/// [`Options::set_trace_callback`](crate::Options::set_trace_callback).
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use typed_options::OptionsEvent;
///
/// let event = OptionsEvent::Write {
///     key: "timeout",
///     type_name: "u64",
///     accepted: true,
/// };
/// assert_eq!(event.to_string(), "write { key: timeout, type_name: u64, accepted: true }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsEvent<'a> {
    /// A value was offered to the option set.
    Write {
        key: &'a str,
        /// Descriptor name of the written value, `<nil>` for nil
        type_name: &'static str,
        /// False when the key already held a value
        accepted: bool,
    },

    /// A value was requested from the option set.
    Read {
        key: &'a str,
        /// The requested type or capability
        type_name: &'static str,
        /// Whether the read produced a value
        found: bool,
    },

    /// A batch of setters was applied.
    Resolve {
        setters: usize,
    },
}

impl std::fmt::Display for OptionsEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionsEvent::Write {
                key,
                type_name,
                accepted,
            } => write!(
                f,
                "write {{ key: {key}, type_name: {type_name}, accepted: {accepted} }}"
            ),
            OptionsEvent::Read {
                key,
                type_name,
                found,
            } => write!(
                f,
                "read {{ key: {key}, type_name: {type_name}, found: {found} }}"
            ),
            OptionsEvent::Resolve { setters } => write!(f, "resolve {{ setters: {setters} }}"),
        }
    }
}

/// Callback receiving every [`OptionsEvent`] of one option set.
///
/// Must be thread-safe so a populated option set stays `Send + Sync`.
pub type TraceCallback = dyn Fn(&OptionsEvent<'_>) + Send + Sync + 'static;
