//! Macros for building option sets and values.

/// Resolves an option set from setters of different closure types.
///
/// Each argument is boxed with [`setter`](crate::setter) and the list is passed
/// to [`resolve`](crate::resolve).
///
/// # Examples
///
/// ```rust
/// use typed_options::{read, write_or_panic};
///
/// let retries = 3u32;
/// let options = typed_options::resolve![
///     move |o| write_or_panic(o, "retries", retries),
///     |o| write_or_panic(o, "host", "localhost".to_string()),
/// ];
///
/// assert_eq!(read::<u32>(&options, "retries").unwrap(), 3);
/// assert_eq!(read::<String>(&options, "host").unwrap(), "localhost");
/// ```
#[macro_export]
macro_rules! resolve {
    ($($setter:expr),* $(,)?) => {{
        let setters: ::std::vec::Vec<$crate::OptionSetter> =
            ::std::vec![$($crate::setter($setter)),*];
        $crate::resolve(setters)
    }};
}

/// Builds a [`Value`](crate::Value), optionally declaring the capabilities it
/// provides.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use typed_options::{read_dyn, value, write_value, Options};
///
/// trait Clock: Send + Sync {
///     fn now(&self) -> u64;
/// }
///
/// struct Frozen(u64);
///
/// impl Clock for Frozen {
///     fn now(&self) -> u64 {
///         self.0
///     }
/// }
///
/// let mut options = Options::new();
/// write_value(&mut options, "clock", value!(Frozen(7) => dyn Clock)).unwrap();
/// write_value(&mut options, "ticks", value!(3u32)).unwrap();
///
/// let clock: Arc<dyn Clock> = read_dyn(&options, "clock").unwrap();
/// assert_eq!(clock.now(), 7);
/// ```
#[macro_export]
macro_rules! value {
    ($value:expr => $($capability:ty),+ $(,)?) => {
        $crate::Value::builder($value)
            $(.provides::<$capability>(|v| v))+
            .build()
    };
    ($value:expr) => {
        $crate::Value::new($value)
    };
}
