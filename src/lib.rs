//! # Typed Options
//!
//! Write-once, type-checked option sets for the functional options pattern.
//!
//! A constructor receives a list of setters, applies them to a fresh
//! [`Options`] set, and later reads each option back with the type it expects.
//! Every key can be written once. Reads never coerce: asking for the wrong
//! type is an error, not a default.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use typed_options::{read_or_default, resolve, setter, write_or_panic, OptionSetter, Options};
//!
//! fn with_timeout(timeout: Duration) -> OptionSetter {
//!     setter(move |options| write_or_panic(options, "timeout", timeout))
//! }
//!
//! struct Client {
//!     timeout: Duration,
//! }
//!
//! impl Client {
//!     fn new(setters: impl IntoIterator<Item = OptionSetter>) -> Self {
//!         let options: Options = resolve(setters);
//!         let timeout = read_or_default(&options, "timeout", Duration::from_secs(30)).unwrap();
//!         Client { timeout }
//!     }
//! }
//!
//! let client = Client::new([with_timeout(Duration::from_secs(5))]);
//! assert_eq!(client.timeout, Duration::from_secs(5));
//! ```
//!
//! ## Main Functions
//!
//! - [`resolve`] - Apply setters to a fresh option set
//! - [`write`] / [`write_value`] / [`write_nil`] - Store a value under a key once
//! - [`read`] - Read a value as exactly type `T`
//! - [`read_dyn`] - Read a value through a capability (`dyn Trait`)
//! - `*_or_default` and `*_or_panic` variants for defaults and startup-time failures
//!
//! ## Failures
//!
//! All operations return [`OptionsError`], whose [`kind`](OptionsError::kind)
//! is one of [`ErrorKind::NotFound`], [`ErrorKind::TypeMismatch`],
//! [`ErrorKind::NilValue`] or [`ErrorKind::DuplicatedKey`].

mod access;
mod macros;
mod option_key;
mod options;
mod options_error;
mod options_event;
mod registry;
mod setter;
mod value;

pub use access::{
    read, read_dyn, read_dyn_or_default, read_dyn_or_default_or_panic, read_dyn_or_panic,
    read_or_default, read_or_default_or_panic, read_or_panic, write, write_nil, write_or_panic,
    write_value,
};
pub use option_key::OptionKey;
pub use options::{resolve, Options};
pub use options_error::{ErrorKind, OptionsError};
pub use options_event::{OptionsEvent, TraceCallback};
pub use setter::{set, set_value, setter, OptionSetter};
pub use value::{Descriptor, Value, ValueBuilder};
