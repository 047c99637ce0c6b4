//! Option setters: the callbacks a constructor receives and applies.
//!
//! Library authors usually expose one wrapper function per option that returns
//! an [`OptionSetter`], and their constructor passes the caller's setters to
//! [`resolve`](crate::resolve).

use std::any::Any;

use crate::access::raise;
use crate::{write_or_panic, write_value, OptionKey, Options, Value};

/// A boxed setter, so setters built from different closures fit in one list.
pub type OptionSetter = Box<dyn FnOnce(&mut Options)>;

/// Boxes a setter closure.
pub fn setter(f: impl FnOnce(&mut Options) + 'static) -> OptionSetter {
    Box::new(f)
}

/// A setter writing `value` under `key`.
///
/// Applying it panics if the key is already set.
pub fn set<T>(key: impl Into<OptionKey>, value: T) -> OptionSetter
where
    T: Any + Send + Sync,
{
    let key = key.into();
    setter(move |options| write_or_panic(options, key, value))
}

/// A setter writing a prepared [`Value`] under `key`.
///
/// Applying it panics if the key is already set.
pub fn set_value(key: impl Into<OptionKey>, value: impl Into<Value>) -> OptionSetter {
    let key = key.into();
    let value = value.into();
    setter(move |options| {
        if let Err(err) = write_value(options, key, value) {
            raise(err);
        }
    })
}
