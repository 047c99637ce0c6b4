//! Typed reads and writes over an option set.
//!
//! Writes record the descriptor of the value's concrete type. Reads reconcile
//! the caller's requested type against that descriptor:
//!
//! - [`read`] asks for a concrete type and succeeds only on exact type identity.
//! - [`read_dyn`] asks for a capability (`dyn Trait`) and succeeds when the
//!   stored value was declared to provide it. Nil never provides anything.
//!
//! Every failure is an [`OptionsError`] naming the key, with the root
//! [`ErrorKind`] as its source.

use std::any::{type_name, Any};
use std::sync::Arc;

use crate::{Descriptor, ErrorKind, OptionKey, Options, OptionsError, OptionsEvent, Value};

// -------------------------------------------------------------------------------------------------
// Reads
// -------------------------------------------------------------------------------------------------

/// Reads the value stored under `key` as exactly type `T`.
///
/// # Errors
///
/// - [`ErrorKind::NotFound`] if the key is unset
/// - [`ErrorKind::TypeMismatch`] if the stored value is not a `T`, nil included
///
/// # Examples
///
/// ```rust
/// use typed_options::{read, write, ErrorKind, Options};
///
/// let mut options = Options::new();
/// write(&mut options, "timeout", 42i32).unwrap();
///
/// assert_eq!(read::<i32>(&options, "timeout").unwrap(), 42);
///
/// let err = read::<String>(&options, "timeout").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::TypeMismatch);
/// assert_eq!(
///     err.to_string(),
///     "option 'timeout' is expected to be alloc::string::String but is i32: wrong type expected from option"
/// );
/// ```
pub fn read<T>(options: &Options, key: impl AsRef<str>) -> Result<T, OptionsError>
where
    T: Any + Clone,
{
    let key = key.as_ref();
    let result = lookup::<T>(options, key);
    observe_read(options, key, type_name::<T>(), &result);
    result
}

fn lookup<T: Any + Clone>(options: &Options, key: &str) -> Result<T, OptionsError> {
    let (slot, actual) = options
        .registry()
        .get(key)
        .map_err(|kind| OptionsError::unreadable(key, kind))?;

    let expected = Descriptor::of::<T>();
    if expected == actual {
        if let Some(value) = slot.downcast::<T>() {
            return Ok(value.clone());
        }
    }

    Err(OptionsError::new(
        key,
        format!("option '{key}' is expected to be {expected} but is {actual}"),
        ErrorKind::TypeMismatch,
    ))
}

/// Reads the value stored under `key` through capability `D`.
///
/// `D` is a trait-object type such as `dyn Logger`. The read succeeds when the
/// value was written with that capability declared (see
/// [`Value::builder`]) or was itself written as an `Arc<D>`. Any non-nil value
/// can also be read as `dyn Any + Send + Sync`.
///
/// Capabilities are not discovered: a value written with plain [`write`] does
/// not provide a trait it implements unless that trait was declared.
///
/// # Errors
///
/// - [`ErrorKind::NotFound`] if the key is unset
/// - [`ErrorKind::NilValue`] if the stored value is nil
/// - [`ErrorKind::TypeMismatch`] if the stored value does not provide `D`
pub fn read_dyn<D>(options: &Options, key: impl AsRef<str>) -> Result<Arc<D>, OptionsError>
where
    D: ?Sized + 'static,
{
    let key = key.as_ref();
    let result = lookup_dyn::<D>(options, key);
    observe_read(options, key, type_name::<D>(), &result);
    result
}

fn lookup_dyn<D: ?Sized + 'static>(options: &Options, key: &str) -> Result<Arc<D>, OptionsError> {
    let (slot, actual) = options
        .registry()
        .get(key)
        .map_err(|kind| OptionsError::unreadable(key, kind))?;

    if let Some(view) = slot.view::<D>() {
        return Ok(view);
    }

    let expected = type_name::<D>();
    if actual.is_nil() {
        return Err(OptionsError::new(
            key,
            format!("option '{key}' is expected to be {expected} but got nil"),
            ErrorKind::NilValue,
        ));
    }

    Err(OptionsError::new(
        key,
        format!(
            "option '{key}' is expected to implement {expected} but {actual} is not compatible with it \
             (capability not declared at write time)"
        ),
        ErrorKind::TypeMismatch,
    ))
}

fn observe_read<T>(
    options: &Options,
    key: &str,
    requested: &'static str,
    result: &Result<T, OptionsError>,
) {
    if let Err(err) = result {
        tracing::debug!(key, expected = requested, error = %err, "option read failed");
    }

    options.emit_event(&OptionsEvent::Read {
        key,
        type_name: requested,
        found: result.is_ok(),
    });
}

/// Like [`read`], but an unset key yields `default`.
///
/// Type mismatches still fail.
pub fn read_or_default<T>(options: &Options, key: impl AsRef<str>, default: T) -> Result<T, OptionsError>
where
    T: Any + Clone,
{
    match read(options, key) {
        Err(err) if err.is(ErrorKind::NotFound) => Ok(default),
        other => other,
    }
}

/// Like [`read_dyn`], with `None` standing for a nil default.
///
/// An unset key yields `default`. A nil value yields `None` only when `default`
/// is `None` as well; with a non-nil default the [`ErrorKind::NilValue`]
/// failure is returned unchanged.
pub fn read_dyn_or_default<D>(
    options: &Options,
    key: impl AsRef<str>,
    default: Option<Arc<D>>,
) -> Result<Option<Arc<D>>, OptionsError>
where
    D: ?Sized + 'static,
{
    match read_dyn::<D>(options, key) {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is(ErrorKind::NotFound) => Ok(default),
        Err(err) if err.is(ErrorKind::NilValue) && default.is_none() => Ok(None),
        Err(err) => Err(err),
    }
}

/// Like [`read`], but panics on failure.
///
/// # Panics
///
/// With the [`OptionsError`] as panic payload.
pub fn read_or_panic<T>(options: &Options, key: impl AsRef<str>) -> T
where
    T: Any + Clone,
{
    match read(options, key) {
        Ok(value) => value,
        Err(err) => raise(err),
    }
}

/// Like [`read_or_default`], but panics on any failure other than an unset key.
pub fn read_or_default_or_panic<T>(options: &Options, key: impl AsRef<str>, default: T) -> T
where
    T: Any + Clone,
{
    match read_or_default(options, key, default) {
        Ok(value) => value,
        Err(err) => raise(err),
    }
}

/// Like [`read_dyn`], but panics on failure.
pub fn read_dyn_or_panic<D>(options: &Options, key: impl AsRef<str>) -> Arc<D>
where
    D: ?Sized + 'static,
{
    match read_dyn::<D>(options, key) {
        Ok(value) => value,
        Err(err) => raise(err),
    }
}

/// Like [`read_dyn_or_default`], but panics on failure.
pub fn read_dyn_or_default_or_panic<D>(
    options: &Options,
    key: impl AsRef<str>,
    default: Option<Arc<D>>,
) -> Option<Arc<D>>
where
    D: ?Sized + 'static,
{
    match read_dyn_or_default(options, key, default) {
        Ok(value) => value,
        Err(err) => raise(err),
    }
}

// -------------------------------------------------------------------------------------------------
// Writes
// -------------------------------------------------------------------------------------------------

/// Stores `value` under `key`.
///
/// # Errors
///
/// - [`ErrorKind::DuplicatedKey`] if the key already holds a value
pub fn write<T>(options: &mut Options, key: impl Into<OptionKey>, value: T) -> Result<(), OptionsError>
where
    T: Any + Send + Sync,
{
    write_value(options, key, Value::new(value))
}

/// Stores a prepared [`Value`] under `key`, keeping its declared capabilities.
///
/// # Errors
///
/// - [`ErrorKind::DuplicatedKey`] if the key already holds a value
pub fn write_value(
    options: &mut Options,
    key: impl Into<OptionKey>,
    value: impl Into<Value>,
) -> Result<(), OptionsError> {
    let key = key.into();
    let value = value.into();
    let type_name = value.descriptor().name();

    let result = options
        .registry_mut()
        .set(key.clone(), value)
        .map_err(|kind| OptionsError::unwritable(&key, kind));

    match &result {
        Ok(()) => tracing::trace!(key = %key, type_name, "option written"),
        Err(err) => tracing::debug!(key = %key, type_name, error = %err, "option write rejected"),
    }

    options.emit_event(&OptionsEvent::Write {
        key: key.as_str(),
        type_name,
        accepted: result.is_ok(),
    });
    result
}

/// Stores the nil value under `key`.
pub fn write_nil(options: &mut Options, key: impl Into<OptionKey>) -> Result<(), OptionsError> {
    write_value(options, key, Value::nil())
}

/// Like [`write`], but panics on failure.
pub fn write_or_panic<T>(options: &mut Options, key: impl Into<OptionKey>, value: T)
where
    T: Any + Send + Sync,
{
    if let Err(err) = write(options, key, value) {
        raise(err);
    }
}

pub(crate) fn raise(err: OptionsError) -> ! {
    tracing::error!(key = %err.key(), error = %err, "unrecoverable option failure");
    std::panic::panic_any(err)
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
