//! Integration tests for the defaulting and panicking read variants.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use typed_options::{
    read_dyn_or_default, read_dyn_or_default_or_panic, read_dyn_or_panic, read_or_default,
    read_or_default_or_panic, read_or_panic, resolve, set, value, write, write_nil,
    write_or_panic, write_value, ErrorKind, Options, OptionsError,
};

trait Backoff: Send + Sync {
    fn delay_ms(&self, attempt: u32) -> u64;
}

struct Linear(u64);

impl Backoff for Linear {
    fn delay_ms(&self, attempt: u32) -> u64 {
        self.0 * u64::from(attempt)
    }
}

/// Runs `f` and returns the `OptionsError` it panicked with.
fn panic_error<R>(f: impl FnOnce() -> R) -> OptionsError {
    let payload = match catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => panic!("operation is expected to trigger panic"),
        Err(payload) => payload,
    };
    match payload.downcast::<OptionsError>() {
        Ok(err) => *err,
        Err(_) => panic!("panic payload is not an OptionsError"),
    }
}

// -------------------------------------------------------------------------------------------------
// Defaults
// -------------------------------------------------------------------------------------------------

#[test]
fn test_default_for_unset_key() {
    let options = Options::new();
    assert_eq!(read_or_default(&options, "workers", 4usize).unwrap(), 4);
}

#[test]
fn test_stored_value_wins_over_default() {
    let options = resolve([set("workers", 16usize)]);
    assert_eq!(read_or_default(&options, "workers", 4usize).unwrap(), 16);
}

#[test]
fn test_default_does_not_hide_mismatch() {
    let options = resolve([set("workers", "sixteen")]);

    let err = read_or_default(&options, "workers", 4usize).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

#[test]
fn test_capability_default_for_unset_key() {
    let options = Options::new();

    let fallback: Arc<dyn Backoff> = Arc::new(Linear(100));
    let backoff = read_dyn_or_default(&options, "backoff", Some(fallback))
        .unwrap()
        .map(|b| b.delay_ms(2));
    assert_eq!(backoff, Some(200));

    // A nil default is a valid default too.
    let none = read_dyn_or_default::<dyn Backoff>(&options, "backoff", None).unwrap();
    assert!(none.is_none());
}

#[test]
fn test_capability_default_for_nil_value() {
    let mut options = Options::new();
    write_nil(&mut options, "backoff").unwrap();

    let none = read_dyn_or_default::<dyn Backoff>(&options, "backoff", None).unwrap();
    assert!(none.is_none());

    // A non-nil default does not absorb a stored nil.
    let fallback: Arc<dyn Backoff> = Arc::new(Linear(1));
    match read_dyn_or_default(&options, "backoff", Some(fallback)) {
        Ok(_) => panic!("nil value with a non-nil default must fail"),
        Err(err) => assert_eq!(err.kind(), ErrorKind::NilValue),
    }
}

#[test]
fn test_capability_default_does_not_hide_mismatch() {
    let options = resolve([set("backoff", 5u64)]);

    match read_dyn_or_default::<dyn Backoff>(&options, "backoff", None) {
        Ok(_) => panic!("a value without the capability must fail"),
        Err(err) => assert_eq!(err.kind(), ErrorKind::TypeMismatch),
    }
}

// -------------------------------------------------------------------------------------------------
// Panics
// -------------------------------------------------------------------------------------------------

#[test]
fn test_read_or_panic_returns_value() {
    let options = resolve([set("name", "svc".to_string())]);
    assert_eq!(read_or_panic::<String>(&options, "name"), "svc");
}

#[test]
fn test_read_or_panic_carries_not_found() {
    let options = Options::new();

    let err = panic_error(|| read_or_panic::<i32>(&options, "test-option"));
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(
        err.to_string(),
        "cannot read option 'test-option' from provided option set: option not found"
    );
}

#[test]
fn test_read_or_default_or_panic() {
    let options = resolve([set("test-option", "100".to_string())]);

    assert_eq!(read_or_default_or_panic(&options, "other", 100i32), 100);

    let err = panic_error(|| read_or_default_or_panic(&options, "test-option", 200i32));
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(
        err.to_string(),
        "option 'test-option' is expected to be i32 but is alloc::string::String: wrong type expected from option"
    );
}

#[test]
fn test_dyn_panicking_variants() {
    let mut options = Options::new();
    write_value(&mut options, "backoff", value!(Linear(10) => dyn Backoff)).unwrap();
    write_nil(&mut options, "nothing").unwrap();

    assert_eq!(
        read_dyn_or_panic::<dyn Backoff>(&options, "backoff").delay_ms(3),
        30
    );
    assert!(read_dyn_or_default_or_panic::<dyn Backoff>(&options, "nothing", None).is_none());

    let err = panic_error(|| read_dyn_or_panic::<dyn Backoff>(&options, "nothing"));
    assert_eq!(err.kind(), ErrorKind::NilValue);

    let fallback: Arc<dyn Backoff> = Arc::new(Linear(1));
    let err = panic_error(|| read_dyn_or_default_or_panic(&options, "nothing", Some(fallback)));
    assert_eq!(err.kind(), ErrorKind::NilValue);
}

#[test]
fn test_write_or_panic_on_duplicate() {
    let mut options = Options::new();
    write(&mut options, "x", 1i32).unwrap();

    let err = panic_error(|| write_or_panic(&mut options, "x", 2i32));
    assert_eq!(err.kind(), ErrorKind::DuplicatedKey);
}
