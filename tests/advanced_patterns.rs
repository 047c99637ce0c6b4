//! Integration tests for the functional options pattern as a library author
//! would use it: one wrapper function per option, a constructor that resolves
//! the caller's setters and reads each option with a default.

use std::sync::Arc;
use std::time::Duration;
use typed_options::{
    read_dyn_or_default, read_or_default, resolve, set_value, setter, value, write_or_panic,
    OptionKey, OptionSetter, Options, OptionsError, Value,
};

trait Transport: Send + Sync {
    fn scheme(&self) -> &'static str;
}

struct Tcp;

impl Transport for Tcp {
    fn scheme(&self) -> &'static str {
        "tcp"
    }
}

struct Tls;

impl Transport for Tls {
    fn scheme(&self) -> &'static str {
        "tls"
    }
}

// Keys a library would keep private to its options module.
const TIMEOUT: &str = "client.timeout";
const RETRIES: &str = "client.retries";
const USER_AGENT: &str = "client.user_agent";
const TRANSPORT: &str = "client.transport";

fn with_timeout(timeout: Duration) -> OptionSetter {
    setter(move |options| write_or_panic(options, TIMEOUT, timeout))
}

fn with_retries(retries: u32) -> OptionSetter {
    setter(move |options| write_or_panic(options, RETRIES, retries))
}

fn with_user_agent(agent: impl Into<String>) -> OptionSetter {
    let agent = agent.into();
    setter(move |options| write_or_panic(options, USER_AGENT, agent))
}

fn with_transport<T: Transport + 'static>(transport: T) -> OptionSetter {
    set_value(TRANSPORT, value!(transport => dyn Transport))
}

fn without_transport() -> OptionSetter {
    set_value(TRANSPORT, Value::nil())
}

#[derive(Debug)]
struct Client {
    timeout: Duration,
    retries: u32,
    user_agent: String,
    scheme: &'static str,
}

impl Client {
    fn new(setters: impl IntoIterator<Item = OptionSetter>) -> Result<Self, OptionsError> {
        let options = resolve(setters);
        Self::from_options(&options)
    }

    fn from_options(options: &Options) -> Result<Self, OptionsError> {
        let fallback: Arc<dyn Transport> = Arc::new(Tcp);
        let transport = read_dyn_or_default(options, TRANSPORT, Some(fallback))?;

        Ok(Client {
            timeout: read_or_default(options, TIMEOUT, Duration::from_secs(30))?,
            retries: read_or_default(options, RETRIES, 3u32)?,
            user_agent: read_or_default(options, USER_AGENT, "typed-options".to_string())?,
            scheme: transport.map_or("none", |t| t.scheme()),
        })
    }
}

#[test]
fn test_defaults_without_setters() {
    let client = Client::new([]).unwrap();

    assert_eq!(client.timeout, Duration::from_secs(30));
    assert_eq!(client.retries, 3);
    assert_eq!(client.user_agent, "typed-options");
    assert_eq!(client.scheme, "tcp");
}

#[test]
fn test_setters_override_defaults() {
    let client = Client::new([
        with_timeout(Duration::from_millis(250)),
        with_retries(0),
        with_user_agent("probe/1.0"),
        with_transport(Tls),
    ])
    .unwrap();

    assert_eq!(client.timeout, Duration::from_millis(250));
    assert_eq!(client.retries, 0);
    assert_eq!(client.user_agent, "probe/1.0");
    assert_eq!(client.scheme, "tls");
}

#[test]
fn test_setter_order_is_irrelevant_for_distinct_keys() {
    let a = Client::new([with_retries(5), with_user_agent("a")]).unwrap();
    let b = Client::new([with_user_agent("a"), with_retries(5)]).unwrap();

    assert_eq!(a.retries, b.retries);
    assert_eq!(a.user_agent, b.user_agent);
}

#[test]
fn test_nil_transport_with_non_nil_default_fails() {
    // The constructor supplies a non-nil default, so an explicit nil surfaces.
    let err = Client::new([without_transport()]).unwrap_err();
    assert_eq!(err.kind(), typed_options::ErrorKind::NilValue);
    assert_eq!(err.key(), &OptionKey::new(TRANSPORT));
}

#[test]
fn test_conflicting_setters_panic() {
    let result = std::panic::catch_unwind(|| {
        Client::new([with_retries(1), with_retries(2)])
    });
    assert!(result.is_err());
}

#[test]
fn test_options_resolved_incrementally() {
    let base = resolve([with_user_agent("base")]);
    let extended = base.resolve([with_retries(9)]);

    let client = Client::from_options(&extended).unwrap();
    assert_eq!(client.user_agent, "base");
    assert_eq!(client.retries, 9);
}
