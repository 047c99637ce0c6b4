//! Basic usage example for typed-options.
//!
//! Demonstrates:
//! - Writing option setters as wrapper functions
//! - Resolving them into an option set
//! - Reading values with `read()`, `read_or_default()` and `read_or_panic()`
//! - What the failures look like
//!
//! Run with: `RUST_LOG=typed_options=trace cargo run --example basic_usage`

use std::time::Duration;
use tracing_subscriber::EnvFilter;
use typed_options::{
    read, read_or_default, read_or_panic, resolve, set, setter, write, write_or_panic,
    OptionSetter,
};

// Custom struct to demonstrate complex types
#[derive(Debug, Clone, PartialEq)]
struct Limits {
    max_connections: u32,
    max_body_bytes: usize,
}

fn with_timeout(timeout: Duration) -> OptionSetter {
    setter(move |options| write_or_panic(options, "timeout", timeout))
}

fn with_limits(limits: Limits) -> OptionSetter {
    set("limits", limits)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== typed-options: Basic Usage ===\n");

    // -------------------------------------------------------------------------
    // 1. Resolve setters
    // -------------------------------------------------------------------------
    println!("1. Resolving setters...");

    let mut options = resolve([
        with_timeout(Duration::from_secs(5)),
        with_limits(Limits {
            max_connections: 64,
            max_body_bytes: 1 << 20,
        }),
        set("name", "gateway".to_string()),
    ]);

    println!("   Resolved: {options:?}");

    // -------------------------------------------------------------------------
    // 2. Read with the exact type
    // -------------------------------------------------------------------------
    println!("\n2. Reading values...");

    let timeout: Duration = read_or_panic(&options, "timeout");
    let limits: Limits = read_or_panic(&options, "limits");
    let name: String = read_or_panic(&options, "name");

    println!("   timeout = {timeout:?}");
    println!("   limits  = {limits:?}");
    println!("   name    = {name}");

    // -------------------------------------------------------------------------
    // 3. Defaults for unset options
    // -------------------------------------------------------------------------
    println!("\n3. Reading with defaults...");

    let retries = read_or_default(&options, "retries", 3u32).unwrap_or(0);
    println!("   retries (unset) = {retries}");

    // -------------------------------------------------------------------------
    // 4. Failures
    // -------------------------------------------------------------------------
    println!("\n4. Failures...");

    if let Err(err) = read::<u64>(&options, "timeout") {
        println!("   wrong type : {err}");
    }
    if let Err(err) = read::<u64>(&options, "port") {
        println!("   unset key  : {err}");
    }
    if let Err(err) = write(&mut options, "name", "other".to_string()) {
        println!("   second set : {err}");
    }

    println!("\n=== Example completed successfully! ===");
}
