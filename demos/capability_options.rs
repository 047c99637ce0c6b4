//! Capability options example for typed-options.
//!
//! Demonstrates the **contract-based option** pattern:
//! - Define traits (capabilities) that specify behavior
//! - Write concrete implementations declaring the capabilities they provide
//! - Read them back as `Arc<dyn Trait>`
//! - Fall back to a default when the option is unset, or disable it with nil
//!
//! Run with: `cargo run --example capability_options`

use std::sync::Arc;
use typed_options::{
    read_dyn_or_default, read_dyn_or_default_or_panic, resolve, set_value, value, OptionSetter,
    Options, Value,
};

// =============================================================================
// Capabilities
// =============================================================================

/// Contract for a logging sink.
trait Logger: Send + Sync {
    fn log(&self, message: &str);
    fn name(&self) -> &str;
}

/// Contract for something that can be flushed on shutdown.
trait Flush: Send + Sync {
    fn flush(&self);
}

// =============================================================================
// Implementations
// =============================================================================

struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) {
        println!("   [CONSOLE] {message}");
    }

    fn name(&self) -> &str {
        "ConsoleLogger"
    }
}

/// File-based logger implementation (simulated).
struct FileLogger {
    path: String,
}

impl Logger for FileLogger {
    fn log(&self, message: &str) {
        println!("   [FILE:{}] {message}", self.path);
    }

    fn name(&self) -> &str {
        "FileLogger"
    }
}

impl Flush for FileLogger {
    fn flush(&self) {
        println!("   [FILE:{}] flushed", self.path);
    }
}

// =============================================================================
// Option setters
// =============================================================================

const LOGGER: &str = "logger";
const FLUSH: &str = "flush";

fn with_file_logger(path: &str) -> Vec<OptionSetter> {
    let logger = Arc::new(FileLogger {
        path: path.to_string(),
    });
    vec![
        set_value(
            LOGGER,
            Value::builder_from_arc(logger.clone()).provides::<dyn Logger>(|v| v),
        ),
        set_value(
            FLUSH,
            Value::builder_from_arc(logger).provides::<dyn Flush>(|v| v),
        ),
    ]
}

fn with_console_logger() -> OptionSetter {
    set_value(LOGGER, value!(ConsoleLogger => dyn Logger))
}

fn without_logger() -> OptionSetter {
    set_value(LOGGER, Value::nil())
}

fn run(label: &str, options: &Options) {
    println!("\n{label}");

    let default: Arc<dyn Logger> = Arc::new(ConsoleLogger);
    match read_dyn_or_default(options, LOGGER, Some(default)) {
        Ok(Some(logger)) => logger.log(&format!("hello from {}", logger.name())),
        Ok(None) => println!("   logging disabled"),
        Err(err) => println!("   error: {err}"),
    }

    if let Some(flush) = read_dyn_or_default_or_panic::<dyn Flush>(options, FLUSH, None) {
        flush.flush();
    }
}

fn main() {
    println!("=== typed-options: Capability Options ===");

    run("1. No setters (default logger):", &resolve(Vec::<OptionSetter>::new()));
    run("2. Console logger:", &resolve([with_console_logger()]));
    run("3. File logger with flush:", &resolve(with_file_logger("/var/log/app.log")));
    run("4. Logger set to nil (a non-nil default does not absorb it):", &resolve([without_logger()]));

    println!("\n=== Example completed successfully! ===");
}
