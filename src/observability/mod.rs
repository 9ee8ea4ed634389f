//! OpenTelemetry tracing with file-based export.
//!
//! glocate owns the terminal while it runs, so diagnostics cannot go to
//! stderr. Instead `tracing` spans and events are bridged into OpenTelemetry
//! and written as OTLP JSON lines to a file in the data directory:
//!
//! ```text
//! tracing → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter → glocate-otlp.json
//! ```
//!
//! The file rotates at 10 MiB and keeps 3 numbered backups.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in the config file or `--trace-level`
//! 3. Default: `"info"`
//!
//! `off` disables tracing.
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `tracer`: Tracer provider with the file exporter
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: Rotating file writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};
