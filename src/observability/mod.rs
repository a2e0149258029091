//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider → FileSpanExporter → JSON lines
//! ```
//!
//! - Traces land in `~/.local/share/zellij/bookstore/bookstore-otlp.json`
//! - The file rotates at 10 MB, keeping three numbered backups
//! - The filter level comes from the `trace_level` plugin option (default `info`)
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider with the file span exporter
//! - [`span_formatter`]: OTLP JSON encoding
//! - [`file_writer`]: Rotating trace file

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
