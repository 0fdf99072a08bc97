//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → JsonLinesExporter → /data/folio-otlp.json
//! ```
//!
//! - **File-Based Export**: one OTLP JSON document per line in `/data/folio-otlp.json`
//! - **Rotation**: at 10 MB into timestamped backups, the 3 newest kept
//! - **Level**: `trace_level` plugin option, default `info`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider and span exporter
//! - [`span_formatter`]: OTLP JSON serialization
//! - [`file_writer`]: Rotating file writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
