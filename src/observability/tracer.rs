//! Tracer provider exporting spans to a rotating JSON lines file.
//!
//! Zellij plugins run in a WASI sandbox without network access, so spans are
//! written to the plugin's data directory instead of an OTLP collector.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;

use super::file_writer::FileWriter;
use super::span_formatter::SpanFormatter;

/// Writes each exported batch as one OTLP JSON line.
struct JsonLinesExporter {
    writer: FileWriter,
    formatter: SpanFormatter,
    is_shutdown: AtomicBool,
}

impl JsonLinesExporter {
    const fn new(writer: FileWriter, resource: Resource) -> Self {
        Self {
            writer,
            formatter: SpanFormatter::new(resource),
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.is_shutdown.load(Ordering::SeqCst) {
            return Err(TraceError::from("exporter is shut down"));
        }

        let line = self.formatter.format_batch(batch).to_string();
        self.writer
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for JsonLinesExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    /// The resource is fixed at construction.
    fn set_resource(&mut self, _resource: &Resource) {}
}

impl std::fmt::Debug for JsonLinesExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesExporter")
            .field("writer", &self.writer)
            .field("is_shutdown", &self.is_shutdown)
            .finish_non_exhaustive()
    }
}

/// Creates a tracer provider exporting every span, unbatched, to `file_path`.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = JsonLinesExporter::new(FileWriter::new(file_path), resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
