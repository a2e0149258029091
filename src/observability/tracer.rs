//! Tracer provider backed by a file span exporter.
//!
//! The plugin sandbox has no network access, so finished spans are written
//! to a rotating file as OTLP JSON instead of being shipped to a collector.

use super::file_writer::FileWriter;
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config, TracerProvider};
use std::future;
use std::path::PathBuf;

/// Span exporter writing one OTLP document per batch to a [`FileWriter`].
#[derive(Debug)]
struct FileSpanExporter {
    writer: FileWriter,
    formatter: SpanFormatter,
    stopped: bool,
}

impl FileSpanExporter {
    fn new(path: PathBuf, resource: Resource) -> Self {
        Self {
            writer: FileWriter::new(path),
            formatter: SpanFormatter::new(resource),
            stopped: false,
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.stopped {
            return Err(TraceError::from("file exporter already shut down"));
        }

        let line = self.formatter.format_batch(batch).to_string();
        self.writer
            .write_line(&line)
            .map_err(|e| TraceError::from(format!("writing trace file: {e}")))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        Box::pin(future::ready(self.write_batch(&batch)))
    }

    fn shutdown(&mut self) {
        self.stopped = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.formatter = SpanFormatter::new(resource.clone());
    }
}

/// Builds a provider that exports every finished span to `path` immediately.
///
/// Uses the simple (unbatched) span processor: the plugin is single threaded
/// and has no runtime to drive a batch processor.
pub fn create_tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(path, resource.clone());

    TracerProvider::builder()
        .with_config(Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
