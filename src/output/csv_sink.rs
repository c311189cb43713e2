//! CSV record sink
//!
//! Writes one row per listing to a flat CSV file.

use crate::output::traits::{Listing, OutputError, OutputResult, RecordSink};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// CSV-backed record sink
///
/// The writer sits behind a mutex so that records emitted from different
/// tasks are written as whole rows.
pub struct CsvSink<W: Write + Send = File> {
    writer: Mutex<csv::Writer<W>>,
    written: AtomicU64,
}

impl CsvSink<File> {
    /// Creates (truncating) the CSV file at `path`
    ///
    /// Failing to create the output file is the one unrecoverable startup
    /// error: callers abort the run before crawling begins.
    pub fn create(path: &Path, write_header: bool) -> OutputResult<Self> {
        let file = File::create(path)?;
        tracing::debug!("Created CSV output at {}", path.display());
        Self::from_writer(file, write_header)
    }
}

impl<W: Write + Send> CsvSink<W> {
    /// Wraps any writer, optionally emitting the header row first
    pub fn from_writer(inner: W, write_header: bool) -> OutputResult<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(inner);

        if write_header {
            writer.write_record(Listing::HEADER)?;
        }

        Ok(Self {
            writer: Mutex::new(writer),
            written: AtomicU64::new(0),
        })
    }

    /// Flushes and returns the underlying writer
    pub fn into_inner(self) -> OutputResult<W> {
        let writer = self
            .writer
            .into_inner()
            .map_err(|e| OutputError::Poisoned(e.to_string()))?;
        writer
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))
    }

    fn lock(&self) -> OutputResult<std::sync::MutexGuard<'_, csv::Writer<W>>> {
        self.writer
            .lock()
            .map_err(|e| OutputError::Poisoned(format!("Failed to lock CSV writer: {}", e)))
    }
}

impl<W: Write + Send> RecordSink for CsvSink<W> {
    fn write(&self, listing: &Listing) -> OutputResult<()> {
        let mut writer = self.lock()?;
        writer.write_record(listing.to_record())?;
        self.written.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn flush(&self) -> OutputResult<()> {
        let mut writer = self.lock()?;
        writer.flush()?;
        Ok(())
    }

    fn written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_header_and_rows() {
        let sink = CsvSink::from_writer(Vec::new(), true).unwrap();
        sink.write(&Listing::new("https://example.com/1", "300 000", "krzyki"))
            .unwrap();
        sink.write(&Listing::new("https://example.com/2", "1,5 mln", "-"))
            .unwrap();
        assert_eq!(sink.written(), 2);

        let bytes = sink.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "url,price,district,scraped_at");
        assert!(lines[1].starts_with("https://example.com/1,300 000,krzyki,"));
        // Fields containing commas are quoted
        assert!(lines[2].starts_with("https://example.com/2,\"1,5 mln\",-,"));
    }

    #[test]
    fn test_without_header() {
        let sink = CsvSink::from_writer(Vec::new(), false).unwrap();
        sink.write(&Listing::new("https://example.com/1", "1", "gaj"))
            .unwrap();

        let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_create_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings.csv");

        let sink = CsvSink::create(&path, true).unwrap();
        sink.write(&Listing::new("https://example.com/1", "1", "gaj"))
            .unwrap();
        sink.flush().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("url,price,district,scraped_at\n"));
        assert!(content.contains("https://example.com/1,1,gaj,"));
    }

    #[test]
    fn test_create_in_missing_directory_fails() {
        let result = CsvSink::create(Path::new("/nonexistent/dir/listings.csv"), true);
        assert!(matches!(result, Err(OutputError::Io(_))));
    }
}
