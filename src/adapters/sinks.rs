//! Diagnostic sink adapters
//!
//! - **LogSink**: progress through the crate's logging backend (defmt/log)
//! - **WriteSink**: plain text lines on any `core::fmt::Write` (serial)
//! - **NullSink**: discards everything

use core::fmt::Write;

use crate::domain::CalibrationProgress;
use crate::ports::diagnostics::DiagnosticSink;

/// Sink that forwards progress to the logging backend
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn calibration_progress(&mut self, progress: &CalibrationProgress) {
        info!(
            "MQ131 calibration: samples {}, average {} ohm, diff {}%",
            progress.samples,
            progress.average,
            progress.diff_pct
        );
    }

    fn calibration_complete(&mut self, baseline_ohms: f32) {
        info!("MQ131 calibration complete: R0 = {} ohm", baseline_ohms);
    }
}

/// Sink writing `Average: <a>, Percentage diff: <d>` lines to a text writer
///
/// Write errors are ignored; the output is for humans only.
pub struct WriteSink<W: Write> {
    writer: W,
}

impl<W: Write> WriteSink<W> {
    /// Wrap a writer
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Get the underlying writer
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Release the underlying writer
    pub fn release(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticSink for WriteSink<W> {
    fn calibration_progress(&mut self, progress: &CalibrationProgress) {
        let _ = writeln!(
            self.writer,
            "Average: {:.2}, Percentage diff: {:.2}",
            progress.average, progress.diff_pct
        );
    }

    fn calibration_complete(&mut self, baseline_ohms: f32) {
        let _ = writeln!(self.writer, "R0: {:.2}", baseline_ohms);
    }
}

/// Sink that discards all progress
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn calibration_progress(&mut self, _progress: &CalibrationProgress) {}
}
