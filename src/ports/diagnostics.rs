//! Diagnostic port - where calibration progress goes
//!
//! Calibration of a fresh sensor can take many minutes. The sink gives the
//! person doing the physical setup something to watch. Nothing in the
//! driver depends on what the sink does with the progress.

use crate::domain::CalibrationProgress;

/// Port for emitting human-readable calibration progress
pub trait DiagnosticSink {
    /// Called once per calibration iteration after the window has filled
    fn calibration_progress(&mut self, progress: &CalibrationProgress);

    /// Called once when calibration converges
    fn calibration_complete(&mut self, baseline_ohms: f32) {
        let _ = baseline_ohms;
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &mut T {
    fn calibration_progress(&mut self, progress: &CalibrationProgress) {
        T::calibration_progress(self, progress)
    }

    fn calibration_complete(&mut self, baseline_ohms: f32) {
        T::calibration_complete(self, baseline_ohms)
    }
}
