//! Clean-air calibration domain service
//!
//! Establishes the baseline resistance (R0) of the sensor by watching a
//! moving average of its resistance settle while it sits in ozone-free air.
//!
//! The service is a pure state machine: it is fed one resistance sample at
//! a time via [`Calibrator::step`] and never touches hardware or time. The
//! driver wraps it in a paced loop; callers that need a timeout or an
//! iteration cap can drive it themselves.

use libm::fabsf;

/// Number of samples in the moving-average window
pub const CALIBRATION_WINDOW: usize = 20;

/// Per-iteration calibration diagnostics
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationProgress {
    /// Total samples consumed so far
    pub samples: u32,
    /// Moving average over the last window (ohms)
    pub average: f32,
    /// Change against the previous average, in percent of this one
    pub diff_pct: f32,
}

/// Outcome of feeding one sample to the calibrator
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationStep {
    /// Window not yet full; no convergence check has run
    Filling {
        /// Samples collected so far
        collected: usize,
    },
    /// Moving average is still rising
    Converging(CalibrationProgress),
    /// Moving average stopped rising; `baseline` is the new R0
    Converged {
        /// Baseline resistance in ohms
        baseline: f32,
        /// Diagnostics of the iteration that converged
        progress: CalibrationProgress,
    },
}

impl CalibrationStep {
    /// Baseline resistance if calibration has converged
    pub fn baseline(&self) -> Option<f32> {
        match self {
            Self::Converged { baseline, .. } => Some(*baseline),
            _ => None,
        }
    }

    /// Diagnostics for this step, once the window is full
    pub fn progress(&self) -> Option<CalibrationProgress> {
        match self {
            Self::Filling { .. } => None,
            Self::Converging(progress) | Self::Converged { progress, .. } => Some(*progress),
        }
    }
}

/// Calibration state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationState {
    /// Still collecting samples
    Converging,
    /// Baseline established; terminal
    Converged,
}

/// Moving-average convergence detector
///
/// Keeps a ring buffer of the last [`CALIBRATION_WINDOW`] resistances and a
/// running sum. Once the window has filled, every new sample produces an
/// average; calibration converges on the first average that is not greater
/// than the one before it.
#[derive(Clone, Debug)]
pub struct Calibrator {
    window: [f32; CALIBRATION_WINDOW],
    index: usize,
    filled: bool,
    sum: f32,
    samples: u32,
    previous_average: f32,
    outcome: Option<(f32, CalibrationProgress)>,
}

impl Calibrator {
    /// Create a calibrator with an empty window
    pub const fn new() -> Self {
        Self {
            window: [0.0; CALIBRATION_WINDOW],
            index: 0,
            filled: false,
            sum: 0.0,
            samples: 0,
            previous_average: 0.0,
            outcome: None,
        }
    }

    /// Discard all samples and start over
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Current state
    pub fn state(&self) -> CalibrationState {
        if self.outcome.is_some() {
            CalibrationState::Converged
        } else {
            CalibrationState::Converging
        }
    }

    /// Baseline resistance, once converged
    pub fn baseline(&self) -> Option<f32> {
        self.outcome.map(|(baseline, _)| baseline)
    }

    /// Total samples fed since creation or the last reset
    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Feed one resistance sample (ohms)
    ///
    /// After convergence further samples are ignored and the converged
    /// result is returned again.
    pub fn step(&mut self, resistance: f32) -> CalibrationStep {
        if let Some((baseline, progress)) = self.outcome {
            return CalibrationStep::Converged { baseline, progress };
        }

        self.sum -= self.window[self.index];
        self.window[self.index] = resistance;
        self.sum += resistance;
        self.samples = self.samples.saturating_add(1);

        self.index += 1;
        if self.index == CALIBRATION_WINDOW {
            self.index = 0;
            self.filled = true;
        }

        if !self.filled {
            return CalibrationStep::Filling {
                collected: self.index,
            };
        }

        let average = self.sum / CALIBRATION_WINDOW as f32;
        let diff_pct = fabsf(average - self.previous_average) * 100.0 / average;
        let progress = CalibrationProgress {
            samples: self.samples,
            average,
            diff_pct,
        };

        if average <= self.previous_average {
            self.outcome = Some((average, progress));
            return CalibrationStep::Converged {
                baseline: average,
                progress,
            };
        }

        self.previous_average = average;
        CalibrationStep::Converging(progress)
    }
}

impl Default for Calibrator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rises by 100 ohms per sample for 25 samples, then falls back by 50
    fn warm_up_curve(i: usize) -> f32 {
        if i < 25 {
            20_000.0 + 100.0 * i as f32
        } else {
            20_000.0 + 100.0 * 24.0 - 50.0 * (i - 24) as f32
        }
    }

    #[test]
    fn test_no_check_until_window_full() {
        let mut cal = Calibrator::new();
        // A falling sequence would converge at once if checked early
        for i in 0..CALIBRATION_WINDOW - 1 {
            let step = cal.step(50_000.0 - i as f32 * 1000.0);
            assert_eq!(step, CalibrationStep::Filling { collected: i + 1 });
            assert_eq!(cal.state(), CalibrationState::Converging);
        }
        let step = cal.step(1.0);
        assert!(matches!(step, CalibrationStep::Converging(_)));
    }

    #[test]
    fn test_first_average_is_compared_to_zero() {
        let mut cal = Calibrator::new();
        let mut last = CalibrationStep::Filling { collected: 0 };
        for _ in 0..CALIBRATION_WINDOW {
            last = cal.step(10_000.0);
        }
        let progress = last.progress().unwrap();
        assert_eq!(progress.average, 10_000.0);
        assert_eq!(progress.diff_pct, 100.0);
        assert_eq!(progress.samples, CALIBRATION_WINDOW as u32);
        assert_eq!(cal.state(), CalibrationState::Converging);
    }

    #[test]
    fn test_converges_on_first_non_increasing_average() {
        let mut cal = Calibrator::new();
        let mut samples = [0.0f32; 64];
        for (i, s) in samples.iter_mut().enumerate() {
            *s = warm_up_curve(i);
        }

        // Reference: recompute window averages directly
        let mut expected = None;
        let mut previous = 0.0f32;
        for end in CALIBRATION_WINDOW..=samples.len() {
            let avg: f32 =
                samples[end - CALIBRATION_WINDOW..end].iter().sum::<f32>() / CALIBRATION_WINDOW as f32;
            if avg <= previous {
                expected = Some((end, avg));
                break;
            }
            previous = avg;
        }
        let (expected_count, expected_avg) = expected.unwrap();

        let mut converged = None;
        for (i, s) in samples.iter().enumerate() {
            if let Some(baseline) = cal.step(*s).baseline() {
                converged = Some((i + 1, baseline));
                break;
            }
        }
        let (count, baseline) = converged.unwrap();

        assert!(count >= CALIBRATION_WINDOW);
        assert!(count > 25);
        assert_eq!(count, expected_count);
        assert!((baseline - expected_avg).abs() < 1e-2);
        assert_eq!(cal.baseline(), Some(baseline));
        assert_eq!(cal.state(), CalibrationState::Converged);
    }

    #[test]
    fn test_plateau_converges_on_equal_average() {
        let mut cal = Calibrator::new();
        let mut result = None;
        for i in 0..100 {
            let value = if i < 25 { 1_000.0 + i as f32 * 10.0 } else { 1_240.0 };
            if let Some(b) = cal.step(value).baseline() {
                result = Some((i + 1, b));
                break;
            }
        }
        // Window holds only plateau values from sample 44 on; averages stop
        // rising exactly when the last rising sample leaves the window
        let (count, baseline) = result.unwrap();
        assert_eq!(count, 45);
        assert_eq!(baseline, 1_240.0);
    }

    #[test]
    fn test_converged_is_terminal() {
        let mut cal = Calibrator::new();
        let mut baseline = None;
        for _ in 0..CALIBRATION_WINDOW + 1 {
            baseline = cal.step(5_000.0).baseline();
        }
        assert_eq!(baseline, Some(5_000.0));

        let samples = cal.samples();
        let again = cal.step(99_999.0);
        assert_eq!(again.baseline(), Some(5_000.0));
        assert_eq!(cal.samples(), samples);
    }

    #[test]
    fn test_reset_restarts() {
        let mut cal = Calibrator::new();
        for _ in 0..CALIBRATION_WINDOW + 1 {
            cal.step(5_000.0);
        }
        assert_eq!(cal.state(), CalibrationState::Converged);

        cal.reset();
        assert_eq!(cal.state(), CalibrationState::Converging);
        assert_eq!(cal.samples(), 0);
        assert_eq!(cal.step(5_000.0), CalibrationStep::Filling { collected: 1 });
    }
}
