//! MQ131 driver
//!
//! Wires an [`AnalogInputPort`] to the domain model: reads the divider,
//! converts to ozone concentration and runs clean-air calibration loops.

use embedded_hal::delay::DelayNs;

use crate::domain::{
    convert, ozone, CalibrationStep, Calibrator, ConcentrationUnit, Environment, OzoneReading,
};
use crate::ports::diagnostics::DiagnosticSink;
use crate::ports::sensor::{AnalogInputPort, SensorConfig, SensorError};

/// MQ131 ozone sensor
///
/// Holds the analog input, the load resistor value and the baseline
/// resistance R0. The baseline starts at a placeholder and is replaced by
/// [`Mq131::calibrate`] or [`Mq131::set_baseline_resistance`].
///
/// Every operation that samples the input takes `&mut self`, so a
/// calibration can never overlap a concentration query.
pub struct Mq131<A: AnalogInputPort> {
    input: A,
    config: SensorConfig,
    baseline_ohms: f32,
}

impl<A: AnalogInputPort> Mq131<A> {
    /// Create a driver with the given load resistor (ohms)
    ///
    /// Configures the analog input once.
    pub fn new(input: A, load_resistance_ohms: u32) -> Result<Self, SensorError> {
        Self::with_config(input, SensorConfig::new(load_resistance_ohms))
    }

    /// Create a driver from a full configuration
    pub fn with_config(mut input: A, config: SensorConfig) -> Result<Self, SensorError> {
        if config.load_resistance_ohms == 0 || !is_valid_baseline(config.baseline_resistance_ohms)
        {
            return Err(SensorError::InvalidConfig);
        }

        input.configure()?;
        debug!(
            "MQ131 ready: R_load = {} ohm, R0 = {} ohm",
            config.load_resistance_ohms,
            config.baseline_resistance_ohms
        );

        Ok(Self {
            input,
            config,
            baseline_ohms: config.baseline_resistance_ohms,
        })
    }

    /// Current configuration
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// Load resistor value (ohms)
    pub fn load_resistance(&self) -> u32 {
        self.config.load_resistance_ohms
    }

    /// Current baseline resistance R0 (ohms)
    pub fn baseline_resistance(&self) -> f32 {
        self.baseline_ohms
    }

    /// Override the baseline, e.g. with one stored from an earlier calibration
    ///
    /// Rejects zero, negative and non-finite values.
    pub fn set_baseline_resistance(&mut self, baseline_ohms: f32) -> Result<(), SensorError> {
        if !is_valid_baseline(baseline_ohms) {
            return Err(SensorError::InvalidConfig);
        }
        self.baseline_ohms = baseline_ohms;
        Ok(())
    }

    /// Last raw sample seen by the input, if it keeps one
    pub fn last_raw_value(&self) -> Option<u16> {
        self.input.last_raw_value()
    }

    /// Sample the input and return the sensor resistance (ohms)
    pub fn read_r_sensor(&mut self) -> Result<f32, SensorError> {
        let raw = self.input.read_raw()?;
        ozone::sensor_resistance(raw, self.config.load_resistance_ohms)
            .ok_or(SensorError::InvalidData)
    }

    /// Sample the input and return the full conversion
    pub fn read(
        &mut self,
        unit: ConcentrationUnit,
        env: &Environment,
    ) -> Result<OzoneReading, SensorError> {
        let raw = self.input.read_raw()?;
        let resistance = ozone::sensor_resistance(raw, self.config.load_resistance_ohms)
            .ok_or(SensorError::InvalidData)?;

        let ratio = ozone::corrected_ratio(resistance, self.baseline_ohms, env);
        let value = convert(ozone::ratio_to_ppm(ratio), ConcentrationUnit::Ppm, unit);

        let reading = OzoneReading::new(raw, resistance, ratio, value, unit);
        if !reading.is_plausible() {
            warn!("MQ131 implausible reading: raw {}, ratio {}", raw, ratio);
        }
        Ok(reading)
    }

    /// Ozone concentration in `unit` under the given conditions
    ///
    /// Pass [`Environment::REFERENCE`] when conditions are unknown. A NaN or
    /// negative result means the resistance was corrupted.
    pub fn get_o3(&mut self, unit: ConcentrationUnit, env: &Environment) -> Result<f32, SensorError> {
        self.read(unit, env).map(|reading| reading.concentration)
    }

    /// Calibrate in clean air, blocking until the baseline settles
    ///
    /// Samples every `calibration_interval_ms` and feeds a [`Calibrator`].
    /// There is no iteration cap: a sensor whose average keeps rising keeps
    /// this running. Drive [`Calibrator`] directly for bounded calibration.
    ///
    /// On success the new baseline is stored and returned.
    pub fn calibrate<D, S>(&mut self, delay: &mut D, sink: &mut S) -> Result<f32, SensorError>
    where
        D: DelayNs,
        S: DiagnosticSink,
    {
        let mut calibrator = Calibrator::new();
        info!("MQ131 calibration started");
        loop {
            if let Some(baseline) = self.calibration_step(&mut calibrator, sink)? {
                return Ok(baseline);
            }
            delay.delay_ms(self.config.calibration_interval_ms);
        }
    }

    /// Async version of [`Mq131::calibrate`]
    pub async fn calibrate_async<D, S>(
        &mut self,
        delay: &mut D,
        sink: &mut S,
    ) -> Result<f32, SensorError>
    where
        D: embedded_hal_async::delay::DelayNs,
        S: DiagnosticSink,
    {
        let mut calibrator = Calibrator::new();
        info!("MQ131 calibration started");
        loop {
            if let Some(baseline) = self.calibration_step(&mut calibrator, sink)? {
                return Ok(baseline);
            }
            delay.delay_ms(self.config.calibration_interval_ms).await;
        }
    }

    /// One sample of a calibration run
    ///
    /// Unusable samples (zero reading, non-positive resistance) are skipped.
    fn calibration_step<S: DiagnosticSink>(
        &mut self,
        calibrator: &mut Calibrator,
        sink: &mut S,
    ) -> Result<Option<f32>, SensorError> {
        let resistance = match self.read_r_sensor() {
            Ok(r) if r.is_finite() && r > 0.0 => r,
            Ok(r) => {
                warn!("MQ131 calibration: skipping resistance {}", r);
                return Ok(None);
            }
            Err(SensorError::InvalidData) => {
                warn!("MQ131 calibration: skipping zero sample");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        match calibrator.step(resistance) {
            CalibrationStep::Filling { collected } => {
                trace!("MQ131 calibration: filling window {}", collected);
                Ok(None)
            }
            CalibrationStep::Converging(progress) => {
                sink.calibration_progress(&progress);
                Ok(None)
            }
            CalibrationStep::Converged { baseline, progress } => {
                sink.calibration_progress(&progress);
                self.baseline_ohms = baseline;
                sink.calibration_complete(baseline);
                info!(
                    "MQ131 calibration converged after {} samples: R0 = {} ohm",
                    progress.samples,
                    baseline
                );
                Ok(Some(baseline))
            }
        }
    }

    /// Release the analog input
    pub fn release(self) -> A {
        self.input
    }
}

fn is_valid_baseline(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
