//! Analog sensor sampling.
//!
//! All three sensors sit on 10-bit ADC channels. Temperature comes from a
//! TMP36-style part (10mV/C with a 500mV offset); light and soil moisture are
//! used as raw magnitudes.

/// Largest value a 10-bit conversion can produce
pub const ADC_MAX: u16 = 1023;
/// Reference voltage the transfer function is scaled against
pub const REFERENCE_VOLTS: f32 = 5.0;
/// Number of steps on the reference scale
pub const ADC_STEPS: f32 = 1024.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum SensorChannel {
    Temperature,
    Light,
    SoilMoisture,
}

/// Source of raw analog samples, one per channel
pub trait AnalogInputs {
    /// Reads a raw 10-bit sample from the channel
    fn read(&mut self, channel: SensorChannel) -> u16;
}

/// One reading of every sensor, taken at the start of an iteration
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct SensorSample {
    pub temperature_c: f32,
    pub light_level: u16,
    pub soil_moisture: u16,
}

/// Reads every sensor once
/// param inputs: the analog channels
/// returns SensorSample
pub fn read_sensors<I: AnalogInputs>(inputs: &mut I) -> SensorSample {
    let temperature = read_clamped(inputs, SensorChannel::Temperature);
    let light_level = read_clamped(inputs, SensorChannel::Light);
    let soil_moisture = read_clamped(inputs, SensorChannel::SoilMoisture);

    SensorSample {
        temperature_c: celsius_from_raw(temperature),
        light_level,
        soil_moisture,
    }
}

/// Converts a raw temperature sample to Celsius
/// param raw: 10-bit sample
pub fn celsius_from_raw(raw: u16) -> f32 {
    let voltage = raw as f32 * REFERENCE_VOLTS / ADC_STEPS;
    (voltage - 0.5) * 100.
}

fn read_clamped<I: AnalogInputs>(inputs: &mut I, channel: SensorChannel) -> u16 {
    inputs.read(channel).min(ADC_MAX)
}
