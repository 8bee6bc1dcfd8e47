//! Threshold decisions.
//!
//! Each actuator follows exactly one sensor field and one threshold. The rules
//! are strict comparisons with no hysteresis, so a value sitting on a
//! threshold takes the off (or closed) branch.

use crate::sensors::SensorSample;
use crate::thresholds::Thresholds;

pub const VENT_CLOSED_ANGLE: u8 = 0;
pub const VENT_OPEN_ANGLE: u8 = 90;

/// What every actuator should be doing for one iteration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct ActuatorCommand {
    pub heater_on: bool,
    pub alarm_on: bool,
    pub vent_angle: u8,
    pub grow_light_on: bool,
    pub pump_on: bool,
}

impl ActuatorCommand {
    /// Everything off and the vent closed
    pub const OFF: ActuatorCommand = ActuatorCommand {
        heater_on: false,
        alarm_on: false,
        vent_angle: VENT_CLOSED_ANGLE,
        grow_light_on: false,
        pump_on: false,
    };
}

/// Maps a sample onto the actuator states
/// param sample: current sensor readings
/// param thresholds: comparison points
/// returns ActuatorCommand
pub fn decide(sample: &SensorSample, thresholds: &Thresholds) -> ActuatorCommand {
    let frost = frost(sample.temperature_c, thresholds);
    ActuatorCommand {
        heater_on: frost,
        alarm_on: frost,
        vent_angle: vent_angle(sample.temperature_c, thresholds),
        grow_light_on: grow_light(sample.light_level, thresholds),
        pump_on: irrigation(sample.soil_moisture, thresholds),
    }
}

/// Heater and buzzer share this condition
pub fn frost(temperature_c: f32, thresholds: &Thresholds) -> bool {
    temperature_c < thresholds.frost
}

pub fn vent_angle(temperature_c: f32, thresholds: &Thresholds) -> u8 {
    if temperature_c > thresholds.high_temp {
        VENT_OPEN_ANGLE
    } else {
        VENT_CLOSED_ANGLE
    }
}

pub fn grow_light(light_level: u16, thresholds: &Thresholds) -> bool {
    light_level < thresholds.low_light
}

pub fn irrigation(soil_moisture: u16, thresholds: &Thresholds) -> bool {
    soil_moisture < thresholds.dry_soil
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(temperature_c: f32, light_level: u16, soil_moisture: u16) -> SensorSample {
        SensorSample {
            temperature_c,
            light_level,
            soil_moisture,
        }
    }

    #[test]
    fn cold_dark_dry() {
        let cmd = decide(&sample(2.0, 250, 350), &Thresholds::DEFAULT);
        assert_eq!(
            cmd,
            ActuatorCommand {
                heater_on: true,
                alarm_on: true,
                vent_angle: 0,
                grow_light_on: true,
                pump_on: true,
            }
        );
    }

    #[test]
    fn hot_opens_vent_only() {
        let cmd = decide(&sample(35.0, 500, 600), &Thresholds::DEFAULT);
        assert_eq!(
            cmd,
            ActuatorCommand {
                vent_angle: VENT_OPEN_ANGLE,
                ..ActuatorCommand::OFF
            }
        );
    }

    #[test]
    fn nominal_is_all_off() {
        let cmd = decide(&sample(20.0, 500, 600), &Thresholds::DEFAULT);
        assert_eq!(cmd, ActuatorCommand::OFF);
    }

    #[test]
    fn values_on_a_threshold_stay_off() {
        let t = Thresholds::DEFAULT;
        assert!(!frost(4.0, &t));
        assert_eq!(vent_angle(30.0, &t), VENT_CLOSED_ANGLE);
        assert!(!grow_light(300, &t));
        assert!(!irrigation(400, &t));
    }

    #[test]
    fn custom_thresholds_are_honoured() {
        let t = Thresholds {
            frost: 10.0,
            high_temp: 12.0,
            low_light: 0,
            dry_soil: 1023,
        };
        let cmd = decide(&sample(11.0, 0, 1022), &t);
        assert!(!cmd.heater_on);
        assert_eq!(cmd.vent_angle, VENT_CLOSED_ANGLE);
        assert!(!cmd.grow_light_on);
        assert!(cmd.pump_on);
    }
}
