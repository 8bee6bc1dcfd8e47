/// Thresholds define the fixed comparison points for every actuator decision.
/// frost: Below this temperature (Celsius) the heater and alarm turn on
/// high_temp: Above this temperature (Celsius) the vent opens
/// low_light: Below this analog light level the grow lights turn on
/// dry_soil: Below this analog soil moisture level the pump turns on
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub struct Thresholds {
    pub frost: f32,
    pub high_temp: f32,
    pub low_light: u16,
    pub dry_soil: u16,
}

impl Thresholds {
    pub const DEFAULT: Thresholds = Thresholds {
        frost: 4.0,      // 4C
        high_temp: 30.0, // 30C
        low_light: 300,
        dry_soil: 400,
    };
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::DEFAULT
    }
}
