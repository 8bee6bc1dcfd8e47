use heapless::String;
use ufmt::uwrite;

use crate::formatting::write_fixed;
use crate::sensors::SensorSample;

/// Room for the widest line: a saturated temperature and two u16 readings
pub const DIAGNOSTIC_CAPACITY: usize = 64;

pub type DiagnosticLine = String<DIAGNOSTIC_CAPACITY>;

/// Debug line for one iteration: `Temp: <t> C, Light: <l>, Soil: <s>`
/// The temperature keeps two decimals like a serial float print
pub fn diagnostic_line(sample: &SensorSample) -> DiagnosticLine {
    let mut line = DiagnosticLine::new();
    let pushed = line.push_str("Temp: ");
    debug_assert!(pushed.is_ok());
    let pushed = write_fixed(&mut line, sample.temperature_c, 2);
    debug_assert!(pushed.is_ok());
    let pushed = uwrite!(
        line,
        " C, Light: {}, Soil: {}",
        sample.light_level,
        sample.soil_moisture
    );
    debug_assert!(pushed.is_ok());
    line
}
