use core::convert::Infallible;

use ufmt::{uWrite, uwrite};

use crate::control::ActuatorCommand;
use crate::formatting::{write_fixed, BoundDisplay};
use crate::sensors::SensorSample;

pub const LCD_COLUMNS: u8 = 16;
pub const LCD_ROWS: u8 = 2;
/// Column where the status label starts on the bottom line
pub const STATUS_COLUMN: u8 = 11;
/// The vent counts as open above this angle
pub const VENT_OPEN_MIN_ANGLE: u8 = 10;

pub const BANNER_TOP: &str = "Smart Greenhouse";
pub const BANNER_BOTTOM: &str = "Initializing...";

/// A character LCD addressed by column and row
pub trait CharacterDisplay {
    fn clear(&mut self);
    fn set_cursor(&mut self, col: u8, row: u8);
    fn write_str(&mut self, s: &str);
}

/// The single actuator shown on the status line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum StatusLabel {
    Pump,
    Lite,
    Vent,
    Heat,
    Ok,
}

impl StatusLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusLabel::Pump => "PUMP",
            StatusLabel::Lite => "LITE",
            StatusLabel::Vent => "VENT",
            StatusLabel::Heat => "HEAT",
            StatusLabel::Ok => "OK",
        }
    }
}

/// Picks the label to show when several actuators are active
/// Priority: pump > grow light > vent > heater
/// param cmd: the last applied command
pub fn status_label(cmd: &ActuatorCommand) -> StatusLabel {
    if cmd.pump_on {
        StatusLabel::Pump
    } else if cmd.grow_light_on {
        StatusLabel::Lite
    } else if cmd.vent_angle > VENT_OPEN_MIN_ANGLE {
        StatusLabel::Vent
    } else if cmd.heater_on {
        StatusLabel::Heat
    } else {
        StatusLabel::Ok
    }
}

/// Clears the screen and paints the latest readings
/// Top: T:<temp>C L:<light>
/// Bottom: Soil:<soil>, label from STATUS_COLUMN
/// param lcd: LCD instance
/// param sample: readings for this iteration
/// param cmd: readback of the applied command
pub fn render<L: CharacterDisplay>(lcd: &mut L, sample: &SensorSample, cmd: &ActuatorCommand) {
    match paint(lcd, sample, cmd) {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

fn paint<L: CharacterDisplay>(lcd: &mut L, sample: &SensorSample, cmd: &ActuatorCommand) -> Result<(), Infallible> {
    lcd.clear();

    lcd.set_cursor(0, 0);
    let mut out = BoundDisplay { display: &mut *lcd };
    out.write_str("T:")?;
    write_fixed(&mut out, sample.temperature_c, 1)?;
    uwrite!(out, "C L:{}", sample.light_level)?;

    lcd.set_cursor(0, 1);
    uwrite!(BoundDisplay { display: &mut *lcd }, "Soil:{}", sample.soil_moisture)?;

    lcd.set_cursor(STATUS_COLUMN, 1);
    lcd.write_str(status_label(cmd).as_str());
    Ok(())
}

/// Shown once while the controller starts up
pub fn render_banner<L: CharacterDisplay>(lcd: &mut L) {
    lcd.clear();
    lcd.set_cursor(0, 0);
    lcd.write_str(BANNER_TOP);
    lcd.set_cursor(0, 1);
    lcd.write_str(BANNER_BOTTOM);
}
