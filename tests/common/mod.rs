#![allow(dead_code)]

use core::cell::RefCell;
use core::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use embedded_hal::pwm::SetDutyCycle;
use greenhouse_rs::actuators::{ActuatorDriver, VentServo};
use greenhouse_rs::controller::Greenhouse;
use greenhouse_rs::rendering::CharacterDisplay;
use greenhouse_rs::sensors::{AnalogInputs, SensorChannel};
use greenhouse_rs::thresholds::Thresholds;
use greenhouse_rs::timer::CycleTimer;

/// Raw ADC values handed out per channel
#[derive(Clone, Copy, Default)]
pub struct FakeAdc {
    pub temperature: u16,
    pub light: u16,
    pub soil: u16,
}

impl FakeAdc {
    /// Raw sample that converts to roughly the given temperature
    pub fn raw_for_celsius(celsius: f32) -> u16 {
        (((celsius / 100.0) + 0.5) * 1024.0 / 5.0) as u16
    }
}

impl AnalogInputs for FakeAdc {
    fn read(&mut self, channel: SensorChannel) -> u16 {
        match channel {
            SensorChannel::Temperature => self.temperature,
            SensorChannel::Light => self.light,
            SensorChannel::SoilMoisture => self.soil,
        }
    }
}

/// Output pin whose level stays observable after the driver owns it
#[derive(Clone, Default)]
pub struct SharedPin(pub Rc<RefCell<bool>>);

impl SharedPin {
    pub fn is_high(&self) -> bool {
        *self.0.borrow()
    }
}

impl ErrorType for SharedPin {
    type Error = Infallible;
}

impl OutputPin for SharedPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        *self.0.borrow_mut() = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        *self.0.borrow_mut() = true;
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct SharedPwm(pub Rc<RefCell<u16>>);

impl embedded_hal::pwm::ErrorType for SharedPwm {
    type Error = Infallible;
}

impl SetDutyCycle for SharedPwm {
    fn max_duty_cycle(&self) -> u16 {
        20_000
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Infallible> {
        *self.0.borrow_mut() = duty;
        Ok(())
    }
}

/// 16x2 screen kept as two rows of text
#[derive(Default)]
pub struct FakeLcd {
    pub rows: [String; 2],
    cursor: (usize, usize),
    pub clears: u32,
}

impl FakeLcd {
    pub fn row(&self, row: usize) -> &str {
        self.rows[row].trim_end()
    }
}

impl CharacterDisplay for FakeLcd {
    fn clear(&mut self) {
        self.rows = [" ".repeat(16), " ".repeat(16)];
        self.cursor = (0, 0);
        self.clears += 1;
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.cursor = (col as usize, row as usize);
    }

    fn write_str(&mut self, s: &str) {
        let (col, row) = self.cursor;
        let line = &mut self.rows[row];
        if line.len() < 16 {
            *line = format!("{:<16}", line);
        }
        line.replace_range(col..col + s.len(), s);
        self.cursor.0 += s.len();
    }
}

/// Adds up every requested wait instead of sleeping
#[derive(Default)]
pub struct RecordingDelay {
    pub total_ns: u64,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
    }
}

pub struct Outputs {
    pub alarm: SharedPin,
    pub heater: SharedPin,
    pub pump: SharedPin,
    pub grow_light: SharedPin,
    pub vent: SharedPwm,
}

pub type Driver = ActuatorDriver<SharedPin, SharedPin, SharedPin, SharedPin, SharedPwm>;
pub type Rig = Greenhouse<FakeAdc, Driver, FakeLcd, RecordingDelay>;

pub fn rig(adc: FakeAdc) -> (Rig, Outputs) {
    let outputs = Outputs {
        alarm: SharedPin::default(),
        heater: SharedPin::default(),
        pump: SharedPin::default(),
        grow_light: SharedPin::default(),
        vent: SharedPwm::default(),
    };
    let driver = ActuatorDriver::new(
        outputs.alarm.clone(),
        outputs.heater.clone(),
        outputs.pump.clone(),
        outputs.grow_light.clone(),
        VentServo::new(outputs.vent.clone()),
    );
    let greenhouse = Greenhouse::new(
        adc,
        driver,
        FakeLcd::default(),
        CycleTimer::new(RecordingDelay::default()),
        Thresholds::default(),
    );
    (greenhouse, outputs)
}
