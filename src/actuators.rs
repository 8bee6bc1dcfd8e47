//! Output side: four active-high switched outputs and the vent servo.
//!
//! Pin writes on this board cannot fail, so every output is required to have
//! `Infallible` as its error type.

use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal::pwm::SetDutyCycle;

use crate::control::{ActuatorCommand, VENT_CLOSED_ANGLE};

/// Largest angle the servo accepts
pub const SERVO_MAX_ANGLE: u8 = 180;
/// Servo frame length at 50Hz
pub const SERVO_PERIOD_US: u16 = 20_000;
/// Pulse width at 0 degrees
pub const SERVO_MIN_PULSE_US: u16 = 500;
/// Pulse width at 180 degrees
pub const SERVO_MAX_PULSE_US: u16 = 2_500;

/// Anything that can apply an ActuatorCommand to the outside world
pub trait ActuatorOutputs {
    fn apply(&mut self, cmd: &ActuatorCommand);

    /// Puts every output into its known-off state
    fn all_off(&mut self) {
        self.apply(&ActuatorCommand::OFF);
    }

    /// The command most recently applied
    fn last_command(&self) -> ActuatorCommand;
}

/// Hobby servo on a 50Hz PWM channel
pub struct VentServo<C> {
    channel: C,
    angle: u8,
}

impl<C> VentServo<C>
where
    C: SetDutyCycle<Error = Infallible>,
{
    /// Wraps a PWM channel that is already running at 50Hz
    /// The vent is driven closed straight away
    pub fn new(channel: C) -> Self {
        let mut servo = Self {
            channel,
            angle: VENT_CLOSED_ANGLE,
        };
        servo.set_angle(VENT_CLOSED_ANGLE);
        servo
    }

    /// Moves the servo; anything past SERVO_MAX_ANGLE is clamped
    pub fn set_angle(&mut self, angle: u8) {
        let angle = angle.min(SERVO_MAX_ANGLE);
        match self
            .channel
            .set_duty_cycle_fraction(pulse_width_us(angle), SERVO_PERIOD_US)
        {
            Ok(()) => {}
            Err(never) => match never {},
        }
        self.angle = angle;
    }

    /// The last commanded angle
    pub fn angle(&self) -> u8 {
        self.angle
    }
}

/// Pulse width for an angle, linear between the min and max pulse
pub fn pulse_width_us(angle: u8) -> u16 {
    let angle = angle.min(SERVO_MAX_ANGLE) as u32;
    let span = (SERVO_MAX_PULSE_US - SERVO_MIN_PULSE_US) as u32;
    SERVO_MIN_PULSE_US + (angle * span / SERVO_MAX_ANGLE as u32) as u16
}

/// Owns every actuator on the board
pub struct ActuatorDriver<Alarm, Heater, Pump, Light, Vent> {
    alarm: Alarm,
    heater: Heater,
    pump: Pump,
    grow_light: Light,
    vent: VentServo<Vent>,
    last: ActuatorCommand,
}

impl<Alarm, Heater, Pump, Light, Vent> ActuatorDriver<Alarm, Heater, Pump, Light, Vent>
where
    Alarm: OutputPin<Error = Infallible>,
    Heater: OutputPin<Error = Infallible>,
    Pump: OutputPin<Error = Infallible>,
    Light: OutputPin<Error = Infallible>,
    Vent: SetDutyCycle<Error = Infallible>,
{
    pub fn new(alarm: Alarm, heater: Heater, pump: Pump, grow_light: Light, vent: VentServo<Vent>) -> Self {
        Self {
            alarm,
            heater,
            pump,
            grow_light,
            vent,
            last: ActuatorCommand::OFF,
        }
    }
}

impl<Alarm, Heater, Pump, Light, Vent> ActuatorOutputs for ActuatorDriver<Alarm, Heater, Pump, Light, Vent>
where
    Alarm: OutputPin<Error = Infallible>,
    Heater: OutputPin<Error = Infallible>,
    Pump: OutputPin<Error = Infallible>,
    Light: OutputPin<Error = Infallible>,
    Vent: SetDutyCycle<Error = Infallible>,
{
    fn apply(&mut self, cmd: &ActuatorCommand) {
        drive(&mut self.heater, cmd.heater_on);
        drive(&mut self.alarm, cmd.alarm_on);
        self.vent.set_angle(cmd.vent_angle);
        // HIGH = relay energised; flip here if the relay board is wired active-low
        drive(&mut self.grow_light, cmd.grow_light_on);
        drive(&mut self.pump, cmd.pump_on);

        self.last = ActuatorCommand {
            vent_angle: self.vent.angle(),
            ..*cmd
        };
    }

    fn last_command(&self) -> ActuatorCommand {
        self.last
    }
}

fn drive<P: OutputPin<Error = Infallible>>(pin: &mut P, on: bool) {
    match pin.set_state(PinState::from(on)) {
        Ok(()) => {}
        Err(never) => match never {},
    }
}
