//! The sense, decide, act, render loop.

use embedded_hal::delay::DelayNs;

use crate::actuators::ActuatorOutputs;
use crate::control::{decide, ActuatorCommand};
use crate::diagnostics::{diagnostic_line, DiagnosticLine};
use crate::rendering::{render, render_banner, status_label, CharacterDisplay, StatusLabel};
use crate::sensors::{read_sensors, AnalogInputs, SensorSample};
use crate::thresholds::Thresholds;
use crate::timer::CycleTimer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_os = "none", derive(defmt::Format))]
pub enum Phase {
    Init,
    Running,
}

/// Everything one iteration produced
#[derive(Clone, Debug, PartialEq)]
pub struct Cycle {
    pub sample: SensorSample,
    pub command: ActuatorCommand,
    pub label: StatusLabel,
    /// The line written to the debug channel
    pub diagnostic: DiagnosticLine,
}

pub struct Greenhouse<S, A, L, D> {
    sensors: S,
    actuators: A,
    lcd: L,
    timer: CycleTimer<D>,
    thresholds: Thresholds,
    phase: Phase,
}

impl<S, A, L, D> Greenhouse<S, A, L, D>
where
    S: AnalogInputs,
    A: ActuatorOutputs,
    L: CharacterDisplay,
    D: DelayNs,
{
    pub fn new(sensors: S, actuators: A, lcd: L, timer: CycleTimer<D>, thresholds: Thresholds) -> Self {
        Self {
            sensors,
            actuators,
            lcd,
            timer,
            thresholds,
            phase: Phase::Init,
        }
    }

    /// One-off start-up: outputs off, banner, pause, blank screen
    /// Does nothing once the controller is running
    pub fn init(&mut self) {
        if self.phase == Phase::Running {
            return;
        }
        self.actuators.all_off();
        render_banner(&mut self.lcd);
        self.timer.startup_pause();
        self.lcd.clear();
        self.phase = Phase::Running;
    }

    /// Runs one read, decide, act, render pass without waiting
    pub fn step(&mut self) -> Cycle {
        self.init();

        let sample = read_sensors(&mut self.sensors);
        let diagnostic = diagnostic_line(&sample);
        #[cfg(target_os = "none")]
        defmt::info!("{=str}", diagnostic.as_str());

        let command = decide(&sample, &self.thresholds);
        self.actuators.apply(&command);

        let readback = self.actuators.last_command();
        render(&mut self.lcd, &sample, &readback);
        let label = status_label(&readback);
        #[cfg(target_os = "none")]
        defmt::debug!(
            "cycle {} status: {} uptime: {}s",
            self.timer.cycles(),
            label,
            self.timer.uptime_secs()
        );

        Cycle {
            sample,
            command,
            label,
            diagnostic,
        }
    }

    /// A full iteration including the end-of-cycle wait
    pub fn tick(&mut self) -> Cycle {
        let cycle = self.step();
        self.timer.end_cycle();
        cycle
    }

    pub fn run(mut self) -> ! {
        loop {
            self.tick();
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn timer(&self) -> &CycleTimer<D> {
        &self.timer
    }

    pub fn actuators(&self) -> &A {
        &self.actuators
    }

    pub fn lcd(&self) -> &L {
        &self.lcd
    }

    pub fn sensors_mut(&mut self) -> &mut S {
        &mut self.sensors
    }
}
