use embedded_hal::delay::DelayNs;

pub const STARTUP_BANNER_MS: u32 = 2000;
pub const CYCLE_DELAY_MS: u32 = 1000;

/// Paces the control loop
/// The period is the work done in an iteration plus a fixed wait;
/// nothing is measured or compensated
pub struct CycleTimer<D> {
    delay: D,
    cycles: u32,
    waited_ms: u64,
}

impl<D: DelayNs> CycleTimer<D> {
    pub fn new(delay: D) -> CycleTimer<D> {
        Self {
            delay,
            cycles: 0,
            waited_ms: 0,
        }
    }

    /// Holds the start-up banner on screen
    pub fn startup_pause(&mut self) {
        self.wait(STARTUP_BANNER_MS);
    }

    /// Waits out the rest of the cycle and counts it
    pub fn end_cycle(&mut self) {
        self.wait(CYCLE_DELAY_MS);
        self.cycles = self.cycles.wrapping_add(1);
    }

    /// Completed cycles
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Total time spent in explicit waits
    pub fn waited_ms(&self) -> u64 {
        self.waited_ms
    }

    /// Rough uptime in seconds, ignoring the time spent doing work
    pub fn uptime_secs(&self) -> u64 {
        self.waited_ms / 1000
    }

    fn wait(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
        self.waited_ms += ms as u64;
    }
}
