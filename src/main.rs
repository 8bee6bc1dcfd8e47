#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

/// Host builds only exist so the library tests can run; the firmware needs the Pico
#[cfg(not(target_os = "none"))]
fn main() {}

#[cfg(target_os = "none")]
mod firmware {
    use bsp::entry;
    use defmt::*;
    use defmt_rtt as _;
    use embedded_hal_0_2::adc::OneShot;
    use panic_probe as _;

    // Provide an alias for our BSP so we can switch targets quickly.
    use rp_pico as bsp;

    use bsp::hal::{
        self,
        adc::{Adc, AdcPin},
        clocks::{init_clocks_and_plls, Clock},
        gpio::bank0::{Gpio0, Gpio1, Gpio2, Gpio3, Gpio4, Gpio5},
        gpio::{FunctionSio, Pin, PullDown, SioOutput},
        pac,
        pwm::Slices,
        watchdog::Watchdog,
        Timer,
    };
    use greenhouse_rs::actuators::{ActuatorDriver, VentServo};
    use greenhouse_rs::controller::Greenhouse;
    use greenhouse_rs::rendering::CharacterDisplay;
    use greenhouse_rs::sensors::{AnalogInputs, SensorChannel};
    use greenhouse_rs::thresholds::Thresholds;
    use greenhouse_rs::timer::CycleTimer;
    use lcd1602_rs::LCD1602;

    /// 125MHz / 64 / (39062 + 1) is 50Hz for the vent servo
    const SERVO_PWM_DIV: u8 = 64;
    const SERVO_PWM_TOP: u16 = 39_062;

    type OutPin<G> = Pin<G, FunctionSio<SioOutput>, PullDown>;
    type Display = LCD1602<
        OutPin<Gpio1>,
        OutPin<Gpio0>,
        OutPin<Gpio2>,
        OutPin<Gpio3>,
        OutPin<Gpio4>,
        OutPin<Gpio5>,
        Timer,
    >;

    /// The LCD1602 as the controller's character display
    struct Lcd(Display);

    impl CharacterDisplay for Lcd {
        fn clear(&mut self) {
            self.0.clear().unwrap();
        }

        fn set_cursor(&mut self, col: u8, row: u8) {
            self.0.set_position(col, row).unwrap();
        }

        fn write_str(&mut self, s: &str) {
            self.0.print(s).unwrap();
        }
    }

    /// The three ADC inputs
    /// The ADC is 12-bit; samples are brought down to the 10-bit scale the control logic uses
    struct Sensors<T, L, S> {
        adc: Adc,
        temperature: T,
        light: L,
        soil: S,
    }

    impl<T, L, S> AnalogInputs for Sensors<T, L, S>
    where
        Adc: OneShot<Adc, u16, T> + OneShot<Adc, u16, L> + OneShot<Adc, u16, S>,
    {
        fn read(&mut self, channel: SensorChannel) -> u16 {
            let raw: u16 = match channel {
                SensorChannel::Temperature => self.adc.read(&mut self.temperature).unwrap_or(0),
                SensorChannel::Light => self.adc.read(&mut self.light).unwrap_or(0),
                SensorChannel::SoilMoisture => self.adc.read(&mut self.soil).unwrap_or(0),
            };
            raw >> 2
        }
    }

    #[entry]
    fn main() -> ! {
        info!("Greenhouse starting");
        // Grab our singleton objects
        let mut pac = pac::Peripherals::take().unwrap();

        // Set up the watchdog driver - needed by the clock setup code
        let mut watchdog = Watchdog::new(pac.WATCHDOG);

        // Configure the clocks
        //
        // The default is to generate a 125 MHz system clock
        let clocks = init_clocks_and_plls(
            bsp::XOSC_CRYSTAL_FREQ,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .unwrap();
        debug!("system clock: {} Hz", clocks.system_clock.freq().to_Hz());

        // The single-cycle I/O block controls our GPIO pins
        let sio = hal::Sio::new(pac.SIO);

        // Set the pins up according to their function on this particular board
        let pins = bsp::Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        let delay = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

        // Set up LCD1602
        let lcd = LCD1602::new(
            pins.gpio1.into_function(),
            pins.gpio0.into_function(),
            pins.gpio2.into_function(),
            pins.gpio3.into_function(),
            pins.gpio4.into_function(),
            pins.gpio5.into_function(),
            delay,
        )
        .unwrap();

        // Set up analog inputs
        let sensors = Sensors {
            adc: Adc::new(pac.ADC, &mut pac.RESETS),
            temperature: AdcPin::new(pins.gpio26.into_floating_input()).ok().unwrap(),
            light: AdcPin::new(pins.gpio27.into_floating_input()).ok().unwrap(),
            soil: AdcPin::new(pins.gpio28.into_floating_input()).ok().unwrap(),
        };

        // Set up vent servo
        let slices = Slices::new(pac.PWM, &mut pac.RESETS);
        let mut pwm = slices.pwm7;
        pwm.set_div_int(SERVO_PWM_DIV);
        pwm.set_top(SERVO_PWM_TOP);
        pwm.enable();
        let mut vent = pwm.channel_a;
        vent.output_to(pins.gpio14);

        // Set up buzzer, heater indicator, pump and grow light relay
        let actuators = ActuatorDriver::new(
            pins.gpio6.into_push_pull_output(),
            pins.gpio7.into_push_pull_output(),
            pins.gpio10.into_push_pull_output(),
            pins.gpio11.into_push_pull_output(),
            VentServo::new(vent),
        );

        let greenhouse = Greenhouse::new(
            sensors,
            actuators,
            Lcd(lcd),
            CycleTimer::new(delay),
            Thresholds::default(),
        );

        info!("Greenhouse ready");
        greenhouse.run()
    }
}
