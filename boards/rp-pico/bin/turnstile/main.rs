#![no_std]
#![no_main]

use fugit::RateExtU32;
use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::{
    Adc, Clock, I2C, Sio, Timer,
    adc::AdcPin,
    clocks::init_clocks_and_plls,
    gpio::{FunctionI2C, Pin, PullUp},
    pac,
    watchdog::Watchdog,
};
use rtt_target::{rprintln, rtt_init_print};

use turnstile_rp_pico::joystick::AdcJoystick;
use turnstile_rp_pico::neopixel::{CriticalSectionEngine, SpinDelay};
use turnstile_rp_pico::time::HardwareTimer;

use turnstile_controller::config::{DISPLAY_I2C_ADDRESS, DISPLAY_I2C_FREQ_HZ};
use turnstile_controller::{
    BitBangEngine, BitTiming, Controller, OutputBank, PixelStrip, StatusLed, TextDisplay,
    claim_engine,
};

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== Turnstile Controller ===");

    // Get peripherals
    let mut pac = pac::Peripherals::take().unwrap();

    // Set up watchdog driver
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure clocks (125 MHz)
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let system_hz = clocks.system_clock.freq().to_Hz();
    rprintln!("System clock configured: {} Hz", system_hz);

    // Set up the Single Cycle IO (for GPIO access)
    let sio = Sio::new(pac.SIO);

    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    // Joystick: vertical on GPIO26 (ADC0), horizontal on GPIO27 (ADC1)
    let adc = Adc::new(pac.ADC, &mut pac.RESETS);
    let channel_a = AdcPin::new(pins.gpio26.into_floating_input()).unwrap();
    let channel_b = AdcPin::new(pins.gpio27.into_floating_input()).unwrap();
    let joystick = AdcJoystick::new(adc, channel_a, channel_b);

    // Status LED: red GPIO13, green GPIO11, blue GPIO12
    let status_led = StatusLed::new(
        pins.gpio13.into_push_pull_output(),
        pins.gpio11.into_push_pull_output(),
        pins.gpio12.into_push_pull_output(),
    );

    // OLED on I2C1: SDA GPIO14, SCL GPIO15
    let sda: Pin<_, FunctionI2C, PullUp> = pins.gpio14.reconfigure();
    let scl: Pin<_, FunctionI2C, PullUp> = pins.gpio15.reconfigure();
    let i2c = I2C::i2c1(
        pac.I2C1,
        sda,
        scl,
        DISPLAY_I2C_FREQ_HZ.Hz(),
        &mut pac.RESETS,
        &clocks.system_clock,
    );
    let display = TextDisplay::new(i2c, DISPLAY_I2C_ADDRESS);

    // 5x5 matrix on GPIO7. A single bit-banged line, nothing to fall back to.
    let line = BitBangEngine::new(
        pins.gpio7.into_push_pull_output(),
        SpinDelay,
        BitTiming::for_clock(system_hz),
    );
    let mut primary = Some(CriticalSectionEngine::new(line));
    // No second engine on this board, so the claim cannot fail here.
    let mut fallback: Option<_> = None;
    let engine = match claim_engine(&mut primary, &mut fallback) {
        Ok(engine) => engine,
        Err(e) => {
            rprintln!("fatal: {}", e);
            panic!();
        }
    };
    let matrix = PixelStrip::new(engine);

    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let time_source = HardwareTimer::new(timer);

    rprintln!("=== Hardware Ready ===");

    let outputs = OutputBank::new(status_led, display, matrix);
    let mut controller = Controller::new(joystick, timer, outputs, &time_source);

    controller.run()
}
