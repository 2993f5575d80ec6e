#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::UART1;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::uart::{Config as UartConfig, Uart};
use embassy_time::Timer;
use serial_to_servo_rp2040::{
    ActuatorSink, DefmtDiag, PwmServo, ServoBridge, ServoPair, UartLineSource, REST_ANGLE,
};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

bind_interrupts!(struct Irqs {
    UART1_IRQ => embassy_rp::uart::InterruptHandler<UART1>;
});

/// Servo pulse width at 0 degrees, in microseconds.
const SERVO_MIN_PULSE_US: u32 = 500;

/// Servo pulse width at 180 degrees, in microseconds.
const SERVO_MAX_PULSE_US: u32 = 2500;

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("serial-to-servo starting...");

    let p = embassy_rp::init(embassy_rp::config::Config::default());

    // --- UART Setup ---
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = 115_200;

    let uart = Uart::new(
        p.UART1,
        p.PIN_8, // TX
        p.PIN_9, // RX
        Irqs,
        p.DMA_CH0,
        p.DMA_CH1,
        uart_config,
    );
    let (_tx, rx) = uart.split();

    // --- Servo Setup ---
    // The two servos sit on separate PWM slices so each gets its own
    // channel A compare value.
    let servo1 = PwmServo::new(
        Pwm::new_output_a(p.PWM_SLICE0, p.PIN_0, PwmConfig::default()),
        SERVO_MIN_PULSE_US,
        SERVO_MAX_PULSE_US,
    );
    let servo2 = PwmServo::new(
        Pwm::new_output_a(p.PWM_SLICE1, p.PIN_2, PwmConfig::default()),
        SERVO_MIN_PULSE_US,
        SERVO_MAX_PULSE_US,
    );
    let mut pair = ServoPair::new(servo1, servo2);

    // Start from rest and give the horns time to get there before
    // telemetry takes over.
    let _ = pair.set_angle(REST_ANGLE).await;
    Timer::after_millis(200).await;

    let mut bridge = ServoBridge::new(UartLineSource::new(rx), pair, DefmtDiag);

    info!("serial-to-servo initialized, waiting for telemetry...");
    bridge.run().await
}
