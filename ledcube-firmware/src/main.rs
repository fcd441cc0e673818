//! 3x3x3 bi-color LED cube firmware for RP2040 boards
//!
//! Drives the cube through a chain of three 74HC595 shift registers
//! and polls a DHT12 temperature/humidity sensor over a bit-banged
//! two-wire bus. The measured temperature picks which of the two
//! built-in animations plays: the layer sweep while the room is at or
//! below the warm threshold, the side sweep above it.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Flex, Level, Output};
use embassy_rp::uart::{Config as UartConfig, UartTx};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use ledcube_core::animation::{program, select_program};
use ledcube_core::sensor::SensorPoller;
use ledcube_drivers::player::{AnimationPlayer, PlayerError};
use ledcube_drivers::sensor::Dht12;
use ledcube_drivers::shift::Hc595Chain;
use ledcube_drivers::twi::BitbangTwi;

mod board;

use crate::board::{OpenDrain, UartReport};

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("LED cube firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Shift register chain: GP2 serial data, GP3 shift clock,
    // GP4 storage latch. All pin errors are Infallible on RP2040.
    let chain = Hc595Chain::new(
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
        Output::new(p.PIN_4, Level::Low),
        Delay,
    )
    .unwrap();
    let mut player = AnimationPlayer::new(chain, Delay);

    // Two-wire bus to the DHT12: GP16 SDA, GP17 SCL, on-chip pull-ups
    let twi = BitbangTwi::new(
        OpenDrain::new(Flex::new(p.PIN_16)),
        OpenDrain::new(Flex::new(p.PIN_17)),
        Delay,
    )
    .unwrap();
    let mut sensor = Dht12::new(twi);

    // Diagnostic stream on UART0 TX (GP0), 9600 8N1
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = 9600;
    let mut report = UartReport::new(UartTx::new_blocking(p.UART0, p.PIN_0, uart_config));

    let mut poller = SensorPoller::new();
    let mut current = select_program(poller.values().temperature);
    info!("entering control loop, animation: {=str}", program(current).label);

    loop {
        // One poll transition per pass keeps the sensor traffic short
        // next to the animation's hold times; a full cycle completes
        // every four passes.
        poller.step(&mut sensor, &mut report);

        let selected = select_program(poller.values().temperature);
        if selected != current {
            current = selected;
            info!(
                "temperature {=u8}.{=u8} C, switching animation: {=str}",
                poller.values().temperature.integer,
                poller.values().temperature.fraction,
                program(current).label
            );
        }

        if let Err(err) = player.run(program(current)) {
            match err {
                PlayerError::Pattern(_) => {
                    // Compiled-in program table is defective; blank the
                    // cube rather than display a torn frame
                    error!("animation program references a missing pattern");
                    let _ = player.blank();
                }
                PlayerError::Sink(e) => match e {},
            }
        }
    }
}
