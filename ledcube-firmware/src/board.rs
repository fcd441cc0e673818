//! Board wiring adapters for the RP2040 build
//!
//! Bridges embassy-rp peripherals to the traits the drivers are
//! generic over.

use core::convert::Infallible;

use embassy_rp::gpio::{Flex, Pull};
use embassy_rp::uart::{Blocking, UartTx};
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use ledcube_core::traits::ReportSink;

/// Open-drain view of a flexible GPIO
///
/// The two-wire bus needs lines a slave can hold low while the master
/// has released them. `set_high` switches the pad to input and lets
/// the pull-up raise it; `set_low` drives it as a low output. Reads
/// sample the pad, so a slave acknowledge on a released line is
/// visible.
pub struct OpenDrain<'d> {
    pin: Flex<'d>,
}

impl<'d> OpenDrain<'d> {
    pub fn new(mut pin: Flex<'d>) -> Self {
        pin.set_pull(Pull::Up);
        // Level the pad drives whenever it is switched to output
        pin.set_low();
        pin.set_as_input();
        Self { pin }
    }
}

impl ErrorType for OpenDrain<'_> {
    type Error = Infallible;
}

impl OutputPin for OpenDrain<'_> {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.pin.set_as_output();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.pin.set_as_input();
        Ok(())
    }
}

impl InputPin for OpenDrain<'_> {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.pin.is_high())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(self.pin.is_low())
    }
}

/// Diagnostic report stream over a blocking UART transmitter
pub struct UartReport<'d> {
    tx: UartTx<'d, Blocking>,
}

impl<'d> UartReport<'d> {
    pub fn new(tx: UartTx<'d, Blocking>) -> Self {
        Self { tx }
    }
}

impl ReportSink for UartReport<'_> {
    fn report(&mut self, line: &str) {
        // Fire and forget; a wedged serial line must not stop the cube
        let _ = self.tx.blocking_write(line.as_bytes());
        let _ = self.tx.blocking_write(b"\r\n");
    }
}
