//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in ledcube-core and ledcube-hal:
//!
//! - 74HC595 shift register chain (bit serializer + frame transmitter)
//! - Bit-banged two-wire master
//! - DHT12 temperature/humidity sensor
//! - Animation player (sequencer over a frame sink and a delay)

#![no_std]
#![deny(unsafe_code)]

pub mod player;
pub mod sensor;
pub mod shift;
pub mod twi;
