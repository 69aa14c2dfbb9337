//! Slow ticker firmware for the ATmega128
//!
//! One hardware timer, many periodic hooks, and a "second elapsed" signal
//! the idle loop can consume without racing the timer interrupt.

#![cfg_attr(not(test), no_std)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

pub mod application;
pub mod config;
pub mod logger;
pub mod ticker;

#[cfg(target_arch = "avr")]
pub mod hal;
#[cfg(target_arch = "avr")]
pub mod os;

#[cfg(test)]
pub(crate) mod testing;
