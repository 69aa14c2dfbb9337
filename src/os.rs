//! Interrupt vector wiring for the slow ticker
//!
//! `TIMER1_COMPA` has to be a free function, so it reaches the ticker through
//! one package-level slot that is filled once, right before the timer
//! starts, and never replaced.

use avr_device::interrupt::{self, Mutex};
use core::cell::RefCell;

use crate::config::MAX_HOOKS;
use crate::hal::{Timer1, Timer1Irq};
use crate::ticker::{SecondFlag, SlowTicker};

pub type FirmwareTicker = SlowTicker<'static, Timer1, Timer1Irq, MAX_HOOKS>;

/// Elapsed seconds, shared by the tick interrupt and the idle loop
pub static SECOND_FLAG: SecondFlag<Timer1Irq> = SecondFlag::new(Timer1Irq);

static SLOW_TICKER: Mutex<RefCell<Option<FirmwareTicker>>> = Mutex::new(RefCell::new(None));

/// Hand `ticker` to the interrupt vector and start it.
///
/// Only the first call succeeds; a second ticker is handed back untouched.
pub fn install(mut ticker: FirmwareTicker) -> Result<(), FirmwareTicker> {
    interrupt::free(|cs| {
        let mut slot = SLOW_TICKER.borrow(cs).borrow_mut();
        if slot.is_some() {
            return Err(ticker);
        }
        ticker.start();
        *slot = Some(ticker);
        Ok(())
    })
}

#[avr_device::interrupt(atmega128a)]
fn TIMER1_COMPA() {
    interrupt::free(|cs| {
        if let Some(ticker) = SLOW_TICKER.borrow(cs).borrow_mut().as_mut() {
            ticker.tick();
        }
    });
}
