//! Host-side stand-ins for the timer hardware, used by the unit tests

use core::hint;
use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::ticker::{IrqMask, TickTimer};

/// Timer double that records what the ticker programs into it.
pub struct SimTimer {
    counts_per_second: u32,
    max_period: u32,
    pub period: u32,
    pub started: bool,
    pub restarts: u32,
}

impl SimTimer {
    /// 1 MHz count rate with a 32-bit match register
    pub fn new() -> Self {
        Self::with_clock(1_000_000, u32::MAX)
    }

    pub fn with_clock(counts_per_second: u32, max_period: u32) -> Self {
        Self {
            counts_per_second,
            max_period,
            period: 0,
            started: false,
            restarts: 0,
        }
    }
}

impl TickTimer for SimTimer {
    fn counts_per_second(&self) -> u32 {
        self.counts_per_second
    }

    fn max_period(&self) -> u32 {
        self.max_period
    }

    fn set_period(&mut self, counts: u32) {
        self.period = counts;
        self.restarts += 1;
    }

    fn start(&mut self) {
        self.started = true;
    }
}

/// Interrupt mask modelled as a spin lock.
///
/// While one side holds it the other side waits, the same way a masked
/// compare match stays pending until the mask is lifted.
pub struct SimMask {
    held: AtomicBool,
    entries: AtomicU32,
}

impl SimMask {
    pub const fn new() -> Self {
        Self {
            held: AtomicBool::new(false),
            entries: AtomicU32::new(0),
        }
    }

    pub fn is_held(&self) -> bool {
        self.held.load(Ordering::Acquire)
    }

    pub fn entries(&self) -> u32 {
        self.entries.load(Ordering::Relaxed)
    }
}

impl IrqMask for SimMask {
    fn mask(&self) -> bool {
        while self
            .held
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            hint::spin_loop();
        }
        self.entries.fetch_add(1, Ordering::Relaxed);
        true
    }

    fn unmask(&self) {
        self.held.store(false, Ordering::Release);
    }
}

/// Xorshift generator for reproducible interleavings.
pub struct Rng(u32);

impl Rng {
    pub fn new(seed: u32) -> Self {
        Self(seed.max(1))
    }

    pub fn next(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }

    pub fn chance(&mut self, numerator: u32, denominator: u32) -> bool {
        self.next() % denominator < numerator
    }
}
