//! Divides the hardware tick among the registered hooks

use crate::config::{DEFAULT_BASE_FREQUENCY_HZ, SECOND_SEED_DIVISOR};

use super::critical::IrqMask;
use super::flag::SecondFlag;
use super::hook::{Hook, HookFn, HookHandle, HookRegistry};
use super::timer::TickTimer;
use super::Error;

/// Periodic-callback dispatcher driven by one timer interrupt.
///
/// Hooks and frequency are set up first, then [`SlowTicker::start`] arms the
/// timer and the interrupt vector calls [`SlowTicker::tick`] once per compare
/// match. Elapsed seconds are published through the shared [`SecondFlag`],
/// which the idle loop consumes without ever touching the ticker itself.
///
/// Changing the base frequency after start does not rescale countdowns in
/// flight: a hook's remaining time is worked off in steps of the new base
/// interval, and its full interval applies again after the next firing.
pub struct SlowTicker<'a, T: TickTimer, M: IrqMask, const N: usize> {
    timer: T,
    hooks: HookRegistry<N>,
    second_flag: &'a SecondFlag<M>,
    counts_per_second: i32,
    base_frequency: u32,
    base_interval: i32,
    second_accumulator: i32,
    running: bool,
}

impl<'a, T: TickTimer, M: IrqMask, const N: usize> SlowTicker<'a, T, M, N> {
    /// Take over `timer` and program the default base frequency.
    pub fn new(timer: T, second_flag: &'a SecondFlag<M>) -> Result<Self, Error> {
        let counts_per_second =
            i32::try_from(timer.counts_per_second()).map_err(|_| Error::ClockOutOfRange)?;
        if counts_per_second == 0 {
            return Err(Error::ClockOutOfRange);
        }

        let mut ticker = Self {
            timer,
            hooks: HookRegistry::new(),
            second_flag,
            counts_per_second,
            base_frequency: 0,
            base_interval: 0,
            second_accumulator: 0,
            running: false,
        };
        ticker.configure(DEFAULT_BASE_FREQUENCY_HZ)?;
        Ok(ticker)
    }

    /// Set the base frequency every hook is divided from.
    ///
    /// Reprograms the timer period, restarting its count, and reseeds the
    /// one-second accumulator with a quarter second.
    pub fn configure(&mut self, base_frequency: u32) -> Result<(), Error> {
        let base_interval = self.interval_for(base_frequency)?;
        if base_interval as u32 > self.timer.max_period() {
            return Err(Error::InvalidFrequency);
        }

        self.base_frequency = base_frequency;
        self.base_interval = base_interval;
        self.timer.set_period(base_interval as u32);
        self.second_accumulator = self.counts_per_second / SECOND_SEED_DIVISOR;
        Ok(())
    }

    /// Arm the timer. No tick happens before this.
    pub fn start(&mut self) {
        self.timer.start();
        self.running = true;
    }

    /// Register a hook firing every `interval` timer counts.
    ///
    /// Registration belongs to setup: hooks added once the timer runs are
    /// only safe if the caller already excludes the tick interrupt.
    pub fn register(&mut self, interval: i32, callback: HookFn) -> Result<HookHandle, Error> {
        self.hooks.register(interval, callback)
    }

    /// Register a hook firing `frequency` times per second.
    ///
    /// A hook faster than the current base frequency raises the base
    /// frequency to match it.
    pub fn attach_hz(&mut self, frequency: u32, callback: HookFn) -> Result<HookHandle, Error> {
        let interval = self.interval_for(frequency)?;
        self.hooks.ensure_capacity()?;

        if frequency > self.base_frequency {
            self.configure(frequency)?;
        }
        self.hooks.register(interval, callback)
    }

    /// Interrupt entry: one compare match of the base timer.
    ///
    /// Runs every hook whose countdown lapsed, then advances the one-second
    /// accumulator. Never blocks and never allocates.
    #[inline]
    pub fn tick(&mut self) {
        self.hooks.advance(self.base_interval);

        self.second_accumulator -= self.base_interval;
        if self.second_accumulator < 0 {
            self.second_accumulator += self.counts_per_second;
            self.second_flag.raise();
        }
    }

    /// Take one pending "second elapsed" event, if any.
    #[inline]
    pub fn try_consume_second_flag(&self) -> bool {
        self.second_flag.try_consume()
    }

    fn interval_for(&self, frequency: u32) -> Result<i32, Error> {
        if frequency == 0 || frequency > self.counts_per_second as u32 {
            return Err(Error::InvalidFrequency);
        }
        Ok(self.counts_per_second / frequency as i32)
    }

    pub fn base_interval(&self) -> i32 {
        self.base_interval
    }

    pub fn base_frequency(&self) -> u32 {
        self.base_frequency
    }

    pub fn counts_per_second(&self) -> i32 {
        self.counts_per_second
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn hooks(&self) -> &HookRegistry<N> {
        &self.hooks
    }

    pub fn hook(&self, handle: HookHandle) -> Option<&Hook> {
        self.hooks.get(handle)
    }

    pub fn second_flag(&self) -> &'a SecondFlag<M> {
        self.second_flag
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }
}
