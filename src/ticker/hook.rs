//! Registered periodic callbacks and the countdown that divides the base tick

use heapless::Vec;

use super::Error;

/// Callback run at interrupt priority when its countdown lapses.
pub type HookFn = fn();

/// Position of a hook in the registry, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookHandle(u8);

impl HookHandle {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

pub struct Hook {
    interval: i32,
    countdown: i32,
    callback: HookFn,
}

impl Hook {
    fn new(interval: i32, callback: HookFn) -> Self {
        Self {
            interval,
            countdown: interval,
            callback,
        }
    }

    #[inline]
    pub fn interval(&self) -> i32 {
        self.interval
    }

    /// Timer counts left until the hook fires; may dip below zero after an
    /// overrun.
    #[inline]
    pub fn countdown(&self) -> i32 {
        self.countdown
    }

    /// Deduct `elapsed` counts, firing at most once.
    #[inline]
    fn advance(&mut self, elapsed: i32) {
        self.countdown = self.countdown.saturating_sub(elapsed);
        if self.countdown <= 0 {
            // Carry the overshoot into the next period so phase never drifts
            self.countdown = self.countdown.saturating_add(self.interval);
            (self.callback)();
        }
    }
}

/// Fixed-capacity, ordered set of hooks.
///
/// Membership is settled before the ticker starts; the tick only walks it.
pub struct HookRegistry<const N: usize> {
    hooks: Vec<Hook, N>,
}

impl<const N: usize> HookRegistry<N> {
    pub const fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Add a hook firing every `interval` timer counts.
    pub fn register(&mut self, interval: i32, callback: HookFn) -> Result<HookHandle, Error> {
        if interval <= 0 {
            return Err(Error::InvalidInterval);
        }
        self.ensure_capacity()?;

        let handle = HookHandle(self.hooks.len() as u8);
        self.hooks
            .push(Hook::new(interval, callback))
            .map_err(|_| Error::RegistryFull)?;
        Ok(handle)
    }

    pub(crate) fn ensure_capacity(&self) -> Result<(), Error> {
        if self.hooks.is_full() || self.hooks.len() > u8::MAX as usize {
            Err(Error::RegistryFull)
        } else {
            Ok(())
        }
    }

    /// Run one base tick of `elapsed` counts over every hook, in
    /// registration order.
    #[inline]
    pub fn advance(&mut self, elapsed: i32) {
        for hook in self.hooks.iter_mut() {
            hook.advance(elapsed);
        }
    }

    pub fn get(&self, handle: HookHandle) -> Option<&Hook> {
        self.hooks.get(handle.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hook> {
        self.hooks.iter()
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for HookRegistry<N> {
    fn default() -> Self {
        Self::new()
    }
}
