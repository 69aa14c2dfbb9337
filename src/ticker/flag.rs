//! "One second elapsed" events handed from the tick interrupt to the idle loop

use core::cell::UnsafeCell;

use super::critical::{CriticalSection, IrqMask};

/// Count of elapsed seconds the idle loop has not consumed yet.
///
/// The tick interrupt raises it, the idle loop consumes it one event at a
/// time. Every access happens with the tick interrupt masked, so neither
/// side ever observes a torn update even where the count is wider than the
/// CPU's native word.
pub struct SecondFlag<M: IrqMask> {
    pending: UnsafeCell<u32>,
    mask: M,
}

// SAFETY: `pending` is only reached through `with_pending`, which holds the
// tick interrupt masked for the whole access.
unsafe impl<M: IrqMask + Sync> Sync for SecondFlag<M> {}

impl<M: IrqMask> SecondFlag<M> {
    pub const fn new(mask: M) -> Self {
        Self {
            pending: UnsafeCell::new(0),
            mask,
        }
    }

    #[inline]
    fn with_pending<R>(&self, f: impl FnOnce(&mut u32) -> R) -> R {
        let _cs = CriticalSection::enter(&self.mask);
        // SAFETY: the guard excludes the only other context touching `pending`
        f(unsafe { &mut *self.pending.get() })
    }

    /// Record one elapsed second.
    #[inline]
    pub fn raise(&self) {
        self.with_pending(|pending| *pending = pending.saturating_add(1));
    }

    /// Take one elapsed second if any is pending.
    ///
    /// Callers act on a `true` result only after this returns, outside the
    /// masked region.
    #[inline]
    pub fn try_consume(&self) -> bool {
        self.with_pending(|pending| {
            if *pending > 0 {
                *pending -= 1;
                true
            } else {
                false
            }
        })
    }

    /// Seconds raised but not consumed yet.
    pub fn pending(&self) -> u32 {
        self.with_pending(|pending| *pending)
    }

    pub fn mask(&self) -> &M {
        &self.mask
    }
}
