//! Exclusion between the idle loop and the tick interrupt

/// Masks and unmasks the one interrupt source that drives the ticker.
///
/// Only the tick source is touched; every other interrupt stays live while a
/// [`CriticalSection`] is held.
pub trait IrqMask {
    /// Disable the tick interrupt. Returns `true` if it was enabled before.
    fn mask(&self) -> bool;

    /// Re-enable the tick interrupt.
    fn unmask(&self);
}

impl<M: IrqMask + ?Sized> IrqMask for &M {
    fn mask(&self) -> bool {
        (**self).mask()
    }

    fn unmask(&self) {
        (**self).unmask()
    }
}

/// Scoped mask of the tick interrupt.
///
/// The source is restored to its previous state when the guard drops, on
/// every exit path. Keep the guarded region to a handful of instructions: a
/// compare match that lands inside it stays pending until release.
#[must_use = "the tick interrupt is unmasked as soon as the guard drops"]
pub struct CriticalSection<'a, M: IrqMask + ?Sized> {
    mask: &'a M,
    was_enabled: bool,
}

impl<'a, M: IrqMask + ?Sized> CriticalSection<'a, M> {
    #[inline]
    pub fn enter(mask: &'a M) -> Self {
        let was_enabled = mask.mask();
        Self { mask, was_enabled }
    }
}

impl<M: IrqMask + ?Sized> Drop for CriticalSection<'_, M> {
    #[inline]
    fn drop(&mut self) {
        if self.was_enabled {
            self.mask.unmask();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct FlagMask {
        enabled: Cell<bool>,
        unmasks: Cell<u32>,
    }

    impl FlagMask {
        fn new(enabled: bool) -> Self {
            Self { enabled: Cell::new(enabled), unmasks: Cell::new(0) }
        }
    }

    impl IrqMask for FlagMask {
        fn mask(&self) -> bool {
            self.enabled.replace(false)
        }

        fn unmask(&self) {
            self.unmasks.set(self.unmasks.get() + 1);
            self.enabled.set(true);
        }
    }

    #[test]
    fn guard_restores_enabled_source() {
        let mask = FlagMask::new(true);
        {
            let _cs = CriticalSection::enter(&mask);
            assert!(!mask.enabled.get());
        }
        assert!(mask.enabled.get());
        assert_eq!(mask.unmasks.get(), 1);
    }

    #[test]
    fn guard_leaves_disabled_source_disabled() {
        let mask = FlagMask::new(false);
        drop(CriticalSection::enter(&mask));
        assert!(!mask.enabled.get());
        assert_eq!(mask.unmasks.get(), 0);
    }

    #[test]
    fn guard_releases_on_early_return() {
        fn bail(mask: &FlagMask) -> Option<()> {
            let _cs = CriticalSection::enter(mask);
            None::<()>?;
            Some(())
        }

        let mask = FlagMask::new(true);
        assert!(bail(&mask).is_none());
        assert!(mask.enabled.get());
    }
}
