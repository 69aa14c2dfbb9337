use avr_device::atmega128a::WDT;

// WDTCR
const WDCE: u8 = 1 << 4;
const WDE: u8 = 1 << 3;
const WDP_MASK: u8 = 0x07;

/// Watchdog prescaler selections, as WDP2:0
#[derive(Clone, Copy)]
#[repr(u8)]
pub enum WatchdogTimeout {
    Ms500 = 5,
    Ms1000 = 6,
    Ms2000 = 7,
}

pub struct Watchdog {
    wdt: WDT,
}

impl Watchdog {
    #[inline]
    pub fn new(wdt: WDT) -> Self {
        Self { wdt }
    }

    /// Arm the watchdog in system reset mode.
    #[inline]
    pub fn start(&mut self, timeout: WatchdogTimeout) {
        unsafe {
            // Timed sequence: WDCE and WDE together, then the new setting
            self.wdt.wdtcr.write(|w| w.bits(WDCE | WDE));
            self.wdt.wdtcr.write(|w| w.bits(WDE | (timeout as u8 & WDP_MASK)));
        }
    }

    /// Reset the watchdog counter. Shaped as a hook callback so the slow
    /// ticker can keep the watchdog fed.
    #[inline]
    pub fn feed() {
        avr_device::asm::wdr();
    }
}
