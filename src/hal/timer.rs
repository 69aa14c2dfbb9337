use avr_device::atmega128a::TC1;
use avr_device::interrupt;

use crate::config::TICK_COUNTS_PER_SECOND;
use crate::ticker::{IrqMask, TickTimer};

// TCCR1B
const WGM12: u8 = 1 << 3;
const CS12: u8 = 1 << 2;
const CLOCK_SELECT_MASK: u8 = 0x07;
// TIMSK / TIFR
const OCIE1A: u8 = 1 << 4;
const OCF1A: u8 = 1 << 4;

/// Timer1 in CTC mode, interrupting on compare match A.
///
/// Counts at `CPU_FREQ_HZ / 256`; the period is one more than OCR1A.
pub struct Timer1 {
    tc1: TC1,
}

impl Timer1 {
    pub fn new(tc1: TC1) -> Self {
        unsafe {
            // Clear timer on compare match, clock stopped until start()
            tc1.tccr1a.write(|w| w.bits(0));
            tc1.tccr1b.write(|w| w.bits(WGM12));
            tc1.tcnt1.write(|w| w.bits(0));
        }
        Self { tc1 }
    }
}

impl TickTimer for Timer1 {
    fn counts_per_second(&self) -> u32 {
        TICK_COUNTS_PER_SECOND
    }

    fn max_period(&self) -> u32 {
        u16::MAX as u32 + 1
    }

    fn set_period(&mut self, counts: u32) {
        let top = counts.saturating_sub(1) as u16;
        unsafe {
            self.tc1.ocr1a.write(|w| w.bits(top));
            self.tc1.tcnt1.write(|w| w.bits(0));
        }
    }

    fn start(&mut self) {
        unsafe {
            // Drop a compare match left over from before start
            self.tc1.tifr.write(|w| w.bits(OCF1A));
            self.tc1.tccr1b.modify(|r, w| {
                w.bits((r.bits() & !CLOCK_SELECT_MASK) | CS12)
            });
        }
        Timer1Irq.unmask();
    }
}

/// Compare-match-A interrupt enable of Timer1.
///
/// Zero-sized, so the idle loop's copy lives in a `static` next to the
/// ticker owned by the interrupt vector.
#[derive(Clone, Copy)]
pub struct Timer1Irq;

impl IrqMask for Timer1Irq {
    fn mask(&self) -> bool {
        // TIMSK is shared with the other timers, keep the read-modify-write whole
        interrupt::free(|_| unsafe {
            let tc1 = &*TC1::ptr();
            let timsk = tc1.timsk.read().bits();
            tc1.timsk.write(|w| w.bits(timsk & !OCIE1A));
            timsk & OCIE1A != 0
        })
    }

    fn unmask(&self) {
        interrupt::free(|_| unsafe {
            let tc1 = &*TC1::ptr();
            tc1.timsk.modify(|r, w| w.bits(r.bits() | OCIE1A));
        })
    }
}
