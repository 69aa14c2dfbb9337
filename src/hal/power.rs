use avr_device::atmega128a::CPU;

// MCUCR
const SE: u8 = 1 << 5;
// SM2:0 = 000 selects idle mode
const SLEEP_MODE_MASK: u8 = 0x1C;

/// Sleep control for the idle loop.
pub struct Power {
    cpu: CPU,
}

impl Power {
    pub fn new(cpu: CPU) -> Self {
        Self { cpu }
    }

    /// Sleep until the next interrupt. Timers keep running in idle mode, so
    /// the tick wakes the loop at the latest one base period later.
    pub fn enter_idle_mode(&mut self) {
        unsafe {
            self.cpu.mcucr.modify(|r, w| w.bits((r.bits() & !SLEEP_MODE_MASK) | SE));
        }
        avr_device::asm::sleep();
        unsafe {
            self.cpu.mcucr.modify(|r, w| w.bits(r.bits() & !SE));
        }
    }
}
