use avr_device::atmega128a::USART0;
use core::convert::Infallible;
use embedded_hal::serial;

use crate::config::CPU_FREQ_HZ;

// UCSR0A
const UDRE0: u8 = 1 << 5;
const TXC0: u8 = 1 << 6;
// UCSR0B
const TXEN0: u8 = 1 << 3;
// UCSR0C: asynchronous, 8N1
const UCSZ_8BIT: u8 = 0x06;

/// Polled, transmit-only USART0 for the log line.
pub struct Uart0 {
    usart: USART0,
}

impl Uart0 {
    pub fn new(usart: USART0, baud: u32) -> Self {
        let ubrr = (CPU_FREQ_HZ / (16 * baud) - 1) as u16;
        unsafe {
            usart.ubrr0h.write(|w| w.bits((ubrr >> 8) as u8));
            usart.ubrr0l.write(|w| w.bits(ubrr as u8));
            usart.ucsr0c.write(|w| w.bits(UCSZ_8BIT));
            usart.ucsr0b.write(|w| w.bits(TXEN0));
        }
        Self { usart }
    }
}

impl serial::Write<u8> for Uart0 {
    type Error = Infallible;

    fn write(&mut self, word: u8) -> nb::Result<(), Self::Error> {
        if self.usart.ucsr0a.read().bits() & UDRE0 == 0 {
            return Err(nb::Error::WouldBlock);
        }
        unsafe {
            // Writing TXC0 clears it so flush() tracks this byte
            self.usart.ucsr0a.modify(|r, w| w.bits(r.bits() | TXC0));
            self.usart.udr0.write(|w| w.bits(word));
        }
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        let status = self.usart.ucsr0a.read().bits();
        if status & UDRE0 != 0 && status & TXC0 != 0 {
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }
}
