//! Configuration constants for the ATmega128 slow ticker

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// Timer1 clock divider used for the tick timer
pub const TICK_PRESCALER: u32 = 256;

/// Timer1 increments in one second (62.5 kHz at 16 MHz / 256)
pub const TICK_COUNTS_PER_SECOND: u32 = CPU_FREQ_HZ / TICK_PRESCALER;

/// Base frequency programmed before any hook asks for more
pub const DEFAULT_BASE_FREQUENCY_HZ: u32 = 5;

/// The one-second accumulator is seeded with `counts_per_second / SECOND_SEED_DIVISOR`
pub const SECOND_SEED_DIVISOR: i32 = 4;

/// Hook slots available to the firmware image
pub const MAX_HOOKS: usize = 8;

/// UART baud rate
pub const UART_BAUD: u32 = 9600;

/// Rate of the hook that keeps the watchdog fed
pub const WATCHDOG_FEED_HZ: u32 = 4;
