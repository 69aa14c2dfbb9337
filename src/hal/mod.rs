pub mod power;
pub mod timer;
pub mod uart;
pub mod watchdog;

// Re-export commonly used types
pub use power::Power;
pub use timer::{Timer1, Timer1Irq};
pub use uart::Uart0;
pub use watchdog::{Watchdog, WatchdogTimeout};
