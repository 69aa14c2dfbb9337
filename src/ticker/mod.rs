//! Slow ticker: one hardware timer divided into many periodic hooks
//!
//! ```text
//! timer compare match ──> SlowTicker::tick()        (interrupt priority)
//!                           ├─ HookRegistry::advance  hooks in order
//!                           └─ second accumulator ──> SecondFlag::raise
//!
//! idle loop ────────────> SecondFlag::try_consume() (tick IRQ masked)
//! ```

pub mod critical;
pub mod dispatcher;
pub mod error;
pub mod flag;
pub mod hook;
pub mod timer;

pub use critical::{CriticalSection, IrqMask};
pub use dispatcher::SlowTicker;
pub use error::Error;
pub use flag::SecondFlag;
pub use hook::{Hook, HookFn, HookHandle, HookRegistry};
pub use timer::TickTimer;
