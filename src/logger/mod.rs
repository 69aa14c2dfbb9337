//! Serial line logger
//!
//! Lines are formatted with `ufmt` and pushed byte by byte through any
//! `embedded_hal` serial writer, ending in CRLF like the console.

use embedded_hal::serial::Write;
use ufmt::uWrite;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Error => "[ERR] ",
            Level::Warn => "[WRN] ",
            Level::Info => "[INF] ",
            Level::Debug => "[DBG] ",
        }
    }
}

/// Most verbose level compiled into the image
#[cfg(feature = "debug")]
pub const MAX_LEVEL: Level = Level::Debug;
#[cfg(not(feature = "debug"))]
pub const MAX_LEVEL: Level = Level::Info;

pub struct Logger<W> {
    serial: W,
    max_level: Level,
}

impl<W: Write<u8>> Logger<W> {
    pub fn new(serial: W) -> Self {
        Self::with_level(serial, MAX_LEVEL)
    }

    pub fn with_level(serial: W, max_level: Level) -> Self {
        Self { serial, max_level }
    }

    pub fn enabled(&self, level: Level) -> bool {
        level <= self.max_level
    }

    /// Write one tagged line. `body` is skipped entirely when `level` is
    /// filtered out.
    pub fn emit<F>(&mut self, level: Level, body: F) -> Result<(), W::Error>
    where
        F: FnOnce(&mut Self) -> Result<(), W::Error>,
    {
        if !self.enabled(level) {
            return Ok(());
        }

        self.write_str(level.tag())?;
        body(self)?;
        self.write_str("\r\n")?;
        nb::block!(self.serial.flush())
    }

    /// Hand back the serial port.
    pub fn free(self) -> W {
        self.serial
    }
}

impl<W: Write<u8>> uWrite for Logger<W> {
    type Error = W::Error;

    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        for byte in s.bytes() {
            nb::block!(self.serial.write(byte))?;
        }
        Ok(())
    }
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.emit($crate::logger::Level::Error, |w| ufmt::uwrite!(w, $($arg)+))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.emit($crate::logger::Level::Warn, |w| ufmt::uwrite!(w, $($arg)+))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.emit($crate::logger::Level::Info, |w| ufmt::uwrite!(w, $($arg)+))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.emit($crate::logger::Level::Debug, |w| ufmt::uwrite!(w, $($arg)+))
    };
}
