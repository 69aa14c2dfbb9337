use ufmt::{uDisplay, uWrite, Formatter};

/// Misuse the slow ticker can detect at setup time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Hook interval was zero or negative
    InvalidInterval,
    /// Base or hook frequency is zero or out of the timer's range
    InvalidFrequency,
    /// Every hook slot is taken
    RegistryFull,
    /// Timer reports a counts-per-second rate the ticker cannot represent
    ClockOutOfRange,
}

impl Error {
    pub fn as_str(&self) -> &'static str {
        match self {
            Error::InvalidInterval => "invalid hook interval",
            Error::InvalidFrequency => "invalid frequency",
            Error::RegistryFull => "hook registry full",
            Error::ClockOutOfRange => "timer clock out of range",
        }
    }
}

impl uDisplay for Error {
    fn fmt<W>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error>
    where
        W: uWrite + ?Sized,
    {
        f.write_str(self.as_str())
    }
}
