//! Idle-loop side of the firmware
//!
//! Consumes "second elapsed" events from the tick interrupt and turns each
//! into one second-tick notification.

use embedded_hal::serial::Write;

use crate::logger::Logger;
use crate::ticker::{Error, IrqMask, SecondFlag, SlowTicker, TickTimer};
use crate::{log_error, log_info, log_warn};

pub struct Application<W> {
    logger: Logger<W>,
    uptime_seconds: u32,
}

impl<W: Write<u8>> Application<W> {
    pub fn new(logger: Logger<W>) -> Self {
        Self {
            logger,
            uptime_seconds: 0,
        }
    }

    /// Startup banner with the ticker's configuration
    pub fn announce<T, M, const N: usize>(&mut self, ticker: &SlowTicker<'_, T, M, N>)
    where
        T: TickTimer,
        M: IrqMask,
    {
        log_info!(
            self.logger,
            "slow ticker: {}Hz base, {} counts/s, {}/{} hooks",
            ticker.base_frequency(),
            ticker.counts_per_second(),
            ticker.hooks().len(),
            ticker.hooks().capacity()
        )
        .ok();
    }

    pub fn report_error(&mut self, context: &str, error: Error) {
        log_error!(self.logger, "{}: {}", context, error).ok();
    }

    /// One pass of the idle loop. Returns `true` if a second was consumed.
    ///
    /// A loop that falls behind drains the backlog one second per pass.
    pub fn on_idle<M: IrqMask>(&mut self, second_flag: &SecondFlag<M>) -> bool {
        if !second_flag.try_consume() {
            return false;
        }

        self.on_second_tick();

        let behind = second_flag.pending();
        if behind > 0 {
            log_warn!(self.logger, "idle loop {}s behind", behind).ok();
        }
        true
    }

    fn on_second_tick(&mut self) {
        self.uptime_seconds = self.uptime_seconds.wrapping_add(1);
        log_info!(self.logger, "uptime {}s", self.uptime_seconds).ok();
    }

    pub fn uptime_seconds(&self) -> u32 {
        self.uptime_seconds
    }

    pub fn free(self) -> Logger<W> {
        self.logger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::Level;
    use crate::testing::{SimMask, SimTimer};
    use embedded_hal_mock::serial::{Mock as SerialMock, Transaction};

    fn line(text: &'static [u8]) -> [Transaction<u8>; 2] {
        [Transaction::write_many(text), Transaction::flush()]
    }

    #[test]
    fn idle_without_pending_second_is_silent() {
        let flag = SecondFlag::new(SimMask::new());
        let logger = Logger::with_level(SerialMock::<u8>::new(&[]), Level::Info);
        let mut app = Application::new(logger);

        assert!(!app.on_idle(&flag));
        assert_eq!(app.uptime_seconds(), 0);
        app.free().free().done();
    }

    #[test]
    fn each_second_is_reported_once() {
        let flag = SecondFlag::new(SimMask::new());
        let expectations: Vec<_> = [line(b"[INF] uptime 1s\r\n"), line(b"[INF] uptime 2s\r\n")]
            .into_iter()
            .flatten()
            .collect();
        let logger = Logger::with_level(SerialMock::new(&expectations), Level::Info);
        let mut app = Application::new(logger);

        flag.raise();
        assert!(app.on_idle(&flag));
        assert!(!app.on_idle(&flag));
        flag.raise();
        assert!(app.on_idle(&flag));

        assert_eq!(app.uptime_seconds(), 2);
        app.free().free().done();
    }

    #[test]
    fn backlog_is_drained_one_second_per_pass() {
        let flag = SecondFlag::new(SimMask::new());
        let expectations: Vec<_> = [
            line(b"[INF] uptime 1s\r\n"),
            line(b"[WRN] idle loop 2s behind\r\n"),
            line(b"[INF] uptime 2s\r\n"),
            line(b"[WRN] idle loop 1s behind\r\n"),
            line(b"[INF] uptime 3s\r\n"),
        ]
        .into_iter()
        .flatten()
        .collect();
        let logger = Logger::with_level(SerialMock::new(&expectations), Level::Info);
        let mut app = Application::new(logger);

        for _ in 0..3 {
            flag.raise();
        }
        while app.on_idle(&flag) {}

        assert_eq!(app.uptime_seconds(), 3);
        assert_eq!(flag.pending(), 0);
        app.free().free().done();
    }

    #[test]
    fn announce_describes_the_ticker() {
        let flag = SecondFlag::new(SimMask::new());
        let timer = SimTimer::with_clock(62_500, 0xFFFF);
        let mut ticker = SlowTicker::<_, _, 4>::new(timer, &flag).unwrap();
        ticker.attach_hz(10, || {}).unwrap();

        let expectations: Vec<_> = [
            line(b"[INF] slow ticker: 10Hz base, 62500 counts/s, 1/4 hooks\r\n"),
            line(b"[ERR] hook: invalid hook interval\r\n"),
        ]
        .into_iter()
        .flatten()
        .collect();
        let logger = Logger::with_level(SerialMock::new(&expectations), Level::Info);
        let mut app = Application::new(logger);

        app.announce(&ticker);
        app.report_error("hook", Error::InvalidInterval);
        app.free().free().done();
    }
}
