#![cfg_attr(target_arch = "avr", no_std, no_main)]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
#[avr_device::entry]
fn main() -> ! {
    use atmega128_slow_ticker::application::Application;
    use atmega128_slow_ticker::config::{UART_BAUD, WATCHDOG_FEED_HZ};
    use atmega128_slow_ticker::hal::{Power, Timer1, Uart0, Watchdog, WatchdogTimeout};
    use atmega128_slow_ticker::logger::Logger;
    use atmega128_slow_ticker::os::{self, FirmwareTicker, SECOND_FLAG};
    use avr_device::atmega128a::Peripherals;

    let Some(dp) = Peripherals::take() else {
        halt();
    };

    let mut app = Application::new(Logger::new(Uart0::new(dp.USART0, UART_BAUD)));
    let mut watchdog = Watchdog::new(dp.WDT);
    let mut power = Power::new(dp.CPU);

    let mut ticker = match FirmwareTicker::new(Timer1::new(dp.TC1), &SECOND_FLAG) {
        Ok(ticker) => ticker,
        Err(err) => {
            app.report_error("ticker", err);
            halt();
        }
    };

    match ticker.attach_hz(WATCHDOG_FEED_HZ, Watchdog::feed) {
        Ok(_) => watchdog.start(WatchdogTimeout::Ms1000),
        Err(err) => app.report_error("watchdog hook", err),
    }
    app.announce(&ticker);

    if os::install(ticker).is_err() {
        halt();
    }

    // Enable interrupts globally
    unsafe { avr_device::interrupt::enable() };

    loop {
        if !app.on_idle(&SECOND_FLAG) {
            power.enter_idle_mode();
        }
    }
}

#[cfg(target_arch = "avr")]
#[allow(clippy::empty_loop)]
fn halt() -> ! {
    loop {}
}

// The firmware image only exists for AVR; host builds carry the library.
#[cfg(not(target_arch = "avr"))]
fn main() {}
