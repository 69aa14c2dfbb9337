/// Hardware timer that raises the tick interrupt.
///
/// The ticker only needs the count rate and a way to program the
/// compare period; register-level details stay in the binding.
pub trait TickTimer {
    /// Timer increments per second.
    fn counts_per_second(&self) -> u32;

    /// Largest period the compare register can hold.
    fn max_period(&self) -> u32;

    /// Program the compare period and restart the count from zero.
    fn set_period(&mut self, counts: u32);

    /// Run the timer and enable its compare interrupt.
    fn start(&mut self);
}
