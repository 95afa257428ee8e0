use crate::TimerId;

/// A general purpose counter/timer unit counting up to a programmable period.
pub trait TimerUnit {
    /// The interrupt line of the update interrupt.
    fn irq(&self) -> u8;

    /// Enable the peripheral bus clock of the unit.
    fn enable_clock(&self);

    /// Program the auto-reload and prescaler registers, count up with no clock division,
    /// and latch the prescaler immediately.
    fn set_time_base(&self, period: u16, prescaler: u16);

    /// Emit the trigger output on every update event.
    fn select_update_trigger(&self);

    /// Clear the update flag.
    fn clear_pending_update(&self);

    /// Enable the update interrupt.
    fn update_int_enable(&self);

    /// Disable the update interrupt.
    fn update_int_disable(&self);

    /// Start counting.
    fn start(&self);

    /// Stop counting.
    fn stop(&self);
}

/// The set of timer units available on the chip.
pub trait TimerBank {
    type Unit: TimerUnit;

    /// Get the unit for `timer`.
    fn unit(&self, timer: TimerId) -> &Self::Unit;
}
