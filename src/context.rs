use crate::{CallbackTable, TickCounter};

/// The state shared between the main program and the interrupt handlers.
///
/// Create exactly one in a `static` and pass it by reference to the configuration
/// calls and the interrupt handlers, see [`interrupt_handlers!`](crate::interrupt_handlers).
/// The tick count is written only by the tick source overflow interrupt, and each
/// route only by the configuration of its timer.
pub struct TimeContext {
    ticks: TickCounter,
    routes: CallbackTable,
}

impl TimeContext {
    pub const fn new() -> Self {
        Self {
            ticks: TickCounter::new(),
            routes: CallbackTable::new(),
        }
    }

    #[inline]
    pub fn ticks(&self) -> &TickCounter {
        &self.ticks
    }

    #[inline]
    pub fn routes(&self) -> &CallbackTable {
        &self.routes
    }

    /// The number of tick source overflows since start.
    #[inline]
    pub fn now(&self) -> u64 {
        self.ticks.get()
    }
}

impl Default for TimeContext {
    fn default() -> Self {
        Self::new()
    }
}
