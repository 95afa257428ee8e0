use core::cell::Cell;

use critical_section::Mutex;

/// The number of tick source overflows since the process started.
///
/// The count is 64 bits wide, so on the 32 bit cores both the increment and the read
/// run with interrupts masked to avoid observing a half updated value.
pub struct TickCounter {
    ticks: Mutex<Cell<u64>>,
}

impl TickCounter {
    /// Create a counter starting at zero, useful for static variables.
    pub const fn new() -> Self {
        Self {
            ticks: Mutex::new(Cell::new(0)),
        }
    }

    /// Get the current tick count.
    #[inline]
    pub fn get(&self) -> u64 {
        critical_section::with(|cs| self.ticks.borrow(cs).get())
    }

    /// Count one overflow. Must only be called from the overflow interrupt.
    #[inline]
    pub(crate) fn increment(&self) {
        critical_section::with(|cs| {
            let ticks = self.ticks.borrow(cs);
            ticks.set(ticks.get().wrapping_add(1));
        });
    }
}

impl Default for TickCounter {
    fn default() -> Self {
        Self::new()
    }
}
