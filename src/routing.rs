use core::cell::Cell;

use critical_section::Mutex;

use crate::TimerId;

/// A function called from a timer update interrupt.
/// Callbacks are never unregistered and so live for the process lifetime.
pub type Callback = &'static (dyn Fn() + Sync);

/// The callbacks routed to from the timer update interrupts, one slot per timer.
pub struct CallbackTable {
    slots: [Mutex<Cell<Option<Callback>>>; TimerId::COUNT],
}

impl CallbackTable {
    /// Create a table with no routes, useful for static variables.
    pub const fn new() -> Self {
        Self {
            slots: [
                Mutex::new(Cell::new(None)),
                Mutex::new(Cell::new(None)),
                Mutex::new(Cell::new(None)),
                Mutex::new(Cell::new(None)),
            ],
        }
    }

    /// Route the update interrupt of `timer` to `callback`, replacing any previous route.
    pub fn register(&self, timer: TimerId, callback: Callback) {
        critical_section::with(|cs| self.slots[timer.index()].borrow(cs).set(Some(callback)));
    }

    /// Get the callback routed to from `timer`.
    pub fn get(&self, timer: TimerId) -> Option<Callback> {
        critical_section::with(|cs| self.slots[timer.index()].borrow(cs).get())
    }

    /// Invoke the callback routed to from `timer`, returning whether there was one.
    ///
    /// The callback runs outside of the critical section.
    pub fn invoke(&self, timer: TimerId) -> bool {
        match self.get(timer) {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }
}

impl Default for CallbackTable {
    fn default() -> Self {
        Self::new()
    }
}
