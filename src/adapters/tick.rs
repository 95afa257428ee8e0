/// The free running counter backing the tick source.
/// The counter counts up from zero and reloads when it reaches the compare value.
pub trait TickSource {
    /// The interrupt line of the overflow interrupt.
    fn irq(&self) -> u8;

    /// Clear the flag indicating that the counter has reached the compare value.
    fn clear_pending_overflow(&self);

    /// Reset the counter value to zero.
    fn reset_counter(&self);

    /// Set the compare value at which the counter overflows.
    fn set_compare(&self, compare: u64);

    /// Start counting on the core clock with auto-reload and the overflow interrupt enabled.
    fn start(&self);
}

#[cfg(test)]
pub mod fakes {
    use std::{cell::{Cell, RefCell}, vec::Vec};

    use super::*;

    pub struct FakeTickSource {
        pub compare: Cell<u64>,
        pub counter: Cell<u64>,
        pub pending: Cell<bool>,
        pub running: Cell<bool>,
        pub ops: RefCell<Vec<&'static str>>,
    }

    impl FakeTickSource {
        pub fn new() -> Self {
            Self {
                compare: Cell::new(0),
                counter: Cell::new(123),
                pending: Cell::new(true),
                running: Cell::new(false),
                ops: RefCell::new(Vec::new()),
            }
        }
    }

    impl TickSource for FakeTickSource {
        fn irq(&self) -> u8 {
            12
        }

        fn clear_pending_overflow(&self) {
            self.ops.borrow_mut().push("clear");
            self.pending.set(false);
        }

        fn reset_counter(&self) {
            self.ops.borrow_mut().push("reset");
            self.counter.set(0);
        }

        fn set_compare(&self, compare: u64) {
            self.ops.borrow_mut().push("compare");
            self.compare.set(compare);
        }

        fn start(&self) {
            self.ops.borrow_mut().push("start");
            self.running.set(true);
        }
    }
}
