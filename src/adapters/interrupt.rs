/// The interrupt controller lines used by the tick source and the timers.
pub trait InterruptController {
    /// Set the priority of the interrupt line `irq`.
    fn set_priority(&self, irq: u8, priority: u8);

    /// Enable the interrupt line `irq`.
    fn enable(&self, irq: u8);
}

#[cfg(test)]
pub mod fakes {
    use std::{cell::RefCell, vec::Vec};

    use super::*;

    #[derive(Default)]
    pub struct FakeInterruptController {
        pub enabled: RefCell<Vec<u8>>,
        pub priorities: RefCell<Vec<(u8, u8)>>,
    }

    impl InterruptController for FakeInterruptController {
        fn set_priority(&self, irq: u8, priority: u8) {
            self.priorities.borrow_mut().push((irq, priority));
        }

        fn enable(&self, irq: u8) {
            self.enabled.borrow_mut().push(irq);
        }
    }
}
