use qingke::pfic;

use crate::InterruptController;

/// The programmable fast interrupt controller.
pub struct Pfic {
    _private: (),
}

impl Pfic {
    /// Get the interrupt controller.
    ///
    /// # Safety
    ///
    /// Enabling interrupts may break critical sections relying on them being disabled.
    pub unsafe fn steal() -> Self {
        Self { _private: () }
    }
}

impl InterruptController for Pfic {
    fn set_priority(&self, irq: u8, priority: u8) {
        unsafe { pfic::set_priority(irq, priority) }
    }

    fn enable(&self, irq: u8) {
        unsafe { pfic::enable_interrupt(irq) }
    }
}
