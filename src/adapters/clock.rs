/// Source of the core clock frequency that feeds SysTick and the timers.
pub trait CoreClock {
    /// The core clock frequency, i.e. the number of counter increments per second before prescaling.
    fn freq(&self) -> u32;
}

/// A core clock with a known, fixed frequency, e.g. `SystemCoreClock` after the clock tree is set up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hclk(pub u32);

impl CoreClock for Hclk {
    #[inline]
    fn freq(&self) -> u32 {
        self.0
    }
}
