use core::num::NonZeroU32;

use crate::{CoreClock, InterruptController, TickCounter, TickSource};

/// The priority of the tick source overflow interrupt.
const SYSTICK_PRIORITY: u8 = 1;

/// The time base of the tick counter, i.e. how often the tick source overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    /// Overflow every second.
    Seconds,
    /// Overflow every millisecond.
    Millis,
    /// Overflow every microsecond.
    Micros,
    /// Overflow every `1 / divisor` seconds.
    /// Prefer multiples of ten to keep the unit intuitive.
    Divisor(NonZeroU32),
}

impl Precision {
    /// Decode a numeric precision, 0, 1 and 2 being seconds, milliseconds and microseconds.
    /// Any other value is a custom divisor.
    pub fn from_code(code: u32) -> Self {
        match NonZeroU32::new(code) {
            None => Self::Seconds,
            Some(code) => match code.get() {
                1 => Self::Millis,
                2 => Self::Micros,
                _ => Self::Divisor(code),
            },
        }
    }

    /// The number of overflows per second.
    pub fn divisor(&self) -> u32 {
        match self {
            Self::Seconds => 1,
            Self::Millis => 1_000,
            Self::Micros => 1_000_000,
            Self::Divisor(divisor) => divisor.get(),
        }
    }

    /// The compare value for a core clock of `clock` Hz.
    pub fn compare(&self, clock: u32) -> u64 {
        (clock / self.divisor()).saturating_sub(1) as u64
    }
}

/// The tick source driver, counting overflows of the free running counter.
pub struct SysTickDrv<S: TickSource> {
    systick: S,
}

impl<S: TickSource> SysTickDrv<S> {
    pub fn new(systick: S) -> Self {
        Self { systick }
    }

    /// Start the tick source, overflowing at `precision`.
    ///
    /// The tick count is not reset, so calling this again keeps the ticks counted so far.
    pub fn init<C: CoreClock, I: InterruptController>(
        &self,
        precision: Precision,
        clock: &C,
        pfic: &I,
    ) {
        let compare = precision.compare(clock.freq());
        log::debug!(
            "systick: {:?} at {} Hz, compare {}",
            precision,
            clock.freq(),
            compare
        );

        self.systick.clear_pending_overflow();
        self.systick.reset_counter();
        self.systick.set_compare(compare);
        self.systick.start();

        pfic.set_priority(self.systick.irq(), SYSTICK_PRIORITY);
        pfic.enable(self.systick.irq());
    }

    /// Handle the overflow interrupt.
    #[inline]
    pub fn on_overflow(&self, ticks: &TickCounter) {
        self.systick.clear_pending_overflow();
        ticks.increment();
    }
}

#[cfg(test)]
pub mod tests {
    use crate::{
        adapters::{interrupt::fakes::FakeInterruptController, tick::fakes::FakeTickSource},
        Hclk,
    };

    use super::*;

    const CLOCK: Hclk = Hclk(96_000_000);

    #[test]
    fn from_code() {
        assert_eq!(Precision::Seconds, Precision::from_code(0));
        assert_eq!(Precision::Millis, Precision::from_code(1));
        assert_eq!(Precision::Micros, Precision::from_code(2));
        assert_eq!(100, Precision::from_code(100).divisor());
    }

    #[test]
    fn compare() {
        assert_eq!(95_999_999, Precision::Seconds.compare(CLOCK.0));
        assert_eq!(95_999, Precision::Millis.compare(CLOCK.0));
        assert_eq!(95, Precision::Micros.compare(CLOCK.0));
        assert_eq!(959_999, Precision::from_code(100).compare(CLOCK.0));
        assert_eq!(0, Precision::Micros.compare(1000));
    }

    #[test]
    fn init() {
        let drv = SysTickDrv::new(FakeTickSource::new());
        let pfic = FakeInterruptController::default();

        drv.init(Precision::Millis, &CLOCK, &pfic);

        assert_eq!(vec!["clear", "reset", "compare", "start"], *drv.systick.ops.borrow());
        assert_eq!(95_999, drv.systick.compare.get());
        assert_eq!(0, drv.systick.counter.get());
        assert!(!drv.systick.pending.get());
        assert!(drv.systick.running.get());
        assert_eq!(vec![(12, 1)], *pfic.priorities.borrow());
        assert_eq!(vec![12], *pfic.enabled.borrow());
    }

    #[test]
    fn get_without_overflow() {
        let drv = SysTickDrv::new(FakeTickSource::new());
        let ticks = TickCounter::new();
        drv.init(Precision::Micros, &CLOCK, &FakeInterruptController::default());

        let first = ticks.get();
        assert_eq!(first, ticks.get());
        assert_eq!(first, ticks.get());
    }

    #[test]
    fn counts_overflows() {
        let drv = SysTickDrv::new(FakeTickSource::new());
        let ticks = TickCounter::new();
        drv.on_overflow(&ticks);
        let before = ticks.get();

        drv.init(Precision::Micros, &CLOCK, &FakeInterruptController::default());
        for _ in 0..1000 {
            drv.systick.pending.set(true);
            drv.on_overflow(&ticks);
            assert!(!drv.systick.pending.get());
        }

        assert_eq!(before + 1000, ticks.get());
    }

    #[test]
    fn reinit_keeps_ticks() {
        let drv = SysTickDrv::new(FakeTickSource::new());
        let ticks = TickCounter::new();
        let pfic = FakeInterruptController::default();

        drv.init(Precision::Millis, &CLOCK, &pfic);
        drv.on_overflow(&ticks);
        drv.on_overflow(&ticks);
        drv.init(Precision::Seconds, &CLOCK, &pfic);

        assert_eq!(2, ticks.get());
        assert_eq!(95_999_999, drv.systick.compare.get());
    }
}
