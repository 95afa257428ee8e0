//! Interrupt numbers.

use ch32_metapac::Interrupt;

use crate::TimerId;

/// The QingKe core SysTick vector.
pub const SYSTICK: u8 = 12;

/// The update interrupt of `timer`.
pub const fn timer(timer: TimerId) -> u8 {
    let irq = match timer {
        TimerId::Tim1 => Interrupt::TIM1_UP,
        #[cfg(not(feature = "ch32x035"))]
        TimerId::Tim2 => Interrupt::TIM2,
        // The CH32X035 TIM2 has a dedicated update interrupt.
        #[cfg(feature = "ch32x035")]
        TimerId::Tim2 => Interrupt::TIM2_UP,
        TimerId::Tim3 => Interrupt::TIM3,
        #[cfg(not(feature = "ch32x035"))]
        TimerId::Tim4 => Interrupt::TIM4,
    };
    irq as u8
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    #[cfg(not(feature = "ch32x035"))]
    fn timer_update_lines() {
        assert_eq!(41, timer(TimerId::Tim1));
        assert_eq!(44, timer(TimerId::Tim2));
        assert_eq!(45, timer(TimerId::Tim3));
        assert_eq!(46, timer(TimerId::Tim4));
    }

    #[test]
    fn timers_have_distinct_lines() {
        assert_ne!(timer(TimerId::Tim1), timer(TimerId::Tim2));
        assert_ne!(timer(TimerId::Tim2), timer(TimerId::Tim3));
        assert_ne!(SYSTICK, timer(TimerId::Tim1));
    }
}
