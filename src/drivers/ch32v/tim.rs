use ch32_metapac::{
    rcc::Rcc,
    timer::{vals, Adtm, Gptm},
    RCC,
};

use crate::{TimerBank, TimerId, TimerUnit};

use super::irq;

#[cfg(not(feature = "ch32x035"))]
const UNITS: usize = 4;
#[cfg(feature = "ch32x035")]
const UNITS: usize = 3;

/// A timer unit, TIM1 being the advanced timer and the others general purpose timers.
///
/// All units are driven through the general purpose register block, which the advanced
/// timer registers extend.
pub struct Tim {
    timer: TimerId,
    regs: Gptm,
    rcc: Rcc,
}

impl Tim {
    /// Get the registers of `timer`.
    ///
    /// # Safety
    ///
    /// The timer must not be driven from anywhere else than the timer driver and its interrupt.
    pub unsafe fn steal(timer: TimerId) -> Self {
        let ptr = match timer {
            TimerId::Tim1 => ch32_metapac::TIM1.as_ptr(),
            TimerId::Tim2 => ch32_metapac::TIM2.as_ptr(),
            TimerId::Tim3 => ch32_metapac::TIM3.as_ptr(),
            #[cfg(not(feature = "ch32x035"))]
            TimerId::Tim4 => ch32_metapac::TIM4.as_ptr(),
        };
        Self::from_regs(timer, Gptm::from_ptr(ptr), RCC)
    }

    pub fn from_regs(timer: TimerId, regs: Gptm, rcc: Rcc) -> Self {
        Self { timer, regs, rcc }
    }
}

impl TimerUnit for Tim {
    fn irq(&self) -> u8 {
        irq::timer(self.timer)
    }

    fn enable_clock(&self) {
        match self.timer {
            TimerId::Tim1 => self.rcc.apb2pcenr().modify(|w| w.set_tim1en(true)),
            TimerId::Tim2 => self.rcc.apb1pcenr().modify(|w| w.set_tim2en(true)),
            TimerId::Tim3 => self.rcc.apb1pcenr().modify(|w| w.set_tim3en(true)),
            #[cfg(not(feature = "ch32x035"))]
            TimerId::Tim4 => self.rcc.apb1pcenr().modify(|w| w.set_tim4en(true)),
        }
    }

    fn set_time_base(&self, period: u16, prescaler: u16) {
        // From the reset value: count up, no clock division.
        self.regs.ctlr1().write(|w| w.set_cen(false));
        self.regs.atrlr().write_value(period as _);
        self.regs.psc().write_value(prescaler as _);
        if self.timer == TimerId::Tim1 {
            let adtm = unsafe { Adtm::from_ptr(self.regs.as_ptr()) };
            adtm.rptcr().write_value(Default::default());
        }
        // The prescaler is buffered, generate an update to load it now.
        self.regs.swevgr().write(|w| w.set_ug(true));
    }

    fn select_update_trigger(&self) {
        self.regs.ctlr2().modify(|w| w.set_mms(vals::Mms::UPDATE));
    }

    fn clear_pending_update(&self) {
        self.regs.intfr().modify(|w| w.set_uif(false));
    }

    fn update_int_enable(&self) {
        self.regs.dmaintenr().modify(|w| w.set_uie(true));
    }

    fn update_int_disable(&self) {
        self.regs.dmaintenr().modify(|w| w.set_uie(false));
    }

    fn start(&self) {
        self.regs.ctlr1().modify(|w| w.set_cen(true));
    }

    fn stop(&self) {
        self.regs.ctlr1().modify(|w| w.set_cen(false));
    }
}

/// All timer units of the chip.
pub struct Ch32Timers {
    units: [Tim; UNITS],
}

impl Ch32Timers {
    /// Get all timer units.
    ///
    /// # Safety
    ///
    /// See [`Tim::steal`].
    pub unsafe fn steal() -> Self {
        Self {
            units: [
                Tim::steal(TimerId::Tim1),
                Tim::steal(TimerId::Tim2),
                Tim::steal(TimerId::Tim3),
                #[cfg(not(feature = "ch32x035"))]
                Tim::steal(TimerId::Tim4),
            ],
        }
    }

    pub fn from_units(units: [Tim; UNITS]) -> Self {
        Self { units }
    }
}

impl TimerBank for Ch32Timers {
    type Unit = Tim;

    fn unit(&self, timer: TimerId) -> &Tim {
        &self.units[timer.index()]
    }
}
