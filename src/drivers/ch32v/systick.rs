use ch32_metapac::{
    systick::{vals, Systick},
    SYSTICK,
};

use crate::TickSource;

use super::irq;

/// The QingKe SysTick counter.
pub struct SysTick {
    regs: Systick,
}

impl SysTick {
    /// Get the SysTick peripheral.
    ///
    /// # Safety
    ///
    /// The SysTick must not be driven from anywhere else than the tick source driver.
    pub unsafe fn steal() -> Self {
        Self::from_regs(SYSTICK)
    }

    pub fn from_regs(regs: Systick) -> Self {
        Self { regs }
    }
}

impl TickSource for SysTick {
    fn irq(&self) -> u8 {
        irq::SYSTICK
    }

    fn clear_pending_overflow(&self) {
        self.regs.sr().write(|w| w.set_cntif(false));
    }

    fn reset_counter(&self) {
        self.regs.cnt().write_value(0);
    }

    fn set_compare(&self, compare: u64) {
        // Truncated where the counter is narrower than 64 bits.
        self.regs.cmp().write_value(compare as _);
    }

    fn start(&self) {
        self.regs.ctlr().write(|w| {
            w.set_ste(true);
            w.set_stie(true);
            w.set_stclk(vals::Stclk::HCLK);
            w.set_stre(true);
        });
    }
}

#[cfg(test)]
pub mod tests {
    use crate::{
        adapters::interrupt::fakes::FakeInterruptController, drivers::ch32v::fakes::ram, Hclk,
        Precision, SysTickDrv, TickCounter,
    };

    use super::*;

    fn systick() -> Systick {
        unsafe { Systick::from_ptr(ram()) }
    }

    #[test]
    fn init_programs_registers() {
        let regs = systick();
        regs.sr().write(|w| w.set_cntif(true));
        regs.cnt().write_value(0x1234);
        let drv = SysTickDrv::new(SysTick::from_regs(regs));

        drv.init(Precision::Millis, &Hclk(96_000_000), &FakeInterruptController::default());

        let ctlr = regs.ctlr().read();
        assert!(ctlr.ste());
        assert!(ctlr.stie());
        assert!(ctlr.stre());
        assert!(vals::Stclk::HCLK == ctlr.stclk());
        assert!(!regs.sr().read().cntif());
        assert_eq!(0, regs.cnt().read());
        assert_eq!(95_999, regs.cmp().read());
    }

    #[test]
    fn overflow_clears_flag() {
        let regs = systick();
        let drv = SysTickDrv::new(SysTick::from_regs(regs));
        let ticks = TickCounter::new();

        regs.sr().write(|w| w.set_cntif(true));
        drv.on_overflow(&ticks);

        assert!(!regs.sr().read().cntif());
        assert_eq!(1, ticks.get());
    }
}
