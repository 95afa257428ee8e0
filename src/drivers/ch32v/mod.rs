//! Drivers for the CH32V20x, CH32V30x and CH32X035, one of which is selected by feature.

#[cfg(any(
    all(feature = "ch32v20x", feature = "ch32v30x"),
    all(feature = "ch32v20x", feature = "ch32x035"),
    all(feature = "ch32v30x", feature = "ch32x035"),
))]
compile_error!("select exactly one of the `ch32v20x`, `ch32v30x` and `ch32x035` features");

pub mod irq;
#[macro_use]
mod macros;
#[cfg(target_arch = "riscv32")]
mod pfic;
mod systick;
mod tim;

pub use ch32_metapac as pac;

#[cfg(target_arch = "riscv32")]
#[doc(hidden)]
pub use qingke_rt as __rt;

#[cfg(target_arch = "riscv32")]
pub use self::pfic::Pfic;
pub use self::{
    systick::SysTick,
    tim::{Ch32Timers, Tim},
};

use crate::{dispatch, SysTickDrv, TimeContext, TimerId};

/// Handle the SysTick overflow interrupt.
#[inline]
pub fn on_systick(ctx: &TimeContext) {
    SysTickDrv::new(unsafe { SysTick::steal() }).on_overflow(ctx.ticks());
}

/// Handle the update interrupt of `timer`.
#[inline]
pub fn on_timer(ctx: &TimeContext, timer: TimerId) {
    dispatch(&unsafe { Tim::steal(timer) }, ctx.routes(), timer);
}

#[cfg(test)]
pub mod fakes {
    use std::boxed::Box;

    /// Allocate a zeroed, 8 byte aligned register block in RAM.
    pub fn ram() -> *mut () {
        Box::leak(Box::new([0u64; 64])).as_mut_ptr().cast()
    }
}
