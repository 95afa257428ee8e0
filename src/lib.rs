//! SysTick time base and periodic timer interrupts for the WCH CH32V family.
//!
//! The integrator owns one [`TimeContext`] in a `static` and hands it to the
//! configuration calls and to the interrupt entry points:
//!
//! ```ignore
//! use ch32v_time::{drivers::ch32v::*, Hclk, Precision, SysTickDrv, TimeContext, TimerConfig, TimerId, Timers};
//!
//! static CONTEXT: TimeContext = TimeContext::new();
//! ch32v_time::interrupt_handlers!(CONTEXT);
//!
//! fn on_tim3() {
//!     let _now = CONTEXT.now();
//! }
//!
//! #[qingke_rt::entry]
//! fn main() -> ! {
//!     let clock = Hclk(96_000_000);
//!     let systick = SysTickDrv::new(unsafe { SysTick::steal() });
//!     systick.init(Precision::Micros, &clock, unsafe { &Pfic::steal() });
//!
//!     let timers = Timers::new(unsafe { Ch32Timers::steal() }, unsafe { Pfic::steal() });
//!     let config = TimerConfig::new(TimerId::Tim3, 1000).with_callback(&on_tim3);
//!     timers.configure(&CONTEXT, &clock, config).ok();
//!
//!     loop {}
//! }
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod adapters;
mod context;
pub mod drivers;
mod error;
mod fault;
mod lap;
mod routing;
mod systick_drv;
mod tick_counter;
mod timer_config;
mod timer_drv;

pub use self::{
    adapters::clock::{CoreClock, Hclk},
    adapters::interrupt::InterruptController,
    adapters::tick::TickSource,
    adapters::timer::{TimerBank, TimerUnit},
    context::TimeContext,
    error::TimerError,
    fault::halt,
    lap::{Lap, LapMeter},
    routing::{Callback, CallbackTable},
    systick_drv::{Precision, SysTickDrv},
    tick_counter::TickCounter,
    timer_config::{TimeBase, TimerConfig, TimerId, DEFAULT_PERIOD},
    timer_drv::{dispatch, Timers},
};
