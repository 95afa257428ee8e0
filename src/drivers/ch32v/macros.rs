/// Define the SysTick, timer update and hard fault interrupt handlers, bound to the
/// [`TimeContext`](crate::TimeContext) static `$ctx`.
///
/// The handlers are registered through the `qingke-rt` vector table and return from the
/// interrupt with `mret`.
#[cfg(any(feature = "ch32v20x", feature = "ch32v30x"))]
#[macro_export]
macro_rules! interrupt_handlers {
    ($ctx:path) => {
        #[$crate::drivers::ch32v::__rt::interrupt(core)]
        fn SysTick() {
            $crate::drivers::ch32v::on_systick(&$ctx);
        }

        #[$crate::drivers::ch32v::__rt::interrupt]
        fn TIM1_UP() {
            $crate::drivers::ch32v::on_timer(&$ctx, $crate::TimerId::Tim1);
        }

        #[$crate::drivers::ch32v::__rt::interrupt]
        fn TIM2() {
            $crate::drivers::ch32v::on_timer(&$ctx, $crate::TimerId::Tim2);
        }

        #[$crate::drivers::ch32v::__rt::interrupt]
        fn TIM3() {
            $crate::drivers::ch32v::on_timer(&$ctx, $crate::TimerId::Tim3);
        }

        #[$crate::drivers::ch32v::__rt::interrupt]
        fn TIM4() {
            $crate::drivers::ch32v::on_timer(&$ctx, $crate::TimerId::Tim4);
        }

        #[$crate::drivers::ch32v::__rt::interrupt(core)]
        fn HardFault() {
            $crate::halt()
        }
    };
}

/// Define the SysTick, timer update and hard fault interrupt handlers, bound to the
/// [`TimeContext`](crate::TimeContext) static `$ctx`.
///
/// The handlers are registered through the `qingke-rt` vector table and return from the
/// interrupt with `mret`.
#[cfg(feature = "ch32x035")]
#[macro_export]
macro_rules! interrupt_handlers {
    ($ctx:path) => {
        #[$crate::drivers::ch32v::__rt::interrupt(core)]
        fn SysTick() {
            $crate::drivers::ch32v::on_systick(&$ctx);
        }

        #[$crate::drivers::ch32v::__rt::interrupt]
        fn TIM1_UP() {
            $crate::drivers::ch32v::on_timer(&$ctx, $crate::TimerId::Tim1);
        }

        #[$crate::drivers::ch32v::__rt::interrupt]
        fn TIM2_UP() {
            $crate::drivers::ch32v::on_timer(&$ctx, $crate::TimerId::Tim2);
        }

        #[$crate::drivers::ch32v::__rt::interrupt]
        fn TIM3() {
            $crate::drivers::ch32v::on_timer(&$ctx, $crate::TimerId::Tim3);
        }

        #[$crate::drivers::ch32v::__rt::interrupt(core)]
        fn HardFault() {
            $crate::halt()
        }
    };
}
