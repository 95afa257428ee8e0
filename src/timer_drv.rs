use crate::{
    CallbackTable, CoreClock, InterruptController, TimeBase, TimeContext, TimerBank, TimerConfig,
    TimerError, TimerId, TimerUnit,
};

/// The periodic timer driver, programming the timer units and arming their update interrupts.
pub struct Timers<B: TimerBank, I: InterruptController> {
    bank: B,
    pfic: I,
}

impl<B: TimerBank, I: InterruptController> Timers<B, I> {
    pub fn new(bank: B, pfic: I) -> Self {
        Self { bank, pfic }
    }

    /// Run a timer at roughly `config.frequency` Hz.
    ///
    /// The realized frequency is `clock / prescaler / (period + 1)` with the prescaler
    /// truncated to an integer. The timer runs and emits its trigger output even when no
    /// interrupt is requested. The update interrupt is only armed when both the interrupt
    /// and a callback are requested, in which case the callback is routed from the timer.
    pub fn configure<C: CoreClock>(
        &self,
        ctx: &TimeContext,
        clock: &C,
        config: TimerConfig,
    ) -> Result<TimeBase, TimerError> {
        let base = TimeBase::compute(clock.freq(), config.period(), config.frequency).map_err(
            |err| {
                log::warn!("{:?}: rejected {} Hz: {}", config.timer, config.frequency, err);
                err
            },
        )?;
        log::debug!(
            "{:?}: prescaler {} period {}, {} Hz",
            config.timer,
            base.prescaler(),
            base.period(),
            base.realized_frequency(clock.freq())
        );

        let unit = self.bank.unit(config.timer);
        unit.enable_clock();
        unit.stop();
        // The update generation below raises the update flag, which must not reach a
        // previously armed interrupt.
        unit.update_int_disable();
        unit.set_time_base(base.period(), base.prescaler());
        // Emit trigger output on update, e.g. to start ADC conversions when no channel is configured.
        unit.select_update_trigger();

        if let (true, Some(callback)) = (config.interrupt, config.callback) {
            unit.clear_pending_update();
            ctx.routes().register(config.timer, callback);
            unit.update_int_enable();
            self.pfic.enable(unit.irq());
        }

        unit.start();

        Ok(base)
    }

    /// Handle the update interrupt of `timer`.
    #[inline]
    pub fn on_update(&self, ctx: &TimeContext, timer: TimerId) {
        dispatch(self.bank.unit(timer), ctx.routes(), timer);
    }
}

/// Run the callback routed from `timer` and clear its update flag.
///
/// The flag is cleared last so that the interrupt does not fire again while the callback runs.
#[inline]
pub fn dispatch<U: TimerUnit>(unit: &U, routes: &CallbackTable, timer: TimerId) {
    routes.invoke(timer);
    unit.clear_pending_update();
}
