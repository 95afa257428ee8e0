use crate::{Callback, TimerError};

/// The counter period used when none is given.
/// 254 keeps the period compatible with an 8 bit duty cycle.
pub const DEFAULT_PERIOD: u16 = 254;

/// One of the general purpose timer units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerId {
    Tim1,
    Tim2,
    Tim3,
    #[cfg(not(feature = "ch32x035"))]
    Tim4,
}

impl TimerId {
    /// The number of routing slots, one per identity.
    pub const COUNT: usize = 4;

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Tim1 => 0,
            Self::Tim2 => 1,
            Self::Tim3 => 2,
            #[cfg(not(feature = "ch32x035"))]
            Self::Tim4 => 3,
        }
    }
}

/// A request to run a timer at (roughly) a given frequency.
#[derive(Clone, Copy)]
pub struct TimerConfig {
    /// The timer to configure.
    pub timer: TimerId,
    /// The target update frequency in Hz.
    pub frequency: u32,
    /// Whether the update interrupt should be armed.
    pub interrupt: bool,
    /// The function to call on every update interrupt.
    pub callback: Option<Callback>,
    /// The counter period, zero selects [`DEFAULT_PERIOD`].
    pub period: u16,
}

impl TimerConfig {
    /// Create a configuration running `timer` at `frequency` Hz without interrupt.
    pub fn new(timer: TimerId, frequency: u32) -> Self {
        Self {
            timer,
            frequency,
            interrupt: false,
            callback: None,
            period: 0,
        }
    }

    /// Arm the update interrupt and route it to `callback`.
    pub fn with_callback(mut self, callback: Callback) -> Self {
        self.interrupt = true;
        self.callback = Some(callback);
        self
    }

    pub fn with_interrupt(mut self, interrupt: bool) -> Self {
        self.interrupt = interrupt;
        self
    }

    pub fn with_period(mut self, period: u16) -> Self {
        self.period = period;
        self
    }

    /// The effective counter period.
    #[inline]
    pub fn period(&self) -> u16 {
        if self.period == 0 {
            DEFAULT_PERIOD
        } else {
            self.period
        }
    }
}

/// The time base programmed into a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeBase {
    prescaler: u16,
    period: u16,
}

impl TimeBase {
    /// Compute the time base for `frequency` Hz at core clock `clock` and counter period `period`.
    /// Only integer prescalers exist, so the frequency is matched by truncating division.
    /// A zero `period` selects [`DEFAULT_PERIOD`].
    pub fn compute(clock: u32, period: u16, frequency: u32) -> Result<Self, TimerError> {
        let period = if period == 0 { DEFAULT_PERIOD } else { period };
        if frequency == 0 {
            return Err(TimerError::ZeroFrequency);
        }
        let prescaler = clock / period as u32 / frequency;
        if prescaler == 0 {
            return Err(TimerError::FrequencyTooHigh);
        }
        let prescaler = u16::try_from(prescaler).map_err(|_| TimerError::PrescalerOverflow)?;
        Ok(Self { prescaler, period })
    }

    /// The prescaler, never zero.
    #[inline]
    pub fn prescaler(&self) -> u16 {
        self.prescaler
    }

    #[inline]
    pub fn period(&self) -> u16 {
        self.period
    }

    /// The frequency actually realized, `clock / prescaler / (period + 1)`.
    pub fn realized_frequency(&self, clock: u32) -> u32 {
        clock / self.prescaler as u32 / (self.period as u32 + 1)
    }
}
