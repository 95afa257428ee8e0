use core::fmt;

/// Error returned from [`Timers::configure`](crate::Timers::configure) when the requested
/// time base cannot be programmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerError {
    /// The target frequency is zero.
    ZeroFrequency,
    /// The computed prescaler does not fit the 16 bit prescaler register.
    PrescalerOverflow,
    /// The period multiplied by the target frequency exceeds the core clock.
    FrequencyTooHigh,
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroFrequency => write!(f, "target frequency is zero"),
            Self::PrescalerOverflow => write!(f, "prescaler exceeds 16 bits"),
            Self::FrequencyTooHigh => write!(f, "target frequency too high for the period"),
        }
    }
}
