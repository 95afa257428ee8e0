use core::cell::Cell;

use critical_section::Mutex;

/// A sample from [`LapMeter::lap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lap {
    /// Ticks elapsed since the previous lap.
    pub elapsed: u64,
    /// Whether this lap is due for reporting.
    pub report: bool,
}

struct State {
    last: u64,
    laps: u32,
}

/// Measures the ticks elapsed between successive calls, e.g. from a periodic timer callback
/// to check its realized frequency against the tick source.
///
/// Printing every sample would disturb the measurement, so only every
/// `report_every + 1`th lap is flagged for reporting.
pub struct LapMeter {
    report_every: u32,
    state: Mutex<Cell<State>>,
}

impl LapMeter {
    pub const fn new(report_every: u32) -> Self {
        Self {
            report_every,
            state: Mutex::new(Cell::new(State { last: 0, laps: 0 })),
        }
    }

    /// Take a lap at tick count `now`.
    pub fn lap(&self, now: u64) -> Lap {
        critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let State { last, laps } = cell.replace(State { last: now, laps: 0 });
            let report = laps > self.report_every;
            cell.set(State {
                last: now,
                laps: if report { 1 } else { laps + 1 },
            });
            Lap {
                elapsed: now.wrapping_sub(last),
                report,
            }
        })
    }
}
