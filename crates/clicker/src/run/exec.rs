use std::time::Duration;

use crossbeam_channel::Receiver;

use crate::driver::MouseDriver;
use crate::run::{cancel_pending, wait_cancelled, Outcome, RunEvent};
use crate::script::{Script, ScriptError};

/// How many times a script is replayed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cycles {
    Unlimited,
    Limited(u64),
}

impl From<i64> for Cycles {
    /// `0` means no limit; a negative count replays nothing.
    fn from(cycle: i64) -> Self {
        match cycle {
            0 => Cycles::Unlimited,
            n => Cycles::Limited(u64::try_from(n).unwrap_or(0)),
        }
    }
}

impl Cycles {
    /// Whether the 1-based `cycle` may run.
    pub fn allows(&self, cycle: u64) -> bool {
        match self {
            Cycles::Unlimited => true,
            Cycles::Limited(limit) => cycle <= *limit,
        }
    }
}

/// Clicks every position of the script in order, waiting after each click,
/// for as many cycles as allowed or until cancelled.
pub fn replay<D: MouseDriver + ?Sized>(
    script: &Script,
    min_interval: u64,
    cycles: Cycles,
    driver: &mut D,
    events: &Receiver<RunEvent>,
    alert: &mut dyn FnMut(String),
) -> Result<Outcome, ScriptError> {
    if script.is_empty() {
        return Err(ScriptError::Empty);
    }

    let mut cycle = 0;
    loop {
        cycle += 1;
        if !cycles.allows(cycle) {
            return Ok(Outcome::Finished);
        }

        for (index, &(x, y)) in script.positions.iter().enumerate() {
            if cancel_pending(events) {
                return Ok(Outcome::Stopped);
            }
            driver.move_smooth(x, y);
            driver.click_left();

            let wait = script.wait_after(index, min_interval);
            alert(format!(
                "Running: cycle {}, [X:{}, Y:{}], next click in {} ms",
                cycle, x, y, wait
            ));
            if wait_cancelled(events, Duration::from_millis(wait)) {
                return Ok(Outcome::Stopped);
            }
        }
    }
}
