//! Recording and replaying scripts on a worker thread.
//!
//! A run starts with a countdown, then either records the clicks forwarded
//! by the main loop ([`gather`]) or replays a script ([`exec`]). It ends on
//! its own (replay finished, error) or when cancelled.

use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError, TryRecvError};

use clicker_types::MouseEvent;

pub use exec::{replay, Cycles};
pub use gather::{record, Recorded, Recorder};
pub(crate) use run_handle::{RunHandle, RunJob};

mod exec;
mod gather;
mod run_actor;
mod run_handle;

/// Sent from the main loop to a running worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunEvent {
    Cancel,
    Click(MouseEvent),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Ran to the end.
    Finished,
    /// Cancelled by the client.
    Stopped,
}

/// Checks for a pending cancel without blocking. Clicks are dropped.
pub(crate) fn cancel_pending(events: &Receiver<RunEvent>) -> bool {
    loop {
        match events.try_recv() {
            Ok(RunEvent::Click(_)) => continue,
            Ok(RunEvent::Cancel) | Err(TryRecvError::Disconnected) => return true,
            Err(TryRecvError::Empty) => return false,
        }
    }
}

/// Sleeps for `duration` unless cancelled first; returns whether it was.
/// Clicks received meanwhile are dropped.
pub(crate) fn wait_cancelled(events: &Receiver<RunEvent>, duration: Duration) -> bool {
    let deadline = Instant::now() + duration;
    loop {
        match events.recv_deadline(deadline) {
            Ok(RunEvent::Click(_)) => continue,
            Ok(RunEvent::Cancel) | Err(RecvTimeoutError::Disconnected) => return true,
            Err(RecvTimeoutError::Timeout) => return false,
        }
    }
}

/// Announces the start of a run once per second for `secs` seconds.
pub fn countdown(
    title: &str,
    secs: u64,
    events: &Receiver<RunEvent>,
    alert: &mut dyn FnMut(String),
) -> Outcome {
    for remaining in (1..=secs).rev() {
        alert(format!(
            "{} starts in {} s, countdown: {}",
            title, secs, remaining
        ));
        if wait_cancelled(events, Duration::from_secs(1)) {
            return Outcome::Stopped;
        }
    }
    alert(format!("{} running", title));
    Outcome::Finished
}
