use crate::notifications::Notification;

/// Ends the current run, the same as pressing the stop hotkey.
#[derive(Debug)]
pub enum Stop {}

impl Notification for Stop {
    type Params = ();
    const METHOD: &'static str = "stop";
}
