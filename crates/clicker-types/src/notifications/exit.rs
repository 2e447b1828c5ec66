use crate::notifications::Notification;

/// Asks the backend to stop whatever it runs and quit.
#[derive(Debug)]
pub enum Exit {}

impl Notification for Exit {
    type Params = ();
    const METHOD: &'static str = "exit";
}
