use crate::notifications::Notification;
use crate::InitData;

/// Sent by the backend when it is ready to accept run requests.
#[derive(Debug)]
pub enum Init {}

impl Notification for Init {
    type Params = InitData;
    const METHOD: &'static str = "init";
}
