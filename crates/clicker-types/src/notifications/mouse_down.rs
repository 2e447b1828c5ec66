use crate::notifications::Notification;
use crate::MouseEvent;

/// A mouse button was pressed. Only used while recording.
#[derive(Debug)]
pub enum MouseDown {}

impl Notification for MouseDown {
    type Params = MouseEvent;
    const METHOD: &'static str = "mouseDown";
}
