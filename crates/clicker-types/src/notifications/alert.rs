use crate::notifications::Notification;

/// A status line the front-end shows to the user.
#[derive(Debug)]
pub enum AlertMsg {}

impl Notification for AlertMsg {
    type Params = String;
    const METHOD: &'static str = "alertMsg";
}

/// An error the front-end shows in a dialog.
#[derive(Debug)]
pub enum ErrorMsg {}

impl Notification for ErrorMsg {
    type Params = String;
    const METHOD: &'static str = "errorMsg";
}
