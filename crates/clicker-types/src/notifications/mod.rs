use serde::de::DeserializeOwned;
use serde::Serialize;

pub use alert::*;
pub use exit::*;
pub use init::*;
pub use mouse_down::*;
pub use stop::*;

mod alert;
mod exit;
mod init;
mod mouse_down;
mod stop;

pub trait Notification {
    type Params: DeserializeOwned + Serialize;
    const METHOD: &'static str;
}
