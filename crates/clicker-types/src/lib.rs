//! Messages exchanged between the clicker front-end and its backend process.
//!
//! The central type is [`RunParam`], the run request sent by the front-end.
//! It can be built from JSON text or from an already decoded JSON object,
//! see [`RunParam::create_from`].

pub use error::*;
pub use init_data::*;
pub use mode::*;
pub use mouse_event::*;
pub use run_param::*;

pub mod notifications;
pub mod requests;

mod error;
mod init_data;
mod mode;
mod mouse_event;
mod run_param;

pub mod tests {
    use serde::Deserialize;

    pub fn test_deserialization<T>(json: &str, expected: &T)
    where
        T: for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug,
    {
        let value = serde_json::from_str::<T>(json).unwrap();
        assert_eq!(&value, expected);
    }
}
