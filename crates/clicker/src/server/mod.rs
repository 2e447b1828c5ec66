//! The server side of the protocol: reads the front-end's requests and
//! notifications, starts and stops runs and forwards their progress back.

use std::fmt;

use serde::de::DeserializeOwned;

pub use main_loop::main_loop;
pub use server_run::run_server;

pub mod config;
mod dispatch;
pub(crate) mod global_state;
mod handlers;
mod main_loop;
mod server_run;
pub(crate) mod settings;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T, E = Error> = std::result::Result<T, E>;

pub fn from_json<T: DeserializeOwned>(what: &'static str, json: &serde_json::Value) -> Result<T> {
    let res = serde_json::from_value(json.clone())
        .map_err(|e| format!("Failed to deserialize {}: {}; {}", what, e, json))?;
    Ok(res)
}

/// An error answered to the client with a specific error code.
#[derive(Debug)]
pub struct RpcError {
    code: i32,
    message: String,
}

impl RpcError {
    pub fn new(code: i32, message: impl Into<String>) -> RpcError {
        RpcError {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Request failed with {}. ({})", self.code, self.message)
    }
}

impl std::error::Error for RpcError {}
