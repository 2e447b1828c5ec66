//! Line-delimited JSON messages between the front-end and the server.
//!
//! Every line holds one request, response or notification, in the shape of
//! JSON-RPC 2.0 messages.

pub use connection::Connection;
pub use error::ExtractError;
pub use msg::{ErrorCode, Message, Notification, Request, RequestId, Response, ResponseError};
pub use stdio::IoThreads;

mod connection;
mod error;
mod msg;
mod stdio;
