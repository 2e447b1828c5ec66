//! Backend of the mouse clicker.
//!
//! The front-end talks to the `server` binary over stdin/stdout with
//! line-delimited JSON messages. A `run` request either records the user's
//! left clicks into a script or replays a script through a [`driver::MouseDriver`].

pub mod communication;
pub mod driver;
pub mod run;
pub mod script;
pub mod server;
