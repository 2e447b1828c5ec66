use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::communication::stdio::{stdio_transport, IoThreads};
use crate::communication::Message;

/// Connection is just a pair of channels of messages.
pub struct Connection {
    pub sender: Sender<Message>,
    pub receiver: Receiver<Message>,
}

impl Connection {
    /// Creates a connection over standard in/standard out.
    pub fn stdio() -> (Connection, IoThreads) {
        let (sender, receiver, io_threads) = stdio_transport();
        (Connection { sender, receiver }, io_threads)
    }

    /// Creates a pair of connected connections, for testing.
    pub fn memory() -> (Connection, Connection) {
        let (s1, r1) = unbounded();
        let (s2, r2) = unbounded();
        (
            Connection {
                sender: s1,
                receiver: r2,
            },
            Connection {
                sender: s2,
                receiver: r1,
            },
        )
    }
}
