use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout};

use serde_json::from_str;

use clicker::communication::Message;

/// Talks to the server process one JSON line at a time.
pub struct Client<'a> {
    buf_reader: BufReader<&'a mut ChildStdout>,
    child_stdin: Option<ChildStdin>,
}

impl<'a> Client<'a> {
    pub fn new(child: &'a mut Child) -> Self {
        let child_stdin = child.stdin.take();
        Self {
            buf_reader: BufReader::new(child.stdout.as_mut().unwrap()),
            child_stdin,
        }
    }

    pub fn send(&mut self, msg: &str) {
        let stdin = self.child_stdin.as_mut().expect("stdin already closed");
        writeln!(stdin, "{}", msg).expect("Failed to send a message");
        stdin.flush().unwrap();
    }

    pub fn recv(&mut self) -> String {
        let mut line = String::new();
        self.buf_reader
            .read_line(&mut line)
            .expect("Failed to read a message");
        line.trim_end().to_string()
    }

    /// Skips notifications until a response arrives.
    pub fn recv_resp(&mut self) -> String {
        loop {
            let msg = self.recv();
            match from_str(&msg) {
                Ok(Message::Response(_)) => return msg,
                Ok(_) => println!("Client got a notification: {}", msg),
                Err(e) => panic!("Client got an invalid message {:?}: {}", msg, e),
            }
        }
    }

    pub fn close(&mut self) {
        self.child_stdin.take();
    }
}
