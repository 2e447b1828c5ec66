//! The main loop responsible for dispatching requests and notifications
//! from the client and forwarding the output of the active run.

use crossbeam_channel::{select, Receiver};
use log::info;

use clicker_types::notifications::{MouseDown, Stop};
use clicker_types::requests::Run;

use crate::communication::{Connection, Message, Notification, Request};
use crate::driver::DriverFactory;
use crate::server::config::Config;
use crate::server::dispatch::{NotificationDispatcher, RequestDispatcher};
use crate::server::global_state::GlobalState;
use crate::server::{handlers, Result};

pub fn main_loop(config: Config, connection: Connection, driver: DriverFactory) -> Result<()> {
    GlobalState::new(connection.sender, config, driver).run(connection.receiver)
}

/// Indicates where the message is coming from.
/// Client messages are handled, messages from the run thread are sent back
/// to the client.
#[derive(Debug)]
enum Event {
    Client(Message),
    FromRun(Message),
}

impl GlobalState {
    fn run(mut self, inbox: Receiver<Message>) -> Result<()> {
        self.send_init();

        while let Some(event) = self.next_event(&inbox) {
            if let Event::Client(Message::Notification(not)) = &event {
                if not.is_exit() {
                    info!("exit requested");
                    break;
                }
            }
            self.handle_event(event)?;
        }

        self.shutdown();
        Ok(())
    }

    fn next_event(&self, inbox: &Receiver<Message>) -> Option<Event> {
        select! {
            recv(inbox) -> msg =>
                msg.ok().map(Event::Client),

            recv(self.handlers_receiver) -> msg =>
                msg.ok().map(Event::FromRun),
        }
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Client(msg) => match msg {
                Message::Request(req) => self.on_request(req),
                Message::Notification(not) => self.on_notification(not)?,
                Message::Response(_) => {}
            },
            Event::FromRun(msg) => match msg {
                Message::Request(_) => {}
                Message::Notification(not) => self.send_notification(not),
                Message::Response(resp) => self.complete_run(resp),
            },
        }
        Ok(())
    }

    fn on_request(&mut self, req: Request) {
        RequestDispatcher {
            req: Some(req),
            global_state: self,
        }
        .on_spawn::<Run>(handlers::handle_run)
        .finish();
    }

    fn on_notification(&mut self, not: Notification) -> Result<()> {
        NotificationDispatcher {
            not: Some(not),
            global_state: self,
        }
        .on::<Stop>(handlers::handle_stop)?
        .on::<MouseDown>(handlers::handle_mouse_down)?
        .finish();
        Ok(())
    }
}
