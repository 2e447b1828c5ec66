//! The context in which the server functions.

use std::time::Instant;

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{debug, error, info, warn};

use clicker_types::notifications::{ErrorMsg, Init, Notification as _};
use clicker_types::{InitData, ModeEnum};

use crate::communication::{Message, Notification, RequestId, Response};
use crate::driver::DriverFactory;
use crate::run::{RunHandle, RunJob};
use crate::script::list_scripts;
use crate::server::config::Config;
use crate::server::settings::RunSettings;

/// The run in progress. There is at most one at a time.
pub(crate) struct ActiveRun {
    pub(crate) id: RequestId,
    pub(crate) handle: RunHandle,
    started: Instant,
}

/// Stores the settings and the active run.
/// Works as a bridge between handlers and main loop.
pub(crate) struct GlobalState {
    sender: Sender<Message>,
    pub(crate) config: Config,
    pub(crate) settings: RunSettings,
    driver: DriverFactory,

    pub(crate) active_run: Option<ActiveRun>,
    pub(crate) handlers_sender: Sender<Message>,
    pub(crate) handlers_receiver: Receiver<Message>,
}

impl GlobalState {
    pub(crate) fn new(sender: Sender<Message>, config: Config, driver: DriverFactory) -> Self {
        let (handlers_sender, handlers_receiver) = unbounded();
        GlobalState {
            sender,
            settings: RunSettings::new(&config),
            config,
            driver,
            active_run: None,
            handlers_sender,
            handlers_receiver,
        }
    }

    /// Tells the client the current settings and the available scripts.
    pub(crate) fn send_init(&mut self) {
        match list_scripts(&self.config.scripts_path()) {
            Ok(config_file_list) => {
                let init = InitData {
                    config_name: self.settings.config_name.clone(),
                    config_file_list,
                    mode_enum_list: ModeEnum::offered(),
                    min_interval: self.settings.min_interval,
                };
                self.send_notification(Notification::new(Init::METHOD.to_owned(), init));
            }
            Err(e) => {
                error!("listing scripts failed: {}", e);
                self.send_notification(Notification::new(ErrorMsg::METHOD.to_owned(), e.to_string()));
            }
        }
    }

    pub(crate) fn send_notification(&mut self, not: Notification) {
        self.send(not.into());
    }

    pub(crate) fn respond(&mut self, response: Response) {
        self.send(response.into());
    }

    pub(crate) fn start_run(&mut self, id: RequestId, job: RunJob) -> std::io::Result<()> {
        let sender_to_main = self.handlers_sender.clone();
        let handle = RunHandle::spawn(
            Box::new(move |msg: Message| {
                let _ = sender_to_main.send(msg);
            }),
            id.clone(),
            job,
            self.config.countdown_secs,
            (self.driver)(),
        )?;
        self.active_run = Some(ActiveRun {
            id,
            handle,
            started: Instant::now(),
        });
        Ok(())
    }

    /// Forwards the final response of a run and forgets it.
    pub(crate) fn complete_run(&mut self, response: Response) {
        match self.active_run.take() {
            Some(run) if run.id == response.id => {
                info!("run {} ended after {:0.2?}", run.id, run.started.elapsed());
            }
            other => {
                warn!("response {} does not belong to the active run", response.id);
                self.active_run = other;
            }
        }
        self.respond(response);
    }

    /// Stops the active run and forwards what it still had to say.
    pub(crate) fn shutdown(&mut self) {
        if let Some(run) = self.active_run.take() {
            debug!("stopping run {} before exit", run.id);
            run.handle.cancel();
            // joins the run thread
            drop(run);
        }
        let pending: Vec<Message> = self.handlers_receiver.try_iter().collect();
        for msg in pending {
            self.send(msg);
        }
    }

    fn send(&mut self, message: Message) {
        if let Err(e) = self.sender.send(message) {
            warn!("client is gone, dropping {:?}", e.into_inner());
        }
    }
}
