//! Runs a single recording or replay and reports back to the main loop.
//!
//! Progress goes out as `alertMsg` notifications, failures as `errorMsg`.
//! Whatever happens, the actor ends by answering the run request with
//! `true`.

use crossbeam_channel::Receiver;
use log::{error, info};
use serde::Serialize;

use clicker_types::notifications::{AlertMsg, ErrorMsg, Notification as _};

use crate::communication::{Message, Notification, RequestId, Response};
use crate::driver::MouseDriver;
use crate::run::exec::replay;
use crate::run::gather::{record, Recorder};
use crate::run::run_handle::RunJob;
use crate::run::{countdown, Outcome, RunEvent};
use crate::script::{Script, ScriptError, ScriptWriter};

pub(crate) struct RunActor {
    // sender for notifications and responses to main loop
    sender: Box<dyn Fn(Message) + Send>,
    req_id: RequestId,
    countdown_secs: u64,
    events: Receiver<RunEvent>,
    driver: Box<dyn MouseDriver + Send>,
}

impl RunActor {
    pub fn new(
        sender: Box<dyn Fn(Message) + Send>,
        req_id: RequestId,
        countdown_secs: u64,
        events: Receiver<RunEvent>,
        driver: Box<dyn MouseDriver + Send>,
    ) -> RunActor {
        RunActor {
            sender,
            req_id,
            countdown_secs,
            events,
            driver,
        }
    }

    pub fn run(mut self, job: RunJob) {
        let result = self.execute(job);
        self.report(result);
        let response = Response::new_ok(self.req_id.clone(), true);
        (self.sender)(response.into());
    }

    fn execute(&mut self, job: RunJob) -> Result<Outcome, ScriptError> {
        let sender = &self.sender;
        let mut alert = |msg: String| send_notification(sender, AlertMsg::METHOD, msg);

        match job {
            RunJob::Exec {
                script_path,
                min_interval,
                cycles,
            } => {
                let script = Script::load(&script_path)?;
                info!(
                    "replaying {} ({} clicks, {:?})",
                    script_path.display(),
                    script.positions.len(),
                    cycles
                );
                if countdown("Replay", self.countdown_secs, &self.events, &mut alert)
                    == Outcome::Stopped
                {
                    return Ok(Outcome::Stopped);
                }
                replay(
                    &script,
                    min_interval,
                    cycles,
                    self.driver.as_mut(),
                    &self.events,
                    &mut alert,
                )
            }
            RunJob::Gather {
                script_path,
                min_interval,
                overwrite,
            } => {
                let writer = ScriptWriter::create(&script_path, overwrite)?;
                info!("recording into {}", script_path.display());
                if countdown("Recording", self.countdown_secs, &self.events, &mut alert)
                    == Outcome::Stopped
                {
                    return Ok(Outcome::Stopped);
                }
                record(Recorder::new(writer, min_interval), &self.events, &mut alert)
            }
        }
    }

    fn report(&self, result: Result<Outcome, ScriptError>) {
        match result {
            Ok(Outcome::Finished) => self.alert("Run finished".to_string()),
            Ok(Outcome::Stopped) => self.alert("Run stopped".to_string()),
            Err(ScriptError::AlreadyExists(path)) => self.alert(format!(
                "Recording cancelled: {} already exists",
                path.display()
            )),
            Err(e) => {
                error!("run {} failed: {}", self.req_id, e);
                send_notification(&self.sender, ErrorMsg::METHOD, e.to_string());
            }
        }
    }

    fn alert(&self, msg: String) {
        send_notification(&self.sender, AlertMsg::METHOD, msg);
    }
}

fn send_notification(sender: &(dyn Fn(Message) + Send), method: &str, params: impl Serialize) {
    sender(Notification::new(method.to_owned(), params).into());
}
