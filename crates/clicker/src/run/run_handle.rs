//! Starts a [`RunActor`] on its own thread and forwards the main loop's
//! events to it.

use std::io;
use std::path::PathBuf;

use crossbeam_channel::{unbounded, Sender};

use clicker_types::MouseEvent;

use crate::communication::{Message, RequestId};
use crate::driver::MouseDriver;
use crate::run::exec::Cycles;
use crate::run::run_actor::RunActor;
use crate::run::RunEvent;

/// What a run does once its countdown is over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum RunJob {
    Exec {
        script_path: PathBuf,
        min_interval: u64,
        cycles: Cycles,
    },
    Gather {
        script_path: PathBuf,
        min_interval: u64,
        overwrite: bool,
    },
}

pub(crate) struct RunHandle {
    events_sender: Sender<RunEvent>,
    _thread: jod_thread::JoinHandle,
}

impl RunHandle {
    pub fn spawn(
        sender_to_main: Box<dyn Fn(Message) + Send>,
        req_id: RequestId,
        job: RunJob,
        countdown_secs: u64,
        driver: Box<dyn MouseDriver + Send>,
    ) -> io::Result<RunHandle> {
        let (events_sender, events_receiver) = unbounded();
        let actor = RunActor::new(
            sender_to_main,
            req_id,
            countdown_secs,
            events_receiver,
            driver,
        );
        let thread = jod_thread::Builder::new()
            .name("run".to_owned())
            .spawn(move || actor.run(job))?;
        Ok(RunHandle {
            events_sender,
            _thread: thread,
        })
    }

    /// The actor may already be gone, in which case there is nothing to stop.
    pub fn cancel(&self) {
        let _ = self.events_sender.send(RunEvent::Cancel);
    }

    pub fn click(&self, event: MouseEvent) {
        let _ = self.events_sender.send(RunEvent::Click(event));
    }
}
