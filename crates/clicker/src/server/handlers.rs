use log::{debug, info};

use clicker_types::{MouseEvent, RunParam};

use crate::communication::{ErrorCode, RequestId};
use crate::run::{Cycles, RunJob};
use crate::server::config::is_valid_script_name;
use crate::server::global_state::GlobalState;
use crate::server::{Result, RpcError};

pub(crate) fn handle_run(state: &mut GlobalState, id: RequestId, param: RunParam) -> Result<()> {
    if let Some(run) = &state.active_run {
        return Err(RpcError::new(
            ErrorCode::RequestFailed as i32,
            format!("run {} is still in progress", run.id),
        )
        .into());
    }
    if let Some(name) = param.config_name.as_deref().filter(|name| !name.is_empty()) {
        if !is_valid_script_name(name) {
            return Err(RpcError::new(
                ErrorCode::InvalidParams as i32,
                format!("invalid script name {:?}", name),
            )
            .into());
        }
    }

    let mode = state.settings.apply(param);
    let script_path = state.config.script_path(&state.settings.config_name);
    let min_interval = state.settings.min_interval_ms();
    let job = if mode.is_exec() {
        RunJob::Exec {
            script_path,
            min_interval,
            cycles: Cycles::from(state.settings.cycle),
        }
    } else {
        RunJob::Gather {
            script_path,
            min_interval,
            overwrite: state.config.overwrite_scripts,
        }
    };
    info!("starting run {}: {:?}", id, job);
    state.start_run(id, job)?;
    Ok(())
}

pub(crate) fn handle_stop(state: &mut GlobalState, _: ()) -> Result<()> {
    match &state.active_run {
        Some(run) => run.handle.cancel(),
        None => debug!("stop without an active run"),
    }
    Ok(())
}

pub(crate) fn handle_mouse_down(state: &mut GlobalState, event: MouseEvent) -> Result<()> {
    if let Some(run) = &state.active_run {
        run.handle.click(event);
    }
    Ok(())
}
