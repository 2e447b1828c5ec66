//! Routes raw JSON requests and notifications from the client to handlers.

use std::fmt;

use log::warn;
use serde::de::DeserializeOwned;

use clicker_types::notifications::Notification as NotificationTrait;
use clicker_types::requests::Request as RequestTrait;

use crate::communication::{ErrorCode, ExtractError, Notification, Request, RequestId, Response};
use crate::server::global_state::GlobalState;
use crate::server::{from_json, Result, RpcError};

pub(crate) struct RequestDispatcher<'a> {
    pub(crate) req: Option<Request>,
    pub(crate) global_state: &'a mut GlobalState,
}

/// A visitor for routing a raw JSON request to an appropriate handler function.
///
/// `run` is the only request. Its handler starts a worker thread, which
/// answers the request once it is done, so the dispatcher only responds
/// when the handler fails.
impl<'a> RequestDispatcher<'a> {
    pub(crate) fn on_spawn<R>(
        &mut self,
        f: fn(&mut GlobalState, RequestId, R::Params) -> Result<()>,
    ) -> &mut Self
    where
        R: RequestTrait,
        R::Params: DeserializeOwned + fmt::Debug,
    {
        let (req, params) = match self.parse::<R>() {
            Some(it) => it,
            None => return self,
        };
        if let Err(e) = f(self.global_state, req.id.clone(), params) {
            self.global_state.respond(error_to_response(req.id, e));
        }
        self
    }

    pub(crate) fn finish(&mut self) {
        if let Some(req) = self.req.take() {
            warn!("unknown request: {:?}", req);
            let response = Response::new_err(
                req.id,
                ErrorCode::MethodNotFound as i32,
                "unknown request".to_string(),
            );
            self.global_state.respond(response);
        }
    }

    fn parse<R>(&mut self) -> Option<(Request, R::Params)>
    where
        R: RequestTrait,
        R::Params: DeserializeOwned + fmt::Debug,
    {
        let req = match &self.req {
            Some(req) if req.method == R::METHOD => self.req.take()?,
            _ => return None,
        };

        match from_json(R::METHOD, &req.params) {
            Ok(params) => Some((req, params)),
            Err(err) => {
                let response =
                    Response::new_err(req.id, ErrorCode::InvalidParams as i32, err.to_string());
                self.global_state.respond(response);
                None
            }
        }
    }
}

fn error_to_response(id: RequestId, error: crate::server::Error) -> Response {
    match error.downcast::<RpcError>() {
        Ok(rpc_error) => Response::new_err(id, rpc_error.code, rpc_error.message),
        Err(e) => Response::new_err(id, ErrorCode::InternalError as i32, e.to_string()),
    }
}

/// Handles a raw JSON notification.
pub(crate) struct NotificationDispatcher<'a> {
    pub(crate) not: Option<Notification>,
    pub(crate) global_state: &'a mut GlobalState,
}

impl<'a> NotificationDispatcher<'a> {
    pub(crate) fn on<N>(
        &mut self,
        f: fn(&mut GlobalState, N::Params) -> Result<()>,
    ) -> Result<&mut Self>
    where
        N: NotificationTrait,
        N::Params: DeserializeOwned + Send,
    {
        let not = match self.not.take() {
            Some(it) => it,
            None => return Ok(self),
        };
        let params = match not.extract::<N::Params>(N::METHOD) {
            Ok(it) => it,
            Err(ExtractError::JsonError { method, error }) => {
                warn!("invalid notification {}: {}", method, error);
                return Ok(self);
            }
            Err(ExtractError::MethodMismatch(not)) => {
                self.not = Some(not);
                return Ok(self);
            }
        };
        f(self.global_state, params)?;
        Ok(self)
    }

    pub(crate) fn finish(&mut self) {
        if let Some(not) = &self.not {
            warn!("unhandled notification: {:?}", not);
        }
    }
}
