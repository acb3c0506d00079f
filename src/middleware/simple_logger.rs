//! Logging [Middleware] which writes the state before and after
//! every dispatched `Action`, and the action itself, using the [log]
//! crate and `Debug` formatting.

use super::{LogLevel, MiddlewareStore};
use crate::{middleware::Middleware, Dispatcher};
use std::fmt::Debug;

#[derive(Debug, Default)]
pub struct SimpleLoggerMiddleware {
    log_level: LogLevel,
}

impl SimpleLoggerMiddleware {
    pub fn new() -> Self {
        SimpleLoggerMiddleware {
            log_level: LogLevel::default(),
        }
    }

    pub fn log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }
}

impl<State, Action> Middleware<State, Action> for SimpleLoggerMiddleware
where
    State: Debug,
    Action: Debug,
{
    fn on_dispatch(
        &self,
        store: &MiddlewareStore<State, Action>,
        action: Action,
        next: &Dispatcher<Action>,
    ) {
        self.log_level
            .log(format!("prev state: {:?}", store.state()));
        self.log_level.log(format!("action: {:?}", action));

        next.dispatch(action);

        self.log_level
            .log(format!("next state: {:?}", store.state()));
    }
}
