//! Logging [Middleware] which writes one JSON record per dispatched
//! `Action`, holding the action and the state before and after it was
//! reduced. Uses `serde` for serialization and the [log] crate for
//! output, so the records can be collected by any structured log
//! pipeline.

use super::{LogLevel, Middleware, MiddlewareStore};
use crate::Dispatcher;
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct OnDispatchLog<'a> {
    action: &'a Value,
    prev_state: &'a Value,
    next_state: &'a Value,
}

/// Logging middleware writing JSON records.
///
/// See [json_logger](super::json_logger) for more details.
#[derive(Debug, Default)]
pub struct JsonLoggerMiddleware {
    log_level: LogLevel,
}

impl JsonLoggerMiddleware {
    pub fn new() -> Self {
        Self {
            log_level: LogLevel::default(),
        }
    }

    /// Set the level at which the records from this middleware will
    /// be logged.
    pub fn log_level(mut self, log_level: LogLevel) -> Self {
        self.log_level = log_level;
        self
    }
}

impl<State, Action> Middleware<State, Action> for JsonLoggerMiddleware
where
    State: Serialize,
    Action: Serialize,
{
    fn on_dispatch(
        &self,
        store: &MiddlewareStore<State, Action>,
        action: Action,
        next: &Dispatcher<Action>,
    ) {
        // the action is moved into `next`, so capture it up front
        let action_json = serde_json::to_value(&action);
        let prev_state_json = serde_json::to_value(&*store.state());

        next.dispatch(action);

        let next_state_json = serde_json::to_value(&*store.state());

        let record = match (action_json, prev_state_json, next_state_json) {
            (Ok(action), Ok(prev_state), Ok(next_state)) => {
                serde_json::to_string(&OnDispatchLog {
                    action: &action,
                    prev_state: &prev_state,
                    next_state: &next_state,
                })
            }
            (Err(error), _, _) | (_, Err(error), _) | (_, _, Err(error)) => Err(error),
        };

        match record {
            Ok(record) => self.log_level.log(record),
            Err(error) => log::warn!("unable to serialize dispatch log record: {}", error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::JsonLoggerMiddleware;
    use crate::{
        middleware::{test_logger, LogLevel},
        Store,
    };
    use serde::Serialize;
    use std::{collections::BTreeMap, rc::Rc};

    #[derive(Debug, Default, Serialize)]
    struct TestState {
        counter: i32,
    }

    #[derive(Debug, Serialize)]
    enum TestAction {
        Increment,
        Noop,
    }

    fn test_reducer(state: &Rc<TestState>, action: &TestAction) -> Rc<TestState> {
        match action {
            TestAction::Increment => Rc::new(TestState {
                counter: state.counter + 1,
            }),
            TestAction::Noop => state.clone(),
        }
    }

    #[test]
    fn logs_json_record() {
        test_logger::init();
        let store = Store::with_enhancer(
            test_reducer,
            TestState::default(),
            crate::apply_middleware![JsonLoggerMiddleware::new().log_level(LogLevel::Info)],
        );

        store.dispatch(TestAction::Increment);
        assert_eq!(
            vec![(
                log::Level::Info,
                r#"{"action":"Increment","prev_state":{"counter":0},"next_state":{"counter":1}}"#
                    .to_string()
            )],
            test_logger::records()
        );
    }

    /// JSON map keys must be strings, so this fails to serialize as
    /// soon as it holds an entry.
    #[derive(Debug, Default, Serialize)]
    struct BadKeyState(BTreeMap<Vec<u8>, i32>);

    fn bad_key_reducer(state: &Rc<BadKeyState>, _action: &TestAction) -> Rc<BadKeyState> {
        let mut map = state.0.clone();
        map.insert(vec![1], 1);
        Rc::new(BadKeyState(map))
    }

    #[test]
    fn serialization_failure_does_not_interrupt_dispatch() {
        test_logger::init();
        let store = Store::with_enhancer(
            bad_key_reducer,
            BadKeyState::default(),
            crate::apply_middleware![JsonLoggerMiddleware::new()],
        );

        store.dispatch(TestAction::Noop);
        assert_eq!(1, store.state().0.len());

        let records = test_logger::records();
        assert_eq!(1, records.len());
        assert_eq!(log::Level::Warn, records[0].0);
        assert!(records[0]
            .1
            .starts_with("unable to serialize dispatch log record"));
    }
}
