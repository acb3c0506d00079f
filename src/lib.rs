//! A minimal unidirectional state container, similar to redux.
//!
//! A [Store] owns one `State` value, which only changes when an
//! `Action` is [dispatched](Store::dispatch()) and reduced by the
//! store's [Reducer]. Listeners [subscribed](Store::subscribe()) to
//! the store are notified after every change. Large states can be
//! split into independently reduced slices with [combine_reducers()],
//! and [middleware] can be installed in front of the reducer with the
//! [apply_middleware!] [Enhancer].

mod dispatcher;
mod enhancer;
mod listener;
pub mod middleware;
mod reducer;
mod store;

pub use dispatcher::Dispatcher;
pub use enhancer::*;
pub use listener::*;
pub use reducer::*;
pub use store::Store;
