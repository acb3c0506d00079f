//! [Middleware] used to intercept `Action`s on their way from
//! [Store::dispatch()] to the [Reducer](crate::Reducer), installed
//! with the [ApplyMiddleware] [Enhancer]. This module also contains
//! some simple logging middleware which can be used as utilities in
//! an application.
//!
//! For middleware declared as `[mw1, mw2, …, mwN]`, a single
//! dispatch runs `mw1` up to its call to `next`, then `mw2` up to its
//! call to `next`, and so on until `mwN`, then the reducer and the
//! store listeners, then the rest of `mwN`, …, then the rest of
//! `mw1`.

#[cfg(feature = "json_logger")]
pub mod json_logger;
#[cfg(feature = "log")]
mod log_level;
#[cfg(feature = "simple_logger")]
pub mod simple_logger;

#[cfg(feature = "log")]
pub use log_level::LogLevel;

use crate::{
    dispatcher::WeakDispatcher, store::StoreCore, Dispatcher, Enhancer, Reducer, Store,
    StoreFactory,
};
use std::{cell::RefCell, fmt::Debug, rc::Rc};

/// `Middleware` used to intercept `Action`s dispatched to a [Store].
///
/// Any `Fn(&MiddlewareStore<State, Action>, Action, &Dispatcher<Action>)`
/// is also middleware.
pub trait Middleware<State, Action> {
    /// This method is invoked by the [Store] during a
    /// [Store::dispatch()], before the `Action` is sent to the
    /// [Reducer](crate::Reducer). Calling `next.dispatch(action)`
    /// executes subsequent middleware, runs the reducer and notifies
    /// the store listeners; when it returns, `store.state()` holds the
    /// new state.
    ///
    /// Not calling `next` blocks the action: no further middleware,
    /// reducer or listener runs for it. The action may also be
    /// replaced before it is passed on, and new actions may be
    /// dispatched through `store`, in which case they travel the whole
    /// middleware chain from the start.
    fn on_dispatch(
        &self,
        store: &MiddlewareStore<State, Action>,
        action: Action,
        next: &Dispatcher<Action>,
    );
}

impl<F, State, Action> Middleware<State, Action> for F
where
    F: Fn(&MiddlewareStore<State, Action>, Action, &Dispatcher<Action>),
{
    fn on_dispatch(
        &self,
        store: &MiddlewareStore<State, Action>,
        action: Action,
        next: &Dispatcher<Action>,
    ) {
        (self)(store, action, next)
    }
}

/// The view of a [Store] given to [Middleware]: its current state,
/// and its fully wrapped dispatch.
pub struct MiddlewareStore<State, Action> {
    core: Rc<StoreCore<State, Action>>,
    /// The dispatch finally installed on the store, filled in once the
    /// middleware chain has been built. Weak, because the chain itself
    /// holds this [MiddlewareStore].
    installed: Rc<RefCell<Option<WeakDispatcher<Action>>>>,
}

impl<State, Action> MiddlewareStore<State, Action> {
    /// Get the current `State` stored in the store.
    pub fn state(&self) -> Rc<State> {
        self.core.state()
    }

    /// Dispatch an `Action` to the store, through the entire
    /// middleware chain, as [Store::dispatch()] does.
    ///
    /// Does nothing once every handle to the store has been dropped.
    pub fn dispatch<A: Into<Action>>(&self, action: A) {
        let dispatcher = self
            .installed
            .borrow()
            .as_ref()
            .and_then(WeakDispatcher::upgrade);

        if let Some(dispatcher) = dispatcher {
            dispatcher.dispatch(action);
        }
    }
}

impl<State, Action> Clone for MiddlewareStore<State, Action> {
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
            installed: self.installed.clone(),
        }
    }
}

impl<State, Action> Debug for MiddlewareStore<State, Action>
where
    State: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiddlewareStore")
            .field("state", &self.state())
            .finish()
    }
}

/// A [Middleware] bound to the store it was materialised against,
/// waiting for the `next` dispatch it wraps.
struct Link<State, Action> {
    middleware: Rc<dyn Middleware<State, Action>>,
    store: MiddlewareStore<State, Action>,
}

impl<State, Action> Link<State, Action>
where
    State: 'static,
    Action: 'static,
{
    fn wrap(self, next: Dispatcher<Action>) -> Dispatcher<Action> {
        let Link { middleware, store } = self;
        Dispatcher::new(move |action| middleware.on_dispatch(&store, action, &next))
    }
}

/// An [Enhancer] which installs a chain of [Middleware] in front of
/// the store's reducer. Usually built with the
/// [apply_middleware!](crate::apply_middleware) macro.
///
/// ```
/// use redux_cell::{apply_middleware, middleware::MiddlewareStore, Dispatcher, Store};
/// use std::rc::Rc;
///
/// #[derive(Debug)]
/// enum Action {
///     Increment,
///     Block,
/// }
///
/// fn counter(state: &Rc<i32>, action: &Action) -> Rc<i32> {
///     match action {
///         Action::Increment => Rc::new(**state + 1),
///         _ => state.clone(),
///     }
/// }
///
/// let blocker = |_: &MiddlewareStore<i32, Action>, action: Action, next: &Dispatcher<Action>| {
///     if !matches!(action, Action::Block) {
///         next.dispatch(action);
///     }
/// };
///
/// let store = Store::with_enhancer(counter, 0, apply_middleware![blocker]);
/// store.dispatch(Action::Increment);
/// store.dispatch(Action::Block);
/// assert_eq!(1, *store.state());
/// ```
pub struct ApplyMiddleware<State, Action> {
    middleware: Vec<Rc<dyn Middleware<State, Action>>>,
}

impl<State, Action> ApplyMiddleware<State, Action> {
    /// Create a new [ApplyMiddleware] without any middleware.
    pub fn new() -> Self {
        Self {
            middleware: Vec::new(),
        }
    }

    /// Append `middleware` to the chain. Middleware added first sees
    /// the action first.
    pub fn with<M: Middleware<State, Action> + 'static>(mut self, middleware: M) -> Self {
        self.middleware.push(Rc::new(middleware));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.middleware.is_empty()
    }
}

impl<State, Action> Default for ApplyMiddleware<State, Action> {
    fn default() -> Self {
        Self::new()
    }
}

impl<State, Action> Enhancer<State, Action> for ApplyMiddleware<State, Action>
where
    State: 'static,
    Action: 'static,
{
    fn enhance(
        self,
        create_store: Box<dyn StoreFactory<State, Action>>,
    ) -> Box<dyn StoreFactory<State, Action>> {
        Box::new(MiddlewareStoreFactory {
            create_store,
            middleware: self.middleware,
        })
    }
}

/// The [StoreFactory] returned by [ApplyMiddleware::enhance()].
struct MiddlewareStoreFactory<State, Action> {
    create_store: Box<dyn StoreFactory<State, Action>>,
    middleware: Vec<Rc<dyn Middleware<State, Action>>>,
}

impl<State, Action> StoreFactory<State, Action> for MiddlewareStoreFactory<State, Action>
where
    State: 'static,
    Action: 'static,
{
    fn create(
        &self,
        reducer: Box<dyn Reducer<State, Action>>,
        initial_state: State,
    ) -> Store<State, Action> {
        let store = self.create_store.create(reducer, initial_state);

        let installed = Rc::new(RefCell::new(None));
        let middleware_store = MiddlewareStore {
            core: store.core().clone(),
            installed: installed.clone(),
        };

        let chain: Vec<Link<State, Action>> = self
            .middleware
            .iter()
            .map(|middleware| Link {
                middleware: middleware.clone(),
                store: middleware_store.clone(),
            })
            .collect();

        // The last middleware wraps the store's own dispatch, the first
        // one wraps everything else and is what gets installed.
        let dispatcher = chain
            .into_iter()
            .rev()
            .fold(store.dispatcher(), |next, link| link.wrap(next));

        *installed.borrow_mut() = Some(dispatcher.downgrade());

        Store::from_parts(store.core().clone(), dispatcher)
    }
}

/// Build an [ApplyMiddleware] [Enhancer] from a list of
/// [Middleware], in the order they should see each action.
///
/// ```
/// use redux_cell::{apply_middleware, Store};
/// # use redux_cell::{middleware::MiddlewareStore, Dispatcher};
/// # use std::rc::Rc;
/// # fn counter(state: &Rc<i32>, _: &()) -> Rc<i32> { Rc::new(**state + 1) }
/// # let first = |_: &MiddlewareStore<i32, ()>, a: (), next: &Dispatcher<()>| next.dispatch(a);
/// # let second = first;
///
/// let store = Store::with_enhancer(counter, 0, apply_middleware![first, second]);
/// store.dispatch(());
/// assert_eq!(1, *store.state());
/// ```
#[macro_export]
macro_rules! apply_middleware {
    ($($middleware:expr),* $(,)?) => {
        $crate::middleware::ApplyMiddleware::new()$(.with($middleware))*
    };
}
