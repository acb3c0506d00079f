use crate::{CreateStore, Dispatcher, Enhancer, Listener, Reducer};
use std::{cell::RefCell, fmt::Debug, rc::Rc};

/// The state cell, [Reducer] and listeners shared by every handle to
/// a [Store], and by the [Dispatcher]s and middleware built around
/// it.
pub(crate) struct StoreCore<State, Action> {
    /// The [Reducer] for this store, which takes `Actions` and
    /// produces the next `State`.
    reducer: Box<dyn Reducer<State, Action>>,
    /// The current state of this store.
    state: RefCell<Rc<State>>,
    /// The listeners which are notified after every committed change
    /// to the state, in subscription order.
    listeners: RefCell<Vec<Listener>>,
}

impl<State, Action> StoreCore<State, Action> {
    pub fn state(&self) -> Rc<State> {
        self.state.borrow().clone()
    }

    /// Run the reducer, commit the new state, then notify the
    /// listeners. No middleware is involved at this level.
    fn reduce_and_notify(&self, action: Action) {
        let next_state = self.reducer.reduce(&self.state(), &action);
        *self.state.borrow_mut() = next_state;

        // Listeners may subscribe or dispatch while being notified, so
        // the list can't stay borrowed during the callbacks. Those
        // subscribed during this notification only see later changes.
        let listeners = self.listeners.borrow().clone();
        for listener in &listeners {
            listener.notify();
        }
    }
}

/// This struct is designed to operate as a central source of truth
/// and "immutable" state within your application.
///
/// The current state of this store ([Store::state()]) can only be
/// modified by dispatching an `Action` via [Store::dispatch()]. These
/// actions are taken by the [Reducer] which you provided to the store
/// at construction, and a new current state is produced. The previous
/// state is never mutated.
///
/// Listeners subscribed with [Store::subscribe()] are called, in
/// subscription order, after every dispatch which reached the reducer.
/// There is no way to unsubscribe.
///
/// A `Store` is a handle: clones share the same state, listeners and
/// dispatch function, and compare equal.
///
/// The store is single threaded and does not guard against a
/// listener dispatching while it is being notified; such nested
/// dispatches are processed immediately, before the outer dispatch
/// returns.
pub struct Store<State, Action> {
    core: Rc<StoreCore<State, Action>>,
    /// The installed dispatch function, either going straight to
    /// [StoreCore::reduce_and_notify()] or wrapped by an [Enhancer].
    dispatcher: Dispatcher<Action>,
}

impl<State, Action> Store<State, Action>
where
    State: 'static,
    Action: 'static,
{
    /// Create a new [Store], which uses the specified `reducer` to
    /// handle `Action`s, starting from `initial_state`.
    pub fn new<R: Reducer<State, Action> + 'static>(reducer: R, initial_state: State) -> Self {
        Self::bare(Box::new(reducer), initial_state)
    }

    /// Create a new [Store] starting from the reducer's default
    /// state, `State::default()`.
    pub fn from_reducer<R: Reducer<State, Action> + 'static>(reducer: R) -> Self
    where
        State: Default,
    {
        Self::new(reducer, State::default())
    }

    /// Create a new [Store] whose construction is delegated to the
    /// [StoreFactory](crate::StoreFactory) returned by `enhancer`.
    ///
    /// The `enhancer` is given the bare [CreateStore] factory, and the
    /// factory it returns is invoked once with `reducer` and
    /// `initial_state`.
    pub fn with_enhancer<R, E>(reducer: R, initial_state: State, enhancer: E) -> Self
    where
        R: Reducer<State, Action> + 'static,
        E: Enhancer<State, Action>,
    {
        let create_store = enhancer.enhance(Box::new(CreateStore));
        create_store.create(Box::new(reducer), initial_state)
    }

    /// A store whose dispatch goes straight to the reducer.
    pub(crate) fn bare(reducer: Box<dyn Reducer<State, Action>>, initial_state: State) -> Self {
        let core = Rc::new(StoreCore {
            reducer,
            state: RefCell::new(Rc::new(initial_state)),
            listeners: RefCell::new(Vec::new()),
        });

        let dispatch_core = core.clone();
        let dispatcher = Dispatcher::new(move |action| dispatch_core.reduce_and_notify(action));

        Self { core, dispatcher }
    }
}

impl<State, Action> Store<State, Action> {
    /// A fully formed store sharing `core`, which dispatches through
    /// `dispatcher`.
    pub(crate) fn from_parts(
        core: Rc<StoreCore<State, Action>>,
        dispatcher: Dispatcher<Action>,
    ) -> Self {
        Self { core, dispatcher }
    }

    pub(crate) fn core(&self) -> &Rc<StoreCore<State, Action>> {
        &self.core
    }

    /// Get the current `State` stored in this store.
    ///
    /// Modifications to this state need to be performed by
    /// dispatching an `Action` to the store using
    /// [dispatch()](Store::dispatch()).
    pub fn state(&self) -> Rc<State> {
        self.core.state()
    }

    /// Subscribe a [Listener] to changes in the store state. It is
    /// called with no arguments after every dispatch which reached the
    /// reducer; use [Store::state()] to read the new state.
    ///
    /// Subscribing the same callback twice means it is called twice.
    pub fn subscribe<L: Into<Listener>>(&self, listener: L) {
        self.core.listeners.borrow_mut().push(listener.into());
    }

    /// Dispatch an `Action` to be passed through the installed
    /// middleware (if any) to the [Reducer], after which the listeners
    /// are notified. Returns once all of that has completed.
    ///
    /// A panic in the reducer unwinds out of this method and the
    /// state is left as it was.
    pub fn dispatch<A: Into<Action>>(&self, action: A) {
        self.dispatcher.dispatch(action);
    }

    /// The installed dispatch function of this store, which can be
    /// handed out to code that should dispatch but not read state.
    pub fn dispatcher(&self) -> Dispatcher<Action> {
        self.dispatcher.clone()
    }
}

impl<State, Action> Clone for Store<State, Action> {
    fn clone(&self) -> Self {
        Self {
            core: self.core.clone(),
            dispatcher: self.dispatcher.clone(),
        }
    }
}

impl<State, Action> PartialEq for Store<State, Action> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
    }
}

impl<State, Action> Debug for Store<State, Action>
where
    State: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state())
            .field("listeners", &self.core.listeners.borrow().len())
            .finish()
    }
}
