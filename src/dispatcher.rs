use std::{
    fmt::Debug,
    rc::{Rc, Weak},
};

/// A handle to a dispatch function which accepts `Action`s.
///
/// The [Store](crate::Store)'s installed dispatch is a `Dispatcher`,
/// and so is every `next` link handed to a
/// [Middleware](crate::middleware::Middleware). Cloning is cheap, all
/// clones call the same function.
pub struct Dispatcher<Action>(Rc<dyn Fn(Action)>);

impl<Action> Dispatcher<Action> {
    pub fn new<F: Fn(Action) + 'static>(dispatch: F) -> Self {
        Dispatcher(Rc::new(dispatch))
    }

    /// Send an `Action` through this dispatch function.
    pub fn dispatch<A: Into<Action>>(&self, action: A) {
        (self.0)(action.into())
    }

    /// Produce a weak reference to this dispatch function, which does
    /// not keep it alive.
    pub(crate) fn downgrade(&self) -> WeakDispatcher<Action> {
        WeakDispatcher(Rc::downgrade(&self.0))
    }
}

impl<Action> Clone for Dispatcher<Action> {
    fn clone(&self) -> Self {
        Dispatcher(self.0.clone())
    }
}

impl<Action> Debug for Dispatcher<Action> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Dispatcher(function @ {:p})", Rc::as_ptr(&self.0) as *const ())
    }
}

/// A weak reference to a [Dispatcher]'s function.
pub(crate) struct WeakDispatcher<Action>(Weak<dyn Fn(Action)>);

impl<Action> WeakDispatcher<Action> {
    /// Attempt to upgrade to a [Dispatcher], returns `None` if every
    /// strong reference has been dropped.
    pub fn upgrade(&self) -> Option<Dispatcher<Action>> {
        self.0.upgrade().map(Dispatcher)
    }
}
