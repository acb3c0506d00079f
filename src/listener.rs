use std::{fmt::Debug, rc::Rc};

/// A wrapper for a zero-argument callback which is notified after
/// every committed change to the [Store](crate::Store) `State`.
///
/// Listeners are notified in the order they were subscribed. There is
/// no way to remove a listener once it has been subscribed.
#[derive(Clone)]
pub struct Listener(Rc<dyn Fn()>);

impl Listener {
    pub fn new<C: Fn() + 'static>(closure: C) -> Self {
        Listener(Rc::new(closure))
    }

    pub fn notify(&self) {
        (self.0)()
    }
}

impl<C> From<C> for Listener
where
    C: Fn() + 'static,
{
    fn from(closure: C) -> Self {
        Listener(Rc::new(closure))
    }
}

impl Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener(callback @ {:p})", Rc::as_ptr(&self.0) as *const ())
    }
}
