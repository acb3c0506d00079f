use crate::{Reducer, Store};

/// Creates a [Store] from a reducer and an initial state.
///
/// This is the store constructor as a value, which is what an
/// [Enhancer] receives and replaces. [CreateStore] is the bare
/// constructor, and any
/// `Fn(Box<dyn Reducer<State, Action>>, State) -> Store<State, Action>`
/// is also a factory.
pub trait StoreFactory<State, Action> {
    fn create(
        &self,
        reducer: Box<dyn Reducer<State, Action>>,
        initial_state: State,
    ) -> Store<State, Action>;
}

impl<F, State, Action> StoreFactory<State, Action> for F
where
    F: Fn(Box<dyn Reducer<State, Action>>, State) -> Store<State, Action>,
{
    fn create(
        &self,
        reducer: Box<dyn Reducer<State, Action>>,
        initial_state: State,
    ) -> Store<State, Action> {
        (self)(reducer, initial_state)
    }
}

/// The bare [StoreFactory]: the produced [Store] dispatches straight
/// to its reducer and then notifies its listeners.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreateStore;

impl<State, Action> StoreFactory<State, Action> for CreateStore
where
    State: 'static,
    Action: 'static,
{
    fn create(
        &self,
        reducer: Box<dyn Reducer<State, Action>>,
        initial_state: State,
    ) -> Store<State, Action> {
        Store::bare(reducer, initial_state)
    }
}

/// Installs cross-cutting behaviour into a [Store] at construction
/// time, by replacing the store's [StoreFactory].
///
/// The enhancer is consulted exactly once per
/// [Store::with_enhancer()], before any state exists. It receives the
/// bare factory and returns the factory which will actually build the
/// store; the returned factory is expected to call the one it was
/// given exactly once (this is not enforced).
///
/// [ApplyMiddleware](crate::middleware::ApplyMiddleware) is the
/// enhancer this crate provides. Any
/// `FnOnce(Box<dyn StoreFactory<State, Action>>) -> Box<dyn StoreFactory<State, Action>>`
/// is also an enhancer.
pub trait Enhancer<State, Action> {
    fn enhance(
        self,
        create_store: Box<dyn StoreFactory<State, Action>>,
    ) -> Box<dyn StoreFactory<State, Action>>;
}

impl<F, State, Action> Enhancer<State, Action> for F
where
    F: FnOnce(Box<dyn StoreFactory<State, Action>>) -> Box<dyn StoreFactory<State, Action>>,
{
    fn enhance(
        self,
        create_store: Box<dyn StoreFactory<State, Action>>,
    ) -> Box<dyn StoreFactory<State, Action>> {
        (self)(create_store)
    }
}

#[cfg(test)]
mod tests {
    use crate::{CreateStore, Reducer, Store, StoreFactory};
    use std::{cell::Cell, rc::Rc};

    enum TestAction {
        Increment,
    }

    fn counter(state: &Rc<i32>, action: &TestAction) -> Rc<i32> {
        match action {
            TestAction::Increment => Rc::new(**state + 1),
        }
    }

    #[test]
    fn create_store_builds_bare_store() {
        let store = StoreFactory::<i32, TestAction>::create(&CreateStore, Box::new(counter), 5);
        store.dispatch(TestAction::Increment);
        assert_eq!(6, *store.state());
    }

    #[test]
    fn enhancer_receives_base_factory_once() {
        let enhance_calls = Rc::new(Cell::new(0));
        let create_calls = Rc::new(Cell::new(0));

        let enhance_calls_copy = enhance_calls.clone();
        let create_calls_copy = create_calls.clone();
        let enhancer = move |create_store: Box<dyn StoreFactory<i32, TestAction>>|
              -> Box<dyn StoreFactory<i32, TestAction>> {
            enhance_calls_copy.set(enhance_calls_copy.get() + 1);
            Box::new(
                move |reducer: Box<dyn Reducer<i32, TestAction>>, initial_state: i32| {
                    create_calls_copy.set(create_calls_copy.get() + 1);
                    create_store.create(reducer, initial_state * 10)
                },
            )
        };

        let store = Store::with_enhancer(counter, 1, enhancer);
        assert_eq!(1, enhance_calls.get());
        assert_eq!(1, create_calls.get());
        assert_eq!(10, *store.state());

        store.dispatch(TestAction::Increment);
        assert_eq!(11, *store.state());
        assert_eq!(1, enhance_calls.get());
        assert_eq!(1, create_calls.get());
    }
}
