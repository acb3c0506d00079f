//! A counter behind two middleware, showing the order in which the
//! middleware, the reducer and the listeners run. Set `RUST_LOG=debug`
//! to also see the output of `SimpleLoggerMiddleware`.

use redux_cell::{
    apply_middleware,
    middleware::{simple_logger::SimpleLoggerMiddleware, MiddlewareStore},
    Dispatcher, Store,
};
use std::rc::Rc;

#[derive(Debug, Clone, Copy)]
enum Action {
    Increment,
    Decrement,
}

fn counter(state: &Rc<i32>, action: &Action) -> Rc<i32> {
    match action {
        Action::Increment => Rc::new(**state + 1),
        Action::Decrement => Rc::new(**state - 1),
    }
}

fn middleware1(store: &MiddlewareStore<i32, Action>, action: Action, next: &Dispatcher<Action>) {
    println!("1. {:?} state {}", action, store.state());
    next.dispatch(action);
    println!("4. {:?} state {}", action, store.state());
}

fn middleware2(store: &MiddlewareStore<i32, Action>, action: Action, next: &Dispatcher<Action>) {
    println!("2. {:?} state {}", action, store.state());
    next.dispatch(action);
    println!("3. {:?} state {}", action, store.state());
}

fn main() {
    env_logger::init();

    let store = Store::with_enhancer(
        counter,
        0,
        apply_middleware![middleware1, middleware2, SimpleLoggerMiddleware::new()],
    );

    let store_copy = store.clone();
    store.subscribe(move || println!("subscriber: {}", store_copy.state()));

    store.dispatch(Action::Increment);
    store.dispatch(Action::Decrement);
}
