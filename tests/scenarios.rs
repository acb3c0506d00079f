//! End to end scenarios driving a store the way an application would.

use redux_cell::{apply_middleware, combine_reducers, middleware::MiddlewareStore, Dispatcher, Store};
use std::{cell::RefCell, rc::Rc};

#[derive(Debug, Clone, Copy, PartialEq)]
enum CounterAction {
    Increment,
    Decrement,
    Unknown,
}

fn counter(state: &Rc<i32>, action: &CounterAction) -> Rc<i32> {
    match action {
        CounterAction::Increment => Rc::new(**state + 1),
        CounterAction::Decrement => Rc::new(**state - 1),
        CounterAction::Unknown => state.clone(),
    }
}

#[test]
fn counter_scenario() {
    let store = Store::new(counter, 0);

    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Increment);
    store.dispatch(CounterAction::Decrement);
    assert_eq!(1, *store.state());
}

#[test]
fn counter_default_state_is_deterministic() {
    let store = Store::from_reducer(counter);
    assert_eq!(0, *store.state());

    for _ in 0..3 {
        store.dispatch(CounterAction::Unknown);
        assert_eq!(0, *store.state());
    }
}

#[test]
fn counter_with_logging_middleware() {
    let log: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

    let log_copy = log.clone();
    let middleware1 = move |store: &MiddlewareStore<i32, CounterAction>,
                            action: CounterAction,
                            next: &Dispatcher<CounterAction>| {
        log_copy
            .borrow_mut()
            .push(format!("1. {:?} state {}", action, store.state()));
        next.dispatch(action);
        log_copy
            .borrow_mut()
            .push(format!("4. {:?} state {}", action, store.state()));
    };

    let log_copy = log.clone();
    let middleware2 = move |store: &MiddlewareStore<i32, CounterAction>,
                            action: CounterAction,
                            next: &Dispatcher<CounterAction>| {
        log_copy
            .borrow_mut()
            .push(format!("2. {:?} state {}", action, store.state()));
        next.dispatch(action);
        log_copy
            .borrow_mut()
            .push(format!("3. {:?} state {}", action, store.state()));
    };

    let store = Store::with_enhancer(counter, 0, apply_middleware![middleware1, middleware2]);

    let log_copy = log.clone();
    let store_copy = store.clone();
    store.subscribe(move || {
        log_copy
            .borrow_mut()
            .push(format!("subscriber: {}", store_copy.state()))
    });

    store.dispatch(CounterAction::Increment);
    assert_eq!(
        vec![
            "1. Increment state 0",
            "2. Increment state 0",
            "subscriber: 1",
            "3. Increment state 1",
            "4. Increment state 1",
        ],
        *log.borrow()
    );
}

#[derive(Debug, Clone, PartialEq)]
enum VisibilityFilter {
    ShowAll,
    ShowCompleted,
}

impl Default for VisibilityFilter {
    fn default() -> Self {
        VisibilityFilter::ShowAll
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Todo {
    text: String,
    completed: bool,
}

#[derive(Debug, Default, PartialEq)]
struct TodoState {
    visibility_filter: Rc<VisibilityFilter>,
    todos: Rc<Vec<Todo>>,
}

enum TodoAction {
    AddTodo { text: String },
    CompleteTodo { index: usize },
    SetVisibilityFilter { filter: VisibilityFilter },
}

fn visibility_filter(state: &Rc<VisibilityFilter>, action: &TodoAction) -> Rc<VisibilityFilter> {
    match action {
        TodoAction::SetVisibilityFilter { filter } => Rc::new(filter.clone()),
        _ => state.clone(),
    }
}

fn todos(state: &Rc<Vec<Todo>>, action: &TodoAction) -> Rc<Vec<Todo>> {
    match action {
        TodoAction::AddTodo { text } => {
            let mut todos = (**state).clone();
            todos.push(Todo {
                text: text.clone(),
                completed: false,
            });
            Rc::new(todos)
        }
        TodoAction::CompleteTodo { index } => Rc::new(
            state
                .iter()
                .enumerate()
                .map(|(i, todo)| {
                    if i == *index {
                        Todo {
                            completed: true,
                            ..todo.clone()
                        }
                    } else {
                        todo.clone()
                    }
                })
                .collect(),
        ),
        _ => state.clone(),
    }
}

fn todo_store() -> Store<TodoState, TodoAction> {
    Store::from_reducer(
        combine_reducers::<TodoState, TodoAction>()
            .slice(
                "visibility_filter",
                |s| &s.visibility_filter,
                |s, v| s.visibility_filter = v,
                visibility_filter,
            )
            .slice("todos", |s| &s.todos, |s, v| s.todos = v, todos),
    )
}

#[test]
fn todo_scenario() {
    let store = todo_store();
    let notifications = Rc::new(RefCell::new(0));
    let notifications_copy = notifications.clone();
    store.subscribe(move || *notifications_copy.borrow_mut() += 1);

    store.dispatch(TodoAction::AddTodo {
        text: "first todo".to_string(),
    });
    store.dispatch(TodoAction::AddTodo {
        text: "second todo".to_string(),
    });
    let before_complete = store.state();
    store.dispatch(TodoAction::CompleteTodo { index: 1 });

    let state = store.state();
    assert_eq!(2, state.todos.len());
    assert!(!state.todos[0].completed);
    assert!(state.todos[1].completed);
    assert_eq!(before_complete.todos[0], state.todos[0]);
    assert_eq!("second todo", state.todos[1].text);
    assert_eq!(VisibilityFilter::ShowAll, *state.visibility_filter);
    assert_eq!(3, *notifications.borrow());
}

#[test]
fn todo_filter_leaves_todos_alone() {
    let store = todo_store();
    store.dispatch(TodoAction::AddTodo {
        text: "first todo".to_string(),
    });
    let before = store.state();

    store.dispatch(TodoAction::SetVisibilityFilter {
        filter: VisibilityFilter::ShowCompleted,
    });

    let after = store.state();
    assert_eq!(VisibilityFilter::ShowCompleted, *after.visibility_filter);
    assert_eq!(before.todos, after.todos);
}
