//! A todo list split into two slices with `combine_reducers`, printing
//! the whole state after every change. Set `RUST_LOG=debug` to also
//! see the output of `SimpleLoggerMiddleware`.

use redux_cell::{
    apply_middleware, combine_reducers, middleware::simple_logger::SimpleLoggerMiddleware, Store,
};
use std::rc::Rc;

#[derive(Debug, Clone)]
enum VisibilityFilter {
    ShowAll,
    ShowCompleted,
}

impl Default for VisibilityFilter {
    fn default() -> Self {
        VisibilityFilter::ShowAll
    }
}

#[derive(Debug, Clone)]
struct Todo {
    text: String,
    completed: bool,
}

#[derive(Debug, Default)]
struct State {
    visibility_filter: Rc<VisibilityFilter>,
    todos: Rc<Vec<Todo>>,
}

#[derive(Debug)]
enum Action {
    AddTodo { text: String },
    CompleteTodo { index: usize },
    SetVisibilityFilter { filter: VisibilityFilter },
}

fn visibility_filter(state: &Rc<VisibilityFilter>, action: &Action) -> Rc<VisibilityFilter> {
    match action {
        Action::SetVisibilityFilter { filter } => Rc::new(filter.clone()),
        _ => state.clone(),
    }
}

fn todos(state: &Rc<Vec<Todo>>, action: &Action) -> Rc<Vec<Todo>> {
    match action {
        Action::AddTodo { text } => {
            let mut todos = (**state).clone();
            todos.push(Todo {
                text: text.clone(),
                completed: false,
            });
            Rc::new(todos)
        }
        Action::CompleteTodo { index } => {
            let mut todos = (**state).clone();
            if let Some(todo) = todos.get_mut(*index) {
                todo.completed = true;
            }
            Rc::new(todos)
        }
        _ => state.clone(),
    }
}

fn main() {
    env_logger::init();

    let reducer = combine_reducers::<State, Action>()
        .slice(
            "visibility_filter",
            |s| &s.visibility_filter,
            |s, v| s.visibility_filter = v,
            visibility_filter,
        )
        .slice("todos", |s| &s.todos, |s, v| s.todos = v, todos);

    let store = Store::with_enhancer(
        reducer,
        State::default(),
        apply_middleware![SimpleLoggerMiddleware::new()],
    );

    let store_copy = store.clone();
    store.subscribe(move || println!("{:#?}", store_copy.state()));

    store.dispatch(Action::AddTodo {
        text: "first todo".to_string(),
    });
    store.dispatch(Action::AddTodo {
        text: "second todo".to_string(),
    });
    store.dispatch(Action::CompleteTodo { index: 1 });
    store.dispatch(Action::SetVisibilityFilter {
        filter: VisibilityFilter::ShowCompleted,
    });
}
