use std::{fmt::Debug, marker::PhantomData, rc::Rc};

/// Using the [reduce()](Reducer::reduce()) method, implementors of
/// this trait take an `Action` submitted to a store via
/// [Store::dispatch()](crate::Store::dispatch()) and produce a new
/// `State` from the previous one.
///
/// Reducers must be pure and total: for an `Action` they do not
/// recognise they must return a state equal to `prev_state`
/// (returning `prev_state.clone()` shares the same allocation). The
/// default state of a reducer is `State::default()`.
///
/// Any `Fn(&Rc<State>, &Action) -> Rc<State>` is a reducer:
///
/// ```
/// use redux_cell::Reducer;
/// use std::rc::Rc;
///
/// enum Action {
///     Increment,
///     Decrement,
///     Reset,
/// }
///
/// fn counter(state: &Rc<i32>, action: &Action) -> Rc<i32> {
///     match action {
///         Action::Increment => Rc::new(**state + 1),
///         Action::Decrement => Rc::new(**state - 1),
///         _ => state.clone(),
///     }
/// }
///
/// assert_eq!(1, *counter.reduce(&Rc::new(0), &Action::Increment));
/// ```
pub trait Reducer<State, Action> {
    /// Take an `Action` submitted to a store via
    /// [Store::dispatch()](crate::Store::dispatch()) and produce the
    /// next `State`. The `prev_state` is never modified.
    fn reduce(&self, prev_state: &Rc<State>, action: &Action) -> Rc<State>;
}

impl<F, State, Action> Reducer<State, Action> for F
where
    F: Fn(&Rc<State>, &Action) -> Rc<State>,
{
    fn reduce(&self, prev_state: &Rc<State>, action: &Action) -> Rc<State> {
        (self)(prev_state, action)
    }
}

/// One named slice of a [CombinedReducer]: reads its part of the
/// previous state, runs its own reducer on it, and writes the result
/// into the fresh state.
trait SliceReducer<State, Action> {
    fn name(&self) -> &'static str;
    fn reduce_slice(&self, prev_state: &State, next_state: &mut State, action: &Action);
}

struct Slice<Part, Get, Set, R> {
    name: &'static str,
    get: Get,
    set: Set,
    reducer: R,
    part: PhantomData<fn() -> Part>,
}

impl<State, Action, Part, Get, Set, R> SliceReducer<State, Action> for Slice<Part, Get, Set, R>
where
    Get: Fn(&State) -> &Rc<Part>,
    Set: Fn(&mut State, Rc<Part>),
    R: Reducer<Part, Action>,
{
    fn name(&self) -> &'static str {
        self.name
    }

    fn reduce_slice(&self, prev_state: &State, next_state: &mut State, action: &Action) {
        let part = self.reducer.reduce((self.get)(prev_state), action);
        (self.set)(next_state, part);
    }
}

/// A [Reducer] composed of multiple named slice reducers, see
/// [combine_reducers()].
///
/// On every call a fresh `State::default()` is built and each slice,
/// in registration order, is assigned the result of its reducer
/// applied to the matching slice of the previous state. Each slice
/// reducer only ever sees its own slice. Parts of `State` that belong
/// to no registered slice keep their default value.
pub struct CombinedReducer<State, Action> {
    slices: Vec<Box<dyn SliceReducer<State, Action>>>,
}

impl<State, Action> CombinedReducer<State, Action> {
    /// Create a new [CombinedReducer] without any slices.
    pub fn new() -> Self {
        CombinedReducer { slices: Vec::new() }
    }

    /// Register the slice `name` of the state, read with `get` and
    /// written with `set`, which is reduced by `reducer`.
    ///
    /// Registering a `name` again replaces the earlier registration,
    /// which keeps its position in the iteration order.
    pub fn slice<Part, Get, Set, R>(
        mut self,
        name: &'static str,
        get: Get,
        set: Set,
        reducer: R,
    ) -> Self
    where
        State: 'static,
        Action: 'static,
        Part: 'static,
        Get: Fn(&State) -> &Rc<Part> + 'static,
        Set: Fn(&mut State, Rc<Part>) + 'static,
        R: Reducer<Part, Action> + 'static,
    {
        let slice: Box<dyn SliceReducer<State, Action>> = Box::new(Slice {
            name,
            get,
            set,
            reducer,
            part: PhantomData,
        });

        match self.slices.iter().position(|existing| existing.name() == name) {
            Some(index) => self.slices[index] = slice,
            None => self.slices.push(slice),
        }
        self
    }

    /// The names of the registered slices, in registration order.
    pub fn slice_names(&self) -> Vec<&'static str> {
        self.slices.iter().map(|slice| slice.name()).collect()
    }
}

impl<State, Action> Default for CombinedReducer<State, Action> {
    fn default() -> Self {
        Self::new()
    }
}

impl<State, Action> Debug for CombinedReducer<State, Action> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombinedReducer")
            .field("slices", &self.slice_names())
            .finish()
    }
}

impl<State, Action> Reducer<State, Action> for CombinedReducer<State, Action>
where
    State: Default,
{
    fn reduce(&self, prev_state: &Rc<State>, action: &Action) -> Rc<State> {
        let mut next_state = State::default();

        for slice in &self.slices {
            slice.reduce_slice(prev_state, &mut next_state, action);
        }

        Rc::new(next_state)
    }
}

/// Start building a [CombinedReducer], which splits `State` into
/// named slices that are each reduced independently.
///
/// ```
/// use redux_cell::{combine_reducers, Reducer};
/// use std::rc::Rc;
///
/// #[derive(Default)]
/// struct State {
///     clicks: Rc<u32>,
///     label: Rc<String>,
/// }
///
/// enum Action {
///     Click,
///     Rename(String),
/// }
///
/// fn clicks(state: &Rc<u32>, action: &Action) -> Rc<u32> {
///     match action {
///         Action::Click => Rc::new(**state + 1),
///         _ => state.clone(),
///     }
/// }
///
/// fn label(state: &Rc<String>, action: &Action) -> Rc<String> {
///     match action {
///         Action::Rename(name) => Rc::new(name.clone()),
///         _ => state.clone(),
///     }
/// }
///
/// let reducer = combine_reducers::<State, Action>()
///     .slice("clicks", |s| &s.clicks, |s, v| s.clicks = v, clicks)
///     .slice("label", |s| &s.label, |s, v| s.label = v, label);
///
/// let state = reducer.reduce(&Rc::new(State::default()), &Action::Click);
/// assert_eq!(1, *state.clicks);
/// assert_eq!("", *state.label);
/// ```
pub fn combine_reducers<State, Action>() -> CombinedReducer<State, Action> {
    CombinedReducer::new()
}
