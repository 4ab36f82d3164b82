use crate::error::{InvalidSymbolError, MalformedAutomatonError, Result, RunError};
use crate::DFA;

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt::{self, Debug};

use im::OrdSet;

/// An opaque state handle. Handles carry no meaning beyond identity.
pub type State = usize;

/// A persistent, ordered set of states.
pub type StateSet = OrdSet<State>;

/// The finite set of input symbols an automaton consumes.
pub type Alphabet<T> = BTreeSet<T>;

/// Bound satisfied by every type usable as an input symbol.
pub trait Symbol: Clone + Ord + Debug {}

impl<T> Symbol for T where T: Clone + Ord + Debug {}

/// A transition label. Epsilon is its own variant, so it can never collide with an alphabet
/// symbol.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Transition<T> {
    /// A transition on some input symbol.
    Symbol(T),
    /// An epsilon transition allows the automaton to change its state spontaneously without
    /// consuming an input symbol.
    Epsilon,
}

impl<T> Transition<T> {
    #[inline]
    pub fn symbol(&self) -> Option<&T> {
        match self {
            Transition::Symbol(symbol) => Some(symbol),
            Transition::Epsilon => None,
        }
    }
}

impl<T: Debug> fmt::Display for Transition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Symbol(symbol) => write!(f, "{:?}", symbol),
            Transition::Epsilon => f.write_str("ε"),
        }
    }
}

/// A single labelled edge of an automaton, as consumed by renderers.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge<T> {
    pub source: State,
    pub label: Transition<T>,
    pub target: State,
}

impl<T> Edge<T> {
    #[inline]
    pub fn new(source: State, label: Transition<T>, target: State) -> Self {
        Self {
            source,
            label,
            target,
        }
    }
}

/// Capabilities shared by every kind of finite automaton.
pub trait Automaton<T: Symbol> {
    /// The set of all states.
    fn states(&self) -> &StateSet;

    /// The set of input symbols.
    fn alphabet(&self) -> &Alphabet<T>;

    fn init_state(&self) -> State;

    fn final_states(&self) -> &StateSet;

    /// Every transition as a flat list of edges. Epsilon edges are labelled
    /// [`Transition::Epsilon`].
    fn edges(&self) -> Vec<Edge<T>>;

    /// Determine if the given input is accepted by the automaton, failing on the first symbol
    /// outside of the alphabet.
    fn try_run<I>(&self, input: I) -> std::result::Result<bool, RunError<T>>
    where
        I: IntoIterator,
        I::Item: Borrow<T>;

    /// Build an equivalent deterministic automaton.
    fn to_dfa(&self) -> DFA<T>;

    /// Determine if the given input is accepted by the automaton.
    ///
    /// An input symbol outside of the alphabet is reported through the logger and the input is
    /// rejected.
    ///
    /// # Panics
    ///
    /// Panics if a deterministic automaton has no transition for a (state, symbol) pair reached
    /// by the input.
    #[inline]
    fn run<I>(&self, input: I) -> bool
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        match self.try_run(input) {
            Ok(accepted) => accepted,
            Err(RunError::InvalidSymbol(err)) => {
                log::warn!("rejecting input: {}", err);
                false
            }
            Err(err) => panic!("{}", err),
        }
    }

    #[inline]
    fn is_final_state(&self, state: State) -> bool {
        self.final_states().contains(&state)
    }
}

#[inline]
pub(crate) fn check_symbol<T: Symbol>(
    alphabet: &Alphabet<T>,
    symbol: &T,
    position: usize,
) -> std::result::Result<(), InvalidSymbolError<T>> {
    if alphabet.contains(symbol) {
        Ok(())
    } else {
        Err(InvalidSymbolError {
            symbol: symbol.clone(),
            position,
        })
    }
}

/// Validate the parts of an automaton. Edge labels of `None` stand for epsilon.
pub(crate) fn check_parts<'a, T, E>(
    states: &StateSet,
    alphabet: &Alphabet<T>,
    init_state: State,
    final_states: &StateSet,
    edges: E,
) -> Result<(), T>
where
    T: Symbol + 'a,
    E: IntoIterator<Item = (State, Option<&'a T>, State)>,
{
    if !states.contains(&init_state) {
        return Err(MalformedAutomatonError::UnknownInitialState(init_state));
    }

    if let Some(&q) = final_states.iter().find(|q| !states.contains(*q)) {
        return Err(MalformedAutomatonError::UnknownFinalState(q));
    }

    for (source, symbol, target) in edges {
        if !states.contains(&source) {
            return Err(MalformedAutomatonError::UnknownSource(source));
        }
        if !states.contains(&target) {
            return Err(MalformedAutomatonError::UnknownTarget(target));
        }
        if let Some(symbol) = symbol {
            if !alphabet.contains(symbol) {
                return Err(MalformedAutomatonError::UnknownSymbol(symbol.clone()));
            }
        }
    }

    Ok(())
}

/// Formats `{a, b, c}`.
pub(crate) fn fmt_set<I, D>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator<Item = D>,
    D: fmt::Display,
{
    f.write_str("{")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("}")
}

/// Displays a state set as `{0, 1, 2}`.
pub(crate) struct DisplaySet<'a>(pub &'a StateSet);

impl fmt::Display for DisplaySet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_set(f, self.0.iter())
    }
}

/// Formats a row of transitions as `{label: target, ...}`.
pub(crate) fn fmt_row<L, V, I>(f: &mut fmt::Formatter<'_>, row: I) -> fmt::Result
where
    L: fmt::Display,
    V: fmt::Display,
    I: IntoIterator<Item = (L, V)>,
{
    f.write_str("{")?;
    for (i, (label, target)) in row.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}: {}", label, target)?;
    }
    f.write_str("}")
}

/// The canonical multi-line rendering shared by all automaton kinds. `row` writes the
/// transitions leaving one state.
pub(crate) fn fmt_automaton<T, A, R>(
    f: &mut fmt::Formatter<'_>,
    kind: &str,
    automaton: &A,
    mut row: R,
) -> fmt::Result
where
    T: Symbol,
    A: Automaton<T>,
    R: FnMut(&mut fmt::Formatter<'_>, State) -> fmt::Result,
{
    writeln!(f, "{}", kind)?;
    write!(f, "    states      : ")?;
    fmt_set(f, automaton.states().iter())?;
    write!(f, "\n    alphabet    : ")?;
    fmt_set(f, automaton.alphabet().iter().map(|s| format!("{:?}", s)))?;
    write!(f, "\n    transitions : ")?;
    for (i, &q) in automaton.states().iter().enumerate() {
        if i > 0 {
            write!(f, "\n                  ")?;
        }
        write!(f, "{} : ", q)?;
        row(f, q)?;
    }
    write!(f, "\n    init_state  : {}", automaton.init_state())?;
    write!(f, "\n    final_states: ")?;
    fmt_set(f, automaton.final_states().iter())
}
