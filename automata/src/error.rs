use crate::State;

use std::fmt::Debug;

/// Alias for [`Result`] for [`MalformedAutomatonError`].
pub type Result<R, T> = std::result::Result<R, MalformedAutomatonError<T>>;

/// Error returned when the parts handed to an automaton constructor violate its invariants.
///
/// Automata are validated eagerly, so an automaton value that exists is always well-formed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedAutomatonError<T: Debug> {
    #[error("initial state {0} is not a member of the state set")]
    UnknownInitialState(State),

    #[error("final state {0} is not a member of the state set")]
    UnknownFinalState(State),

    #[error("transition source {0} is not a member of the state set")]
    UnknownSource(State),

    #[error("transition target {0} is not a member of the state set")]
    UnknownTarget(State),

    /// A transition is labelled with a symbol outside of the alphabet.
    #[error("transition symbol {0:?} is not part of the alphabet")]
    UnknownSymbol(T),

    /// A deterministic automaton was given two different targets for the same state and symbol.
    #[error("state {state} has more than one transition on {symbol:?}")]
    ConflictingTransition { state: State, symbol: T },
}

/// Error reported when an input symbol does not belong to the alphabet of the automaton being
/// run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid symbol {symbol:?} at position {position}")]
pub struct InvalidSymbolError<T: Debug> {
    pub symbol: T,
    pub position: usize,
}

/// Error returned by the `try_run` family of methods.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RunError<T: Debug> {
    #[error("{0}")]
    InvalidSymbol(InvalidSymbolError<T>),

    /// A deterministic automaton has no transition for a pair that was looked up.
    #[error("state {state} has no transition on {symbol:?}")]
    MissingTransition { state: State, symbol: T },
}

impl<T: Debug> From<InvalidSymbolError<T>> for RunError<T> {
    #[inline]
    fn from(err: InvalidSymbolError<T>) -> Self {
        RunError::InvalidSymbol(err)
    }
}
