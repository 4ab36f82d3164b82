use crate::error::RunError;
use crate::model::{Alphabet, Automaton, Edge};
use crate::{State, StateSet, Symbol, DFA, ENFA, NFA};

use std::borrow::Borrow;
use std::fmt;

/// Any one of the three automaton kinds, for code that handles them uniformly at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyAutomaton<T: Symbol> {
    Dfa(DFA<T>),
    Nfa(NFA<T>),
    Enfa(ENFA<T>),
}

macro_rules! dispatch {
    ($self:expr, $a:ident => $body:expr) => {
        match $self {
            AnyAutomaton::Dfa($a) => $body,
            AnyAutomaton::Nfa($a) => $body,
            AnyAutomaton::Enfa($a) => $body,
        }
    };
}

impl<T: Symbol> AnyAutomaton<T> {
    /// Name of the automaton kind: `"DFA"`, `"NFA"` or `"ENFA"`.
    #[inline]
    pub fn kind(&self) -> &'static str {
        match self {
            AnyAutomaton::Dfa(_) => "DFA",
            AnyAutomaton::Nfa(_) => "NFA",
            AnyAutomaton::Enfa(_) => "ENFA",
        }
    }
}

impl<T: Symbol> Automaton<T> for AnyAutomaton<T> {
    #[inline]
    fn states(&self) -> &StateSet {
        dispatch!(self, a => a.states())
    }

    #[inline]
    fn alphabet(&self) -> &Alphabet<T> {
        dispatch!(self, a => a.alphabet())
    }

    #[inline]
    fn init_state(&self) -> State {
        dispatch!(self, a => a.init_state())
    }

    #[inline]
    fn final_states(&self) -> &StateSet {
        dispatch!(self, a => a.final_states())
    }

    #[inline]
    fn edges(&self) -> Vec<Edge<T>> {
        dispatch!(self, a => a.edges())
    }

    #[inline]
    fn try_run<I>(&self, input: I) -> Result<bool, RunError<T>>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        dispatch!(self, a => a.try_run(input))
    }

    #[inline]
    fn to_dfa(&self) -> DFA<T> {
        dispatch!(self, a => a.to_dfa())
    }
}

impl<T: Symbol> fmt::Display for AnyAutomaton<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, a => fmt::Display::fmt(a, f))
    }
}

impl<T: Symbol> From<DFA<T>> for AnyAutomaton<T> {
    #[inline]
    fn from(dfa: DFA<T>) -> Self {
        AnyAutomaton::Dfa(dfa)
    }
}

impl<T: Symbol> From<NFA<T>> for AnyAutomaton<T> {
    #[inline]
    fn from(nfa: NFA<T>) -> Self {
        AnyAutomaton::Nfa(nfa)
    }
}

impl<T: Symbol> From<ENFA<T>> for AnyAutomaton<T> {
    #[inline]
    fn from(enfa: ENFA<T>) -> Self {
        AnyAutomaton::Enfa(enfa)
    }
}
