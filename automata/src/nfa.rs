use crate::convert::{subset_construction, Determinized};
use crate::error::{Result, RunError};
use crate::model::{self, check_parts, check_symbol, Alphabet, Automaton, DisplaySet, Edge, Transition};
use crate::table::Table;
use crate::{State, StateSet, Symbol, DFA};

use std::borrow::Borrow;
use std::fmt;

/// A non-deterministic finite automaton, or NFA.
///
/// Each (state, symbol) pair leads to a set of zero or more states. A missing entry is the same
/// as an empty set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NFA<T: Symbol> {
    states: StateSet,
    alphabet: Alphabet<T>,
    transitions: Table<State, T, StateSet>,
    init_state: State,
    final_states: StateSet,
}

impl<T: Symbol> NFA<T> {
    /// Create an NFA from its five parts, checking that they are consistent. Transitions sharing
    /// a source and a symbol are merged.
    pub fn new<S, A, R, F>(
        states: S,
        alphabet: A,
        transitions: R,
        init_state: State,
        final_states: F,
    ) -> Result<Self, T>
    where
        S: IntoIterator<Item = State>,
        A: IntoIterator<Item = T>,
        R: IntoIterator<Item = (State, T, State)>,
        F: IntoIterator<Item = State>,
    {
        let states: StateSet = states.into_iter().collect();
        let alphabet: Alphabet<T> = alphabet.into_iter().collect();
        let final_states: StateSet = final_states.into_iter().collect();

        let mut table = Table::new();
        for (source, symbol, target) in transitions {
            table.set_or(source, symbol, StateSet::unit(target), |targets| {
                targets.insert(target);
            });
        }

        check_parts(
            &states,
            &alphabet,
            init_state,
            &final_states,
            table
                .iter()
                .flat_map(|(&p, s, targets)| targets.iter().map(move |&q| (p, Some(s), q))),
        )?;

        Ok(Self {
            states,
            alphabet,
            transitions: table,
            init_state,
            final_states,
        })
    }

    /// Returns the transition table.
    #[inline]
    pub fn transitions(&self) -> &Table<State, T, StateSet> {
        &self.transitions
    }

    /// The states reachable from `state` by reading `symbol`.
    #[inline]
    pub fn successors(&self, state: State, symbol: &T) -> StateSet {
        self.transitions
            .get(&state, symbol)
            .cloned()
            .unwrap_or_default()
    }

    /// The union of the successors of every member of `states` on `symbol`.
    pub fn next_states(&self, states: &StateSet, symbol: &T) -> StateSet {
        states
            .iter()
            .fold(StateSet::new(), |next, &q| next.union(self.successors(q, symbol)))
    }

    /// Subset construction, keeping the set of NFA states behind each DFA state.
    #[inline]
    pub fn determinize(&self) -> Determinized<T> {
        subset_construction(
            &self.alphabet,
            StateSet::unit(self.init_state),
            &self.final_states,
            |states, symbol| self.next_states(states, symbol),
        )
    }

    /// Build an equivalent DFA by subset construction.
    #[inline]
    pub fn convert_to_dfa(&self) -> DFA<T> {
        self.determinize().dfa
    }
}

impl<T: Symbol> Automaton<T> for NFA<T> {
    #[inline]
    fn states(&self) -> &StateSet {
        &self.states
    }

    #[inline]
    fn alphabet(&self) -> &Alphabet<T> {
        &self.alphabet
    }

    #[inline]
    fn init_state(&self) -> State {
        self.init_state
    }

    #[inline]
    fn final_states(&self) -> &StateSet {
        &self.final_states
    }

    fn edges(&self) -> Vec<Edge<T>> {
        self.transitions
            .iter()
            .flat_map(|(&p, s, targets)| {
                targets
                    .iter()
                    .map(move |&q| Edge::new(p, Transition::Symbol(s.clone()), q))
            })
            .collect()
    }

    fn try_run<I>(&self, input: I) -> std::result::Result<bool, RunError<T>>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let mut states = StateSet::unit(self.init_state);
        for (position, symbol) in input.into_iter().enumerate() {
            let symbol = symbol.borrow();
            check_symbol(&self.alphabet, symbol, position)?;
            states = self.next_states(&states, symbol);
        }

        Ok(states.iter().any(|&q| self.is_final_state(q)))
    }

    #[inline]
    fn to_dfa(&self) -> DFA<T> {
        self.convert_to_dfa()
    }
}

impl<T: Symbol> fmt::Display for NFA<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        model::fmt_automaton::<T, _, _>(f, "NFA", self, |f, q| {
            model::fmt_row(
                f,
                self.transitions
                    .get_row(&q)
                    .map(|(s, targets)| (Transition::Symbol(s), DisplaySet(targets))),
            )
        })
    }
}
