use crate::error::{MalformedAutomatonError, Result, RunError};
use crate::model::{self, check_parts, check_symbol, Alphabet, Automaton, Edge, Transition};
use crate::table::Table;
use crate::{State, StateSet, Symbol};

use std::borrow::Borrow;
use std::fmt;

/// A deterministic finite automaton, or DFA.
///
/// Every (state, symbol) pair has at most one target. A DFA built by [`DFA::new`] may be partial;
/// running it over a pair without a transition is a programming error, see [`Automaton::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DFA<T: Symbol> {
    states: StateSet,
    alphabet: Alphabet<T>,
    transitions: Table<State, T, State>,
    init_state: State,
    final_states: StateSet,
}

impl<T: Symbol> DFA<T> {
    /// Create a DFA from its five parts, checking that they are consistent.
    ///
    /// Listing the same `(state, symbol, target)` triple twice is allowed; listing two different
    /// targets for one `(state, symbol)` pair is not.
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
            match table.get(&source, &symbol) {
                Some(&existing) if existing != target => {
                    return Err(MalformedAutomatonError::ConflictingTransition {
                        state: source,
                        symbol,
                    })
                }
                _ => {
                    table.set(source, symbol, target);
                }
            }
        }

        check_parts(
            &states,
            &alphabet,
            init_state,
            &final_states,
            table.iter().map(|(&p, s, &q)| (p, Some(s), q)),
        )?;

        Ok(Self::from_parts(
            states,
            alphabet,
            table,
            init_state,
            final_states,
        ))
    }

    /// Assemble a DFA from parts already known to be consistent.
    #[inline]
    pub(crate) fn from_parts(
        states: StateSet,
        alphabet: Alphabet<T>,
        transitions: Table<State, T, State>,
        init_state: State,
        final_states: StateSet,
    ) -> Self {
        Self {
            states,
            alphabet,
            transitions,
            init_state,
            final_states,
        }
    }

    /// Returns the transition table.
    #[inline]
    pub fn transitions(&self) -> &Table<State, T, State> {
        &self.transitions
    }

    /// The unique target of `state` on `symbol`, if one is modelled.
    #[inline]
    pub fn successor(&self, state: State, symbol: &T) -> Option<State> {
        self.transitions.get(&state, symbol).copied()
    }

    /// Checks whether every state has a transition on every symbol of the alphabet.
    pub fn is_total(&self) -> bool {
        self.states.iter().all(|&q| {
            self.alphabet
                .iter()
                .all(|s| self.transitions.get(&q, s).is_some())
        })
    }

    /// Returns a total DFA recognizing the same language. Missing transitions are redirected to a
    /// fresh non-accepting sink state; a DFA that is already total is returned unchanged.
    pub fn with_dead_state(&self) -> Self {
        if self.is_total() {
            return self.clone();
        }

        let dead = self.states.iter().copied().max().map_or(0, |q| q + 1);
        let mut dfa = self.clone();
        dfa.states.insert(dead);

        for &q in dfa.states.iter() {
            for symbol in &dfa.alphabet {
                if dfa.transitions.get(&q, symbol).is_none() {
                    dfa.transitions.set(q, symbol.clone(), dead);
                }
            }
        }

        log::debug!("added dead state {} to a partial DFA", dead);
        dfa
    }

    /// Returns the DFA that accepts exactly the inputs this one rejects, by swapping accepting and
    /// non-accepting states.
    ///
    /// This only complements the language when the DFA is total; see [`DFA::with_dead_state`].
    pub fn complement(&self) -> Self {
        let final_states = self
            .states
            .iter()
            .filter(|q| !self.final_states.contains(*q))
            .copied()
            .collect();

        Self::from_parts(
            self.states.clone(),
            self.alphabet.clone(),
            self.transitions.clone(),
            self.init_state,
            final_states,
        )
    }
}

impl<T: Symbol> Automaton<T> for DFA<T> {
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
            .map(|(&p, s, &q)| Edge::new(p, Transition::Symbol(s.clone()), q))
            .collect()
    }

    fn try_run<I>(&self, input: I) -> std::result::Result<bool, RunError<T>>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let mut state = self.init_state;
        for (position, symbol) in input.into_iter().enumerate() {
            let symbol = symbol.borrow();
            check_symbol(&self.alphabet, symbol, position)?;

            state = match self.successor(state, symbol) {
                Some(next) => next,
                None => {
                    return Err(RunError::MissingTransition {
                        state,
                        symbol: symbol.clone(),
                    })
                }
            };
        }

        Ok(self.is_final_state(state))
    }

    #[inline]
    fn to_dfa(&self) -> DFA<T> {
        self.clone()
    }
}

impl<T: Symbol> fmt::Display for DFA<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        model::fmt_automaton::<T, _, _>(f, "DFA", self, |f, q| {
            model::fmt_row(
                f,
                self.transitions
                    .get_row(&q)
                    .map(|(s, target)| (Transition::Symbol(s), target)),
            )
        })
    }
}
