use crate::convert::{subset_construction, Determinized};
use crate::error::{Result, RunError};
use crate::model::{self, check_parts, check_symbol, Alphabet, Automaton, DisplaySet, Edge, Transition};
use crate::table::Table;
use crate::{State, StateSet, Symbol, DFA};

use std::borrow::Borrow;
use std::fmt;

/// A non-deterministic finite automaton with epsilon transitions, or eNFA.
///
/// This is the automaton produced by the structural combinators (see [`ENFA::serial_connect`]
/// and friends) and by the regular expression compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ENFA<T: Symbol> {
    pub(crate) states: StateSet,
    pub(crate) alphabet: Alphabet<T>,
    pub(crate) transitions: Table<State, Transition<T>, StateSet>,
    pub(crate) init_state: State,
    pub(crate) final_states: StateSet,
}

impl<T: Symbol> ENFA<T> {
    /// Create an eNFA from its five parts, checking that they are consistent. Transitions sharing
    /// a source and a label are merged.
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
        R: IntoIterator<Item = (State, Transition<T>, State)>,
        F: IntoIterator<Item = State>,
    {
        let states: StateSet = states.into_iter().collect();
        let alphabet: Alphabet<T> = alphabet.into_iter().collect();
        let final_states: StateSet = final_states.into_iter().collect();

        let mut table = Table::new();
        for (source, label, target) in transitions {
            add_transition(&mut table, source, label, target);
        }

        check_parts(
            &states,
            &alphabet,
            init_state,
            &final_states,
            table.iter().flat_map(|(&p, label, targets)| {
                targets.iter().map(move |&q| (p, label.symbol(), q))
            }),
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
    pub fn transitions(&self) -> &Table<State, Transition<T>, StateSet> {
        &self.transitions
    }

    /// The states reachable from `state` through exactly one transition labelled `label`.
    #[inline]
    pub fn successors(&self, state: State, label: &Transition<T>) -> StateSet {
        self.transitions
            .get(&state, label)
            .cloned()
            .unwrap_or_default()
    }

    /// Computes the epsilon-closure of `state`: every state reachable from it through zero or
    /// more epsilon transitions.
    pub fn epsilon_closure(&self, state: State) -> StateSet {
        let mut closure = StateSet::unit(state);
        let mut frontier = vec![state];

        // The closure only grows and is bounded by the state set.
        while !frontier.is_empty() {
            let mut added = Vec::new();
            for q in frontier {
                for &r in self.successors(q, &Transition::Epsilon).iter() {
                    if !closure.contains(&r) {
                        closure.insert(r);
                        added.push(r);
                    }
                }
            }
            frontier = added;
        }

        closure
    }

    /// Computes the union of epsilon-closures for each state in the given set of states.
    pub fn epsilon_closure_set(&self, states: &StateSet) -> StateSet {
        states.iter().fold(StateSet::new(), |closure, &q| {
            closure.union(self.epsilon_closure(q))
        })
    }

    /// The states reachable from `states` by reading `symbol` and then following any number of
    /// epsilon transitions.
    pub fn next_states(&self, states: &StateSet, symbol: &T) -> StateSet {
        let label = Transition::Symbol(symbol.clone());
        states.iter().fold(StateSet::new(), |next, &q| {
            self.successors(q, &label)
                .iter()
                .fold(next, |next, &r| next.union(self.epsilon_closure(r)))
        })
    }

    /// Subset construction over epsilon-closed sets, keeping the set of eNFA states behind each
    /// DFA state.
    #[inline]
    pub fn determinize(&self) -> Determinized<T> {
        subset_construction(
            &self.alphabet,
            self.epsilon_closure(self.init_state),
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

/// Adds `source --label--> target` to a table, merging with existing targets.
#[inline]
pub(crate) fn add_transition<T: Symbol>(
    table: &mut Table<State, Transition<T>, StateSet>,
    source: State,
    label: Transition<T>,
    target: State,
) {
    table.set_or(source, label, StateSet::unit(target), |targets| {
        targets.insert(target);
    });
}

impl<T: Symbol> Automaton<T> for ENFA<T> {
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
            .flat_map(|(&p, label, targets)| {
                targets.iter().map(move |&q| Edge::new(p, label.clone(), q))
            })
            .collect()
    }

    fn try_run<I>(&self, input: I) -> std::result::Result<bool, RunError<T>>
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        let mut states = self.epsilon_closure(self.init_state);
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

impl<T: Symbol> fmt::Display for ENFA<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        model::fmt_automaton::<T, _, _>(f, "ENFA", self, |f, q| {
            model::fmt_row(
                f,
                self.transitions
                    .get_row(&q)
                    .map(|(label, targets)| (label, DisplaySet(targets))),
            )
        })
    }
}
