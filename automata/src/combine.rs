use crate::enfa::{add_transition, ENFA};
use crate::error::Result;
use crate::model::{Alphabet, Transition};
use crate::table::Table;
use crate::{State, StateSet, Symbol};

use std::collections::HashMap;

/// Hands out fresh state handles for `(automaton index, original state)` pairs, so that states of
/// different operands never collide once merged.
#[derive(Debug, Default)]
struct Relabel {
    map: HashMap<(usize, State), State>,
    next: State,
}

impl Relabel {
    /// The handle standing for state `q` of operand `index`.
    #[inline]
    fn get(&mut self, index: usize, q: State) -> State {
        let next = &mut self.next;
        *self.map.entry((index, q)).or_insert_with(|| {
            let label = *next;
            *next += 1;
            label
        })
    }

    /// A handle not standing for any operand state.
    #[inline]
    fn fresh(&mut self) -> State {
        let label = self.next;
        self.next += 1;
        label
    }
}

/// The pieces of an eNFA under construction.
struct Parts<T: Symbol> {
    states: StateSet,
    alphabet: Alphabet<T>,
    transitions: Table<State, Transition<T>, StateSet>,
}

impl<T: Symbol> Parts<T> {
    #[inline]
    fn new() -> Self {
        Self {
            states: StateSet::new(),
            alphabet: Alphabet::new(),
            transitions: Table::new(),
        }
    }

    /// Copy the states, alphabet and internal transitions of operand `index` under new labels.
    fn copy(&mut self, relabel: &mut Relabel, index: usize, automaton: &ENFA<T>) {
        self.alphabet.extend(automaton.alphabet.iter().cloned());

        for &q in automaton.states.iter() {
            self.states.insert(relabel.get(index, q));
        }

        for (&p, label, targets) in automaton.transitions.iter() {
            let source = relabel.get(index, p);
            for &q in targets.iter() {
                let target = relabel.get(index, q);
                add_transition(&mut self.transitions, source, label.clone(), target);
            }
        }
    }

    #[inline]
    fn add_epsilon(&mut self, source: State, target: State) {
        add_transition(&mut self.transitions, source, Transition::Epsilon, target);
    }

    #[inline]
    fn finish(self, init_state: State, final_states: StateSet) -> ENFA<T> {
        ENFA {
            states: self.states,
            alphabet: self.alphabet,
            transitions: self.transitions,
            init_state,
            final_states,
        }
    }
}

impl<T: Symbol> ENFA<T> {
    /// An eNFA over `alphabet` recognizing exactly the one-symbol input `symbol`: two states and a
    /// single edge between them.
    ///
    /// Fails if `symbol` is not part of `alphabet`.
    pub fn one_word<A>(symbol: T, alphabet: A) -> Result<Self, T>
    where
        A: IntoIterator<Item = T>,
    {
        ENFA::new(
            [0, 1],
            alphabet,
            [(0, Transition::Symbol(symbol), 1)],
            0,
            [1],
        )
    }

    /// An eNFA recognizing any single symbol of `alphabet`.
    ///
    /// Every symbol leads from state 0 to the accepting state 1, and from state 1 to state 2,
    /// which loops onto itself and never accepts.
    pub fn any_word<A>(alphabet: A) -> Self
    where
        A: IntoIterator<Item = T>,
    {
        let alphabet: Alphabet<T> = alphabet.into_iter().collect();
        let states: [State; 3] = [0, 1, 2];
        let mut transitions = Table::new();
        for symbol in &alphabet {
            for (p, q) in [(0, 1), (1, 2), (2, 2)] {
                add_transition(&mut transitions, p, Transition::Symbol(symbol.clone()), q);
            }
        }

        ENFA {
            states: states.into_iter().collect(),
            alphabet,
            transitions,
            init_state: 0,
            final_states: StateSet::unit(1),
        }
    }

    /// An eNFA over `alphabet` recognizing only the empty input.
    pub fn empty_word<A>(alphabet: A) -> Self
    where
        A: IntoIterator<Item = T>,
    {
        ENFA {
            states: StateSet::unit(0),
            alphabet: alphabet.into_iter().collect(),
            transitions: Table::new(),
            init_state: 0,
            final_states: StateSet::unit(0),
        }
    }

    /// Concatenation. Each final state of an operand gets an epsilon transition to the initial
    /// state of the next operand. The alphabet is the union of the operand alphabets.
    ///
    /// With no operands, the result recognizes only the empty input.
    pub fn serial_connect(automata: &[ENFA<T>]) -> Self {
        let (first, last) = match (automata.first(), automata.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return ENFA::empty_word(None),
        };

        let mut relabel = Relabel::default();
        let mut parts = Parts::new();
        for (i, automaton) in automata.iter().enumerate() {
            parts.copy(&mut relabel, i, automaton);

            if i > 0 {
                let init = relabel.get(i, automaton.init_state);
                for &f in automata[i - 1].final_states.iter() {
                    let f = relabel.get(i - 1, f);
                    parts.add_epsilon(f, init);
                }
            }
        }

        let index = automata.len() - 1;
        let init_state = relabel.get(0, first.init_state);
        let final_states = last
            .final_states
            .iter()
            .map(|&f| relabel.get(index, f))
            .collect();

        parts.finish(init_state, final_states)
    }

    /// Alternation. A fresh initial state has an epsilon transition to the initial state of every
    /// operand, and the final states are those of all operands.
    ///
    /// With no operands, the result recognizes nothing.
    pub fn parallel_connect(automata: &[ENFA<T>]) -> Self {
        let mut relabel = Relabel::default();
        let mut parts = Parts::new();

        let init_state = relabel.fresh();
        parts.states.insert(init_state);

        let mut final_states = StateSet::new();
        for (i, automaton) in automata.iter().enumerate() {
            parts.copy(&mut relabel, i, automaton);

            let init = relabel.get(i, automaton.init_state);
            parts.add_epsilon(init_state, init);

            for &f in automaton.final_states.iter() {
                final_states.insert(relabel.get(i, f));
            }
        }

        parts.finish(init_state, final_states)
    }

    /// Kleene star. Two fresh states are added: a new initial state and a single new final
    /// state. The new initial state and every old final state get epsilon transitions to both the
    /// old initial state and the new final state.
    ///
    /// The operand is left untouched.
    pub fn repeat(automaton: &ENFA<T>) -> Self {
        let mut result = automaton.clone();

        let start = automaton.states.iter().copied().max().map_or(0, |q| q + 1);
        let end = start + 1;
        result.states.insert(start);
        result.states.insert(end);

        for source in automaton.final_states.iter().copied().chain([start]) {
            add_transition(
                &mut result.transitions,
                source,
                Transition::Epsilon,
                automaton.init_state,
            );
            add_transition(&mut result.transitions, source, Transition::Epsilon, end);
        }

        result.init_state = start;
        result.final_states = StateSet::unit(end);
        result
    }
}
