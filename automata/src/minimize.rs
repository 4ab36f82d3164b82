use crate::table::Table;
use crate::{Automaton, State, StateSet, Symbol, DFA};

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// A minimized DFA together with the equivalence class each of its states stands for.
#[derive(Debug, Clone)]
pub struct Minimized<T: Symbol> {
    pub dfa: DFA<T>,
    /// Maps each state of `dfa` to the states of the (completed) input DFA it merges.
    pub classes: BTreeMap<State, StateSet>,
}

impl<T: Symbol> From<Minimized<T>> for DFA<T> {
    #[inline]
    fn from(minimized: Minimized<T>) -> Self {
        minimized.dfa
    }
}

/// Orders a pair so that `(p, q)` and `(q, p)` share a key.
#[inline]
fn pair(p: State, q: State) -> (State, State) {
    if p <= q {
        (p, q)
    } else {
        (q, p)
    }
}

impl<T: Symbol> DFA<T> {
    /// Returns an equivalent DFA in which no two states are language-equivalent.
    #[inline]
    pub fn minimize(&self) -> DFA<T> {
        self.minimize_with_classes().dfa
    }

    /// Minimize by partition refinement over state pairs (Myhill-Nerode).
    ///
    /// A partial DFA is first completed with [`DFA::with_dead_state`], so every lookup during
    /// refinement is defined. Unreachable states are kept and merged like any other.
    pub fn minimize_with_classes(&self) -> Minimized<T> {
        let dfa = self.with_dead_state();
        let states: Vec<State> = dfa.states().iter().copied().collect();
        let is_final = |q: State| dfa.is_final_state(q);

        let mut distinguishable = BTreeSet::new();
        let mut indistinguishable = BTreeSet::new();
        for (i, &p) in states.iter().enumerate() {
            for &q in &states[i + 1..] {
                if is_final(p) != is_final(q) {
                    distinguishable.insert((p, q));
                } else {
                    indistinguishable.insert((p, q));
                }
            }
        }

        // `distinguishable` only grows, so this stops after at most one pass per pair.
        let mut passes = 0;
        loop {
            let split: Vec<(State, State)> = indistinguishable
                .iter()
                .copied()
                .filter(|&(p, q)| {
                    dfa.alphabet().iter().any(|s| {
                        match (dfa.successor(p, s), dfa.successor(q, s)) {
                            (Some(a), Some(b)) => distinguishable.contains(&pair(a, b)),
                            (a, b) => a != b,
                        }
                    })
                })
                .collect();

            passes += 1;
            log::trace!("refinement pass {} split {} pairs", passes, split.len());
            if split.is_empty() {
                break;
            }

            for p in split {
                indistinguishable.remove(&p);
                distinguishable.insert(p);
            }
        }

        let mut class_of = BTreeMap::new();
        let mut classes = BTreeMap::new();
        let mut labels: HashMap<StateSet, State> = HashMap::new();
        for &p in &states {
            let mut class = StateSet::unit(p);
            for &q in &states {
                if indistinguishable.contains(&pair(p, q)) {
                    class.insert(q);
                }
            }

            let next = labels.len();
            let label = *labels.entry(class.clone()).or_insert(next);
            classes.entry(label).or_insert(class);
            class_of.insert(p, label);
        }

        // Any member of a class can stand for it: members agree on the class of every successor.
        let mut transitions = Table::new();
        for (&label, class) in &classes {
            if let Some(&representative) = class.iter().next() {
                for symbol in dfa.alphabet() {
                    if let Some(target) = dfa.successor(representative, symbol) {
                        transitions.set(label, symbol.clone(), class_of[&target]);
                    }
                }
            }
        }

        let final_states = classes
            .iter()
            .filter(|(_, class)| class.iter().any(|&q| is_final(q)))
            .map(|(&label, _)| label)
            .collect();

        log::debug!(
            "minimized {} states into {} classes in {} passes",
            states.len(),
            classes.len(),
            passes
        );

        let minimized = DFA::from_parts(
            classes.keys().copied().collect(),
            dfa.alphabet().clone(),
            transitions,
            class_of[&dfa.init_state()],
            final_states,
        );

        Minimized {
            dfa: minimized,
            classes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pair;

    #[test]
    fn test_pair_is_unordered() {
        assert_eq!(pair(3, 1), pair(1, 3));
        assert_eq!((2, 2), pair(2, 2));
    }
}
