use crate::enfa::ENFA;
use crate::model::Alphabet;
use crate::nfa::NFA;
use crate::table::Table;
use crate::{State, StateSet, Symbol, DFA};

use std::collections::{BTreeMap, HashMap, VecDeque};

/// A DFA built by subset construction, together with the set of source states behind each of
/// its states.
#[derive(Debug, Clone)]
pub struct Determinized<T: Symbol> {
    pub dfa: DFA<T>,
    pub subsets: BTreeMap<State, StateSet>,
}

impl<T: Symbol> From<Determinized<T>> for DFA<T> {
    #[inline]
    fn from(determinized: Determinized<T>) -> Self {
        determinized.dfa
    }
}

impl<T: Symbol> From<NFA<T>> for Determinized<T> {
    #[inline]
    fn from(nfa: NFA<T>) -> Self {
        nfa.determinize()
    }
}

impl<T: Symbol> From<ENFA<T>> for Determinized<T> {
    #[inline]
    fn from(enfa: ENFA<T>) -> Self {
        enfa.determinize()
    }
}

impl<T: Symbol> From<NFA<T>> for DFA<T> {
    #[inline]
    fn from(nfa: NFA<T>) -> Self {
        nfa.convert_to_dfa()
    }
}

impl<T: Symbol> From<ENFA<T>> for DFA<T> {
    #[inline]
    fn from(enfa: ENFA<T>) -> Self {
        enfa.convert_to_dfa()
    }
}

/// Subset construction shared by [`NFA`] and [`ENFA`].
///
/// Starting from `initial`, every unexplored subset is expanded on every symbol with `step`. DFA
/// states are labelled in discovery order, so the initial subset is state 0. The empty subset is
/// kept as an ordinary state when it is reached: it is never accepting and loops onto itself, so
/// the resulting DFA is total.
pub(crate) fn subset_construction<T, F>(
    alphabet: &Alphabet<T>,
    initial: StateSet,
    final_states: &StateSet,
    step: F,
) -> Determinized<T>
where
    T: Symbol,
    F: Fn(&StateSet, &T) -> StateSet,
{
    let mut labels: HashMap<StateSet, State> = HashMap::new();
    let mut subsets = BTreeMap::new();
    let mut transitions = Table::new();
    let mut unmarked = VecDeque::new();

    labels.insert(initial.clone(), 0);
    subsets.insert(0, initial.clone());
    unmarked.push_back((0, initial));

    while let Some((label, subset)) = unmarked.pop_front() {
        for symbol in alphabet {
            let reachable = step(&subset, symbol);
            let target = match labels.get(&reachable) {
                Some(&existing) => existing,
                None => {
                    let fresh = labels.len();
                    labels.insert(reachable.clone(), fresh);
                    subsets.insert(fresh, reachable.clone());
                    unmarked.push_back((fresh, reachable));
                    fresh
                }
            };

            transitions.set(label, symbol.clone(), target);
        }
    }

    let accepting = subsets
        .iter()
        .filter(|(_, subset)| subset.iter().any(|q| final_states.contains(q)))
        .map(|(&label, _)| label)
        .collect();

    log::debug!("subset construction produced {} states", subsets.len());

    let dfa = DFA::from_parts(
        subsets.keys().copied().collect(),
        alphabet.clone(),
        transitions,
        0,
        accepting,
    );

    Determinized { dfa, subsets }
}
