//! Language laws checked over randomly generated automata and inputs.

use automata::{Automaton, Transition, ENFA, NFA};

use proptest::prelude::*;

const ALPHABET: [char; 2] = ['a', 'b'];

fn arb_symbol() -> impl Strategy<Value = char> {
    prop::sample::select(ALPHABET.to_vec())
}

fn arb_input() -> impl Strategy<Value = String> {
    "[ab]{0,8}"
}

/// Random NFAs over `{a, b}` with up to five states.
fn arb_nfa() -> impl Strategy<Value = NFA<char>> {
    (1usize..6).prop_flat_map(|n| {
        (
            prop::collection::vec((0..n, arb_symbol(), 0..n), 0..12),
            prop::collection::vec(any::<bool>(), n),
        )
            .prop_map(move |(transitions, finals)| {
                let finals = finals.into_iter().enumerate().filter_map(|(q, f)| f.then_some(q));
                NFA::new(0..n, ALPHABET, transitions, 0, finals).unwrap()
            })
    })
}

/// Random eNFAs over `{a, b}` built from the structural combinators.
fn arb_enfa() -> impl Strategy<Value = ENFA<char>> {
    let leaf = prop_oneof![
        arb_symbol().prop_map(|s| ENFA::one_word(s, ALPHABET).unwrap()),
        Just(ENFA::any_word(ALPHABET)),
        Just(ENFA::empty_word(ALPHABET)),
    ];

    leaf.prop_recursive(3, 16, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..4).prop_map(|a| ENFA::serial_connect(&a)),
            prop::collection::vec(inner.clone(), 1..4).prop_map(|a| ENFA::parallel_connect(&a)),
            inner.prop_map(|a| ENFA::repeat(&a)),
        ]
    })
}

/// Random eNFAs over `{a, b}` with arbitrary epsilon edges, including cycles.
fn arb_raw_enfa() -> impl Strategy<Value = ENFA<char>> {
    let label = prop_oneof![
        arb_symbol().prop_map(Transition::Symbol),
        Just(Transition::Epsilon),
    ]
    .boxed();

    (1usize..6).prop_flat_map(move |n| {
        (
            prop::collection::vec((0..n, label.clone(), 0..n), 0..12),
            prop::collection::vec(any::<bool>(), n),
        )
            .prop_map(move |(transitions, finals)| {
                let finals = finals.into_iter().enumerate().filter_map(|(q, f)| f.then_some(q));
                ENFA::new(0..n, ALPHABET, transitions, 0, finals).unwrap()
            })
    })
}

proptest! {
    #[test]
    fn nfa_round_trip(nfa in arb_nfa(), input in arb_input()) {
        let dfa = nfa.to_dfa();
        prop_assert_eq!(nfa.run(input.chars()), dfa.run(input.chars()));
    }

    #[test]
    fn enfa_round_trip(enfa in arb_raw_enfa(), input in arb_input()) {
        let dfa = enfa.to_dfa();
        prop_assert_eq!(enfa.run(input.chars()), dfa.run(input.chars()));
    }

    #[test]
    fn complement_flips(nfa in arb_nfa(), input in arb_input()) {
        let dfa = nfa.to_dfa();
        prop_assert!(dfa.is_total());
        prop_assert_ne!(dfa.run(input.chars()), dfa.complement().run(input.chars()));
    }

    #[test]
    fn minimize_preserves_language(enfa in arb_enfa(), input in arb_input()) {
        let dfa = enfa.to_dfa();
        let minimized = dfa.minimize();
        prop_assert!(minimized.states().len() <= dfa.states().len());
        prop_assert_eq!(dfa.run(input.chars()), minimized.run(input.chars()));
    }

    #[test]
    fn minimize_idempotent(nfa in arb_nfa()) {
        let minimized = nfa.to_dfa().minimize();
        prop_assert_eq!(minimized.states().len(), minimized.minimize().states().len());
    }

    #[test]
    fn serial_law(a in arb_enfa(), b in arb_enfa(), x in arb_input(), y in arb_input()) {
        let serial = ENFA::serial_connect(&[a.clone(), b.clone()]);
        if a.run(x.chars()) && b.run(y.chars()) {
            prop_assert!(serial.run(x.chars().chain(y.chars())));
        }
    }

    #[test]
    fn parallel_law(a in arb_enfa(), b in arb_enfa(), input in arb_input()) {
        let parallel = ENFA::parallel_connect(&[a.clone(), b.clone()]);
        prop_assert_eq!(
            a.run(input.chars()) || b.run(input.chars()),
            parallel.run(input.chars())
        );
    }

    #[test]
    fn repeat_law(a in arb_enfa(), inputs in prop::collection::vec(arb_input(), 0..4)) {
        let star = ENFA::repeat(&a);
        prop_assert!(star.run("".chars()));
        if inputs.iter().all(|x| a.run(x.chars())) {
            prop_assert!(star.run(inputs.concat().chars()));
        }
    }
}
