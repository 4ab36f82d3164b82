//! Both engines of a pattern agree on every input.

use fare::RegExp;

use proptest::prelude::*;

const PATTERNS: [&str; 8] = [
    "(a|b)*abb",
    "ab(a|b)*abb",
    "a|b*",
    "(a|bc)*",
    "(ab*)*c",
    ".*(ab|c)",
    "((a|b)(a|b))*",
    "(a*b*c*)*ba",
];

proptest! {
    #[test]
    fn engines_agree(index in 0..PATTERNS.len(), input in "[abc]{0,10}") {
        let expr = PATTERNS[index];
        let nfa_re = RegExp::new_nfa(expr, ['a', 'b', 'c']).unwrap();
        let dfa_re = nfa_re.clone().with_dfa();

        prop_assert_eq!(nfa_re.is_match(&input), dfa_re.is_match(&input));
    }

    #[test]
    fn even_length(input in "[ab]{0,12}") {
        let re = RegExp::new("((a|b)(a|b))*", ['a', 'b']).unwrap();
        prop_assert_eq!(input.len() % 2 == 0, re.is_match(&input));
    }
}
