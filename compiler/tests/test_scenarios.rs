use automata::{AnyAutomaton, Automaton};
use fare_compiler::{compile, Compiler};

#[test]
fn test_alternation_star() {
    let enfa = compile("(a|b)*", ['a', 'b']).unwrap();
    let dfa = enfa.to_dfa();
    let minimized = dfa.minimize();

    let variants: [AnyAutomaton<char>; 2] = [enfa.into(), dfa.into()];
    for automaton in &variants {
        assert!(automaton.run("".chars()));
        assert!(automaton.run("a".chars()));
        assert!(automaton.run("ababab".chars()));
        // `c` is rejected when running, not when compiling.
        assert!(!automaton.run("abc".chars()));
    }

    assert_eq!(1, minimized.states().len());
}

#[test]
fn test_star_in_middle() {
    let compiler = Compiler::new(['a', 'b']);
    let enfa = compiler.compile("ab*a").unwrap();
    let dfa = enfa.to_dfa().minimize();

    for input in ["aba", "aa", "abbbba"] {
        assert!(enfa.run(input.chars()), "{}", input);
        assert!(dfa.run(input.chars()), "{}", input);
    }
    for input in ["aabb", "ab", "a", "", "baa"] {
        assert!(!enfa.run(input.chars()), "{}", input);
        assert!(!dfa.run(input.chars()), "{}", input);
    }
}

#[test]
fn test_single_literal() {
    let enfa = compile("a", ['a', 'b']).unwrap();

    assert!(enfa.run("a".chars()));
    assert!(!enfa.run("b".chars()));
    assert!(!enfa.run("aa".chars()));
    assert!(!enfa.run("ab".chars()));
}
