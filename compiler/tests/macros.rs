#[allow(unused_macros)]

macro_rules! run_tests {
    ($alphabet:expr, $exprs:expr, $valids:expr, $invalids:expr) => {{
        $exprs.iter().for_each(|&expr| {
            let enfa = compile(expr, $alphabet).unwrap();
            let dfa = enfa.to_dfa().minimize();
            $valids.iter().for_each(|&s| {
                assert!(
                    enfa.run(s.chars()),
                    r#""{}" failed to match "{}" using enfa"#,
                    expr,
                    s
                );

                assert!(
                    dfa.run(s.chars()),
                    r#""{}" failed to match "{}" using dfa"#,
                    expr,
                    s
                );
            });
            $invalids.iter().for_each(|&s| {
                assert_eq!(
                    enfa.run(s.chars()),
                    false,
                    r#""{}" matched "{}" using enfa"#,
                    expr,
                    s
                );
                assert_eq!(
                    dfa.run(s.chars()),
                    false,
                    r#""{}" matched "{}" using dfa"#,
                    expr,
                    s
                );
            });
        })
    }};
}
