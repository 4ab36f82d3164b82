use fare_compiler::{compile, CompileError, Span};

const AB: [char; 2] = ['a', 'b'];

macro_rules! run_invalid_tests {
    ($exprs:expr) => {{
        $exprs.iter().for_each(|&expr| {
            compile(expr, AB).unwrap_err();
        });
    }};
}

#[test]
fn test_malformed() {
    let exprs = [
        "(", ")", "a(", "(()", "*", "|", "*a", "**", "a|", "a)*", "(ab", "a**", "(*)", "(a|)",
        "|b", "a||b", "(|)", "c", "a(c|b)",
    ];
    run_invalid_tests!(&exprs);
}

#[test]
fn test_unbalanced() {
    assert_eq!(
        Err(CompileError::UnbalancedParentheses {
            span: Span::new(2, 3, ")")
        }),
        compile("ab)", AB)
    );
    assert_eq!(
        Err(CompileError::UnbalancedParentheses {
            span: Span::new(1, 4, "(ab")
        }),
        compile("a(ab", AB)
    );
}

#[test]
fn test_nothing_to_repeat() {
    assert_eq!(
        Err(CompileError::NothingToRepeat {
            span: Span::new(0, 1, "*")
        }),
        compile("*a", AB)
    );
    assert_eq!(
        Err(CompileError::NothingToRepeat {
            span: Span::new(2, 3, "*")
        }),
        compile("a**", AB)
    );
}

#[test]
fn test_empty_alternative() {
    assert_eq!(
        Err(CompileError::EmptyAlternative {
            span: Span::new(2, 2, "")
        }),
        compile("a|", AB)
    );
    assert_eq!(
        Err(CompileError::EmptyAlternative {
            span: Span::new(4, 4, "")
        }),
        compile("b(a|)", AB)
    );
}

#[test]
fn test_unknown_symbol() {
    let err = compile("ab(c)*", AB).unwrap_err();

    assert_eq!(
        CompileError::UnknownSymbol {
            span: Span::new(3, 4, "c"),
            symbol: 'c'
        },
        err
    );
    assert_eq!(3, err.span().start());
    assert_eq!(
        r#"symbol 'c' is not part of the alphabet "c" at 3..4"#,
        err.to_string()
    );
}

#[test]
fn test_display() {
    let err = compile("a**", AB).unwrap_err();
    assert_eq!(r#"nothing to repeat "*" at 2..3"#, err.to_string());

    let err = compile("(a", AB).unwrap_err();
    assert_eq!(r#"unbalanced parentheses "(a" at 0..2"#, err.to_string());
}
