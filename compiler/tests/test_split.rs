use fare_compiler::{Span, Syntax};

fn texts(spans: Vec<Span<'_>>) -> Vec<&str> {
    spans.iter().map(|s| s.text()).collect()
}

#[test]
fn test_concat_split() {
    let syntax = Syntax::new();
    let split = |s| texts(syntax.concat_split(Span::whole(s)));

    assert_eq!(vec!["a", "b"], split("ab"));
    assert_eq!(vec!["a*"], split("a*"));
    assert_eq!(vec![".", ".", "."], split("..."));
    assert_eq!(
        vec!["(abc)*", "(a|b|c)", "(cba)*", "a", "b", "c"],
        split("(abc)*(a|b|c)(cba)*abc")
    );
    assert_eq!(vec!["((a)b)*", "(c(d))"], split("((a)b)*(c(d))"));
    assert_eq!(vec!["a*", "*"], split("a**"));
    assert!(split("").is_empty());
}

#[test]
fn test_union_split() {
    let syntax = Syntax::new();
    let split = |s| texts(syntax.union_split(Span::whole(s)));

    assert_eq!(vec!["a", "b", "c"], split("(a|b|c)"));
    assert_eq!(vec!["a", "ab", "(b)*"], split("(a|ab|(b)*)"));
    assert_eq!(vec!["(a|b)", "c"], split("((a|b)|c)"));
    assert_eq!(vec!["ab"], split("(ab)"));
}

#[test]
fn test_legacy_union_split() {
    let syntax = Syntax::new().with_alternation('+');
    let split = |s| texts(syntax.union_split(Span::whole(s)));

    assert_eq!(vec!["a", "b", "c"], split("(a+b+c)"));
    assert_eq!(vec!["a", "ab", "(b)*"], split("(a+ab+(b)*)"));
}

#[test]
fn test_split_top_level() {
    let syntax = Syntax::new();
    let spans = syntax.split_top_level(Span::whole("a|(b|c)d|"));

    assert_eq!(vec!["a", "(b|c)d", ""], texts(spans.clone()));
    assert_eq!(vec![0, 2, 9], spans.iter().map(|s| s.start()).collect::<Vec<_>>());
}

#[test]
fn test_remove_outer_bracket() {
    let syntax = Syntax::new();
    let strip = |s| syntax.remove_outer_bracket(Span::whole(s)).map(|s| s.text());

    assert_eq!(Some("ab"), strip("(ab)"));
    assert_eq!(Some("(a|b)"), strip("((a|b))"));
    assert_eq!(Some(""), strip("()"));
    assert_eq!(Some("(a)(b)"), strip("((a)(b))"));
    assert_eq!(None, strip("(a|b)"));
    assert_eq!(None, strip("(a)(b)"));
    assert_eq!(None, strip("(a)*"));
    assert_eq!(None, strip("ab"));
}

#[test]
fn test_is_group() {
    let syntax = Syntax::new();

    assert!(syntax.is_group(Span::whole("(a|b)")));
    assert!(syntax.is_group(Span::whole("((a)(b))")));
    assert!(!syntax.is_group(Span::whole("(a)(b)")));
    assert!(!syntax.is_group(Span::whole("")));
}
