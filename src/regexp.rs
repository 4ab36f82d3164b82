use automata::{Automaton, DFA, ENFA};
use fare_compiler::{CompileResult, Compiler};

/// A compiled regular expression for matching strings. It may be used to determine if given
/// strings are within the language described by the regular expression.
#[derive(Debug, Clone)]
pub struct RegExp<E: Engine> {
    /// The regular expression represented by this structure.
    expr: String,
    /// The compiled backend of the regular expression used to evaluate input strings.
    engine: E,
}

impl<E: Engine> RegExp<E> {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.expr
    }

    #[inline]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Determine if the given input string is within the language described by the regular
    /// expression. Inputs containing symbols outside of the alphabet never match.
    #[inline]
    pub fn is_match(&self, input: &str) -> bool {
        self.engine.is_match(input)
    }
}

impl RegExp<ENFA<char>> {
    /// Create a compiled regular expression over `alphabet` that uses an eNFA to evaluate input
    /// strings.
    #[inline]
    pub fn new_nfa<A>(expr: &str, alphabet: A) -> CompileResult<'_, Self>
    where
        A: IntoIterator<Item = char>,
    {
        Self::with_compiler(expr, &Compiler::new(alphabet))
    }

    /// Create a compiled regular expression that uses an eNFA, with the alphabet and syntax of
    /// `compiler`.
    #[inline]
    pub fn with_compiler<'r>(expr: &'r str, compiler: &Compiler) -> CompileResult<'r, Self> {
        let engine = compiler.compile(expr)?;

        Ok(RegExp {
            expr: expr.to_owned(),
            engine,
        })
    }

    /// Switch to a minimized DFA engine.
    #[inline]
    pub fn with_dfa(self) -> RegExp<DFA<char>> {
        let engine = self.engine.to_dfa().minimize();
        log::debug!(
            "{:?} uses a DFA with {} states",
            self.expr,
            engine.states().len()
        );

        RegExp {
            expr: self.expr,
            engine,
        }
    }
}

impl RegExp<DFA<char>> {
    /// Create a compiled regular expression over `alphabet` that uses a minimized DFA to evaluate
    /// input strings.
    #[inline]
    pub fn new<A>(expr: &str, alphabet: A) -> CompileResult<'_, Self>
    where
        A: IntoIterator<Item = char>,
    {
        Ok(RegExp::new_nfa(expr, alphabet)?.with_dfa())
    }
}

/// A trait implemented by regular expression backends, used to evaluate input strings.
pub trait Engine {
    fn is_match(&self, input: &str) -> bool;
}

impl<A> Engine for A
where
    A: Automaton<char>,
{
    #[inline]
    fn is_match(&self, input: &str) -> bool {
        self.run(input.chars())
    }
}
