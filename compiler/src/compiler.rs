use crate::error::{CompileError, CompileResult, Span};
use crate::syntax::{Syntax, GROUP_CLOSE, GROUP_OPEN, REPEAT};

use automata::{Alphabet, Automaton, ENFA};

/// Compile `pattern` into an eNFA over `alphabet`, using the default [`Syntax`].
///
/// ```
/// use automata::Automaton;
///
/// let enfa = fare_compiler::compile("(a|b)*a", ['a', 'b']).unwrap();
/// assert!(enfa.run("abba".chars()));
/// assert!(!enfa.run("ab".chars()));
/// ```
#[inline]
pub fn compile<A>(pattern: &str, alphabet: A) -> CompileResult<'_, ENFA<char>>
where
    A: IntoIterator<Item = char>,
{
    Compiler::new(alphabet).compile(pattern)
}

/// A recursive-descent compiler from patterns to eNFAs.
///
/// The pattern is classified purely by its shape: a pattern is a sequence of terms, optionally
/// separated into alternatives; a term is a literal symbol, the wildcard or a parenthesized
/// group, each optionally followed by `*`.
#[derive(Debug, Clone)]
pub struct Compiler {
    alphabet: Alphabet<char>,
    syntax: Syntax,
}

impl Compiler {
    /// Create a compiler for patterns over `alphabet`.
    #[inline]
    pub fn new<A>(alphabet: A) -> Self
    where
        A: IntoIterator<Item = char>,
    {
        Self {
            alphabet: alphabet.into_iter().collect(),
            syntax: Syntax::default(),
        }
    }

    #[inline]
    pub fn with_syntax(mut self, syntax: Syntax) -> Self {
        self.syntax = syntax;
        self
    }

    #[inline]
    pub fn alphabet(&self) -> &Alphabet<char> {
        &self.alphabet
    }

    #[inline]
    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    /// Compile a pattern into an eNFA recognizing the same language.
    ///
    /// The automaton is always built over the whole alphabet of the compiler, even when the
    /// pattern mentions only part of it.
    pub fn compile<'r>(&self, pattern: &'r str) -> CompileResult<'r, ENFA<char>> {
        let span = Span::whole(pattern);
        check_parentheses(span)?;

        let enfa = self.compile_expr(span)?;
        log::debug!(
            "compiled {:?} into an eNFA with {} states",
            pattern,
            enfa.states().len()
        );

        Ok(enfa)
    }

    fn compile_expr<'r>(&self, span: Span<'r>) -> CompileResult<'r, ENFA<char>> {
        if span.is_empty() {
            log::trace!("empty word {}", span);
            return Ok(self.empty_word());
        }

        let alternatives = self.syntax.split_top_level(span);
        if alternatives.len() > 1 {
            return self.compile_union(alternatives);
        }

        let terms = self.syntax.concat_split(span);
        if let [term] = terms[..] {
            return self.compile_term(term);
        }

        log::trace!("concatenation of {} terms {}", terms.len(), span);
        let automata = terms
            .into_iter()
            .map(|term| self.compile_term(term))
            .collect::<CompileResult<'r, Vec<_>>>()?;

        Ok(ENFA::serial_connect(&automata))
    }

    fn compile_union<'r>(&self, alternatives: Vec<Span<'r>>) -> CompileResult<'r, ENFA<char>> {
        log::trace!("union of {} alternatives", alternatives.len());

        let automata = alternatives
            .into_iter()
            .map(|alternative| {
                if alternative.is_empty() {
                    Err(CompileError::EmptyAlternative { span: alternative })
                } else {
                    self.compile_expr(alternative)
                }
            })
            .collect::<CompileResult<'r, Vec<_>>>()?;

        Ok(ENFA::parallel_connect(&automata))
    }

    fn compile_term<'r>(&self, term: Span<'r>) -> CompileResult<'r, ENFA<char>> {
        if let Some(operand) = term.text().strip_suffix(REPEAT) {
            if operand.is_empty() {
                return Err(CompileError::NothingToRepeat { span: term });
            }

            log::trace!("repeat {}", term);
            let operand = self.compile_term(term.sub(0, operand.len()))?;
            return Ok(ENFA::repeat(&operand));
        }

        if let Some(inner) = self.syntax.remove_outer_bracket(term) {
            log::trace!("group {}", term);
            return self.compile_expr(inner);
        }

        if self.syntax.is_group(term) {
            return self.compile_union(self.syntax.union_split(term));
        }

        let mut chars = term.text().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c == self.syntax.wildcard() => {
                log::trace!("wildcard {}", term);
                Ok(ENFA::any_word(self.alphabet.iter().copied()))
            }
            (Some(c), None) if self.syntax.is_reserved(c) => {
                Err(CompileError::InvalidPattern { span: term })
            }
            (Some(c), None) if !self.alphabet.contains(&c) => Err(CompileError::UnknownSymbol {
                span: term,
                symbol: c,
            }),
            (Some(c), None) => {
                log::trace!("literal {}", term);
                ENFA::one_word(c, self.alphabet.iter().copied())
                    .map_err(|source| CompileError::Malformed { span: term, source })
            }
            _ => Err(CompileError::InvalidPattern { span: term }),
        }
    }

    #[inline]
    fn empty_word(&self) -> ENFA<char> {
        ENFA::empty_word(self.alphabet.iter().copied())
    }
}

/// Fails on the first closing parenthesis without a group to close, or else on the innermost
/// group left open.
fn check_parentheses(span: Span<'_>) -> CompileResult<'_, ()> {
    let mut open = Vec::new();
    for (i, c) in span.text().char_indices() {
        match c {
            GROUP_OPEN => open.push(i),
            GROUP_CLOSE => {
                if open.pop().is_none() {
                    return Err(CompileError::UnbalancedParentheses {
                        span: span.sub(i, i + 1),
                    });
                }
            }
            _ => {}
        }
    }

    match open.pop() {
        Some(i) => Err(CompileError::UnbalancedParentheses {
            span: span.sub(i, span.len()),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::check_parentheses;
    use crate::{CompileError, Span};

    #[test]
    fn test_check_parentheses() {
        assert_eq!(Ok(()), check_parentheses(Span::whole("((a)(b))*")));
        assert_eq!(
            Err(CompileError::UnbalancedParentheses {
                span: Span::new(3, 4, ")")
            }),
            check_parentheses(Span::whole("(a))("))
        );
        assert_eq!(
            Err(CompileError::UnbalancedParentheses {
                span: Span::new(1, 4, "(ab")
            }),
            check_parentheses(Span::whole("((ab"))
        );
    }
}
