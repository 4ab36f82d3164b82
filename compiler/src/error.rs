use std::fmt;

use automata::MalformedAutomatonError;

/// Alias for [`Result`] for [`CompileError`].
pub type CompileResult<'r, T> = std::result::Result<T, CompileError<'r>>;

/// Error returned when a pattern cannot be compiled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError<'r> {
    /// The text does not form any known construct.
    #[error("invalid pattern {span}")]
    InvalidPattern { span: Span<'r> },

    /// A group is never closed, or a closing parenthesis has no group to close.
    #[error("unbalanced parentheses {span}")]
    UnbalancedParentheses { span: Span<'r> },

    /// A `*` is not preceded by anything it could apply to.
    #[error("nothing to repeat {span}")]
    NothingToRepeat { span: Span<'r> },

    #[error("empty alternative {span}")]
    EmptyAlternative { span: Span<'r> },

    /// A literal symbol is not part of the alphabet the pattern is compiled over.
    #[error("symbol {symbol:?} is not part of the alphabet {span}")]
    UnknownSymbol { span: Span<'r>, symbol: char },

    #[error("could not build automaton for {span}")]
    Malformed {
        span: Span<'r>,
        source: MalformedAutomatonError<char>,
    },
}

impl<'r> CompileError<'r> {
    /// The part of the pattern the error was detected in.
    #[inline]
    pub fn span(&self) -> Span<'r> {
        match self {
            CompileError::InvalidPattern { span }
            | CompileError::UnbalancedParentheses { span }
            | CompileError::NothingToRepeat { span }
            | CompileError::EmptyAlternative { span }
            | CompileError::UnknownSymbol { span, .. }
            | CompileError::Malformed { span, .. } => *span,
        }
    }
}

/// A piece of a pattern, located by byte offsets into the whole pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span<'r> {
    start: usize,
    end: usize,

    text: &'r str,
}

impl<'r> Span<'r> {
    #[inline]
    pub fn new(start: usize, end: usize, text: &'r str) -> Self {
        Self { start, end, text }
    }

    /// A span covering all of `text`.
    #[inline]
    pub fn whole(text: &'r str) -> Self {
        Self::new(0, text.len(), text)
    }

    /// The piece of this span between byte offsets `start` and `end`, relative to its own start.
    #[inline]
    pub fn sub(&self, start: usize, end: usize) -> Self {
        Self::new(self.start + start, self.start + end, &self.text[start..end])
    }

    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    #[inline]
    pub fn text(&self) -> &'r str {
        self.text
    }

    /// Length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Span<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} at {}..{}", self.text, self.start, self.end)
    }
}
