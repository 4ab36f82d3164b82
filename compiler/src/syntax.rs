/// Opens a group.
pub const GROUP_OPEN: char = '(';
/// Closes a group.
pub const GROUP_CLOSE: char = ')';
/// Postfix Kleene star.
pub const REPEAT: char = '*';

/// The configurable operator characters of the pattern language.
///
/// Grouping and repetition always use `(`, `)` and `*`. The alternation operator and the
/// wildcard default to `|` and `.`; a character chosen as either can no longer be matched
/// literally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Syntax {
    alternation: char,
    wildcard: char,
}

impl Default for Syntax {
    #[inline]
    fn default() -> Self {
        Self {
            alternation: '|',
            wildcard: '.',
        }
    }
}

impl Syntax {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `alternation` to separate alternatives, e.g. `+` for patterns like `(a+b)*`.
    #[inline]
    pub fn with_alternation(mut self, alternation: char) -> Self {
        self.alternation = alternation;
        self
    }

    /// Use `wildcard` to match any single symbol of the alphabet.
    #[inline]
    pub fn with_wildcard(mut self, wildcard: char) -> Self {
        self.wildcard = wildcard;
        self
    }

    #[inline]
    pub fn alternation(&self) -> char {
        self.alternation
    }

    #[inline]
    pub fn wildcard(&self) -> char {
        self.wildcard
    }

    /// Checks whether `c` is an operator that can never stand for itself.
    #[inline]
    pub fn is_reserved(&self, c: char) -> bool {
        matches!(c, GROUP_OPEN | GROUP_CLOSE | REPEAT) || c == self.alternation
    }
}
