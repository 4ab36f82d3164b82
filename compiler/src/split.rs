use crate::error::Span;
use crate::syntax::{Syntax, GROUP_CLOSE, GROUP_OPEN, REPEAT};

/// Byte offset of the parenthesis closing the group that `text` opens with, if it opens with one.
fn matching_close(text: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    if chars.next()?.1 != GROUP_OPEN {
        return None;
    }

    let mut depth = 1usize;
    for (i, c) in chars {
        match c {
            GROUP_OPEN => depth += 1,
            GROUP_CLOSE => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }

    None
}

impl Syntax {
    /// Byte offsets of the alternation operators of `text` sitting at nesting depth `level`.
    fn alternations(&self, text: &str, level: usize) -> Vec<usize> {
        let mut depth = 0usize;
        let mut found = Vec::new();
        for (i, c) in text.char_indices() {
            match c {
                GROUP_OPEN => depth += 1,
                GROUP_CLOSE => depth = depth.saturating_sub(1),
                c if c == self.alternation() && depth == level => found.push(i),
                _ => {}
            }
        }

        found
    }

    /// Checks whether `span` is one parenthesized group, such as `(ab)` or `(a|b)`, but not `(a)(b)`
    /// or `(a)*`.
    #[inline]
    pub fn is_group(&self, span: Span<'_>) -> bool {
        !span.is_empty() && matching_close(span.text()) == Some(span.len() - 1)
    }

    /// Strips the parentheses around `span` when they enclose all of it and contain no
    /// alternation of their own.
    ///
    /// `(ab)` becomes `ab` and `((a|b))` becomes `(a|b)`, while `(a|b)`, `(a)(b)` and `ab` are left
    /// alone.
    pub fn remove_outer_bracket<'r>(&self, span: Span<'r>) -> Option<Span<'r>> {
        if self.is_group(span) && self.alternations(span.text(), 1).is_empty() {
            Some(span.sub(1, span.len() - 1))
        } else {
            None
        }
    }

    /// Splits `span` into its sequence of terms. A parenthesized group, however deeply nested, is
    /// a single term, and a `*` right after a term belongs to it.
    ///
    /// `(abc)*(a|b)c*.` splits into `(abc)*`, `(a|b)`, `c*` and `.`.
    pub fn concat_split<'r>(&self, span: Span<'r>) -> Vec<Span<'r>> {
        let text = span.text();
        let mut terms = Vec::new();
        let mut chars = text.char_indices().peekable();

        while let Some((start, c)) = chars.next() {
            let mut end = start + c.len_utf8();

            if c == GROUP_OPEN {
                let mut depth = 1usize;
                while depth > 0 {
                    match chars.next() {
                        Some((i, c)) => {
                            end = i + c.len_utf8();
                            match c {
                                GROUP_OPEN => depth += 1,
                                GROUP_CLOSE => depth -= 1,
                                _ => {}
                            }
                        }
                        None => break,
                    }
                }
            }

            if let Some(&(i, REPEAT)) = chars.peek() {
                chars.next();
                end = i + REPEAT.len_utf8();
            }

            terms.push(span.sub(start, end));
        }

        terms
    }

    /// Splits `span` on every alternation operator outside of parentheses. Without such an
    /// operator, the result is `span` alone.
    ///
    /// `a|(b|c)d|` splits into `a`, `(b|c)d` and an empty alternative.
    pub fn split_top_level<'r>(&self, span: Span<'r>) -> Vec<Span<'r>> {
        let width = self.alternation().len_utf8();
        let mut alternatives = Vec::new();
        let mut start = 0;
        for i in self.alternations(span.text(), 0) {
            alternatives.push(span.sub(start, i));
            start = i + width;
        }
        alternatives.push(span.sub(start, span.len()));

        alternatives
    }

    /// Splits the inside of the group `span` into its alternatives. Alternation operators nested
    /// in inner groups are left alone.
    ///
    /// `(a|ab|(b|c)*)` splits into `a`, `ab` and `(b|c)*`.
    ///
    /// `span` must be a group; see [`Syntax::is_group`].
    pub fn union_split<'r>(&self, span: Span<'r>) -> Vec<Span<'r>> {
        self.split_top_level(span.sub(1, span.len() - 1))
    }
}
