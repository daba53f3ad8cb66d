use crate::Span;

/// Tracks the current lexical position while a lexer walks its input.
///
/// `LexerCursor` advances over characters, updating a `Span` that covers
/// the text consumed since the last [`collapse`](LexerCursor::collapse).
/// Lexers call `collapse` at the start of each token and read `span` once
/// the token is complete.
#[derive(Debug, Clone, Default)]
pub struct LexerCursor {
    /// Number of characters consumed so far.
    pub pos: usize,
    /// Span of the text consumed since the last collapse.
    pub span: Span,
}

impl LexerCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by consuming the character `c`, updating the span end.
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.span.end.line += 1;
            self.span.end.column = 0;
        } else {
            self.span.end.column += 1;
        }
        self.pos += 1;
    }

    /// Start a new token at the current position.
    pub fn collapse(&mut self) {
        self.span.collapse();
    }

    /// The span from the start of the current token up to and including
    /// the next (not yet consumed) character.
    ///
    /// Used to report an offending character together with any partial
    /// token in front of it.
    pub fn span_through_next(&self) -> Span {
        let mut span = self.span;
        span.end.column += 1;
        span
    }
}
