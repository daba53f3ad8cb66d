//! # Expression Lexer
//!
//! Converts one line of text into a sequence of [`ExprToken`]s terminated
//! by the end-marker, or fails with a [`LexError`].
//!
//! Recognized input:
//!
//! - a maximal run of decimal digits, or a letter followed by letters and
//!   decimal digits, becomes one [`Terminal::Id`] token;
//! - `=`, `+`, `*`, `(` and `)` each become their own terminal;
//! - the space character separates tokens and is otherwise skipped.
//!
//! Anything else is a lexical failure, and all tokens produced so far are
//! discarded. A digit run must end at a space, an operator, or the end of
//! input; any other character directly after it fails the scan on the spot.
//! An identifier run instead stops quietly at such a character without
//! producing a token, and the character is then rejected by the main scan.
//! Either way the error carries the unfinished run together with the
//! offending character.
//!
//! Character classes follow the Unicode general category: a digit is `Nd`,
//! a letter is one of `Lu`, `Ll`, `Lt`, `Lm`, `Lo`. Other numeric characters
//! (`½`, `²`, `Ⅻ`) are neither.
use crate::{ExprToken, Terminal};
use smartstring::alias::String;
use srparse::LexerCursor;
use std::iter::Peekable;
use std::mem;
use std::str::Chars;
use thiserror::Error;
use unicode_general_category::{GeneralCategory, get_general_category};

/// A lexical failure: an unrecognized character, reported together with
/// any unfinished run in front of it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input ({text})")]
pub struct LexError {
    /// The offending substring: the partial run plus the first bad character.
    pub text: String,
    /// Where the offending substring sits in the input.
    pub span: Option<srparse::Span>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexerStats {
    /// Characters consumed.
    pub chars: usize,
    /// Tokens produced, including the end-marker.
    pub tokens: usize,
}

/// The expression tokenizer.
///
/// # Example
/// ```rust
/// # use srparse_expr::{ExprLexer, Terminal};
/// let mut lexer = ExprLexer::new("a1 + 42");
/// let tokens = lexer.try_tokenize().unwrap();
/// let ids: Vec<Terminal> = tokens.iter().map(|t| t.token_id).collect();
/// assert_eq!(ids, [Terminal::Id, Terminal::Plus, Terminal::Id, Terminal::End]);
/// assert_eq!(lexer.stats().tokens, 4);
/// ```
#[derive(Debug, Clone)]
pub struct ExprLexer<'a> {
    input: &'a str,
    stats: LexerStats,
}

impl<'a> ExprLexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            stats: LexerStats::default(),
        }
    }

    /// Statistics of the most recent scan.
    pub fn stats(&self) -> &LexerStats {
        &self.stats
    }

    /// Scans the whole input.
    ///
    /// Every call rescans from the start, so repeated calls yield the same
    /// result.
    pub fn try_tokenize(&mut self) -> Result<Vec<ExprToken>, LexError> {
        let mut scanner = Scanner::new(self.input);
        let result = scanner.run();
        self.stats = scanner.stats;
        result
    }
}

/// Tokenizes `input` in one call.
pub fn tokenize(input: &str) -> Result<Vec<ExprToken>, LexError> {
    ExprLexer::new(input).try_tokenize()
}

fn is_digit(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::DecimalNumber)
}

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

fn is_separator(c: char) -> bool {
    c == ' ' || Terminal::from_operator(c).is_some()
}

struct Scanner<'a> {
    chars: Peekable<Chars<'a>>,
    cursor: LexerCursor,
    /// Text of an identifier run that stopped at an unrecognized character.
    pending: String,
    tokens: Vec<ExprToken>,
    stats: LexerStats,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
            cursor: LexerCursor::new(),
            pending: String::new(),
            tokens: Vec::new(),
            stats: LexerStats::default(),
        }
    }

    fn run(&mut self) -> Result<Vec<ExprToken>, LexError> {
        while let Some(&c) = self.chars.peek() {
            if self.pending.is_empty() {
                self.cursor.collapse();
            }
            if is_digit(c) {
                self.digit_run()?;
            } else if is_letter(c) {
                self.ident_run();
            } else if c == ' ' {
                self.bump();
            } else if let Some(terminal) = Terminal::from_operator(c) {
                self.bump();
                let mut text = String::new();
                text.push(c);
                self.emit(terminal, text);
            } else {
                let partial = mem::take(&mut self.pending);
                return Err(self.fail(partial, c));
            }
        }
        self.cursor.collapse();
        self.emit(Terminal::End, String::new());
        Ok(mem::take(&mut self.tokens))
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.cursor.advance(c);
        self.stats.chars += 1;
        Some(c)
    }

    fn digit_run(&mut self) -> Result<(), LexError> {
        let mut text = String::new();
        while let Some(&c) = self.chars.peek() {
            if is_digit(c) {
                self.bump();
                text.push(c);
            } else if is_separator(c) {
                break;
            } else {
                return Err(self.fail(text, c));
            }
        }
        self.emit(Terminal::Id, text);
        Ok(())
    }

    fn ident_run(&mut self) {
        let mut text = String::new();
        while let Some(&c) = self.chars.peek() {
            if is_letter(c) || is_digit(c) {
                self.bump();
                text.push(c);
            } else if is_separator(c) {
                break;
            } else {
                log::trace!("identifier {:?} stopped at {:?}", text, c);
                self.pending = text;
                return;
            }
        }
        self.emit(Terminal::Id, text);
    }

    fn emit(&mut self, token_id: Terminal, text: String) {
        let token = ExprToken {
            token_id,
            text,
            span: Some(self.cursor.span),
        };
        log::debug!("{}", token);
        self.tokens.push(token);
        self.stats.tokens += 1;
    }

    fn fail(&mut self, mut text: String, c: char) -> LexError {
        text.push(c);
        let span = self.cursor.span_through_next();
        log::debug!("invalid input {:?} at {}", text, span.display());
        self.tokens.clear();
        LexError {
            text,
            span: Some(span),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use srparse::span;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn ids(input: &str) -> Vec<Terminal> {
        tokenize(input)
            .unwrap()
            .iter()
            .map(|t| t.token_id)
            .collect()
    }

    fn texts(input: &str) -> Vec<std::string::String> {
        tokenize(input)
            .unwrap()
            .iter()
            .map(|t| t.text.to_string())
            .collect()
    }

    #[test]
    fn identifier_becomes_id() {
        init_logger();
        assert_eq!(ids("id"), [Terminal::Id, Terminal::End]);
        assert_eq!(texts("id"), ["id", ""]);
    }

    #[test]
    fn tokenizes_expression_with_spaces() {
        init_logger();
        assert_eq!(
            ids("id * ( id + id )"),
            [
                Terminal::Id,
                Terminal::Asterisk,
                Terminal::LeftParen,
                Terminal::Id,
                Terminal::Plus,
                Terminal::Id,
                Terminal::RightParen,
                Terminal::End
            ]
        );
    }

    #[test]
    fn runs_end_at_operators_without_spaces() {
        assert_eq!(texts("12+ab3*(x)"), ["12", "+", "ab3", "*", "(", "x", ")", ""]);
    }

    #[test]
    fn spans_cover_each_lexeme() {
        let tokens = tokenize(" 123 +abc").unwrap();
        assert_eq!(tokens[0].span, span!(0, 1, 0, 4));
        assert_eq!(tokens[1].span, span!(0, 5, 0, 6));
        assert_eq!(tokens[2].span, span!(0, 6, 0, 9));
        assert_eq!(tokens[3].span, span!(0, 9, 0, 9));
    }

    #[test]
    fn empty_and_blank_input_yield_only_end_marker() {
        assert_eq!(ids(""), [Terminal::End]);
        assert_eq!(ids("   "), [Terminal::End]);
    }

    #[test]
    fn equals_is_tokenized() {
        assert_eq!(
            ids("x = 1"),
            [Terminal::Id, Terminal::Equals, Terminal::Id, Terminal::End]
        );
    }

    #[test]
    fn unrecognized_character_fails_whole_scan() {
        init_logger();
        let err = tokenize("id # id").unwrap_err();
        assert_eq!(err.text.as_str(), "#");
        assert_eq!(err.span, span!(0, 3, 0, 4));
        assert_eq!(err.to_string(), "invalid input (#)");
    }

    #[test]
    fn digit_run_followed_by_letter_is_hard_failure() {
        let err = tokenize("1 + 12ab").unwrap_err();
        assert_eq!(err.text.as_str(), "12a");
        assert_eq!(err.span, span!(0, 4, 0, 7));
    }

    #[test]
    fn letters_may_be_followed_by_digits() {
        assert_eq!(texts("ab12"), ["ab12", ""]);
    }

    #[test]
    fn identifier_run_stops_then_scan_rejects_character() {
        let err = tokenize("1 + ab#").unwrap_err();
        assert_eq!(err.text.as_str(), "ab#");
        assert_eq!(err.span, span!(0, 4, 0, 7));
    }

    #[test]
    fn digit_run_rejects_decimal_point() {
        let err = tokenize("1.5").unwrap_err();
        assert_eq!(err.text.as_str(), "1.");
    }

    #[test]
    fn only_space_separates_tokens() {
        let err = tokenize("a\tb").unwrap_err();
        assert_eq!(err.text.as_str(), "a\t");
        assert!(tokenize("a\nb").is_err());
    }

    #[test]
    fn unicode_letters_and_decimal_digits_are_accepted() {
        // Ll, Lo and Nd (Arabic-Indic digits)
        assert_eq!(texts("été + 变量 + ٣٤"), ["été", "+", "变量", "+", "٣٤", ""]);
        assert_eq!(texts("x٣"), ["x٣", ""]);
    }

    #[test]
    fn vulgar_fraction_is_not_a_digit() {
        let err = tokenize("½").unwrap_err();
        assert_eq!(err.text.as_str(), "½");
        assert_eq!(err.span, span!(0, 0, 0, 1));
    }

    #[test]
    fn superscript_ends_identifier_run_and_fails() {
        let err = tokenize("x²").unwrap_err();
        assert_eq!(err.text.as_str(), "x²");
        assert_eq!(err.span, span!(0, 0, 0, 2));
    }

    #[test]
    fn superscript_after_digits_is_hard_failure() {
        let err = tokenize("2³").unwrap_err();
        assert_eq!(err.text.as_str(), "2³");
    }

    #[test]
    fn letter_numbers_are_not_letters() {
        let err = tokenize("Ⅻ + 1").unwrap_err();
        assert_eq!(err.text.as_str(), "Ⅻ");
    }

    #[test]
    fn stats_count_chars_and_tokens() {
        let mut lexer = ExprLexer::new("ab + 7");
        lexer.try_tokenize().unwrap();
        assert_eq!(
            lexer.stats(),
            &LexerStats {
                chars: 6,
                tokens: 4
            }
        );
    }

    #[test]
    fn rescanning_gives_identical_tokens() {
        let mut lexer = ExprLexer::new("(a+b)*c");
        let first = lexer.try_tokenize().unwrap();
        let second = lexer.try_tokenize().unwrap();
        assert_eq!(first, second);
        assert_eq!(lexer.stats().tokens, 8);
    }
}
