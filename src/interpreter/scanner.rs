use std::ops::Range;

use logos::{Lexer, Logos};

use crate::error::EvalError;

/// Represents a lexical unit recognized by the scanner.
///
/// Runs of spaces between units are skipped. Nothing else is: a tab, an
/// uppercase letter or any other character outside these patterns surfaces
/// as [`Lookahead::Invalid`].
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r" +")]
pub enum Token {
    /// A maximal run of digits and dots, such as `3.14`, `.5` or `1.2.3`.
    ///
    /// The run is not validated here; conversion happens in the parser.
    #[regex(r"[0-9.]+")]
    Number,
    /// A maximal run of lowercase ASCII letters, such as `sqrt` or `foo`.
    #[regex(r"[a-z]+")]
    Identifier,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `!`
    #[token("!")]
    Bang,
    /// `%`
    #[token("%")]
    Percent,
    /// `|`
    #[token("|")]
    Pipe,
}

/// What currently sits under the scan cursor.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lookahead {
    /// A recognized token.
    Token(Token),
    /// A character no token pattern accepts.
    Invalid,
    /// The input is exhausted.
    End,
}

/// A single-pass cursor over one input string.
///
/// The scanner holds exactly one unit of lookahead and never moves
/// backwards. It is created fresh for every evaluation and dropped with it.
///
/// # Example
/// ```
/// use scical::interpreter::scanner::{Lookahead, Scanner, Token};
///
/// let mut scanner = Scanner::new("12 + x");
/// assert_eq!(scanner.advance(), "12");
/// assert!(scanner.eat(Token::Plus));
/// assert_eq!(scanner.lookahead(), Lookahead::Token(Token::Identifier));
/// assert_eq!(scanner.position(), 5);
/// ```
pub struct Scanner<'src> {
    source:    &'src str,
    lexer:     Lexer<'src, Token>,
    lookahead: Lookahead,
    span:      Range<usize>,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned on the first unit of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        let mut lexer = Token::lexer(source);
        let (lookahead, span) = pull(&mut lexer, source.len());

        Self { source,
               lexer,
               lookahead,
               span }
    }

    /// Returns the unit under the cursor without consuming it.
    #[must_use]
    pub const fn lookahead(&self) -> Lookahead {
        self.lookahead
    }

    /// Returns the byte offset of the unit under the cursor.
    ///
    /// At the end of input this is the length of the source.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.span.start
    }

    /// Returns `true` once every unit of the input has been consumed.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        matches!(self.lookahead, Lookahead::End)
    }

    /// Consumes the lookahead if it is `token`.
    ///
    /// # Returns
    /// `true` if the token was consumed, `false` if the cursor did not move.
    pub fn eat(&mut self, token: Token) -> bool {
        if self.lookahead == Lookahead::Token(token) {
            self.advance();
            return true;
        }
        false
    }

    /// Consumes the lookahead unconditionally and returns its source text.
    ///
    /// At the end of input this returns an empty slice and leaves the cursor
    /// where it is.
    pub fn advance(&mut self) -> &'src str {
        let text = &self.source[self.span.clone()];
        if self.lookahead != Lookahead::End {
            (self.lookahead, self.span) = pull(&mut self.lexer, self.source.len());
        }
        text
    }

    /// Builds the error describing the character under the cursor.
    ///
    /// # Returns
    /// [`EvalError::UnexpectedCharacter`] naming the first character of the
    /// lookahead, or no character at the end of input.
    #[must_use]
    pub fn unexpected(&self) -> EvalError {
        let found = match self.lookahead {
            Lookahead::End => None,
            _ => self.source[self.span.start..].chars().next(),
        };

        EvalError::UnexpectedCharacter { found,
                                         position: self.span.start }
    }
}

/// Reads the next unit from the lexer together with its byte span.
fn pull(lexer: &mut Lexer<'_, Token>, len: usize) -> (Lookahead, Range<usize>) {
    match lexer.next() {
        Some(Ok(token)) => (Lookahead::Token(token), lexer.span()),
        Some(Err(())) => (Lookahead::Invalid, lexer.span()),
        None => (Lookahead::End, len..len),
    }
}
