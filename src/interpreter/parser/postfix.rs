use crate::interpreter::{
    function::builtin::{abs, factorial, percent},
    parser::core::{EvalResult, Parser},
    scanner::Token,
};

impl Parser<'_> {
    /// Parses a primary followed by any number of postfix operators.
    ///
    /// Operators apply left to right, so `3!%` is `(3!)%`. A prefix sign
    /// binds looser than the postfix operators: `-4!` is `-(4!)`.
    ///
    /// Grammar:
    /// ```text
    ///     postfix := primary ("!" | "%")*
    /// ```
    ///
    /// # Errors
    /// Propagates errors of the primary and `NegativeFactorial`.
    pub(super) fn parse_postfix(&mut self) -> EvalResult<f64> {
        let mut x = self.parse_primary()?;
        loop {
            if self.scanner.eat(Token::Bang) {
                x = factorial(x)?;
            } else if self.scanner.eat(Token::Percent) {
                x = percent(x)?;
            } else {
                return Ok(x);
            }
        }
    }

    /// Parses an absolute-value group. The cursor sits on the opening bar.
    ///
    /// Unlike parentheses, the closing bar is mandatory.
    ///
    /// Grammar:
    /// ```text
    ///     bars := "|" expression "|"
    /// ```
    ///
    /// # Errors
    /// `UnexpectedCharacter` at whatever follows the inner expression if it is
    /// not `|`.
    pub(super) fn parse_bars(&mut self) -> EvalResult<f64> {
        self.scanner.advance();
        let x = self.parse_expression()?;

        if !self.scanner.eat(Token::Pipe) {
            return Err(self.scanner.unexpected());
        }
        abs(x)
    }
}
