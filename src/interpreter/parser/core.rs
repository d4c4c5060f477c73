use crate::{
    error::EvalError,
    interpreter::{
        function::core::resolve,
        options::{EvalOptions, Grammar},
        scanner::{Lookahead, Scanner, Token},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates arithmetic expressions.
///
/// An `Evaluator` holds only its [`EvalOptions`]. Every call to
/// [`Evaluator::evaluate`] builds its own scan cursor, so one evaluator can be
/// shared between threads and used for any number of concurrent calls.
///
/// # Example
/// ```
/// use scical::interpreter::{
///     options::{EvalOptions, Grammar},
///     parser::core::Evaluator,
/// };
///
/// let reference = Evaluator::default();
/// assert_eq!(reference.evaluate("2^3*2").unwrap(), 16.0);
/// assert!(reference.evaluate("5!").is_err());
///
/// let extended = Evaluator::new(EvalOptions::default().with_grammar(Grammar::Extended));
/// assert_eq!(extended.evaluate("5!").unwrap(), 120.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    options: EvalOptions,
}

impl Evaluator {
    /// Creates an evaluator using `options`.
    #[must_use]
    pub const fn new(options: EvalOptions) -> Self {
        Self { options }
    }

    /// Returns the options this evaluator was built with.
    #[must_use]
    pub const fn options(&self) -> EvalOptions {
        self.options
    }

    /// Evaluates `expression` to a single number.
    ///
    /// The whole input must form one expression. Anything left over after it
    /// is reported as an unexpected character.
    ///
    /// Domain errors of the numeric functions are not failures: `sqrt(0-1)`
    /// is `NaN` and `1/0` is infinity.
    ///
    /// # Errors
    /// - `UnexpectedCharacter` for input the grammar cannot continue with,
    ///   including empty input and trailing characters.
    /// - `UnknownFunction` for a letter run that names no builtin.
    /// - `MalformedNumber` for a digit-and-dot run that is not a number.
    /// - `NegativeFactorial` for factorial of a negative value.
    /// - `NestingTooDeep` once nesting exceeds the configured limit.
    pub fn evaluate(&self, expression: &str) -> EvalResult<f64> {
        let mut parser = Parser::new(expression, self.options);
        let value = parser.parse_expression()?;

        if !parser.scanner.is_at_end() {
            return Err(parser.scanner.unexpected());
        }
        Ok(value)
    }
}

/// Evaluates `expression` with the default options.
///
/// # Example
/// ```
/// use scical::{error::EvalError, evaluate};
///
/// assert_eq!(evaluate("sqrt(9+16)").unwrap(), 5.0);
/// assert!(matches!(evaluate("foo5"),
///                  Err(EvalError::UnknownFunction { ref name, .. }) if name == "foo"));
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    Evaluator::default().evaluate(expression)
}

/// Per-call parsing state: the scan cursor, the options in force and the
/// current nesting depth.
pub(super) struct Parser<'src> {
    pub(super) scanner: Scanner<'src>,
    pub(super) options: EvalOptions,
    depth:              usize,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str, options: EvalOptions) -> Self {
        Self { scanner: Scanner::new(source),
               options,
               depth: 0 }
    }

    /// Parses a chain of terms joined by `+` and `-`, left to right.
    ///
    /// Grammar: `expression := term (("+" | "-") term)*`
    pub(super) fn parse_expression(&mut self) -> EvalResult<f64> {
        let mut x = self.parse_term()?;
        loop {
            if self.scanner.eat(Token::Plus) {
                x += self.parse_term()?;
            } else if self.scanner.eat(Token::Minus) {
                x -= self.parse_term()?;
            } else {
                return Ok(x);
            }
        }
    }

    /// Parses a chain of factors joined by `*`, `/` and `^`.
    ///
    /// All three operators share one precedence level and apply strictly left
    /// to right, so `2^3*2` is `(2^3)*2` and `2^3^2` is `(2^3)^2`.
    ///
    /// Grammar: `term := factor (("*" | "/" | "^") factor)*`
    fn parse_term(&mut self) -> EvalResult<f64> {
        let mut x = self.parse_factor()?;
        loop {
            if self.scanner.eat(Token::Star) {
                x *= self.parse_factor()?;
            } else if self.scanner.eat(Token::Slash) {
                x /= self.parse_factor()?;
            } else if self.scanner.eat(Token::Caret) {
                x = x.powf(self.parse_factor()?);
            } else {
                return Ok(x);
            }
        }
    }

    /// Parses a factor, counting it against the nesting limit.
    ///
    /// Grammar:
    /// ```text
    ///     factor := ("+" | "-") factor
    ///             | primary              (reference grammar)
    ///             | postfix              (extended grammar)
    /// ```
    pub(super) fn parse_factor(&mut self) -> EvalResult<f64> {
        if self.depth >= self.options.max_depth {
            return Err(EvalError::NestingTooDeep { limit:    self.options.max_depth,
                                                   position: self.scanner.position(), });
        }

        self.depth += 1;
        let value = self.parse_signed();
        self.depth -= 1;
        value
    }

    fn parse_signed(&mut self) -> EvalResult<f64> {
        if self.scanner.eat(Token::Plus) {
            return self.parse_factor();
        }
        if self.scanner.eat(Token::Minus) {
            return Ok(-self.parse_factor()?);
        }

        match self.options.grammar {
            Grammar::Reference => self.parse_primary(),
            Grammar::Extended => self.parse_postfix(),
        }
    }

    /// Parses an atomic value.
    ///
    /// Grammar:
    /// ```text
    ///     primary := "(" expression ")"
    ///              | NUMBER
    ///              | IDENTIFIER factor
    ///              | "|" expression "|"   (extended grammar only)
    /// ```
    /// A missing `)` is tolerated: `(2+3` evaluates to `5`.
    ///
    /// The argument of a prefix function is parsed before its name is
    /// resolved, so an error inside the argument wins over an unknown name.
    /// A letter run spelling several names applies them right to left:
    /// `sinsqrt4` is `sin(sqrt(4))`.
    pub(super) fn parse_primary(&mut self) -> EvalResult<f64> {
        let start = self.scanner.position();

        match self.scanner.lookahead() {
            Lookahead::Token(Token::LParen) => {
                self.scanner.advance();
                let x = self.parse_expression()?;
                self.scanner.eat(Token::RParen);
                Ok(x)
            },
            Lookahead::Token(Token::Number) => {
                let literal = self.scanner.advance();
                literal.parse::<f64>()
                       .map_err(|_| EvalError::MalformedNumber { literal:  literal.to_string(),
                                                                 position: start, })
            },
            Lookahead::Token(Token::Identifier) => {
                let name = self.scanner.advance();
                let x = self.parse_factor()?;
                let chain = resolve(name).ok_or_else(|| EvalError::UnknownFunction {
                                              name:     name.to_string(),
                                              position: start,
                                          })?;
                chain.iter().rev().try_fold(x, |acc, func| func(acc))
            },
            Lookahead::Token(Token::Pipe) if self.options.grammar == Grammar::Extended => {
                self.parse_bars()
            },
            _ => Err(self.scanner.unexpected()),
        }
    }
}
