/// Default limit on nested factors (prefix signs, groups, function prefixes
/// and absolute-value bars) in one expression.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Selects which grammar the parser accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grammar {
    /// The calculator's historical grammar.
    ///
    /// Factorial, percent and absolute value exist in the function table but
    /// no production reaches them, so a bare `!`, `%` or `|` is always an
    /// unexpected character.
    #[default]
    Reference,
    /// The historical grammar plus postfix `!` and `%` and enclosing `|x|`.
    Extended,
}

/// Configuration shared by every evaluation an [`Evaluator`] performs.
///
/// [`Evaluator`]: crate::interpreter::parser::core::Evaluator
///
/// # Example
/// ```
/// use scical::interpreter::options::{EvalOptions, Grammar};
///
/// let options = EvalOptions::default().with_grammar(Grammar::Extended)
///                                     .with_max_depth(64);
/// assert_eq!(options.grammar, Grammar::Extended);
/// assert_eq!(options.max_depth, 64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalOptions {
    /// Grammar variant to parse with.
    pub grammar:   Grammar,
    /// Deepest nesting of factors accepted before failing.
    pub max_depth: usize,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self { grammar:   Grammar::Reference,
               max_depth: DEFAULT_MAX_DEPTH, }
    }
}

impl EvalOptions {
    /// Returns a copy using `grammar`.
    #[must_use]
    pub const fn with_grammar(mut self, grammar: Grammar) -> Self {
        self.grammar = grammar;
        self
    }

    /// Returns a copy using `max_depth` as the nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
