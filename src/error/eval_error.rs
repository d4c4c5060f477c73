#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents every way a single evaluation can fail.
///
/// Positions are byte offsets into the evaluated string.
pub enum EvalError {
    /// A character appeared where the grammar expected something else.
    ///
    /// This also covers input left over after a complete expression and an
    /// empty factor at the end of the input.
    UnexpectedCharacter {
        /// The offending character, or `None` at the end of the input.
        found:    Option<char>,
        /// Where the character was found.
        position: usize,
    },
    /// A run of letters did not name a known function.
    UnknownFunction {
        /// The identifier as written.
        name:     String,
        /// Where the identifier starts.
        position: usize,
    },
    /// A run of digits and dots could not be converted to a number.
    MalformedNumber {
        /// The literal as written.
        literal:  String,
        /// Where the literal starts.
        position: usize,
    },
    /// Factorial was applied to a value that truncates to a negative integer.
    NegativeFactorial {
        /// The truncated argument.
        value: i32,
    },
    /// The expression nests prefixes, groups or bars deeper than allowed.
    NestingTooDeep {
        /// The configured nesting limit.
        limit:    usize,
        /// Where the limit was crossed.
        position: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found: Some(c), position } => {
                write!(f, "Unexpected character '{c}' at position {position}.")
            },
            Self::UnexpectedCharacter { found: None, .. } => write!(f, "Unexpected end of input."),
            Self::UnknownFunction { name, position } => {
                write!(f, "Unknown function '{name}' at position {position}.")
            },
            Self::MalformedNumber { literal, position } => {
                write!(f, "Malformed number '{literal}' at position {position}.")
            },
            Self::NegativeFactorial { value } => write!(f,
                                                        "Factorial is not defined for negative numbers, but found {value}."),
            Self::NestingTooDeep { limit, position } => write!(f,
                                                               "Expression nests deeper than {limit} levels at position {position}."),
        }
    }
}

impl std::error::Error for EvalError {}
