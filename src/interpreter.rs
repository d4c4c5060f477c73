/// The function module holds the builtin function table.
///
/// Every builtin takes one `f64` and returns one `f64`. Trigonometric
/// functions take degrees and inverse trigonometric functions return
/// degrees; the radian conversion happens inside each builtin and nowhere
/// else.
///
/// # Responsibilities
/// - Implements each builtin as a plain function.
/// - Provides name lookup for prefix function application.
pub mod function;
/// The options module configures evaluation.
///
/// # Responsibilities
/// - Selects between the reference and the extended grammar.
/// - Bounds the nesting depth of a single expression.
pub mod options;
/// The parser module evaluates expressions while it scans them.
///
/// Parsing and evaluation happen in one left-to-right pass: each production
/// returns the value of the text it consumed.
///
/// # Responsibilities
/// - Implements the `expression`, `term` and `factor` productions.
/// - Applies prefix functions, unary signs and, in the extended grammar,
///   postfix operators.
/// - Reports unexpected characters, unknown functions and malformed numbers
///   with their positions.
pub mod parser;
/// The scanner module provides the single-pass cursor over the input.
///
/// The scanner is pulled one unit at a time by the parser; no token list is
/// ever materialized.
///
/// # Responsibilities
/// - Recognizes numbers, identifiers and single-character operators.
/// - Skips spaces between units and nothing else.
/// - Describes the character under the cursor when the parser rejects it.
pub mod scanner;
