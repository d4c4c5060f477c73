//! # scical
//!
//! scical is the engine of a small scientific calculator. It evaluates a flat
//! expression string such as `sqrt(9+16)*2` to a single `f64` in one
//! left-to-right pass, with trigonometry in degrees.
//!
//! Supported syntax:
//! - `+` and `-` (lowest precedence), left to right.
//! - `*`, `/` and `^`, all at the same precedence and left to right, so
//!   `2^3*2` is `16` and `2^3^2` is `64`.
//! - Prefix `+` and `-`, parentheses, and numbers made of digits and dots.
//! - Prefix functions written directly before their argument: `sqrt9`,
//!   `sqrt(9+16)`, `sinsqrt4`. Available: `sqrt`, `cbrt`, `log`, `sin`,
//!   `cos`, `tan`, `asin`, `acos`, `atan`.
//! - With [`Grammar::Extended`] only: postfix `!` and `%` and `|x|`.
//!
//! [`Grammar::Extended`]: interpreter::options::Grammar::Extended

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides the error types for evaluation and background dispatch.
///
/// # Responsibilities
/// - Defines one closed enum per failure domain.
/// - Carries the offending text, value and position instead of a formatted
///   message, so callers can branch on the kind.
/// - Implements `Display` and `std::error::Error` for user-facing reporting.
pub mod error;
/// Scans, parses and evaluates expressions.
///
/// This module contains everything involved in turning one string into one
/// number: the scanner, the recursive-descent parser, the builtin function
/// table and the evaluation options.
///
/// # Responsibilities
/// - Provides the [`interpreter::parser::core::Evaluator`] entry point.
/// - Keeps all per-call state local to the call.
pub mod interpreter;
/// Headless calculator front panel.
///
/// Models the caller side of the evaluator: a display assembled from key
/// presses, one submission at a time evaluated on a worker pool, and the
/// answer rendered back into the display.
///
/// # Responsibilities
/// - Maps key labels to display edits.
/// - Runs evaluations off the caller's thread.
/// - Disables input while an answer is pending.
pub mod session;
/// Integer conversion helpers used by the builtins.
pub mod util;

pub use interpreter::{
    options::{EvalOptions, Grammar},
    parser::core::{Evaluator, evaluate},
};
