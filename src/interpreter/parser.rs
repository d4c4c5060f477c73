/// Core recursive-descent parsing and evaluation.
///
/// Defines the [`core::Evaluator`] entry point and the three mutually
/// recursive productions `expression`, `term` and `factor`. Values are
/// computed while scanning; no syntax tree is built.
pub mod core;

/// Postfix and enclosing productions of the extended grammar.
///
/// Handles `x!`, `x%` and `|x|`, which the reference grammar never reaches.
pub mod postfix;
