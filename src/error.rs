/// Dispatch errors.
///
/// Raised by the worker pool when an evaluation cannot be delivered, for
/// example because the workers have already shut down.
pub mod dispatch_error;
/// Evaluation errors.
///
/// Defines every failure a single evaluation can report: unexpected
/// characters, unknown function names, malformed numeric literals, negative
/// factorials and runaway nesting. Each variant carries the offending text or
/// value and, where meaningful, its byte position in the input.
pub mod eval_error;

pub use dispatch_error::DispatchError;
pub use eval_error::EvalError;
