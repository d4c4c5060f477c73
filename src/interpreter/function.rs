/// Builtin function implementations.
///
/// One plain `f64` function per calculator key: roots, base-10 logarithm,
/// degree-based trigonometry and its inverses, factorial, percent and
/// absolute value.
pub mod builtin;
/// Builtin lookup table.
///
/// Maps function names to their handlers.
pub mod core;
