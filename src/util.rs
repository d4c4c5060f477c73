/// Numeric conversion helpers.
///
/// This module holds the integer conversions the calculator relies on. They
/// follow 32-bit integer semantics: truncation saturates at the `i32` range
/// and products wrap on overflow.
pub mod num;
