/// Session state and result rendering.
///
/// Tracks the display buffer, disables input while an evaluation is in
/// flight and renders the answer or the error back into the display.
pub mod core;

/// Background evaluation.
///
/// A fixed pool of worker threads fed through a channel, with one ticket per
/// submitted expression.
pub mod dispatcher;

/// Key labels and the edits they perform.
pub mod keypad;
