use log::debug;

use crate::session::{
    dispatcher::{Dispatcher, Outcome, Ticket},
    keypad::Key,
};

/// Whether a session is waiting for an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// Input is enabled.
    #[default]
    Idle,
    /// An expression is being evaluated; input is disabled.
    Calculating,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => Ok(()),
            Self::Calculating => write!(f, "Calculating..."),
        }
    }
}

/// One interactive calculator: a display buffer plus at most one evaluation
/// in flight.
///
/// Key presses edit the display. Submitting hands the display text to the
/// dispatcher and disables input until the answer has been collected with
/// [`Session::poll`] or [`Session::wait`]. The answer then replaces the
/// display. Several sessions may share one dispatcher.
///
/// # Example
/// ```
/// use scical::session::{core::Session, dispatcher::Dispatcher, keypad::Key};
///
/// let dispatcher = Dispatcher::with_defaults().unwrap();
/// let mut session = Session::new(&dispatcher);
///
/// for label in ["sqrt", "(", "9", "+", "1", "6", ")", "="] {
///     session.press(Key::from_label(label));
/// }
/// assert!(!session.press(Key::Clear));
///
/// session.wait();
/// assert_eq!(session.display(), "5.0");
/// ```
pub struct Session<'d> {
    dispatcher: &'d Dispatcher,
    display:    String,
    status:     Status,
    ticket:     Option<Ticket>,
}

impl<'d> Session<'d> {
    /// Creates an idle session with an empty display.
    #[must_use]
    pub const fn new(dispatcher: &'d Dispatcher) -> Self {
        Self { dispatcher,
               display: String::new(),
               status: Status::Idle,
               ticket: None }
    }

    /// Returns the current display text.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns whether an evaluation is in flight.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Returns `true` when key presses are accepted.
    #[must_use]
    pub fn is_input_enabled(&self) -> bool {
        self.status == Status::Idle
    }

    /// Applies a key press.
    ///
    /// # Returns
    /// `false` if the press was ignored because an evaluation is in flight.
    pub fn press(&mut self, key: Key) -> bool {
        if !self.is_input_enabled() {
            debug!("ignoring {key:?} while calculating");
            return false;
        }

        match key {
            Key::Append(text) => self.display.push_str(&text),
            Key::Backspace => {
                self.display.pop();
            },
            Key::Clear => self.display.clear(),
            Key::Submit => self.submit(),
        }
        true
    }

    /// Collects the answer if it has arrived, without blocking.
    ///
    /// # Returns
    /// `true` if an answer was applied to the display.
    pub fn poll(&mut self) -> bool {
        let Some(outcome) = self.ticket.as_ref().and_then(Ticket::try_outcome) else {
            return false;
        };

        self.ticket = None;
        self.finish(outcome);
        true
    }

    /// Blocks until the in-flight answer arrives and applies it.
    ///
    /// Does nothing when no evaluation is in flight.
    pub fn wait(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            self.finish(ticket.wait());
        }
    }

    fn submit(&mut self) {
        match self.dispatcher.submit(self.display.clone()) {
            Ok(ticket) => {
                debug!("submitted {:?}", self.display);
                self.ticket = Some(ticket);
                self.status = Status::Calculating;
            },
            Err(e) => self.display = format!("Error: {e}"),
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.display = match outcome {
            Ok(Ok(value)) => format_value(value),
            Ok(Err(e)) => format!("Error: {e}"),
            Err(e) => format!("Error: {e}"),
        };
        self.status = Status::Idle;
        debug!("answer ready: {:?}", self.display);
    }
}

/// Renders a result the way the display shows it.
///
/// Finite values always carry a decimal point or an exponent. Positional
/// notation is kept up to magnitudes of `1e16`, so `1e7` prints in full.
/// Non-finite values are spelled out.
///
/// # Example
/// ```
/// use scical::session::core::format_value;
///
/// assert_eq!(format_value(16.0), "16.0");
/// assert_eq!(format_value(1e7), "10000000.0");
/// assert_eq!(format_value(1e-4), "0.0001");
/// assert_eq!(format_value(1e21), "1e21");
/// assert_eq!(format_value(0.05), "0.05");
/// assert_eq!(format_value(f64::INFINITY), "Infinity");
/// assert_eq!(format_value(f64::NEG_INFINITY), "-Infinity");
/// assert_eq!(format_value(f64::NAN), "NaN");
/// ```
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    format!("{value:?}")
}
