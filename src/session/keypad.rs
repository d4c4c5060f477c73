/// Labels of the calculator's keys, in panel order.
///
/// `"<="` is the delete key. Every label not handled specially appends its
/// own text to the display, so pressing `|x|` really types `|x|`.
pub const KEY_LABELS: &[&str] = &["1", "2", "3", "/", "4", "5", "6", "*", "7", "8", "9", "-", "0",
                                  ".", "=", "+", "Clear", "<=", "(", ")", "^", "sqrt", "cbrt",
                                  "log", "sin", "cos", "tan", "asin", "acos", "atan", "!", "%",
                                  "|x|"];

/// A key press on the calculator panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// Appends the text to the display.
    Append(String),
    /// Removes the last character of the display.
    Backspace,
    /// Empties the display.
    Clear,
    /// Evaluates the display.
    Submit,
}

impl Key {
    /// Maps a key label to the action it performs.
    ///
    /// # Example
    /// ```
    /// use scical::session::keypad::Key;
    ///
    /// assert_eq!(Key::from_label("="), Key::Submit);
    /// assert_eq!(Key::from_label("<="), Key::Backspace);
    /// assert_eq!(Key::from_label("Clear"), Key::Clear);
    /// assert_eq!(Key::from_label("sqrt"), Key::Append("sqrt".to_string()));
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "=" => Self::Submit,
            "<=" => Self::Backspace,
            "Clear" => Self::Clear,
            text => Self::Append(text.to_string()),
        }
    }
}
