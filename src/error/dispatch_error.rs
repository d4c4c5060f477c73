#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents failures of the background evaluation machinery.
///
/// These never describe a problem with the expression itself; those are
/// reported as [`crate::error::EvalError`].
pub enum DispatchError {
    /// The worker pool shut down before the job could be queued or answered.
    Disconnected,
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Disconnected => write!(f, "The evaluation worker stopped before answering."),
        }
    }
}

impl std::error::Error for DispatchError {}
