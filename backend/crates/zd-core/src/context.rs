use std::time::Duration;

/// Per-call request scope.
///
/// Carries an optional deadline for a single API call. A call whose deadline
/// elapses fails with a transport error. Cancelling a call is done by
/// dropping the future it returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Context {
    timeout: Option<Duration>,
}

impl Context {
    /// A context with no deadline of its own; the client default applies.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
