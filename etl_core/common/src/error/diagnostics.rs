use std::{borrow::Cow, fmt, panic::Location};

/// Human-readable error context that records where it was constructed.
///
/// The error enums build these behind `#[track_caller]` constructors, so the
/// captured `file!()`/`line!()` points at the code that raised the error
/// rather than at the enum plumbing.
#[derive(Clone, Debug)]
pub struct DiagnosticMessage {
    message: Cow<'static, str>,
    location: &'static Location<'static>,
}

impl DiagnosticMessage {
    #[track_caller]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            location: Location::caller(),
        }
    }

    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (at {}:{})",
            self.message,
            self.location.file(),
            self.location.line()
        )
    }
}
