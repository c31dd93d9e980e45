use std::fmt;

/// A Value Object describing one notification to show a user.
///
/// Two notifications with equal title and message are interchangeable.
/// Rendering (tab-separated, bulleted, ...) is left to
/// [`LineFormat`](crate::presentation::line::LineFormat).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Notification {
    title: String,
    message: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Shorthand for [`Notification::new`].
    pub fn of(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(title, message)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Notification[title={}, message={}]", self.title, self.message)
    }
}
