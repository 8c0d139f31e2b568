//! Submission state shared by the login and signup forms

/// Where a form submission stands
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    /// Succeeded; the page is waiting to navigate away
    Redirecting(String),
    Failed(String),
}

impl FormStatus {
    /// A new submission may start. Once a redirect is scheduled the form
    /// stays locked until the page changes.
    #[must_use]
    pub const fn accepts_submit(&self) -> bool {
        matches!(self, Self::Idle | Self::Failed(_))
    }

    /// Submit button disabled and showing the spinner
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        !self.accepts_submit()
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    #[must_use]
    pub fn success(&self) -> Option<&str> {
        match self {
            Self::Redirecting(message) => Some(message),
            _ => None,
        }
    }
}
