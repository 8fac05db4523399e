//! Newsletter subscription form.

/// Outcome of a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// A non-empty address was entered. Holds the trimmed address.
    Accepted(String),
    /// The field was blank.
    Empty,
}

/// Handles submit events. There is no backend: an accepted address is only
/// acknowledged, and the field is cleared.
#[derive(Debug, Clone, Default)]
pub struct SubscribeForm {
    accepted: usize,
}

impl SubscribeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of accepted submissions so far.
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    pub fn submit(&mut self, email: &str) -> Submission {
        let email = email.trim();
        if email.is_empty() {
            return Submission::Empty;
        }
        self.accepted += 1;
        tracing::debug!(count = self.accepted, "subscription accepted");
        Submission::Accepted(email.to_string())
    }
}
