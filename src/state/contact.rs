use crate::state::panel::PanelEvent;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Why a draft was rejected. Never shown to the visitor; submission is just a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftError {
    MissingName,
    InvalidEmail,
}

impl ContactDraft {
    /// Presence checks only; the message body is optional.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::MissingName);
        }
        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(DraftError::InvalidEmail),
        }
    }

    /// Panel event for a submit attempt: `Submitted` closes the drawer, `None` leaves it
    /// open and untouched.
    pub fn submission(&self) -> Option<PanelEvent> {
        self.validate().ok().map(|()| PanelEvent::Submitted)
    }
}
