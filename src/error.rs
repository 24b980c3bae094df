use thiserror::Error;

/// Reasons the contact form refuses a submission. The display text is what
/// the visitor sees under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}
