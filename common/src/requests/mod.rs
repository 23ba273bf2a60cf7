mod contact;

pub use contact::{is_valid_email, ContactSubmission, FieldErrors, DEFAULT_SUBJECT};
