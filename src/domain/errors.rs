#[derive(Debug, Clone, PartialEq)]
pub enum SubmitError {
    PasswordsDoNotMatch,
    FieldErrorsOutstanding,
    MissingRequiredFields,
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::PasswordsDoNotMatch => {
                write!(f, "Passwords do not match.")
            }
            SubmitError::FieldErrorsOutstanding => {
                write!(f, "Please fix the errors before submitting.")
            }
            SubmitError::MissingRequiredFields => {
                write!(f, "Please fill in all required fields.")
            }
        }
    }
}

impl std::error::Error for SubmitError {}

pub type SubmitResult<T> = Result<T, SubmitError>;
