use std::fmt;

/// Error taxonomy for the donation core. Everything the store or the ledger
/// can fail with maps onto one of these; the API layer decides the status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// A referenced entity ("donor", "food", "user") does not exist.
    NotFound(String),
    /// A required field is missing or outside its allowed range.
    Validation(String),
    /// The record store is unreachable or the driver failed.
    StoreUnavailable(String),
    /// `User.food` and `Food.donor` disagree after a mutation. Raised by the
    /// consistency checker only; must never surface on a success path.
    Consistency(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(what) => write!(f, "Not found: {}", what),
            AppError::Validation(msg) => write!(f, "Invalid request: {}", msg),
            AppError::StoreUnavailable(msg) => write!(f, "Store unavailable: {}", msg),
            AppError::Consistency(msg) => write!(f, "Consistency violation: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::StoreUnavailable(e.to_string())
    }
}
