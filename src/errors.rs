use crate::models::Field;

/// Why a text field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    NotANumber,
    NotFinite,
    NotPositive,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidReason::NotANumber => write!(f, "not a number"),
            InvalidReason::NotFinite => write!(f, "not a finite number"),
            InvalidReason::NotPositive => write!(f, "must be positive"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: Field, reason: InvalidReason },
}

impl CalcError {
    pub fn field(&self) -> Field {
        match self {
            CalcError::InvalidInput { field, .. } => *field,
        }
    }
}
