use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("invalid parameter {parameter}: {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },

    #[error("arithmetic overflow while computing {operation}")]
    ArithmeticOverflow {
        operation: &'static str,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("unknown repayment method: {value}")]
    UnknownRepaymentMethod {
        value: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },
}

impl ScheduleError {
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        ScheduleError::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(operation: &'static str) -> Self {
        ScheduleError::ArithmeticOverflow { operation }
    }
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
