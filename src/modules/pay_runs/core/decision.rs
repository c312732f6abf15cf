use crate::modules::pay_runs::core::events::PayRunEvent;
use crate::modules::pay_runs::core::intents::PayRunIntent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("pay run already exists")]
    AlreadyExists,

    #[error("pay run not found")]
    NotFound,

    #[error("pay run already submitted")]
    AlreadySubmitted,

    #[error("required fields missing: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("amount is not a number")]
    InvalidAmount,

    #[error("unknown one-time component: {0}")]
    UnknownComponent(String),

    #[error("created_at is out of range")]
    InvalidCreatedAt,
}

#[derive(Debug)]
pub enum Decision {
    Accepted {
        events: Vec<PayRunEvent>,
        intents: Vec<PayRunIntent>,
    },
    Rejected {
        reason: DecideError,
    },
}
