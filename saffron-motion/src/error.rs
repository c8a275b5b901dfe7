use thiserror::Error;

pub type Result<T> = std::result::Result<T, MotionError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    #[error("NonFinite: {0} must be a finite number")]
    NonFinite(&'static str),
    #[error("NegativeDuration: {field} was {value}s")]
    NegativeDuration { field: &'static str, value: f64 },
    #[error("InvalidTransition: cannot `{event}` while {from}")]
    InvalidTransition {
        from: &'static str,
        event: &'static str,
    },
}
