#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("check-out date must be after check-in date")]
    InvalidRange,

    #[error("number of guests cannot exceed {capacity}")]
    CapacityExceeded { requested: u32, capacity: u32 },

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("room {0} is not available for booking")]
    RoomUnavailable(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("not authenticated")]
    Unauthorized,
}
