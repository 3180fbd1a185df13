use thiserror::Error;

#[derive(Error, Debug)]
pub enum AvailabilityError {
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Malformed working-hours window: {0}")]
    MalformedWindow(String),
}
