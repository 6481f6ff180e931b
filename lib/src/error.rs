use crate::point::Point;
use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read coordinates from {input:?}: {reason}")]
    MalformedCoordinates { input: String, reason: String },

    #[error("lower-left corner {lowleft} must lie below and left of upper-right corner {upright}")]
    InvalidRectangle { lowleft: Point, upright: Point },

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Whether the controller can recover by asking the user again.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::MalformedCoordinates { .. } | Error::InvalidRectangle { .. }
        )
    }
}
