use crate::error::{Error, Result};
use crate::point::Point;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle given by two opposite corners.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub lowleft: Point,
    pub upright: Point,
}

impl Rectangle {
    /// Stores the corners as given. Nothing checks that `lowleft` is actually
    /// below and left of `upright`; see [`Rectangle::validated`].
    pub fn new(lowleft: Point, upright: Point) -> Self {
        Rectangle { lowleft, upright }
    }

    pub fn validated(lowleft: Point, upright: Point) -> Result<Self> {
        if lowleft.x >= upright.x || lowleft.y >= upright.y {
            return Err(Error::InvalidRectangle { lowleft, upright });
        }

        Ok(Rectangle::new(lowleft, upright))
    }

    /// Signed, negative for inverted corners.
    pub fn width(&self) -> f64 {
        self.upright.x - self.lowleft.x
    }

    pub fn height(&self) -> f64 {
        self.upright.y - self.lowleft.y
    }
}
