use crate::error::Error;
use crate::rectangle::Rectangle;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Copy, Clone, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Returns true if the point lies in the open interior of `rectangle`.
    /// Points on an edge are outside, and so is everything when the corners
    /// are not ordered.
    pub fn falls_in_rectangle(&self, rectangle: &Rectangle) -> bool {
        rectangle.lowleft.x < self.x
            && self.x < rectangle.upright.x
            && rectangle.lowleft.y < self.y
            && self.y < rectangle.upright.y
    }

    pub fn distance_from_point(&self, other: &Self) -> f64 {
        let xs = self.x - other.x;
        let ys = self.y - other.y;
        ((xs * xs) + (ys * ys)).sqrt()
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Point")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.distance_from_point(other) < 0.00001
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x as f64, y as f64)
    }
}

/// Parses `"x,y"` where both coordinates are integers.
impl FromStr for Point {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: String| Error::MalformedCoordinates {
            input: s.to_string(),
            reason,
        };

        let tokens: Vec<&str> = s.split(',').map(str::trim).collect();

        if tokens.len() != 2 {
            return Err(malformed(format!(
                "expected two values separated by a comma, got {}",
                tokens.len()
            )));
        }

        let mut coordinates = [0i64; 2];

        for (coordinate, token) in coordinates.iter_mut().zip(tokens.iter()) {
            *coordinate = token
                .parse()
                .map_err(|_| malformed(format!("{:?} is not an integer", token)))?;
        }

        Ok(Point::from((coordinates[0], coordinates[1])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Rectangle {
        Rectangle::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0))
    }

    #[test]
    fn test_inside() {
        assert!(Point::new(5.0, 5.0).falls_in_rectangle(&unit_square()));
        assert!(Point::new(0.5, 9.5).falls_in_rectangle(&unit_square()));
    }

    #[test]
    fn test_on_boundary() {
        let rectangle = unit_square();

        let edges = [
            (10.0, 10.0),
            (0.0, 0.0),
            (0.0, 5.0),
            (10.0, 5.0),
            (5.0, 0.0),
            (5.0, 10.0),
        ];

        for (x, y) in edges {
            assert!(!Point::new(x, y).falls_in_rectangle(&rectangle), "({}, {})", x, y);
        }
    }

    #[test]
    fn test_outside() {
        let rectangle = unit_square();

        assert!(!Point::new(-1.0, 5.0).falls_in_rectangle(&rectangle));
        assert!(!Point::new(5.0, 11.0).falls_in_rectangle(&rectangle));
        assert!(!Point::new(20.0, -3.0).falls_in_rectangle(&rectangle));
    }

    #[test]
    fn test_degenerate_rectangle() {
        let rectangle = Rectangle::new(Point::new(2.0, 2.0), Point::new(2.0, 2.0));

        assert!(!Point::new(2.0, 2.0).falls_in_rectangle(&rectangle));
        assert!(!Point::new(1.0, 3.0).falls_in_rectangle(&rectangle));
    }

    #[test]
    fn test_inverted_rectangle() {
        let rectangle = Rectangle::new(Point::new(10.0, 10.0), Point::new(0.0, 0.0));

        assert!(!Point::new(5.0, 5.0).falls_in_rectangle(&rectangle));
    }

    #[test]
    fn test_distance() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);

        assert_eq!(a.distance_from_point(&b), 5.0);
        assert_eq!(a.distance_from_point(&b), b.distance_from_point(&a));
        assert_eq!(a.distance_from_point(&a), 0.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!(" 3 , -4 ".parse::<Point>().unwrap(), Point::new(3.0, -4.0));
        assert_eq!("0,0".parse::<Point>().unwrap(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_parse_malformed() {
        for input in ["3", "1,2,3", "a,b", "1.5,2", "", ","] {
            match input.parse::<Point>() {
                Err(Error::MalformedCoordinates { input: got, .. }) => assert_eq!(got, input),
                other => panic!("{:?} parsed as {:?}", input, other),
            }
        }
    }
}
