pub mod error;
pub mod game;
pub mod point;
pub mod rectangle;
#[cfg(feature = "svg")]
pub mod svg;

pub use error::{Error, Result};
pub use game::{Frontend, GameController, Round, State, Summary};
pub use point::Point;
pub use rectangle::Rectangle;
