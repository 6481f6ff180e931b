use crate::error::{Error, Result};
use crate::point::Point;
use crate::rectangle::Rectangle;
use log::{debug, info, warn};
use serde::Serialize;
use std::mem;

pub const WELCOME: &str = "Welcome to the Geometry Game!";
pub const LOWLEFT_PROMPT: &str =
    "Enter the bottom-left coordinates of the rectangle separated by a comma:";
pub const UPRIGHT_PROMPT: &str =
    "Enter the top-right coordinates of the rectangle separated by a comma:";
pub const POINT_PROMPT: &str = "Enter the point coordinates separated by a comma:";
pub const REPLAY_QUESTION: &str = "Do you want to play again? (Yes/No)";

/// Outcome of one round.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Round {
    pub number: usize,
    pub rectangle: Rectangle,
    pub point: Point,
    pub inside: bool,
}

impl Round {
    pub fn evaluate(number: usize, rectangle: Rectangle, point: Point) -> Self {
        let inside = point.falls_in_rectangle(&rectangle);

        Round {
            number,
            rectangle,
            point,
            inside,
        }
    }

    pub fn label(&self) -> String {
        format!(
            "Point inside Rectangle: {}",
            if self.inside { "True" } else { "False" }
        )
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub rounds: usize,
    pub inside: usize,
}

/// Everything the controller needs from the user interface.
///
/// `ask` returns `None` once the user closed the input, which ends the game.
pub trait Frontend {
    fn greet(&mut self, message: &str) -> Result<()>;
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;
    fn report(&mut self, error: &Error) -> Result<()>;
    fn display(&mut self, round: &Round) -> Result<()>;
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

#[derive(Debug, PartialEq)]
pub enum State {
    Idle,
    CollectingInput,
    Evaluating { rectangle: Rectangle, point: Point },
    Displaying(Round),
    AskReplay,
    Terminated,
}

pub struct GameController<F> {
    frontend: F,
    strict: bool,
    greeted: bool,
    state: State,
    summary: Summary,
}

impl<F: Frontend> GameController<F> {
    pub fn new(frontend: F) -> Self {
        GameController {
            frontend,
            strict: false,
            greeted: false,
            state: State::Idle,
            summary: Summary::default(),
        }
    }

    /// Reject rectangles whose corners are not ordered instead of evaluating
    /// them as containing nothing.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    pub fn into_frontend(self) -> F {
        self.frontend
    }

    /// Plays rounds until the user declines to continue or closes the input.
    pub fn run(&mut self) -> Result<Summary> {
        while self.state != State::Terminated {
            self.step()?;
        }

        debug!("Terminated after {} round(s)", self.summary.rounds);

        Ok(self.summary)
    }

    /// Advances the state machine by one transition. A front end error leaves
    /// the controller terminated.
    pub fn step(&mut self) -> Result<()> {
        let state = mem::replace(&mut self.state, State::Terminated);

        self.state = match state {
            State::Idle => {
                if !self.greeted {
                    self.frontend.greet(WELCOME)?;
                    self.greeted = true;
                }

                State::CollectingInput
            }
            State::CollectingInput => match self.collect()? {
                Some((rectangle, point)) => State::Evaluating { rectangle, point },
                None => State::Terminated,
            },
            State::Evaluating { rectangle, point } => {
                let round = Round::evaluate(self.summary.rounds + 1, rectangle, point);

                self.summary.rounds += 1;

                if round.inside {
                    self.summary.inside += 1;
                }

                info!("Round {}: {}", round.number, round.label());
                State::Displaying(round)
            }
            State::Displaying(round) => {
                self.frontend.display(&round)?;
                State::AskReplay
            }
            State::AskReplay => {
                if self.frontend.confirm(REPLAY_QUESTION)? {
                    State::Idle
                } else {
                    State::Terminated
                }
            }
            State::Terminated => State::Terminated,
        };

        debug!("Now in state {:?}", self.state);
        Ok(())
    }

    /// Reports input errors so the caller can ask again, anything else is
    /// returned as is.
    fn recover(&mut self, err: Error) -> Result<()> {
        if !err.is_input_error() {
            return Err(err);
        }

        warn!("Rejected input: {}", err);
        self.frontend.report(&err)
    }

    fn ask_point(&mut self, prompt: &str) -> Result<Option<Point>> {
        loop {
            let answer = match self.frontend.ask(prompt)? {
                Some(answer) => answer,
                None => return Ok(None),
            };

            match answer.parse() {
                Ok(point) => return Ok(Some(point)),
                Err(err) => self.recover(err)?,
            }
        }
    }

    fn collect(&mut self) -> Result<Option<(Rectangle, Point)>> {
        loop {
            let lowleft = match self.ask_point(LOWLEFT_PROMPT)? {
                Some(point) => point,
                None => return Ok(None),
            };

            let upright = match self.ask_point(UPRIGHT_PROMPT)? {
                Some(point) => point,
                None => return Ok(None),
            };

            let rectangle = if self.strict {
                match Rectangle::validated(lowleft, upright) {
                    Ok(rectangle) => rectangle,
                    Err(err) => {
                        self.recover(err)?;
                        continue;
                    }
                }
            } else {
                Rectangle::new(lowleft, upright)
            };

            return Ok(self
                .ask_point(POINT_PROMPT)?
                .map(|point| (rectangle, point)));
        }
    }
}
