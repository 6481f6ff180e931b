use geometry_game::{Error, Frontend, Result, Round};
use log::debug;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Line based front end, one prompt per line of input.
pub struct Console<R, W> {
    input: R,
    output: W,
    plot_dir: Option<PathBuf>,
    json: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console {
            input,
            output,
            plot_dir: None,
            json: false,
        }
    }

    pub fn plot_dir(mut self, plot_dir: Option<PathBuf>) -> Self {
        self.plot_dir = plot_dir;
        self
    }

    pub fn json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }
}

impl<R: BufRead, W: Write> Frontend for Console<R, W> {
    fn greet(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    fn report(&mut self, error: &Error) -> Result<()> {
        writeln!(self.output, "Error: {}", error)?;
        Ok(())
    }

    fn display(&mut self, round: &Round) -> Result<()> {
        if let Some(dir) = &self.plot_dir {
            let filename = dir.join(format!("round-{:03}.svg", round.number));

            debug!("Writing plot to {}", filename.display());
            geometry_game::svg::write_plot(&filename, round)?;
            writeln!(self.output, "Plot saved to {}", filename.display())?;
        }

        writeln!(self.output, "{}", round.label())?;

        if self.json {
            let json = serde_json::to_string(round).map_err(std::io::Error::from)?;
            writeln!(self.output, "{}", json)?;
        }

        Ok(())
    }

    fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = match self.ask(question)? {
            Some(answer) => answer,
            None => return Ok(false),
        };

        let answer = answer.trim().to_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}
