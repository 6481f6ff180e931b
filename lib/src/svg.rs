use crate::error::Result;
use crate::game::Round;
use crate::point::Point;
use crate::rectangle::Rectangle;
use std::path;
use svg::node::element::Circle;
use svg::node::element::Line;
use svg::node::element::Rectangle as Outline;
use svg::node::element::Text;
use svg::Document;

/// Pixels per coordinate unit.
const SCALE: f64 = 40.0;

/// Space reserved below the plot for the result label.
const LABEL_HEIGHT: f64 = 32.0;

const POINT_RADIUS: f64 = 5.0;

/// Visible coordinate range of a plot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    /// Smallest range showing both shapes with one unit of margin on every side.
    pub fn enclosing(rectangle: &Rectangle, point: &Point) -> Self {
        let xs = [rectangle.lowleft.x, rectangle.upright.x, point.x];
        let ys = [rectangle.lowleft.y, rectangle.upright.y, point.y];

        Bounds {
            x_min: xs.iter().copied().fold(f64::INFINITY, f64::min) - 1.0,
            x_max: xs.iter().copied().fold(f64::NEG_INFINITY, f64::max) + 1.0,
            y_min: ys.iter().copied().fold(f64::INFINITY, f64::min) - 1.0,
            y_max: ys.iter().copied().fold(f64::NEG_INFINITY, f64::max) + 1.0,
        }
    }

    pub fn width(&self) -> f64 {
        (self.x_max - self.x_min) * SCALE
    }

    pub fn height(&self) -> f64 {
        (self.y_max - self.y_min) * SCALE
    }

    /// Maps plot coordinates to canvas coordinates, flipping the y axis.
    pub fn to_canvas(&self, x: f64, y: f64) -> (f64, f64) {
        ((x - self.x_min) * SCALE, (self.y_max - y) * SCALE)
    }
}

fn draw_axes(document: Document, bounds: &Bounds) -> Document {
    let mut document = document;

    if bounds.x_min < 0.0 && 0.0 < bounds.x_max {
        let (x, _) = bounds.to_canvas(0.0, 0.0);

        document = document.add(
            Line::new()
                .set("x1", x)
                .set("y1", 0.0)
                .set("x2", x)
                .set("y2", bounds.height())
                .set("stroke", "gray")
                .set("stroke-width", "0.5"),
        );
    }

    if bounds.y_min < 0.0 && 0.0 < bounds.y_max {
        let (_, y) = bounds.to_canvas(0.0, 0.0);

        document = document.add(
            Line::new()
                .set("x1", 0.0)
                .set("y1", y)
                .set("x2", bounds.width())
                .set("y2", y)
                .set("stroke", "gray")
                .set("stroke-width", "0.5"),
        );
    }

    document
}

fn draw_rectangle(document: Document, bounds: &Bounds, rectangle: &Rectangle) -> Document {
    // Inverted corners still get an outline spanning both of them.
    let left = rectangle.lowleft.x.min(rectangle.upright.x);
    let top = rectangle.lowleft.y.max(rectangle.upright.y);
    let (x, y) = bounds.to_canvas(left, top);

    document.add(
        Outline::new()
            .set("x", x)
            .set("y", y)
            .set("width", rectangle.width().abs() * SCALE)
            .set("height", rectangle.height().abs() * SCALE)
            .set("fill", "none")
            .set("stroke", "red")
            .set("stroke-width", "1.0"),
    )
}

fn draw_point(document: Document, bounds: &Bounds, point: &Point) -> Document {
    let (cx, cy) = bounds.to_canvas(point.x, point.y);

    document.add(
        Circle::new()
            .set("fill", "blue")
            .set("cx", cx)
            .set("cy", cy)
            .set("r", POINT_RADIUS),
    )
}

fn draw_label(document: Document, bounds: &Bounds, label: String) -> Document {
    document.add(
        Text::new()
            .add(svg::node::Text::new(label))
            .set("x", bounds.width() / 2.0)
            .set("y", bounds.height() + LABEL_HEIGHT * 0.7)
            .set("text-anchor", "middle")
            .set("font-family", "sans-serif")
            .set("font-size", 16),
    )
}

pub fn render(round: &Round) -> Document {
    let bounds = Bounds::enclosing(&round.rectangle, &round.point);
    let (width, height) = (bounds.width(), bounds.height() + LABEL_HEIGHT);

    let mut document = Document::new()
        .set("viewBox", (0.0, 0.0, width, height))
        .set("width", width)
        .set("height", height);

    document = draw_axes(document, &bounds);
    document = draw_rectangle(document, &bounds, &round.rectangle);
    document = draw_point(document, &bounds, &round.point);
    draw_label(document, &bounds, round.label())
}

pub fn write_plot(filename: &path::Path, round: &Round) -> Result<()> {
    svg::save(filename, &render(round))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(lowleft: (f64, f64), upright: (f64, f64), point: (f64, f64)) -> Round {
        Round::evaluate(
            1,
            Rectangle::new(
                Point::new(lowleft.0, lowleft.1),
                Point::new(upright.0, upright.1),
            ),
            Point::new(point.0, point.1),
        )
    }

    #[test]
    fn test_bounds_margin() {
        let round = round((0.0, 0.0), (10.0, 10.0), (5.0, 12.0));
        let bounds = Bounds::enclosing(&round.rectangle, &round.point);

        assert_eq!(
            bounds,
            Bounds {
                x_min: -1.0,
                x_max: 11.0,
                y_min: -1.0,
                y_max: 13.0,
            }
        );
    }

    #[test]
    fn test_bounds_inverted_rectangle() {
        let round = round((10.0, 10.0), (0.0, 0.0), (5.0, 5.0));
        let bounds = Bounds::enclosing(&round.rectangle, &round.point);

        assert_eq!(bounds.x_min, -1.0);
        assert_eq!(bounds.x_max, 11.0);
        assert!(bounds.width() > 0.0 && bounds.height() > 0.0);
    }

    #[test]
    fn test_to_canvas_flips_y() {
        let round = round((0.0, 0.0), (2.0, 2.0), (1.0, 1.0));
        let bounds = Bounds::enclosing(&round.rectangle, &round.point);

        assert_eq!(bounds.to_canvas(-1.0, 3.0), (0.0, 0.0));
        assert_eq!(bounds.to_canvas(3.0, -1.0), (4.0 * SCALE, 4.0 * SCALE));
    }

    #[test]
    fn test_render() {
        let document = render(&round((0.0, 0.0), (10.0, 10.0), (5.0, 5.0))).to_string();

        assert!(document.contains("<rect"));
        assert!(document.contains("stroke=\"red\""));
        assert!(document.contains("fill=\"blue\""));
        assert!(document.contains("Point inside Rectangle: True"));
    }

    #[test]
    fn test_render_axes_only_when_visible() {
        let away = render(&round((2.0, 2.0), (4.0, 4.0), (3.0, 3.0))).to_string();
        let across = render(&round((-2.0, -2.0), (4.0, 4.0), (9.0, 9.0))).to_string();

        assert!(!away.contains("<line"));
        assert_eq!(across.matches("<line").count(), 2);
        assert!(across.contains("Point inside Rectangle: False"));
    }
}
