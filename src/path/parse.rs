use super::path::*;
use super::super::error::*;
use super::super::options::*;
use super::super::command::*;
use super::super::sub_path::*;

use flo_morph_curves::*;
use flo_morph_curves::arc::*;

use log::*;
use svgtypes::{PathParser as SvgPathParser, PathSegment as SvgSegment};

use std::sync::Arc;
use std::str::FromStr;

///
/// Checks that the numbers read for a command are all finite
///
fn check_finite(letter: char, params: &[f64]) -> Result<(), PathError> {
    match params.iter().find(|value| !value.is_finite()) {
        Some(value) => Err(PathError::ParseError(format!("'{}' has an argument that is out of range ({})", letter, value))),
        None        => Ok(())
    }
}

///
/// State of the path parser
///
struct PathParser {
    /// Subpaths that have been completed
    sub_paths: Vec<SubPath>,

    /// Commands in the subpath being built
    current: Vec<Command>,

    /// The current point (None until the first move)
    current_point: Option<Coord2>,

    /// Where the current subpath started
    sub_path_start: Coord2,

    /// Second control point of the previous command, if it was a cubic curve
    last_cubic_control: Option<Coord2>,

    /// Control point of the previous command, if it was a quadratic curve
    last_quadratic_control: Option<Coord2>
}

impl PathParser {
    fn new() -> PathParser {
        PathParser {
            sub_paths:              vec![],
            current:                vec![],
            current_point:          None,
            sub_path_start:         Coord2(0.0, 0.0),
            last_cubic_control:     None,
            last_quadratic_control: None
        }
    }

    ///
    /// Moves the current subpath into the list of finished subpaths
    ///
    fn finish_sub_path(&mut self) -> Result<(), PathError> {
        if !self.current.is_empty() {
            let commands = std::mem::take(&mut self.current);
            self.sub_paths.push(SubPath::new(commands).map_err(|err| PathError::ParseError(err.to_string()))?);
        }

        Ok(())
    }

    ///
    /// Returns the point that the next drawing command starts from, starting a new subpath if the last one was closed
    ///
    fn drawing_start(&mut self, letter: char) -> Result<Coord2, PathError> {
        let current_point = self.current_point.ok_or_else(|| PathError::ParseError(format!("'{}' appears before the first move", letter)))?;

        if self.current.is_empty() {
            // Drawing after a close starts a new subpath at the start of the previous one
            self.current.push(Command::move_to(current_point));
            self.sub_path_start = current_point;
        }

        Ok(current_point)
    }

    ///
    /// Adds a drawing command to the current subpath
    ///
    fn draw(&mut self, segment: Segment) {
        self.current_point = Some(segment.end_point());
        self.current.push(Command::new(segment));
    }

    ///
    /// Resolves a point that might be relative to the current point
    ///
    fn resolve(&self, abs: bool, x: f64, y: f64) -> Coord2 {
        if abs {
            Coord2(x, y)
        } else {
            self.current_point.unwrap_or(Coord2(0.0, 0.0)) + Coord2(x, y)
        }
    }

    fn move_to(&mut self, target: Coord2) -> Result<(), PathError> {
        self.finish_sub_path()?;

        self.current.push(Command::move_to(target));
        self.current_point  = Some(target);
        self.sub_path_start = target;

        Ok(())
    }

    fn line_to(&mut self, letter: char, to: Coord2) -> Result<(), PathError> {
        let from = self.drawing_start(letter)?;
        self.draw(Segment::Line { from, to });

        Ok(())
    }

    fn cubic_to(&mut self, cp1: Coord2, cp2: Coord2, to: Coord2) -> Result<(), PathError> {
        let from = self.drawing_start('C')?;

        self.draw(Segment::Cubic { from, control_points: (cp1, cp2), to });
        self.last_cubic_control = Some(cp2);

        Ok(())
    }

    fn quadratic_to(&mut self, control: Coord2, to: Coord2) -> Result<(), PathError> {
        let from = self.drawing_start('Q')?;

        self.draw(Segment::Quadratic { from, control, to });
        self.last_quadratic_control = Some(control);

        Ok(())
    }

    ///
    /// Reflects the control point of the previous curve through the current point (or returns the current point if there's nothing to reflect)
    ///
    fn reflect(&self, letter: char, previous_control: Option<Coord2>) -> Result<Coord2, PathError> {
        let current_point = self.current_point.ok_or_else(|| PathError::ParseError(format!("'{}' appears before the first move", letter)))?;
        Ok(previous_control.map(|cp| current_point*2.0 - cp).unwrap_or(current_point))
    }

    fn arc_to(&mut self, radii: (f64, f64), x_axis_rotation: f64, large_arc: bool, sweep: bool, to: Coord2) -> Result<(), PathError> {
        let from        = self.drawing_start('A')?;
        let parameters  = ArcParameters { radii: (radii.0.abs(), radii.1.abs()), x_axis_rotation, large_arc, sweep };
        let arc         = EllipticalArc::new(from, parameters.radii, parameters.x_axis_rotation, large_arc, sweep, to);

        match arc.center_parameterization() {
            ArcParameterization::CenterParameters(_)    => self.draw(Segment::Arc { from, parameters, to }),
            ArcParameterization::LineTo                 => self.draw(Segment::Line { from, to }),
            ArcParameterization::Omit                   => { trace!("Dropping arc that starts and ends at ({}, {})", from.x(), from.y()); }
        }

        Ok(())
    }

    fn close(&mut self) -> Result<(), PathError> {
        match self.current_point {
            None                => Err(PathError::ParseError("'Z' appears before the first move".to_string())),

            // Nothing to close if the previous command was also a close
            Some(_) if self.current.is_empty() => Ok(()),

            Some(from)          => {
                let to = self.sub_path_start;
                self.draw(Segment::Close { from, to });
                self.finish_sub_path()
            }
        }
    }

    ///
    /// Processes a single segment from an SVG path
    ///
    fn segment(&mut self, segment: &SvgSegment) -> Result<(), PathError> {
        // Smooth curves reflect the control point of the previous command only if it was the same kind of curve
        let previous_cubic      = self.last_cubic_control.take();
        let previous_quadratic  = self.last_quadratic_control.take();

        match *segment {
            SvgSegment::MoveTo { abs, x, y }                    => {
                check_finite('M', &[x, y])?;
                self.move_to(self.resolve(abs, x, y))
            }

            SvgSegment::LineTo { abs, x, y }                    => {
                check_finite('L', &[x, y])?;
                self.line_to('L', self.resolve(abs, x, y))
            }

            SvgSegment::HorizontalLineTo { abs, x }             => {
                check_finite('H', &[x])?;
                let from = self.drawing_start('H')?;
                let to   = if abs { Coord2(x, from.y()) } else { Coord2(from.x() + x, from.y()) };
                self.line_to('H', to)
            }

            SvgSegment::VerticalLineTo { abs, y }               => {
                check_finite('V', &[y])?;
                let from = self.drawing_start('V')?;
                let to   = if abs { Coord2(from.x(), y) } else { Coord2(from.x(), from.y() + y) };
                self.line_to('V', to)
            }

            SvgSegment::CurveTo { abs, x1, y1, x2, y2, x, y }   => {
                check_finite('C', &[x1, y1, x2, y2, x, y])?;
                self.cubic_to(self.resolve(abs, x1, y1), self.resolve(abs, x2, y2), self.resolve(abs, x, y))
            }

            SvgSegment::SmoothCurveTo { abs, x2, y2, x, y }     => {
                check_finite('S', &[x2, y2, x, y])?;
                let cp1 = self.reflect('S', previous_cubic)?;
                self.cubic_to(cp1, self.resolve(abs, x2, y2), self.resolve(abs, x, y))
            }

            SvgSegment::Quadratic { abs, x1, y1, x, y }         => {
                check_finite('Q', &[x1, y1, x, y])?;
                self.quadratic_to(self.resolve(abs, x1, y1), self.resolve(abs, x, y))
            }

            SvgSegment::SmoothQuadratic { abs, x, y }           => {
                check_finite('T', &[x, y])?;
                let control = self.reflect('T', previous_quadratic)?;
                self.quadratic_to(control, self.resolve(abs, x, y))
            }

            SvgSegment::EllipticalArc { abs, rx, ry, x_axis_rotation, large_arc, sweep, x, y } => {
                check_finite('A', &[rx, ry, x_axis_rotation, x, y])?;
                self.arc_to((rx, ry), x_axis_rotation, large_arc, sweep, self.resolve(abs, x, y))
            }

            SvgSegment::ClosePath { .. }                        => self.close()
        }
    }

    ///
    /// Finishes parsing, returning the subpaths that were found
    ///
    fn finish(mut self) -> Result<Vec<SubPath>, PathError> {
        self.finish_sub_path()?;
        Ok(self.sub_paths)
    }
}

impl Path {
    ///
    /// Parses an SVG path string using the default options
    ///
    pub fn parse(path_string: &str) -> Result<Path, PathError> {
        Path::parse_with_options(path_string, PathOptions::default())
    }

    ///
    /// Parses an SVG path string
    ///
    pub fn parse_with_options(path_string: &str, options: PathOptions) -> Result<Path, PathError> {
        options.validate()?;

        let mut parser = PathParser::new();

        for segment in SvgPathParser::from(path_string) {
            parser.segment(&segment?)?;
        }

        let sub_paths = parser.finish()?;
        trace!("Parsed path with {} subpaths", sub_paths.len());

        Ok(Path::from_data(PathData::new(sub_paths.into_iter().map(Arc::new).collect(), Arc::new(options))))
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(path_string: &str) -> Result<Path, PathError> {
        Path::parse(path_string)
    }
}
