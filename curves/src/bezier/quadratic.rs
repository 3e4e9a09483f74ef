use super::curve::*;
use super::basis::*;
use super::subdivide::*;

use super::super::geo::*;
use super::super::coordinate::*;

///
/// Represents a quadratic bezier curve
///
/// Most operations are performed by raising the curve to a cubic: this is exact and preserves
/// the t values of every point along the curve.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadraticCurve<Coord: Coordinate> {
    pub start_point:    Coord,
    pub control_point:  Coord,
    pub end_point:      Coord
}

impl<Coord: Coordinate> Geo for QuadraticCurve<Coord> {
    type Point = Coord;
}

impl<Coord: Coordinate> QuadraticCurve<Coord> {
    ///
    /// Creates a new quadratic curve
    ///
    pub fn new(start_point: Coord, control_point: Coord, end_point: Coord) -> QuadraticCurve<Coord> {
        QuadraticCurve { start_point, control_point, end_point }
    }

    ///
    /// Returns the cubic curve that draws the same shape as this one (degree elevation)
    ///
    pub fn to_cubic<Curve: BezierCurveFactory<Point=Coord>>(&self) -> Curve {
        let cp1 = self.start_point + (self.control_point - self.start_point)*(2.0/3.0);
        let cp2 = self.end_point + (self.control_point - self.end_point)*(2.0/3.0);

        Curve::from_points(self.start_point, (cp1, cp2), self.end_point)
    }

    ///
    /// Finds the quadratic curve that best approximates a cubic curve (exact if the cubic was raised from a quadratic)
    ///
    pub fn from_cubic<Curve: BezierCurve<Point=Coord>>(curve: &Curve) -> QuadraticCurve<Coord> {
        let start       = curve.start_point();
        let end         = curve.end_point();
        let (cp1, cp2)  = curve.control_points();

        // Average of the control points each cubic control point implies
        let control     = ((cp1 + cp2)*3.0 - start - end)*0.25;

        QuadraticCurve::new(start, control, end)
    }

    ///
    /// Given a value t from 0 to 1, returns a point on this curve
    ///
    #[inline]
    pub fn point_at_pos(&self, t: f64) -> Coord {
        de_casteljau3(t, self.start_point, self.control_point, self.end_point)
    }

    ///
    /// Subdivides this curve at the specified t value
    ///
    pub fn subdivide(&self, t: f64) -> (QuadraticCurve<Coord>, QuadraticCurve<Coord>) {
        let (first, second) = subdivide3(t, self.start_point, self.control_point, self.end_point);

        (QuadraticCurve::new(first.0, first.1, first.2), QuadraticCurve::new(second.0, second.1, second.2))
    }

    ///
    /// Returns the part of this curve between two t values
    ///
    pub fn section(&self, t_min: f64, t_max: f64) -> QuadraticCurve<Coord> {
        let (w1, w2, w3) = section3(t_min, t_max, self.start_point, self.control_point, self.end_point);
        QuadraticCurve::new(w1, w2, w3)
    }

    ///
    /// Reverses the direction of this curve
    ///
    pub fn reverse(&self) -> QuadraticCurve<Coord> {
        QuadraticCurve::new(self.end_point, self.control_point, self.start_point)
    }
}
