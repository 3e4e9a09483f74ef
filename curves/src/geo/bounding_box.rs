use super::geo::*;
use super::super::coordinate::*;

use serde::{Serialize, Deserialize};

///
/// Trait implemented by things representing axis-aligned bounding boxes
///
pub trait BoundingBox : Geo+Sized {
    ///
    /// Returns a bounding box with the specified minimum and maximum coordinates
    ///
    fn from_min_max(min: Self::Point, max: Self::Point) -> Self;

    ///
    /// Returns the minimum point of this bounding box
    ///
    fn min(&self) -> Self::Point;

    ///
    /// Returns the maximum point of this bounding box
    ///
    fn max(&self) -> Self::Point;

    ///
    /// Returns a bounding box that encloses a set of points (or None if the set is empty)
    ///
    fn bounds_for_points<PointIter: IntoIterator<Item=Self::Point>>(points: PointIter) -> Option<Self> {
        let mut points  = points.into_iter();
        let first       = points.next()?;

        let (min, max)  = points.fold((first, first), |(min, max), point| {
            (Self::Point::from_smallest_components(min, point), Self::Point::from_biggest_components(max, point))
        });

        Some(Self::from_min_max(min, max))
    }

    ///
    /// True if this bounding box has no extent
    ///
    #[inline]
    fn is_empty(&self) -> bool {
        self.min() == self.max()
    }

    ///
    /// Creates the union of this and another bounding box
    ///
    fn union_bounds(self, target: Self) -> Self {
        Self::from_min_max(Self::Point::from_smallest_components(self.min(), target.min()), Self::Point::from_biggest_components(self.max(), target.max()))
    }

    ///
    /// True if the specified point lies within this bounding box (edges included)
    ///
    fn contains_point(&self, point: &Self::Point) -> bool {
        let min = self.min();
        let max = self.max();

        (0..Self::Point::len()).all(|component| {
            let val = point.get(component);
            val >= min.get(component) && val <= max.get(component)
        })
    }

    ///
    /// Returns true if this bounding box overlaps another one (touching edges are not considered to overlap)
    ///
    fn overlaps<Bounds: BoundingBox<Point=Self::Point>>(&self, target: &Bounds) -> bool {
        let (min1, max1) = (self.min(), self.max());
        let (min2, max2) = (target.min(), target.max());

        (0..Self::Point::len()).all(|component| {
            max1.get(component) > min2.get(component) && min1.get(component) < max2.get(component)
        })
    }
}

///
/// Type representing a bounding box
///
/// (Unlike a normal point tuple this always represents its bounds in minimum/maximum order)
///
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Bounds<Point: Coordinate>(Point, Point);

impl<Point: Coordinate> BoundingBox for (Point, Point) {
    #[inline]
    fn from_min_max(min: Self::Point, max: Self::Point) -> Self {
        (min, max)
    }

    #[inline]
    fn min(&self) -> Self::Point {
        Point::from_smallest_components(self.0, self.1)
    }

    #[inline]
    fn max(&self) -> Self::Point {
        Point::from_biggest_components(self.0, self.1)
    }
}

impl<Point: Coordinate> Geo for Bounds<Point> {
    type Point=Point;
}

impl<Point: Coordinate> BoundingBox for Bounds<Point> {
    #[inline]
    fn from_min_max(min: Self::Point, max: Self::Point) -> Self {
        Bounds(Point::from_smallest_components(min, max), Point::from_biggest_components(min, max))
    }

    #[inline]
    fn min(&self) -> Self::Point {
        self.0
    }

    #[inline]
    fn max(&self) -> Self::Point {
        self.1
    }
}

impl Bounds<Coord2> {
    /// Width of these bounds
    #[inline]
    pub fn width(&self) -> f64 { self.1.x() - self.0.x() }

    /// Height of these bounds
    #[inline]
    pub fn height(&self) -> f64 { self.1.y() - self.0.y() }

    /// The point at the center of these bounds
    #[inline]
    pub fn center(&self) -> Coord2 { self.0.midpoint(&self.1) }
}
