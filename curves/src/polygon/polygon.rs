use super::super::line::*;
use super::super::coordinate::*;

use itertools::*;
use serde::{Serialize, Deserialize};

///
/// The rule used to decide which points are inside a shape
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FillRule {
    /// A point is inside if a ray from it crosses the edges an odd number of times
    EvenOdd,

    /// A point is inside if the edges wind around it a non-zero number of times
    NonZero
}

impl Default for FillRule {
    fn default() -> FillRule {
        FillRule::NonZero
    }
}

///
/// Iterates over the edges of a polygon, including the edge that closes it
///
pub fn polygon_edges<'a>(polygon: &'a [Coord2]) -> impl 'a+Iterator<Item=(Coord2, Coord2)> {
    polygon.iter().cloned().circular_tuple_windows::<(_, _)>()
}

///
/// Computes the signed area of a polygon (positive for anticlockwise polygons in a y-up coordinate system)
///
pub fn polygon_area(polygon: &[Coord2]) -> f64 {
    if polygon.len() < 3 {
        return 0.0;
    }

    polygon_edges(polygon)
        .map(|(p1, p2)| p1.cross(&p2))
        .sum::<f64>() * 0.5
}

///
/// Computes the centroid of a polygon
///
/// Polygons with no area use the average of their vertices instead. An empty polygon has its
/// centroid at the origin.
///
pub fn polygon_centroid(polygon: &[Coord2]) -> Coord2 {
    let area = polygon_area(polygon);

    if area.abs() < 1e-12 {
        vertex_centroid(polygon)
    } else {
        let (x, y) = polygon_edges(polygon)
            .fold((0.0, 0.0), |(x, y), (p1, p2)| {
                let cross = p1.cross(&p2);
                (x + (p1.x()+p2.x())*cross, y + (p1.y()+p2.y())*cross)
            });

        Coord2(x / (6.0*area), y / (6.0*area))
    }
}

///
/// The average position of the vertices of a polygon
///
pub fn vertex_centroid(polygon: &[Coord2]) -> Coord2 {
    if polygon.is_empty() {
        return Coord2::origin();
    }

    let total = polygon.iter().fold(Coord2::origin(), |total, point| total + *point);
    total * (1.0 / (polygon.len() as f64))
}

///
/// Returns true if a point lies within a polygon, according to the specified fill rule
///
/// A ray is cast from the point in the +x direction and the edges it crosses are counted. Points
/// exactly on an edge may be considered to be on either side.
///
pub fn polygon_contains_point(polygon: &[Coord2], point: &Coord2, fill_rule: FillRule) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut crossings   = 0;
    let mut winding     = 0;

    for (p1, p2) in polygon_edges(polygon) {
        // Half-open test so that vertices are only counted once
        let upward      = p1.y() <= point.y() && p2.y() > point.y();
        let downward    = p1.y() > point.y() && p2.y() <= point.y();

        if upward || downward {
            // x position where the edge crosses the ray's y position
            let edge_x = p1.x() + (point.y() - p1.y()) / (p2.y() - p1.y()) * (p2.x() - p1.x());

            if edge_x > point.x() {
                crossings += 1;
                winding   += if upward { 1 } else { -1 };
            }
        }
    }

    match fill_rule {
        FillRule::EvenOdd   => crossings % 2 == 1,
        FillRule::NonZero   => winding != 0
    }
}

///
/// Returns the distance from a point to the nearest edge of a polygon. This is negative if the
/// point is outside of the polygon (using the even-odd rule).
///
pub fn signed_distance_to_polygon(polygon: &[Coord2], point: &Coord2) -> f64 {
    let distance = polygon_edges(polygon)
        .map(|edge| {
            let (_t, nearest) = nearest_point_on_line(&edge, point);
            nearest.distance_to(point)
        })
        .fold(f64::MAX, f64::min);

    if polygon_contains_point(polygon, point, FillRule::EvenOdd) {
        distance
    } else {
        -distance
    }
}
