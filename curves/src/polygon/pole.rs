use super::polygon::*;
use super::super::geo::*;
use super::super::coordinate::*;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::f64::consts::SQRT_2;

///
/// The result of searching for the pole of inaccessibility of a polygon
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoleOfInaccessibility {
    /// The point found by the search
    pub point: Coord2,

    /// Distance from the point to the polygon's boundary (negative if the point is outside)
    pub distance: f64,

    /// The number of cells that were examined
    pub cells_searched: usize,

    /// False if the search was stopped by the cell limit before reaching the requested precision
    pub complete: bool,

    /// True if the polygon had no area, in which case the point is the centroid of its vertices
    pub degenerate: bool
}

///
/// A square cell used by the pole search
///
#[derive(Clone, Copy, Debug)]
struct Cell {
    center:         Coord2,
    half_size:      f64,
    distance:       f64,
    max_distance:   f64
}

impl Cell {
    fn new(center: Coord2, half_size: f64, polygon: &[Coord2]) -> Cell {
        let distance = signed_distance_to_polygon(polygon, &center);

        Cell {
            center:         center,
            half_size:      half_size,
            distance:       distance,
            max_distance:   distance + half_size*SQRT_2
        }
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Cell) -> bool {
        self.max_distance == other.max_distance
    }
}

impl Eq for Cell { }

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Cell) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Cell) -> Ordering {
        self.max_distance.partial_cmp(&other.max_distance).unwrap_or(Ordering::Equal)
    }
}

///
/// Finds the point inside a polygon that is furthest from its edges
///
/// The polygon's bounding box is covered with square cells which are searched in order of the best
/// distance they could possibly contain, splitting each cell into quarters until no cell can
/// improve on the best point found by more than `precision`. No more than `max_cells` cells are
/// examined, including the initial grid, which uses larger cells for long thin polygons. Polygons
/// with no area return the centroid of their vertices.
///
pub fn pole_of_inaccessibility(polygon: &[Coord2], precision: f64, max_cells: usize) -> PoleOfInaccessibility {
    let bounds: Option<Bounds<Coord2>> = Bounds::bounds_for_points(polygon.iter().cloned());
    let area                            = polygon_area(polygon);

    let bounds = match bounds {
        Some(bounds) if area.abs() > 1e-12 && bounds.width() > 0.0 && bounds.height() > 0.0 => bounds,

        _ => {
            // No area to search
            let centroid = vertex_centroid(polygon);
            return PoleOfInaccessibility {
                point:          centroid,
                distance:       0.0,
                cells_searched: 0,
                complete:       true,
                degenerate:     true
            };
        }
    };

    let precision       = precision.max(1e-9);
    let max_cells       = max_cells.max(1);
    let min             = bounds.min();

    // Grow the cells until the initial grid fits within the cell limit
    let grid_size       = |cell_size: f64| ((bounds.width()/cell_size).ceil().max(1.0), (bounds.height()/cell_size).ceil().max(1.0));
    let mut cell_size   = bounds.width().min(bounds.height());
    let mut grid        = grid_size(cell_size);
    while grid.0 * grid.1 > max_cells as f64 {
        cell_size   *= 2.0;
        grid        = grid_size(cell_size);
    }
    let half_size       = cell_size / 2.0;

    // Cover the polygon with the initial set of cells
    let mut cells       = BinaryHeap::new();
    for col in 0..(grid.0 as usize) {
        for row in 0..(grid.1 as usize) {
            let x = min.x() + (col as f64)*cell_size;
            let y = min.y() + (row as f64)*cell_size;
            cells.push(Cell::new(Coord2(x + half_size, y + half_size), half_size, polygon));
        }
    }

    // The centroid and the center of the bounding box are the initial guesses
    let mut best        = Cell::new(polygon_centroid(polygon), 0.0, polygon);
    let bounds_cell     = Cell::new(bounds.center(), 0.0, polygon);
    if bounds_cell.distance > best.distance {
        best = bounds_cell;
    }

    let mut cells_searched  = cells.len();
    let mut complete        = true;

    while let Some(cell) = cells.pop() {
        if cell.distance > best.distance {
            best = cell;
        }

        // Skip cells that can't contain a better point
        if cell.max_distance - best.distance <= precision {
            continue;
        }

        if cells_searched + 4 > max_cells {
            complete = false;
            break;
        }

        let half_size = cell.half_size / 2.0;
        for (dx, dy) in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)].iter() {
            cells.push(Cell::new(Coord2(cell.center.x() + dx*half_size, cell.center.y() + dy*half_size), half_size, polygon));
        }
        cells_searched += 4;
    }

    PoleOfInaccessibility {
        point:          best.center,
        distance:       best.distance,
        cells_searched: cells_searched,
        complete:       complete,
        degenerate:     false
    }
}
