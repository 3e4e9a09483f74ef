use super::path::*;
use super::super::error::*;
use super::super::command::*;
use super::super::sub_path::*;

use flo_morph_curves::*;
use flo_morph_curves::polygon::*;

use log::*;

/// t values this close to the end of a command are treated as being at the end when removing duplicate intersections
pub const INTERSECTION_T_TOLERANCE: f64 = 1e-6;

///
/// True if a command doesn't go anywhere
///
fn is_degenerate(cmd: &Command) -> bool {
    let start = cmd.start_point();
    cmd.points().iter().all(|point| *point == start)
}

///
/// Counts the number of times a line crosses a subpath
///
/// Commands meet at their end points, so a line passing through the point where two commands join would be found
/// once at the end of the first command and again at the start of the second. These are counted once.
///
fn sub_path_intersection_count(sub_path: &SubPath, line: &(Coord2, Coord2)) -> usize {
    let hits = sub_path.commands().iter()
        .skip(1)
        .filter(|cmd| !is_degenerate(cmd))
        .map(|cmd| cmd.intersect_line(line))
        .collect::<Vec<_>>();

    let at_end      = |hits: &Vec<f64>| hits.last().map(|t| *t >= 1.0-INTERSECTION_T_TOLERANCE).unwrap_or(false);
    let at_start    = |hits: &Vec<f64>| hits.first().map(|t| *t <= INTERSECTION_T_TOLERANCE).unwrap_or(false);

    let mut count = hits.iter().map(|cmd_hits| cmd_hits.len()).sum::<usize>();

    for (first, second) in hits.iter().zip(hits.iter().skip(1)) {
        if at_end(first) && at_start(second) {
            count -= 1;
        }
    }

    // The last command of a closed subpath joins up with the first
    if sub_path.is_closed() {
        if let (Some(first), Some(last)) = (hits.first(), hits.last()) {
            let distinct = hits.len() > 1 || first.len() > 1;

            if distinct && at_end(last) && at_start(first) {
                count -= 1;
            }
        }
    }

    count
}

impl Path {
    ///
    /// Finds the point on this path nearest to the specified point
    ///
    /// If `restrict_to_sub_idx` is set, only that subpath is considered. Move commands are ignored unless there are
    /// no other commands to project onto. When two commands are equally near, the one with the lower index wins.
    /// Returns None if there's nothing to project on to, or an index error if the restricted subpath doesn't exist.
    ///
    pub fn project(&self, point: &Coord2, restrict_to_sub_idx: Option<usize>) -> Result<Option<ProjectionOntoPath>, PathError> {
        if let Some(sub_idx) = restrict_to_sub_idx {
            self.sub_path(sub_idx)?;
        }

        let candidates = self.sub_paths().iter()
            .enumerate()
            .filter(|(sub_idx, _)| restrict_to_sub_idx.map(|restrict| restrict == *sub_idx).unwrap_or(true))
            .collect::<Vec<_>>();

        let include_moves   = !candidates.iter().any(|(_, sub_path)| sub_path.has_drawing_commands());
        let mut nearest     = None;

        for (sub_idx, sub_path) in candidates {
            for (cmd_idx, cmd) in sub_path.commands().iter().enumerate() {
                if !include_moves && cmd.command_type() == CommandType::MoveTo {
                    continue;
                }

                let projection  = cmd.project(point);
                let is_nearer   = match &nearest {
                    None                                        => true,
                    Some(ProjectionOntoPath { projection: best, .. }) => projection.distance < best.distance
                };

                if is_nearer {
                    nearest = Some(ProjectionOntoPath { index: PathIndex::new(sub_idx, cmd_idx), projection });
                }
            }
        }

        Ok(nearest)
    }

    ///
    /// Counts the number of times a line segment crosses this path
    ///
    pub fn intersects(&self, line: &(Coord2, Coord2)) -> usize {
        self.sub_paths().iter()
            .map(|sub_path| sub_path_intersection_count(sub_path, line))
            .sum()
    }

    ///
    /// Finds the point inside a closed subpath that is furthest away from its edges
    ///
    /// This is a good place to put a label or a handle for a shape. Curves are approximated using the path's
    /// `flatten_tolerance`, and the search stops when it is within `pole_precision` of the best point or after it
    /// has examined `max_pole_cells` cells.
    ///
    pub fn pole_of_inaccessibility(&self, sub_idx: usize) -> Result<Coord2, PathError> {
        let sub_path = self.sub_path(sub_idx)?;

        if !sub_path.is_closed() {
            return Err(PathError::StructuralError(format!("subpath {} must be closed to find its pole of inaccessibility", sub_idx)));
        }

        let options = self.options();
        let polygon = sub_path.to_polygon(options.flatten_tolerance);
        let pole    = pole_of_inaccessibility(&polygon, options.pole_precision, options.max_pole_cells);

        if pole.degenerate {
            warn!("Subpath {} has no area: using the centroid of its points as its pole of inaccessibility", sub_idx);
        } else if !pole.complete {
            warn!("Stopped searching for the pole of inaccessibility of subpath {} after {} cells (distance to edge {})", sub_idx, pole.cells_searched, pole.distance);
        }

        Ok(pole.point)
    }
}
