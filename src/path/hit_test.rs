use super::path::*;
use super::super::error::*;
use super::super::command::*;

use flo_morph_curves::*;
use flo_morph_curves::polygon::*;

use serde::{Serialize, Deserialize};

///
/// Function that decides if a point is close enough to a command to count as a hit
///
/// This is passed the distance between the point and the command, and the command itself
///
pub type RangeFn = Box<dyn Fn(f64, &Command) -> bool + Send + Sync>;

///
/// Describes what counts as a hit when hit-testing a path
///
/// End points and segments are only tested if a function is supplied to decide if a point is close enough to
/// them. Shapes are only tested if `find_shapes_in_range` is set.
///
#[derive(Default)]
pub struct HitOptions {
    /// Decides if a point is close enough to the end of a command to hit it
    pub point_in_range: Option<RangeFn>,

    /// Decides if a point is close enough to a command to hit it
    pub segment_in_range: Option<RangeFn>,

    /// Set to test if the point is inside any closed subpaths
    pub find_shapes_in_range: bool,

    /// If set, only the subpaths with these indexes are tested
    pub restrict_to_sub_idx: Option<Vec<usize>>,

    /// How the inside of a shape is decided
    pub fill_rule: FillRule
}

impl HitOptions {
    ///
    /// Hit options that don't test anything
    ///
    pub fn new() -> HitOptions {
        HitOptions::default()
    }

    ///
    /// Counts a point within `tolerance` of the end of a command as an end point hit
    ///
    pub fn with_point_tolerance(self, tolerance: f64) -> HitOptions {
        self.with_point_in_range(move |distance, _cmd| distance <= tolerance)
    }

    ///
    /// Counts a point within `tolerance` of a command as a segment hit
    ///
    pub fn with_segment_tolerance(self, tolerance: f64) -> HitOptions {
        self.with_segment_in_range(move |distance, _cmd| distance <= tolerance)
    }

    ///
    /// Supplies a function to decide if a point is near enough to a command's end point to be a hit
    ///
    pub fn with_point_in_range<TFn: 'static+Fn(f64, &Command) -> bool+Send+Sync>(mut self, point_in_range: TFn) -> HitOptions {
        self.point_in_range = Some(Box::new(point_in_range));
        self
    }

    ///
    /// Supplies a function to decide if a point is near enough to a command to be a hit
    ///
    pub fn with_segment_in_range<TFn: 'static+Fn(f64, &Command) -> bool+Send+Sync>(mut self, segment_in_range: TFn) -> HitOptions {
        self.segment_in_range = Some(Box::new(segment_in_range));
        self
    }

    ///
    /// Sets whether or not points inside closed subpaths count as hits
    ///
    pub fn with_shapes(mut self, find_shapes_in_range: bool) -> HitOptions {
        self.find_shapes_in_range = find_shapes_in_range;
        self
    }

    ///
    /// Only tests the subpaths with the specified indexes
    ///
    pub fn restricted_to(mut self, sub_indexes: Vec<usize>) -> HitOptions {
        self.restrict_to_sub_idx = Some(sub_indexes);
        self
    }

    ///
    /// Sets the fill rule used to decide if a point is inside a shape
    ///
    pub fn with_fill_rule(mut self, fill_rule: FillRule) -> HitOptions {
        self.fill_rule = fill_rule;
        self
    }

    ///
    /// True if the subpath with the specified index should be tested
    ///
    fn includes_sub_path(&self, sub_idx: usize) -> bool {
        match &self.restrict_to_sub_idx {
            Some(indexes)   => indexes.contains(&sub_idx),
            None            => true
        }
    }
}

///
/// The result of hit-testing a path
///
/// The three kinds of hit are tested independently, so a point can hit an end point and be inside a shape at the
/// same time.
///
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct HitResult {
    /// The commands whose end points were hit
    pub end_point_hits: Vec<ProjectionOntoPath>,

    /// The commands that were hit
    pub segment_hits: Vec<ProjectionOntoPath>,

    /// The indexes of the closed subpaths that contain the point
    pub shape_hits: Vec<usize>
}

impl HitResult {
    #[inline] pub fn is_hit(&self) -> bool { self.is_end_point_hit() || self.is_segment_hit() || self.is_shape_hit() }
    #[inline] pub fn is_end_point_hit(&self) -> bool { !self.end_point_hits.is_empty() }
    #[inline] pub fn is_segment_hit(&self) -> bool { !self.segment_hits.is_empty() }
    #[inline] pub fn is_shape_hit(&self) -> bool { !self.shape_hits.is_empty() }
}

impl Path {
    ///
    /// Tests a point against the end points, the commands and the shapes in this path
    ///
    /// Restricting the test to a subpath that doesn't exist is an index error.
    ///
    pub fn hit_test(&self, point: &Coord2, options: &HitOptions) -> Result<HitResult, PathError> {
        if let Some(restrict_to_sub_idx) = &options.restrict_to_sub_idx {
            for sub_idx in restrict_to_sub_idx.iter() {
                self.sub_path(*sub_idx)?;
            }
        }

        let mut result  = HitResult::default();
        let sub_paths   = self.sub_paths().iter()
            .enumerate()
            .filter(|(sub_idx, _)| options.includes_sub_path(*sub_idx))
            .collect::<Vec<_>>();

        // End points
        if let Some(point_in_range) = &options.point_in_range {
            for (sub_idx, sub_path) in sub_paths.iter() {
                for (cmd_idx, cmd) in sub_path.commands().iter().enumerate() {
                    let end_point   = cmd.end_point();
                    let distance    = end_point.distance_to(point);

                    if point_in_range(distance, &**cmd) {
                        result.end_point_hits.push(ProjectionOntoPath {
                            index:      PathIndex::new(*sub_idx, cmd_idx),
                            projection: Projection { point: end_point, t: 1.0, distance: distance }
                        });
                    }
                }
            }
        }

        // Segments
        if let Some(segment_in_range) = &options.segment_in_range {
            for (sub_idx, sub_path) in sub_paths.iter() {
                for (cmd_idx, cmd) in sub_path.commands().iter().enumerate().skip(1) {
                    let projection = cmd.project(point);

                    if segment_in_range(projection.distance, &**cmd) {
                        result.segment_hits.push(ProjectionOntoPath { index: PathIndex::new(*sub_idx, cmd_idx), projection });
                    }
                }
            }
        }

        // Shapes
        if options.find_shapes_in_range {
            let tolerance = self.options().flatten_tolerance;

            for (sub_idx, sub_path) in sub_paths.iter() {
                if !sub_path.is_closed() || !sub_path.bounding_box().contains_point(point) {
                    continue;
                }

                let polygon = sub_path.to_polygon(tolerance);
                if polygon_contains_point(&polygon, point, options.fill_rule) {
                    result.shape_hits.push(*sub_idx);
                }
            }
        }

        Ok(result)
    }
}
