/// Length we consider a small distance (points closer than this far apart are considered to be the same)
pub const SMALL_DISTANCE: f64 = 0.001;

/// Length we consider a 'close' distance (we may round to this precision or cut out points that are closer than this)
pub const CLOSE_DISTANCE: f64 = 0.01;

/// Amount a root may lie outside of the 0-1 range of a curve and still be snapped onto it
pub const ROOT_SLOP: f64 = 0.001;

/// Difference in t values that we consider to be the same position on a curve
pub const SMALL_T_DISTANCE: f64 = 0.0000001;
