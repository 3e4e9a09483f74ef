use super::error::*;

use serde::{Serialize, Deserialize};

///
/// Options that control how paths are written out and how their geometry is approximated
///
/// These can be loaded from JSON, with any missing fields taking their default values:
///
/// ```
/// # use flo_morph::*;
/// let options = PathOptions::from_json(r#"{ "precision": 2 }"#).unwrap();
/// assert!(options.precision == 2);
/// assert!(options.max_pole_cells == PathOptions::default().max_pole_cells);
/// ```
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathOptions {
    /// Number of decimal places used for the coordinates in a path string
    pub precision: usize,

    /// Maximum distance between a curve and the polyline used to approximate it for shape hit tests and pole searches
    pub flatten_tolerance: f64,

    /// The pole of inaccessibility search stops once it can't improve the result by more than this distance
    pub pole_precision: f64,

    /// The maximum number of cells examined by the pole of inaccessibility search
    pub max_pole_cells: usize
}

impl Default for PathOptions {
    fn default() -> PathOptions {
        PathOptions {
            precision:          3,
            flatten_tolerance:  0.05,
            pole_precision:     0.01,
            max_pole_cells:     10_000
        }
    }
}

impl PathOptions {
    ///
    /// Reads a set of options from a JSON string
    ///
    pub fn from_json(json: &str) -> Result<PathOptions, PathError> {
        let options: PathOptions = serde_json::from_str(json)?;
        options.validate()?;

        Ok(options)
    }

    ///
    /// Writes these options as a JSON string
    ///
    pub fn to_json(&self) -> Result<String, PathError> {
        Ok(serde_json::to_string(self)?)
    }

    ///
    /// Checks that these options are usable
    ///
    pub fn validate(&self) -> Result<(), PathError> {
        if self.precision > 15 {
            Err(PathError::ConfigurationError(format!("precision must be 15 or fewer decimal places (was {})", self.precision)))
        } else if !(self.flatten_tolerance > 0.0) {
            Err(PathError::ConfigurationError(format!("flatten_tolerance must be positive (was {})", self.flatten_tolerance)))
        } else if !(self.pole_precision > 0.0) {
            Err(PathError::ConfigurationError(format!("pole_precision must be positive (was {})", self.pole_precision)))
        } else if self.max_pole_cells == 0 {
            Err(PathError::ConfigurationError("max_pole_cells must be at least 1".to_string()))
        } else {
            Ok(())
        }
    }
}
