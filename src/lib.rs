//!
//! # flo_morph
//!
//! Immutable compound vector paths, as described by SVG path strings, along with the queries needed to edit and
//! animate them.
//!
//! ```
//! # use flo_morph::*;
//! let square      = Path::parse("M 0 0 L 10 0 L 10 10 L 0 10 Z").unwrap();
//! let triangle    = Path::parse("M 0 0 L 10 0 L 5 10 L 0 0 Z").unwrap();
//!
//! assert!(square.is_morphable_with(&triangle));
//! assert!(square.intersects(&(Coord2(-5.0, 5.0), Coord2(15.0, 5.0))) == 2);
//!
//! let nearest = square.project(&Coord2(5.0, -3.0), None).unwrap().unwrap();
//! assert!(nearest.index == PathIndex::new(0, 1));
//! ```
//!
//! A `Path` is a list of `SubPath`s, each of which is a list of `Command`s. None of these are ever changed once
//! they're created: `Path::mutate()` returns a `PathMutator`, which stages a set of edits and builds a new path
//! from them. Paths share any parts that an edit leaves unchanged, so keeping old versions around (for undo, for
//! example) is cheap.
//!
//! Commands have an identity that survives edits. When a command is split, both halves keep the identity of the
//! original command, so `Path::connected_split_segments()` can find every piece of it later on.
//!
//! The geometry itself is implemented by the `flo_morph_curves` crate, whose point type is re-exported here.
//!
#![warn(bare_trait_objects)]

mod error;
mod options;
mod command;
mod sub_path;
mod path;
mod mutator;

pub use self::error::*;
pub use self::options::*;
pub use self::command::*;
pub use self::sub_path::*;
pub use self::path::*;
pub use self::mutator::*;

pub use flo_morph_curves::{Coord2, Coordinate, Coordinate2D, Bounds, BoundingBox};
pub use flo_morph_curves::polygon::FillRule;

pub use flo_morph_curves as curves;
