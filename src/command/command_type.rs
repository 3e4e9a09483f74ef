use serde::{Serialize, Deserialize};

///
/// The types of drawing instruction that can appear in a path
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandType {
    MoveTo,
    LineTo,
    QuadraticCurveTo,
    CubicCurveTo,
    ArcTo,
    ClosePath
}

impl CommandType {
    ///
    /// The letter used for this command in an (absolute) SVG path string
    ///
    pub fn svg_letter(&self) -> char {
        use self::CommandType::*;

        match self {
            MoveTo              => 'M',
            LineTo              => 'L',
            QuadraticCurveTo    => 'Q',
            CubicCurveTo        => 'C',
            ArcTo               => 'A',
            ClosePath           => 'Z'
        }
    }

    ///
    /// The number of control points a command of this type has (including its start point, if it has one)
    ///
    pub fn num_points(&self) -> usize {
        use self::CommandType::*;

        match self {
            MoveTo              => 1,
            LineTo              => 2,
            QuadraticCurveTo    => 3,
            CubicCurveTo        => 4,
            ArcTo               => 2,
            ClosePath           => 2
        }
    }

    ///
    /// True if this command draws something (ie, it's anything other than a move)
    ///
    #[inline]
    pub fn is_drawing(&self) -> bool {
        *self != CommandType::MoveTo
    }
}
