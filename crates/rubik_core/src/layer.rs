use std::fmt;
use std::str::FromStr;

use strum::VariantArray;

use crate::{Face, InvalidLayer, ParseMoveError};

/// Rotatable layer of the cube: one of the six outer faces or one of the three
/// middle slices.
///
/// Each slice turns in the same sense as one of the faces on its axis, so
/// "clockwise" for a slice means clockwise as seen from that face.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::IntoStaticStr,
    strum::VariantArray,
    strum::FromRepr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[repr(u8)]
pub enum LayerId {
    /// Up face.
    Up = 0,
    /// Down face.
    Down = 1,
    /// Front face.
    Front = 2,
    /// Back face.
    Back = 3,
    /// Right face.
    Right = 4,
    /// Left face.
    Left = 5,
    /// Horizontal slice between up and down, turning with up.
    Middle = 6,
    /// Vertical slice between left and right, turning with right.
    Vertical = 7,
    /// Vertical slice between front and back, turning with front.
    Standing = 8,
}

impl LayerId {
    /// Number of layers.
    pub const COUNT: usize = 9;

    /// Returns an iterator over all layers, outer faces first.
    pub fn iter() -> impl Clone + DoubleEndedIterator<Item = LayerId> + ExactSizeIterator {
        Self::VARIANTS.iter().copied()
    }

    /// Returns the ordinal of the layer.
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Returns the face whose own stickers turn with this layer, or `None` for
    /// a slice.
    pub fn own_face(self) -> Option<Face> {
        match self {
            LayerId::Up => Some(Face::Up),
            LayerId::Down => Some(Face::Down),
            LayerId::Front => Some(Face::Front),
            LayerId::Back => Some(Face::Back),
            LayerId::Right => Some(Face::Right),
            LayerId::Left => Some(Face::Left),
            LayerId::Middle | LayerId::Vertical | LayerId::Standing => None,
        }
    }

    /// Returns the face that defines the rotation axis and the meaning of
    /// "clockwise" for this layer.
    pub fn axis_face(self) -> Face {
        match self {
            LayerId::Up | LayerId::Middle => Face::Up,
            LayerId::Down => Face::Down,
            LayerId::Front | LayerId::Standing => Face::Front,
            LayerId::Back => Face::Back,
            LayerId::Right | LayerId::Vertical => Face::Right,
            LayerId::Left => Face::Left,
        }
    }

    /// Returns the distance of the layer from the center of the cube along
    /// its axis, in cubies: 1 for an outer face and 0 for a slice.
    pub fn depth(self) -> i8 {
        match self.own_face() {
            Some(_) => 1,
            None => 0,
        }
    }

    /// Returns whether the layer is a middle slice.
    pub fn is_slice(self) -> bool {
        self.own_face().is_none()
    }
}

impl From<Face> for LayerId {
    fn from(face: Face) -> Self {
        match face {
            Face::Up => LayerId::Up,
            Face::Down => LayerId::Down,
            Face::Front => LayerId::Front,
            Face::Back => LayerId::Back,
            Face::Right => LayerId::Right,
            Face::Left => LayerId::Left,
        }
    }
}

impl FromStr for LayerId {
    type Err = InvalidLayer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::iter()
            .find(|layer| <&str>::from(*layer).eq_ignore_ascii_case(name))
            .ok_or_else(|| InvalidLayer::new(s))
    }
}

impl TryFrom<u8> for LayerId {
    type Error = InvalidLayer;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_repr(value).ok_or_else(|| InvalidLayer::new(value))
    }
}

/// Direction of a quarter turn, as seen from outside the layer's axis face.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::VariantArray,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Direction {
    /// Clockwise
    #[default]
    #[strum(to_string = "cw", serialize = "clockwise")]
    Clockwise,
    /// Counterclockwise
    #[strum(
        to_string = "ccw",
        serialize = "counterclockwise",
        serialize = "counter_clockwise"
    )]
    CounterClockwise,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Returns the sign of the rotation angle about the axis face's outward
    /// normal, using the right-hand rule. Clockwise is negative.
    pub fn angle_sign(self) -> f32 {
        match self {
            Direction::Clockwise => -1.0,
            Direction::CounterClockwise => 1.0,
        }
    }
}

/// Quarter turn of one layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// Layer to turn.
    pub layer: LayerId,
    /// Direction to turn it.
    pub direction: Direction,
}

impl Move {
    /// Constructs a move.
    pub const fn new(layer: LayerId, direction: Direction) -> Self {
        Self { layer, direction }
    }
    /// Constructs a clockwise move.
    pub const fn cw(layer: LayerId) -> Self {
        Self::new(layer, Direction::Clockwise)
    }
    /// Constructs a counterclockwise move.
    pub const fn ccw(layer: LayerId) -> Self {
        Self::new(layer, Direction::CounterClockwise)
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn rev(self) -> Self {
        Self::new(self.layer, self.direction.rev())
    }

    /// Returns an iterator over every possible move.
    pub fn iter_all() -> impl Clone + Iterator<Item = Move> {
        LayerId::iter().flat_map(|layer| {
            Direction::VARIANTS
                .iter()
                .map(move |&direction| Move::new(layer, direction))
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            Direction::Clockwise => write!(f, "{}", self.layer),
            Direction::CounterClockwise => write!(f, "{}:{}", self.layer, self.direction),
        }
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parses a move like `front` or `front:ccw`. The direction defaults to
    /// clockwise.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (layer, direction) = match s.split_once(':') {
            Some((layer, direction)) => (
                layer,
                direction
                    .trim()
                    .parse()
                    .map_err(|_| ParseMoveError::InvalidDirection(direction.to_string()))?,
            ),
            None => (s, Direction::Clockwise),
        };
        Ok(Move::new(layer.parse()?, direction))
    }
}
