use std::ops::{Index, IndexMut};

use strum::VariantArray;

use crate::Color;

/// Outer face of the cube.
///
/// Coordinates use `x` toward [`Face::Right`], `y` toward [`Face::Up`], and
/// `z` toward [`Face::Front`].
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
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
    strum::FromRepr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
#[repr(u8)]
pub enum Face {
    /// Top face (`+y`).
    Up = 0,
    /// Bottom face (`-y`).
    Down = 1,
    /// Face toward the viewer (`+z`).
    Front = 2,
    /// Face away from the viewer (`-z`).
    Back = 3,
    /// Right face (`+x`).
    Right = 4,
    /// Left face (`-x`).
    Left = 5,
}

impl Face {
    /// Number of faces.
    pub const COUNT: usize = 6;

    /// Returns an iterator over all faces, in ordinal order.
    pub fn iter() -> impl Clone + DoubleEndedIterator<Item = Face> + ExactSizeIterator {
        Self::VARIANTS.iter().copied()
    }

    /// Returns the ordinal of the face, which is used to index [`PerFace`].
    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Returns the face on the other side of the cube.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Right => Face::Left,
            Face::Left => Face::Right,
        }
    }

    /// Returns whether the two faces share an edge.
    pub fn is_adjacent_to(self, other: Face) -> bool {
        self != other && self != other.opposite()
    }

    /// Returns the outward unit normal of the face.
    pub fn normal(self) -> [i8; 3] {
        match self {
            Face::Up => [0, 1, 0],
            Face::Down => [0, -1, 0],
            Face::Front => [0, 0, 1],
            Face::Back => [0, 0, -1],
            Face::Right => [1, 0, 0],
            Face::Left => [-1, 0, 0],
        }
    }

    /// Returns the face whose outward normal is `normal`, or `None` if it is
    /// not an axis-aligned unit vector.
    pub fn from_normal(normal: [i8; 3]) -> Option<Self> {
        Self::iter().find(|f| f.normal() == normal)
    }

    /// Returns the color of every sticker on this face in the solved state.
    pub fn solved_color(self) -> Color {
        match self {
            Face::Up => Color::WHITE,
            Face::Down => Color::YELLOW,
            Face::Front => Color::BLUE,
            Face::Back => Color::GREEN,
            Face::Right => Color::RED,
            Face::Left => Color::ORANGE,
        }
    }
}

/// Value for each [`Face`], backed by a fixed-size array.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerFace<T>(pub [T; Face::COUNT]);

impl<T> PerFace<T> {
    /// Constructs a new `PerFace` by calling `f` for each face in order.
    pub fn from_fn(mut f: impl FnMut(Face) -> T) -> Self {
        Self(std::array::from_fn(|i| f(Face::VARIANTS[i])))
    }

    /// Returns an iterator over faces and references to their values.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Face, &T)> + ExactSizeIterator {
        Face::iter().zip(&self.0)
    }
    /// Returns an iterator over faces and mutable references to their values.
    pub fn iter_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = (Face, &mut T)> + ExactSizeIterator {
        Face::iter().zip(&mut self.0)
    }
    /// Returns an iterator over the values, in face order.
    pub fn values(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Applies `f` to each value.
    pub fn map<U>(self, mut f: impl FnMut(Face, T) -> U) -> PerFace<U> {
        let mut i = 0;
        PerFace(self.0.map(|value| {
            let face = Face::VARIANTS[i];
            i += 1;
            f(face, value)
        }))
    }
}

impl<T> Index<Face> for PerFace<T> {
    type Output = T;

    fn index(&self, face: Face) -> &Self::Output {
        &self.0[face.ordinal()]
    }
}
impl<T> IndexMut<Face> for PerFace<T> {
    fn index_mut(&mut self, face: Face) -> &mut Self::Output {
        &mut self.0[face.ordinal()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_names_roundtrip() {
        for face in Face::iter() {
            let name = face.to_string();
            assert_eq!(name.parse::<Face>(), Ok(face));
            assert_eq!(name.to_uppercase().parse::<Face>(), Ok(face));
        }
        assert!("top".parse::<Face>().is_err());
    }

    #[test]
    fn test_opposite_faces() {
        for face in Face::iter() {
            assert_ne!(face, face.opposite());
            assert_eq!(face, face.opposite().opposite());
            assert!(!face.is_adjacent_to(face.opposite()));
            let [x, y, z] = face.normal();
            assert_eq!(face.opposite().normal(), [-x, -y, -z]);
            assert_eq!(Face::from_normal(face.normal()), Some(face));
        }
        assert_eq!(Face::iter().filter(|&f| f.is_adjacent_to(Face::Up)).count(), 4);
    }

    #[test]
    fn test_solved_colors_are_distinct() {
        let colors = PerFace::from_fn(Face::solved_color);
        for (a, ca) in colors.iter() {
            for (b, cb) in colors.iter() {
                assert_eq!(a == b, ca == cb);
            }
        }
    }
}
