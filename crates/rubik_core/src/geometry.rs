//! Integer geometry of stickers, for renderers and for checking the adjacency
//! table against real rotations.
//!
//! Cubies sit at integer coordinates from -1 to 1 on each axis, with `x`
//! toward [`Face::Right`], `y` toward [`Face::Up`], and `z` toward
//! [`Face::Front`].

use crate::{Direction, Face, GRID_SIZE, LayerId, StickerPos};

/// Integer 3D vector.
pub type IVec3 = [i8; 3];

/// Returns the dot product of two vectors.
pub fn dot(a: IVec3, b: IVec3) -> i8 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Returns the cross product of two vectors.
pub fn cross(a: IVec3, b: IVec3) -> IVec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Rotates `v` a quarter turn around the outward normal of `axis`, in
/// `direction` as seen from outside `axis`.
pub fn rotate_quarter(axis: Face, v: IVec3, direction: Direction) -> IVec3 {
    let n = axis.normal();
    let c = cross(n, v);
    let d = dot(n, v);
    // Rodrigues' formula with cos = 0 and sin = ±1.
    let s = match direction {
        Direction::Clockwise => -1,
        Direction::CounterClockwise => 1,
    };
    [
        s * c[0] + n[0] * d,
        s * c[1] + n[1] * d,
        s * c[2] + n[2] * d,
    ]
}

impl StickerPos {
    /// Returns the position of the cubie that this sticker is on.
    pub fn cubie(self) -> IVec3 {
        let r = self.row() as i8;
        let c = self.col() as i8;
        match self.face {
            Face::Up => [c - 1, 1, r - 1],
            Face::Down => [c - 1, -1, 1 - r],
            Face::Front => [c - 1, 1 - r, 1],
            Face::Back => [1 - c, 1 - r, -1],
            Face::Right => [1, 1 - r, 1 - c],
            Face::Left => [-1, 1 - r, c - 1],
        }
    }

    /// Returns the outward normal of the sticker.
    pub fn normal(self) -> IVec3 {
        self.face.normal()
    }

    /// Returns the sticker on cubie `cubie` facing `normal`, if there is one.
    pub fn from_geometry(cubie: IVec3, normal: IVec3) -> Option<Self> {
        let face = Face::from_normal(normal)?;
        (0..(GRID_SIZE * GRID_SIZE) as u8)
            .map(|index| StickerPos { face, index })
            .find(|pos| pos.cubie() == cubie)
    }
}

impl LayerId {
    /// Returns whether the cubie at `cubie` belongs to this layer.
    pub fn contains_cubie(self, cubie: IVec3) -> bool {
        dot(cubie, self.axis_face().normal()) == self.depth()
    }

    /// Returns whether the sticker at `pos` turns with this layer.
    pub fn contains_sticker(self, pos: StickerPos) -> bool {
        self.contains_cubie(pos.cubie())
    }
}
