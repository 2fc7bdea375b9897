//! Per-sticker transforms for drawing the cube.

use cgmath::{Deg, EuclideanSpace, One, Point3, Quaternion, Rotation3, Vector3};
use rubik_core::{Color, CubeState, Move, STICKER_COUNT, StickerPos};

/// Distance between the centers of adjacent cubies.
pub const CUBIE_SPACING: f32 = 1.0;
/// Distance from a cubie's center to the stickers on its surface.
pub const STICKER_OFFSET: f32 = 0.5 * CUBIE_SPACING;

fn to_vector(v: [i8; 3]) -> Vector3<f32> {
    Vector3::new(v[0] as f32, v[1] as f32, v[2] as f32)
}

/// Display information for one sticker slot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StickerRenderData {
    /// Slot this sticker sits in on the logical cube.
    pub pos: StickerPos,
    /// Color currently in the slot.
    pub color: Color,
    /// Resting center of the sticker.
    pub center: Point3<f32>,
    /// Resting outward normal of the sticker.
    pub normal: Vector3<f32>,
    /// Rotation from the resting position to the displayed position.
    pub rotation: Quaternion<f32>,
}
impl StickerRenderData {
    /// Returns the displayed center of the sticker.
    pub fn displayed_center(&self) -> Point3<f32> {
        Point3::from_vec(self.rotation * self.center.to_vec())
    }
    /// Returns the displayed outward normal of the sticker.
    pub fn displayed_normal(&self) -> Vector3<f32> {
        self.rotation * self.normal
    }
}

/// Display information for every sticker slot, in [`StickerPos::ordinal()`]
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeRenderData {
    stickers: Vec<StickerRenderData>,
}
impl CubeRenderData {
    /// Computes render data for `state`, with the stickers of the animating
    /// layer (if any) rotated partway through `anim`.
    ///
    /// `state` must not include the animating move yet.
    pub fn new(state: &CubeState, anim: Option<(Move, f32)>) -> Self {
        let layer_rotation = anim.map(|(mv, t)| {
            let axis = to_vector(mv.layer.axis_face().normal());
            let end = Quaternion::from_axis_angle(axis, Deg(90.0 * mv.direction.angle_sign()));
            (mv.layer, Quaternion::one().slerp(end, t))
        });

        let stickers = StickerPos::iter_all()
            .map(|pos| {
                let normal = to_vector(pos.normal());
                let center = Point3::from_vec(to_vector(pos.cubie()) * CUBIE_SPACING)
                    + normal * STICKER_OFFSET;
                let rotation = match layer_rotation {
                    Some((layer, q)) if layer.contains_sticker(pos) => q,
                    _ => Quaternion::one(),
                };
                StickerRenderData {
                    pos,
                    color: state.sticker(pos),
                    center,
                    normal,
                    rotation,
                }
            })
            .collect::<Vec<_>>();
        debug_assert_eq!(stickers.len(), STICKER_COUNT);

        Self { stickers }
    }

    /// Returns render data for a single sticker slot.
    pub fn get(&self, pos: StickerPos) -> &StickerRenderData {
        &self.stickers[pos.ordinal()]
    }
    /// Returns render data for every sticker slot.
    pub fn stickers(&self) -> &[StickerRenderData] {
        &self.stickers
    }
}
