use serde::{Deserialize, Serialize};

pub use interpolation::InterpolateFn;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Whether to speed up twists when several are queued.
    pub dynamic_twist_speed: bool,
    /// Duration of one quarter turn, in seconds.
    pub twist_duration: f32,
    pub twist_interpolation: InterpolateFn,
}
impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            dynamic_twist_speed: true,
            twist_duration: 0.5,
            twist_interpolation: InterpolateFn::default(),
        }
    }
}

pub mod interpolation {
    //! Interpolation functions.

    use std::f32::consts::PI;

    use serde::{Deserialize, Serialize};

    /// Function that maps a float from the range 0.0 to 1.0 to another float
    /// from 0.0 to 1.0.
    #[derive(
        Serialize,
        Deserialize,
        Debug,
        Default,
        Copy,
        Clone,
        PartialEq,
        Eq,
        Hash,
        strum::VariantArray,
        strum::Display,
    )]
    #[serde(rename_all = "snake_case")]
    #[strum(serialize_all = "snake_case")]
    pub enum InterpolateFn {
        Lerp,
        Cosine,
        /// Quadratic ease-out, `t * (2 - t)`.
        #[default]
        EaseOut,
    }

    impl InterpolateFn {
        /// Returns the interpolation value in the range [0, 1] for `t` in the
        /// range [0, 1].
        pub fn interpolate(self, t: f32) -> f32 {
            match self {
                Self::Lerp => t,
                Self::Cosine => (1.0 - (t * PI).cos()) / 2.0,
                Self::EaseOut => t * (2.0 - t),
            }
        }
    }

}
