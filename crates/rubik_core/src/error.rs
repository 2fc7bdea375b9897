use thiserror::Error;

/// Error produced when a layer identifier does not name any rotatable layer.
///
/// This is the only error a move can produce. Once a [`crate::LayerId`] exists,
/// rotating it always succeeds.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("invalid layer {name:?}")]
pub struct InvalidLayer {
    /// Identifier that was rejected.
    pub name: String,
}
impl InvalidLayer {
    /// Constructs an error for the identifier `name`.
    pub fn new(name: impl ToString) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// Error produced when parsing a [`crate::Move`] from a string like
/// `front:ccw`.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseMoveError {
    /// Unknown layer
    #[error(transparent)]
    InvalidLayer(#[from] InvalidLayer),
    /// Unknown direction
    #[error("invalid direction {0:?}; expected \"cw\" or \"ccw\"")]
    InvalidDirection(String),
}
