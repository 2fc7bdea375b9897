//! Topology of the cube: which stickers each layer carries around with it.
//!
//! Each face's stickers are numbered 0..9 in row-major order as seen from
//! outside that face:
//!
//! - [`Face::Front`], [`Face::Back`], [`Face::Right`], and [`Face::Left`] have
//!   row 0 along their edge with [`Face::Up`].
//! - [`Face::Up`] has row 0 along its edge with [`Face::Back`].
//! - [`Face::Down`] has row 0 along its edge with [`Face::Front`].
//!
//! Because the faces are each viewed from their own outside, neighboring faces
//! do not always agree on which way their rows and columns run. The index
//! triples below already account for that, so a triple can be copied
//! position-for-position onto the next triple in its ring.
//!
//! This table is the only place that knows how the faces are stitched
//! together.

use std::fmt;

use smallvec::SmallVec;

use crate::{Face, LayerId};

/// Adjacency information for a single layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LayerAdjacency {
    /// Face whose own stickers rotate with the layer, or `None` for a slice.
    pub own_face: Option<Face>,
    /// Four strips of three stickers each on the faces surrounding the layer.
    ///
    /// A clockwise turn moves the sticker at `ring[i].1[j]` on `ring[i].0` to
    /// `ring[i + 1].1[j]` on `ring[i + 1].0` (wrapping around).
    pub ring: [(Face, [u8; 3]); 4],
}

impl LayerAdjacency {
    /// Returns the faces that have at least one sticker moved by the layer.
    pub fn affected_faces(&self) -> SmallVec<[Face; 5]> {
        self.own_face
            .into_iter()
            .chain(self.ring.iter().map(|&(face, _)| face))
            .collect()
    }

    /// Returns the ring entry for `face`, if the face is on the ring.
    pub fn strip_on(&self, face: Face) -> Option<[u8; 3]> {
        self.ring
            .iter()
            .find(|&&(f, _)| f == face)
            .map(|&(_, strip)| strip)
    }
}

/// Table of [`LayerAdjacency`] for every [`LayerId`].
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct AdjacencyTable([LayerAdjacency; LayerId::COUNT]);

impl fmt::Debug for AdjacencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(LayerId::iter().zip(&self.0))
            .finish()
    }
}

impl AdjacencyTable {
    /// Returns the adjacency information for `layer`.
    pub fn get(&self, layer: LayerId) -> &LayerAdjacency {
        &self.0[layer.ordinal()]
    }

    /// Returns an iterator over every layer and its adjacency information.
    pub fn iter(&self) -> impl Iterator<Item = (LayerId, &LayerAdjacency)> {
        LayerId::iter().zip(&self.0)
    }
}

/// Adjacency table for the standard 3x3x3 cube.
pub static ADJACENCY: AdjacencyTable = {
    use Face::*;

    const fn outer(face: Face, ring: [(Face, [u8; 3]); 4]) -> LayerAdjacency {
        LayerAdjacency {
            own_face: Some(face),
            ring,
        }
    }
    const fn slice(ring: [(Face, [u8; 3]); 4]) -> LayerAdjacency {
        LayerAdjacency {
            own_face: None,
            ring,
        }
    }

    // Order must match `LayerId`.
    AdjacencyTable([
        // up
        outer(
            Up,
            [
                (Front, [0, 1, 2]),
                (Left, [0, 1, 2]),
                (Back, [0, 1, 2]),
                (Right, [0, 1, 2]),
            ],
        ),
        // down
        outer(
            Down,
            [
                (Front, [6, 7, 8]),
                (Right, [6, 7, 8]),
                (Back, [6, 7, 8]),
                (Left, [6, 7, 8]),
            ],
        ),
        // front
        outer(
            Front,
            [
                (Up, [6, 7, 8]),
                (Right, [0, 3, 6]),
                (Down, [2, 1, 0]),
                (Left, [8, 5, 2]),
            ],
        ),
        // back
        outer(
            Back,
            [
                (Up, [0, 1, 2]),
                (Left, [6, 3, 0]),
                (Down, [8, 7, 6]),
                (Right, [2, 5, 8]),
            ],
        ),
        // right
        outer(
            Right,
            [
                (Up, [2, 5, 8]),
                (Back, [6, 3, 0]),
                (Down, [2, 5, 8]),
                (Front, [2, 5, 8]),
            ],
        ),
        // left
        outer(
            Left,
            [
                (Up, [0, 3, 6]),
                (Front, [0, 3, 6]),
                (Down, [0, 3, 6]),
                (Back, [8, 5, 2]),
            ],
        ),
        // middle (turns with up)
        slice([
            (Front, [3, 4, 5]),
            (Left, [3, 4, 5]),
            (Back, [3, 4, 5]),
            (Right, [3, 4, 5]),
        ]),
        // vertical (turns with right)
        slice([
            (Up, [1, 4, 7]),
            (Back, [7, 4, 1]),
            (Down, [1, 4, 7]),
            (Front, [1, 4, 7]),
        ]),
        // standing (turns with front)
        slice([
            (Up, [3, 4, 5]),
            (Right, [1, 4, 7]),
            (Down, [5, 4, 3]),
            (Left, [7, 4, 1]),
        ]),
    ])
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_own_face_matches_layer() {
        for (layer, adj) in ADJACENCY.iter() {
            assert_eq!(adj.own_face, layer.own_face(), "{layer}");
        }
    }

    #[test]
    fn test_ring_faces_are_the_four_side_faces() {
        for (layer, adj) in ADJACENCY.iter() {
            let axis = layer.axis_face();
            let mut faces: Vec<Face> = adj.ring.iter().map(|&(f, _)| f).collect();
            faces.sort();
            faces.dedup();
            assert_eq!(faces.len(), 4, "{layer}");
            for face in faces {
                assert!(face.is_adjacent_to(axis), "{layer} touches {face}");
            }
            // Consecutive ring faces are neighbors.
            for i in 0..4 {
                let a = adj.ring[i].0;
                let b = adj.ring[(i + 1) % 4].0;
                assert!(a.is_adjacent_to(b), "{layer}: {a} -> {b}");
            }
        }
    }

    #[test]
    fn test_strips_are_rows_or_columns() {
        for (layer, adj) in ADJACENCY.iter() {
            for &(face, strip) in &adj.ring {
                let mut sorted = strip;
                sorted.sort();
                let is_row = sorted[0] % 3 == 0 && sorted == [0, 1, 2].map(|i| sorted[0] + i);
                let is_col = sorted[0] < 3 && sorted == [0, 3, 6].map(|i| sorted[0] + i);
                assert!(is_row || is_col, "{layer} on {face}: {strip:?}");
                // Outer layers never touch centers; slices always do.
                assert_eq!(strip.contains(&4), layer.is_slice(), "{layer} on {face}");
            }
        }
    }

    #[test]
    fn test_affected_faces() {
        let adj = ADJACENCY.get(LayerId::Front);
        assert_eq!(
            adj.affected_faces().as_slice(),
            &[Face::Front, Face::Up, Face::Right, Face::Down, Face::Left],
        );
        assert_eq!(adj.strip_on(Face::Down), Some([2, 1, 0]));
        assert_eq!(adj.strip_on(Face::Back), None);
        assert_eq!(ADJACENCY.get(LayerId::Middle).affected_faces().len(), 4);
    }
}
