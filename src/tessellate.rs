//! Normalization of arbitrary paths into simple polygonal rings
//!
//! Tessellation here means flattening and bookkeeping, not triangulation:
//! the multipolygon is the hand-off point between the path layer and edge
//! extraction. Open contours are kept open (the closing segment is implied
//! only when scanning for fill).

use crate::path::{PathSource, Point};

/// One contour of a polygon, possibly self-intersecting
#[derive(Debug, Default, Clone)]
pub struct Ring {
    pub points: Vec<Point>,
    pub closed: bool,
}

#[derive(Debug, Default)]
pub struct TessellatedMultipolygon {
    rings: Vec<Ring>,
    total_vertex_count: usize,
}

impl TessellatedMultipolygon {
    pub fn new<P: PathSource>(source: &P) -> Self {
        let mut rings = vec![];
        let mut total_vertex_count = 0;
        for contour in source.flatten() {
            if contour.points.is_empty() {
                continue;
            }
            total_vertex_count += contour.points.len();
            rings.push(Ring {
                points: contour.points,
                closed: contour.closed,
            });
        }
        Self {
            rings,
            total_vertex_count,
        }
    }
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }
    /// Vertex count across all rings; an upper bound of edges per ring
    /// and the basis for per-scanline intersection capacity
    pub fn total_vertex_count(&self) -> usize {
        self.total_vertex_count
    }
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}
