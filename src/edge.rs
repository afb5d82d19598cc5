//! Scan edge extraction
//!
//! Each non-horizontal polygon segment becomes one [`ScanEdge`] normalized
//! to increasing y, with the original winding direction kept in a flag.
//! Horizontal segments never intersect a scanline and are dropped here.
//!
//! Endpoint handling: when a sub-pixel scan row lands exactly on a vertex,
//! counting one crossing per touching edge double-counts pass-through
//! vertices and breaks fill parity. Each edge therefore carries an "emit"
//! flag per endpoint. At a vertex joining two segments of the same vertical
//! direction (skipping any dropped horizontal run between them) the incoming
//! segment's emission is suppressed; at a local extremum both segments keep
//! theirs, which yields a cancelling zero-width pair. Endpoint y values are
//! snapped to the sub-pixel grid so that exact comparisons against the scan
//! position are meaningful.

use crate::tessellate::{Ring, TessellatedMultipolygon};

const FLAG_UP: u8 = 0b001;
const FLAG_EMIT0: u8 = 0b010;
const FLAG_EMIT1: u8 = 0b100;

/// One directed polygon edge, normalized so `y0 < y1`
#[derive(Debug, Copy, Clone)]
pub struct ScanEdge {
    pub y0: f32,
    pub y1: f32,
    x0: f32,
    dxdy: f32,
    flags: u8,
}

impl ScanEdge {
    /// X-coordinate where this edge crosses the horizontal line at `y`
    pub fn x_at(&self, y: f32) -> f32 {
        self.x0 + self.dxdy * (y - self.y0)
    }
    /// +1 if the original edge descended in y, -1 if it ascended
    pub fn winding(&self) -> i32 {
        if self.flags & FLAG_UP != 0 {
            -1
        } else {
            1
        }
    }
    /// Crossings contributed when sampled exactly at `y0`
    pub fn emit0(&self) -> u8 {
        ((self.flags & FLAG_EMIT0) != 0) as u8
    }
    /// Crossings contributed when sampled exactly at `y1`
    pub fn emit1(&self) -> u8 {
        ((self.flags & FLAG_EMIT1) != 0) as u8
    }
}

#[derive(Debug, Default)]
pub struct ScanEdgeCollection {
    pub edges: Vec<ScanEdge>,
}

impl ScanEdgeCollection {
    pub fn new(polygon: &TessellatedMultipolygon, subsampling: u32) -> Self {
        let mut edges = Vec::with_capacity(polygon.total_vertex_count());
        for ring in polygon.rings() {
            add_ring(&mut edges, ring, subsampling);
        }
        Self { edges }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Snap to the sub-pixel grid. Ties round to even so that a half-grid
/// coordinate does not bias every edge downward.
fn snap(y: f32, subsampling: u32) -> f32 {
    let s = subsampling as f32;
    (y * s).round_ties_even() / s
}

fn add_ring(edges: &mut Vec<ScanEdge>, ring: &Ring, subsampling: u32) {
    let pts = &ring.points;
    let n = pts.len();
    if n < 2 {
        return;
    }

    // Fill scanning always treats the ring as closed: segment i runs from
    // vertex i to vertex (i + 1) % n, including the implied wrap segment.
    let ys: Vec<f32> = pts.iter().map(|p| snap(p.y, subsampling)).collect();
    let dirs: Vec<i8> = (0..n)
        .map(|i| {
            let j = (i + 1) % n;
            if ys[j] > ys[i] {
                1
            } else if ys[j] < ys[i] {
                -1
            } else {
                0
            }
        })
        .collect();

    // Ring-order list of non-horizontal segments, and where their edges went.
    let first_edge = edges.len();
    let mut segments = vec![];
    for i in 0..n {
        if dirs[i] == 0 {
            continue;
        }
        let j = (i + 1) % n;
        let (y0, y1, x0, x_end) = if dirs[i] > 0 {
            (ys[i], ys[j], pts[i].x, pts[j].x)
        } else {
            (ys[j], ys[i], pts[j].x, pts[i].x)
        };
        let mut flags = FLAG_EMIT0 | FLAG_EMIT1;
        if dirs[i] < 0 {
            flags |= FLAG_UP;
        }
        edges.push(ScanEdge {
            y0,
            y1,
            x0,
            dxdy: (x_end - x0) / (y1 - y0),
            flags,
        });
        segments.push(i);
    }

    // Corner pass: at the vertex shared by consecutive non-horizontal
    // segments a -> b (cyclically), equal directions mean a pass-through
    // vertex and the incoming segment's emission there is suppressed.
    let count = segments.len();
    if count < 2 {
        return;
    }
    for k in 0..count {
        let a = segments[k];
        let b = segments[(k + 1) % count];
        if dirs[a] != dirs[b] {
            continue;
        }
        let edge = &mut edges[first_edge + k];
        // The shared vertex is the "to" end of segment a: y1 when the
        // segment descended, y0 when it ascended.
        if dirs[a] > 0 {
            edge.flags &= !FLAG_EMIT1;
        } else {
            edge.flags &= !FLAG_EMIT0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{Point, SimplePath};
    use crate::tessellate::TessellatedMultipolygon;

    fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> SimplePath {
        SimplePath::new(
            vec![
                Point::new(x0, y0),
                Point::new(x1, y0),
                Point::new(x1, y1),
                Point::new(x0, y1),
            ],
            true,
        )
    }

    #[test]
    fn horizontal_segments_are_dropped() {
        let poly = TessellatedMultipolygon::new(&rect(2.0, 2.0, 8.0, 8.0));
        let edges = ScanEdgeCollection::new(&poly, 1);
        // Only the two vertical sides survive.
        assert_eq!(edges.len(), 2);
        assert!(edges.edges.iter().all(|e| e.y1 > e.y0));
    }

    #[test]
    fn windings_reflect_original_direction() {
        let poly = TessellatedMultipolygon::new(&rect(2.0, 2.0, 8.0, 8.0));
        let edges = ScanEdgeCollection::new(&poly, 1);
        // Ring runs clockwise in image coordinates: right side descends,
        // left side ascends.
        let windings: Vec<i32> = edges.edges.iter().map(|e| e.winding()).collect();
        assert_eq!(windings, vec![1, -1]);
    }

    #[test]
    fn pass_through_vertex_emits_once() {
        // Diamond: every vertex joins two segments; left/right vertices are
        // pass-through in y, top/bottom are extrema.
        let diamond = SimplePath::new(
            vec![
                Point::new(5.0, 0.0),
                Point::new(10.0, 5.0),
                Point::new(5.0, 10.0),
                Point::new(0.0, 5.0),
            ],
            true,
        );
        let poly = TessellatedMultipolygon::new(&diamond);
        let edges = ScanEdgeCollection::new(&poly, 1);
        assert_eq!(edges.len(), 4);
        // Total emissions at y = 5 across all edges must be exactly 2:
        // one crossing per pass-through vertex.
        let total: u8 = edges
            .edges
            .iter()
            .map(|e| {
                let mut t = 0;
                if e.y0 == 5.0 {
                    t += e.emit0();
                }
                if e.y1 == 5.0 {
                    t += e.emit1();
                }
                t
            })
            .sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn endpoints_snap_to_subpixel_grid() {
        let tri = SimplePath::new(
            vec![
                Point::new(0.0, 1.01),
                Point::new(10.0, 1.01),
                Point::new(5.0, 8.99),
            ],
            true,
        );
        let poly = TessellatedMultipolygon::new(&tri);
        let edges = ScanEdgeCollection::new(&poly, 4);
        for e in &edges.edges {
            assert_eq!(e.y0 * 4.0, (e.y0 * 4.0).round());
            assert_eq!(e.y1 * 4.0, (e.y1 * 4.0).round());
        }
    }
}
