//! Polygon scanner
//!
//! Drives the active edge list over a bounded pixel-row range with
//! sub-pixel vertical sampling. Construction tessellates the path, extracts
//! scan edges, sorts two index permutations (by edge start y and by edge
//! end y) and fast-forwards both event streams to `min_y` so the first real
//! row starts with the correct active set. One pixel row is produced by one
//! `move_to_next_pixel_line` plus `subsampling` calls to
//! `move_to_next_subpixel_scan_line`, each of which yields the current
//! sub-row's sorted intersection pairs via `scan_current_line`.

use crate::active_edge::ActiveEdgeList;
use crate::edge::ScanEdgeCollection;
use crate::path::PathSource;
use crate::tessellate::TessellatedMultipolygon;
use crate::IntersectionRule;

use log::debug;

#[derive(Debug)]
pub struct PolygonScanner {
    max_y: i32,
    rule: IntersectionRule,
    edges: ScanEdgeCollection,
    /// Edge indices sorted by `y0` ascending
    sorted0: Vec<usize>,
    /// Edge indices sorted by `y1` ascending
    sorted1: Vec<usize>,
    active: ActiveEdgeList,
    intersections: Vec<f32>,
    crossings: Vec<(f32, i32)>,
    idx0: usize,
    idx1: usize,
    y_plus_one: f32,

    /// Vertical distance between sub-pixel samples: 1 / subsampling
    pub subpixel_distance: f32,
    /// Coverage weight of one sub-row sample over one sub-pixel column
    pub subpixel_area: f32,
    /// Current pixel row; valid after `move_to_next_pixel_line`
    pub pixel_line_y: i32,
    /// Current sub-pixel sample position
    pub sub_pixel_y: f32,
}

impl PolygonScanner {
    /// Scan `path` over pixel rows `min_y` (inclusive) to `max_y`
    /// (exclusive) with `subsampling >= 1` vertical samples per row.
    pub fn new<P: PathSource>(
        path: &P,
        min_y: i32,
        max_y: i32,
        subsampling: u32,
        rule: IntersectionRule,
    ) -> Self {
        assert!(subsampling >= 1, "subsampling factor must be at least 1");
        let multipolygon = TessellatedMultipolygon::new(path);
        let edges = ScanEdgeCollection::new(&multipolygon, subsampling);
        let n = edges.len();
        debug!(
            "scanner: {} edges over rows {}..{} at 1/{} sub-rows",
            n, min_y, max_y, subsampling
        );

        let mut sorted0: Vec<usize> = (0..n).collect();
        let mut sorted1: Vec<usize> = (0..n).collect();
        sorted0.sort_by(|&a, &b| edges.edges[a].y0.total_cmp(&edges.edges[b].y0));
        sorted1.sort_by(|&a, &b| edges.edges[a].y1.total_cmp(&edges.edges[b].y1));

        let subpixel_distance = 1.0 / subsampling as f32;
        let mut scanner = Self {
            max_y,
            rule,
            edges,
            sorted0,
            sorted1,
            active: ActiveEdgeList::with_capacity(n),
            intersections: Vec::with_capacity(multipolygon.total_vertex_count() * 2),
            crossings: match rule {
                IntersectionRule::NonZero => {
                    Vec::with_capacity(multipolygon.total_vertex_count() * 2)
                }
                IntersectionRule::EvenOdd => vec![],
            },
            idx0: 0,
            idx1: 0,
            y_plus_one: 0.0,
            subpixel_distance,
            subpixel_area: subpixel_distance / subsampling as f32,
            pixel_line_y: min_y - 1,
            sub_pixel_y: 0.0,
        };
        scanner.skip_edges_before(min_y);
        scanner
    }

    /// Simulate every edge start/end event strictly below `min_y`, merging
    /// the two sorted event streams, without emitting any scan output.
    fn skip_edges_before(&mut self, min_y: i32) {
        if self.edges.is_empty() {
            return;
        }
        self.sub_pixel_y = self.edges.edges[self.sorted0[0]].y0;

        let mut i0 = 1;
        let mut i1 = 0;
        while self.sub_pixel_y < min_y as f32 {
            self.enter_edges();
            self.leave_edges();
            self.active.remove_leaving_edges();

            let has0 = i0 < self.sorted0.len();
            let has1 = i1 < self.sorted1.len();
            if !has0 && !has1 {
                // Every edge started and ended below the window; nothing
                // will ever activate during the real scan.
                break;
            }
            let y0 = if has0 {
                self.edges.edges[self.sorted0[i0]].y0
            } else {
                f32::MAX
            };
            let y1 = if has1 {
                self.edges.edges[self.sorted1[i1]].y1
            } else {
                f32::MAX
            };
            if y0 < y1 {
                self.sub_pixel_y = y0;
                i0 += 1;
            } else {
                self.sub_pixel_y = y1;
                i1 += 1;
            }
        }
    }

    /// Advance to the next pixel row. Returns false once the row range is
    /// exhausted; no further sub-row calls may follow.
    pub fn move_to_next_pixel_line(&mut self) -> bool {
        self.pixel_line_y += 1;
        self.y_plus_one = (self.pixel_line_y + 1) as f32;
        // One sub-row before the first sample of the new row.
        self.sub_pixel_y = self.pixel_line_y as f32 - self.subpixel_distance;
        self.pixel_line_y < self.max_y
    }

    /// Advance one sub-row, processing edges entering or leaving at the new
    /// position. Returns true while the sample is still within the current
    /// pixel row.
    pub fn move_to_next_subpixel_scan_line(&mut self) -> bool {
        self.sub_pixel_y += self.subpixel_distance;
        self.enter_edges();
        self.leave_edges();
        self.sub_pixel_y < self.y_plus_one
    }

    /// Scan the current sub-row, returning sorted intersection boundaries
    /// consumed in consecutive (enter, exit) pairs under either rule.
    pub fn scan_current_line(&mut self) -> &[f32] {
        match self.rule {
            IntersectionRule::EvenOdd => self.active.scan_odd_even(
                self.sub_pixel_y,
                &self.edges.edges,
                &mut self.intersections,
            ),
            IntersectionRule::NonZero => self.active.scan_non_zero(
                self.sub_pixel_y,
                &self.edges.edges,
                &mut self.intersections,
                &mut self.crossings,
            ),
        }
        &self.intersections
    }

    pub fn active_edge_count(&self) -> usize {
        self.active.len()
    }

    fn enter_edges(&mut self) {
        while self.idx0 < self.sorted0.len() {
            let e = self.sorted0[self.idx0];
            if self.edges.edges[e].y0 > self.sub_pixel_y {
                break;
            }
            self.active.enter_edge(e);
            self.idx0 += 1;
        }
    }

    fn leave_edges(&mut self) {
        while self.idx1 < self.sorted1.len() {
            let e = self.sorted1[self.idx1];
            if self.edges.edges[e].y1 > self.sub_pixel_y {
                break;
            }
            self.active.leave_edge(e);
            self.idx1 += 1;
        }
    }
}
