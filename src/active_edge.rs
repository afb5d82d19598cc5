//! Active edge list
//!
//! The set of scan edges straddling the current scan position. Edges enter
//! when the scan reaches their `y0` and are only marked when it reaches
//! their `y1`: a marked edge still produces its final boundary intersection,
//! so the scan methods compact the list themselves after computing it.
//! [`ActiveEdgeList::remove_leaving_edges`] exists for the scanner's
//! pre-scan fast-forward, which never emits intersections.

use crate::edge::ScanEdge;

#[derive(Debug, Copy, Clone)]
struct ActiveEdge {
    index: usize,
    leaving: bool,
}

#[derive(Debug, Default)]
pub struct ActiveEdgeList {
    entries: Vec<ActiveEdge>,
}

impl ActiveEdgeList {
    pub fn new() -> Self {
        Self { entries: vec![] }
    }
    pub fn with_capacity(n: usize) -> Self {
        Self {
            entries: Vec::with_capacity(n),
        }
    }

    pub fn enter_edge(&mut self, index: usize) {
        self.entries.push(ActiveEdge {
            index,
            leaving: false,
        });
    }

    pub fn leave_edge(&mut self, index: usize) {
        for e in self.entries.iter_mut() {
            if e.index == index {
                e.leaving = true;
                return;
            }
        }
    }

    pub fn remove_leaving_edges(&mut self) {
        self.entries.retain(|e| !e.leaving);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Even-odd scan: sorted crossings, consumed in consecutive pairs.
    pub fn scan_odd_even(&mut self, y: f32, edges: &[ScanEdge], intersections: &mut Vec<f32>) {
        intersections.clear();
        let mut w = 0;
        for i in 0..self.entries.len() {
            let entry = self.entries[i];
            let edge = &edges[entry.index];
            let x = edge.x_at(y);
            for _ in 0..emit_count(edge, y) {
                intersections.push(x);
            }
            if !entry.leaving {
                self.entries[w] = entry;
                w += 1;
            }
        }
        self.entries.truncate(w);
        intersections.sort_by(|a, b| a.total_cmp(b));
    }

    /// Non-zero winding scan: crossings are tagged with the edge's winding
    /// direction, sorted, and reduced to the boundaries where the running
    /// winding sum enters or leaves zero. The output pairs up exactly like
    /// [`ActiveEdgeList::scan_odd_even`]'s.
    pub fn scan_non_zero(
        &mut self,
        y: f32,
        edges: &[ScanEdge],
        intersections: &mut Vec<f32>,
        crossings: &mut Vec<(f32, i32)>,
    ) {
        crossings.clear();
        let mut w = 0;
        for i in 0..self.entries.len() {
            let entry = self.entries[i];
            let edge = &edges[entry.index];
            let x = edge.x_at(y);
            for _ in 0..emit_count(edge, y) {
                crossings.push((x, edge.winding()));
            }
            if !entry.leaving {
                self.entries[w] = entry;
                w += 1;
            }
        }
        self.entries.truncate(w);
        // Stable: crossings at equal x keep active-list order.
        crossings.sort_by(|a, b| a.0.total_cmp(&b.0));

        intersections.clear();
        let mut sum = 0;
        for &(x, winding) in crossings.iter() {
            let prev = sum;
            sum += winding;
            if (prev == 0) != (sum == 0) {
                intersections.push(x);
            }
        }
    }
}

fn emit_count(edge: &ScanEdge, y: f32) -> u8 {
    if y == edge.y0 {
        edge.emit0()
    } else if y == edge.y1 {
        edge.emit1()
    } else {
        1
    }
}
