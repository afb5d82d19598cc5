
//! How does this work
//!    path = Path / Polygon / Star / Ellipse       -- vertex sources
//!    poly = TessellatedMultipolygon::new( path )  -- flattened rings
//!    edges = ScanEdgeCollection::new( poly )      -- directed scan edges
//!    scanner = PolygonScanner::new( path, .. )
//!  Scanner Operations
//!    move_to_next_pixel_line
//!      move_to_next_subpixel_scan_line
//!        enter_edges / leave_edges       -- ActiveEdgeList maintenance
//!        scan_current_line               -- sorted intersection pairs
//!    Output: per sub-row x-interval pairs, consumed as coverage
//!  Fill to Mask
//!    fill_path(mask, path, options)
//!      accumulate_span       -- analytic horizontal coverage per pixel
//!      fill_span_truncated   -- non-antialiased mode, whole pixels only
//!  Shape Combination
//!    clipper = Clipper::new()
//!    clipper.add_path(path, ClippingType::Subject)
//!    clipper.generate_clipped_shapes(op, rule)  -- boolean engine behind
//!                                                  the ClipEngine trait

pub mod path;
pub mod tessellate;
pub mod edge;
pub mod active_edge;
pub mod scanner;
pub mod clip;
pub mod shapes;
pub mod mask;
pub mod fill;

pub use crate::path::*;
pub use crate::tessellate::*;
pub use crate::edge::*;
pub use crate::active_edge::*;
pub use crate::scanner::*;
pub use crate::clip::*;
pub use crate::shapes::*;
pub use crate::mask::*;
pub use crate::fill::*;

/// Policy for deciding "inside" from a scanline's sorted edge crossings
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum IntersectionRule {
    /// Alternate inside/outside at every crossing
    EvenOdd,
    /// Inside wherever the running winding sum is non-zero
    NonZero,
}
impl Default for IntersectionRule {
    fn default() -> IntersectionRule {
        IntersectionRule::NonZero
    }
}
