//! Polygon boolean clipping
//!
//! [`Clipper`] combines subject and clip paths with a boolean operation
//! before rasterization. The boolean algorithm itself is a black box behind
//! the [`ClipEngine`] trait; this module owns only the adaptation layer:
//! flattening inputs, mapping rule/operation enums, and rebuilding the
//! engine's result contours as [`Polygon`] shapes with point order
//! preserved. The default engine wraps the `i_overlay` crate.

use crate::path::{PathSource, Point};
use crate::shapes::Polygon;
use crate::IntersectionRule;

use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;

use log::debug;

/// Role of a path in a clipping operation
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClippingType {
    Subject,
    Clip,
}
impl Default for ClippingType {
    fn default() -> ClippingType {
        ClippingType::Subject
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ClippingOperation {
    Union,
    Intersection,
    Difference,
    Xor,
}
impl Default for ClippingOperation {
    fn default() -> ClippingOperation {
        ClippingOperation::Union
    }
}

/// A pluggable polygon-boolean engine.
///
/// `execute` returns the resulting closed contours and any open-path
/// remnants, both with point order preserved.
pub trait ClipEngine {
    fn add_path(&mut self, points: &[Point], role: ClippingType, is_open: bool);
    fn execute(
        &mut self,
        operation: ClippingOperation,
        rule: IntersectionRule,
    ) -> (Vec<Vec<Point>>, Vec<Vec<Point>>);
}

/// Default engine backed by `i_overlay`.
///
/// Closed contours go through the overlay algorithm; open subject paths are
/// returned unclipped as open remnants (polyline clipping is an engine
/// capability this adapter does not provide), and open clip paths bound no
/// area and are ignored.
#[derive(Debug, Default)]
pub struct OverlayEngine {
    subjects: Vec<Vec<[f64; 2]>>,
    clips: Vec<Vec<[f64; 2]>>,
    open: Vec<Vec<Point>>,
}

impl ClipEngine for OverlayEngine {
    fn add_path(&mut self, points: &[Point], role: ClippingType, is_open: bool) {
        if is_open {
            if role == ClippingType::Subject {
                self.open.push(points.to_vec());
            }
            return;
        }
        let contour: Vec<[f64; 2]> = points.iter().map(|p| [p.x as f64, p.y as f64]).collect();
        match role {
            ClippingType::Subject => self.subjects.push(contour),
            ClippingType::Clip => self.clips.push(contour),
        }
    }

    fn execute(
        &mut self,
        operation: ClippingOperation,
        rule: IntersectionRule,
    ) -> (Vec<Vec<Point>>, Vec<Vec<Point>>) {
        let overlay_rule = match operation {
            ClippingOperation::Union => OverlayRule::Union,
            ClippingOperation::Intersection => OverlayRule::Intersect,
            ClippingOperation::Difference => OverlayRule::Difference,
            ClippingOperation::Xor => OverlayRule::Xor,
        };
        let fill_rule = match rule {
            IntersectionRule::EvenOdd => FillRule::EvenOdd,
            IntersectionRule::NonZero => FillRule::NonZero,
        };
        let shapes = self.subjects.overlay(&self.clips, overlay_rule, fill_rule);

        let mut closed = vec![];
        for shape in shapes {
            for contour in shape {
                closed.push(
                    contour
                        .iter()
                        .map(|p| Point::new(p[0] as f32, p[1] as f32))
                        .collect(),
                );
            }
        }
        (closed, std::mem::take(&mut self.open))
    }
}

#[derive(Debug, Default)]
pub struct Clipper<E: ClipEngine = OverlayEngine> {
    engine: E,
}

impl Clipper<OverlayEngine> {
    pub fn new() -> Self {
        Self {
            engine: OverlayEngine::default(),
        }
    }
}

impl<E: ClipEngine> Clipper<E> {
    pub fn with_engine(engine: E) -> Self {
        Self { engine }
    }

    /// Register every contour of `path` under the given role. Contours
    /// with no points are skipped.
    pub fn add_path<P: PathSource>(&mut self, path: &P, role: ClippingType) {
        for contour in path.flatten() {
            if contour.points.is_empty() {
                continue;
            }
            self.engine
                .add_path(&contour.points, role, !contour.closed);
        }
    }

    pub fn add_paths<P: PathSource>(&mut self, paths: &[P], role: ClippingType) {
        for p in paths {
            self.add_path(p, role);
        }
    }

    /// Run the boolean operation over everything registered so far and
    /// rebuild the result contours as polygon shapes, closed results first.
    pub fn generate_clipped_shapes(
        &mut self,
        operation: ClippingOperation,
        rule: IntersectionRule,
    ) -> Vec<Polygon> {
        let (closed, open) = self.engine.execute(operation, rule);
        debug!(
            "clipper: {:?} produced {} closed and {} open contours",
            operation,
            closed.len(),
            open.len()
        );
        let mut shapes = Vec::with_capacity(closed.len() + open.len());
        for points in closed {
            shapes.push(Polygon::new(points));
        }
        for points in open {
            shapes.push(Polygon::new(points));
        }
        shapes
    }
}
