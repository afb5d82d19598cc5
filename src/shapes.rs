//! Closed-ring shape constructors
//!
//! Thin vertex sources over the path layer. Constructor preconditions are
//! validated before anything is allocated.

use crate::path::{PathSource, Point, SimplePath, FLATTEN_TOLERANCE};

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("a star requires at least 3 prongs, got {0}")]
    TooFewProngs(u32),
    #[error("radius must be positive, got {0}")]
    InvalidRadius(f32),
}

/// A single closed ring of points. Also the clipper's output shape.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Axis-aligned rectangle ring, clockwise in image coordinates
    pub fn rectangle(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::new(vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ])
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl PathSource for Polygon {
    fn flatten(&self) -> Vec<SimplePath> {
        vec![SimplePath::new(self.points.clone(), true)]
    }
}

/// A star polygon: `prongs * 2` vertices alternating between the outer and
/// inner radius around a center point.
#[derive(Debug, Clone)]
pub struct Star {
    ring: Polygon,
}

impl Star {
    pub fn new(
        x: f32,
        y: f32,
        prongs: u32,
        inner_radius: f32,
        outer_radius: f32,
    ) -> Result<Self, ShapeError> {
        Self::with_rotation(x, y, prongs, inner_radius, outer_radius, 0.0)
    }

    /// `angle` is the rotation in radians of the first (outer) vertex.
    pub fn with_rotation(
        x: f32,
        y: f32,
        prongs: u32,
        inner_radius: f32,
        outer_radius: f32,
        angle: f32,
    ) -> Result<Self, ShapeError> {
        if prongs < 3 {
            return Err(ShapeError::TooFewProngs(prongs));
        }
        if inner_radius <= 0.0 {
            return Err(ShapeError::InvalidRadius(inner_radius));
        }
        if outer_radius <= 0.0 {
            return Err(ShapeError::InvalidRadius(outer_radius));
        }

        let vertices = prongs * 2;
        let step = std::f32::consts::PI * 2.0 / vertices as f32;
        let mut current = angle;
        let mut points = Vec::with_capacity(vertices as usize);
        for i in 0..vertices {
            let r = if i % 2 == 0 { outer_radius } else { inner_radius };
            points.push(Point::new(
                x - r * current.sin(),
                y + r * current.cos(),
            ));
            current += step;
        }
        Ok(Self {
            ring: Polygon::new(points),
        })
    }
}

impl PathSource for Star {
    fn flatten(&self) -> Vec<SimplePath> {
        self.ring.flatten()
    }
}

/// An axis-aligned ellipse, flattened to line segments on demand
#[derive(Debug, Copy, Clone)]
pub struct Ellipse {
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
}

impl Ellipse {
    pub fn new(cx: f32, cy: f32, rx: f32, ry: f32) -> Result<Self, ShapeError> {
        if rx <= 0.0 {
            return Err(ShapeError::InvalidRadius(rx));
        }
        if ry <= 0.0 {
            return Err(ShapeError::InvalidRadius(ry));
        }
        Ok(Self { cx, cy, rx, ry })
    }

    pub fn circle(cx: f32, cy: f32, r: f32) -> Result<Self, ShapeError> {
        Self::new(cx, cy, r, r)
    }

    /// Segment count so the chord sagitta stays within the flattening
    /// tolerance on the larger radius.
    fn segment_count(&self) -> u32 {
        let r = self.rx.max(self.ry);
        if r <= FLATTEN_TOLERANCE {
            return 8;
        }
        let theta = 2.0 * (1.0 - FLATTEN_TOLERANCE / r).acos();
        ((std::f32::consts::PI * 2.0 / theta).ceil() as u32).max(8)
    }
}

impl PathSource for Ellipse {
    fn flatten(&self) -> Vec<SimplePath> {
        let n = self.segment_count();
        let step = std::f32::consts::PI * 2.0 / n as f32;
        let points = (0..n)
            .map(|i| {
                let t = step * i as f32;
                Point::new(self.cx + self.rx * t.cos(), self.cy + self.ry * t.sin())
            })
            .collect();
        vec![SimplePath::new(points, true)]
    }
}
