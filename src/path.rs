//! Path storage and flattening
//!
//! A [`Path`] is a list of drawing commands. Curved segments are flattened
//! to line sequences before any geometry stage sees them; everything
//! downstream of [`PathSource::flatten`] works on straight segments only.

/// An (x, y) coordinate pair
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Distance between two points
pub fn len(a: &Point, b: &Point) -> f32 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Cross product of (p2-p1) and (p-p2)
pub fn cross(p1: &Point, p2: &Point, p: &Point) -> f32 {
    (p.x - p2.x) * (p2.y - p1.y) - (p.y - p2.y) * (p2.x - p1.x)
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Quadratic bezier: control point, end point
    QuadTo(Point, Point),
    /// Cubic bezier: two control points, end point
    CubicTo(Point, Point, Point),
    Close,
}

/// One flattened contour: an ordered point sequence, open or closed
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SimplePath {
    pub points: Vec<Point>,
    pub closed: bool,
}

impl SimplePath {
    pub fn new(points: Vec<Point>, closed: bool) -> Self {
        Self { points, closed }
    }
}

/// Anything that can hand the pipeline a set of flattened contours
pub trait PathSource {
    fn flatten(&self) -> Vec<SimplePath>;
}

impl PathSource for SimplePath {
    fn flatten(&self) -> Vec<SimplePath> {
        vec![self.clone()]
    }
}

impl<T: PathSource> PathSource for [T] {
    fn flatten(&self) -> Vec<SimplePath> {
        let mut out = vec![];
        for p in self {
            out.extend(p.flatten());
        }
        out
    }
}

impl<T: PathSource> PathSource for Vec<T> {
    fn flatten(&self) -> Vec<SimplePath> {
        self.as_slice().flatten()
    }
}

/// Maximum deviation of a flattened curve from the true curve, in pixels
pub const FLATTEN_TOLERANCE: f32 = 0.25;

const MAX_SUBDIVISIONS: u32 = 16;

#[derive(Debug, Default)]
pub struct Path {
    pub commands: Vec<PathCommand>,
}

impl Path {
    pub fn new() -> Self {
        Self { commands: vec![] }
    }
    pub fn remove_all(&mut self) {
        self.commands.clear();
    }
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
    }
    pub fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
    }
    pub fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.commands
            .push(PathCommand::QuadTo(Point::new(cx, cy), Point::new(x, y)));
    }
    pub fn cubic_to(&mut self, c1x: f32, c1y: f32, c2x: f32, c2y: f32, x: f32, y: f32) {
        self.commands.push(PathCommand::CubicTo(
            Point::new(c1x, c1y),
            Point::new(c2x, c2y),
            Point::new(x, y),
        ));
    }
    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    fn flatten_with(&self, tolerance: f32) -> Vec<SimplePath> {
        let mut out = vec![];
        let mut current: Vec<Point> = vec![];
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    push_contour(&mut out, &mut current, false);
                    current.push(p);
                }
                PathCommand::LineTo(p) => {
                    current.push(p);
                }
                PathCommand::QuadTo(c, p) => {
                    if let Some(&from) = current.last() {
                        flatten_quad(from, c, p, tolerance, MAX_SUBDIVISIONS, &mut current);
                    } else {
                        current.push(p);
                    }
                }
                PathCommand::CubicTo(c1, c2, p) => {
                    if let Some(&from) = current.last() {
                        flatten_cubic(from, c1, c2, p, tolerance, MAX_SUBDIVISIONS, &mut current);
                    } else {
                        current.push(p);
                    }
                }
                PathCommand::Close => {
                    push_contour(&mut out, &mut current, true);
                }
            }
        }
        push_contour(&mut out, &mut current, false);
        out
    }
}

impl PathSource for Path {
    fn flatten(&self) -> Vec<SimplePath> {
        self.flatten_with(FLATTEN_TOLERANCE)
    }
}

fn push_contour(out: &mut Vec<SimplePath>, current: &mut Vec<Point>, closed: bool) {
    if current.len() > 1 {
        out.push(SimplePath::new(std::mem::take(current), closed));
    } else {
        current.clear();
    }
}

fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) * 0.5, (a.y + b.y) * 0.5)
}

/// Squared distance of `p` from the segment (a, b)
fn dist2_to_chord(p: Point, a: Point, b: Point) -> f32 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let l2 = dx * dx + dy * dy;
    if l2 == 0.0 {
        let px = p.x - a.x;
        let py = p.y - a.y;
        return px * px + py * py;
    }
    let cross = (p.x - a.x) * dy - (p.y - a.y) * dx;
    cross * cross / l2
}

fn flatten_quad(p0: Point, c: Point, p1: Point, tolerance: f32, depth: u32, out: &mut Vec<Point>) {
    if depth == 0 || dist2_to_chord(c, p0, p1) <= tolerance * tolerance {
        out.push(p1);
        return;
    }
    // de Casteljau midpoint split
    let q0 = midpoint(p0, c);
    let q1 = midpoint(c, p1);
    let m = midpoint(q0, q1);
    flatten_quad(p0, q0, m, tolerance, depth - 1, out);
    flatten_quad(m, q1, p1, tolerance, depth - 1, out);
}

fn flatten_cubic(
    p0: Point,
    c1: Point,
    c2: Point,
    p1: Point,
    tolerance: f32,
    depth: u32,
    out: &mut Vec<Point>,
) {
    let d = dist2_to_chord(c1, p0, p1).max(dist2_to_chord(c2, p0, p1));
    if depth == 0 || d <= tolerance * tolerance {
        out.push(p1);
        return;
    }
    let q0 = midpoint(p0, c1);
    let q1 = midpoint(c1, c2);
    let q2 = midpoint(c2, p1);
    let r0 = midpoint(q0, q1);
    let r1 = midpoint(q1, q2);
    let m = midpoint(r0, r1);
    flatten_cubic(p0, q0, r0, m, tolerance, depth - 1, out);
    flatten_cubic(m, r1, q2, p1, tolerance, depth - 1, out);
}
