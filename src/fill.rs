//! Fill driver
//!
//! Stands in for the fill processor consuming scanner output: drives a
//! [`PolygonScanner`] over the rows a path touches and spreads each
//! sub-row's intersection pairs into a [`CoverageMask`] analytically, so a
//! partially covered boundary pixel receives the exact horizontal overlap
//! fraction of the span. Antialiased fills sample 16 sub-rows per pixel
//! row; non-antialiased fills sample one per row and truncate, filling
//! whole pixels `floor(x0)..floor(x1)` per span over rows
//! `floor(top)..floor(bottom)`.

use crate::mask::CoverageMask;
use crate::path::{PathSource, SimplePath};
use crate::scanner::PolygonScanner;
use crate::IntersectionRule;

/// Sub-pixel rows per pixel row for antialiased fills
pub const ANTIALIAS_SUBSAMPLING: u32 = 16;

#[derive(Debug, Copy, Clone)]
pub struct FillOptions {
    pub rule: IntersectionRule,
    pub antialias: bool,
}

impl Default for FillOptions {
    fn default() -> FillOptions {
        FillOptions {
            rule: IntersectionRule::NonZero,
            antialias: true,
        }
    }
}

/// Accumulate `path`'s coverage into `mask`.
pub fn fill_path<P: PathSource + ?Sized>(mask: &mut CoverageMask, path: &P, options: &FillOptions) {
    let contours = path.flatten();
    let (top, bottom) = match vertical_bounds(&contours) {
        Some(b) => b,
        None => return,
    };
    let min_y = (top.floor() as i32).max(0);
    let max_y = if options.antialias {
        (bottom.ceil() as i32).min(mask.height() as i32)
    } else {
        // Truncation: the last filled row is floor(bottom) - 1.
        (bottom.floor() as i32).min(mask.height() as i32)
    };
    if min_y >= max_y {
        return;
    }
    let width = mask.width();

    if options.antialias {
        let mut scanner = PolygonScanner::new(
            &contours,
            min_y,
            max_y,
            ANTIALIAS_SUBSAMPLING,
            options.rule,
        );
        // One sub-row's weight for a fully covered pixel column: the analytic
        // horizontal fraction is measured in sub-pixel columns.
        let row_weight = scanner.subpixel_area * ANTIALIAS_SUBSAMPLING as f32;
        while scanner.move_to_next_pixel_line() {
            let y = scanner.pixel_line_y as usize;
            while scanner.move_to_next_subpixel_scan_line() {
                let spans = scanner.scan_current_line();
                let row = mask.row_mut(y);
                for pair in spans.chunks_exact(2) {
                    accumulate_span(row, pair[0], pair[1], row_weight, width);
                }
            }
        }
    } else {
        let mut scanner = PolygonScanner::new(&contours, min_y, max_y, 1, options.rule);
        while scanner.move_to_next_pixel_line() {
            let y = scanner.pixel_line_y as usize;
            while scanner.move_to_next_subpixel_scan_line() {
                let spans = scanner.scan_current_line();
                let row = mask.row_mut(y);
                for pair in spans.chunks_exact(2) {
                    fill_span_truncated(row, pair[0], pair[1], width);
                }
            }
        }
    }
}

fn vertical_bounds(contours: &[SimplePath]) -> Option<(f32, f32)> {
    let mut top = f32::MAX;
    let mut bottom = f32::MIN;
    let mut any = false;
    for c in contours {
        for p in &c.points {
            top = top.min(p.y);
            bottom = bottom.max(p.y);
            any = true;
        }
    }
    if any {
        Some((top, bottom))
    } else {
        None
    }
}

/// Spread one in/out interval across the row, weighting partially covered
/// boundary pixels by their overlap fraction.
fn accumulate_span(row: &mut [f32], x0: f32, x1: f32, weight: f32, width: usize) {
    let x0 = x0.max(0.0);
    let x1 = x1.min(width as f32);
    if x1 <= x0 {
        return;
    }
    let first = x0.floor() as usize;
    let last = x1.floor() as usize;
    if first == last {
        row[first] += (x1 - x0) * weight;
        return;
    }
    row[first] += ((first + 1) as f32 - x0) * weight;
    for v in row[first + 1..last].iter_mut() {
        *v += weight;
    }
    if last < width {
        let frac = x1 - last as f32;
        if frac > 0.0 {
            row[last] += frac * weight;
        }
    }
}

/// Non-antialiased rendition of one span: whole pixels only, both span
/// bounds truncated.
fn fill_span_truncated(row: &mut [f32], x0: f32, x1: f32, width: usize) {
    let first = (x0.floor() as i32).max(0);
    let last = (x1.floor() as i32).min(width as i32);
    if first >= last {
        return;
    }
    for v in row[first as usize..last as usize].iter_mut() {
        *v = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Polygon;

    #[test]
    fn span_accumulation_is_analytic() {
        let mut row = vec![0.0f32; 8];
        accumulate_span(&mut row, 1.5, 4.25, 1.0, 8);
        assert_eq!(row, vec![0.0, 0.5, 1.0, 1.0, 0.25, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn span_clamps_to_row() {
        let mut row = vec![0.0f32; 4];
        accumulate_span(&mut row, -3.0, 10.0, 0.5, 4);
        assert_eq!(row, vec![0.5, 0.5, 0.5, 0.5]);
    }

    #[test]
    fn truncated_span_fills_whole_pixels() {
        let mut row = vec![0.0f32; 10];
        fill_span_truncated(&mut row, 2.5, 7.6, 10);
        assert_eq!(row, vec![0.0, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn binary_fill_truncates_fractional_bounds() {
        let mut mask = CoverageMask::new(10, 10);
        fill_path(
            &mut mask,
            &Polygon::rectangle(2.5, 2.5, 7.6, 7.9),
            &FillOptions {
                rule: IntersectionRule::NonZero,
                antialias: false,
            },
        );
        for y in 0..10 {
            for x in 0..10 {
                let inside = (2..7).contains(&x) && (2..7).contains(&y);
                let expected = if inside { 1.0 } else { 0.0 };
                assert_eq!(mask.coverage(x, y), expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn integer_rectangle_fills_exactly() {
        let mut mask = CoverageMask::new(10, 10);
        fill_path(
            &mut mask,
            &Polygon::rectangle(2.0, 2.0, 8.0, 8.0),
            &FillOptions::default(),
        );
        for y in 0..10 {
            for x in 0..10 {
                let inside = (2..8).contains(&x) && (2..8).contains(&y);
                let expected = if inside { 1.0 } else { 0.0 };
                assert_eq!(mask.coverage(x, y), expected, "pixel ({}, {})", x, y);
            }
        }
    }
}
