//! Per-pixel coverage accumulator
//!
//! The in-crate consumer of scanner output: a `width x height` buffer of
//! coverage fractions in `[0, 1]`, exportable as an 8-bit alpha mask or a
//! grayscale PNG for inspection.

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MaskError {
    #[error("mask dimensions differ: {0}x{1} vs {2}x{3}")]
    DimensionMismatch(usize, usize, usize, usize),
}

#[derive(Debug, Clone)]
pub struct CoverageMask {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl CoverageMask {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn coverage(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }

    pub fn row(&self, y: usize) -> &[f32] {
        &self.data[y * self.width..(y + 1) * self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [f32] {
        &mut self.data[y * self.width..(y + 1) * self.width]
    }

    pub fn clear(&mut self) {
        for v in self.data.iter_mut() {
            *v = 0.0;
        }
    }

    /// Quantize to 8-bit alpha
    pub fn as_alpha(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|&c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect()
    }

    /// Largest absolute per-pixel coverage difference
    pub fn diff(&self, other: &CoverageMask) -> Result<f32, MaskError> {
        if self.width != other.width || self.height != other.height {
            return Err(MaskError::DimensionMismatch(
                self.width,
                self.height,
                other.width,
                other.height,
            ));
        }
        let mut max = 0.0f32;
        for (a, b) in self.data.iter().zip(other.data.iter()) {
            max = max.max((a - b).abs());
        }
        Ok(max)
    }

    pub fn save_png<P: AsRef<Path>>(&self, filename: P) -> Result<(), image::ImageError> {
        image::save_buffer(
            filename,
            &self.as_alpha(),
            self.width as u32,
            self.height as u32,
            image::ColorType::L8,
        )
    }
}
