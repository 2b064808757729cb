//! Owned single-channel f32 image in row-major layout (stride == width).
//!
//! Holds template-match score surfaces: one value per candidate top-left
//! offset, lower meaning a closer match.
use image::{ImageBuffer, Luma};

#[derive(Clone, Debug)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0.0; w * h],
        }
    }

    /// Take ownership of an `image` float buffer.
    pub fn from_luma(buf: ImageBuffer<Luma<f32>, Vec<f32>>) -> Self {
        let w = buf.width() as usize;
        let h = buf.height() as usize;
        Self {
            w,
            h,
            stride: w,
            data: buf.into_raw(),
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }

    /// Fill the `w × h` block at (x0, y0) with `v`, clipped to the image.
    pub fn fill_rect(&mut self, x0: usize, y0: usize, w: usize, h: usize, v: f32) {
        let x1 = (x0 + w).min(self.w);
        let y1 = (y0 + h).min(self.h);
        for y in y0.min(y1)..y1 {
            let start = self.idx(x0.min(x1), y);
            let end = self.idx(x1, y);
            self.data[start..end].fill(v);
        }
    }
}

impl crate::image::traits::ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[f32]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}
