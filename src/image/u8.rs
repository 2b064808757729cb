use crate::types::Rect;

/// Borrowed 8-bit grayscale raster. Rows may be padded (`stride >= w`).
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Tightly packed view over `data` (`data.len() >= w * h`).
    pub fn new(w: usize, h: usize, data: &'a [u8]) -> Self {
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Sub-view over `rect`, clipped to the image. Returns `None` when the
    /// clipped region is empty.
    pub fn crop(&self, rect: Rect) -> Option<ImageU8<'a>> {
        let bounds = Rect::new(0, 0, self.w as i32, self.h as i32);
        let r = bounds.intersection(&rect);
        if r.is_empty() {
            return None;
        }
        let offset = r.y as usize * self.stride + r.x as usize;
        Some(ImageU8 {
            w: r.w as usize,
            h: r.h as usize,
            stride: self.stride,
            data: &self.data[offset..],
        })
    }

    /// Copy the view into an `image` buffer (drops row padding).
    pub fn to_gray_image(&self) -> image::GrayImage {
        image::GrayImage::from_fn(self.w as u32, self.h as u32, |x, y| {
            image::Luma([self.get(x as usize, y as usize)])
        })
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

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
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}
