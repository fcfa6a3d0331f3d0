use image::{Rgba, RgbaImage};

use crate::utils::{Color, RGB_MASK};

/// Owned row-major buffer of packed ARGB pixels.
///
/// `pixels.len() == width * height` always holds; every constructor and
/// mutator preserves it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelImage {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl PixelImage {
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0)
    }

    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    /// Wraps an existing pixel vector. Returns `None` when the length does
    /// not match the dimensions.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Color>) -> Option<Self> {
        (pixels.len() == width * height).then_some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<Color> {
        self.pixels
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    pub fn row(&self, y: usize) -> &[Color] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    pub fn row_mut(&mut self, y: usize) -> &mut [Color] {
        &mut self.pixels[y * self.width..(y + 1) * self.width]
    }

    pub fn map(&self, f: impl Fn(Color) -> Color) -> PixelImage {
        Self {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&px| f(px)).collect(),
        }
    }

    /// Memory charged against the glyph cache budget: the pixel payload plus
    /// the fixed bookkeeping of the image itself.
    pub fn size_in_bytes(&self) -> usize {
        std::mem::size_of::<Self>() + self.pixels.len() * std::mem::size_of::<Color>()
    }

    /// Flips the RGB channels of every pixel, leaving alpha alone.
    pub fn invert_colors(&mut self) {
        for px in &mut self.pixels {
            *px ^= RGB_MASK;
        }
    }

    pub fn replace_color(&mut self, find: Color, replace: Color) {
        for px in self.pixels.iter_mut().filter(|px| **px == find) {
            *px = replace;
        }
    }

    /// Fills the inclusive rectangle `(x0, y0)..=(x1, y1)`, clamped to the image.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));
        if self.width == 0 || self.height == 0 {
            return;
        }
        if x1 < 0 || y1 < 0 || x0 >= self.width as i32 || y0 >= self.height as i32 {
            return;
        }
        let x0 = x0.max(0) as usize;
        let y0 = y0.max(0) as usize;
        let x1 = (x1 as usize).min(self.width - 1);
        let y1 = (y1 as usize).min(self.height - 1);
        for y in y0..=y1 {
            self.row_mut(y)[x0..=x1].fill(color);
        }
    }

    /// Raw little-endian view, laid out the way a 32bpp framebuffer expects.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let c = self.pixels[y as usize * self.width + x as usize];
            Rgba([(c >> 16) as u8, (c >> 8) as u8, c as u8, (c >> 24) as u8])
        })
    }

    pub fn from_rgba_image(img: &RgbaImage) -> Self {
        let (w, h) = img.dimensions();
        let pixels = img
            .pixels()
            .map(|Rgba([r, g, b, a])| {
                ((*a as u32) << 24) | ((*r as u32) << 16) | ((*g as u32) << 8) | *b as u32
            })
            .collect();
        Self {
            width: w as usize,
            height: h as usize,
            pixels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_in_bytes_counts_header_and_pixels() {
        let img = PixelImage::new(9, 22);
        assert_eq!(
            img.size_in_bytes(),
            std::mem::size_of::<PixelImage>() + 9 * 22 * 4
        );
    }

    #[test]
    fn invert_then_replace_recolors_strokes() {
        let mut img = PixelImage::from_pixels(2, 1, vec![0xFF00_0000, 0xFFFF_FFFF]).unwrap();
        img.invert_colors();
        assert_eq!(img.pixels(), &[0xFFFF_FFFF, 0xFF00_0000]);
        img.replace_color(0xFFFF_FFFF, 0xFF00_FF00);
        assert_eq!(img.pixels(), &[0xFF00_FF00, 0xFF00_0000]);
    }

    #[test]
    fn fill_rect_clamps_and_swaps() {
        let mut img = PixelImage::new(4, 3);
        img.fill_rect(10, 1, -3, 1, 7);
        assert_eq!(img.row(1), &[7, 7, 7, 7]);
        assert_eq!(img.row(0), &[0, 0, 0, 0]);
        img.fill_rect(5, 5, 9, 9, 1);
        assert!(img.pixels().iter().all(|&p| p != 1));
    }

    #[test]
    fn fill_rect_on_empty_image_is_a_no_op() {
        let mut img = PixelImage::new(0, 3);
        img.fill_rect(-1, -1, 1, 1, 7);
        assert!(img.pixels().is_empty());
    }

    #[test]
    fn rgba_conversion_preserves_channels() {
        let img = PixelImage::from_pixels(1, 1, vec![0x8012_3456]).unwrap();
        let rgba = img.to_rgba_image();
        assert_eq!(rgba.get_pixel(0, 0).0, [0x12, 0x34, 0x56, 0x80]);
        assert_eq!(PixelImage::from_rgba_image(&rgba), img);
    }

    #[test]
    fn from_pixels_rejects_wrong_length() {
        assert!(PixelImage::from_pixels(3, 3, vec![0; 8]).is_none());
    }
}
