use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use log::{debug, trace};

use crate::error::SurfaceError;
use crate::pixel_image::PixelImage;
use crate::utils::{Color, Rectangle, RGB_MASK};

const BYTES_PER_PIXEL: usize = 4;

/// Anything a framebuffer can be read from and written to at an offset.
pub trait PixelStream: Read + Write + Seek {}

impl<T: Read + Write + Seek> PixelStream for T {}

/// Per-pixel combination of a source image with what is already on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeOp {
    #[default]
    Copy,
    And,
    Or,
    Xor,
}

impl CompositeOp {
    fn apply(self, dst: Color, src: Color) -> Color {
        match self {
            CompositeOp::Copy => src,
            CompositeOp::And => dst & src,
            CompositeOp::Or => dst | src,
            CompositeOp::Xor => dst ^ src,
        }
    }
}

enum Backing {
    Device(Box<dyn PixelStream>),
    Memory,
}

/// Normalized inclusive span of a rectangle after clamping to the surface.
#[derive(Debug, Clone, Copy)]
struct Span {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
}

impl Span {
    fn width(&self) -> usize {
        self.x1 - self.x0 + 1
    }
}

/// Source/destination windows of a blit after clipping.
#[derive(Debug, Clone, Copy)]
struct Blit {
    dx: usize,
    dy: usize,
    sx: usize,
    sy: usize,
    w: usize,
    h: usize,
}

/// A 32bpp canvas backed either by a framebuffer device or by memory.
///
/// In direct mode every access goes straight to the device stream. Once
/// buffered, drawing lands in an in-memory mirror and only [`Surface::present`]
/// touches the device. Memory surfaces are always buffered.
pub struct Surface {
    width: usize,
    height: usize,
    stride: usize,
    backing: Backing,
    back: Option<PixelImage>,
}

pub fn parse_virtual_size(text: &str) -> Option<(usize, usize)> {
    let text = text.trim();
    let (w, h) = text.split_once(',').or_else(|| text.split_once('x'))?;
    let w = w.trim().parse().ok()?;
    let h = h.trim().parse().ok()?;
    Some((w, h))
}

fn read_sysfs(path: &Path) -> Result<String, SurfaceError> {
    fs::read_to_string(path).map_err(|source| SurfaceError::OpenDevice {
        path: path.to_path_buf(),
        source,
    })
}

impl Surface {
    /// Opens `/dev/<name>` and reads its geometry from
    /// `/sys/class/graphics/<name>/`.
    pub fn open_device(name: &str) -> Result<Self, SurfaceError> {
        Self::open_device_at(
            Path::new("/dev").join(name),
            Path::new("/sys/class/graphics").join(name),
        )
    }

    /// Like [`Surface::open_device`] but keeps only the device stride and
    /// uses the given resolution.
    pub fn open_device_with_size(
        name: &str,
        width: usize,
        height: usize,
    ) -> Result<Self, SurfaceError> {
        let mut surface = Self::open_device(name)?;
        surface.width = width;
        surface.height = height;
        Ok(surface)
    }

    pub fn open_device_at(
        device: impl AsRef<Path>,
        sysfs_dir: impl AsRef<Path>,
    ) -> Result<Self, SurfaceError> {
        let device = device.as_ref();
        let sysfs_dir = sysfs_dir.as_ref();

        let size_path = sysfs_dir.join("virtual_size");
        let size_text = read_sysfs(&size_path)?;
        let (width, height) =
            parse_virtual_size(&size_text).ok_or_else(|| SurfaceError::Geometry {
                path: size_path.clone(),
                value: size_text.clone(),
            })?;

        let stride_path = sysfs_dir.join("stride");
        let stride_text = read_sysfs(&stride_path)?;
        let stride = stride_text
            .trim()
            .parse::<usize>()
            .map_err(|_| SurfaceError::Geometry {
                path: stride_path.clone(),
                value: stride_text.clone(),
            })?;

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(device)
            .map_err(|source| SurfaceError::OpenDevice {
                path: device.to_path_buf(),
                source,
            })?;

        debug!(
            "opened {} as {}x{} stride {}",
            device.display(),
            width,
            height,
            stride
        );
        Ok(Self::from_stream(file, width, height, stride))
    }

    /// Wraps an already-open stream. `stride` is the byte distance between
    /// rows and is used as given.
    pub fn from_stream(
        stream: impl PixelStream + 'static,
        width: usize,
        height: usize,
        stride: usize,
    ) -> Self {
        Self {
            width,
            height,
            stride,
            backing: Backing::Device(Box::new(stream)),
            back: None,
        }
    }

    /// Memory surface cleared to 0.
    pub fn memory(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            stride: width * BYTES_PER_PIXEL,
            backing: Backing::Memory,
            back: Some(PixelImage::new(width, height)),
        }
    }

    /// Memory surface seeded from a block of exactly `width * height * 4` bytes.
    pub fn from_memory(width: usize, height: usize, bytes: &[u8]) -> Result<Self, SurfaceError> {
        let expected = width * height * BYTES_PER_PIXEL;
        if bytes.len() != expected {
            return Err(SurfaceError::BufferSize {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|c| u32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        let mut surface = Self::memory(width, height);
        surface.back = PixelImage::from_pixels(width, height, pixels);
        Ok(surface)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn rect(&self) -> Rectangle {
        Rectangle::new(0, 0, self.width as i32, self.height as i32)
    }

    pub fn is_buffered(&self) -> bool {
        self.back.is_some()
    }

    pub fn is_device(&self) -> bool {
        matches!(self.backing, Backing::Device(_))
    }

    pub fn back_buffer(&self) -> Option<&PixelImage> {
        self.back.as_ref()
    }

    /// Switches a device surface between direct and buffered mode. Entering
    /// buffered mode seeds the mirror from the device. Memory surfaces stay
    /// buffered regardless.
    pub fn set_buffered(&mut self, buffered: bool) -> Result<(), SurfaceError> {
        if matches!(self.backing, Backing::Memory) || buffered == self.is_buffered() {
            return Ok(());
        }
        if buffered {
            let mut mirror = PixelImage::new(self.width, self.height);
            for y in 0..self.height {
                let row = self.read_device_span(0, y, self.width)?;
                mirror.row_mut(y).copy_from_slice(&row);
            }
            self.back = Some(mirror);
            debug!("surface switched to buffered mode");
        } else {
            self.back = None;
            debug!("surface switched to direct mode");
        }
        Ok(())
    }

    /// Copies the back buffer out to the device, honoring the stride.
    pub fn present(&mut self) -> Result<(), SurfaceError> {
        let (Backing::Device(stream), Some(back)) = (&mut self.backing, &self.back) else {
            return Ok(());
        };
        for y in 0..self.height {
            stream.seek(SeekFrom::Start((y * self.stride) as u64))?;
            stream.write_all(bytemuck::cast_slice(back.row(y)))?;
        }
        stream.flush()?;
        trace!("presented {}x{}", self.width, self.height);
        Ok(())
    }

    fn read_device_span(&mut self, x: usize, y: usize, len: usize) -> Result<Vec<Color>, SurfaceError> {
        let mut out = vec![0 as Color; len];
        if let Backing::Device(stream) = &mut self.backing {
            stream.seek(SeekFrom::Start((y * self.stride + x * BYTES_PER_PIXEL) as u64))?;
            stream.read_exact(bytemuck::cast_slice_mut(&mut out))?;
        }
        Ok(out)
    }

    fn read_span(&mut self, x: usize, y: usize, len: usize) -> Result<Vec<Color>, SurfaceError> {
        match &self.back {
            Some(back) => Ok(back.row(y)[x..x + len].to_vec()),
            None => self.read_device_span(x, y, len),
        }
    }

    fn write_span(&mut self, x: usize, y: usize, pixels: &[Color]) -> Result<(), SurfaceError> {
        if let Some(back) = &mut self.back {
            back.row_mut(y)[x..x + pixels.len()].copy_from_slice(pixels);
            return Ok(());
        }
        if let Backing::Device(stream) = &mut self.backing {
            stream.seek(SeekFrom::Start((y * self.stride + x * BYTES_PER_PIXEL) as u64))?;
            stream.write_all(bytemuck::cast_slice(pixels))?;
        }
        Ok(())
    }

    /// Orders the corners, clamps them to the surface and reports `None`
    /// when nothing of the rectangle remains.
    fn clamp_rect(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> Option<Span> {
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));
        let (w, h) = (self.width as i32, self.height as i32);
        if w == 0 || h == 0 || x0 >= w || y0 >= h || x1 < 0 || y1 < 0 {
            return None;
        }
        Some(Span {
            x0: x0.max(0) as usize,
            y0: y0.max(0) as usize,
            x1: x1.min(w - 1) as usize,
            y1: y1.min(h - 1) as usize,
        })
    }

    pub fn pixel(&mut self, x: i32, y: i32) -> Result<Option<Color>, SurfaceError> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return Ok(None);
        }
        Ok(self.read_span(x as usize, y as usize, 1)?.first().copied())
    }

    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), SurfaceError> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return Ok(());
        }
        self.write_span(x as usize, y as usize, &[color])
    }

    /// Fills the inclusive rectangle spanned by the two corners.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) -> Result<(), SurfaceError> {
        let Some(span) = self.clamp_rect(x0, y0, x1, y1) else {
            return Ok(());
        };
        if let Some(back) = &mut self.back {
            for y in span.y0..=span.y1 {
                back.row_mut(y)[span.x0..=span.x1].fill(color);
            }
            return Ok(());
        }
        let row = vec![color; span.width()];
        for y in span.y0..=span.y1 {
            self.write_span(span.x0, y, &row)?;
        }
        Ok(())
    }

    /// Inverts the RGB channels inside the inclusive rectangle.
    pub fn fill_rect_xor(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), SurfaceError> {
        let Some(span) = self.clamp_rect(x0, y0, x1, y1) else {
            return Ok(());
        };
        for y in span.y0..=span.y1 {
            let mut row = self.read_span(span.x0, y, span.width())?;
            row.iter_mut().for_each(|px| *px ^= RGB_MASK);
            self.write_span(span.x0, y, &row)?;
        }
        Ok(())
    }

    pub fn draw_hline(&mut self, x0: i32, x1: i32, y: i32, color: Color) -> Result<(), SurfaceError> {
        self.fill_rect(x0, y, x1, y, color)
    }

    pub fn draw_vline(&mut self, x: i32, y0: i32, y1: i32, color: Color) -> Result<(), SurfaceError> {
        self.fill_rect(x, y0, x, y1, color)
    }

    pub fn draw_hline_xor(&mut self, x0: i32, x1: i32, y: i32) -> Result<(), SurfaceError> {
        self.fill_rect_xor(x0, y, x1, y)
    }

    pub fn draw_vline_xor(&mut self, x: i32, y0: i32, y1: i32) -> Result<(), SurfaceError> {
        self.fill_rect_xor(x, y0, x, y1)
    }

    /// One-pixel outline of the inclusive rectangle.
    pub fn draw_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) -> Result<(), SurfaceError> {
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));
        self.draw_hline(x0, x1, y0, color)?;
        if y1 > y0 {
            self.draw_hline(x0, x1, y1, color)?;
        }
        if y1.saturating_sub(y0) >= 2 {
            self.draw_vline(x0, y0 + 1, y1 - 1, color)?;
            if x1 > x0 {
                self.draw_vline(x1, y0 + 1, y1 - 1, color)?;
            }
        }
        Ok(())
    }

    /// XOR outline. Each pixel of the outline is inverted exactly once, so
    /// drawing it twice restores the original content.
    pub fn draw_rect_xor(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), SurfaceError> {
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));
        self.draw_hline_xor(x0, x1, y0)?;
        if y1 > y0 {
            self.draw_hline_xor(x0, x1, y1)?;
        }
        if y1.saturating_sub(y0) >= 2 {
            self.draw_vline_xor(x0, y0 + 1, y1 - 1)?;
            if x1 > x0 {
                self.draw_vline_xor(x1, y0 + 1, y1 - 1)?;
            }
        }
        Ok(())
    }

    pub fn clear(&mut self, color: Color) -> Result<(), SurfaceError> {
        self.fill_rect(0, 0, self.width as i32 - 1, self.height as i32 - 1, color)
    }

    /// Reads a `width x height` block. The result is shrunk to the part that
    /// lies on the surface and is empty when nothing does.
    pub fn read_pixels(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<PixelImage, SurfaceError> {
        if width <= 0 || height <= 0 {
            return Ok(PixelImage::default());
        }
        self.read_pixels_rect(x, y, x.saturating_add(width - 1), y.saturating_add(height - 1))
    }

    pub fn read_pixels_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<PixelImage, SurfaceError> {
        let Some(span) = self.clamp_rect(x0, y0, x1, y1) else {
            return Ok(PixelImage::default());
        };
        let mut out = PixelImage::new(span.width(), span.y1 - span.y0 + 1);
        for (row, y) in (span.y0..=span.y1).enumerate() {
            let pixels = self.read_span(span.x0, y, span.width())?;
            out.row_mut(row).copy_from_slice(&pixels);
        }
        Ok(out)
    }

    /// Copy of the whole surface.
    pub fn snapshot(&mut self) -> Result<PixelImage, SurfaceError> {
        match &self.back {
            Some(back) => Ok(back.clone()),
            None => self.read_pixels(0, 0, self.width as i32, self.height as i32),
        }
    }

    pub fn save_png(&mut self, path: impl AsRef<Path>) -> Result<(), SurfaceError> {
        let image = self.snapshot()?.to_rgba_image();
        image.save(path.as_ref())?;
        debug!("saved surface to {}", path.as_ref().display());
        Ok(())
    }

    pub fn draw_image(&mut self, img: &PixelImage, x: i32, y: i32, op: CompositeOp) -> Result<(), SurfaceError> {
        self.draw_image_region(img, x, y, img.width() as i32, img.height() as i32, 0, 0, op)
    }

    /// Composites the `width x height` window of `img` starting at
    /// `(src_x, src_y)` onto the surface at `(x, y)`.
    ///
    /// A negative destination moves the source window forward instead of
    /// discarding the image, and a negative source origin moves the
    /// destination forward, so partly visible images still draw their
    /// visible part.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_image_region(
        &mut self,
        img: &PixelImage,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        src_x: i32,
        src_y: i32,
        op: CompositeOp,
    ) -> Result<(), SurfaceError> {
        let Some(blit) = self.clip_blit(img, x, y, width, height, src_x, src_y) else {
            return Ok(());
        };
        trace!("blit {:?} {:?}", blit, op);
        for row in 0..blit.h {
            let src = &img.row(blit.sy + row)[blit.sx..blit.sx + blit.w];
            if op == CompositeOp::Copy {
                self.write_span(blit.dx, blit.dy + row, src)?;
                continue;
            }
            let mut dst = self.read_span(blit.dx, blit.dy + row, blit.w)?;
            for (d, s) in dst.iter_mut().zip(src) {
                *d = op.apply(*d, *s);
            }
            self.write_span(blit.dx, blit.dy + row, &dst)?;
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn clip_blit(
        &self,
        img: &PixelImage,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        sx: i32,
        sy: i32,
    ) -> Option<Blit> {
        let (mut x, mut y, mut w, mut h) = (x as i64, y as i64, w as i64, h as i64);
        let (mut sx, mut sy) = (sx as i64, sy as i64);
        if sx < 0 {
            x -= sx;
            w += sx;
            sx = 0;
        }
        if sy < 0 {
            y -= sy;
            h += sy;
            sy = 0;
        }
        if x < 0 {
            sx -= x;
            w += x;
            x = 0;
        }
        if y < 0 {
            sy -= y;
            h += y;
            y = 0;
        }
        let w = w
            .min(img.width() as i64 - sx)
            .min(self.width as i64 - x);
        let h = h
            .min(img.height() as i64 - sy)
            .min(self.height as i64 - y);
        if w <= 0 || h <= 0 {
            return None;
        }
        Some(Blit {
            dx: x as usize,
            dy: y as usize,
            sx: sx as usize,
            sy: sy as usize,
            w: w as usize,
            h: h as usize,
        })
    }
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .field("device", &self.is_device())
            .field("buffered", &self.is_buffered())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{BLACK, WHITE};
    use std::io::Cursor;

    #[test]
    fn parses_both_virtual_size_forms() {
        assert_eq!(parse_virtual_size("480,272\n"), Some((480, 272)));
        assert_eq!(parse_virtual_size("800x480"), Some((800, 480)));
        assert_eq!(parse_virtual_size("garbage"), None);
    }

    #[test]
    fn fill_rect_swaps_and_clamps() {
        let mut s = Surface::memory(10, 10);
        s.fill_rect(12, 12, 8, 8, WHITE).unwrap();
        let back = s.back_buffer().unwrap();
        assert_eq!(back.get(8, 8), Some(WHITE));
        assert_eq!(back.get(9, 9), Some(WHITE));
        assert_eq!(back.get(7, 8), Some(0));
    }

    #[test]
    fn fill_rect_outside_is_noop() {
        let mut s = Surface::memory(10, 10);
        s.fill_rect(10, 0, 20, 5, WHITE).unwrap();
        s.fill_rect(-5, -5, -1, -1, WHITE).unwrap();
        assert!(s.back_buffer().unwrap().pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn rect_outline_xor_twice_restores() {
        let mut s = Surface::memory(6, 6);
        s.clear(BLACK).unwrap();
        let before = s.snapshot().unwrap();
        s.draw_rect_xor(1, 1, 4, 4).unwrap();
        assert_eq!(s.pixel(1, 1).unwrap(), Some(WHITE));
        assert_eq!(s.pixel(2, 2).unwrap(), Some(BLACK));
        s.draw_rect_xor(1, 1, 4, 4).unwrap();
        assert_eq!(s.snapshot().unwrap(), before);
    }

    #[test]
    fn read_pixels_with_empty_size_is_empty() {
        let mut s = Surface::memory(4, 4);
        assert!(s.read_pixels(0, 0, 0, 3).unwrap().is_empty());
        assert!(s.read_pixels(1, 1, 3, -1).unwrap().is_empty());
        let part = s.read_pixels(2, 2, 10, 10).unwrap();
        assert_eq!((part.width(), part.height()), (2, 2));
    }

    #[test]
    fn negative_destination_shifts_source() {
        let mut s = Surface::memory(4, 4);
        let mut img = PixelImage::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                img.set(x, y, (y * 3 + x) as u32 + 1);
            }
        }
        s.draw_image(&img, -1, -2, CompositeOp::Copy).unwrap();
        assert_eq!(s.pixel(0, 0).unwrap(), Some(8));
        assert_eq!(s.pixel(1, 0).unwrap(), Some(9));
        assert_eq!(s.pixel(0, 1).unwrap(), Some(0));
    }

    #[test]
    fn direct_mode_honors_padded_stride() {
        let stride = 4 * 4 + 8;
        let mut s = Surface::from_stream(Cursor::new(vec![0u8; stride * 3]), 4, 3, stride);
        s.put_pixel(3, 2, 0xFF11_2233).unwrap();
        s.put_pixel(4, 2, WHITE).unwrap();
        assert_eq!(s.pixel(3, 2).unwrap(), Some(0xFF11_2233));
        assert_eq!(s.pixel(0, 2).unwrap(), Some(0));
        s.fill_rect_xor(0, 0, 0, 0).unwrap();
        assert_eq!(s.pixel(0, 0).unwrap(), Some(RGB_MASK));
    }

    #[test]
    fn memory_surfaces_stay_buffered() {
        let mut s = Surface::memory(2, 2);
        s.set_buffered(false).unwrap();
        assert!(s.is_buffered());
        assert!(s.present().is_ok());
    }

    #[test]
    fn from_memory_checks_length() {
        assert!(matches!(
            Surface::from_memory(2, 2, &[0; 15]),
            Err(SurfaceError::BufferSize {
                expected: 16,
                actual: 15
            })
        ));
        let s = Surface::from_memory(1, 1, &0xFF00_00FFu32.to_ne_bytes()).unwrap();
        assert_eq!(s.back_buffer().unwrap().get(0, 0), Some(0xFF00_00FF));
    }
}
