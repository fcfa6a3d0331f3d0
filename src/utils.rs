use std::ops::Add;

/// Packed 0xAARRGGBB color. Alpha is carried as an operand for bitwise
/// compositing, never blended.
pub type Color = u32;

pub const BLACK: Color = 0xFF00_0000;
pub const WHITE: Color = 0xFFFF_FFFF;
pub const LIGHT_GRAY: Color = 0xFFC0_C0C0;
/// All bits set. ANDing with it keeps the destination untouched.
pub const OPAQUE_MASK: Color = 0xFFFF_FFFF;
pub const RGB_MASK: Color = 0x00FF_FFFF;

/// Builds an opaque color, clamping each channel into 0..=255.
pub fn make_color(r: i32, g: i32, b: i32) -> Color {
    let r = r.clamp(0, 255) as u32;
    let g = g.clamp(0, 255) as u32;
    let b = b.clamp(0, 255) as u32;
    0xFF00_0000 | (r << 16) | (g << 8) | b
}

pub fn split_color(color: Color) -> (u8, u8, u8) {
    (
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Self::Output {
        Size {
            width: self.width + rhs.width,
            height: self.height + rhs.height,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in pixels, origin at the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= self.x
            && position.x < self.x.saturating_add(self.width)
            && position.y >= self.y
            && position.y < self.y.saturating_add(self.height)
    }

    pub fn pos(&self) -> Position {
        Position {
            x: self.x,
            y: self.y,
        }
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Shrinks the rectangle by `dx` on the left and right and `dy` on the
    /// top and bottom. The result never has a negative size.
    pub fn inset(&self, dx: i32, dy: i32) -> Rectangle {
        Rectangle::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width.saturating_sub(dx.saturating_mul(2)).max(0),
            self.height.saturating_sub(dy.saturating_mul(2)).max(0),
        )
    }

    /// Inclusive bottom-right corner.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width.saturating_sub(1))
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height.saturating_sub(1))
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}
