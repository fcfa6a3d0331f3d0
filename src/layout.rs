use crate::utils::{Position, Rectangle, Size};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HAnchor {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VAnchor {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// One of the nine positions a box can take inside a larger one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Anchors {
    pub h: HAnchor,
    pub v: VAnchor,
}

impl Anchors {
    pub const LEFT_TOP: Anchors = Anchors::new(HAnchor::Left, VAnchor::Top);
    pub const CENTER_TOP: Anchors = Anchors::new(HAnchor::Center, VAnchor::Top);
    pub const RIGHT_TOP: Anchors = Anchors::new(HAnchor::Right, VAnchor::Top);
    pub const LEFT_MIDDLE: Anchors = Anchors::new(HAnchor::Left, VAnchor::Middle);
    pub const CENTER: Anchors = Anchors::new(HAnchor::Center, VAnchor::Middle);
    pub const RIGHT_MIDDLE: Anchors = Anchors::new(HAnchor::Right, VAnchor::Middle);
    pub const LEFT_BOTTOM: Anchors = Anchors::new(HAnchor::Left, VAnchor::Bottom);
    pub const CENTER_BOTTOM: Anchors = Anchors::new(HAnchor::Center, VAnchor::Bottom);
    pub const RIGHT_BOTTOM: Anchors = Anchors::new(HAnchor::Right, VAnchor::Bottom);

    pub const fn new(h: HAnchor, v: VAnchor) -> Self {
        Self { h, v }
    }

    pub fn is_left(&self) -> bool {
        self.h == HAnchor::Left
    }

    pub fn is_right(&self) -> bool {
        self.h == HAnchor::Right
    }

    pub fn is_top(&self) -> bool {
        self.v == VAnchor::Top
    }

    pub fn is_bottom(&self) -> bool {
        self.v == VAnchor::Bottom
    }
}

impl HAnchor {
    /// Shift that places `used` pixels inside `available`. Never negative,
    /// so overflowing content spills past the far edge.
    pub fn offset(self, available: i32, used: i32) -> i32 {
        let free = (available - used).max(0);
        match self {
            HAnchor::Left => 0,
            HAnchor::Center => free / 2,
            HAnchor::Right => free,
        }
    }
}

impl VAnchor {
    pub fn offset(self, available: i32, used: i32) -> i32 {
        let free = (available - used).max(0);
        match self {
            VAnchor::Top => 0,
            VAnchor::Middle => free / 2,
            VAnchor::Bottom => free,
        }
    }
}

/// Symmetric per-axis thickness: `x` on the left and right, `y` on the top
/// and bottom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Spacing {
    pub x: i32,
    pub y: i32,
}

impl Spacing {
    pub const ZERO: Spacing = Spacing { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn uniform(v: i32) -> Self {
        Self { x: v, y: v }
    }

    /// Total space taken on both sides of each axis.
    pub fn both_sides(&self) -> Size {
        Size::new(2 * self.x, 2 * self.y)
    }
}

impl std::ops::Add for Spacing {
    type Output = Spacing;

    fn add(self, rhs: Spacing) -> Spacing {
        Spacing::new(self.x + rhs.x, self.y + rhs.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutResult {
    pub position: Position,
    pub size: Size,
}

/// Places a box of `desired` size inside `container` according to `anchors`.
pub fn layout_node(container: Rectangle, desired: Size, anchors: Anchors) -> LayoutResult {
    let x = container.x + anchors.h.offset(container.width, desired.width);
    let y = container.y + anchors.v.offset(container.height, desired.height);

    LayoutResult {
        position: Position { x, y },
        size: desired,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_layout() {
        let container = Rectangle::new(0, 0, 200, 100);
        let out = layout_node(container, Size::new(50, 20), Anchors::CENTER);
        assert_eq!(out.position, Position::new(75, 40));
        assert_eq!(out.size, Size::new(50, 20));
    }

    #[test]
    fn overflow_pins_to_start() {
        let container = Rectangle::new(5, 5, 10, 10);
        let out = layout_node(container, Size::new(40, 40), Anchors::RIGHT_BOTTOM);
        assert_eq!(out.position, Position::new(5, 5));
    }
}
