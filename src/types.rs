use glam::{IVec2, UVec2};

/// Rect
/// Integer origin and size, used for clip regions and draw destinations
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub pos: IVec2,
    pub size: UVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: UVec2::new(w, h),
        }
    }

    pub fn width(&self) -> u32 {
        self.size.x
    }

    pub fn height(&self) -> u32 {
        self.size.y
    }

    /// Position that centers a region of `size` inside `outer`
    pub fn centered_pos(outer: UVec2, size: UVec2) -> IVec2 {
        (outer.as_ivec2() - size.as_ivec2()) / 2
    }
}

#[cfg(test)]
mod tests {
    use glam::{IVec2, UVec2};

    use super::Rect;

    #[test]
    fn test_centered_pos_truncates() {
        let pos = Rect::centered_pos(UVec2::new(640, 480), UVec2::new(217, 350));
        assert_eq!(pos, IVec2::new(211, 65));
    }

    #[test]
    fn test_centered_pos_larger_than_outer() {
        let pos = Rect::centered_pos(UVec2::new(640, 480), UVec2::new(800, 600));
        assert_eq!(pos, IVec2::new(-80, -60));
    }
}
