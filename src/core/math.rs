// Screen-space geometry helpers

use glam::IVec2;

/// Axis-aligned screen rectangle, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: IVec2,
    pub max: IVec2,
}

impl Bounds {
    pub const fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min: IVec2::new(min_x, min_y),
            max: IVec2::new(max_x, max_y),
        }
    }

    /// True when `min <= max` on both axes
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// Check if a point lies inside the rectangle
    pub fn contains(&self, point: IVec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Clamp a point componentwise into the rectangle
    pub fn clamp(&self, point: IVec2) -> IVec2 {
        IVec2::new(self.clamp_x(point.x), clamp(point.y, self.min.y, self.max.y))
    }

    /// Clamp only the horizontal coordinate
    pub fn clamp_x(&self, x: i32) -> i32 {
        clamp(x, self.min.x, self.max.x)
    }
}

/// Clamp a value between min and max
///
/// Unlike `Ord::clamp` this never panics on an inverted range; `min` wins.
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-5, 0, 10), 0);
        assert_eq!(clamp(15, 0, 10), 10);
    }

    #[test]
    fn test_bounds_clamp() {
        let bounds = Bounds::new(20, 20, 220, 220);
        assert_eq!(bounds.clamp(IVec2::new(0, 300)), IVec2::new(20, 220));
        assert_eq!(bounds.clamp(IVec2::new(120, 120)), IVec2::new(120, 120));
    }

    #[test]
    fn test_bounds_contains_edges() {
        let bounds = Bounds::new(20, 20, 220, 220);
        assert!(bounds.contains(IVec2::new(20, 220)));
        assert!(!bounds.contains(IVec2::new(19, 100)));
        assert!(!bounds.contains(IVec2::new(100, 221)));
    }

    #[test]
    fn test_bounds_validity() {
        assert!(Bounds::new(0, 0, 0, 0).is_valid());
        assert!(!Bounds::new(10, 0, 5, 10).is_valid());
    }
}
