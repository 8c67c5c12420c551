/// Per-axis movement request, each component in {-1, 0, 1}.
///
/// Axes are independent, so a diagonal request moves `speed` along both axes
/// at once and is faster than a straight one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
}

impl Direction {
    pub fn new(dx: i8, dy: i8) -> Direction {
        Direction {
            dx: dx.signum(),
            dy: dy.signum(),
        }
    }

    /// Screen coordinates: up is negative y. Opposite keys cancel out.
    pub fn from_keys(left: bool, right: bool, up: bool, down: bool) -> Direction {
        Direction::new(
            right as i8 - left as i8,
            down as i8 - up as i8,
        )
    }

    pub fn is_idle(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_keys() {
        assert_eq!(Direction::from_keys(false, false, false, false), Direction::default());
        assert_eq!(Direction::from_keys(true, false, false, false), Direction::new(-1, 0));
        assert_eq!(Direction::from_keys(false, true, false, true), Direction::new(1, 1));
        assert_eq!(Direction::from_keys(false, false, true, false), Direction::new(0, -1));
    }

    #[test]
    fn opposite_keys_cancel() {
        assert!(Direction::from_keys(true, true, false, false).is_idle());
        assert_eq!(Direction::from_keys(true, true, true, false), Direction::new(0, -1));
    }

    #[test]
    fn components_are_unit() {
        assert_eq!(Direction::new(5, -3), Direction::new(1, -1));
    }
}
