#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    /// Shifts the position by a signed delta, `None` if either axis would go negative.
    pub fn offset(self, dx: isize, dy: isize) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }
}

impl From<[usize; 2]> for Position {
    fn from(value: [usize; 2]) -> Self {
        Self {
            x: value[0],
            y: value[1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_stops_at_zero() {
        let origin = Position { x: 0, y: 0 };

        assert_eq!(origin.offset(-1, 0), None);
        assert_eq!(origin.offset(0, -1), None);
        assert_eq!(origin.offset(1, 1), Some(Position { x: 1, y: 1 }));
    }

    #[test]
    fn from_array() {
        let pos = Position::from([4, 2]);
        assert_eq!(pos, Position { x: 4, y: 2 });
    }
}
