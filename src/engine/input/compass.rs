// Discrete 9-way joystick directions

use glam::{IVec2, Vec2};

use super::axis::axis_intent;

/// Direction reported by the joystick collaborator
///
/// Screen coordinates: x grows to the right, y grows downward, so `N` is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Compass {
    /// Stick at rest
    #[default]
    Centre,
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

/// Movement vector for each direction, indexed by discriminant
const VECTORS: [IVec2; 9] = [
    IVec2::new(0, 0),   // Centre
    IVec2::new(0, -1),  // N
    IVec2::new(1, -1),  // NE
    IVec2::new(1, 0),   // E
    IVec2::new(1, 1),   // SE
    IVec2::new(0, 1),   // S
    IVec2::new(-1, 1),  // SW
    IVec2::new(-1, 0),  // W
    IVec2::new(-1, -1), // NW
];

impl Compass {
    /// All directions in raw-code order
    pub const ALL: [Compass; 9] = [
        Self::Centre,
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Unit step `(dx, dy)` with each component in `{-1, 0, 1}`
    pub fn vector(self) -> IVec2 {
        VECTORS[self as usize]
    }

    /// Whether this direction produces any movement
    pub fn is_moving(self) -> bool {
        self != Self::Centre
    }

    /// Decode a raw joystick code: 0 is centre, 1..=8 run clockwise from north.
    /// Anything else is treated as centre.
    pub fn from_raw(code: u8) -> Self {
        Self::ALL
            .get(code as usize)
            .copied()
            .unwrap_or(Self::Centre)
    }

    /// Inverse of [`Compass::vector`]; components are reduced to their sign first
    pub fn from_vector(vector: IVec2) -> Self {
        let signum = vector.signum();
        VECTORS
            .iter()
            .position(|v| *v == signum)
            .map(|index| Self::ALL[index])
            .unwrap_or(Self::Centre)
    }

    /// Quantise an analog stick sample, applying the dead zone per axis
    pub fn from_axis(sample: Vec2, dead_zone: f32) -> Self {
        Self::from_vector(IVec2::new(
            axis_intent(sample.x, dead_zone),
            axis_intent(sample.y, dead_zone),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vectors_are_unit_steps() {
        for direction in Compass::ALL {
            let v = direction.vector();
            assert!(v.x.abs() <= 1 && v.y.abs() <= 1);
            assert_eq!(direction.is_moving(), v != IVec2::ZERO);
        }
    }

    #[test]
    fn test_cardinal_vectors() {
        assert_eq!(Compass::N.vector(), IVec2::new(0, -1));
        assert_eq!(Compass::E.vector(), IVec2::new(1, 0));
        assert_eq!(Compass::SW.vector(), IVec2::new(-1, 1));
        assert_eq!(Compass::Centre.vector(), IVec2::ZERO);
    }

    #[test]
    fn test_from_raw() {
        assert_eq!(Compass::from_raw(0), Compass::Centre);
        assert_eq!(Compass::from_raw(3), Compass::E);
        assert_eq!(Compass::from_raw(8), Compass::NW);
    }

    #[test]
    fn test_from_raw_out_of_range_is_centre() {
        assert_eq!(Compass::from_raw(9), Compass::Centre);
        assert_eq!(Compass::from_raw(255), Compass::Centre);
    }

    #[test]
    fn test_from_vector_matches_table() {
        for direction in Compass::ALL {
            assert_eq!(Compass::from_vector(direction.vector()), direction);
        }
        assert_eq!(Compass::from_vector(IVec2::new(7, -3)), Compass::NE);
    }

    #[test]
    fn test_from_axis_dead_zone() {
        assert_eq!(Compass::from_axis(Vec2::new(0.2, -0.25), 0.3), Compass::Centre);
        assert_eq!(Compass::from_axis(Vec2::new(0.9, 0.0), 0.3), Compass::E);
        assert_eq!(Compass::from_axis(Vec2::new(-0.5, 0.8), 0.3), Compass::SW);
        assert_eq!(Compass::from_axis(Vec2::new(f32::NAN, -1.0), 0.3), Compass::N);
    }
}
