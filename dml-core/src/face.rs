/// The six axis-aligned directions
use nalgebra::Vector3;

/// Axis-aligned facing, using the usual block-world convention where south
/// is `+Z` and up is `+Y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Face {
    North,
    South,
    East,
    West,
    Up,
    Down,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::North,
        Face::South,
        Face::East,
        Face::West,
        Face::Up,
        Face::Down,
    ];

    /// Unit vector pointing out of this face
    pub fn direction(self) -> Vector3<f32> {
        match self {
            Face::North => Vector3::new(0.0, 0.0, -1.0),
            Face::South => Vector3::new(0.0, 0.0, 1.0),
            Face::East => Vector3::new(1.0, 0.0, 0.0),
            Face::West => Vector3::new(-1.0, 0.0, 0.0),
            Face::Up => Vector3::new(0.0, 1.0, 0.0),
            Face::Down => Vector3::new(0.0, -1.0, 0.0),
        }
    }

    pub fn opposite(self) -> Face {
        match self {
            Face::North => Face::South,
            Face::South => Face::North,
            Face::East => Face::West,
            Face::West => Face::East,
            Face::Up => Face::Down,
            Face::Down => Face::Up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions_are_unit_and_opposed() {
        for face in Face::ALL {
            assert!((face.direction().norm() - 1.0).abs() < 1e-6);
            assert_eq!(face.direction(), -face.opposite().direction());
        }
    }
}
