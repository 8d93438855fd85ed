//! The value shown on the die.

use serde::{Deserialize, Serialize};

/// A six-sided die face, always in `1..=6`.
///
/// Serialized as a bare integer. Deserializing a value outside the range
/// fails, so stored history can never smuggle in an impossible face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Face(u8);

impl Face {
    /// Lowest face value.
    pub const MIN: u8 = 1;
    /// Highest face value.
    pub const MAX: u8 = 6;

    /// Every face in ascending order.
    pub const ALL: [Face; 6] = [Face(1), Face(2), Face(3), Face(4), Face(5), Face(6)];

    /// Create a face, returning `None` when `value` is not in `1..=6`.
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// The numeric value of this face.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Zero-based position of this face, for indexing per-face tables.
    pub fn index(self) -> usize {
        usize::from(self.0 - Self::MIN)
    }
}

impl Default for Face {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for Face {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("face out of range: {value}"))
    }
}

impl From<Face> for u8 {
    fn from(face: Face) -> Self {
        face.0
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_range() {
        for v in 1..=6 {
            assert_eq!(Face::new(v).map(Face::value), Some(v));
        }
        assert_eq!(Face::new(0), None);
        assert_eq!(Face::new(7), None);
    }

    #[test]
    fn default_is_one() {
        assert_eq!(Face::default().value(), 1);
    }

    #[test]
    fn index_matches_all() {
        for (i, face) in Face::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }

    #[test]
    fn serializes_as_integer() {
        let face = Face::new(4).unwrap();
        assert_eq!(serde_json::to_string(&face).unwrap(), "4");
        let back: Face = serde_json::from_str("4").unwrap();
        assert_eq!(back, face);
    }

    #[test]
    fn rejects_out_of_range_on_deserialize() {
        assert!(serde_json::from_str::<Face>("0").is_err());
        assert!(serde_json::from_str::<Face>("9").is_err());
        assert!(serde_json::from_str::<Face>("-1").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Face::new(6).unwrap().to_string(), "6");
    }
}
