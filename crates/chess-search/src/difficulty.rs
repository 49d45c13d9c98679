//! Difficulty tiers for the automated opponent.

use std::fmt;
use std::str::FromStr;

/// Named strength settings. Each tier maps to a fixed search depth;
/// the easy tier additionally injects randomness through the heuristic
/// picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Returns the minimax search depth for this tier, in plies.
    #[inline]
    pub const fn search_depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_map() {
        assert_eq!(Difficulty::Easy.search_depth(), 2);
        assert_eq!(Difficulty::Medium.search_depth(), 3);
        assert_eq!(Difficulty::Hard.search_depth(), 4);
    }

    #[test]
    fn parse_roundtrip() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(d.to_string().parse::<Difficulty>(), Ok(d));
        }
        assert!("grandmaster".parse::<Difficulty>().is_err());
    }
}
