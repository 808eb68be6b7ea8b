//! Article difficulty levels.

use serde::{Deserialize, Serialize};

/// Reading difficulty of an article.
///
/// The derived `Ord` follows declaration order: beginner < intermediate
/// < advanced. Articles without an explicit difficulty rank as beginner,
/// which is what `Default` encodes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Lowercase label, matching the frontmatter spelling.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Difficulty::Beginner < Difficulty::Intermediate);
        assert!(Difficulty::Intermediate < Difficulty::Advanced);
    }

    #[test]
    fn test_default_is_beginner() {
        assert_eq!(Difficulty::default(), Difficulty::Beginner);
    }

    #[test]
    fn test_deserialize_lowercase() {
        let d: Difficulty = serde_json::from_str(r#""advanced""#).unwrap();
        assert_eq!(d, Difficulty::Advanced);
    }

    #[test]
    fn test_display() {
        assert_eq!(Difficulty::Intermediate.to_string(), "intermediate");
    }
}
