// leadscore-core/src/domain/features/bucket.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discretized review count. Ordered from `None` to `VeryHigh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReviewVolumeBucket {
    #[default]
    None, // 0 or absent
    Low,      // [1, 50)
    Medium,   // [50, 200)
    High,     // [200, 500)
    VeryHigh, // [500, inf)
}

impl ReviewVolumeBucket {
    pub fn from_count(count: Option<u32>) -> Self {
        match count.unwrap_or(0) {
            0 => Self::None,
            1..50 => Self::Low,
            50..200 => Self::Medium,
            200..500 => Self::High,
            _ => Self::VeryHigh,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::VeryHigh => "very_high",
        }
    }
}

impl fmt::Display for ReviewVolumeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_boundaries() {
        let cases = [
            (0, ReviewVolumeBucket::None),
            (1, ReviewVolumeBucket::Low),
            (49, ReviewVolumeBucket::Low),
            (50, ReviewVolumeBucket::Medium),
            (199, ReviewVolumeBucket::Medium),
            (200, ReviewVolumeBucket::High),
            (499, ReviewVolumeBucket::High),
            (500, ReviewVolumeBucket::VeryHigh),
            (u32::MAX, ReviewVolumeBucket::VeryHigh),
        ];
        for (count, expected) in cases {
            assert_eq!(
                ReviewVolumeBucket::from_count(Some(count)),
                expected,
                "count {count}"
            );
        }
    }

    #[test]
    fn test_absent_count_is_none() {
        assert_eq!(ReviewVolumeBucket::from_count(None), ReviewVolumeBucket::None);
    }

    #[test]
    fn test_bucket_ordering() {
        assert!(ReviewVolumeBucket::None < ReviewVolumeBucket::Low);
        assert!(ReviewVolumeBucket::High < ReviewVolumeBucket::VeryHigh);
    }
}
