//! Coarse quality tiers for display.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowest percentage rated [`MatchQuality::Great`].
pub const GREAT_THRESHOLD: u8 = 85;
/// Lowest percentage rated [`MatchQuality::Good`].
pub const GOOD_THRESHOLD: u8 = 65;
/// Lowest percentage rated [`MatchQuality::Fair`].
pub const FAIR_THRESHOLD: u8 = 45;

/// Display tier of a match percentage. Not used for ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchQuality {
    /// Limited match.
    Light,
    /// Worth a look.
    Fair,
    /// Suitable recommendation.
    Good,
    /// Excellent recommendation.
    Great,
}

impl MatchQuality {
    /// Return the tier as its lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::Great => "great",
        }
    }

    /// Persian label shown on the kiosk.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "تطابق محدود",
            Self::Fair => "گزینه قابل بررسی",
            Self::Good => "پیشنهاد مناسب",
            Self::Great => "پیشنهاد عالی",
        }
    }
}

impl fmt::Display for MatchQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a match percentage to its quality tier.
///
/// # Examples
/// ```
/// use scentmatch_scorer::{MatchQuality, describe_match_quality};
///
/// assert_eq!(describe_match_quality(85), MatchQuality::Great);
/// assert_eq!(describe_match_quality(44), MatchQuality::Light);
/// ```
#[must_use]
pub const fn describe_match_quality(match_percentage: u8) -> MatchQuality {
    if match_percentage >= GREAT_THRESHOLD {
        MatchQuality::Great
    } else if match_percentage >= GOOD_THRESHOLD {
        MatchQuality::Good
    } else if match_percentage >= FAIR_THRESHOLD {
        MatchQuality::Fair
    } else {
        MatchQuality::Light
    }
}
