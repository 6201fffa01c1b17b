//! Wellbeing recommendations derived from the positivity ratio.

use serde::Serialize;

/// Entries needed before analytics are shown.
pub const ANALYTICS_MIN_ENTRIES: usize = 2;
/// Entries needed before recommendations are shown.
pub const INSIGHTS_MIN_ENTRIES: usize = 5;

const CHALLENGING_BELOW: f64 = 40.0;
const POSITIVE_ABOVE: f64 = 70.0;

/// Reflection prompts shown next to recommendations.
pub const REFLECTION_PROMPTS: &[&str] = &[
    "🤔 What emotion appeared most this week? What might have caused it?",
    "💪 What activities correlated with your best moods?",
    "🌈 What's one thing you're grateful for this week?",
    "🎯 What's one small change you could make next week?",
];

/// Recommendation tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Positivity below 40%.
    Challenging,
    /// Positivity from 40% to 70%.
    Balanced,
    /// Positivity above 70%.
    Positive,
}

impl Recommendation {
    pub fn from_positivity(positivity: f64) -> Self {
        if positivity < CHALLENGING_BELOW {
            Self::Challenging
        } else if positivity > POSITIVE_ABOVE {
            Self::Positive
        } else {
            Self::Balanced
        }
    }

    pub fn headline(self) -> &'static str {
        match self {
            Self::Challenging => {
                "🌱 Your recent entries show more challenging emotions. Consider:"
            }
            Self::Balanced => "✨ You're experiencing a balanced mix of emotions",
            Self::Positive => "🌟 You're experiencing mostly positive emotions!",
        }
    }

    pub fn suggestions(self) -> &'static [&'static str] {
        match self {
            Self::Challenging => &[
                "Reaching out to a friend or loved one",
                "Practicing mindfulness or meditation",
                "Engaging in physical activity",
                "Consulting a mental health professional if feelings persist",
            ],
            Self::Balanced => &[
                "Continue tracking to identify patterns",
                "Notice what triggers different emotions",
                "Build on positive experiences",
            ],
            Self::Positive => &[
                "Keep up your current routines",
                "Share your positivity with others",
                "Document what's working well",
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Recommendation;

    #[test]
    fn tiers_use_exclusive_bounds() {
        assert_eq!(Recommendation::from_positivity(39.9), Recommendation::Challenging);
        assert_eq!(Recommendation::from_positivity(40.0), Recommendation::Balanced);
        assert_eq!(Recommendation::from_positivity(70.0), Recommendation::Balanced);
        assert_eq!(Recommendation::from_positivity(70.1), Recommendation::Positive);
    }

    #[test]
    fn every_tier_has_suggestions() {
        for tier in [
            Recommendation::Challenging,
            Recommendation::Balanced,
            Recommendation::Positive,
        ] {
            assert!(!tier.suggestions().is_empty());
            assert!(!tier.headline().is_empty());
        }
    }
}
