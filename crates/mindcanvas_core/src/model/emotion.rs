//! Emotion catalog and per-emotion rendering profiles.
//!
//! # Responsibility
//! - Define the closed set of emotions a journal entry can carry.
//! - Bind each emotion to an immutable palette/style profile.
//! - Hold the fixed analytics tables (wellbeing score, positive set).
//!
//! # Invariants
//! - Declaration order of `Emotion` is the catalog order used for ties.
//! - Every label resolves to a profile; unknown labels fall back to
//!   `DEFAULT_EMOTION` instead of failing.
//! - The wire form of an emotion is its emoji label (`"😊 Joyful"`).

use crate::art::color::Rgb;
use crate::art::shape::ShapeStyle;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};

/// Profile used whenever a label cannot be resolved.
pub const DEFAULT_EMOTION: Emotion = Emotion::Peaceful;

/// Number of colors in every palette.
pub const PALETTE_SIZE: usize = 5;

/// Journal emotion, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Emotion {
    Joyful,
    Melancholic,
    Furious,
    Peaceful,
    Worried,
    Passionate,
    Exhausted,
    Grateful,
    Contemplative,
    Confident,
    Hopeful,
    Disappointed,
}

/// Immutable palette/style pair for one emotion.
#[derive(Debug, Clone, PartialEq)]
pub struct EmotionProfile {
    pub emotion: Emotion,
    pub palette: [Rgb; PALETTE_SIZE],
    /// Descriptive motif name; resolved to a `ShapeStyle` by `style()`.
    pub motif: &'static str,
    pub wobble: f64,
    pub base_layers: u32,
}

impl EmotionProfile {
    /// Outline style drawn for this emotion.
    pub fn style(&self) -> ShapeStyle {
        ShapeStyle::from_tag(self.motif)
    }
}

impl Emotion {
    pub const ALL: [Emotion; 12] = [
        Emotion::Joyful,
        Emotion::Melancholic,
        Emotion::Furious,
        Emotion::Peaceful,
        Emotion::Worried,
        Emotion::Passionate,
        Emotion::Exhausted,
        Emotion::Grateful,
        Emotion::Contemplative,
        Emotion::Confident,
        Emotion::Hopeful,
        Emotion::Disappointed,
    ];

    /// Bare name, e.g. `Joyful`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Joyful => "Joyful",
            Self::Melancholic => "Melancholic",
            Self::Furious => "Furious",
            Self::Peaceful => "Peaceful",
            Self::Worried => "Worried",
            Self::Passionate => "Passionate",
            Self::Exhausted => "Exhausted",
            Self::Grateful => "Grateful",
            Self::Contemplative => "Contemplative",
            Self::Confident => "Confident",
            Self::Hopeful => "Hopeful",
            Self::Disappointed => "Disappointed",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Joyful => "😊",
            Self::Melancholic => "😢",
            Self::Furious => "😠",
            Self::Peaceful => "😌",
            Self::Worried => "😰",
            Self::Passionate => "😍",
            Self::Exhausted => "😴",
            Self::Grateful => "💖",
            Self::Contemplative => "🤔",
            Self::Confident => "😎",
            Self::Hopeful => "🤗",
            Self::Disappointed => "😔",
        }
    }

    /// Display and wire label, e.g. `😊 Joyful`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Joyful => "😊 Joyful",
            Self::Melancholic => "😢 Melancholic",
            Self::Furious => "😠 Furious",
            Self::Peaceful => "😌 Peaceful",
            Self::Worried => "😰 Worried",
            Self::Passionate => "😍 Passionate",
            Self::Exhausted => "😴 Exhausted",
            Self::Grateful => "💖 Grateful",
            Self::Contemplative => "🤔 Contemplative",
            Self::Confident => "😎 Confident",
            Self::Hopeful => "🤗 Hopeful",
            Self::Disappointed => "😔 Disappointed",
        }
    }

    /// Strict lookup by full label or bare name (case-insensitive).
    ///
    /// The whole trimmed input must match; `"😢 Joyful"` is not a label.
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        Self::ALL.into_iter().find(|emotion| {
            emotion.label() == trimmed || emotion.name().eq_ignore_ascii_case(trimmed)
        })
    }

    /// Lenient lookup: unknown labels resolve to `DEFAULT_EMOTION`.
    pub fn resolve(label: &str) -> Self {
        Self::from_label(label).unwrap_or(DEFAULT_EMOTION)
    }

    /// Position in catalog order.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn profile(self) -> &'static EmotionProfile {
        &PROFILES[self.index()]
    }

    /// Fixed wellbeing score (2..=9) used by the mood chart.
    pub fn wellbeing_score(self) -> u8 {
        match self {
            Self::Joyful => 9,
            Self::Passionate | Self::Grateful => 8,
            Self::Hopeful | Self::Confident => 7,
            Self::Peaceful => 6,
            Self::Contemplative => 5,
            Self::Furious => 4,
            Self::Exhausted | Self::Worried => 3,
            Self::Disappointed | Self::Melancholic => 2,
        }
    }

    /// Membership in the positive-emotion set.
    pub fn is_positive(self) -> bool {
        matches!(
            self,
            Self::Joyful
                | Self::Passionate
                | Self::Grateful
                | Self::Peaceful
                | Self::Confident
                | Self::Hopeful
        )
    }
}

impl Default for Emotion {
    fn default() -> Self {
        DEFAULT_EMOTION
    }
}

impl Display for Emotion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Emotion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Emotion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(Self::resolve(&label))
    }
}

const fn rgb(r: f64, g: f64, b: f64) -> Rgb {
    Rgb::new(r, g, b)
}

static PROFILES: [EmotionProfile; 12] = [
    EmotionProfile {
        emotion: Emotion::Joyful,
        palette: [
            rgb(1.0, 0.95, 0.3),
            rgb(1.0, 0.85, 0.2),
            rgb(1.0, 0.75, 0.4),
            rgb(0.95, 0.9, 0.5),
            rgb(1.0, 0.88, 0.35),
        ],
        motif: "circles",
        wobble: 0.25,
        base_layers: 12,
    },
    EmotionProfile {
        emotion: Emotion::Melancholic,
        palette: [
            rgb(0.25, 0.35, 0.55),
            rgb(0.35, 0.45, 0.65),
            rgb(0.45, 0.55, 0.75),
            rgb(0.2, 0.3, 0.5),
            rgb(0.55, 0.65, 0.85),
        ],
        motif: "flowing",
        wobble: 0.4,
        base_layers: 8,
    },
    EmotionProfile {
        emotion: Emotion::Furious,
        palette: [
            rgb(0.95, 0.15, 0.15),
            rgb(0.85, 0.25, 0.1),
            rgb(1.0, 0.3, 0.2),
            rgb(0.75, 0.1, 0.1),
            rgb(0.9, 0.45, 0.25),
        ],
        motif: "sharp",
        wobble: 0.5,
        base_layers: 15,
    },
    EmotionProfile {
        emotion: Emotion::Peaceful,
        palette: [
            rgb(0.55, 0.85, 0.75),
            rgb(0.45, 0.95, 0.85),
            rgb(0.65, 0.9, 0.9),
            rgb(0.35, 0.75, 0.65),
            rgb(0.75, 0.98, 0.88),
        ],
        motif: "smooth",
        wobble: 0.15,
        base_layers: 10,
    },
    EmotionProfile {
        emotion: Emotion::Worried,
        palette: [
            rgb(0.65, 0.55, 0.75),
            rgb(0.55, 0.45, 0.65),
            rgb(0.75, 0.65, 0.85),
            rgb(0.45, 0.35, 0.55),
            rgb(0.85, 0.75, 0.95),
        ],
        motif: "chaotic",
        wobble: 0.6,
        base_layers: 18,
    },
    EmotionProfile {
        emotion: Emotion::Passionate,
        palette: [
            rgb(1.0, 0.25, 0.55),
            rgb(0.95, 0.35, 0.75),
            rgb(1.0, 0.45, 0.5),
            rgb(0.9, 0.15, 0.45),
            rgb(1.0, 0.55, 0.65),
        ],
        motif: "swirls",
        wobble: 0.35,
        base_layers: 14,
    },
    EmotionProfile {
        emotion: Emotion::Exhausted,
        palette: [
            rgb(0.45, 0.45, 0.48),
            rgb(0.55, 0.55, 0.58),
            rgb(0.38, 0.38, 0.42),
            rgb(0.62, 0.62, 0.65),
            rgb(0.5, 0.5, 0.53),
        ],
        motif: "soft",
        wobble: 0.2,
        base_layers: 6,
    },
    EmotionProfile {
        emotion: Emotion::Grateful,
        palette: [
            rgb(1.0, 0.75, 0.82),
            rgb(0.95, 0.65, 0.75),
            rgb(1.0, 0.85, 0.92),
            rgb(0.9, 0.55, 0.65),
            rgb(1.0, 0.78, 0.88),
        ],
        motif: "hearts",
        wobble: 0.3,
        base_layers: 11,
    },
    EmotionProfile {
        emotion: Emotion::Contemplative,
        palette: [
            rgb(0.6, 0.55, 0.7),
            rgb(0.5, 0.45, 0.6),
            rgb(0.7, 0.65, 0.8),
            rgb(0.55, 0.5, 0.65),
            rgb(0.65, 0.6, 0.75),
        ],
        motif: "geometric",
        wobble: 0.25,
        base_layers: 9,
    },
    EmotionProfile {
        emotion: Emotion::Confident,
        palette: [
            rgb(0.2, 0.6, 0.8),
            rgb(0.3, 0.7, 0.9),
            rgb(0.15, 0.5, 0.7),
            rgb(0.25, 0.65, 0.85),
            rgb(0.35, 0.75, 0.95),
        ],
        motif: "bold",
        wobble: 0.3,
        base_layers: 10,
    },
    EmotionProfile {
        emotion: Emotion::Hopeful,
        palette: [
            rgb(1.0, 0.8, 0.5),
            rgb(0.95, 0.75, 0.6),
            rgb(1.0, 0.85, 0.65),
            rgb(0.9, 0.7, 0.55),
            rgb(0.98, 0.82, 0.58),
        ],
        motif: "ascending",
        wobble: 0.28,
        base_layers: 13,
    },
    EmotionProfile {
        emotion: Emotion::Disappointed,
        palette: [
            rgb(0.5, 0.4, 0.45),
            rgb(0.6, 0.5, 0.55),
            rgb(0.45, 0.35, 0.4),
            rgb(0.55, 0.45, 0.5),
            rgb(0.65, 0.55, 0.6),
        ],
        motif: "descending",
        wobble: 0.35,
        base_layers: 7,
    },
];

#[cfg(test)]
mod tests {
    use super::{Emotion, DEFAULT_EMOTION};
    use crate::art::shape::ShapeStyle;

    #[test]
    fn profiles_are_indexed_by_catalog_order() {
        for emotion in Emotion::ALL {
            assert_eq!(emotion.profile().emotion, emotion);
        }
    }

    #[test]
    fn from_label_accepts_emoji_label_and_bare_name() {
        assert_eq!(Emotion::from_label("😊 Joyful"), Some(Emotion::Joyful));
        assert_eq!(Emotion::from_label("furious"), Some(Emotion::Furious));
        assert_eq!(Emotion::from_label("  Hopeful "), Some(Emotion::Hopeful));
        assert_eq!(Emotion::from_label("Bored"), None);
    }

    #[test]
    fn from_label_rejects_mismatched_emoji() {
        assert_eq!(Emotion::from_label("😢 Joyful"), None);
        assert_eq!(Emotion::from_label("very joyful"), None);
        assert_eq!(Emotion::resolve("😢 Joyful"), DEFAULT_EMOTION);
    }

    #[test]
    fn resolve_falls_back_to_default_profile() {
        assert_eq!(Emotion::resolve("🙃 Ironic"), DEFAULT_EMOTION);
        assert_eq!(Emotion::resolve(""), Emotion::Peaceful);
    }

    #[test]
    fn motifs_resolve_to_expected_styles() {
        assert_eq!(Emotion::Joyful.profile().style(), ShapeStyle::CircularWobble);
        assert_eq!(Emotion::Furious.profile().style(), ShapeStyle::AngularSharp);
        assert_eq!(Emotion::Grateful.profile().style(), ShapeStyle::Heart);
        assert_eq!(Emotion::Melancholic.profile().style(), ShapeStyle::FlowingWave);
        assert_eq!(Emotion::Passionate.profile().style(), ShapeStyle::SpiralSwirl);
        assert_eq!(
            Emotion::Contemplative.profile().style(),
            ShapeStyle::GeometricPolygon
        );
        assert_eq!(Emotion::Hopeful.profile().style(), ShapeStyle::AscendingArc);
        assert_eq!(Emotion::Worried.profile().style(), ShapeStyle::DefaultWobble);
    }

    #[test]
    fn positive_set_has_six_members() {
        let positive = Emotion::ALL.iter().filter(|e| e.is_positive()).count();
        assert_eq!(positive, 6);
    }

    #[test]
    fn wellbeing_scores_stay_in_range() {
        for emotion in Emotion::ALL {
            let score = emotion.wellbeing_score();
            assert!((2..=9).contains(&score), "{emotion} scored {score}");
        }
    }
}
