use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Five-weight descriptor of a playing personality.
///
/// Each weight lies in \[0.0, 1.0\]. Out-of-range input is clamped at construction
/// (including when deserializing), and `NaN` becomes `0.0`. The weights
/// are independent: they are not required to sum to one.
///
/// | weight       | meaning                                        |
/// |--------------|------------------------------------------------|
/// | `positional` | preference for slow, structural play           |
/// | `tactical`   | preference for concrete calculation            |
/// | `risk`       | willingness to enter unbalanced positions      |
/// | `attack`     | tendency to play against the enemy king        |
/// | `endgame`    | willingness to simplify into technical endings |
///
/// # Example
///
/// ```
/// use sparring_core::StyleVector;
///
/// let style = StyleVector::new(0.8, 0.2, 0.2, 0.4, 0.9);
/// assert_eq!(style.describe(), "highly positional, risk-averse, endgame specialist");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawStyleVector")]
pub struct StyleVector {
    positional: f32,
    tactical: f32,
    risk: f32,
    attack: f32,
    endgame: f32,
}

#[derive(Deserialize)]
struct RawStyleVector {
    positional: f32,
    tactical: f32,
    risk: f32,
    attack: f32,
    endgame: f32,
}

impl From<RawStyleVector> for StyleVector {
    fn from(raw: RawStyleVector) -> Self {
        Self::new(
            raw.positional,
            raw.tactical,
            raw.risk,
            raw.attack,
            raw.endgame,
        )
    }
}

impl Default for StyleVector {
    fn default() -> Self {
        Self::BALANCED
    }
}

fn clamp_weight(name: &str, value: f32) -> f32 {
    if value.is_nan() {
        log::debug!("style weight {name} is NaN, using 0.0");
        return 0.0;
    }
    if !(0.0..=1.0).contains(&value) {
        log::debug!("style weight {name}={value} clamped into 0.0..=1.0");
    }
    value.clamp(0.0, 1.0)
}

impl StyleVector {
    /// A style with every weight at 0.5.
    pub const BALANCED: Self = Self {
        positional: 0.5,
        tactical: 0.5,
        risk: 0.5,
        attack: 0.5,
        endgame: 0.5,
    };

    /// Creates a style vector, clamping each weight to \[0.0, 1.0\].
    #[must_use]
    pub fn new(positional: f32, tactical: f32, risk: f32, attack: f32, endgame: f32) -> Self {
        Self {
            positional: clamp_weight("positional", positional),
            tactical: clamp_weight("tactical", tactical),
            risk: clamp_weight("risk", risk),
            attack: clamp_weight("attack", attack),
            endgame: clamp_weight("endgame", endgame),
        }
    }

    #[must_use]
    pub const fn positional(&self) -> f32 {
        self.positional
    }

    #[must_use]
    pub const fn tactical(&self) -> f32 {
        self.tactical
    }

    /// Risk tolerance.
    #[must_use]
    pub const fn risk(&self) -> f32 {
        self.risk
    }

    #[must_use]
    pub const fn attack(&self) -> f32 {
        self.attack
    }

    #[must_use]
    pub const fn endgame(&self) -> f32 {
        self.endgame
    }

    /// Returns the weights in declaration order.
    #[must_use]
    pub const fn as_array(&self) -> [f32; 5] {
        [
            self.positional,
            self.tactical,
            self.risk,
            self.attack,
            self.endgame,
        ]
    }

    /// Returns `true` when the tactical weight strictly exceeds the positional weight.
    #[must_use]
    pub fn is_tactically_dominant(&self) -> bool {
        self.tactical > self.positional
    }

    /// Human-readable descriptors for the notable traits of this style.
    ///
    /// Returns an empty list for a style without any pronounced trait.
    #[must_use]
    pub fn descriptors(&self) -> Vec<&'static str> {
        let mut descriptors = vec![];
        if self.positional > 0.7 {
            descriptors.push("highly positional");
        } else if self.positional > 0.5 {
            descriptors.push("leans positional");
        }
        if self.tactical > 0.7 {
            descriptors.push("highly tactical");
        } else if self.tactical > 0.5 {
            descriptors.push("leans tactical");
        }
        if self.risk > 0.7 {
            descriptors.push("risk-seeking");
        } else if self.risk < 0.3 {
            descriptors.push("risk-averse");
        }
        if self.attack > 0.7 {
            descriptors.push("aggressive attacker");
        }
        if self.endgame > 0.7 {
            descriptors.push("endgame specialist");
        }
        descriptors
    }

    /// Joins [`descriptors`](Self::descriptors), or returns `"balanced"` if there are none.
    #[must_use]
    pub fn describe(&self) -> String {
        let descriptors = self.descriptors();
        if descriptors.is_empty() {
            "balanced".to_owned()
        } else {
            descriptors.join(", ")
        }
    }

    /// Style match score in 0..=100 (100 means identical weights).
    ///
    /// ```text
    /// similarity = round(100 × mean(1 − |aᵢ − bᵢ|))
    /// ```
    #[must_use]
    pub fn similarity(&self, other: &Self) -> u8 {
        let total: f32 = self
            .as_array()
            .iter()
            .zip(other.as_array())
            .map(|(a, b)| 1.0 - (a - b).abs())
            .sum();
        #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let score = (total / 5.0 * 100.0).round().clamp(0.0, 100.0) as u8;
        score
    }
}

/// Style family of an opponent profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleId {
    Positional,
    Tactical,
    Solid,
    Technical,
}

impl StyleId {
    pub const ALL: [Self; 4] = [
        Self::Positional,
        Self::Tactical,
        Self::Solid,
        Self::Technical,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positional => "positional",
            Self::Tactical => "tactical",
            Self::Solid => "solid",
            Self::Technical => "technical",
        }
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseError::UnknownStyle {
                value: s.to_owned(),
            })
    }
}
