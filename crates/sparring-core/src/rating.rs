use serde::{Deserialize, Serialize};

/// Elo-style rating.
///
/// Ratings are signed so that rating deltas and differences never underflow.
pub type Rating = i32;

/// Lowest rating the engine tuning is calibrated for.
pub const MIN_TUNABLE_RATING: Rating = 800;

/// Highest rating the engine tuning is calibrated for.
pub const MAX_TUNABLE_RATING: Rating = 2800;

/// Inclusive rating bounds.
///
/// Serialized as a two-element array `[min, max]`.
///
/// # Example
///
/// ```
/// use sparring_core::RatingRange;
///
/// let range = RatingRange::new(1000, 2000);
/// assert_eq!(range.clamp(700), 1000);
/// assert_eq!(range.clamp(1500), 1500);
/// assert!(!range.contains(2100));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(Rating, Rating)", into = "(Rating, Rating)")]
pub struct RatingRange {
    min: Rating,
    max: Rating,
}

impl Default for RatingRange {
    fn default() -> Self {
        Self::TUNABLE
    }
}

impl RatingRange {
    /// The range the style-to-config mapping is calibrated for.
    pub const TUNABLE: Self = Self {
        min: MIN_TUNABLE_RATING,
        max: MAX_TUNABLE_RATING,
    };

    /// Creates a range from two bounds, swapping them if given in reverse order.
    #[must_use]
    pub const fn new(a: Rating, b: Rating) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    #[must_use]
    pub const fn min(&self) -> Rating {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> Rating {
        self.max
    }

    #[must_use]
    pub const fn contains(&self, rating: Rating) -> bool {
        self.min <= rating && rating <= self.max
    }

    /// Clamps `rating` into the range, logging when the value had to move.
    #[must_use]
    pub fn clamp(&self, rating: Rating) -> Rating {
        let clamped = rating.clamp(self.min, self.max);
        if clamped != rating {
            log::debug!(
                "rating {rating} clamped into {}..={} => {clamped}",
                self.min,
                self.max
            );
        }
        clamped
    }

    /// Returns the intersection of two ranges, or `None` if they do not overlap.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let min = Rating::max(self.min, other.min);
        let max = Rating::min(self.max, other.max);
        (min <= max).then_some(Self { min, max })
    }
}

impl From<(Rating, Rating)> for RatingRange {
    fn from((a, b): (Rating, Rating)) -> Self {
        Self::new(a, b)
    }
}

impl From<RatingRange> for (Rating, Rating) {
    fn from(range: RatingRange) -> Self {
        (range.min, range.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_bounds() {
        let range = RatingRange::new(2000, 1000);
        assert_eq!(range.min(), 1000);
        assert_eq!(range.max(), 2000);
    }

    #[test]
    fn test_clamp_inside_and_outside() {
        let range = RatingRange::TUNABLE;
        assert_eq!(range.clamp(-50), 800);
        assert_eq!(range.clamp(1200), 1200);
        assert_eq!(range.clamp(3500), 2800);
    }

    #[test]
    fn test_intersect() {
        let a = RatingRange::new(800, 1600);
        let b = RatingRange::new(1200, 2800);
        assert_eq!(a.intersect(&b), Some(RatingRange::new(1200, 1600)));
        assert_eq!(a.intersect(&RatingRange::new(1700, 1800)), None);
    }

    #[test]
    fn test_serializes_as_pair() {
        let range = RatingRange::new(900, 2800);
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, "[900,2800]");
        let back: RatingRange = serde_json::from_str("[2800,900]").unwrap();
        assert_eq!(back, range);
    }
}
