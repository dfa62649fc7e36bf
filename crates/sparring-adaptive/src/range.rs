use sparring_core::{MAX_TUNABLE_RATING, MIN_TUNABLE_RATING, Rating, RatingRange};

const BAND_HALF_WIDTH: Rating = 200;
const TARGET_WIN_RATE: f32 = 0.5;
const SHIFT_PER_WIN_RATE: f32 = 200.0;

/// Rating band a learner should be practicing against.
///
/// A ±200 band around `rating`, shifted away from the learner's result: a learner
/// winning more than half their games gets a band lowered by
/// `(win_rate - 0.5) × 200`, a learner losing most gets it raised. Without games the
/// win rate is taken as 0.5. Both ends stay within 800..=2800.
///
/// ```
/// use sparring_adaptive::optimal_rating_range;
/// use sparring_core::RatingRange;
///
/// assert_eq!(optimal_rating_range(1500, 0, 0), RatingRange::new(1300, 1700));
/// assert_eq!(optimal_rating_range(1500, 10, 8), RatingRange::new(1240, 1640));
/// ```
#[must_use]
#[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn optimal_rating_range(rating: Rating, games_played: u32, games_won: u32) -> RatingRange {
    let rating = RatingRange::TUNABLE.clamp(rating);
    let win_rate = if games_played == 0 {
        TARGET_WIN_RATE
    } else {
        games_won.min(games_played) as f32 / games_played as f32
    };
    let shift = (win_rate - TARGET_WIN_RATE) * SHIFT_PER_WIN_RATE;

    let shifted = |bound: Rating| {
        let bound = bound.clamp(MIN_TUNABLE_RATING, MAX_TUNABLE_RATING);
        ((bound as f32 - shift).round() as Rating).clamp(MIN_TUNABLE_RATING, MAX_TUNABLE_RATING)
    };
    RatingRange::new(
        shifted(rating - BAND_HALF_WIDTH),
        shifted(rating + BAND_HALF_WIDTH),
    )
}
