//! Style-to-config mapping: deriving engine settings from a playing style.
//!
//! Each [`EngineConfig`] field is computed by an independent pure function so that it
//! can be inspected (and tested) on its own. [`map_config`] combines them.
//!
//! # Formulas
//!
//! Ratings are first clamped to the calibrated domain `r ∈ [800, 2800]`.
//!
//! ```text
//! skill_level = round((r − 800) / 2000 × 20)
//! contempt    = round((1 − risk) × 50 + contempt_offset(phase))
//! depth       = round(r / 150 + 3·tactical + 2·positional + 2·risk + position_modifier(phase))
//! move_time   = round((100 + log10(r / 100) × 2000) × time_multiplier(phase) × style_multiplier)
//! ```
//!
//! | phase      | contempt offset | position modifier | time multiplier |
//! |------------|-----------------|-------------------|-----------------|
//! | opening    | +10             | −1                | 0.8             |
//! | middlegame | 0               | 0                 | 1.0             |
//! | endgame    | −20             | +2                | 1.2             |
//!
//! The style multiplier is `1 + 0.2·positional + 0.3·tactical`, plus 0.1 when the
//! tactical weight dominates the positional weight. Results are clamped into the
//! [`EngineConfig`] bounds.
//!
//! The opening is played more combatively and faster (theory is well known), the
//! endgame deeper, slower and with more willingness to accept a draw.

use sparring_core::{GamePhase, OpponentProfile, Rating, RatingRange, StyleVector};

use crate::EngineConfig;

const RATING_SPAN: f32 = 2000.0;
const MAX_SKILL_LEVEL: f32 = 20.0;

const MAX_BASE_CONTEMPT: f32 = 50.0;

const RATING_PER_PLY: f32 = 150.0;
const TACTICAL_DEPTH_BONUS: f32 = 3.0;
const POSITIONAL_DEPTH_BONUS: f32 = 2.0;
const RISK_DEPTH_BONUS: f32 = 2.0;

const POSITIONAL_TIME_BONUS: f32 = 0.2;
const TACTICAL_TIME_BONUS: f32 = 0.3;
const TACTICAL_DOMINANCE_TIME_BONUS: f32 = 0.1;

const THREADS_RATING_CUTOFF: Rating = 2000;
const HASH_RATING_CUTOFF: Rating = 1800;

#[expect(clippy::cast_precision_loss)]
fn tunable_rating(rating: Rating) -> f32 {
    RatingRange::TUNABLE.clamp(rating) as f32
}

#[expect(clippy::cast_possible_truncation)]
fn round_to_i32(value: f32) -> i32 {
    value.round() as i32
}

/// Depth offset applied per phase.
///
/// Pure lookup: the same phase always yields the same value.
#[must_use]
pub const fn position_modifier(phase: GamePhase) -> i32 {
    match phase {
        GamePhase::Opening => -1,
        GamePhase::Middlegame => 0,
        GamePhase::Endgame => 2,
    }
}

const fn contempt_offset(phase: GamePhase) -> f32 {
    match phase {
        GamePhase::Opening => 10.0,
        GamePhase::Middlegame => 0.0,
        GamePhase::Endgame => -20.0,
    }
}

const fn time_multiplier(phase: GamePhase) -> f32 {
    match phase {
        GamePhase::Opening => 0.8,
        GamePhase::Middlegame => 1.0,
        GamePhase::Endgame => 1.2,
    }
}

/// Engine skill level in 0..=20, linear in rating over 800..=2800.
#[must_use]
pub fn skill_level(rating: Rating) -> u8 {
    let r = tunable_rating(rating);
    let level = round_to_i32((r - 800.0) / RATING_SPAN * MAX_SKILL_LEVEL);
    u8::try_from(level.clamp(0, 20)).unwrap_or(0)
}

/// Contempt in -100..=100 for the given risk tolerance and phase.
///
/// Full risk tolerance gives a middlegame contempt of 0, zero risk tolerance gives 50.
#[must_use]
pub fn contempt(risk: f32, phase: GamePhase) -> i32 {
    let risk = if risk.is_nan() { 0.0 } else { risk.clamp(0.0, 1.0) };
    let base = (1.0 - risk) * MAX_BASE_CONTEMPT;
    round_to_i32(base + contempt_offset(phase)).clamp(-100, 100)
}

/// Search depth in 1..=25.
#[must_use]
pub fn search_depth(rating: Rating, style: &StyleVector, phase: GamePhase) -> u8 {
    let r = tunable_rating(rating);
    let depth = r / RATING_PER_PLY
        + style.tactical() * TACTICAL_DEPTH_BONUS
        + style.positional() * POSITIONAL_DEPTH_BONUS
        + style.risk() * RISK_DEPTH_BONUS;
    let depth = round_to_i32(depth) + position_modifier(phase);
    u8::try_from(depth.clamp(1, 25)).unwrap_or(1)
}

/// Thinking time per move in 100..=10000 milliseconds.
#[must_use]
pub fn move_time_ms(rating: Rating, style: &StyleVector, phase: GamePhase) -> u32 {
    let r = tunable_rating(rating);
    let base = 100.0 + (r / 100.0).log10() * 2000.0;
    let mut style_multiplier = 1.0
        + style.positional() * POSITIONAL_TIME_BONUS
        + style.tactical() * TACTICAL_TIME_BONUS;
    if style.is_tactically_dominant() {
        style_multiplier += TACTICAL_DOMINANCE_TIME_BONUS;
    }
    let time = round_to_i32(base * time_multiplier(phase) * style_multiplier);
    u32::try_from(time.clamp(100, 10_000)).unwrap_or(100)
}

/// Engine threads: stronger opponents get more.
#[must_use]
pub fn threads(rating: Rating) -> u8 {
    if RatingRange::TUNABLE.clamp(rating) > THREADS_RATING_CUTOFF {
        4
    } else {
        2
    }
}

/// Transposition table size in megabytes.
#[must_use]
pub fn hash_mb(rating: Rating) -> u32 {
    if RatingRange::TUNABLE.clamp(rating) > HASH_RATING_CUTOFF {
        256
    } else {
        128
    }
}

/// Maps a style, a target rating and a game phase to a complete engine configuration.
///
/// Never fails: out-of-domain input is clamped.
///
/// # Example
///
/// ```
/// use sparring_core::{GamePhase, StyleVector};
/// use sparring_tuning::mapper::map_config;
///
/// let style = StyleVector::new(0.8, 0.2, 1.0, 0.4, 0.9);
/// let config = map_config(&style, 1800, GamePhase::Middlegame);
/// assert_eq!(config.skill_level(), 10);
/// assert_eq!(config.contempt(), 0);
/// ```
#[must_use]
pub fn map_config(style: &StyleVector, rating: Rating, phase: GamePhase) -> EngineConfig {
    EngineConfig::new(
        skill_level(rating),
        contempt(style.risk(), phase),
        search_depth(rating, style, phase),
        move_time_ms(rating, style, phase),
        threads(rating),
        hash_mb(rating),
    )
}

/// Maps an opponent profile to an engine configuration.
///
/// The rating is `rating` when given (e.g. the current adaptive rating) or the
/// profile's nominal rating otherwise, clamped into the profile's supported range.
#[must_use]
pub fn config_for_profile(
    profile: &OpponentProfile,
    rating: Option<Rating>,
    phase: GamePhase,
) -> EngineConfig {
    let rating = profile.target_rating(rating);
    log::debug!(
        "configuring {} at rating {rating} for the {phase}",
        profile.id
    );
    map_config(&profile.style_vector, rating, phase)
}

#[cfg(test)]
mod tests {
    use sparring_core::ProfileCatalog;

    use super::*;

    fn styles() -> Vec<StyleVector> {
        let mut styles = ProfileCatalog::builtin()
            .profiles()
            .iter()
            .map(|p| p.style_vector)
            .collect::<Vec<_>>();
        styles.push(StyleVector::new(0.0, 0.0, 0.0, 0.0, 0.0));
        styles.push(StyleVector::new(1.0, 1.0, 1.0, 1.0, 1.0));
        styles.push(StyleVector::new(0.1, 0.9, 0.5, 0.5, 0.5));
        styles
    }

    #[test]
    fn test_skill_level_bounds_and_monotonic() {
        let mut prev = 0;
        for rating in 800..=2800 {
            let level = skill_level(rating);
            assert!(level <= 20);
            assert!(level >= prev, "skill level decreased at {rating}");
            prev = level;
        }
        assert_eq!(skill_level(800), 0);
        assert_eq!(skill_level(1800), 10);
        assert_eq!(skill_level(2800), 20);
    }

    #[test]
    fn test_skill_level_clamps_out_of_domain() {
        assert_eq!(skill_level(-1000), 0);
        assert_eq!(skill_level(0), 0);
        assert_eq!(skill_level(3500), 20);
        assert_eq!(skill_level(Rating::MAX), 20);
    }

    #[test]
    fn test_contempt_extremes() {
        assert_eq!(contempt(1.0, GamePhase::Middlegame), 0);
        assert_eq!(contempt(0.0, GamePhase::Middlegame), 50);
        assert_eq!(contempt(5.0, GamePhase::Middlegame), 0);
        assert_eq!(contempt(f32::NAN, GamePhase::Middlegame), 50);
    }

    #[test]
    fn test_contempt_phase_ordering() {
        for step in 0..=20 {
            #[expect(clippy::cast_precision_loss)]
            let risk = step as f32 / 20.0;
            let opening = contempt(risk, GamePhase::Opening);
            let middlegame = contempt(risk, GamePhase::Middlegame);
            let endgame = contempt(risk, GamePhase::Endgame);
            assert!(opening > middlegame, "risk={risk}");
            assert!(middlegame > endgame, "risk={risk}");
            for value in [opening, middlegame, endgame] {
                assert!((-100..=100).contains(&value));
            }
        }
    }

    #[test]
    fn test_depth_endgame_at_least_opening() {
        for style in styles() {
            for rating in (0..=3200).step_by(50) {
                let opening = search_depth(rating, &style, GamePhase::Opening);
                let endgame = search_depth(rating, &style, GamePhase::Endgame);
                assert!(endgame >= opening, "rating={rating} style={style:?}");
                assert!((1..=25).contains(&endgame));
                assert!((1..=25).contains(&opening));
            }
        }
    }

    #[test]
    fn test_depth_grows_with_rating() {
        let style = StyleVector::BALANCED;
        let low = search_depth(800, &style, GamePhase::Middlegame);
        let high = search_depth(2800, &style, GamePhase::Middlegame);
        assert!(high > low);
    }

    #[test]
    fn test_move_time_monotonic_and_bounded() {
        for style in styles() {
            for phase in GamePhase::ALL {
                let mut prev = 0;
                for rating in (600..=3000).step_by(10) {
                    let time = move_time_ms(rating, &style, phase);
                    assert!((100..=10_000).contains(&time));
                    assert!(time >= prev, "move time decreased at {rating}");
                    prev = time;
                }
            }
        }
    }

    #[test]
    fn test_move_time_endgame_at_least_middlegame() {
        for style in styles() {
            for rating in (800..=2800).step_by(100) {
                let middlegame = move_time_ms(rating, &style, GamePhase::Middlegame);
                let endgame = move_time_ms(rating, &style, GamePhase::Endgame);
                assert!(endgame >= middlegame);
            }
        }
    }

    #[test]
    fn test_tactical_dominance_takes_longer() {
        let tactical = StyleVector::new(0.3, 0.7, 0.5, 0.5, 0.5);
        let positional = StyleVector::new(0.7, 0.3, 0.5, 0.5, 0.5);
        assert!(
            move_time_ms(1500, &tactical, GamePhase::Middlegame)
                > move_time_ms(1500, &positional, GamePhase::Middlegame)
        );
    }

    #[test]
    fn test_position_modifier_is_deterministic_and_distinct() {
        for phase in GamePhase::ALL {
            assert_eq!(position_modifier(phase), position_modifier(phase));
        }
        assert_ne!(
            position_modifier(GamePhase::Opening),
            position_modifier(GamePhase::Endgame)
        );
    }

    #[test]
    fn test_resource_options() {
        assert_eq!(threads(1500), 2);
        assert_eq!(threads(2100), 4);
        assert_eq!(hash_mb(1800), 128);
        assert_eq!(hash_mb(1801), 256);
    }

    #[test]
    fn test_config_for_profile_uses_profile_range() {
        let catalog = ProfileCatalog::builtin();
        let kasparov = catalog.get("garry_kasparov").unwrap();
        let low = config_for_profile(kasparov, Some(500), GamePhase::Middlegame);
        assert_eq!(low, map_config(&kasparov.style_vector, 1000, GamePhase::Middlegame));
        let nominal = config_for_profile(kasparov, None, GamePhase::Middlegame);
        assert_eq!(nominal.skill_level(), 20);
    }
}
