//! Adaptive difficulty: keeping a sparring opponent at the learner's level.
//!
//! The [`AdaptiveController`] consumes the stream of [`MatchOutcome`]s of one training
//! session and nudges the opponent's target rating up when the learner keeps winning
//! and down when they keep losing.
//!
//! # State Machine
//!
//! ```text
//! Idle ──first outcome──▶ Accumulating ──consistent signal──▶ Adjusting
//!  ▲                          ▲                                   │
//!  │                          └──── apply one delta, clear window ┘
//!  └──── reset_session (from any phase)
//! ```
//!
//! Once the [`OutcomeWindow`] holds at least `min_games_for_adjustment` outcomes, each
//! new outcome is evaluated:
//!
//! 1. Draw ratio ≥ `draw_threshold`: hold ([`RatingUpdate::Held`]).
//! 2. Win ratio ≥ `win_threshold`: candidate [`Direction::Up`].
//! 3. Loss ratio ≥ `loss_threshold`: candidate [`Direction::Down`].
//! 4. The candidate is applied only if the window's consistency for that direction
//!    (the share of outcomes not opposing it) reaches `consistency_threshold`;
//!    otherwise it is reported as [`RatingUpdate::Suppressed`].
//!
//! An adjustment moves the rating by exactly [`AdaptiveSettings::delta`] points, clamps
//! it into `[min_rating, max_rating]`, and clears the window so the next decision is
//! based on games played against the new strength.
//!
//! # Concurrency
//!
//! A controller belongs to a single session. [`AdaptiveController::record_outcome`]
//! takes `&mut self`; outcomes must be submitted in the order the games finished.
//!
//! [`MatchOutcome`]: sparring_core::MatchOutcome

pub use self::{controller::*, range::*, settings::*, window::*};

mod controller;
mod range;
mod settings;
mod window;
