//! Engine tuning: turning an opponent's playing style into UCI engine settings.
//!
//! This crate implements the two pure stages between an opponent profile and the
//! external chess-engine process:
//!
//! 1. **Style-to-Config Mapping** ([`mapper`]) - Maps a [`StyleVector`], a target rating
//!    and a [`GamePhase`] to an [`EngineConfig`] (skill level, contempt, search depth,
//!    move time and resource options).
//!
//! 2. **Command Encoding** ([`uci`]) - Renders an [`EngineConfig`] as the ordered list of
//!    UCI commands to send to the engine.
//!
//! # Architecture
//!
//! ```text
//! OpponentProfile (style vector, rating range)
//!     ↓ mapper::config_for_profile / mapper::map_config
//! EngineConfig (bounded integers)
//!     ↓ uci::encode
//! ["setoption name Skill Level value 12", ..., "go depth 14 movetime 2400"]
//! ```
//!
//! # Design Principles
//!
//! ## Total Functions
//!
//! Mapping never fails on numeric input. Ratings outside the calibrated domain
//! (800..=2800) and weights outside \[0, 1\] are clamped; every field of the resulting
//! [`EngineConfig`] is guaranteed to lie within its documented bounds.
//!
//! ## Ordering Invariants Over Constants
//!
//! The exact per-phase offsets are tuning choices. What callers may rely on is their
//! ordering:
//!
//! - `contempt(opening) > contempt(middlegame) > contempt(endgame)`
//! - `depth(endgame) >= depth(opening)`
//! - `move_time(endgame) >= move_time(middlegame)`
//! - skill level, depth and move time are non-decreasing in rating
//!
//! ## Deterministic Encoding
//!
//! Encoding the same configuration twice yields byte-identical commands in the same
//! order, so command streams can be snapshot-tested and audited.
//!
//! # Example
//!
//! ```
//! use sparring_core::{GamePhase, ProfileCatalog};
//! use sparring_tuning::{mapper, uci};
//!
//! let catalog = ProfileCatalog::builtin();
//! let kasparov = catalog.get("garry_kasparov").unwrap();
//!
//! let config = mapper::config_for_profile(kasparov, Some(1650), GamePhase::Opening);
//! let commands = uci::encode(&config);
//!
//! assert_eq!(commands[0], format!("setoption name Skill Level value {}", config.skill_level()));
//! assert!(commands.last().unwrap().starts_with("go depth "));
//! ```
//!
//! [`StyleVector`]: sparring_core::StyleVector
//! [`GamePhase`]: sparring_core::GamePhase

pub use self::engine_config::EngineConfig;

mod engine_config;
pub mod mapper;
pub mod uci;
