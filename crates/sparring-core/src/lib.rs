//! Data model shared by the sparring opponent engine.
//!
//! This crate defines the vocabulary every other crate in the workspace speaks:
//!
//! - [`StyleVector`] - Five clamped weights describing a playing personality
//! - [`StyleId`] - Closed set of style families used to key opponent profiles
//! - [`GamePhase`] - Opening, middlegame or endgame
//! - [`OpponentProfile`] / [`ProfileCatalog`] - Read-only opponent reference data
//! - [`MatchOutcome`] - Result of a finished game from the learner's perspective
//! - [`Rating`] / [`RatingRange`] - Elo-style ratings and inclusive bounds
//!
//! # Validation Policy
//!
//! Two kinds of bad input are treated differently:
//!
//! - **Out-of-range numbers** (weights outside \[0, 1\], ratings outside a range) are
//!   clamped silently. An opponent must always remain configurable.
//! - **Unknown identifiers** (a phase, style, outcome or profile id that does not exist)
//!   fail fast with a [`ParseError`]. Such values indicate an integration bug upstream.
//!
//! # Example
//!
//! ```
//! use sparring_core::{GamePhase, ProfileCatalog, StyleVector};
//!
//! let catalog = ProfileCatalog::builtin();
//! let carlsen = catalog.get("magnus_carlsen").unwrap();
//! assert!(carlsen.style_vector.endgame() > 0.8);
//!
//! let phase: GamePhase = "endgame".parse().unwrap();
//! assert_eq!(phase, GamePhase::Endgame);
//!
//! // Weights are clamped, never rejected
//! let wild = StyleVector::new(1.7, -0.2, 0.5, 0.5, 0.5);
//! assert_eq!(wild.positional(), 1.0);
//! assert_eq!(wild.tactical(), 0.0);
//! ```

pub use self::{outcome::*, phase::*, profile::*, rating::*, style::*};

mod outcome;
mod phase;
mod profile;
mod rating;
mod style;

/// Failure to interpret an identifier coming from outside the core.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseError {
    #[display("unknown game phase `{value}` (expected opening, middlegame or endgame)")]
    UnknownPhase { value: String },
    #[display("unknown style id `{value}` (expected positional, tactical, solid or technical)")]
    UnknownStyle { value: String },
    #[display("unknown match outcome `{value}` (expected win, draw or loss)")]
    UnknownOutcome { value: String },
    #[display("unknown opponent profile `{id}`")]
    UnknownProfile { id: String },
    #[display("malformed FEN `{fen}`: {reason}")]
    MalformedFen { fen: String, reason: &'static str },
}

/// Failure to assemble a profile catalog from external records.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CatalogError {
    #[display("duplicate opponent profile id `{id}`")]
    DuplicateId { id: String },
    #[display("opponent profile `{id}` has an empty id or name")]
    MissingIdentity { id: String },
}
