use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{CatalogError, ParseError, Rating, RatingRange, StyleId, StyleVector};

/// Reference data describing one sparring opponent.
///
/// Profiles are owned by an external catalog and never mutated by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpponentProfile {
    /// Stable identifier, e.g. `magnus_carlsen`.
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub description: String,
    /// Nominal rating of the player being imitated.
    pub rating: Rating,
    pub style: StyleId,
    pub style_vector: StyleVector,
    /// Ratings this opponent can be tuned to.
    pub rating_range: RatingRange,
    pub characteristics: Vec<String>,
}

impl OpponentProfile {
    /// Resolves the rating to tune this opponent for.
    ///
    /// Uses `requested` when given, otherwise the nominal rating, and clamps the result
    /// into [`rating_range`](Self::rating_range).
    #[must_use]
    pub fn target_rating(&self, requested: Option<Rating>) -> Rating {
        self.rating_range.clamp(requested.unwrap_or(self.rating))
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.id.trim().is_empty() || self.name.trim().is_empty() {
            return Err(CatalogError::MissingIdentity {
                id: self.id.clone(),
            });
        }
        Ok(())
    }
}

/// Validated, read-only collection of opponent profiles.
///
/// # Example
///
/// ```
/// use sparring_core::{ProfileCatalog, StyleId};
///
/// let catalog = ProfileCatalog::builtin();
/// assert_eq!(catalog.profiles().len(), 4);
///
/// let tactical = catalog.by_style(StyleId::Tactical).collect::<Vec<_>>();
/// assert_eq!(tactical[0].id, "garry_kasparov");
///
/// assert!(catalog.get("bobby_fischer").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProfileCatalog {
    profiles: Vec<OpponentProfile>,
}

impl ProfileCatalog {
    /// Builds a catalog from external records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if a profile lacks an id or name, or two profiles share
    /// an id.
    pub fn new(profiles: Vec<OpponentProfile>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for profile in &profiles {
            profile.validate()?;
            if !seen.insert(profile.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: profile.id.clone(),
                });
            }
        }
        Ok(Self { profiles })
    }

    /// The four reference opponents shipped with the engine.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            profiles: builtin_profiles(),
        }
    }

    #[must_use]
    pub fn profiles(&self) -> &[OpponentProfile] {
        &self.profiles
    }

    /// Looks up a profile by id.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownProfile`] if no profile has this id.
    pub fn get(&self, id: &str) -> Result<&OpponentProfile, ParseError> {
        self.profiles
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| ParseError::UnknownProfile { id: id.to_owned() })
    }

    pub fn by_style(&self, style: StyleId) -> impl Iterator<Item = &OpponentProfile> {
        self.profiles.iter().filter(move |p| p.style == style)
    }

    /// Profiles whose supported range contains `rating`.
    pub fn available_for(&self, rating: Rating) -> impl Iterator<Item = &OpponentProfile> {
        self.profiles
            .iter()
            .filter(move |p| p.rating_range.contains(rating))
    }

    /// Profiles available at `rating`, preferring those of `preferred` style.
    ///
    /// Falls back to every available profile when none matches the preferred style.
    #[must_use]
    pub fn recommended(&self, rating: Rating, preferred: Option<StyleId>) -> Vec<&OpponentProfile> {
        let available = self.available_for(rating).collect::<Vec<_>>();
        if let Some(style) = preferred {
            let same_style = available
                .iter()
                .copied()
                .filter(|p| p.style == style)
                .collect::<Vec<_>>();
            if !same_style.is_empty() {
                return same_style;
            }
        }
        available
    }
}

impl<'de> Deserialize<'de> for ProfileCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let profiles = Vec::<OpponentProfile>::deserialize(deserializer)?;
        Self::new(profiles).map_err(serde::de::Error::custom)
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|&s| s.to_owned()).collect()
}

fn builtin_profiles() -> Vec<OpponentProfile> {
    vec![
        OpponentProfile {
            id: "magnus_carlsen".to_owned(),
            name: "Magnus Carlsen".to_owned(),
            display_name: "Carlsen".to_owned(),
            description: "Solid positional player who accumulates small advantages; \
                          known for patience, precision and endgame technique."
                .to_owned(),
            rating: 2850,
            style: StyleId::Positional,
            style_vector: StyleVector::new(0.8, 0.2, 0.3, 0.4, 0.9),
            rating_range: RatingRange::new(800, 2800),
            characteristics: strings(&[
                "accumulates small advantages",
                "refined endgame technique",
                "waits patiently for mistakes",
                "precise calculation",
                "solid defence",
            ]),
        },
        OpponentProfile {
            id: "garry_kasparov".to_owned(),
            name: "Garry Kasparov".to_owned(),
            display_name: "Kasparov".to_owned(),
            description: "Attacking tactician who thrives in complex calculation; \
                          known for aggression, creativity and tactical vision."
                .to_owned(),
            rating: 2850,
            style: StyleId::Tactical,
            style_vector: StyleVector::new(0.4, 0.6, 0.7, 0.9, 0.5),
            rating_range: RatingRange::new(1000, 2800),
            characteristics: strings(&[
                "highly aggressive",
                "sharp tactical combinations",
                "creates complex positions",
                "psychological pressure",
                "opening innovator",
            ]),
        },
        OpponentProfile {
            id: "fabiano_caruana".to_owned(),
            name: "Fabiano Caruana".to_owned(),
            display_name: "Caruana".to_owned(),
            description: "Modern all-rounder with deep opening preparation; \
                          known for flexibility and thorough preparation."
                .to_owned(),
            rating: 2820,
            style: StyleId::Solid,
            style_vector: StyleVector::new(0.6, 0.4, 0.4, 0.6, 0.7),
            rating_range: RatingRange::new(900, 2800),
            characteristics: strings(&[
                "deep opening preparation",
                "strong positional understanding",
                "universal player",
                "adapts to different styles",
                "accurate calculation",
            ]),
        },
        OpponentProfile {
            id: "ding_liren".to_owned(),
            name: "Ding Liren".to_owned(),
            display_name: "Ding".to_owned(),
            description: "Precise technician with excellent calculation and endgame skill; \
                          known for composure under pressure."
                .to_owned(),
            rating: 2810,
            style: StyleId::Technical,
            style_vector: StyleVector::new(0.7, 0.3, 0.2, 0.5, 0.8),
            rating_range: RatingRange::new(800, 2800),
            characteristics: strings(&[
                "extremely precise calculation",
                "excellent endgame technique",
                "calm under pressure",
                "tight defence",
                "skilful transitions",
            ]),
        },
    ]
}
