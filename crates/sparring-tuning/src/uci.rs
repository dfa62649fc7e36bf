//! UCI command encoding.
//!
//! A configuration is sent to the engine in two parts:
//!
//! - **Session options**, set once per game (or whenever the rating changes):
//!   `Skill Level`, `Contempt`, `Threads` and `Hash`, always in that order.
//! - **Search command**, sent before every engine move: `go depth D movetime T`.
//!
//! Encoding is a pure rendering of the config; no command carries a trailing newline
//! (the transport appends it).

use std::fmt;

use crate::EngineConfig;

pub const SKILL_LEVEL_OPTION: &str = "Skill Level";
pub const CONTEMPT_OPTION: &str = "Contempt";
pub const THREADS_OPTION: &str = "Threads";
pub const HASH_OPTION: &str = "Hash";

/// A single UCI command understood by the engine.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum UciCommand {
    #[display("setoption name {name} value {value}")]
    SetOption { name: &'static str, value: OptionValue },
    #[display("go depth {depth} movetime {movetime_ms}")]
    Go { depth: u8, movetime_ms: u32 },
}

/// Value of a `setoption` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionValue {
    Int(i64),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
        }
    }
}

impl UciCommand {
    fn set_option(name: &'static str, value: impl Into<i64>) -> Self {
        Self::SetOption {
            name,
            value: OptionValue::Int(value.into()),
        }
    }
}

/// Session options for `config` in their fixed order.
#[must_use]
pub fn session_options(config: &EngineConfig) -> [UciCommand; 4] {
    [
        UciCommand::set_option(SKILL_LEVEL_OPTION, config.skill_level()),
        UciCommand::set_option(CONTEMPT_OPTION, config.contempt()),
        UciCommand::set_option(THREADS_OPTION, config.threads()),
        UciCommand::set_option(HASH_OPTION, config.hash_mb()),
    ]
}

/// The per-move search command for `config`.
#[must_use]
pub fn search(config: &EngineConfig) -> UciCommand {
    UciCommand::Go {
        depth: config.depth(),
        movetime_ms: config.move_time_ms(),
    }
}

/// All commands for `config`: session options followed by the search command.
#[must_use]
pub fn commands(config: &EngineConfig) -> Vec<UciCommand> {
    let mut commands = session_options(config).to_vec();
    commands.push(search(config));
    commands
}

/// Renders all commands for `config` as text lines.
///
/// # Example
///
/// ```
/// use sparring_tuning::{EngineConfig, uci};
///
/// let config = EngineConfig::new(12, 18, 14, 1200, 2, 128);
/// assert_eq!(
///     uci::encode(&config),
///     [
///         "setoption name Skill Level value 12",
///         "setoption name Contempt value 18",
///         "setoption name Threads value 2",
///         "setoption name Hash value 128",
///         "go depth 14 movetime 1200",
///     ]
/// );
/// ```
#[must_use]
pub fn encode(config: &EngineConfig) -> Vec<String> {
    commands(config).iter().map(ToString::to_string).collect()
}

/// Renders only the session options.
#[must_use]
pub fn encode_session_options(config: &EngineConfig) -> Vec<String> {
    session_options(config)
        .iter()
        .map(ToString::to_string)
        .collect()
}

/// Renders only the search command.
#[must_use]
pub fn encode_search(config: &EngineConfig) -> String {
    search(config).to_string()
}

#[cfg(test)]
mod tests {
    use sparring_core::{GamePhase, ProfileCatalog};

    use super::*;
    use crate::mapper;

    #[test]
    fn test_encode_order_and_format() {
        let config = EngineConfig::new(0, -100, 1, 100, 1, 16);
        let lines = encode(&config);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "setoption name Skill Level value 0");
        assert_eq!(lines[1], "setoption name Contempt value -100");
        assert_eq!(lines[2], "setoption name Threads value 1");
        assert_eq!(lines[3], "setoption name Hash value 16");
        assert_eq!(lines[4], "go depth 1 movetime 100");
    }

    #[test]
    fn test_encode_is_idempotent() {
        let catalog = ProfileCatalog::builtin();
        for profile in catalog.profiles() {
            for phase in GamePhase::ALL {
                let config = mapper::config_for_profile(profile, Some(1650), phase);
                let first = encode(&config);
                assert!(!first.is_empty());
                assert_eq!(first, encode(&config));
                assert!(first.iter().all(|line| !line.ends_with('\n')));
            }
        }
    }

    #[test]
    fn test_split_encoding_matches_full() {
        let config = EngineConfig::new(7, 25, 9, 2000, 2, 128);
        let mut split = encode_session_options(&config);
        split.push(encode_search(&config));
        assert_eq!(split, encode(&config));
    }

    #[test]
    fn test_typed_commands() {
        let config = EngineConfig::new(7, 25, 9, 2000, 4, 256);
        assert_eq!(
            search(&config),
            UciCommand::Go {
                depth: 9,
                movetime_ms: 2000
            }
        );
        assert_eq!(
            session_options(&config)[3],
            UciCommand::SetOption {
                name: HASH_OPTION,
                value: OptionValue::Int(256)
            }
        );
    }
}
