use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Tuning parameters for one engine session.
///
/// Every field is kept within its bounds; constructing a config with out-of-range
/// values clamps them. A config is never mutated after creation: derive a fresh one
/// from the [`mapper`](crate::mapper) whenever rating or phase change.
///
/// | field          | bounds       | sent as                          |
/// |----------------|--------------|----------------------------------|
/// | `skill_level`  | 0..=20       | `setoption name Skill Level`     |
/// | `contempt`     | -100..=100   | `setoption name Contempt`        |
/// | `threads`      | 1..=4        | `setoption name Threads`         |
/// | `hash_mb`      | 16..=1024    | `setoption name Hash`            |
/// | `depth`        | 1..=25       | `go depth`                       |
/// | `move_time_ms` | 100..=10000  | `go movetime`                    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawEngineConfig")]
pub struct EngineConfig {
    skill_level: u8,
    contempt: i32,
    depth: u8,
    move_time_ms: u32,
    threads: u8,
    hash_mb: u32,
}

/// Fields are read wide so that values outside the stored integer types still clamp.
#[derive(Deserialize)]
struct RawEngineConfig {
    skill_level: i64,
    contempt: i64,
    depth: i64,
    move_time_ms: i64,
    threads: i64,
    hash_mb: i64,
}

impl From<RawEngineConfig> for EngineConfig {
    fn from(raw: RawEngineConfig) -> Self {
        Self {
            skill_level: clamp_wide("skill_level", raw.skill_level, &Self::SKILL_LEVEL_RANGE),
            contempt: clamp_wide("contempt", raw.contempt, &Self::CONTEMPT_RANGE),
            depth: clamp_wide("depth", raw.depth, &Self::DEPTH_RANGE),
            move_time_ms: clamp_wide("move_time_ms", raw.move_time_ms, &Self::MOVE_TIME_MS_RANGE),
            threads: clamp_wide("threads", raw.threads, &Self::THREADS_RANGE),
            hash_mb: clamp_wide("hash_mb", raw.hash_mb, &Self::HASH_MB_RANGE),
        }
    }
}

impl EngineConfig {
    pub const SKILL_LEVEL_RANGE: RangeInclusive<u8> = 0..=20;
    pub const CONTEMPT_RANGE: RangeInclusive<i32> = -100..=100;
    pub const DEPTH_RANGE: RangeInclusive<u8> = 1..=25;
    pub const MOVE_TIME_MS_RANGE: RangeInclusive<u32> = 100..=10_000;
    pub const THREADS_RANGE: RangeInclusive<u8> = 1..=4;
    pub const HASH_MB_RANGE: RangeInclusive<u32> = 16..=1024;

    /// Creates a config, clamping each value into its bounds.
    #[must_use]
    pub fn new(
        skill_level: u8,
        contempt: i32,
        depth: u8,
        move_time_ms: u32,
        threads: u8,
        hash_mb: u32,
    ) -> Self {
        Self {
            skill_level: clamp_field("skill_level", skill_level, &Self::SKILL_LEVEL_RANGE),
            contempt: clamp_field("contempt", contempt, &Self::CONTEMPT_RANGE),
            depth: clamp_field("depth", depth, &Self::DEPTH_RANGE),
            move_time_ms: clamp_field("move_time_ms", move_time_ms, &Self::MOVE_TIME_MS_RANGE),
            threads: clamp_field("threads", threads, &Self::THREADS_RANGE),
            hash_mb: clamp_field("hash_mb", hash_mb, &Self::HASH_MB_RANGE),
        }
    }

    /// Engine skill level (0 is weakest, 20 is full strength).
    #[must_use]
    pub const fn skill_level(&self) -> u8 {
        self.skill_level
    }

    /// Draw aversion in centipawns; positive values avoid draws.
    #[must_use]
    pub const fn contempt(&self) -> i32 {
        self.contempt
    }

    /// Maximum search depth in plies.
    #[must_use]
    pub const fn depth(&self) -> u8 {
        self.depth
    }

    /// Time budget per move in milliseconds.
    #[must_use]
    pub const fn move_time_ms(&self) -> u32 {
        self.move_time_ms
    }

    #[must_use]
    pub const fn threads(&self) -> u8 {
        self.threads
    }

    /// Transposition table size in megabytes.
    #[must_use]
    pub const fn hash_mb(&self) -> u32 {
        self.hash_mb
    }
}

fn clamp_field<T>(name: &str, value: T, range: &RangeInclusive<T>) -> T
where
    T: Copy + Ord + std::fmt::Display,
{
    let clamped = value.clamp(*range.start(), *range.end());
    if clamped != value {
        log::debug!("engine config {name}={value} clamped to {clamped}");
    }
    clamped
}

fn clamp_wide<T>(name: &str, value: i64, range: &RangeInclusive<T>) -> T
where
    T: Copy + Into<i64> + TryFrom<i64>,
{
    let clamped = value.clamp((*range.start()).into(), (*range.end()).into());
    if clamped != value {
        log::debug!("engine config {name}={value} clamped to {clamped}");
    }
    T::try_from(clamped).unwrap_or(*range.start())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_every_field() {
        let config = EngineConfig::new(99, -500, 0, 50_000, 0, 1);
        assert_eq!(config.skill_level(), 20);
        assert_eq!(config.contempt(), -100);
        assert_eq!(config.depth(), 1);
        assert_eq!(config.move_time_ms(), 10_000);
        assert_eq!(config.threads(), 1);
        assert_eq!(config.hash_mb(), 16);
    }

    #[test]
    fn test_deserialize_clamps() {
        let json = r#"{"skill_level":30,"contempt":18,"depth":40,"move_time_ms":10,"threads":2,"hash_mb":128}"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config, EngineConfig::new(20, 18, 25, 100, 2, 128));
    }

    #[test]
    fn test_deserialize_clamps_beyond_field_type() {
        let json = r#"{"skill_level":300,"contempt":-70000,"depth":-3,"move_time_ms":-1,"threads":1000,"hash_mb":5000000000}"#;
        let config: EngineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config, EngineConfig::new(20, -100, 1, 100, 4, 1024));
    }

    #[test]
    fn test_serialize_field_names() {
        let config = EngineConfig::new(12, 18, 14, 1200, 2, 128);
        let value = serde_json::to_value(config).unwrap();
        assert_eq!(value["skill_level"], 12);
        assert_eq!(value["contempt"], 18);
        assert_eq!(value["depth"], 14);
        assert_eq!(value["move_time_ms"], 1200);
    }
}
