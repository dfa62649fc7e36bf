use serde::{Deserialize, Serialize};

use crate::{Priority, ProgressSnapshot};

/// Adaptation scores below this mark an opponent style the learner struggles with.
pub const LOW_ADAPTATION_THRESHOLD: f32 = 50.0;

const HIGH_PRIORITY_ADAPTATION: f32 = 40.0;
const HIGH_PRIORITY_COUNT: u32 = 5;

/// Kind given to weaknesses derived from low adaptation scores.
pub const STYLE_ADAPTATION_KIND: &str = "style-adaptation";

/// One weakness in a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weakness {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub priority: Priority,
    /// Occurrences recorded; 0 for derived weaknesses.
    pub count: u32,
    /// Opponent whose style the learner adapts poorly to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affected_style: Option<String>,
}

impl Weakness {
    #[must_use]
    pub fn is_style_adaptation(&self) -> bool {
        self.affected_style.is_some()
    }
}

/// Weaknesses of a report, with an explicit marker for "nothing notable".
///
/// Serialized as `{"status": "none-found"}` or
/// `{"status": "found", "weaknesses": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "weaknesses", rename_all = "kebab-case")]
pub enum WeaknessList {
    NoneFound,
    Found(Vec<Weakness>),
}

impl From<Vec<Weakness>> for WeaknessList {
    fn from(weaknesses: Vec<Weakness>) -> Self {
        if weaknesses.is_empty() {
            Self::NoneFound
        } else {
            Self::Found(weaknesses)
        }
    }
}

impl WeaknessList {
    #[must_use]
    pub fn as_slice(&self) -> &[Weakness] {
        match self {
            Self::NoneFound => &[],
            Self::Found(weaknesses) => weaknesses,
        }
    }

    #[must_use]
    pub fn is_none_found(&self) -> bool {
        matches!(self, Self::NoneFound)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Weakness> {
        self.as_slice().iter()
    }
}

/// Opponents with a low adaptation score, weakest first (ties by id).
pub(crate) fn low_adaptation(progress: &ProgressSnapshot) -> Vec<(&str, f32)> {
    let mut weak = progress
        .adaptation_scores()
        .filter(|&(_, score)| score < LOW_ADAPTATION_THRESHOLD)
        .collect::<Vec<_>>();
    weak.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)));
    weak
}

/// Weaknesses ordered by priority, most urgent first.
///
/// Within one priority, derived style weaknesses come first (weakest score first),
/// followed by the recorded ones in input order.
#[must_use]
pub fn analyze_weaknesses(progress: &ProgressSnapshot) -> WeaknessList {
    let derived = low_adaptation(progress).into_iter().map(|(id, score)| Weakness {
        kind: STYLE_ADAPTATION_KIND.to_owned(),
        description: format!("low adaptation to the {id} style ({score}%)"),
        priority: if score < HIGH_PRIORITY_ADAPTATION {
            Priority::High
        } else {
            Priority::Medium
        },
        count: 0,
        affected_style: Some(id.to_owned()),
    });
    let recorded = progress.weaknesses.iter().map(|record| Weakness {
        kind: record.kind.clone(),
        description: record.description.clone(),
        priority: if record.count >= HIGH_PRIORITY_COUNT {
            Priority::High
        } else {
            Priority::Medium
        },
        count: record.count,
        affected_style: None,
    });
    let mut weaknesses = derived.chain(recorded).collect::<Vec<_>>();
    weaknesses.sort_by_key(|w| w.priority);
    weaknesses.into()
}
